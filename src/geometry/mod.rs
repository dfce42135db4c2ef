pub mod circle;
pub mod rectangle;
pub mod triangle;
