pub mod common_path;
pub mod interval;
pub mod reverse;
pub mod single_char;
