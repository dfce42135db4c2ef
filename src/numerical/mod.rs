pub mod digital_root;
pub mod luhn;
pub mod matrix_multiplication;
pub mod radix;
pub mod reverse_integer;
