pub mod factorial;
pub mod fizz_buzz;
pub mod sum_between;
