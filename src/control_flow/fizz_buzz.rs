use std::fmt;

/// Verdict of the FizzBuzz rule for a single number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FizzBuzz {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(u64),
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzz::Fizz => write!(f, "Fizz"),
            FizzBuzz::Buzz => write!(f, "Buzz"),
            FizzBuzz::FizzBuzz => write!(f, "FizzBuzz"),
            FizzBuzz::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Multiples of 15 map to FizzBuzz, of 5 to Buzz, of 3 to Fizz,
/// everything else to the number itself.
pub fn fizz_buzz(n: u64) -> FizzBuzz {
    if n % 15 == 0 {
        return FizzBuzz::FizzBuzz;
    }
    if n % 5 == 0 {
        return FizzBuzz::Buzz;
    }
    if n % 3 == 0 {
        return FizzBuzz::Fizz;
    }
    FizzBuzz::Number(n)
}
