/// Iterative factorial; `0! = 1! = 1`.
///
/// The product fits `u64` for `n <= 20`; larger inputs overflow.
pub fn factorial(n: u64) -> u64 {
    let mut acc = 1;
    for i in 2..=n {
        acc *= i;
    }
    acc
}
