/// Sum of the integers from `n1` to `n2` inclusive; zero when `n1 > n2`.
pub fn sum_between(n1: i64, n2: i64) -> i64 {
    (n1..=n2).sum()
}
