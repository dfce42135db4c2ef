/// Decimal digit reversal: 87354 -> 45378. Trailing zeros drop out.
pub fn reverse_integer(n: u64) -> u64 {
    let mut rest = n;
    let mut reversed = 0;
    while rest > 0 {
        reversed = reversed * 10 + rest % 10;
        rest /= 10;
    }
    reversed
}
