/// Base-`radix` rendering of `n`, for radixes 2 through 10.
///
/// Radixes outside that range yield `None`.
pub fn to_nary_string(n: u64, radix: u64) -> Option<String> {
    if !(2..=10).contains(&radix) {
        return None;
    }
    if n == 0 {
        return Some("0".to_string());
    }

    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        digits.push(char::from(b'0' + (rest % radix) as u8));
        rest /= radix;
    }
    Some(digits.iter().rev().collect())
}
