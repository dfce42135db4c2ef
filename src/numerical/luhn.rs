/// Luhn checksum validity of a card number's decimal digits.
///
/// Every second digit from the right is doubled; doubles above 9 drop 9.
/// Valid iff the digit sum is a multiple of 10.
pub fn is_luhn_valid(ccn: u64) -> bool {
    let mut rest = ccn;
    let mut sum = 0;
    let mut double = false;
    loop {
        let mut digit = rest % 10;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    sum % 10 == 0
}
