/// All characters of `s` in reverse order.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}
