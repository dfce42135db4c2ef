/// Mathematical interval notation for two bounds with include/exclude
/// delimiters; the smaller bound always comes first.
pub fn interval_string(a: i64, b: i64, start_included: bool, end_included: bool) -> String {
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{open}{}, {}{close}", a.min(b), a.max(b))
}
