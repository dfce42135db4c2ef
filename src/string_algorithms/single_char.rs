use std::collections::HashMap;

/// First character of `s` that occurs exactly once, scanning left to right.
pub fn first_single_char(s: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    s.chars().find(|c| counts[c] == 1)
}
