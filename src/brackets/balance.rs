//! Bracket balance validation over an explicit scan stack.
//!
//! Variables:
//!   pending : Stack<char> — openers awaiting their closer, top = innermost
//!
//! Invariant:
//!   after scanning position i, `pending` holds exactly the openers whose
//!   closers have not yet appeared, in nesting order (outermost at the bottom).

use crate::data_structures::stack::Stack;

/// The four recognized opening brackets. Fixed, not configurable.
pub const OPENING: [char; 4] = ['(', '[', '{', '<'];

/// Opening partner of a closing bracket, `None` for anything else.
pub fn opening_partner(c: char) -> Option<char> {
    match c {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        '>' => Some('<'),
        _ => None,
    }
}

/// Returns true iff every opener in `input` is closed by its partner in
/// proper nesting order.
///
/// Total over all strings: the empty string is balanced, a closer with no
/// pending opener is not, and leftover openers at end of scan are not.
/// Characters outside the eight bracket characters are skipped.
pub fn is_balanced(input: &str) -> bool {
    let mut pending = Stack::new();
    for c in input.chars() {
        if OPENING.contains(&c) {
            pending.push(c);
        } else if let Some(opener) = opening_partner(c) {
            match pending.pop() {
                Some(top) if top == opener => {}
                _ => return false,
            }
        }
    }
    pending.is_empty()
}
