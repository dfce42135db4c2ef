//! # Katas Crate
//!
//! Small deterministic algorithm katas organized by category.
//!
//! ## Modules
//!
//! - `brackets` – Bracket balance validation over an explicit scan stack
//! - `control_flow` – Branching and looping katas (FizzBuzz, factorial, range sum)
//! - `data_structures` – The LIFO stack backing the bracket scan
//! - `games` – Tic-tac-toe position evaluation
//! - `geometry` – Triangle, rectangle and circle predicates
//! - `numerical` – Digit and matrix katas (Luhn, digital root, radix strings, matrix product)
//! - `string_algorithms` – Character and path katas (single char, interval, reverse, common path)
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use katas::brackets::balance::is_balanced;
//!
//! assert!(is_balanced("{[(<{[]}>)]}"));
//! assert!(!is_balanced("]["));
//! ```
//!
//! ---
//!
//! Every function is pure and total: anomalies fold into `Option` or `bool`
//! results, never panics or errors.

pub mod brackets;
pub mod control_flow;
pub mod data_structures;
pub mod games;
pub mod geometry;
pub mod numerical;
pub mod string_algorithms;
