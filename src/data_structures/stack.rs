//! Stack — LIFO container over a growable Vec, the explicit scan stack
//! behind `brackets::balance`.
//!
//! Variables:
//!   items : Vec<T>  — backing storage
//!   N     : usize   — current number of elements = items.len()
//!
//! Equations:
//!   push(x): items[N] = x,  N' = N + 1         O(1) amortised
//!   pop():   N' = N - 1,  returns items[N-1]   O(1)
//!   peek():  returns &items[N-1]               O(1)
//!   empty iff N == 0

pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self { Self { items: Vec::new() } }
    pub fn push(&mut self, val: T)      { self.items.push(val); }
    pub fn pop(&mut self)  -> Option<T> { self.items.pop() }
    pub fn peek(&self) -> Option<&T>    { self.items.last() }
    pub fn is_empty(&self) -> bool      { self.items.is_empty() }
    pub fn len(&self) -> usize          { self.items.len() }
}

impl<T> Default for Stack<T> {
    fn default() -> Self { Self::new() }
}
