//! Axis-aligned rectangle overlap in canvas coordinates (y grows downward).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// True when the interiors of the two rectangles intersect; touching
/// edges alone do not count.
pub fn rectangles_overlap(a: &Rect, b: &Rect) -> bool {
    let left = a.left.max(b.left);
    let right = (a.left + a.width).min(b.left + b.width);
    let top = a.top.max(b.top);
    let bottom = (a.top + a.height).min(b.top + b.height);
    right > left && bottom > top
}
