/// True when three positive side lengths satisfy all strict triangle
/// inequalities; degenerate (collinear) triples do not count.
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return false;
    }
    a + b > c && a + c > b && b + c > a
}
