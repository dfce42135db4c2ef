#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Strict interior test: points on the circumference are outside.
pub fn is_inside_circle(circle: &Circle, point: &Point) -> bool {
    let dx = point.x - circle.center.x;
    let dy = point.y - circle.center.y;
    dx * dx + dy * dy < circle.radius * circle.radius
}
