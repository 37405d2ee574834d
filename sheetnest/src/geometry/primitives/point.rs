use std::fmt::Display;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    /// Rotates the point by `angle` (radians, counterclockwise) around `pivot`
    pub fn rotate_around(&self, pivot: Point, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        let (dx, dy) = (self.0 - pivot.0, self.1 - pivot.1);
        Point(dx * cos - dy * sin + pivot.0, dx * sin + dy * cos + pivot.1)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point(self.0 + dx, self.1 + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.0, self.1)
    }
}
