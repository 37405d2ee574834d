use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Point;

/// Axis-aligned rectangle.
/// Unlike most primitives, a zero-sized rectangle is valid: it is the bounding box of an empty or
/// degenerate polygon.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        debug_assert!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// The zero-sized box at the origin, returned as the bounds of an empty polygon
    pub const fn empty() -> Self {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 0.0,
            y_max: 0.0,
        }
    }

    /// Smallest rectangle enclosing all `points`, [`Rect::empty`] if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Rect::empty();
        };
        let (mut x_min, mut y_min) = (first.0, first.1);
        let (mut x_max, mut y_max) = (first.0, first.1);
        for p in points {
            x_min = x_min.min(p.0);
            y_min = y_min.min(p.1);
            x_max = x_max.max(p.0);
            y_max = y_max.max(p.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Returns a new rectangle with the same lower-left corner, grown by `dx` and `dy`
    pub fn pad(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
            ..*self
        }
    }
}

impl Shape for Rect {
    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn bbox(&self) -> Rect {
        *self
    }
}
