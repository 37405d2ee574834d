use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Area of the interior of the shape
    fn area(&self) -> f64;

    /// Bounding box of the shape
    fn bbox(&self) -> Rect;

    /// Center of the bounding box, the pivot used for rotations
    fn bbox_center(&self) -> Point {
        self.bbox().centroid()
    }
}
