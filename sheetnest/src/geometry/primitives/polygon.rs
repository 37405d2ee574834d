use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect};

/// Geometric primitive representing a polygon as an implicitly closed ring of points
/// (the last point connects back to the first).
///
/// No derived quantity is stored: bounds, area, width and height are recomputed from `points`
/// on every call. Transformations return new polygons and leave `self` untouched.
/// Empty and degenerate (fewer than 3 points, collinear) polygons are valid and have zero area.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Polygon { points }
    }

    /// Creates a polygon from a flat coordinate sequence `[x0, y0, x1, y1, ...]`.
    pub fn from_flat(coords: &[f64]) -> Result<Self> {
        ensure!(
            coords.len() % 2 == 0,
            "coordinate sequence has odd length ({})",
            coords.len()
        );
        ensure!(
            coords.iter().all(|c| c.is_finite()),
            "coordinate sequence contains non-finite values"
        );
        let points = coords
            .iter()
            .tuples()
            .map(|(&x, &y)| Point(x, y))
            .collect_vec();
        Ok(Polygon { points })
    }

    /// Axis-aligned rectangle with its lower-left corner at the origin
    pub fn rectangle(width: f64, height: f64) -> Self {
        Polygon {
            points: vec![
                Point(0.0, 0.0),
                Point(width, 0.0),
                Point(width, height),
                Point(0.0, height),
            ],
        }
    }

    pub fn to_flat(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.0, p.1]).collect()
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.bbox().width()
    }

    pub fn height(&self) -> f64 {
        self.bbox().height()
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sigma = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let Point(x_i, y_i) = self.points[i];
            let Point(x_j, y_j) = self.points[j];
            sigma += x_i * y_j - x_j * y_i;
        }
        0.5 * sigma
    }

    /// Returns a copy rotated by `angle` (radians) around the center of its own bounding box.
    /// The pivot is the bbox center, not the centroid of mass.
    pub fn rotate(&self, angle: f64) -> Polygon {
        let pivot = self.bbox().centroid();
        Polygon {
            points: self
                .points
                .iter()
                .map(|p| p.rotate_around(pivot, angle))
                .collect(),
        }
    }

    /// Returns a copy with every point shifted by `(dx, dy)`
    pub fn translate(&self, dx: f64, dy: f64) -> Polygon {
        Polygon {
            points: self.points.iter().map(|p| p.translate(dx, dy)).collect(),
        }
    }

    /// Rotates the polygon around its bbox center and moves it so the lower-left corner of the
    /// rotated bounding box lands on `anchor`.
    pub fn place_at(&self, rotation: f64, anchor: Point) -> Polygon {
        let rotated = self.rotate(rotation);
        let bbox = rotated.bbox();
        rotated.translate(anchor.0 - bbox.x_min, anchor.1 - bbox.y_min)
    }
}

impl Shape for Polygon {
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Linear scan over all points, [`Rect::empty`] for an empty polygon
    fn bbox(&self) -> Rect {
        Rect::from_points(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use float_cmp::approx_eq;
    use test_case::test_case;

    use super::*;

    fn l_shape() -> Polygon {
        Polygon::from_flat(&[0.0, 0.0, 40.0, 0.0, 40.0, 10.0, 10.0, 10.0, 10.0, 30.0, 0.0, 30.0])
            .unwrap()
    }

    fn triangle() -> Polygon {
        Polygon::from_flat(&[3.0, 1.0, 17.5, 4.0, 6.0, 12.25]).unwrap()
    }

    fn assert_polygons_close(a: &Polygon, b: &Polygon) {
        assert_eq!(a.n_points(), b.n_points());
        for (pa, pb) in a.points.iter().zip(b.points.iter()) {
            assert!(
                approx_eq!(f64, pa.0, pb.0, epsilon = 1e-9)
                    && approx_eq!(f64, pa.1, pb.1, epsilon = 1e-9),
                "{pa} != {pb}"
            );
        }
    }

    #[test]
    fn area_of_rectangle() {
        let rect = Polygon::rectangle(20.0, 5.0);
        assert_eq!(rect.area(), 100.0);
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 5.0);
    }

    #[test]
    fn area_is_independent_of_winding() {
        let mut cw = l_shape();
        cw.points.reverse();
        assert!(cw.signed_area() < 0.0);
        assert_eq!(cw.area(), l_shape().area());
        assert_eq!(l_shape().area(), 600.0);
    }

    #[test_case(&[]; "empty")]
    #[test_case(&[1.0, 2.0]; "single point")]
    #[test_case(&[1.0, 2.0, 5.0, 7.0]; "segment")]
    #[test_case(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0]; "collinear")]
    fn degenerate_polygons_have_zero_area(coords: &[f64]) {
        let poly = Polygon::from_flat(coords).unwrap();
        assert_eq!(poly.area(), 0.0);
    }

    #[test]
    fn empty_polygon_has_zero_sized_bounds() {
        let poly = Polygon::default();
        assert_eq!(poly.bbox(), Rect::empty());
        assert_eq!(poly.width(), 0.0);
        assert_eq!(poly.height(), 0.0);
        assert!(poly.rotate(1.0).is_empty());
    }

    #[test]
    fn odd_coordinate_count_is_rejected() {
        assert!(Polygon::from_flat(&[0.0, 0.0, 1.0]).is_err());
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        assert!(Polygon::from_flat(&[0.0, 0.0, f64::NAN, 1.0, 2.0, 2.0]).is_err());
        assert!(Polygon::from_flat(&[0.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn flat_coordinates_survive_conversion() {
        let coords = [3.0, 1.0, 17.5, 4.0, 6.0, 12.25];
        assert_eq!(Polygon::from_flat(&coords).unwrap().to_flat(), coords);
    }

    #[test_case(0.0, 0.0)]
    #[test_case(12.5, -3.0)]
    #[test_case(-1000.0, 250.75)]
    fn translation_shifts_bounds_and_keeps_area(dx: f64, dy: f64) {
        for poly in [l_shape(), triangle()] {
            let moved = poly.translate(dx, dy);
            let (b, mb) = (poly.bbox(), moved.bbox());
            assert!(approx_eq!(f64, mb.x_min, b.x_min + dx, epsilon = 1e-9));
            assert!(approx_eq!(f64, mb.x_max, b.x_max + dx, epsilon = 1e-9));
            assert!(approx_eq!(f64, mb.y_min, b.y_min + dy, epsilon = 1e-9));
            assert!(approx_eq!(f64, mb.y_max, b.y_max + dy, epsilon = 1e-9));
            assert!(approx_eq!(f64, moved.area(), poly.area(), epsilon = 1e-9));
        }
    }

    #[test_case(FRAC_PI_2)]
    #[test_case(PI)]
    #[test_case(0.3)]
    #[test_case(-2.1)]
    fn rotation_keeps_area(angle: f64) {
        for poly in [l_shape(), triangle()] {
            let rotated = poly.rotate(angle);
            assert!(rotated.area() >= 0.0);
            assert!(approx_eq!(f64, rotated.area(), poly.area(), epsilon = 1e-9));
        }
    }

    #[test]
    fn rotation_by_zero_is_identity() {
        assert_polygons_close(&l_shape().rotate(0.0), &l_shape());
        assert_polygons_close(&triangle().rotate(0.0), &triangle());
    }

    #[test_case(FRAC_PI_2)]
    #[test_case(1.234)]
    #[test_case(-0.5)]
    fn rotation_round_trip(angle: f64) {
        //the bbox center of a rotated rectangle stays where it was
        let rect = Polygon::rectangle(30.0, 12.0).translate(5.0, 7.0);
        assert_polygons_close(&rect.rotate(angle).rotate(-angle), &rect);

        let poly = l_shape();
        let pivot = poly.bbox_center();
        let back = poly
            .points
            .iter()
            .map(|p| p.rotate_around(pivot, angle).rotate_around(pivot, -angle))
            .collect_vec();
        assert_polygons_close(&Polygon::new(back), &poly);
    }

    #[test]
    fn quarter_turn_swaps_dimensions_around_bbox_center() {
        let rect = Polygon::rectangle(40.0, 10.0);
        let rotated = rect.rotate(FRAC_PI_2);
        let bbox = rotated.bbox();
        assert!(approx_eq!(f64, bbox.width(), 10.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.height(), 40.0, epsilon = 1e-9));
        //pivot is the bbox center (20, 5), which stays in place
        assert!(approx_eq!(f64, bbox.centroid().0, 20.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.centroid().1, 5.0, epsilon = 1e-9));
    }

    #[test]
    fn place_at_aligns_rotated_bbox_with_anchor() {
        let placed = l_shape().place_at(PI, Point(100.0, 50.0));
        let bbox = placed.bbox();
        assert!(approx_eq!(f64, bbox.x_min, 100.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.y_min, 50.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, placed.area(), 600.0, epsilon = 1e-9));
    }
}
