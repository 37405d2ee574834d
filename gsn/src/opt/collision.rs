use sheetnest::geometry::primitives::Point;

/// Anchors already placed on one sheet during a single attempt.
/// Created empty (or with a first anchor) when a sheet is opened and dropped with the attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetOccupancy {
    pub anchors: Vec<Point>,
}

impl SheetOccupancy {
    pub fn with_anchor(anchor: Point) -> Self {
        Self {
            anchors: vec![anchor],
        }
    }

    pub fn register(&mut self, anchor: Point) {
        self.anchors.push(anchor);
    }
}

/// Decides whether a candidate anchor conflicts with what is already on a sheet.
/// The grid scan only depends on this trait, so an exact geometric test can replace
/// the approximate one without touching the search.
pub trait CollisionTest {
    /// Whether a padded footprint of `pad_w` by `pad_h` anchored at `anchor` conflicts with
    /// the contents of `occupancy`
    fn collides(&self, occupancy: &SheetOccupancy, anchor: Point, pad_w: f64, pad_h: f64) -> bool;
}

/// Anchor-only proximity test: a candidate conflicts with an existing anchor `(ox, oy)` when
/// `|x - ox| < pad_w` and `|y - oy| < pad_h`.
///
/// Only the candidate's own footprint is considered, not the footprints of the parts
/// already placed. Narrow parts can therefore overlap wider ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorProximity;

impl CollisionTest for AnchorProximity {
    fn collides(&self, occupancy: &SheetOccupancy, anchor: Point, pad_w: f64, pad_h: f64) -> bool {
        let Point(x, y) = anchor;
        occupancy
            .anchors
            .iter()
            .any(|&Point(ox, oy)| (x - ox).abs() < pad_w && (y - oy).abs() < pad_h)
    }
}
