use log::trace;
use sheetnest::entities::{PartInstance, Sheet};
use sheetnest::geometry::primitives::Point;

use crate::opt::attempt::{Attempt, Footprints, PlacedInstance, PlacementHeuristic};
use crate::opt::collision::{AnchorProximity, CollisionTest, SheetOccupancy};

/// Bottom-left placement over a fixed grid of candidate anchors.
///
/// For every instance, rotations are tried in order. Within a rotation, existing sheets are
/// scanned in creation order, rows bottom to top and each row left to right, and the first
/// candidate anchor accepted by the [`CollisionTest`] wins. If no existing sheet admits the
/// instance, a new sheet is opened with the instance at `(0, 0)`, provided its padded footprint
/// fits on an empty sheet. Only then is the next rotation considered.
pub struct GridScanPlacer<C: CollisionTest = AnchorProximity> {
    pub sheet: Sheet,
    pub spacing: f64,
    pub grid_step: f64,
    pub footprints: Footprints,
    pub collision_test: C,
}

impl GridScanPlacer<AnchorProximity> {
    pub fn new(sheet: Sheet, spacing: f64, grid_step: f64, footprints: Footprints) -> Self {
        Self::with_collision_test(sheet, spacing, grid_step, footprints, AnchorProximity)
    }
}

impl<C: CollisionTest> GridScanPlacer<C> {
    pub fn with_collision_test(
        sheet: Sheet,
        spacing: f64,
        grid_step: f64,
        footprints: Footprints,
        collision_test: C,
    ) -> Self {
        assert!(grid_step > 0.0, "grid step must be positive");
        Self {
            sheet,
            spacing,
            grid_step,
            footprints,
            collision_test,
        }
    }

    fn place_instance(
        &self,
        pi: PartInstance,
        sheets: &mut Vec<SheetOccupancy>,
    ) -> Option<PlacedInstance> {
        for (rotation, w, h) in self.footprints.of_part(pi.part_idx) {
            let (pad_w, pad_h) = (w + self.spacing, h + self.spacing);

            for (sheet_index, occupancy) in sheets.iter_mut().enumerate() {
                if let Some(anchor) = self.scan(occupancy, pad_w, pad_h) {
                    occupancy.register(anchor);
                    return Some(PlacedInstance {
                        instance: pi,
                        sheet_index,
                        anchor,
                        rotation,
                    });
                }
            }

            if self.sheet.fits(pad_w, pad_h) {
                let anchor = Point(0.0, 0.0);
                sheets.push(SheetOccupancy::with_anchor(anchor));
                trace!("[GS] opened sheet {} for part {}", sheets.len() - 1, pi.part_idx);
                return Some(PlacedInstance {
                    instance: pi,
                    sheet_index: sheets.len() - 1,
                    anchor,
                    rotation,
                });
            }
        }
        None
    }

    /// First conflict-free anchor on the grid, scanning rows bottom to top
    fn scan(&self, occupancy: &SheetOccupancy, pad_w: f64, pad_h: f64) -> Option<Point> {
        let mut y = 0.0;
        while y + pad_h <= self.sheet.height {
            let mut x = 0.0;
            while x + pad_w <= self.sheet.width {
                let candidate = Point(x, y);
                if !self
                    .collision_test
                    .collides(occupancy, candidate, pad_w, pad_h)
                {
                    return Some(candidate);
                }
                x += self.grid_step;
            }
            y += self.grid_step;
        }
        None
    }
}

impl<C: CollisionTest> PlacementHeuristic for GridScanPlacer<C> {
    fn place_all(&self, order: &[PartInstance]) -> Attempt {
        let mut sheets = vec![];
        let mut placed = Vec::with_capacity(order.len());
        let mut n_dropped = 0;

        for &pi in order {
            match self.place_instance(pi, &mut sheets) {
                Some(p) => placed.push(p),
                None => n_dropped += 1,
            }
        }

        Attempt {
            placed,
            n_sheets: sheets.len(),
            n_dropped,
        }
    }
}
