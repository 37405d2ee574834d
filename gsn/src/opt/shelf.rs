use sheetnest::entities::{PartInstance, Sheet};
use sheetnest::geometry::primitives::Point;

use crate::opt::attempt::{Attempt, Footprints, PlacedInstance, PlacementHeuristic};

/// Horizontal band of a sheet, as tall as the first part placed in it
#[derive(Clone, Copy, Debug, PartialEq)]
struct Shelf {
    y: f64,
    height: f64,
    x_cursor: f64,
}

#[derive(Clone, Debug, Default)]
struct ShelfSheet {
    shelves: Vec<Shelf>,
}

impl ShelfSheet {
    /// Highest shelf top on the sheet, 0 for an empty sheet
    fn top(&self) -> f64 {
        self.shelves
            .iter()
            .fold(0.0, |top, s| f64::max(top, s.y + s.height))
    }
}

/// First-fit shelf packing of rotated bounding boxes, with `kerf` as the gap between parts.
///
/// Parts are first offered to every existing shelf of a sheet (fits if it is not taller than
/// the shelf and the row still has room), then to a new shelf on top of the others.
/// Sheets are tried in creation order, each with every rotation, before a new sheet is opened.
pub struct ShelfPlacer {
    pub sheet: Sheet,
    pub kerf: f64,
    pub footprints: Footprints,
}

impl ShelfPlacer {
    pub fn new(sheet: Sheet, kerf: f64, footprints: Footprints) -> Self {
        Self {
            sheet,
            kerf,
            footprints,
        }
    }

    fn try_place(&self, sheet: &mut ShelfSheet, w: f64, h: f64) -> Option<Point> {
        let (kerf, sw, sh) = (self.kerf, self.sheet.width, self.sheet.height);

        if let Some(shelf) = sheet
            .shelves
            .iter_mut()
            .find(|s| h <= s.height && s.x_cursor + w + kerf <= sw)
        {
            let anchor = Point(shelf.x_cursor, shelf.y);
            shelf.x_cursor += w + kerf;
            return Some(anchor);
        }

        let top = sheet.top();
        if top + h + kerf <= sh && w + kerf <= sw {
            let y = match top > 0.0 {
                true => top + kerf,
                false => 0.0,
            };
            sheet.shelves.push(Shelf {
                y,
                height: h,
                x_cursor: w + kerf,
            });
            return Some(Point(0.0, y));
        }
        None
    }

    /// Tries every rotation of the instance on a single sheet
    fn try_place_rotations(
        &self,
        pi: PartInstance,
        sheet: &mut ShelfSheet,
    ) -> Option<(Point, f64)> {
        self.footprints
            .of_part(pi.part_idx)
            .find_map(|(rotation, w, h)| self.try_place(sheet, w, h).map(|a| (a, rotation)))
    }

    fn fits_fresh_sheet(&self, pi: PartInstance) -> bool {
        self.footprints
            .of_part(pi.part_idx)
            .any(|(_, w, h)| h + self.kerf <= self.sheet.height && w + self.kerf <= self.sheet.width)
    }
}

impl PlacementHeuristic for ShelfPlacer {
    fn place_all(&self, order: &[PartInstance]) -> Attempt {
        let mut sheets: Vec<ShelfSheet> = vec![];
        let mut placed = Vec::with_capacity(order.len());
        let mut n_dropped = 0;

        for &pi in order {
            let on_existing = sheets.iter_mut().enumerate().find_map(|(sheet_index, sheet)| {
                self.try_place_rotations(pi, sheet)
                    .map(|(anchor, rotation)| (sheet_index, anchor, rotation))
            });

            let placement = match on_existing {
                Some(p) => Some(p),
                None if self.fits_fresh_sheet(pi) => {
                    let mut sheet = ShelfSheet::default();
                    let p = self.try_place_rotations(pi, &mut sheet);
                    sheets.push(sheet);
                    p.map(|(anchor, rotation)| (sheets.len() - 1, anchor, rotation))
                }
                None => None,
            };

            match placement {
                Some((sheet_index, anchor, rotation)) => placed.push(PlacedInstance {
                    instance: pi,
                    sheet_index,
                    anchor,
                    rotation,
                }),
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
