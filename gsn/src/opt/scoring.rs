use itertools::Itertools;
use sheetnest::entities::{NestInstance, NestResult, Placement, Sheet};

use crate::opt::attempt::{Attempt, PlacedInstance};

/// Score used to select the best attempt: the area of ALL instances, placed or not,
/// divided by the total area of the sheets the attempt opened. 0 if no sheet was opened.
pub fn attempt_utilization(total_part_area: f64, n_sheets: usize, sheet: Sheet) -> f64 {
    let sheet_area = n_sheets as f64 * sheet.area();
    match sheet_area > 0.0 {
        true => total_part_area / sheet_area,
        false => 0.0,
    }
}

/// 1 + the highest sheet index among the placements, 0 without placements
pub fn sheets_used(placed: &[PlacedInstance]) -> usize {
    placed
        .iter()
        .map(|p| p.sheet_index + 1)
        .max()
        .unwrap_or(0)
}

/// Prototype area placed on every sheet in `[0, n_sheets)` divided by the sheet area.
/// Every placement contributes the area of its own instance.
pub fn sheet_utilization(
    placed: &[PlacedInstance],
    n_sheets: usize,
    instance: &NestInstance,
    sheet: Sheet,
) -> Vec<f64> {
    let mut used_area = vec![0.0; n_sheets];
    for p in placed {
        used_area[p.sheet_index] += instance.instance_area(p.instance);
    }
    used_area
        .into_iter()
        .map(|a| a / sheet.area())
        .collect_vec()
}

/// Builds the [`NestResult`] from the retained best attempt (if any).
/// Sheet count and per-sheet utilization are recomputed from the placements alone.
pub fn assemble_result(
    best: Option<&Attempt>,
    best_attempt_utilization: f64,
    iterations_run: usize,
    instance: &NestInstance,
    sheet: Sheet,
) -> NestResult {
    let placed = best.map(|a| a.placed.as_slice()).unwrap_or(&[]);
    let sheets_used = sheets_used(placed);

    let placements = placed
        .iter()
        .map(|p| Placement {
            part_id: instance.part(p.instance.part_idx).id.clone(),
            part_idx: p.instance.part_idx,
            sheet_index: p.sheet_index,
            x: p.anchor.0,
            y: p.anchor.1,
            rotation: p.rotation,
        })
        .collect_vec();

    NestResult {
        utilization: sheet_utilization(placed, sheets_used, instance, sheet),
        n_dropped: instance.total_part_qty() - placements.len(),
        placements,
        sheets_used,
        iterations_run,
        best_attempt_utilization,
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use sheetnest::entities::{Part, PartInstance};
    use sheetnest::geometry::primitives::{Point, Polygon};

    use super::*;

    fn placed(part_idx: usize, sheet_index: usize) -> PlacedInstance {
        PlacedInstance {
            instance: PartInstance { part_idx },
            sheet_index,
            anchor: Point(0.0, 0.0),
            rotation: 0.0,
        }
    }

    fn instance() -> NestInstance {
        NestInstance::new(vec![
            Part::new("big", Polygon::rectangle(10.0, 10.0), 2).unwrap(),
            Part::new("small", Polygon::rectangle(5.0, 2.0), 3).unwrap(),
        ])
    }

    #[test]
    fn attempt_utilization_counts_all_instances() {
        let sheet = Sheet::new(20.0, 10.0).unwrap();
        assert_eq!(attempt_utilization(230.0, 2, sheet), 230.0 / 400.0);
        assert_eq!(attempt_utilization(230.0, 0, sheet), 0.0);
    }

    #[test]
    fn per_sheet_utilization_pairs_placements_with_their_own_part() {
        let sheet = Sheet::new(20.0, 10.0).unwrap();
        let placed = [placed(0, 0), placed(1, 1), placed(1, 1), placed(0, 1)];
        let util = sheet_utilization(&placed, 2, &instance(), sheet);
        assert!(approx_eq!(f64, util[0], 0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, util[1], 0.6, epsilon = 1e-12));
    }

    #[test]
    fn result_without_attempt_is_empty() {
        let sheet = Sheet::new(20.0, 10.0).unwrap();
        let result = assemble_result(None, 0.0, 0, &instance(), sheet);
        assert!(result.is_empty());
        assert_eq!(result.sheets_used, 0);
        assert!(result.utilization.is_empty());
        assert_eq!(result.n_dropped, 5);
    }

    #[test]
    fn result_is_assembled_from_placements() {
        let sheet = Sheet::new(20.0, 10.0).unwrap();
        let attempt = Attempt {
            placed: vec![placed(0, 0), placed(0, 2)],
            n_sheets: 3,
            n_dropped: 3,
        };
        let result = assemble_result(Some(&attempt), 0.4, 7, &instance(), sheet);
        assert_eq!(result.sheets_used, 3);
        assert_eq!(result.utilization, vec![0.5, 0.0, 0.5]);
        assert_eq!(result.placements[1].part_id, "big");
        assert_eq!(result.n_dropped, 3);
        assert_eq!(result.iterations_run, 7);
    }
}
