use itertools::Itertools;
use log::error;

use crate::entities::{NestInstance, NestResult, Sheet};
use crate::util::FPA;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

/// Checks the internal consistency of a [`NestResult`] against the instance it was computed for.
pub fn result_is_consistent(result: &NestResult, instance: &NestInstance, sheet: Sheet) -> bool {
    let expected_sheets = result
        .placements
        .iter()
        .map(|p| p.sheet_index + 1)
        .max()
        .unwrap_or(0);
    if result.sheets_used != expected_sheets || result.utilization.len() != result.sheets_used {
        error!(
            "sheets_used {} does not match placements ({expected_sheets}) or utilization ({})",
            result.sheets_used,
            result.utilization.len()
        );
        return false;
    }

    let placed_qtys = result.placed_qtys(instance.parts.len());
    if let Some((idx, _)) = placed_qtys
        .iter()
        .zip(instance.parts.iter())
        .find_position(|(placed, part)| **placed > part.quantity)
    {
        error!("more copies of part {idx} placed than demanded");
        return false;
    }

    let n_placed = placed_qtys.iter().sum::<usize>();
    if n_placed + result.n_dropped != instance.total_part_qty() {
        error!(
            "placed ({n_placed}) and dropped ({}) instances do not add up to {}",
            result.n_dropped,
            instance.total_part_qty()
        );
        return false;
    }

    let anchors_on_sheet = result.placements.iter().all(|p| {
        FPA(p.x) >= FPA(0.0)
            && FPA(p.y) >= FPA(0.0)
            && FPA(p.x) <= FPA(sheet.width)
            && FPA(p.y) <= FPA(sheet.height)
    });
    if !anchors_on_sheet {
        error!("anchor outside of sheet bounds");
        return false;
    }

    result
        .utilization
        .iter()
        .all(|u| FPA(*u) >= FPA(0.0) && u.is_finite())
}
