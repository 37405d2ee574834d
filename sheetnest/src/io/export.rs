use std::time::Instant;

use crate::entities::{NestResult, Placement};
use crate::io::ext_repr::{ExtNestSolution, ExtPlacement};

/// Exports a result out of the library
pub fn export_result(result: &NestResult, epoch: Instant) -> ExtNestSolution {
    ExtNestSolution {
        placements: result.placements.iter().map(export_placement).collect(),
        sheets_used: result.sheets_used,
        utilization: result.utilization.clone(),
        iterations_run: result.iterations_run,
        n_dropped: result.n_dropped,
        best_attempt_utilization: result.best_attempt_utilization,
        run_time_sec: epoch.elapsed().as_secs(),
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        part_id: placement.part_id.clone(),
        sheet_index: placement.sheet_index,
        x: placement.x,
        y: placement.y,
        rotation: placement.rotation,
    }
}
