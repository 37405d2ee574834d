use itertools::Itertools;

use crate::entities::Placement;

/// Outcome of a nesting run: the placements of the best attempt and its statistics.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NestResult {
    /// Placements of the best attempt, one per placed instance
    pub placements: Vec<Placement>,
    /// 1 + the highest sheet index among the placements, 0 if nothing was placed
    pub sheets_used: usize,
    /// Used part area divided by sheet area, indexed by sheet
    pub utilization: Vec<f64>,
    /// Number of attempts that were actually executed
    pub iterations_run: usize,
    /// Number of instances of the best attempt that could not be placed
    pub n_dropped: usize,
    /// Area of all instances divided by the total area of the sheets opened by the best attempt.
    /// This is the score used to select the best attempt, it differs from the per-sheet values.
    pub best_attempt_utilization: f64,
}

impl NestResult {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// All placements on the sheet with index `sheet_index`
    pub fn placements_on(&self, sheet_index: usize) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |p| p.sheet_index == sheet_index)
    }

    /// Number of placed copies for each part index (up to `n_parts`)
    pub fn placed_qtys(&self, n_parts: usize) -> Vec<usize> {
        let counts = self.placements.iter().counts_by(|p| p.part_idx);
        (0..n_parts)
            .map(|idx| counts.get(&idx).copied().unwrap_or(0))
            .collect_vec()
    }

    /// Mean of the per-sheet utilization values, 0 for an empty result
    pub fn mean_utilization(&self) -> f64 {
        match self.utilization.is_empty() {
            true => 0.0,
            false => self.utilization.iter().sum::<f64>() / self.utilization.len() as f64,
        }
    }
}
