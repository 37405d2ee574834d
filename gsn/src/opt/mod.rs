/// Attempts and the [`PlacementHeuristic`](attempt::PlacementHeuristic) trait
pub mod attempt;

/// Approximate collision test used by the grid scan
pub mod collision;

pub mod grid_scan;
pub mod gsn_optimizer;
pub mod mutation;
pub mod scoring;
pub mod shelf;
