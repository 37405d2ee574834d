use std::time::Instant;

use log::{debug, info, warn};
use rand::prelude::SmallRng;
use sheetnest::entities::{NestInstance, NestResult, Sheet};
use sheetnest::error::{NestError, Result};
use sheetnest::util::assertions;
use thousands::Separable;

use crate::config::{NestConfig, PlacementStrategy, UnplacedPolicy};
use crate::opt::attempt::{Attempt, Footprints, PlacementHeuristic};
use crate::opt::grid_scan::GridScanPlacer;
use crate::opt::mutation::mutate_order;
use crate::opt::scoring;
use crate::opt::shelf::ShelfPlacer;
use crate::progress::{CancelToken, Progress, ProgressCallback};

/// Grid-Scan Nester: repeatedly places all instances with a [`PlacementHeuristic`],
/// mutating the placement order between attempts, and keeps the best scoring attempt.
pub struct GSNOptimizer {
    pub instance: NestInstance,
    pub config: NestConfig,
    pub sheet: Sheet,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    cancel_token: Option<CancelToken>,
}

impl GSNOptimizer {
    pub fn new(instance: NestInstance, config: NestConfig, rng: SmallRng) -> Result<Self> {
        config.validate()?;
        let sheet = config.sheet()?;
        Ok(Self {
            instance,
            config,
            sheet,
            rng,
            cancel_token: None,
        })
    }

    /// The search stops before the next attempt once `token` is cancelled
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    pub fn solve(&mut self, mut progress: Option<ProgressCallback>) -> Result<NestResult> {
        let start = Instant::now();
        let footprints = Footprints::new(&self.instance, self.config.rotations());

        if self.config.unplaced_policy == UnplacedPolicy::Error {
            self.check_placeable(&footprints)?;
        }

        let heuristic: Box<dyn PlacementHeuristic> = match self.config.strategy {
            PlacementStrategy::GridScan => Box::new(GridScanPlacer::new(
                self.sheet,
                self.config.spacing,
                self.config.grid_step,
                footprints,
            )),
            PlacementStrategy::Shelf => {
                Box::new(ShelfPlacer::new(self.sheet, self.config.spacing, footprints))
            }
        };

        //the order is owned by the search and drifts from attempt to attempt
        let mut order = self.instance.expand();
        let total_part_area = self.instance.total_part_area();
        let n_attempts = self.config.iterations;

        info!(
            "[GSN] nesting {} instances of {} parts using {:?} ({} attempts)",
            order.len().separate_with_commas(),
            self.instance.parts.len(),
            self.config.strategy,
            n_attempts.separate_with_commas()
        );

        let mut best: Option<Attempt> = None;
        let mut best_utilization = 0.0;
        let mut iterations_run = 0;

        for attempt_idx in 0..n_attempts {
            if self.is_cancelled() {
                info!("[GSN] cancelled after {iterations_run} attempts");
                break;
            }
            if attempt_idx > 0 {
                let n_swaps = mutate_order(&mut order, self.config.mutation_rate, &mut self.rng);
                debug!("[GSN] attempt {}: {n_swaps} swaps", attempt_idx + 1);
            }

            let attempt = heuristic.place_all(&order);
            let utilization =
                scoring::attempt_utilization(total_part_area, attempt.n_sheets, self.sheet);
            debug!(
                "[GSN] attempt {}: {} sheets, {} dropped, utilization {:.3}%",
                attempt_idx + 1,
                attempt.n_sheets,
                attempt.n_dropped,
                utilization * 100.0
            );

            if utilization > best_utilization {
                info!(
                    "[GSN] attempt {}/{} improved utilization: {:.3}% -> {:.3}% ({} sheets)",
                    attempt_idx + 1,
                    n_attempts,
                    best_utilization * 100.0,
                    utilization * 100.0,
                    attempt.n_sheets
                );
                best_utilization = utilization;
                best = Some(attempt);
            }
            iterations_run += 1;

            if let Some(callback) = progress.as_mut() {
                let report = Progress {
                    attempt: attempt_idx + 1,
                    total: n_attempts,
                    best_utilization,
                };
                if let Err(e) = callback(report) {
                    warn!("[GSN] progress callback failed, ignoring: {e:#}");
                }
            }
        }

        let result = scoring::assemble_result(
            best.as_ref(),
            best_utilization,
            iterations_run,
            &self.instance,
            self.sheet,
        );

        if self.config.unplaced_policy == UnplacedPolicy::Warn && iterations_run > 0 {
            self.warn_dropped(&result);
        }

        debug_assert!(assertions::result_is_consistent(
            &result,
            &self.instance,
            self.sheet
        ));

        info!(
            "[GSN] optimization finished in {:.3}ms ({} attempts)",
            start.elapsed().as_secs_f64() * 1000.0,
            iterations_run.separate_with_commas()
        );
        info!(
            "[GSN] solution places {}/{} instances on {} sheets, mean sheet utilization {:.3}%",
            result.placements.len(),
            self.instance.total_part_qty(),
            result.sheets_used,
            result.mean_utilization() * 100.0
        );

        Ok(result)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_token
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }

    /// Every part must fit on an empty sheet in at least one rotation
    fn check_placeable(&self, footprints: &Footprints) -> Result<()> {
        let spacing = self.config.spacing;
        for (part_idx, part) in self.instance.parts.iter().enumerate() {
            let fits = footprints
                .of_part(part_idx)
                .any(|(_, w, h)| self.sheet.fits(w + spacing, h + spacing));
            if !fits {
                return Err(NestError::UnplaceablePart {
                    id: part.id.clone(),
                });
            }
        }
        Ok(())
    }

    fn warn_dropped(&self, result: &NestResult) {
        let placed_qtys = result.placed_qtys(self.instance.parts.len());
        for (part, placed) in self
            .instance
            .parts
            .iter()
            .zip(placed_qtys)
            .filter(|(part, placed)| *placed < part.quantity)
        {
            warn!(
                "[GSN] {}/{} copies of part '{}' could not be placed",
                part.quantity - placed,
                part.quantity,
                part.id
            );
        }
    }
}
