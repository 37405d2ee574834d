use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use sheetnest::entities::Sheet;
use sheetnest::error::{NestError, Result};

use crate::io::svg_util::SvgDrawOptions;

/// Upper bound on the number of grid lines along either sheet axis.
/// Finer grids would make a scan take practically forever, and below `f64` precision
/// the scan position stops advancing altogether.
pub const MAX_GRID_LINES: f64 = 100_000.0;

/// Configuration for the Grid-Scan Nester
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NestConfig {
    /// Width of every sheet
    pub sheet_width: f64,
    /// Height of every sheet
    pub sheet_height: f64,
    /// Gap added to both dimensions of every part's bounding box before placement
    pub spacing: f64,
    /// Number of evenly spaced rotations to try, starting at 0 (4 = 0°, 90°, 180°, 270°)
    pub rotation_steps: usize,
    /// Number of placement attempts of the search
    pub iterations: usize,
    /// Reserved, currently has no effect on the search
    pub population_size: usize,
    /// Probability of a swap per position when mutating the placement order
    pub mutation_rate: f64,
    /// Distance between two candidate anchors of the grid scan
    pub grid_step: f64,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Placement heuristic used within every attempt
    pub strategy: PlacementStrategy,
    /// What to do with instances that fit on no sheet in any rotation
    pub unplaced_policy: UnplacedPolicy,
    /// Optional SVG drawing options
    pub svg_draw_options: SvgDrawOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStrategy {
    /// Bottom-left scan over a fixed grid of anchors with an anchor proximity test
    #[default]
    GridScan,
    /// First-fit shelf packing of bounding boxes
    Shelf,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedPolicy {
    /// Drop them without notice, only counted in the result
    Ignore,
    /// Drop them and log a warning per part
    #[default]
    Warn,
    /// Refuse to nest if any part cannot be placed
    Error,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            sheet_width: 3000.0,
            sheet_height: 1500.0,
            spacing: 2.0,
            rotation_steps: 4,
            iterations: 100,
            population_size: 50,
            mutation_rate: 0.1,
            grid_step: 10.0,
            prng_seed: Some(0),
            strategy: PlacementStrategy::default(),
            unplaced_policy: UnplacedPolicy::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl NestConfig {
    /// Checks every field for values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        Sheet::new(self.sheet_width, self.sheet_height)?;
        let invalid = |msg: String| Err(NestError::InvalidConfiguration(msg));
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return invalid(format!("spacing must be non-negative, got {}", self.spacing));
        }
        if self.rotation_steps < 1 {
            return invalid("rotation_steps must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if !(self.grid_step.is_finite() && self.grid_step > 0.0) {
            return invalid(format!("grid_step must be positive, got {}", self.grid_step));
        }
        let max_dim = f64::max(self.sheet_width, self.sheet_height);
        if max_dim / self.grid_step > MAX_GRID_LINES {
            return invalid(format!(
                "grid_step {} is too fine for a {} x {} sheet (at most {MAX_GRID_LINES} grid lines per axis)",
                self.grid_step, self.sheet_width, self.sheet_height
            ));
        }
        Ok(())
    }

    pub fn sheet(&self) -> Result<Sheet> {
        Sheet::new(self.sheet_width, self.sheet_height)
    }

    /// The `rotation_steps` angles (radians) to try, in ascending order starting at 0
    pub fn rotations(&self) -> Vec<f64> {
        (0..self.rotation_steps)
            .map(|i| i as f64 * (TAU / self.rotation_steps as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use test_case::test_case;

    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(NestConfig::default().validate().is_ok());
    }

    #[test]
    fn four_steps_are_quarter_turns() {
        let config = NestConfig {
            rotation_steps: 4,
            ..NestConfig::default()
        };
        assert_eq!(config.rotations(), vec![0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]);
    }

    #[test_case(NestConfig { sheet_width: 0.0, ..NestConfig::default() }; "zero width")]
    #[test_case(NestConfig { sheet_height: -5.0, ..NestConfig::default() }; "negative height")]
    #[test_case(NestConfig { sheet_width: f64::NAN, ..NestConfig::default() }; "nan width")]
    #[test_case(NestConfig { spacing: -1.0, ..NestConfig::default() }; "negative spacing")]
    #[test_case(NestConfig { rotation_steps: 0, ..NestConfig::default() }; "no rotations")]
    #[test_case(NestConfig { mutation_rate: 1.5, ..NestConfig::default() }; "mutation above one")]
    #[test_case(NestConfig { grid_step: 0.0, ..NestConfig::default() }; "zero grid step")]
    #[test_case(NestConfig { grid_step: 1e-300, ..NestConfig::default() }; "grid step below precision")]
    #[test_case(NestConfig { sheet_width: 1e12, ..NestConfig::default() }; "sheet too large for grid step")]
    #[test_case(NestConfig { sheet_height: 10.0 * MAX_GRID_LINES + 10.0, ..NestConfig::default() }; "one grid line too many")]
    fn invalid_configurations_are_rejected(config: NestConfig) {
        assert!(matches!(
            config.validate(),
            Err(NestError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn finest_allowed_grid_is_valid() {
        let config = NestConfig {
            sheet_width: 10.0 * MAX_GRID_LINES,
            ..NestConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: NestConfig =
            serde_json::from_str(r#"{"sheet_width": 500, "strategy": "shelf"}"#).unwrap();
        assert_eq!(config.sheet_width, 500.0);
        assert_eq!(config.sheet_height, 1500.0);
        assert_eq!(config.strategy, PlacementStrategy::Shelf);
        assert_eq!(config.unplaced_policy, UnplacedPolicy::Warn);
    }
}
