//! Grid-Scan Nester (GSN): iterated bottom-left nesting of polygonal parts onto identical
//! rectangular sheets.
//!
//! Every attempt places all part instances in a given order with a placement heuristic,
//! between attempts the order is partially shuffled. The attempt using the sheets best
//! is returned.

use std::sync::LazyLock;
use std::time::Instant;

use rand::SeedableRng;
use rand::prelude::SmallRng;
use sheetnest::entities::{NestInstance, NestResult, Part};
use sheetnest::error::NestError;

use crate::config::NestConfig;
use crate::opt::gsn_optimizer::GSNOptimizer;
use crate::progress::ProgressCallback;

pub mod config;
pub mod io;
pub mod opt;
pub mod progress;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Nests `parts` onto sheets described by `config`.
///
/// `progress` is invoked after every attempt. Errors it returns are logged and ignored.
pub fn nest(
    parts: &[Part],
    config: &NestConfig,
    progress: Option<ProgressCallback>,
) -> Result<NestResult, NestError> {
    let instance = NestInstance::new(parts.to_vec());
    let mut optimizer = GSNOptimizer::new(instance, config.clone(), rng_from_config(config))?;
    optimizer.solve(progress)
}

/// Seeded PRNG if `config.prng_seed` is set, otherwise seeded from OS entropy
pub fn rng_from_config(config: &NestConfig) -> SmallRng {
    match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
