//! Offline price generator for testing without network access

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::PriceSource;
use crate::types::{Observation, Result};

/// Thirty days of hourly points
pub const NUM_POINTS: usize = 30 * 24;

/// Generates hourly integer-valued prices ending one hour before an anchor
pub struct SyntheticSource {
    seed: Option<u64>,
    anchor: Option<NaiveDateTime>,
}

impl SyntheticSource {
    /// Random prices ending at the current local time
    pub fn new() -> Self {
        Self {
            seed: None,
            anchor: None,
        }
    }

    /// Deterministic prices ending at `anchor` (for tests and benchmarks)
    pub fn with_seed(seed: u64, anchor: NaiveDateTime) -> Self {
        Self {
            seed: Some(seed),
            anchor: Some(anchor),
        }
    }

    fn generate<R: Rng>(rng: &mut R, anchor: NaiveDateTime) -> Vec<Observation> {
        (0..NUM_POINTS)
            .map(|i| {
                let hours_back = (NUM_POINTS - i) as i64;
                let price = rng.gen_range(0..NUM_POINTS) as f64;
                Observation::new(anchor - chrono::Duration::hours(hours_back), price)
            })
            .collect()
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSource for SyntheticSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn observations(&self) -> Result<Vec<Observation>> {
        let anchor = self.anchor.unwrap_or_else(|| Local::now().naive_local());
        let observations = match self.seed {
            Some(seed) => Self::generate(&mut StdRng::seed_from_u64(seed), anchor),
            None => Self::generate(&mut rand::thread_rng(), anchor),
        };
        log::debug!("generated {} synthetic observations", observations.len());
        Ok(observations)
    }
}
