//! Hourly price sources

pub mod coinranking;
pub mod synthetic;

pub use coinranking::CoinrankingSource;
pub use synthetic::SyntheticSource;

use crate::types::{Observation, Result};

/// Producer of time-ordered hourly price observations
pub trait PriceSource {
    /// Source identifier used in logs
    fn name(&self) -> &str;

    /// Fetch all observations, sorted ascending by timestamp
    fn observations(&self) -> Result<Vec<Observation>>;
}
