//! Average/variance/volatility daily schema
//!
//! Collects every value seen during the day and summarizes them when the day
//! changes.

use serde::Serialize;

use super::aggregator::{AggregatorState, SchemaVariant};
use super::format::{date_text, price_text};

/// Daily record with average, sample variance and a volatility flag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolatilityRecord {
    pub date: Option<String>,
    pub price: Option<String>,
    pub daily_average: Option<f64>,
    pub daily_variance: f64,
    #[serde(rename = "volatilityalert")]
    pub volatility_alert: bool,
}

/// Schema2 variant: buffers the current day's values
#[derive(Debug, Default)]
pub struct AverageVolatility {
    values: Vec<f64>,
}

impl AverageVolatility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean of the day's values, or the current value when none were seen
    pub fn daily_average(&self, current: Option<f64>) -> Option<f64> {
        mean(&self.values).or(current)
    }

    /// Sample variance of the day's values; 0 below two values
    pub fn daily_variance(&self) -> f64 {
        sample_variance(&self.values).unwrap_or(0.0)
    }

    /// True if any prefix's last value sits strictly within two standard
    /// deviations of that prefix's mean.
    ///
    /// Each prefix `values[..i]` only looks backwards, so no later value of
    /// the day leaks into the check.
    pub fn volatility_alert(&self) -> bool {
        (0..self.values.len()).any(|i| {
            let selected = &self.values[..i];
            let (Some(last), Some(avg), Some(std_dev)) =
                (selected.last(), mean(selected), sample_std_dev(selected))
            else {
                return false;
            };
            let deviation = last - avg;
            -2.0 * std_dev < deviation && deviation < 2.0 * std_dev
        })
    }
}

impl SchemaVariant for AverageVolatility {
    type Record = VolatilityRecord;

    fn hourly_update(&mut self, state: &AggregatorState) {
        if let Some(value) = state.current_value {
            self.values.push(value);
        }
    }

    fn day_reset(&mut self) {
        self.values.clear();
    }

    fn format(&mut self, state: &AggregatorState) -> VolatilityRecord {
        VolatilityRecord {
            date: date_text(state.current_timestamp),
            price: price_text(state.current_value),
            daily_average: self.daily_average(state.current_value),
            daily_variance: self.daily_variance(),
            volatility_alert: self.volatility_alert(),
        }
    }
}

/// Arithmetic mean; `None` for an empty slice.
///
/// A second pass adds back the average residual, so a slice of identical
/// values yields exactly that value.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let rough = values.iter().sum::<f64>() / n;
    let residual = values.iter().map(|v| v - rough).sum::<f64>() / n;
    Some(rough + residual)
}

/// Bessel-corrected variance; `None` below two values
fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let squares: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some(squares / (values.len() - 1) as f64)
}

fn sample_std_dev(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}
