//! Core types shared across sources, aggregation and handlers

use chrono::NaiveDateTime;
use thiserror::Error;

/// One hourly price sample: local (naive) timestamp and price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl Observation {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(NaiveDateTime, f64)> for Observation {
    fn from((timestamp, value): (NaiveDateTime, f64)) -> Self {
        Self { timestamp, value }
    }
}

/// Errors raised outside the aggregation core (fetching, decoding, output)
#[derive(Debug, Error)]
pub enum PriceDailyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PriceDailyError>;
