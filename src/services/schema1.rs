//! Direction/extremes daily schema
//!
//! Each record compares the current price with the previous day's
//! start-of-day price and tracks all-time highs and lows across records.

use serde::Serialize;

use super::aggregator::{AggregatorState, SchemaVariant};
use super::format::{change_text, date_text, price_text, weekday_text};

/// Daily record with direction of change and running extremes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionRecord {
    pub date: Option<String>,
    pub price: Option<String>,
    pub direction: Option<Direction>,
    pub change: Option<String>,
    pub day_of_week: Option<String>,
    pub high_since_start: Option<bool>,
    pub low_since_start: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Same,
}

impl Direction {
    fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Direction::Up
        } else if change < 0.0 {
            Direction::Down
        } else {
            Direction::Same
        }
    }
}

/// Schema1 variant: running max/min are kept across the whole run
#[derive(Debug, Default)]
pub struct DirectionExtremes {
    max_value: Option<f64>,
    min_value: Option<f64>,
}

impl DirectionExtremes {
    pub fn new() -> Self {
        Self::default()
    }

    fn change(state: &AggregatorState) -> Option<f64> {
        Some(state.current_value? - state.start_of_day_value?)
    }

    /// `None` the first time, then whether the current value is a new high
    fn high_since_start(&mut self, current: Option<f64>) -> Option<bool> {
        let current = current?;
        match self.max_value {
            None => {
                self.max_value = Some(current);
                None
            }
            Some(max) if current > max => {
                self.max_value = Some(current);
                Some(true)
            }
            Some(_) => Some(false),
        }
    }

    /// `None` the first time, then whether the current value is a new low
    fn low_since_start(&mut self, current: Option<f64>) -> Option<bool> {
        let current = current?;
        match self.min_value {
            None => {
                self.min_value = Some(current);
                None
            }
            Some(min) if current < min => {
                self.min_value = Some(current);
                Some(true)
            }
            Some(_) => Some(false),
        }
    }
}

impl SchemaVariant for DirectionExtremes {
    type Record = DirectionRecord;

    fn format(&mut self, state: &AggregatorState) -> DirectionRecord {
        let change = Self::change(state);

        DirectionRecord {
            date: date_text(state.current_timestamp),
            price: price_text(state.current_value),
            direction: change.map(Direction::from_change),
            change: change_text(change),
            day_of_week: weekday_text(state.current_timestamp),
            high_since_start: self.high_since_start(state.current_value),
            low_since_start: self.low_since_start(state.current_value),
        }
    }
}
