//! Daily aggregation over hourly observations
//!
//! Walks a time-ordered stream of observations, detects day changes and asks a
//! [`SchemaVariant`] to format one record per day, plus a final flush record
//! once the input is exhausted.

use chrono::{Datelike, NaiveDateTime};

use crate::types::Observation;

/// Mutable state shared by the aggregator and its variant during one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatorState {
    pub current_value: Option<f64>,
    pub current_timestamp: Option<NaiveDateTime>,
    pub previous_value: Option<f64>,
    pub previous_timestamp: Option<NaiveDateTime>,
    /// Value captured at the most recent day transition
    pub start_of_day_value: Option<f64>,
}

impl AggregatorState {
    /// True before the first observation, or when the day-of-month changed.
    ///
    /// Only the day of month is compared: Jan 5 followed by Feb 5 is not a
    /// new day.
    pub fn is_new_day(&self) -> bool {
        match (self.previous_timestamp, self.current_timestamp) {
            (None, _) => true,
            (Some(prev), Some(curr)) => prev.day() != curr.day(),
            (Some(_), None) => false,
        }
    }

    fn consume(&mut self, observation: Observation) {
        self.current_timestamp = Some(observation.timestamp);
        self.current_value = Some(observation.value);
    }

    fn advance(&mut self) {
        self.previous_timestamp = self.current_timestamp;
        self.previous_value = self.current_value;
    }
}

/// Per-schema hooks called by [`DailyAggregator`]
pub trait SchemaVariant {
    type Record;

    /// Runs after every observation, and once more before the final flush
    fn hourly_update(&mut self, _state: &AggregatorState) {}

    /// Runs at every day transition, after the record was emitted
    fn day_reset(&mut self) {}

    /// Builds the record emitted at a day transition or at the final flush
    fn format(&mut self, state: &AggregatorState) -> Self::Record;

    /// Aggregate `observations` into a lazy sequence of daily records
    fn run<I>(self, observations: I) -> DailyAggregator<I::IntoIter, Self>
    where
        I: IntoIterator<Item = Observation>,
        Self: Sized,
    {
        DailyAggregator::new(observations.into_iter(), self)
    }
}

/// Pull-based iterator emitting one record per detected day transition and a
/// final record after the input ends
pub struct DailyAggregator<I, V> {
    input: I,
    variant: V,
    state: AggregatorState,
    finished: bool,
}

impl<I, V> DailyAggregator<I, V>
where
    I: Iterator<Item = Observation>,
    V: SchemaVariant,
{
    pub fn new(input: I, variant: V) -> Self {
        Self {
            input,
            variant,
            state: AggregatorState::default(),
            finished: false,
        }
    }

    /// Current aggregation state
    pub fn state(&self) -> &AggregatorState {
        &self.state
    }
}

impl<I, V> Iterator for DailyAggregator<I, V>
where
    I: Iterator<Item = Observation>,
    V: SchemaVariant,
{
    type Item = V::Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for observation in self.input.by_ref() {
            self.state.consume(observation);

            if self.state.is_new_day() {
                log::debug!("day transition at {}", observation.timestamp);

                // Format before the new observation reaches the accumulators
                let record = self.variant.format(&self.state);
                self.variant.day_reset();
                self.state.start_of_day_value = self.state.current_value;

                self.variant.hourly_update(&self.state);
                self.state.advance();
                return Some(record);
            }

            self.variant.hourly_update(&self.state);
            self.state.advance();
        }

        self.finished = true;
        self.variant.hourly_update(&self.state);
        Some(self.variant.format(&self.state))
    }
}
