//! Daily price summaries from hourly price history.
//!
//! Hourly observations are pulled from a [`sources::PriceSource`], folded into
//! one record per day by a [`services::SchemaVariant`] and returned as a JSON
//! body by the [`handler`] functions.

pub mod cli;
pub mod config;
pub mod handler;
pub mod services;
pub mod sources;
pub mod types;
