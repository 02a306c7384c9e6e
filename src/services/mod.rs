//! Services for daily aggregation of hourly prices

pub mod aggregator;
pub mod format;
pub mod schema1;
pub mod schema2;

pub use aggregator::{AggregatorState, DailyAggregator, SchemaVariant};
pub use schema1::{Direction, DirectionExtremes, DirectionRecord};
pub use schema2::{AverageVolatility, VolatilityRecord};
