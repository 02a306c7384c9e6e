//! Request/response handlers, one per output schema

use serde::Serialize;

use crate::services::{AverageVolatility, DirectionExtremes, SchemaVariant};
use crate::sources::PriceSource;
use crate::types::{Observation, Result};

/// Output schema selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Direction of change and running extremes
    Schema1,
    /// Daily average, variance and volatility alert
    Schema2,
}

impl Schema {
    pub const ALL: [Schema; 2] = [Schema::Schema1, Schema::Schema2];

    pub fn name(self) -> &'static str {
        match self {
            Schema::Schema1 => "schema1",
            Schema::Schema2 => "schema2",
        }
    }
}

/// Handler response: `{"statusCode": 200, "body": "<json>"}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            status_code: 500,
            body: serde_json::json!({ "error": message.to_string() }).to_string(),
        }
    }
}

/// Aggregate observations with the given schema and encode the records as a
/// JSON array
pub fn render(schema: Schema, observations: Vec<Observation>, pretty: bool) -> Result<String> {
    match schema {
        Schema::Schema1 => encode(DirectionExtremes::new(), observations, pretty),
        Schema::Schema2 => encode(AverageVolatility::new(), observations, pretty),
    }
}

fn encode<V>(variant: V, observations: Vec<Observation>, pretty: bool) -> Result<String>
where
    V: SchemaVariant,
    V::Record: Serialize,
{
    let records: Vec<V::Record> = variant.run(observations).collect();
    let text = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(text)
}

/// Fetch, aggregate and wrap the result. Fetch failures become a 500.
pub fn handle(schema: Schema, source: &dyn PriceSource) -> Response {
    let result = source
        .observations()
        .and_then(|observations| render(schema, observations, false));

    match result {
        Ok(body) => Response::ok(body),
        Err(e) => {
            log::error!("{} via {} failed: {}", schema.name(), source.name(), e);
            Response::error(e)
        }
    }
}

pub fn schema1_handler(source: &dyn PriceSource) -> Response {
    handle(Schema::Schema1, source)
}

pub fn schema2_handler(source: &dyn PriceSource) -> Response {
    handle(Schema::Schema2, source)
}
