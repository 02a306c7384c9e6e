//! Coinranking price history fetcher

use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeZone};
use serde::Deserialize;

use super::PriceSource;
use crate::config::Config;
use crate::types::{Observation, PriceDailyError, Result};

const USER_AGENT: &str = concat!("pricedaily/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Price history response: `{"data": {"history": [...]}}`
#[derive(Deserialize)]
struct HistoryResponse {
    data: HistoryData,
}

#[derive(Deserialize)]
struct HistoryData {
    history: Vec<HistoryPoint>,
}

#[derive(Deserialize)]
struct HistoryPoint {
    /// Milliseconds since the Unix epoch
    timestamp: i64,
    price: RawPrice,
}

/// Prices arrive as numeric strings, occasionally as plain numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    fn value(&self) -> Result<f64> {
        match self {
            RawPrice::Number(n) => Ok(*n),
            RawPrice::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| PriceDailyError::Parse(format!("invalid price: {:?}", s))),
        }
    }
}

/// Fetches hourly history from a Coinranking-style endpoint
pub struct CoinrankingSource {
    url: String,
}

impl CoinrankingSource {
    /// Create a source for the endpoint configured in the environment
    pub fn new() -> Self {
        Self::with_url(Config::from_env().fetch_url)
    }

    /// Create a source for a custom endpoint
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client.get(&self.url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

impl Default for CoinrankingSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSource for CoinrankingSource {
    fn name(&self) -> &str {
        "coinranking"
    }

    fn observations(&self) -> Result<Vec<Observation>> {
        log::info!("fetching price history from {}", self.url);
        let mut body = self.fetch()?;
        let observations = parse_history(&mut body)?;
        log::debug!("parsed {} observations", observations.len());
        Ok(observations)
    }
}

/// Decode a price history body into observations in local time.
///
/// Rows are kept in response order.
pub fn parse_history(body: &mut [u8]) -> Result<Vec<Observation>> {
    let response: HistoryResponse =
        simd_json::from_slice(body).map_err(|e| PriceDailyError::Parse(e.to_string()))?;

    response
        .data
        .history
        .iter()
        .map(|point| -> Result<Observation> {
            Ok(Observation::new(
                local_datetime(point.timestamp)?,
                point.price.value()?,
            ))
        })
        .collect()
}

/// Convert epoch milliseconds to a naive local date-time
fn local_datetime(millis: i64) -> Result<NaiveDateTime> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_local())
        .ok_or_else(|| PriceDailyError::Parse(format!("timestamp out of range: {}", millis)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str) -> Vec<u8> {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name);
        std::fs::read(path).unwrap()
    }

    fn local(millis: i64) -> NaiveDateTime {
        Local.timestamp_millis_opt(millis).unwrap().naive_local()
    }

    #[test]
    fn test_parse_history_fixture() {
        let mut body = fixture("coinranking-history.json");
        let observations = parse_history(&mut body).unwrap();

        assert_eq!(observations.len(), 4);
        assert_eq!(observations[0].timestamp, local(1_629_676_800_000));
        assert_eq!(observations[0].value, 49_768.12);
        assert_eq!(observations[3].timestamp, local(1_629_687_600_000));
    }

    #[test]
    fn test_parse_numeric_price() {
        let mut body = fixture("coinranking-history.json");
        let observations = parse_history(&mut body).unwrap();

        // Third row carries a JSON number instead of a string
        assert_eq!(observations[2].value, 49_901.5);
    }

    #[test]
    fn test_parse_empty_history() {
        let mut body = br#"{"status":"success","data":{"history":[]}}"#.to_vec();
        let observations = parse_history(&mut body).unwrap();
        assert!(observations.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let mut body = b"not valid json {{{".to_vec();
        let result = parse_history(&mut body);
        assert!(matches!(result, Err(PriceDailyError::Parse(_))));
    }

    #[test]
    fn test_parse_invalid_price() {
        let mut body =
            br#"{"data":{"history":[{"price":"n/a","timestamp":1629676800000}]}}"#.to_vec();
        let result = parse_history(&mut body);
        assert!(matches!(result, Err(PriceDailyError::Parse(_))));
    }

    #[test]
    fn test_millis_to_local() {
        assert_eq!(local_datetime(0).unwrap(), local(0));
        assert!(local_datetime(i64::MAX).is_err());
    }

    #[test]
    fn test_source_url() {
        let source = CoinrankingSource::with_url("http://localhost:9/history");
        assert_eq!(source.url(), "http://localhost:9/history");
        assert_eq!(source.name(), "coinranking");
    }

    #[test]
    fn test_fetch_unreachable_is_http_error() {
        let source = CoinrankingSource::with_url("http://127.0.0.1:9/history");
        let result = source.observations();
        assert!(matches!(result, Err(PriceDailyError::Http(_))));
    }
}
