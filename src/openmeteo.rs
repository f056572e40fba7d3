use chrono::NaiveDateTime;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::series::ForecastSeries;

const BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

// Fixed dashboard location (Jakarta).
const LATITUDE: f64 = -6.2;
const LONGITUDE: f64 = 106.8;
const HOURLY_FIELD: &str = "temperature_2m";

/// Failure modes of the one-shot forecast fetch.
///
/// `Transport` covers the request itself: connection errors, non-2xx
/// statuses and bodies that are not JSON. `Schema` covers a decoded payload
/// that does not have the documented shape.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected payload: {0}")]
    Schema(String),
}

#[derive(Deserialize, Debug)]
pub struct ForecastPayload {
    hourly: HourlyBlock,
}

#[derive(Deserialize, Debug)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
}

/// Fetch the hourly forecast for the fixed location.
///
/// One attempt per session; there is no retry and no cache. A payload that
/// fails validation never produces a partially built series.
pub fn fetch() -> Result<ForecastSeries, FetchError> {
    log::info!("fetching hourly {HOURLY_FIELD} for {LATITUDE},{LONGITUDE}");

    let response = get_web_json()?.error_for_status()?;
    let body: serde_json::Value = response.json()?;
    let payload: ForecastPayload =
        serde_json::from_value(body).map_err(|err| FetchError::Schema(err.to_string()))?;

    let series = validate(payload)?;
    log::info!("loaded {} hourly readings", series.len());
    Ok(series)
}

fn get_web_json() -> Result<Response, reqwest::Error> {
    let client = Client::builder().user_agent("meteogram").build()?;
    client
        .get(BASE_URL)
        .query(&[
            ("latitude", LATITUDE.to_string()),
            ("longitude", LONGITUDE.to_string()),
            ("hourly", HOURLY_FIELD.to_string()),
        ])
        .send()
}

fn validate(payload: ForecastPayload) -> Result<ForecastSeries, FetchError> {
    let HourlyBlock {
        time,
        temperature_2m,
    } = payload.hourly;

    if time.len() != temperature_2m.len() {
        return Err(FetchError::Schema(format!(
            "hourly arrays differ in length: {} times vs {} temperatures",
            time.len(),
            temperature_2m.len()
        )));
    }

    let mut times = Vec::with_capacity(time.len());
    for raw in &time {
        let parsed = parse_timestamp(raw)
            .ok_or_else(|| FetchError::Schema(format!("bad hourly timestamp {raw:?}")))?;
        times.push(parsed);
    }

    Ok(ForecastSeries::new(times, temperature_2m))
}

// Open-Meteo sends minute precision; accept seconds too.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Result<ForecastPayload, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn parses_documented_payload() {
        let payload = payload(json!({
            "hourly": {
                "time": ["2025-08-06T00:00", "2025-08-06T01:00"],
                "temperature_2m": [26.4, 25.9]
            }
        }))
        .unwrap();

        let series = validate(payload).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.temperatures(), &[26.4, 25.9]);
        assert_eq!(series.times()[1].format("%H:%M").to_string(), "01:00");
    }

    #[test]
    fn missing_hourly_block_is_rejected() {
        assert!(payload(json!({ "latitude": -6.2 })).is_err());
    }

    #[test]
    fn mismatched_lengths_are_a_schema_error() {
        let payload = payload(json!({
            "hourly": {
                "time": ["2025-08-06T00:00", "2025-08-06T01:00"],
                "temperature_2m": [26.4]
            }
        }))
        .unwrap();

        match validate(payload) {
            Err(FetchError::Schema(msg)) => assert!(msg.contains("length")),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn bad_timestamp_is_a_schema_error() {
        let payload = payload(json!({
            "hourly": {
                "time": ["not-a-time"],
                "temperature_2m": [26.4]
            }
        }))
        .unwrap();

        match validate(payload) {
            Err(FetchError::Schema(msg)) => assert!(msg.contains("timestamp")),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn seconds_precision_timestamps_are_accepted() {
        let payload = payload(json!({
            "hourly": {
                "time": ["2025-08-06T13:00:00"],
                "temperature_2m": [31.2]
            }
        }))
        .unwrap();

        let series = validate(payload).unwrap();
        assert_eq!(series.times()[0].format("%H:%M").to_string(), "13:00");
    }

    #[test]
    fn empty_arrays_make_an_empty_series() {
        let payload = payload(json!({
            "hourly": { "time": [], "temperature_2m": [] }
        }))
        .unwrap();

        let series = validate(payload).unwrap();
        assert!(series.is_empty());
    }
}
