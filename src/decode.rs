//! Decoding of `/summary` response bodies into [`DataPoint`] records.
//!
//! A record that fails required-field decoding fails the whole batch: callers
//! never see a partial list.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config;
use crate::error::{CovidError, Result};
use crate::models::DataPoint;

/// Decode a raw response body.
///
/// # Errors
///
/// * [`CovidError::MalformedResponse`] if the body is empty, is not JSON, or
///   has no `summary` array.
/// * [`CovidError::RecordDecode`] if any element is missing a required field
///   or has a field of the wrong type.
pub fn decode_summary(body: &str) -> Result<Vec<DataPoint>> {
    if body.trim().is_empty() {
        warn!("summary response had an empty body");
        return Err(CovidError::MalformedResponse("empty response body".into()));
    }
    let value: Value = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "summary response was not valid JSON");
        CovidError::MalformedResponse(format!("invalid JSON: {}", e))
    })?;
    decode_summary_value(value)
}

/// Decode an already-parsed response body.
pub fn decode_summary_value(value: Value) -> Result<Vec<DataPoint>> {
    let elements = match value {
        Value::Object(mut map) => match map.remove(config::SUMMARY_KEY) {
            Some(Value::Array(arr)) => arr,
            Some(other) => {
                warn!(kind = json_kind(&other), "`summary` is not an array");
                return Err(CovidError::MalformedResponse(format!(
                    "`{}` is {}, expected an array",
                    config::SUMMARY_KEY,
                    json_kind(&other)
                )));
            }
            None => {
                warn!("summary response has no `summary` key");
                return Err(CovidError::MalformedResponse(format!(
                    "missing `{}` array",
                    config::SUMMARY_KEY
                )));
            }
        },
        other => {
            warn!(kind = json_kind(&other), "summary response is not a JSON object");
            return Err(CovidError::MalformedResponse(format!(
                "top-level value is {}, expected an object",
                json_kind(&other)
            )));
        }
    };

    let points = elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value::<DataPoint>(element)
                .map_err(|source| CovidError::RecordDecode { index, source })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(records = points.len(), "decoded summary");
    Ok(points)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
