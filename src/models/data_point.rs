use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// DataPoint — One day of summary statistics for a region
// ---------------------------------------------------------------------------

/// One decoded element of the `summary` array.
///
/// Province-wide responses carry vaccination, testing and recovery counts;
/// health-unit responses omit them and carry `health_region` instead. Both
/// decode into this shape, with the absent counts set to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: String,
    pub province: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_region: Option<String>,

    #[serde(deserialize_with = "count::required")]
    pub cases: i64,
    #[serde(deserialize_with = "count::required")]
    pub cumulative_cases: i64,
    #[serde(deserialize_with = "count::required")]
    pub deaths: i64,
    #[serde(deserialize_with = "count::required")]
    pub cumulative_deaths: i64,

    // -- Province-wide only --
    #[serde(default, deserialize_with = "count::optional")]
    pub active_cases: i64,
    #[serde(default, deserialize_with = "count::optional")]
    pub active_cases_change: i64,
    /// Vaccine doses administered.
    #[serde(default, deserialize_with = "count::optional")]
    pub avaccine: i64,
    #[serde(default, deserialize_with = "count::optional")]
    pub cumulative_avaccine: i64,
    /// People with a completed vaccine series.
    #[serde(default, deserialize_with = "count::optional")]
    pub cvaccine: i64,
    #[serde(default, deserialize_with = "count::optional")]
    pub cumulative_cvaccine: i64,
    /// Vaccine doses distributed.
    #[serde(default, deserialize_with = "count::optional")]
    pub dvaccine: i64,
    #[serde(default, deserialize_with = "count::optional")]
    pub cumulative_dvaccine: i64,
    #[serde(default, deserialize_with = "count::optional")]
    pub recovered: i64,
    #[serde(default, deserialize_with = "count::optional")]
    pub cumulative_recovered: i64,
    #[serde(default, deserialize_with = "count::optional")]
    pub testing: i64,
    #[serde(default, deserialize_with = "count::optional")]
    pub cumulative_testing: i64,
}

impl DataPoint {
    /// Parse the `dd-MM-yyyy` date string, if it is well formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, config::DATE_FORMAT).ok()
    }

    /// Name of the jurisdiction the record describes: the health unit when
    /// present, otherwise the province.
    pub fn jurisdiction(&self) -> &str {
        self.health_region.as_deref().unwrap_or(&self.province)
    }
}

/// Numeric coercion for count fields.
///
/// Upstream sends counts as integers or as floats depending on the field and
/// the API revision. Any JSON number is accepted and truncated toward zero.
mod count {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Number;

    pub fn required<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let number = Number::deserialize(deserializer)?;
        to_count(&number).ok_or_else(|| D::Error::custom(format!("count out of range: {}", number)))
    }

    /// Absent (via `#[serde(default)]`) and `null` both become zero.
    pub fn optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Option::<Number>::deserialize(deserializer)? {
            Some(number) => to_count(&number)
                .ok_or_else(|| D::Error::custom(format!("count out of range: {}", number))),
            None => Ok(0),
        }
    }

    fn to_count(number: &Number) -> Option<i64> {
        if let Some(n) = number.as_i64() {
            return Some(n);
        }
        if number.is_u64() {
            // Larger than i64::MAX.
            return None;
        }
        let f = number.as_f64()?;
        if f.is_finite() && f.abs() < i64::MAX as f64 {
            Some(f.trunc() as i64)
        } else {
            None
        }
    }

}
