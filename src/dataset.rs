//! Display aggregates derived from an ordered list of [`DataPoint`]s.
//!
//! Nothing here reorders the records: series and totals follow the order the
//! API returned. [`Dataset::sorted_by_date`] is available when a caller wants
//! a stronger guarantee.

use serde::{Deserialize, Serialize};

use crate::models::{DataPoint, Region, TimePeriod};

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// A count field of [`DataPoint`] that can be charted or summarised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Cases,
    CumulativeCases,
    Deaths,
    CumulativeDeaths,
    ActiveCases,
    Recovered,
    CumulativeRecovered,
    Testing,
    CumulativeTesting,
    Vaccinations,
    CumulativeVaccinations,
    CompletedVaccinations,
    CumulativeCompletedVaccinations,
}

impl Metric {
    pub fn value(self, point: &DataPoint) -> i64 {
        match self {
            Metric::Cases => point.cases,
            Metric::CumulativeCases => point.cumulative_cases,
            Metric::Deaths => point.deaths,
            Metric::CumulativeDeaths => point.cumulative_deaths,
            Metric::ActiveCases => point.active_cases,
            Metric::Recovered => point.recovered,
            Metric::CumulativeRecovered => point.cumulative_recovered,
            Metric::Testing => point.testing,
            Metric::CumulativeTesting => point.cumulative_testing,
            Metric::Vaccinations => point.avaccine,
            Metric::CumulativeVaccinations => point.cumulative_avaccine,
            Metric::CompletedVaccinations => point.cvaccine,
            Metric::CumulativeCompletedVaccinations => point.cumulative_cvaccine,
        }
    }

    /// Whether the metric is only reported for the province-wide region.
    pub fn province_wide_only(self) -> bool {
        !matches!(
            self,
            Metric::Cases | Metric::CumulativeCases | Metric::Deaths | Metric::CumulativeDeaths
        )
    }
}

// ---------------------------------------------------------------------------
// ChartPoint / Trend
// ---------------------------------------------------------------------------

/// An `(x, y)` pair for a line chart; `x` is the record's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Direction of a series from its first to its last value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Falling,
    /// Fewer than two points.
    Flat,
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// The records returned for one region and time period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub region: Region,
    pub period: TimePeriod,
    pub points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(region: Region, period: TimePeriod, points: Vec<DataPoint>) -> Self {
        Self {
            region,
            period,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&DataPoint> {
        self.points.first()
    }

    /// The most recent record, which drives the headline figures.
    pub fn latest(&self) -> Option<&DataPoint> {
        self.points.last()
    }

    pub fn latest_value(&self, metric: Metric) -> Option<i64> {
        self.latest().map(|p| metric.value(p))
    }

    /// Sum of a daily metric across the window, saturating at the `i64` bounds.
    pub fn total(&self, metric: Metric) -> i64 {
        self.points
            .iter()
            .fold(0i64, |acc, p| acc.saturating_add(metric.value(p)))
    }

    /// Running sum of a daily metric, one entry per record. Saturates like
    /// [`total`](Self::total).
    pub fn running_total(&self, metric: Metric) -> Vec<i64> {
        self.points
            .iter()
            .scan(0i64, |acc, p| {
                *acc = acc.saturating_add(metric.value(p));
                Some(*acc)
            })
            .collect()
    }

    pub fn series(&self, metric: Metric) -> Vec<ChartPoint> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| ChartPoint {
                x: i as f64,
                y: metric.value(p) as f64,
            })
            .collect()
    }

    /// Chart series over [`running_total`](Self::running_total).
    pub fn cumulative_series(&self, metric: Metric) -> Vec<ChartPoint> {
        self.running_total(metric)
            .into_iter()
            .enumerate()
            .map(|(i, v)| ChartPoint {
                x: i as f64,
                y: v as f64,
            })
            .collect()
    }

    pub fn trend(&self, metric: Metric) -> Trend {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 2 => {
                if metric.value(last) > metric.value(first) {
                    Trend::Rising
                } else {
                    Trend::Falling
                }
            }
            _ => Trend::Flat,
        }
    }

    /// True when every date parses and dates never decrease.
    pub fn is_chronological(&self) -> bool {
        let mut prev = None;
        for point in &self.points {
            let Some(date) = point.parsed_date() else {
                return false;
            };
            if prev.is_some_and(|p| date < p) {
                return false;
            }
            prev = Some(date);
        }
        true
    }

    /// A copy sorted by parsed date. Records whose date does not parse keep
    /// their relative order after all dated records.
    pub fn sorted_by_date(&self) -> Dataset {
        let mut points = self.points.clone();
        points.sort_by_key(|p| match p.parsed_date() {
            Some(d) => (0u8, Some(d)),
            None => (1u8, None),
        });
        Dataset::new(self.region, self.period, points)
    }
}
