//! Summary endpoint: query parameters and the blocking fetch.

use chrono::{Local, NaiveDate};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config;
use crate::dataset::Dataset;
use crate::decode;
use crate::error::Result;
use crate::models::{DataPoint, Region, TimePeriod};

// ---------------------------------------------------------------------------
// QueryParameters
// ---------------------------------------------------------------------------

/// Query string of a `/summary` request. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub stat: String,
    pub loc: String,
    pub after: String,
}

impl QueryParameters {
    /// Parameters for a window ending on `today`.
    pub fn on(region: Region, period: TimePeriod, today: NaiveDate) -> Self {
        Self {
            stat: config::STAT_CASES.to_string(),
            loc: region.identifier().to_string(),
            after: period.start_date_string_from(today),
        }
    }
}

/// Parameters for a window ending on the current local date.
pub fn build_parameters(region: Region, period: TimePeriod) -> QueryParameters {
    QueryParameters::on(region, period, Local::now().date_naive())
}

// ---------------------------------------------------------------------------
// SummaryQuery
// ---------------------------------------------------------------------------

/// Blocking query interface for the `/summary` endpoint.
pub struct SummaryQuery<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> SummaryQuery<'a> {
    /// Create a new `SummaryQuery` bound to the given HTTP client and API base.
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Fetch and decode the daily records for a region and time period.
    ///
    /// Records come back in the order the API returned them.
    pub fn fetch(&self, region: Region, period: TimePeriod) -> Result<Vec<DataPoint>> {
        let params = build_parameters(region, period);
        let url = config::summary_url(self.base_url);
        debug!(%url, loc = %params.loc, after = %params.after, "fetching summary");

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()?
            .error_for_status()?;
        let body = resp.text()?;
        decode::decode_summary(&body)
    }

    /// Fetch and hand the outcome to `on_complete`, which runs exactly once.
    pub fn fetch_with<F>(&self, region: Region, period: TimePeriod, on_complete: F)
    where
        F: FnOnce(Result<Vec<DataPoint>>),
    {
        on_complete(self.fetch(region, period));
    }

    /// Fetch and wrap the records with the selection that produced them.
    pub fn fetch_dataset(&self, region: Region, period: TimePeriod) -> Result<Dataset> {
        let points = self.fetch(region, period)?;
        Ok(Dataset::new(region, period, points))
    }
}
