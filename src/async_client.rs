//! Non-blocking client for use inside async runtimes (Tokio, etc.).
//!
//! Shares query building and decoding with the blocking [`CovidClient`]
//! but drives requests with reqwest's async client, so it is safe to create
//! and drop on a runtime thread.
//!
//! # Example
//!
//! ```no_run
//! use covidon_sdk::{AsyncCovidClient, Region, TimePeriod};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncCovidClient::builder().build().unwrap();
//!
//!     let points = client
//!         .fetch_data_points(Region::Ontario, TimePeriod::OneWeek)
//!         .await
//!         .unwrap();
//!     println!("{} days", points.len());
//! }
//! ```
//!
//! [`CovidClient`]: crate::CovidClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config;
use crate::dataset::Dataset;
use crate::decode;
use crate::error::Result;
use crate::models::{DataPoint, Region, TimePeriod};
use crate::queries::build_parameters;

// ---------------------------------------------------------------------------
// AsyncCovidClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCovidClient`] instance.
pub struct AsyncCovidClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for AsyncCovidClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::USER_AGENT.to_string(),
        }
    }
}

impl AsyncCovidClientBuilder {
    /// Point the client at a different API base.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<AsyncCovidClient> {
        let http = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;
        Ok(AsyncCovidClient {
            http,
            base_url: Arc::from(self.base_url),
        })
    }
}

// ---------------------------------------------------------------------------
// AsyncCovidClient
// ---------------------------------------------------------------------------

/// Async counterpart of [`CovidClient`](crate::CovidClient).
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct AsyncCovidClient {
    http: Client,
    base_url: Arc<str>,
}

impl AsyncCovidClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncCovidClientBuilder {
        AsyncCovidClientBuilder::default()
    }

    /// Fetch and decode the daily records for a region and time period.
    pub async fn fetch_data_points(
        &self,
        region: Region,
        period: TimePeriod,
    ) -> Result<Vec<DataPoint>> {
        let params = build_parameters(region, period);
        let url = config::summary_url(&self.base_url);
        debug!(%url, loc = %params.loc, after = %params.after, "fetching summary");

        let resp = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        decode::decode_summary(&body)
    }

    pub async fn fetch_dataset(&self, region: Region, period: TimePeriod) -> Result<Dataset> {
        let points = self.fetch_data_points(region, period).await?;
        Ok(Dataset::new(region, period, points))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
