//! COVID-ON SDK for Rust.
//!
//! Fetches daily COVID-19 case, death and vaccination summaries for Ontario
//! and its public health units from the opencovid.ca API, and derives the
//! figures a dashboard shows from them.
//!
//! # Quick start
//!
//! ```no_run
//! use covidon_sdk::dataset::Metric;
//! use covidon_sdk::{CovidClient, Region, TimePeriod};
//!
//! let client = CovidClient::builder().build().unwrap();
//!
//! let dataset = client
//!     .summary()
//!     .fetch_dataset(Region::Toronto, TimePeriod::OneMonth)
//!     .unwrap();
//! println!("{:?}", dataset.latest_value(Metric::Cases));
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
#[cfg(feature = "async")]
pub mod dashboard;
pub mod dataset;
pub mod decode;
pub mod error;
pub mod models;
pub mod queries;
pub mod sequencer;

#[cfg(feature = "async")]
pub use async_client::AsyncCovidClient;
#[cfg(feature = "async")]
pub use dashboard::{Dashboard, DashboardState};
pub use dataset::Dataset;
pub use error::{CovidError, Result};
pub use models::{DataPoint, Region, TimePeriod};
pub use queries::{build_parameters, QueryParameters};

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;

// ---------------------------------------------------------------------------
// CovidClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CovidClient`] instance.
///
/// Use [`CovidClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CovidClientBuilder::build) to create the client.
pub struct CovidClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for CovidClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::USER_AGENT.to_string(),
        }
    }
}

impl CovidClientBuilder {
    /// Point the client at a different API base (e.g. a mock server).
    ///
    /// Defaults to [`config::API_BASE`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client. No request is made until a query runs.
    pub fn build(self) -> Result<CovidClient> {
        let http = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;
        Ok(CovidClient {
            http,
            base_url: self.base_url,
        })
    }
}

// ---------------------------------------------------------------------------
// CovidClient
// ---------------------------------------------------------------------------

/// The main blocking entry point for the SDK.
///
/// Must not be constructed or used from inside an async runtime; use
/// [`AsyncCovidClient`] there.
pub struct CovidClient {
    http: Client,
    base_url: String,
}

impl CovidClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> CovidClientBuilder {
        CovidClientBuilder::default()
    }

    /// Access the `/summary` query interface.
    pub fn summary(&self) -> queries::summary::SummaryQuery<'_> {
        queries::summary::SummaryQuery::new(&self.http, &self.base_url)
    }

    /// Shorthand for `summary().fetch(region, period)`.
    pub fn fetch_data_points(&self, region: Region, period: TimePeriod) -> Result<Vec<DataPoint>> {
        self.summary().fetch(region, period)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Display for CovidClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CovidClient(base_url={})", self.base_url)
    }
}
