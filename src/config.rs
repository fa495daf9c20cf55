use std::time::Duration;

pub const API_BASE: &str = "https://api.opencovid.ca";
pub const SUMMARY_PATH: &str = "summary";

/// Key of the record array in a summary response body.
pub const SUMMARY_KEY: &str = "summary";

/// The only statistic the dashboard asks for.
pub const STAT_CASES: &str = "cases";

/// `dd-MM-yyyy`, used both for the `after` parameter and the records' `date` field.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const USER_AGENT: &str = concat!("covidon-sdk/", env!("CARGO_PKG_VERSION"));

/// Build the summary endpoint URL for an API base, tolerating a trailing slash.
pub fn summary_url(base: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), SUMMARY_PATH)
}
