//! Query modules for the COVID-ON SDK.
//!
//! Each module provides a query struct that borrows the client's HTTP
//! connection and exposes methods returning `Result<T>`.

pub mod summary;

pub use summary::{build_parameters, QueryParameters, SummaryQuery};
