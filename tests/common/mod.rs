//! Shared test fixtures for the COVID-ON SDK integration tests.
//!
//! Provides canned `/summary` payloads in both upstream shapes and helpers
//! for standing up a `wiremock` server that serves them.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The minimal single-record payload used by the end-to-end tests.
pub fn minimal_body() -> Value {
    json!({
        "summary": [{
            "cases": 5,
            "cumulative_cases": 100,
            "cumulative_deaths": 10,
            "date": "01-01-2021",
            "deaths": 1,
            "province": "ON"
        }]
    })
}

/// A province-wide record with every optional count present.
pub fn province_record(date: &str, cases: i64, cumulative_cases: i64) -> Value {
    json!({
        "active_cases": 1200,
        "active_cases_change": -15,
        "avaccine": 45000,
        "cases": cases,
        "cumulative_avaccine": 1500000,
        "cumulative_cases": cumulative_cases,
        "cumulative_cvaccine": 300000,
        "cumulative_deaths": 7800,
        "cumulative_dvaccine": 2000000,
        "cumulative_recovered": 290000,
        "cumulative_testing": 14000000,
        "cvaccine": 2000,
        "date": date,
        "deaths": 12,
        "dvaccine": 60000,
        "province": "Ontario",
        "recovered": 1100,
        "testing": 40000,
        "testing_info": "NULL"
    })
}

/// A health-unit record; upstream reports deaths as floats in this shape.
pub fn health_region_record(health_region: &str, date: &str, cases: i64) -> Value {
    json!({
        "cases": cases,
        "cumulative_cases": 1000 + cases,
        "cumulative_deaths": 25.0,
        "date": date,
        "deaths": 1.0,
        "health_region": health_region,
        "province": "Ontario"
    })
}

pub fn summary_of(records: Vec<Value>) -> Value {
    json!({ "summary": records })
}

/// Mount a `/summary` mock matching `loc` that answers with `body`.
pub async fn mount_summary(server: &MockServer, loc: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/summary"))
        .and(query_param("stat", "cases"))
        .and(query_param("loc", loc))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a `/summary` mock matching `loc` with an arbitrary response.
pub async fn mount_response(server: &MockServer, loc: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/summary"))
        .and(query_param("loc", loc))
        .respond_with(response)
        .mount(server)
        .await;
}
