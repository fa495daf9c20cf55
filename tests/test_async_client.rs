//! Async client tests against a local mock server.

#![cfg(feature = "async")]

mod common;

use covidon_sdk::{AsyncCovidClient, CovidError, Region, TimePeriod};
use wiremock::{MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AsyncCovidClient {
    AsyncCovidClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn fetch_decodes_minimal_fixture() {
    let server = MockServer::start().await;
    common::mount_summary(&server, "ON", common::minimal_body()).await;

    let points = client_for(&server)
        .fetch_data_points(Region::Ontario, TimePeriod::OneWeek)
        .await
        .unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].cases, 5);
    assert_eq!(points[0].cumulative_cases, 100);
    assert_eq!(points[0].cumulative_deaths, 10);
    assert_eq!(points[0].deaths, 1);
    assert_eq!(points[0].avaccine, 0);
}

#[tokio::test]
async fn fetch_dataset_for_health_unit() {
    let server = MockServer::start().await;
    let body = common::summary_of(vec![
        common::health_region_record("Peel", "01-03-2021", 300),
        common::health_region_record("Peel", "02-03-2021", 280),
        common::health_region_record("Peel", "03-03-2021", 310),
    ]);
    common::mount_summary(&server, "3553", body).await;

    let ds = client_for(&server)
        .fetch_dataset(Region::Peel, TimePeriod::OneMonth)
        .await
        .unwrap();

    assert_eq!(ds.len(), 3);
    assert_eq!(ds.region, Region::Peel);
    assert_eq!(ds.latest().unwrap().jurisdiction(), "Peel");
}

#[tokio::test]
async fn record_decode_error_is_surfaced() {
    let server = MockServer::start().await;
    let mut body = common::minimal_body();
    body["summary"][0].as_object_mut().unwrap().remove("date");
    common::mount_summary(&server, "ON", body).await;

    let err = client_for(&server)
        .fetch_data_points(Region::Ontario, TimePeriod::OneWeek)
        .await
        .unwrap_err();
    assert!(matches!(err, CovidError::RecordDecode { index: 0, .. }), "{err:?}");
}

#[tokio::test]
async fn not_found_is_transport() {
    let server = MockServer::start().await;
    common::mount_response(&server, "ON", ResponseTemplate::new(404)).await;

    let err = client_for(&server)
        .fetch_data_points(Region::Ontario, TimePeriod::OneWeek)
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let server = MockServer::start().await;
    common::mount_summary(&server, "ON", common::minimal_body()).await;

    let client = AsyncCovidClient::builder()
        .base_url(format!("{}/", server.uri()))
        .build()
        .unwrap();
    let points = client
        .fetch_data_points(Region::Ontario, TimePeriod::OneYear)
        .await
        .unwrap();
    assert_eq!(points.len(), 1);
}

#[test]
fn invalid_user_agent_fails_build_as_transport() {
    let err = AsyncCovidClient::builder()
        .user_agent("covidon\nsdk")
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CovidError::Transport(_)), "{err:?}");
}
