//! Tests for the upstream forwarder in isolation.

use health_gateway::record::{decode_query_string, HealthRecord};
use std::time::{Duration, Instant};

use health_gateway::{ForwardError, UpstreamForwarder};
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_returns_body_unmodified() {
    let upstream = common::start_mock_upstream(200, r#"{"hba1c":  5.60 , "note":"raw"}"#).await;
    let forwarder = common::test_forwarder(upstream.url());

    let body = forwarder.forward(&HealthRecord::default()).await.unwrap();
    assert_eq!(&body[..], br#"{"hba1c":  5.60 , "note":"raw"}"#);
}

#[tokio::test]
async fn test_status_400_and_above_is_upstream_error() {
    for status in [400u16, 404, 422, 500, 503] {
        let upstream = common::start_mock_upstream(status, r#"{"error":"unavailable"}"#).await;
        let forwarder = common::test_forwarder(upstream.url());

        let err = forwarder.forward(&HealthRecord::default()).await.unwrap_err();
        match err {
            ForwardError::Upstream { status: got, body } => {
                assert_eq!(got, status);
                assert_eq!(body, r#"{"error":"unavailable"}"#);
            }
            other => panic!("expected upstream error for {status}, got {other}"),
        }
    }
}

#[tokio::test]
async fn test_status_below_400_is_success() {
    let upstream = common::start_mock_upstream(202, r#"{"queued":true}"#).await;
    let forwarder = common::test_forwarder(upstream.url());

    let body = forwarder.forward(&HealthRecord::default()).await.unwrap();
    assert_eq!(&body[..], br#"{"queued":true}"#);
}

#[tokio::test]
async fn test_connection_failure_is_request_error() {
    let addr = common::unreachable_addr().await;
    let forwarder = common::test_forwarder(format!("http://{}/predict", addr));

    let err = forwarder.forward(&HealthRecord::default()).await.unwrap_err();
    assert!(matches!(err, ForwardError::Request(_)), "got {err}");
    assert_eq!(err.kind(), "request");
}

#[tokio::test]
async fn test_invalid_url_is_build_error() {
    let forwarder = common::test_forwarder("not a url".to_string());

    let err = forwarder.forward(&HealthRecord::default()).await.unwrap_err();
    assert!(matches!(err, ForwardError::Build(_)), "got {err}");
}

#[tokio::test]
async fn test_payload_matches_record() {
    let upstream = common::start_mock_upstream(200, "{}").await;
    let forwarder = common::test_forwarder(upstream.url());
    let record = decode_query_string("uid=p7&age=52&rdw=13.1&plt=240");

    forwarder.forward(&record).await.unwrap();

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    let payload: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(payload, serde_json::to_value(&record).unwrap());
    assert_eq!(payload["plt"], 240);
    assert_eq!(payload["rdw"], 13.1);
}

#[tokio::test]
async fn test_each_forward_is_a_single_attempt() {
    let upstream = common::start_mock_upstream(502, "bad gateway").await;
    let forwarder = common::test_forwarder(upstream.url());

    assert!(forwarder.forward(&HealthRecord::default()).await.is_err());
    assert_eq!(upstream.hits(), 1);
}

#[tokio::test]
async fn test_configured_timeout_is_request_error() {
    let upstream = common::start_slow_upstream(Duration::from_secs(3), 200, "{}").await;
    let mut config = common::upstream_config(upstream.url());
    config.timeout_secs = Some(1);
    let forwarder = UpstreamForwarder::new(&config).unwrap();

    let start = Instant::now();
    let err = forwarder.forward(&HealthRecord::default()).await.unwrap_err();

    assert!(
        matches!(&err, ForwardError::Request(e) if e.is_timeout()),
        "got {err}"
    );
    assert!(start.elapsed() < Duration::from_secs(3));
}
