use crate::common;
use httpmock::Method::GET;
use stockview::{QuoteError, StockClient};
use url::Url;

#[tokio::test]
async fn quote_404_maps_to_not_found() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/XYZ");
        then.status(404)
            .header("content-type", "application/json")
            .body(r#"{"detail":"Symbol XYZ not found"}"#);
    });
    let client = common::client_for(&server);

    let err = client.quote("xyz").await.unwrap_err();
    mock.assert();

    match &err {
        QuoteError::NotFound { symbol } => assert_eq!(symbol, "XYZ"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Ticker code \"XYZ\" was not found");
}

#[tokio::test]
async fn quote_429_maps_to_rate_limited_regardless_of_body() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/AAPL");
        then.status(429)
            .header("content-type", "application/json")
            .body(r#"{"detail":"something the user should not see"}"#);
    });
    let client = common::client_for(&server);

    let err = client.quote("AAPL").await.unwrap_err();
    mock.assert();

    assert_eq!(err, QuoteError::RateLimited);
    assert_eq!(
        err.to_string(),
        "API rate limit reached. Please wait a moment and try again"
    );
}

#[tokio::test]
async fn quote_server_error_surfaces_detail() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/AAPL");
        then.status(500)
            .header("content-type", "application/json")
            .body(r#"{"detail":"API key not configured"}"#);
    });
    let client = common::client_for(&server);

    let err = client.quote("AAPL").await.unwrap_err();
    mock.assert();

    assert_eq!(
        err,
        QuoteError::ServerError {
            detail: Some("API key not configured".into())
        }
    );
    assert_eq!(err.to_string(), "An error occurred: API key not configured");
}

#[tokio::test]
async fn quote_server_error_without_json_body_is_generic() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/AAPL");
        then.status(503).body("oops");
    });
    let client = common::client_for(&server);

    let err = client.quote("AAPL").await.unwrap_err();
    mock.assert();

    assert_eq!(err, QuoteError::ServerError { detail: None });
    assert_eq!(err.to_string(), "An error occurred: server error");
}

#[tokio::test]
async fn quote_without_response_maps_to_unreachable() {
    // Nothing listens on port 1.
    let client = StockClient::builder()
        .base_url(Url::parse("http://127.0.0.1:1/").unwrap())
        .build()
        .unwrap();

    let err = client.quote("AAPL").await.unwrap_err();

    assert_eq!(err, QuoteError::Unreachable);
    assert_eq!(
        err.to_string(),
        "Could not connect to the server. Make sure the backend is running"
    );
}

#[tokio::test]
async fn quote_undecodable_success_body_maps_to_unknown() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"unexpected": true}"#);
    });
    let client = common::client_for(&server);

    let err = client.quote("AAPL").await.unwrap_err();
    mock.assert();

    assert!(matches!(err, QuoteError::Unknown(_)), "got {err:?}");
    assert_eq!(err.to_string(), "An unexpected error occurred");
}

#[tokio::test]
async fn health_reports_backend_status() {
    let server = common::setup_server();
    let ok = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status":"healthy"}"#);
    });
    let client = common::client_for(&server);

    assert!(client.health().await.unwrap());
    ok.assert();
}

#[tokio::test]
async fn health_non_success_is_a_status_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(500).body("down");
    });
    let client = common::client_for(&server);

    let err = client.health().await.unwrap_err();
    mock.assert();

    match err {
        stockview::StockError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/health"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
