use crate::common::{self, dec};
use httpmock::Method::GET;
use stockview::QuoteError;
use stockview::quote::normalize_symbol;

#[tokio::test]
async fn quote_parses_string_encoded_fields() {
    let server = common::setup_server();
    let mock = common::mock_quote(&server, "AAPL");
    let client = common::client_for(&server);

    let q = client.quote("AAPL").await.unwrap();
    mock.assert();

    assert_eq!(q.symbol, "AAPL");
    assert_eq!(q.price, dec("181.18"));
    assert_eq!(q.change, dec("-0.73"));
    assert_eq!(q.change_percent, "-0.4013%");
    assert_eq!(q.open, dec("181.99"));
    assert_eq!(q.high, dec("182.76"));
    assert_eq!(q.low, dec("180.17"));
    assert_eq!(q.volume, 62_379_661);
    assert_eq!(q.latest_trading_day, "2024-01-05");
}

#[tokio::test]
async fn quote_accepts_plain_json_numbers() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/MSFT");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"symbol":"MSFT","price":367.75,"change":2.5,"change_percent":"0.68%",
                    "open":365.1,"high":368.0,"low":364.9,"volume":20000000,
                    "latest_trading_day":"2024-01-05"}"#,
            );
    });
    let client = common::client_for(&server);

    let q = client.quote("msft").await.unwrap();
    mock.assert();

    assert_eq!(q.price, dec("367.75"));
    assert_eq!(q.volume, 20_000_000);
}

#[tokio::test]
async fn quote_trims_and_uppercases_before_requesting() {
    let server = common::setup_server();
    let mock = common::mock_quote(&server, "AAPL");
    let client = common::client_for(&server);

    let q = client.quote("  aapl \t").await.unwrap();

    mock.assert();
    assert_eq!(q.symbol, "AAPL");
}

#[tokio::test]
async fn blank_input_is_rejected_without_a_request() {
    let server = common::setup_server();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{}");
    });
    let client = common::client_for(&server);

    for raw in ["", " ", "   \t\n"] {
        let err = client.quote(raw).await.unwrap_err();
        assert_eq!(err, QuoteError::EmptyInput);
        assert_eq!(err.to_string(), "Please enter a ticker code");
    }

    any.assert_calls(0);
}

#[tokio::test]
async fn repeated_lookup_issues_a_fresh_request_each_time() {
    let server = common::setup_server();
    let mock = common::mock_quote(&server, "AAPL");
    let client = common::client_for(&server);

    let first = client.quote("AAPL").await.unwrap();
    mock.assert_calls(1);
    let second = client.quote("AAPL").await.unwrap();
    mock.assert_calls(2);

    assert_eq!(first, second);
}

#[test]
fn normalize_symbol_trims_and_uppercases() {
    assert_eq!(normalize_symbol(" brk.b "), Some("BRK.B".to_string()));
    assert_eq!(normalize_symbol("\t"), None);
    assert_eq!(normalize_symbol(""), None);
}
