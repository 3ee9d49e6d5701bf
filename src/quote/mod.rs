use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::net::{self, Failure};
use crate::core::wire::{de_decimal, de_u64_from_any, error_detail};
use crate::core::{Quote, QuoteError, StockClient};

/* ---------------- Public API ---------------- */

/// Longest ticker the search input accepts.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Trims and uppercases a raw ticker. Returns `None` when nothing is left.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Looks up a single quote via `GET /stock/{SYMBOL}`.
///
/// Blank input fails with [`QuoteError::EmptyInput`] before any request is made.
/// Nothing is cached; every call issues exactly one request.
pub async fn fetch_quote(client: &StockClient, symbol_raw: &str) -> Result<Quote, QuoteError> {
    let symbol = normalize_symbol(symbol_raw).ok_or(QuoteError::EmptyInput)?;

    let url = client
        .endpoint(&["stock", &symbol])
        .map_err(|e| QuoteError::Unknown(e.to_string()))?;

    let resp = net::get(client, url, "application/json")
        .await
        .map_err(|f| map_failure(f, &symbol))?;

    let body = resp
        .text()
        .await
        .map_err(|e| QuoteError::Unknown(format!("reading quote body: {e}")))?;

    parse_quote(&body)
}

/* ---------------- Internal helpers ---------------- */

fn map_failure(failure: Failure, symbol: &str) -> QuoteError {
    match failure {
        Failure::Transport(e) => {
            if e.is_builder() {
                QuoteError::Unknown(e.to_string())
            } else {
                QuoteError::Unreachable
            }
        }
        Failure::Status { status: 404, .. } => QuoteError::NotFound {
            symbol: symbol.to_string(),
        },
        Failure::Status { status: 429, .. } => QuoteError::RateLimited,
        Failure::Status { body, .. } => QuoteError::ServerError {
            detail: body.as_deref().and_then(error_detail),
        },
    }
}

fn parse_quote(body: &str) -> Result<Quote, QuoteError> {
    let node: QuoteNode = serde_json::from_str(body)
        .map_err(|e| QuoteError::Unknown(format!("quote json parse: {e}")))?;
    Ok(node.into())
}

/* ---------------- Minimal serde for the quote body ---------------- */

#[derive(Deserialize)]
struct QuoteNode {
    symbol: String,
    #[serde(deserialize_with = "de_decimal")]
    price: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    change: Decimal,
    #[serde(default)]
    change_percent: String,
    #[serde(deserialize_with = "de_decimal")]
    open: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    high: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    low: Decimal,
    #[serde(deserialize_with = "de_u64_from_any")]
    volume: u64,
    #[serde(default)]
    latest_trading_day: String,
}

impl From<QuoteNode> for Quote {
    fn from(n: QuoteNode) -> Self {
        Self {
            symbol: n.symbol,
            price: n.price,
            change: n.change,
            change_percent: n.change_percent,
            open: n.open,
            high: n.high,
            low: n.low,
            volume: n.volume,
            latest_trading_day: n.latest_trading_day,
        }
    }
}
