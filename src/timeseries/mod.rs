//! Historical series and CSV export lookups for a symbol.

pub mod chart;
mod wire;

pub use chart::{ChartData, ChartPoint};

use crate::core::net::{self, Failure};
use crate::core::wire::error_detail;
use crate::core::{CsvExport, ExportError, Period, SeriesError, StockClient, TimeSeries};
use wire::SeriesEnvelope;

/// Fetches `GET /stock/{SYMBOL}/timeseries?period=..`.
///
/// The returned points are sorted ascending by date. Every failure after the
/// symbol check collapses into [`SeriesError::FetchFailed`], carrying the
/// server's `detail` when the error body has one.
pub async fn fetch_series(
    client: &StockClient,
    symbol: &str,
    period: Period,
) -> Result<TimeSeries, SeriesError> {
    if symbol.trim().is_empty() {
        return Err(SeriesError::NoSymbolSelected);
    }

    let mut url = client
        .endpoint(&["stock", symbol, "timeseries"])
        .map_err(|_| SeriesError::FetchFailed { detail: None })?;
    url.query_pairs_mut().append_pair("period", period.as_str());

    let resp = net::get(client, url, "application/json")
        .await
        .map_err(|f| match f {
            Failure::Status { body, .. } => SeriesError::FetchFailed {
                detail: body.as_deref().and_then(error_detail),
            },
            Failure::Transport(_) => SeriesError::FetchFailed { detail: None },
        })?;

    let body = resp
        .text()
        .await
        .map_err(|_| SeriesError::FetchFailed { detail: None })?;

    let env: SeriesEnvelope = serde_json::from_str(&body).map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %_e, "time series json parse");
        SeriesError::FetchFailed { detail: None }
    })?;

    Ok(env.into())
}

/// Fetches `GET /stock/{SYMBOL}/export?period=..` as raw bytes.
///
/// Export failures never carry server detail.
pub async fn export_csv(
    client: &StockClient,
    symbol: &str,
    period: Period,
) -> Result<CsvExport, ExportError> {
    if symbol.trim().is_empty() {
        return Err(ExportError::NoSymbolSelected);
    }

    let mut url = client
        .endpoint(&["stock", symbol, "export"])
        .map_err(|_| ExportError::ExportFailed)?;
    url.query_pairs_mut().append_pair("period", period.as_str());

    let resp = net::get(client, url, "text/csv, application/octet-stream, */*")
        .await
        .map_err(|_| ExportError::ExportFailed)?;

    let bytes = resp.bytes().await.map_err(|_| ExportError::ExportFailed)?;

    Ok(CsvExport {
        symbol: symbol.to_string(),
        period,
        bytes: bytes.to_vec(),
    })
}
