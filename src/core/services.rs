use futures::future::BoxFuture;

use crate::core::{CsvExport, ExportError, Period, Quote, QuoteError, SeriesError, TimeSeries};

/// The remote operations the application state machine depends on.
///
/// This decouples the `app` store from the concrete HTTP client so hosts and tests
/// can substitute their own backend. It is implemented by [`StockClient`](crate::StockClient).
pub trait StockService: Send + Sync {
    /// Looks up a quote for a raw (untrimmed, any-case) symbol.
    fn fetch_quote<'a>(&'a self, symbol_raw: &'a str) -> BoxFuture<'a, Result<Quote, QuoteError>>;

    /// Fetches the daily series for `symbol` over `period`.
    fn fetch_series<'a>(
        &'a self,
        symbol: &'a str,
        period: Period,
    ) -> BoxFuture<'a, Result<TimeSeries, SeriesError>>;

    /// Fetches the CSV export for `symbol` over `period`.
    fn export_csv<'a>(
        &'a self,
        symbol: &'a str,
        period: Period,
    ) -> BoxFuture<'a, Result<CsvExport, ExportError>>;
}

impl<T: StockService + ?Sized> StockService for std::sync::Arc<T> {
    fn fetch_quote<'a>(&'a self, symbol_raw: &'a str) -> BoxFuture<'a, Result<Quote, QuoteError>> {
        (**self).fetch_quote(symbol_raw)
    }

    fn fetch_series<'a>(
        &'a self,
        symbol: &'a str,
        period: Period,
    ) -> BoxFuture<'a, Result<TimeSeries, SeriesError>> {
        (**self).fetch_series(symbol, period)
    }

    fn export_csv<'a>(
        &'a self,
        symbol: &'a str,
        period: Period,
    ) -> BoxFuture<'a, Result<CsvExport, ExportError>> {
        (**self).export_csv(symbol, period)
    }
}
