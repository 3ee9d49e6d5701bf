//! Public client surface + builder.
//! Defaults (UA, base URL, env var name) live in `constants`.

mod constants;

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::core::{
    CsvExport, ExportError, Period, Quote, QuoteError, SeriesError, StockError, StockService,
    TimeSeries,
};
use constants::{BASE_URL_ENV, DEFAULT_BASE_URL, USER_AGENT};

/// HTTP client for the stock backend.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct StockClient {
    http: Client,
    base_url: Url,
}

impl Default for StockClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl StockClient {
    /// Create a new builder.
    pub fn builder() -> StockClientBuilder {
        StockClientBuilder::default()
    }

    /// The backend base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, StockError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StockError::Config(format!("base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /* -------- operations -------- */

    /// Looks up the current quote for `symbol_raw` (trimmed and uppercased first).
    ///
    /// # Errors
    ///
    /// See [`QuoteError`] for the mapping of each failure mode.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn quote(&self, symbol_raw: &str) -> Result<Quote, QuoteError> {
        crate::quote::fetch_quote(self, symbol_raw).await
    }

    /// Fetches the daily time series for `symbol` over `period`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NoSymbolSelected`] for an empty symbol, otherwise
    /// [`SeriesError::FetchFailed`] for any failure.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn time_series(&self, symbol: &str, period: Period) -> Result<TimeSeries, SeriesError> {
        crate::timeseries::fetch_series(self, symbol, period).await
    }

    /// Downloads the raw CSV export for `symbol` over `period`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NoSymbolSelected`] for an empty symbol, otherwise
    /// [`ExportError::ExportFailed`] for any failure.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn export(&self, symbol: &str, period: Period) -> Result<CsvExport, ExportError> {
        crate::timeseries::export_csv(self, symbol, period).await
    }

    /// Calls `GET /health` and reports whether the backend says it is healthy.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or an undecodable body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn health(&self) -> Result<bool, StockError> {
        #[derive(Deserialize)]
        struct Health {
            status: Option<String>,
        }

        let url = self.endpoint(&["health"])?;
        let resp = self.http.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(StockError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        let health: Health = resp.json().await?;
        Ok(health.status.as_deref() == Some("healthy"))
    }
}

impl StockService for StockClient {
    fn fetch_quote<'a>(&'a self, symbol_raw: &'a str) -> BoxFuture<'a, Result<Quote, QuoteError>> {
        Box::pin(self.quote(symbol_raw))
    }

    fn fetch_series<'a>(
        &'a self,
        symbol: &'a str,
        period: Period,
    ) -> BoxFuture<'a, Result<TimeSeries, SeriesError>> {
        Box::pin(self.time_series(symbol, period))
    }

    fn export_csv<'a>(
        &'a self,
        symbol: &'a str,
        period: Period,
    ) -> BoxFuture<'a, Result<CsvExport, ExportError>> {
        Box::pin(self.export(symbol, period))
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct StockClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl StockClientBuilder {
    /// Start from the environment: `STOCKVIEW_BASE_URL` overrides the base URL when set.
    ///
    /// # Errors
    ///
    /// Fails if the variable is set but is not a valid URL.
    pub fn from_env() -> Result<Self, StockError> {
        let mut builder = Self::default();
        if let Ok(raw) = std::env::var(BASE_URL_ENV)
            && !raw.trim().is_empty()
        {
            let url = Url::parse(raw.trim())
                .map_err(|e| StockError::Config(format!("{BASE_URL_ENV}={raw}: {e}")))?;
            builder.base_url = Some(url);
        }
        Ok(builder)
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the backend base URL (default `http://localhost:8000/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<StockClient, StockError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if base_url.cannot_be_a_base() {
            return Err(StockError::Config(format!("base URL cannot be a base: {base_url}")));
        }

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(StockClient {
            http: httpb.build()?,
            base_url,
        })
    }
}
