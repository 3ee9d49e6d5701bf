use thiserror::Error;

/// Errors raised while building the client or talking to its surroundings
/// (sinks, the runtime channel), as opposed to the per-operation errors below.
#[derive(Debug, Error)]
pub enum StockError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Writing a downloaded file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// Invalid client configuration (for example a bad base URL in the environment).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The application runtime is no longer accepting actions.
    #[error("application runtime has stopped")]
    Closed,
}

/// Failure of a single-symbol quote lookup.
///
/// `Display` renders the user-facing message for each kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Blank or whitespace-only ticker; no request was issued.
    #[error("Please enter a ticker code")]
    EmptyInput,

    /// The backend answered 404 for this symbol.
    #[error("Ticker code \"{symbol}\" was not found")]
    NotFound {
        /// The normalized symbol that was looked up.
        symbol: String,
    },

    /// The backend answered 429. The response body is never consulted.
    #[error("API rate limit reached. Please wait a moment and try again")]
    RateLimited,

    /// Any other HTTP error status. `detail` comes from a `{"detail": ..}` body when present.
    #[error("An error occurred: {}", detail.as_deref().unwrap_or("server error"))]
    ServerError {
        /// Server-provided detail, if the error body carried one.
        detail: Option<String>,
    },

    /// No response was received (connection refused, DNS, timeout, ...).
    #[error("Could not connect to the server. Make sure the backend is running")]
    Unreachable,

    /// Anything else, such as an undecodable success body.
    #[error("An unexpected error occurred")]
    Unknown(String),
}

/// Failure of a time-series lookup. All HTTP failure modes collapse into `FetchFailed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// No current symbol; no request was issued.
    #[error("Please look up a ticker code first")]
    NoSymbolSelected,

    /// The lookup failed for any reason.
    #[error("{}", detail.as_deref().unwrap_or("Failed to fetch time series data"))]
    FetchFailed {
        /// Server-provided detail, if the error body carried one.
        detail: Option<String>,
    },
}

/// Failure of a CSV export. No server detail is ever surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// No current symbol; no request was issued.
    #[error("Please look up a ticker code first")]
    NoSymbolSelected,

    /// Export was triggered before any series was loaded for the current symbol.
    #[error("Fetch the time series before exporting")]
    NoDataLoaded,

    /// The export request or the file save failed.
    #[error("CSV export failed")]
    ExportFailed,
}
