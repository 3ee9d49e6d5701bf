//! Centralized constants for default endpoints and UA.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("stockview/", env!("CARGO_PKG_VERSION"));

/// Backend base URL (paths like `stock/{SYMBOL}` are joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Environment variable that overrides the backend base URL in `from_env`.
pub(crate) const BASE_URL_ENV: &str = "STOCKVIEW_BASE_URL";
