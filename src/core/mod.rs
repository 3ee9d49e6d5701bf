//! Core components of the `stockview` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`StockClient`] and its builder.
//! - The error types for each operation family.
//! - Shared data models like [`Quote`], [`TimeSeries`] and [`Period`].
//! - The [`StockService`] seam the application store runs against.

/// The HTTP client (`StockClient`), builder, and configuration.
pub mod client;
/// Error types: `StockError` plus the per-operation `QuoteError`, `SeriesError`, `ExportError`.
pub mod error;
/// Shared data models used across the lookup and state modules.
pub mod models;
/// Service trait abstracting the remote operations.
pub mod services;

pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::StockClient`
pub use client::{StockClient, StockClientBuilder};
pub use error::{ExportError, QuoteError, SeriesError, StockError};
pub use models::{CsvExport, Period, Quote, TimeSeries, TimeSeriesPoint};
pub use services::StockService;
