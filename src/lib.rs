//! stockview: stock quote and time-series client.
//!
//! - [`StockClient`] talks to the backend: quote lookups, daily series, CSV export.
//! - [`format`] turns raw numbers into display strings.
//! - [`app`] is the state container a UI host drives with typed [`Action`]s.
//!
//! # Example
//!
//! ```no_run
//! # use stockview::{Action, App, DirectorySink, StockClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StockClient::builder().build()?;
//! let mut app = App::new(client, DirectorySink::new("downloads"));
//!
//! app.dispatch(Action::Search(" aapl ".into())).await;
//! app.dispatch(Action::FetchSeries).await;
//! app.dispatch(Action::ExportCsv).await;
//!
//! if let Some(card) = app.state().view().quote_card {
//!     println!("{} {}", card.symbol, card.price);
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod core;
pub mod download;
pub mod format;
pub mod quote;
pub mod timeseries;

pub use app::{Action, App, AppHandle, AppState, AppView, Effect, RequestToken};
pub use crate::core::{
    CsvExport, ExportError, Period, Quote, QuoteError, SeriesError, StockClient,
    StockClientBuilder, StockError, StockService, TimeSeries, TimeSeriesPoint,
};
pub use download::{DirectorySink, DownloadSink};
pub use timeseries::{ChartData, ChartPoint};
