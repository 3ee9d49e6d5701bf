//! Application state container.
//!
//! [`AppState::reduce`] is the single transition function: it takes a typed
//! [`Action`], updates state, and returns the [`Effect`]s (network calls, file
//! saves) the host must run. Each effect resolves into another `Action`
//! carrying the request token it was issued with, so a response that is no
//! longer the latest for its operation is recognized and dropped.
//!
//! Data flows one way: a search result flows up into [`AppState`] (quote and
//! current symbol), and the current symbol flows down into the series panel.

mod runtime;
pub mod search;
pub mod series;
pub mod view;

use std::path::PathBuf;

pub use runtime::{App, AppHandle, run_effect};
pub use search::{QuoteRequest, SearchController, SearchEvent, SearchPhase, Submission};
pub use series::{
    ExportPhase, ExportRequest, FetchPhase, SaveRequest, SeriesController, SeriesRequest,
};
pub use view::{AppView, Direction, QuoteCard, SeriesInfo, SeriesView};

use crate::core::{CsvExport, ExportError, Period, Quote, QuoteError, SeriesError, TimeSeries};

/// Identifies one issued request of one operation. Tokens only grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Per-operation token source. Only the most recently issued token is accepted,
/// and only once.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sequencer {
    last: u64,
    settled: bool,
}

impl Sequencer {
    pub(crate) fn issue(&mut self) -> RequestToken {
        self.last += 1;
        self.settled = false;
        RequestToken(self.last)
    }

    pub(crate) fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.last && !self.settled
    }

    /// Drops the outstanding request, if any. Its response will be discarded.
    pub(crate) fn cancel(&mut self) {
        self.settled = true;
    }

    /// Marks `token` as answered. `false` if it was stale or already answered.
    pub(crate) fn settle(&mut self, token: RequestToken) -> bool {
        if !self.is_latest(token) {
            return false;
        }
        self.settled = true;
        true
    }
}

/// Everything that can happen to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user typed in the search box.
    InputChanged(String),
    /// The user submitted the search box.
    SubmitSearch,
    /// Shorthand for `InputChanged` followed by `SubmitSearch`.
    Search(String),
    QuoteResolved {
        token: RequestToken,
        result: Result<Quote, QuoteError>,
    },
    SelectPeriod(Period),
    FetchSeries,
    SeriesResolved {
        request: SeriesRequest,
        result: Result<TimeSeries, SeriesError>,
    },
    ExportCsv,
    ExportResolved {
        token: RequestToken,
        result: Result<CsvExport, ExportError>,
    },
    /// The download sink finished. The error is the sink's message.
    ExportSaved {
        token: RequestToken,
        result: Result<PathBuf, String>,
    },
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchQuote(QuoteRequest),
    FetchSeries(SeriesRequest),
    ExportCsv(ExportRequest),
    Save(SaveRequest),
}

/// Top-level state: last good quote, current symbol, the search box's loading and
/// error flags, and the series panel.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    quote: Option<Quote>,
    symbol: String,
    loading: bool,
    error: Option<String>,
    search: SearchController,
    series: SeriesController,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successful quote, cleared when a lookup fails.
    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    /// Symbol of the last successful quote, empty until one succeeds.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    pub fn series(&self) -> &SeriesController {
        &self.series
    }

    /// Applies one action and returns the effects to run.
    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::InputChanged(text) => {
                self.search.set_input(&text);
                Vec::new()
            }
            Action::SubmitSearch => self.submit_search(),
            Action::Search(text) => {
                self.search.set_input(&text);
                self.submit_search()
            }
            Action::QuoteResolved { token, result } => {
                match self.search.resolve(token, result) {
                    Some(SearchEvent::Found(quote)) => {
                        self.symbol = quote.symbol.clone();
                        self.quote = Some(quote);
                        self.error = None;
                        self.loading = false;
                    }
                    Some(SearchEvent::Failed(err)) => {
                        self.error = Some(err.to_string());
                        self.quote = None;
                        self.loading = false;
                    }
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(token = token.get(), "discarding stale quote response");
                    }
                }
                Vec::new()
            }
            Action::SelectPeriod(period) => {
                self.series.select_period(period);
                Vec::new()
            }
            Action::FetchSeries => match self.series.request_fetch(&self.symbol) {
                Ok(req) => vec![Effect::FetchSeries(req)],
                Err(_) => Vec::new(),
            },
            Action::SeriesResolved { request, result } => {
                if !self.series.resolve_fetch(&request, result) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(token = request.token.get(), "discarding stale series response");
                }
                Vec::new()
            }
            Action::ExportCsv => match self.series.request_export(&self.symbol) {
                Ok(req) => vec![Effect::ExportCsv(req)],
                Err(_) => Vec::new(),
            },
            Action::ExportResolved { token, result } => self
                .series
                .resolve_export(token, result)
                .map(Effect::Save)
                .into_iter()
                .collect(),
            Action::ExportSaved { token, result } => {
                if let Err(_msg) = &result {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %_msg, "saving CSV export failed");
                }
                self.series.resolve_save(token, result);
                Vec::new()
            }
        }
    }

    fn submit_search(&mut self) -> Vec<Effect> {
        match self.search.submit() {
            Submission::Lookup(req) => {
                self.loading = true;
                self.error = None;
                vec![Effect::FetchQuote(req)]
            }
            Submission::Rejected(err) => {
                self.error = Some(err.to_string());
                self.loading = false;
                Vec::new()
            }
        }
    }

    /// Render model for the current state.
    pub fn view(&self) -> AppView {
        AppView::from_state(self)
    }
}
