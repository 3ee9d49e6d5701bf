//! Search box state machine: `Idle -> Searching -> Displaying | Failed`.

use crate::app::{RequestToken, Sequencer};
use crate::core::{Quote, QuoteError};
use crate::quote::{MAX_SYMBOL_LEN, normalize_symbol};

/// Where the search box is in its lookup cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    /// A lookup is in flight for this symbol.
    Searching { symbol: String },
    /// The last lookup succeeded; the quote itself is held by the app state.
    Displaying { symbol: String },
    /// The last submission failed; holds the user-facing message.
    Failed(String),
}

/// A quote lookup the host has to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub token: RequestToken,
    /// Trimmed, uppercased input.
    pub symbol: String,
}

/// Outcome of pressing "search".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Lookup(QuoteRequest),
    /// Blank input. No request is made.
    Rejected(QuoteError),
}

/// What a resolved lookup means for the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Found(Quote),
    Failed(QuoteError),
}

/// Search box: typed input, lookup phase and the quote request tokens.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    input: String,
    phase: SearchPhase,
    seq: Sequencer,
}

impl SearchController {
    /// Current text of the search box.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    /// Stores typed text, uppercased and cut to [`MAX_SYMBOL_LEN`] characters.
    pub fn set_input(&mut self, raw: &str) {
        self.input = raw.to_uppercase().chars().take(MAX_SYMBOL_LEN).collect();
    }

    /// Starts a lookup for the current input, or rejects blank input outright.
    ///
    /// Submitting while a lookup is in flight is allowed: the new request gets
    /// a newer token and the older response will be discarded. A blank
    /// submission also supersedes the in-flight lookup.
    pub fn submit(&mut self) -> Submission {
        let Some(symbol) = normalize_symbol(&self.input) else {
            self.seq.cancel();
            self.phase = SearchPhase::Failed(QuoteError::EmptyInput.to_string());
            return Submission::Rejected(QuoteError::EmptyInput);
        };

        let token = self.seq.issue();
        self.phase = SearchPhase::Searching {
            symbol: symbol.clone(),
        };
        Submission::Lookup(QuoteRequest { token, symbol })
    }

    /// Applies a lookup result. Returns `None` when `token` is not the latest
    /// issued lookup; the response is then dropped without touching state.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        result: Result<Quote, QuoteError>,
    ) -> Option<SearchEvent> {
        if !self.seq.settle(token) {
            return None;
        }

        Some(match result {
            Ok(quote) => {
                self.phase = SearchPhase::Displaying {
                    symbol: quote.symbol.clone(),
                };
                SearchEvent::Found(quote)
            }
            Err(err) => {
                self.phase = SearchPhase::Failed(err.to_string());
                SearchEvent::Failed(err)
            }
        })
    }
}
