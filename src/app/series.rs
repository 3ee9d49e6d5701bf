//! Time-series panel: period selection, series fetch and CSV export, each with its own state.

use std::path::PathBuf;

use crate::app::{RequestToken, Sequencer};
use crate::core::{CsvExport, ExportError, Period, SeriesError, TimeSeries};

/// State of the series fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded {
        /// Symbol the series was fetched for.
        symbol: String,
        period: Period,
        series: TimeSeries,
    },
    Failed(String),
}

/// Export has no loaded state: a success only produces a download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExportPhase {
    #[default]
    Idle,
    Exporting,
    Failed(String),
}

/// A series fetch the host has to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    pub token: RequestToken,
    pub symbol: String,
    pub period: Period,
}

/// A CSV export the host has to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub token: RequestToken,
    pub symbol: String,
    pub period: Period,
}

/// Bytes to hand to the download sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub token: RequestToken,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Time-series panel state, driven by the current symbol of the app.
#[derive(Debug, Clone, Default)]
pub struct SeriesController {
    period: Period,
    fetch: FetchPhase,
    export: ExportPhase,
    fetch_seq: Sequencer,
    export_seq: Sequencer,
    last_download: Option<PathBuf>,
}

impl SeriesController {
    pub fn period(&self) -> Period {
        self.period
    }

    pub fn fetch_phase(&self) -> &FetchPhase {
        &self.fetch
    }

    pub fn export_phase(&self) -> &ExportPhase {
        &self.export
    }

    /// Where the most recent successful export was saved.
    pub fn last_download(&self) -> Option<&PathBuf> {
        self.last_download.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchPhase::Loading)
    }

    /// Loaded series, only if it belongs to `symbol`.
    pub fn series_for(&self, symbol: &str) -> Option<&TimeSeries> {
        match &self.fetch {
            FetchPhase::Loaded { symbol: s, series, .. } if !symbol.is_empty() && s == symbol => {
                Some(series)
            }
            _ => None,
        }
    }

    /// Local selection only; never triggers a fetch.
    pub fn select_period(&mut self, period: Period) {
        self.period = period;
    }

    /// Starts a fetch for `symbol` with the selected period.
    ///
    /// Any previously loaded series is dropped; a success replaces it wholesale.
    pub fn request_fetch(&mut self, symbol: &str) -> Result<SeriesRequest, SeriesError> {
        if symbol.is_empty() {
            let err = SeriesError::NoSymbolSelected;
            self.fetch = FetchPhase::Failed(err.to_string());
            return Err(err);
        }

        let token = self.fetch_seq.issue();
        self.fetch = FetchPhase::Loading;
        Ok(SeriesRequest {
            token,
            symbol: symbol.to_string(),
            period: self.period,
        })
    }

    /// Applies a fetch result. Returns `false` when the response was stale and dropped.
    pub fn resolve_fetch(
        &mut self,
        request: &SeriesRequest,
        result: Result<TimeSeries, SeriesError>,
    ) -> bool {
        if !self.fetch_seq.settle(request.token) {
            return false;
        }
        self.fetch = match result {
            Ok(series) => FetchPhase::Loaded {
                symbol: request.symbol.clone(),
                period: request.period,
                series,
            },
            Err(err) => FetchPhase::Failed(err.to_string()),
        };
        true
    }

    /// Starts an export for `symbol`. Requires a loaded series for that same symbol.
    pub fn request_export(&mut self, symbol: &str) -> Result<ExportRequest, ExportError> {
        let checked = if symbol.is_empty() {
            Err(ExportError::NoSymbolSelected)
        } else if self.series_for(symbol).is_none() {
            Err(ExportError::NoDataLoaded)
        } else {
            Ok(())
        };
        if let Err(err) = checked {
            self.export = ExportPhase::Failed(err.to_string());
            return Err(err);
        }

        let token = self.export_seq.issue();
        self.export = ExportPhase::Exporting;
        Ok(ExportRequest {
            token,
            symbol: symbol.to_string(),
            period: self.period,
        })
    }

    /// Applies an export response. On success the bytes still have to be saved,
    /// so the export stays in `Exporting` and a [`SaveRequest`] is returned.
    pub fn resolve_export(
        &mut self,
        token: RequestToken,
        result: Result<CsvExport, ExportError>,
    ) -> Option<SaveRequest> {
        if !self.export_seq.is_latest(token) {
            return None;
        }
        match result {
            Ok(export) => Some(SaveRequest {
                token,
                file_name: export.file_name(),
                bytes: export.bytes,
            }),
            Err(err) => {
                self.export_seq.settle(token);
                self.export = ExportPhase::Failed(err.to_string());
                None
            }
        }
    }

    /// Applies the outcome of saving the file. Returns `false` for stale tokens.
    pub fn resolve_save(&mut self, token: RequestToken, result: Result<PathBuf, String>) -> bool {
        if !self.export_seq.settle(token) {
            return false;
        }
        match result {
            Ok(path) => {
                self.export = ExportPhase::Idle;
                self.last_download = Some(path);
            }
            Err(_) => self.export = ExportPhase::Failed(ExportError::ExportFailed.to_string()),
        }
        true
    }
}
