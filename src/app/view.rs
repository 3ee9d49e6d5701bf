//! Render model derived from [`AppState`]. Hosts draw these; nothing here does I/O.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::app::{AppState, ExportPhase, FetchPhase};
use crate::core::{Period, Quote};
use crate::format::{format_currency, format_volume};
use crate::timeseries::ChartData;

pub const LOADING_MESSAGE: &str = "Fetching data...";
pub const SEARCH_PLACEHOLDER: &str = "e.g. AAPL, GOOGL, TSLA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
}

/// Display-ready quote fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteCard {
    pub symbol: String,
    pub direction: Direction,
    pub price: String,
    pub change: String,
    pub change_percent: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub volume: String,
    pub trading_day: String,
}

impl From<&Quote> for QuoteCard {
    fn from(q: &Quote) -> Self {
        let direction = if q.change >= Decimal::ZERO {
            Direction::Up
        } else {
            Direction::Down
        };
        let change = match direction {
            Direction::Up => format!("+${}", format_currency(q.change)),
            Direction::Down => format!("${}", format_currency(q.change)),
        };
        Self {
            symbol: q.symbol.clone(),
            direction,
            price: dollars(q.price),
            change,
            change_percent: q.change_percent.clone(),
            open: dollars(q.open),
            high: dollars(q.high),
            low: dollars(q.low),
            volume: format_volume(q.volume),
            trading_day: q.latest_trading_day.clone(),
        }
    }
}

fn dollars(v: Decimal) -> String {
    format!("${}", format_currency(v))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesInfo {
    pub last_refreshed: String,
    pub point_count: usize,
}

/// The time-series panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
    pub period: Period,
    pub fetch_enabled: bool,
    pub fetch_label: &'static str,
    pub export_enabled: bool,
    pub exporting: bool,
    pub loading: bool,
    pub fetch_error: Option<String>,
    pub export_error: Option<String>,
    /// Present only while a series is loaded for the current symbol.
    pub chart: Option<ChartData>,
    pub info: Option<SeriesInfo>,
}

/// The whole screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppView {
    pub input: String,
    pub error_banner: Option<String>,
    pub loading: bool,
    /// Hidden while a lookup is in flight, even if an older quote exists.
    pub quote_card: Option<QuoteCard>,
    pub series: SeriesView,
}

impl AppView {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let quote_card = if state.is_loading() {
            None
        } else {
            state.quote().map(QuoteCard::from)
        };

        Self {
            input: state.search().input().to_string(),
            error_banner: state.error().map(str::to_string),
            loading: state.is_loading(),
            quote_card,
            series: series_view(state),
        }
    }
}

fn series_view(state: &AppState) -> SeriesView {
    let series = state.series();
    let symbol = state.symbol();
    let loading = series.is_loading();

    let (chart, info) = match series.series_for(symbol) {
        Some(data) => (
            Some(ChartData::from_series(symbol, data)),
            Some(SeriesInfo {
                last_refreshed: data.last_refreshed().to_string(),
                point_count: data.len(),
            }),
        ),
        _ => (None, None),
    };

    let fetch_error = match series.fetch_phase() {
        FetchPhase::Failed(msg) => Some(msg.clone()),
        _ => None,
    };
    let (exporting, export_error) = match series.export_phase() {
        ExportPhase::Idle => (false, None),
        ExportPhase::Exporting => (true, None),
        ExportPhase::Failed(msg) => (false, Some(msg.clone())),
    };

    SeriesView {
        period: series.period(),
        fetch_enabled: !symbol.is_empty() && !loading,
        fetch_label: if loading {
            "Fetching..."
        } else {
            "Fetch time series"
        },
        export_enabled: series.series_for(symbol).is_some() && !exporting,
        exporting,
        loading,
        fetch_error,
        export_error,
        chart,
        info,
    }
}
