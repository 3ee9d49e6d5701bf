use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* ----- QUOTES (shared by quote/ and app/) ----- */

/// Point-in-time snapshot of a ticker's price and daily trading stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Symbol as returned by the backend. This is the authoritative current symbol.
    pub symbol: String,
    pub price: Decimal,
    pub change: Decimal,
    /// Percent change as the backend formats it (e.g. `"1.2345%"`).
    pub change_percent: String,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: u64,
    /// Trading day as the backend formats it; displayed verbatim.
    pub latest_trading_day: String,
}

/* ----- TIME SERIES (shared by timeseries/ and app/) ----- */

/// One daily OHLCV record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

/// Historical daily records for one ticker, always ascending by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeries {
    last_refreshed: String,
    data: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    /// Builds a series, sorting `data` ascending by date. The backend gives no order guarantee.
    pub fn new(last_refreshed: impl Into<String>, mut data: Vec<TimeSeriesPoint>) -> Self {
        data.sort_by_key(|p| p.date);
        Self {
            last_refreshed: last_refreshed.into(),
            data,
        }
    }

    pub fn last_refreshed(&self) -> &str {
        &self.last_refreshed
    }

    /// Points in ascending date order.
    pub fn data(&self) -> &[TimeSeriesPoint] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/* ----- PERIOD ----- */

/// Server-interpreted date-range filter for series and export requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Last 30 days.
    #[default]
    #[serde(rename = "30d")]
    D30,
    /// Last 3 months.
    #[serde(rename = "3m")]
    M3,
    /// Last year.
    #[serde(rename = "1y")]
    Y1,
}

impl Period {
    /// Every selectable period, in selector order.
    pub const ALL: [Period; 3] = [Period::D30, Period::M3, Period::Y1];

    /// The wire value sent as the `period` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Period::D30 => "30d",
            Period::M3 => "3m",
            Period::Y1 => "1y",
        }
    }

    /// Selector label.
    pub const fn label(self) -> &'static str {
        match self {
            Period::D30 => "Last 30 days",
            Period::M3 => "Last 3 months",
            Period::Y1 => "Last year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown period: {s}"))
    }
}

/* ----- EXPORT ----- */

/// Raw CSV payload returned by the export endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub symbol: String,
    pub period: Period,
    pub bytes: Vec<u8>,
}

impl CsvExport {
    /// Download file name, `{symbol}_timeseries_{period}.csv`.
    pub fn file_name(&self) -> String {
        export_file_name(&self.symbol, self.period)
    }
}

pub(crate) fn export_file_name(symbol: &str, period: Period) -> String {
    format!("{symbol}_timeseries_{period}.csv")
}
