//! Input contract for the charting widget.
//!
//! The widget itself is external; it receives plain `f64` points in ascending
//! date order and a y-axis domain padded around the close prices.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::core::TimeSeries;
use crate::format;

/// Padding applied below the lowest and above the highest close on the y-axis.
pub const Y_DOMAIN_PADDING: f64 = 5.0;

/// Shown by the widget when there is nothing to plot.
pub const EMPTY_CHART_MESSAGE: &str = "No chart data available";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl ChartPoint {
    /// X-axis tick label.
    pub fn tick_label(&self) -> String {
        format::format_date_short(self.date)
    }

    /// Tooltip header.
    pub fn tooltip_label(&self) -> String {
        format::format_date_localized(self.date)
    }
}

/// Chart-ready data for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    /// Converts a series to chart points, ascending by date.
    pub fn from_series(symbol: &str, series: &TimeSeries) -> Self {
        let mut points: Vec<ChartPoint> = series
            .data()
            .iter()
            .map(|p| ChartPoint {
                date: p.date,
                open: p.open.to_f64().unwrap_or(f64::NAN),
                high: p.high.to_f64().unwrap_or(f64::NAN),
                low: p.low.to_f64().unwrap_or(f64::NAN),
                close: p.close.to_f64().unwrap_or(f64::NAN),
                volume: p.volume,
            })
            .collect();
        // ascending by date
        points.sort_by_key(|p| p.date);

        Self {
            title: format!("{symbol} price chart"),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(min close - 5, max close + 5)`, or `None` when there are no finite closes.
    pub fn y_domain(&self) -> Option<(f64, f64)> {
        let closes = self.points.iter().map(|p| p.close).filter(|c| c.is_finite());
        let (min, max) = closes.fold(None, |acc: Option<(f64, f64)>, c| match acc {
            None => Some((c, c)),
            Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
        })?;
        Some((min - Y_DOMAIN_PADDING, max + Y_DOMAIN_PADDING))
    }
}

/// Tooltip value, two decimals.
pub fn format_tooltip_value(value: f64) -> String {
    format!("{value:.2}")
}
