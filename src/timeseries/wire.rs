use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::core::wire::{de_decimal, de_u64_from_any};
use crate::core::{TimeSeries, TimeSeriesPoint};

#[derive(Deserialize)]
pub(crate) struct SeriesEnvelope {
    #[serde(default)]
    pub(crate) last_refreshed: Option<String>,
    #[serde(default)]
    pub(crate) data: Vec<PointNode>,
}

#[derive(Deserialize)]
pub(crate) struct PointNode {
    #[serde(deserialize_with = "de_date")]
    pub(crate) date: NaiveDate,
    #[serde(deserialize_with = "de_decimal")]
    pub(crate) open: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    pub(crate) high: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    pub(crate) low: Decimal,
    #[serde(deserialize_with = "de_decimal")]
    pub(crate) close: Decimal,
    #[serde(deserialize_with = "de_u64_from_any")]
    pub(crate) volume: u64,
}

/// Accepts `YYYY-MM-DD`, or a full `YYYY-MM-DD HH:MM:SS` / RFC 3339 stamp (date part kept).
fn de_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| chrono::DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|e| serde::de::Error::custom(format!("invalid date {s:?}: {e}")))
}

impl From<SeriesEnvelope> for TimeSeries {
    fn from(env: SeriesEnvelope) -> Self {
        let points = env
            .data
            .into_iter()
            .map(|p| TimeSeriesPoint {
                date: p.date,
                open: p.open,
                high: p.high,
                low: p.low,
                close: p.close,
                volume: p.volume,
            })
            .collect();
        TimeSeries::new(env.last_refreshed.unwrap_or_default(), points)
    }
}
