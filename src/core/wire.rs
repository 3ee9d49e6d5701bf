//! Serde helpers for the backend's loosely typed numbers.
//!
//! The backend forwards upstream values as JSON strings (`"189.8400"`,
//! `"52164523"`), but numbers are accepted too.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(serde_json::Number),
    Str(String),
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

pub(crate) fn de_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => n.to_string(),
        NumOrStr::Str(s) => s,
    };
    parse_decimal(&text)
        .ok_or_else(|| serde::de::Error::custom(format!("cannot parse {text:?} as decimal")))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn de_u64_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => {
            if let Some(u) = n.as_u64() {
                return Ok(u);
            }
            n.to_string()
        }
        NumOrStr::Str(s) => s,
    };
    let trimmed = text.trim();
    if let Ok(u) = trimmed.parse::<u64>() {
        return Ok(u);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(serde::de::Error::custom(format!(
            "cannot convert {text:?} to u64"
        ))),
    }
}

/// Structured error body, `{"detail": "..."}`, as returned by the backend on failures.
#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) detail: Option<serde_json::Value>,
}

/// Extracts a human-readable `detail` from an error body, if it has one.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Null | serde_json::Value::String(_) => None,
        other => Some(other.to_string()),
    }
}
