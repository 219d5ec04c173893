//! Conversion rules between user-entered text and optional fields.
//!
//! Optional fields (`value`, `highscore`, `purchase_date`) are `Option<T>`
//! all the way down: `None` binds as SQL NULL and NULL decodes as `None`.
//! The one lossy rule lives here: blank text entered for an optional field
//! means "absent". Required string fields are never passed through these
//! helpers and are stored exactly as given.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Text could not be converted into an optional field's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} '{input}': {reason}")]
pub struct ConversionError {
    pub field: &'static str,
    pub input: String,
    pub reason: String,
}

/// Parse text for an optional field. Blank text yields `Ok(None)`.
pub fn optional_from_text<T>(field: &'static str, text: &str) -> Result<Option<T>, ConversionError>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConversionError {
            field,
            input: text.to_string(),
            reason: e.to_string(),
        })
}

/// Collapse blank optional text to `None`, using the same rule as
/// [`optional_from_text`].
pub fn blank_to_none(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.trim().is_empty())
}

/// Parse a purchase value such as `"59.99"`.
///
/// Negative and non-finite amounts are rejected.
pub fn parse_value(text: &str) -> Result<Option<f64>, ConversionError> {
    let value = optional_from_text::<f64>("value", text)?;
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ConversionError {
            field: "value",
            input: text.to_string(),
            reason: "must be a non-negative amount".to_string(),
        }),
        other => Ok(other),
    }
}

/// Parse a highscore such as `"42"`.
pub fn parse_highscore(text: &str) -> Result<Option<i32>, ConversionError> {
    optional_from_text("highscore", text)
}

/// Parse a purchase date in `YYYY-MM-DD` form.
pub fn parse_purchase_date(text: &str) -> Result<Option<NaiveDate>, ConversionError> {
    optional_from_text("purchase date", text)
}
