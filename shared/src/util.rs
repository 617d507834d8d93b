//! Small helpers shared by models and the CLI

use chrono::{DateTime, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DomainError, DomainResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: dish, category
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, review comments
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> DomainResult<()> {
    if value.chars().count() > max_len {
        return Err(DomainError::validation(
            field,
            format!("is too long ({} chars, max {max_len})", value.chars().count()),
        ));
    }
    Ok(())
}

/// Validate that an id is positive.
pub fn validate_id(value: i64, field: &str) -> DomainResult<()> {
    if value <= 0 {
        return Err(DomainError::validation(
            field,
            format!("must be a positive id, got {value}"),
        ));
    }
    Ok(())
}

// ── Formatting ──────────────────────────────────────────────────────

/// Split a comma separated form value into trimmed, non-empty entries
///
/// `"nueces,  marisco ,"` → `["nueces", "marisco"]`
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Money with two decimals, half away from zero
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Render a backend date as `d/m/yyyy`
///
/// Accepts plain `YYYY-MM-DD` and RFC 3339 timestamps; anything else is
/// returned untouched.
pub fn format_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(d) => d.format("%-d/%-m/%Y").to_string(),
        None => raw.to_string(),
    }
}
