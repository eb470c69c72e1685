//! Parsing of user-entered investment amounts.

use crate::errors::{AdReachError, Result};

/// Parses an investment amount as typed at the prompt.
///
/// Surrounding whitespace (including the trailing newline from stdin) is
/// ignored. Negative and zero amounts are accepted; `nan` and infinities are
/// not, since they have no view count.
pub fn parse_investment(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|e: std::num::ParseFloatError| {
        AdReachError::invalid_investment(trimmed, e.to_string())
    })?;

    if !value.is_finite() {
        return Err(AdReachError::invalid_investment(
            trimmed,
            "amount must be a finite number",
        ));
    }

    Ok(value)
}
