//! Input Validation
//!
//! Submission fields arrive from a public web form; everything is checked
//! here before any row is written.

use crate::utils::AppError;

/// Rx numbers are exactly this many digits.
pub const RX_NUMBER_LEN: usize = 7;

/// Leading digits used by this pharmacy's rx number series.
const RX_LEADING_DIGITS: [char; 4] = ['2', '4', '6', '8'];

/// First name is display-only; keeps labels and logs bounded.
pub const MAX_FIRST_NAME_LEN: usize = 40;

/// Validate an rx number: digits only, exactly seven, first digit in the
/// pharmacy's series. Returns the trimmed value.
pub fn validate_rx_number(value: &str) -> Result<String, AppError> {
    let rx = value.trim();
    if rx.len() != RX_NUMBER_LEN || !rx.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(format!(
            "rx_number must be exactly {RX_NUMBER_LEN} digits"
        )));
    }
    if let Some(first) = rx.chars().next()
        && !RX_LEADING_DIGITS.contains(&first)
    {
        return Err(AppError::validation(
            "rx_number is not in a recognized range",
        ));
    }
    Ok(rx.to_string())
}

/// Validate the optional patient first name. Trims whitespace; an empty or
/// missing name is fine (the label just omits the line).
pub fn validate_first_name(value: Option<&str>) -> Result<Option<String>, AppError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let name = raw.trim();
    if name.is_empty() {
        return Ok(None);
    }
    if name.len() > MAX_FIRST_NAME_LEN {
        return Err(AppError::validation(format!(
            "patient_first_name must be at most {MAX_FIRST_NAME_LEN} characters"
        )));
    }
    Ok(Some(name.to_string()))
}
