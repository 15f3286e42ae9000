//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so CRUD handlers
//! validate here before touching the repository layer.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employee, department, role title, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions (shift notes, department description)
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers and similar
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate an hourly rate is finite and non-negative.
pub fn validate_hourly_rate(value: f64) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(
            "hourly_rate must be a finite number".to_string(),
        ));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "hourly_rate must be non-negative, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_required_text() {
        assert!(validate_required_text("Ana", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_none() {
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("ok".into()), "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "notes", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn hourly_rate_must_be_finite_and_non_negative() {
        assert!(validate_hourly_rate(18.5).is_ok());
        assert!(validate_hourly_rate(0.0).is_ok());
        assert!(validate_hourly_rate(-1.0).is_err());
        assert!(validate_hourly_rate(f64::NAN).is_err());
        assert!(validate_hourly_rate(f64::INFINITY).is_err());
    }
}
