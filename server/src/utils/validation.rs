//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! CRUD handlers. SurrealDB does not enforce field lengths, so limits
//! live here.

use crate::utils::AppError;

// ========== Text length limits ==========

/// Menu item names
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

/// Phone numbers (digits only)
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;

// ========== Validation helpers ==========

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

/// Validate a menu item name (2-100 chars).
pub fn validate_menu_item_name(name: &str) -> Result<(), AppError> {
    let trimmed = name.trim();
    if trimmed.len() < MIN_NAME_LEN {
        return Err(AppError::validation(format!(
            "Name must be at least {MIN_NAME_LEN} characters"
        )));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a customer phone number (10-15 ASCII digits).
pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    let digits_only = phone.chars().all(|c| c.is_ascii_digit());
    if !digits_only || phone.len() < MIN_PHONE_DIGITS || phone.len() > MAX_PHONE_DIGITS {
        return Err(AppError::validation(
            "Please provide a valid phone number (10-15 digits)",
        ));
    }
    Ok(())
}

/// Validate an optional image URL (must be http(s) and within length limit).
pub fn validate_image_url(url: &Option<String>) -> Result<(), AppError> {
    if let Some(u) = url {
        if u.len() > MAX_URL_LEN {
            return Err(AppError::validation("Image URL is too long"));
        }
        if !(u.starts_with("http://") || u.starts_with("https://")) {
            return Err(AppError::validation("Invalid image URL"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_10_to_15_digits() {
        assert!(validate_phone("0123456789").is_ok());
        assert!(validate_phone("012345678901234").is_ok());
    }

    #[test]
    fn phone_rejects_short_long_and_non_digits() {
        assert!(validate_phone("012345678").is_err());
        assert!(validate_phone("0123456789012345").is_err());
        assert!(validate_phone("01234abcde").is_err());
        assert!(validate_phone("+3519123456").is_err());
    }

    #[test]
    fn menu_item_name_bounds() {
        assert!(validate_menu_item_name("ok").is_ok());
        assert!(validate_menu_item_name("x").is_err());
        assert!(validate_menu_item_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn image_url_must_be_http() {
        assert!(validate_image_url(&None).is_ok());
        assert!(validate_image_url(&Some("https://cdn.example.com/a.png".into())).is_ok());
        assert!(validate_image_url(&Some("ftp://example.com/a.png".into())).is_err());
    }
}
