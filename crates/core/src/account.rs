//! Account listing validation: status constants, field limits, and the
//! checks applied to every write before it reaches the repository.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Status constants
   -------------------------------------------------------------------------- */

/// Listed and purchasable.
pub const STATUS_AVAILABLE: &str = "available";

/// Already bought; kept visible for the storefront's "sold" shelf.
pub const STATUS_SOLD: &str = "sold";

/// All valid status values. Both transitions between them are allowed;
/// re-listing a sold account is a normal operation.
pub const VALID_STATUSES: &[&str] = &[STATUS_AVAILABLE, STATUS_SOLD];

/// Category applied when a listing is created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a listing title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length for a listing code.
pub const MAX_CODE_LEN: usize = 64;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Whether `status` is one of the allowed values.
///
/// Used directly by the public list endpoint, where an unknown filter value
/// is ignored rather than rejected.
pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

/// Validate that `status` is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if is_valid_status(status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate a listing title: non-empty and within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title too long: {} chars (max {MAX_TITLE_LEN})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate a listing code: non-empty, within length limit, no whitespace.
///
/// The code is the natural key of a listing; uniqueness is enforced by the
/// database, not here.
pub fn validate_code(code: &str) -> Result<(), CoreError> {
    if code.is_empty() {
        return Err(CoreError::Validation("Code must not be empty".to_string()));
    }
    if code.len() > MAX_CODE_LEN {
        return Err(CoreError::Validation(format!(
            "Code too long: {} chars (max {MAX_CODE_LEN})",
            code.len()
        )));
    }
    if code.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Code must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validate a listing price: must not be negative.
pub fn validate_price(price: i64) -> Result<(), CoreError> {
    if price < 0 {
        return Err(CoreError::Validation(format!(
            "Price must not be negative, got {price}"
        )));
    }
    Ok(())
}
