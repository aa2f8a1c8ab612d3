//! Schema-level field constraints shared across the service boundary
//!
//! Length bounds and patterns applied to entity fields at write time, the
//! counterpart of column constraints in the relational schema. Violations are
//! [`Error::Constraint`] values, not panics.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Minimum length for human-readable names and titles.
pub const NAME_MIN_LENGTH: usize = 3;

/// Maximum length for human-readable names and titles.
pub const NAME_MAX_LENGTH: usize = 30;

/// Maximum length for comment content.
pub const CONTENT_MAX_LENGTH: usize = 300;

/// Pattern an employee e-mail address must match.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// Check a name or title against the shared length bounds.
pub fn check_name(field: &str, value: &str) -> Result<()> {
    let length = value.chars().count();
    if length < NAME_MIN_LENGTH || length > NAME_MAX_LENGTH {
        return Err(Error::Constraint {
            field: field.to_string(),
            message: format!(
                "must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters"
            ),
        });
    }
    Ok(())
}

/// Check free-form content against the shared maximum length.
pub fn check_content(field: &str, value: &str) -> Result<()> {
    let length = value.chars().count();
    if length > CONTENT_MAX_LENGTH {
        return Err(Error::Constraint {
            field: field.to_string(),
            message: format!("must be at most {CONTENT_MAX_LENGTH} characters"),
        });
    }
    Ok(())
}

/// Check an e-mail address against [`EMAIL_PATTERN`].
pub fn check_email(field: &str, value: &str) -> Result<()> {
    if !email_regex().is_match(value) {
        return Err(Error::Constraint {
            field: field.to_string(),
            message: "is not a valid e-mail address".to_string(),
        });
    }
    Ok(())
}
