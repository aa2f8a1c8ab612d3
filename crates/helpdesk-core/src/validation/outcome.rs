//! Pass/fail result of one validation attempt
//!
//! Copyright (c) 2025 Helpdesk Team
//! Licensed under the MIT OR Apache-2.0 license

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The result of one validation attempt.
///
/// Immutable; constructed only through [`ValidationOutcome::success`] and
/// [`ValidationOutcome::fail`]. The error message is present exactly when the
/// outcome is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    is_valid: bool,
    error_message: Option<String>,
}

impl ValidationOutcome {
    /// A passing outcome.
    pub fn success() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    /// A failing outcome carrying `message`.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Convert into a `Result`, turning a failed outcome into
    /// [`Error::Validation`]. This is the seam where callers that want to
    /// bail with `?` leave the value-based world of the engine.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(Error::Validation {
                message: self.error_message.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_no_message() {
        let outcome = ValidationOutcome::success();
        assert!(outcome.is_valid());
        assert_eq!(outcome.error_message(), None);
        assert!(outcome.into_result().is_ok());
    }

    #[test]
    fn fail_carries_its_message_through_into_result() {
        let outcome = ValidationOutcome::fail("Name is required.");
        assert!(!outcome.is_valid());
        assert_eq!(outcome.error_message(), Some("Name is required."));
        let err = outcome.into_result().unwrap_err();
        assert!(err.to_string().contains("Name is required."));
    }
}
