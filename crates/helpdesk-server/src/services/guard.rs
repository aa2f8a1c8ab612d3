//! Shared pre-operation validation guards
//!
//! The seam between the value-based engine and the `?`-based services: each
//! guard runs one engine entry point and converts a failed outcome into an
//! error the caller can bail with.

use helpdesk_core::validation::{validate, validate_id_only, validate_with_id, Validatable};
use helpdesk_core::{EntityId, Result};

/// Validate a payload before a create.
pub fn ensure_valid<T: Validatable>(payload: &T) -> Result<()> {
    validate(Some(payload)).into_result()
}

/// Validate a payload and its route id before an update.
pub fn ensure_valid_with_id<T: Validatable>(payload: &T, id: EntityId) -> Result<()> {
    validate_with_id(Some(payload), id).into_result()
}

/// Validate a route id before a get or delete.
pub fn ensure_valid_id(id: EntityId) -> Result<()> {
    validate_id_only(id).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::required_fields;

    struct Probe {
        name: String,
    }

    required_fields!(Probe {
        name,
    });

    #[test]
    fn guards_translate_outcomes_into_errors() {
        let bad = Probe {
            name: String::new(),
        };
        let err = ensure_valid(&bad).unwrap_err();
        assert!(err.to_string().contains("name is required in Probe."));

        let good = Probe {
            name: "Payroll".to_string(),
        };
        assert!(ensure_valid(&good).is_ok());
        assert!(ensure_valid_with_id(&good, 0).is_err());
        assert!(ensure_valid_id(3).is_ok());
    }
}
