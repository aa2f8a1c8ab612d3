//! Error types for the helpdesk core library
//!
//! This module defines the error taxonomy shared by every layer of the
//! service: validation failures and referential conflicts are recoverable and
//! map to rejected requests, while internal errors indicate a defect.

use thiserror::Error;

use crate::model::EntityId;
use crate::relations::EntityKind;

/// Main error type for helpdesk operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was empty, an identifier was non-positive, or the
    /// payload was absent. Always recoverable; surfaced as a rejected request.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A schema-level field constraint was violated (length bounds, patterns)
    #[error("Constraint violation: {field} {message}")]
    Constraint { field: String, message: String },

    /// A restrict-policy delete was attempted while dependents exist.
    /// The underlying data remains unchanged.
    #[error("Cannot delete {parent} {parent_id}: {dependents} {child} row(s) still reference it")]
    ReferentialConflict {
        parent: EntityKind,
        child: EntityKind,
        parent_id: EntityId,
        dependents: usize,
    },

    /// An entity id does not exist. Distinct from the syntactic id check
    /// performed by the validation engine.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: EntityKind, id: EntityId },

    /// Generic internal error; a defect rather than invalid input
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
