//! Helpdesk Core - validation engine and referential model for the ticket service
//!
//! This crate provides the non-negotiable invariants of the helpdesk system:
//! the generic required-field validation applied to every request payload, and
//! the declarative relationship graph that governs how entities may be deleted.
//!
//! # Main Components
//!
//! - **Error Handling**: The shared error taxonomy using `thiserror`
//! - **Validation Engine**: One algorithm over every payload type via the
//!   [`Validatable`] contract and the [`required_fields!`] macro
//! - **Entity Model**: Plain data structs for the nine entity tables
//! - **Referential Model**: The delete-policy table and generated-timestamp
//!   declarations consumed by the store
//!
//! # Example
//!
//! ```
//! use helpdesk_core::{required_fields, validation::validate};
//!
//! struct DepartmentRequest {
//!     name: String,
//! }
//!
//! required_fields!(DepartmentRequest {
//!     name,
//! });
//!
//! let request = DepartmentRequest { name: "  ".to_string() };
//! let outcome = validate(Some(&request));
//! assert!(!outcome.is_valid());
//! ```

pub mod error;
pub mod model;
pub mod relations;
pub mod settings;
pub mod validation;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use model::{
    Department, Employee, EntityId, SupportAgent, Ticket, TicketCategory, TicketComment,
    TicketHistory, TicketPriority, TicketStatus,
};
pub use relations::{
    relationships_with_parent, DeletePolicy, EntityKind, GeneratedTimestamp, Relationship,
    GENERATED_TIMESTAMPS, RELATIONSHIPS,
};
pub use validation::{
    validate, validate_id_only, validate_with_id, FieldValue, RequiredField, Validatable,
    ValidationOutcome,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
