//! Generic required-field validation for request and response payloads
//!
//! One algorithm serves every payload type: a type exposes its marked fields
//! in declaration order through the [`Validatable`] contract (normally
//! generated with the [`required_fields!`](crate::required_fields) macro) and
//! the engine reports the first empty one. The engine is stateless and pure;
//! every outcome is a value, never a panic.
//!
//! The module is organized into focused submodules:
//! - `outcome`: the pass/fail result type
//! - `field`: required-field descriptors and the emptiness rule table
//! - `engine`: the three validation entry points
//! - `tests`: test suite for the engine
//!
//! Copyright (c) 2025 Helpdesk Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod engine;
pub mod field;
pub mod outcome;

// Re-export public API
pub use engine::{validate, validate_id_only, validate_with_id, Validatable};
pub use field::{FieldValue, RequiredField, ToFieldValue};
pub use outcome::ValidationOutcome;
