//! The three validation entry points
//!
//! `validate` checks a payload alone, `validate_with_id` a payload plus its
//! route identifier, and `validate_id_only` an identifier alone. All three
//! return [`ValidationOutcome`] values; expected invalid input never panics
//! and never becomes an `Err`.
//!
//! Copyright (c) 2025 Helpdesk Team
//! Licensed under the MIT OR Apache-2.0 license

use tracing::debug;

use super::field::RequiredField;
use super::outcome::ValidationOutcome;
use crate::model::EntityId;

/// Contract implemented by every payload type the engine can inspect.
///
/// Implementations expose a compile-time descriptor table instead of relying
/// on runtime reflection; the [`required_fields!`](crate::required_fields)
/// macro generates one from a declarative field list.
pub trait Validatable {
    /// Type name used in generated messages.
    const NAME: &'static str;

    /// Descriptors for the marked fields, in declaration order.
    fn required_fields(&self) -> Vec<RequiredField>;
}

/// Validate a payload alone.
///
/// An absent payload fails with `"<TypeName> cannot be null."`. Otherwise the
/// marked fields are checked in declaration order against the emptiness rule
/// table; the first empty one fails with its custom message, or with the
/// generated `"<field> is required in <TypeName>."`. Checking short-circuits
/// on the first failure; there is no aggregation.
pub fn validate<T: Validatable>(payload: Option<&T>) -> ValidationOutcome {
    let Some(payload) = payload else {
        return ValidationOutcome::fail(format!("{} cannot be null.", T::NAME));
    };

    for field in payload.required_fields() {
        if field.value.is_empty() {
            let message = match field.message {
                Some(custom) => custom.to_string(),
                None => format!("{} is required in {}.", field.name, T::NAME),
            };
            debug!(payload = T::NAME, field = field.name, "required field empty");
            return ValidationOutcome::fail(message);
        }
    }

    ValidationOutcome::success()
}

/// Validate a payload together with its route identifier.
///
/// The identifier check takes precedence: a non-positive id fails immediately
/// and the payload is not inspected. A failed payload validation has the id
/// appended as a contextual suffix, `"<message> (Id: <id>)"`, whenever the
/// message is non-empty.
pub fn validate_with_id<T: Validatable>(payload: Option<&T>, id: EntityId) -> ValidationOutcome {
    if id <= 0 {
        return ValidationOutcome::fail("Id must be greater than zero.");
    }
    if payload.is_none() {
        return ValidationOutcome::fail(format!("Object cannot be null. (Id: {id})"));
    }

    let inner = validate(payload);
    if inner.is_valid() {
        return ValidationOutcome::success();
    }
    match inner.error_message() {
        Some(message) if !message.is_empty() => {
            ValidationOutcome::fail(format!("{message} (Id: {id})"))
        }
        _ => inner,
    }
}

/// Validate an identifier alone.
///
/// Ids are 1-based, so anything non-positive fails. This is a syntactic
/// precondition, not an existence check.
pub fn validate_id_only(id: EntityId) -> ValidationOutcome {
    if id <= 0 {
        ValidationOutcome::fail("Id must be greater than zero.")
    } else {
        ValidationOutcome::success()
    }
}

/// Implements [`Validatable`] for a payload type from a declarative field
/// list, keeping the markers next to the type instead of inside the engine.
///
/// Each entry names a field of the type; an optional `=> "message"` attaches
/// a custom error message. Fields are checked in the order they are listed,
/// which should match declaration order.
///
/// ```
/// use helpdesk_core::{required_fields, validation::validate};
///
/// struct TicketUpdateRequest {
///     title: String,
///     description: String,
/// }
///
/// required_fields!(TicketUpdateRequest {
///     title => "Title is required.",
///     description => "Description is required.",
/// });
///
/// let request = TicketUpdateRequest {
///     title: String::new(),
///     description: "details".to_string(),
/// };
/// let outcome = validate(Some(&request));
/// assert_eq!(outcome.error_message(), Some("Title is required."));
/// ```
#[macro_export]
macro_rules! required_fields {
    ($ty:ident { $( $field:ident $( => $message:literal )? ),* $(,)? }) => {
        impl $crate::validation::Validatable for $ty {
            const NAME: &'static str = stringify!($ty);

            fn required_fields(&self) -> Vec<$crate::validation::RequiredField> {
                #[allow(unused_imports)]
                use $crate::validation::ToFieldValue as _;
                vec![
                    $(
                        $crate::validation::RequiredField {
                            name: stringify!($field),
                            message: $crate::required_fields!(@message $( $message )?),
                            value: self.$field.to_field_value(),
                        },
                    )*
                ]
            }
        }
    };
    (@message) => { None };
    (@message $message:literal) => { Some($message) };
}
