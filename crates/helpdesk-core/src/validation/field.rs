//! Required-field descriptors and the emptiness rule table
//!
//! Copyright (c) 2025 Helpdesk Team
//! Licensed under the MIT OR Apache-2.0 license

use chrono::{DateTime, Utc};

/// Runtime classification of a marked field's current value.
///
/// Each kind carries its own notion of "empty"; kinds without one are
/// [`FieldValue::Opaque`] and always pass.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// No value present.
    Absent,
    /// Free text; empty when blank or all-whitespace.
    Text(String),
    /// Integer; empty when exactly zero.
    Int(i64),
    /// Date/time; empty when equal to the type's zero default (Unix epoch).
    Timestamp(DateTime<Utc>),
    /// A kind with no emptiness rule defined.
    Opaque,
}

impl FieldValue {
    /// The emptiness rule table applied to every marked field.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Int(value) => *value == 0,
            FieldValue::Timestamp(at) => *at == DateTime::<Utc>::default(),
            FieldValue::Opaque => false,
        }
    }
}

/// A field marked required, with an optional custom error message.
///
/// Pure metadata: descriptors have no behavior of their own and are read only
/// by the engine.
#[derive(Debug, Clone)]
pub struct RequiredField {
    /// Field identifier, used in generated messages.
    pub name: &'static str,
    /// Custom message overriding the generated one.
    pub message: Option<&'static str>,
    /// The field's current value, classified.
    pub value: FieldValue,
}

/// Conversion of concrete field types into their runtime classification.
///
/// Implemented for the primitive kinds the rule table knows about; `Option`
/// lifts any of them into [`FieldValue::Absent`] when `None`. Collections and
/// nested payloads have no emptiness rule and classify as opaque.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

impl ToFieldValue for &str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text((*self).to_string())
    }
}

impl ToFieldValue for i32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(i64::from(*self))
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(*self)
    }
}

impl ToFieldValue for u32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(i64::from(*self))
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Timestamp(*self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            None => FieldValue::Absent,
            Some(value) => value.to_field_value(),
        }
    }
}

impl<T> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Opaque
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn absent_is_always_empty() {
        assert!(FieldValue::Absent.is_empty());
        let missing: Option<i32> = None;
        assert!(missing.to_field_value().is_empty());
    }

    #[test]
    fn text_is_empty_when_blank_or_whitespace() {
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(FieldValue::Text("   \t ".to_string()).is_empty());
        assert!(!FieldValue::Text(" x ".to_string()).is_empty());
    }

    #[test]
    fn integer_is_empty_only_at_zero() {
        assert!(FieldValue::Int(0).is_empty());
        assert!(!FieldValue::Int(-5).is_empty());
        assert!(!FieldValue::Int(42).is_empty());
    }

    #[test]
    fn timestamp_is_empty_at_the_epoch_default() {
        assert!(FieldValue::Timestamp(DateTime::<Utc>::default()).is_empty());
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert!(!FieldValue::Timestamp(later).is_empty());
    }

    #[test]
    fn opaque_kinds_never_count_as_empty() {
        assert!(!FieldValue::Opaque.is_empty());
        let rows: Vec<i32> = Vec::new();
        assert!(!rows.to_field_value().is_empty());
    }

    #[test]
    fn option_lifts_inner_classification() {
        assert!(Some(0).to_field_value().is_empty());
        assert!(!Some(7).to_field_value().is_empty());
        assert_eq!(
            Some("hi".to_string()).to_field_value(),
            FieldValue::Text("hi".to_string())
        );
    }
}
