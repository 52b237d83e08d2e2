//! Tri-state value for optional-nullable fields.
//!
//! An optional-nullable field has three distinguishable wire states: the key
//! is missing, the key is present with JSON `null`, or the key carries a value.
//! `Option<Option<T>>` can express this too, but reads poorly at call sites.

use serde_json::Value;

use crate::Error;
use crate::model::ToWire;
use crate::validate::Validate;

/// The typed view of an optional-nullable field.
///
/// # Wire Format
///
/// | variant          | JSON object          |
/// |------------------|----------------------|
/// | `Absent`         | key omitted          |
/// | `Null`           | `"key": null`        |
/// | `Value(v)`       | `"key": <v>`         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// The key is not present.
    Absent,
    /// The key is present with an explicit `null`.
    Null,
    /// The key carries a value.
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Nullable<T> {
    /// Converts an `Option`, mapping `None` to [`Nullable::Null`].
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }

    /// Returns `true` if the key is absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the key is present with `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the key carries a value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrows the contained value.
    #[must_use]
    pub const fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(v),
        }
    }

    /// Returns the value, collapsing `Absent` and `Null` to `None`.
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Converts to nested options: `None` when absent, `Some(None)` when
    /// `null`.
    #[must_use]
    #[allow(clippy::option_option)]
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Absent => None,
            Self::Null => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }

    /// Maps the contained value, keeping `Absent` and `Null` as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(f(v)),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: ToWire> ToWire for Nullable<T> {
    fn to_wire(&self) -> Value {
        match self {
            Self::Value(v) => v.to_wire(),
            Self::Absent | Self::Null => Value::Null,
        }
    }
}

impl<T: Validate> Validate for Nullable<T> {
    fn validate(&self) -> Result<(), Error> {
        match self {
            Self::Value(v) => v.validate(),
            Self::Absent | Self::Null => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_absent() {
        let n: Nullable<i64> = Nullable::default();
        assert!(n.is_absent());
        assert!(!n.is_null());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Nullable::from_option(Some(3)), Nullable::Value(3));
        assert_eq!(Nullable::<i64>::from_option(None), Nullable::Null);
    }

    #[test]
    fn test_value_collapses_absent_and_null() {
        assert_eq!(Nullable::<i64>::Absent.value(), None);
        assert_eq!(Nullable::<i64>::Null.value(), None);
        assert_eq!(Nullable::Value(7).value(), Some(7));
        assert_ne!(Nullable::<i64>::Absent, Nullable::Null);
    }

    #[test]
    fn test_into_option_keeps_three_states() {
        assert_eq!(Nullable::<i64>::Absent.into_option(), None);
        assert_eq!(Nullable::<i64>::Null.into_option(), Some(None));
        assert_eq!(Nullable::Value(1_i64).into_option(), Some(Some(1)));
    }

    #[test]
    fn test_map_keeps_state() {
        assert_eq!(Nullable::Value(2).map(|v| v * 10), Nullable::Value(20));
        assert_eq!(Nullable::<i64>::Null.map(|v| v * 10), Nullable::Null);
        assert_eq!(Nullable::<i64>::Absent.map(|v| v * 10), Nullable::Absent);
    }
}
