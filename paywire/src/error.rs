//! Error types for model decoding and validation.
//!
//! Two kinds of failure exist and [`Error::kind`] tells them apart:
//!
//! - **Invalid data** is only ever produced by an explicit
//!   [`Validate::validate`](crate::Validate::validate) call: an enum wrapper
//!   holding an unrecognized raw value, or a required field missing from the
//!   backing map.
//! - **Decode shape** is produced whenever a wire value does not have the JSON
//!   shape its typed accessor expects (e.g. a number where a string belongs).
//!
//! Nothing is retried or recovered internally.

use std::fmt;

/// Errors raised while decoding or validating API models.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An enum wrapper holds a raw value outside its known variants.
    #[error("unrecognized {type_name} value `{raw}`")]
    UnknownEnumValue {
        /// Name of the enum whose variant table was consulted.
        type_name: &'static str,
        /// The raw wire value, rendered for display.
        raw: String,
    },

    /// A required field is absent from the backing map.
    #[error("missing required field `{field}`")]
    MissingField {
        /// Wire key of the missing field.
        field: String,
    },

    /// A present field has the wrong JSON shape for its declared type.
    #[error("failed to decode field `{field}`: {source}")]
    FieldDecode {
        /// Wire key of the offending field.
        field: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The payload as a whole could not be parsed or has the wrong shape.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A nested value failed, with the field (or index) it was found under.
    #[error("invalid `{field}`: {source}")]
    Nested {
        /// Wire key or `[index]` of the nested value.
        field: String,
        /// The error raised by the nested value.
        #[source]
        source: Box<Error>,
    },
}

/// The two error categories of the model layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Well-formed data that fails explicit validation.
    InvalidData,
    /// Data whose JSON shape does not match the expected type.
    DecodeShape,
}

impl ErrorKind {
    /// Returns the `snake_case` name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidData => "invalid_data",
            Self::DecodeShape => "decode_shape",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Creates an [`Error::UnknownEnumValue`].
    #[must_use]
    pub fn unknown_enum_value(type_name: &'static str, raw: impl fmt::Display) -> Self {
        Self::UnknownEnumValue {
            type_name,
            raw: raw.to_string(),
        }
    }

    /// Creates an [`Error::MissingField`].
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an [`Error::FieldDecode`].
    #[must_use]
    pub fn field_decode(field: impl Into<String>, source: serde_json::Error) -> Self {
        Self::FieldDecode {
            field: field.into(),
            source,
        }
    }

    /// Wraps this error with the field it was raised under.
    #[must_use]
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Nested {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Returns the category of this error, looking through nesting.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownEnumValue { .. } | Self::MissingField { .. } => ErrorKind::InvalidData,
            Self::FieldDecode { .. } | Self::Payload(_) => ErrorKind::DecodeShape,
            Self::Nested { source, .. } => source.kind(),
        }
    }

    /// Returns the innermost error, skipping [`Error::Nested`] wrappers.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Nested { source, .. } => source.root(),
            other => other,
        }
    }

    /// Renders the path from the outermost model down to the failing field,
    /// e.g. `customer.email` or `filter_types[2]`.
    ///
    /// Returns an empty string for whole-payload errors.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut current = self;
        loop {
            match current {
                Self::Nested { field, source } => {
                    push_segment(&mut path, field);
                    current = source.as_ref();
                }
                Self::MissingField { field } | Self::FieldDecode { field, .. } => {
                    push_segment(&mut path, field);
                    return path;
                }
                Self::UnknownEnumValue { .. } | Self::Payload(_) => return path,
            }
        }
    }
}

fn push_segment(path: &mut String, segment: &str) {
    if !path.is_empty() && !segment.starts_with('[') {
        path.push('.');
    }
    path.push_str(segment);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_looks_through_nesting() {
        let err = Error::unknown_enum_value("EventType", "payment.teleported")
            .in_field("[1]")
            .in_field("filter_types");
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(matches!(err.root(), Error::UnknownEnumValue { .. }));
    }

    #[test]
    fn test_path_joins_fields_and_indices() {
        let err = Error::missing_field("email")
            .in_field("customer")
            .in_field("[0]")
            .in_field("data");
        assert_eq!(err.path(), "data[0].customer.email");
    }

    #[test]
    fn test_payload_error_is_decode_shape() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);
        assert_eq!(err.kind(), ErrorKind::DecodeShape);
        assert_eq!(err.path(), "");
    }

    #[test]
    fn test_display_messages() {
        let err = Error::unknown_enum_value("Currency", "XTS");
        assert_eq!(err.to_string(), "unrecognized Currency value `XTS`");
        let err = Error::missing_field("url").in_field("webhook");
        assert_eq!(
            err.to_string(),
            "invalid `webhook`: missing required field `url`"
        );
    }
}
