//! Explicit, opt-in validation.
//!
//! Decoding is lenient so that older clients keep working when the server
//! adds enum values. Callers that want strictness call [`Validate::validate`],
//! which walks nested models, collections and enum wrappers.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::Error;

/// Recursive validation of decoded values.
///
/// Validation never mutates the value it inspects.
pub trait Validate {
    /// Checks this value and everything nested inside it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEnumValue`] or [`Error::MissingField`] for
    /// invalid data, [`Error::FieldDecode`] when a present field cannot be
    /// decoded, wrapped in [`Error::Nested`] for each level of nesting.
    fn validate(&self) -> Result<(), Error>;
}

macro_rules! always_valid {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Validate for $ty {
                fn validate(&self) -> Result<(), Error> {
                    Ok(())
                }
            }
        )+
    };
}

always_valid!(
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Value,
);

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), Error> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), Error> {
        for (index, item) in self.iter().enumerate() {
            item.validate()
                .map_err(|e| e.in_field(format!("[{index}]")))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for BTreeMap<String, T> {
    fn validate(&self) -> Result<(), Error> {
        for (key, value) in self {
            value.validate().map_err(|e| e.in_field(key.clone()))?;
        }
        Ok(())
    }
}

impl<T: Validate, S> Validate for HashMap<String, T, S> {
    fn validate(&self) -> Result<(), Error> {
        for (key, value) in self {
            value.validate().map_err(|e| e.in_field(key.clone()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enum_value::ApiEnum;
    use crate::models::EventType;

    #[test]
    fn test_vec_reports_failing_index() {
        let types: Vec<ApiEnum<EventType>> = vec![
            EventType::PaymentSucceeded.into(),
            ApiEnum::new("payment.teleported".to_owned()),
        ];
        let err = types.validate().unwrap_err();
        assert_eq!(err.path(), "[1]");
        assert!(matches!(err.root(), Error::UnknownEnumValue { .. }));
    }

    #[test]
    fn test_option_none_is_valid() {
        let value: Option<ApiEnum<EventType>> = None;
        assert!(value.validate().is_ok());
    }

    #[test]
    fn test_map_reports_failing_key() {
        let mut map = BTreeMap::new();
        map.insert(
            "primary".to_owned(),
            ApiEnum::<EventType>::new("nope".to_owned()),
        );
        let err = map.validate().unwrap_err();
        assert_eq!(err.path(), "primary");
    }

    #[test]
    fn test_scalars_are_valid() {
        assert!("text".to_owned().validate().is_ok());
        assert!(42_i64.validate().is_ok());
        assert!(Value::Null.validate().is_ok());
    }
}
