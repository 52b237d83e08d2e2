//! Raw-preserving model storage.
//!
//! Every generated model is a thin typed view over a [`RawModel`]: an ordered
//! JSON object holding exactly the keys that were received or assigned. Typed
//! getters decode lazily from it and setters encode straight into it, so the
//! typed surface and the wire shape can never drift apart.
//!
//! # Field categories
//!
//! | category   | getter                     | setter                       | `null` on assignment      |
//! |------------|----------------------------|------------------------------|---------------------------|
//! | required   | [`RawModel::get`]          | [`RawModel::set`]            | stored as given           |
//! | optional   | [`RawModel::get_optional`] | [`RawModel::set_optional`]   | key removed               |
//! | nullable   | [`RawModel::get_nullable`] | [`RawModel::set_nullable`]   | key kept with `null`      |

use std::collections::{BTreeMap, HashMap};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::Error;
use crate::nullable::Nullable;
use crate::validate::Validate;

/// Infallible conversion of a typed value into its wire representation.
///
/// Setters go through this trait rather than `serde_json::to_value` so that
/// assigning a field can never fail.
pub trait ToWire {
    /// Returns the JSON value written to the backing map.
    fn to_wire(&self) -> Value;
}

macro_rules! to_wire_via_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToWire for $ty {
                fn to_wire(&self) -> Value {
                    Value::from(self.clone())
                }
            }
        )+
    };
}

to_wire_via_from!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String);

impl ToWire for str {
    fn to_wire(&self) -> Value {
        Value::from(self)
    }
}

impl ToWire for Value {
    fn to_wire(&self) -> Value {
        self.clone()
    }
}

impl<T: ToWire + ?Sized> ToWire for &T {
    fn to_wire(&self) -> Value {
        (**self).to_wire()
    }
}

impl<T: ToWire> ToWire for Option<T> {
    fn to_wire(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToWire::to_wire)
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(ToWire::to_wire).collect())
    }
}

impl<T: ToWire> ToWire for [T] {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(ToWire::to_wire).collect())
    }
}

impl<T: ToWire> ToWire for BTreeMap<String, T> {
    fn to_wire(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_wire()))
                .collect(),
        )
    }
}

impl<T: ToWire, S> ToWire for HashMap<String, T, S> {
    fn to_wire(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_wire()))
                .collect(),
        )
    }
}

/// The three field categories of a generated model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Always present; absence fails validation.
    Required,
    /// Absent or a value; assigning `null` removes the key.
    Optional,
    /// Absent, explicit `null`, or a value; all three survive a round trip.
    Nullable,
}

/// Ordered key/value backing store of a model instance.
///
/// Serializes transparently as the JSON object it holds, in insertion order,
/// including keys no typed accessor knows about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawModel(Map<String, Value>);

impl RawModel {
    /// Creates an empty backing map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON object.
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the model and returns the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Returns `true` if `key` is present, including with a `null` value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over the present keys in backing order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of present keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no key is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw wire value stored under `key`.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Stores a raw wire value under `key`, bypassing any typed encoding.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Removes `key`, returning its raw value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Keeps only the keys for which `keep` returns `true`.
    pub fn retain_keys<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.0.retain(|key, _| keep(key));
    }

    /// Removes every key not listed in `fields`, returning how many went.
    pub fn retain_declared(&mut self, fields: &[&str]) -> usize {
        let before = self.0.len();
        self.retain_keys(|key| fields.iter().any(|field| *field == key));
        before - self.0.len()
    }

    /// Drops undeclared keys inside the nested `M` object stored under `key`.
    ///
    /// Absent keys and values that are not objects are left alone.
    pub fn drop_unknown_in<M: Model>(&mut self, key: &str) -> usize {
        self.0.get_mut(key).map_or(0, drop_unknown_value::<M>)
    }

    /// Drops undeclared keys inside every `M` object of the array under `key`.
    pub fn drop_unknown_in_items<M: Model>(&mut self, key: &str) -> usize {
        match self.0.get_mut(key) {
            Some(Value::Array(items)) => items.iter_mut().map(drop_unknown_value::<M>).sum(),
            _ => 0,
        }
    }

    /// Decodes a required field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the key is absent and
    /// [`Error::FieldDecode`] if its value has the wrong shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, Error> {
        let value = self.0.get(key).ok_or_else(|| Error::missing_field(key))?;
        decode(key, value)
    }

    /// Decodes an optional field, treating both absence and `null` as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldDecode`] if a present value has the wrong shape.
    pub fn get_optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode(key, value).map(Some),
        }
    }

    /// Decodes an optional-nullable field, keeping absence and `null` apart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldDecode`] if a present value has the wrong shape.
    pub fn get_nullable<T: DeserializeOwned>(&self, key: &str) -> Result<Nullable<T>, Error> {
        match self.0.get(key) {
            None => Ok(Nullable::Absent),
            Some(Value::Null) => Ok(Nullable::Null),
            Some(value) => decode(key, value).map(Nullable::Value),
        }
    }

    /// Assigns a required field.
    pub fn set<T: ToWire + ?Sized>(&mut self, key: &str, value: &T) {
        self.0.insert(key.to_owned(), value.to_wire());
    }

    /// Assigns an optional-omittable field.
    ///
    /// `None`, or a value that encodes to `null`, removes the key.
    pub fn set_optional<T: ToWire>(&mut self, key: &str, value: Option<&T>) {
        match value.map(ToWire::to_wire) {
            None | Some(Value::Null) => {
                self.0.shift_remove(key);
            }
            Some(wire) => {
                self.0.insert(key.to_owned(), wire);
            }
        }
    }

    /// Assigns an optional-nullable field.
    ///
    /// [`Nullable::Null`] keeps the key with an explicit `null`;
    /// [`Nullable::Absent`] removes it.
    pub fn set_nullable<T: ToWire>(&mut self, key: &str, value: Nullable<&T>) {
        match value {
            Nullable::Absent => {
                self.0.shift_remove(key);
            }
            Nullable::Null => {
                self.0.insert(key.to_owned(), Value::Null);
            }
            Nullable::Value(v) => {
                self.0.insert(key.to_owned(), v.to_wire());
            }
        }
    }

    /// Validates one declared field according to its category.
    ///
    /// Absent (or `null`) optional fields are skipped. Present values are
    /// decoded and validated recursively, with `key` attached to any nested
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for an absent required field,
    /// [`Error::FieldDecode`] for a value of the wrong shape, or
    /// [`Error::Nested`] wrapping the nested value's own failure.
    pub fn validate_field<T>(&self, key: &str, kind: FieldKind) -> Result<(), Error>
    where
        T: DeserializeOwned + Validate,
    {
        let value = match kind {
            FieldKind::Required => self.get::<T>(key)?,
            FieldKind::Optional | FieldKind::Nullable => match self.get_optional::<T>(key)? {
                Some(value) => value,
                None => return Ok(()),
            },
        };
        value.validate().map_err(|e| e.in_field(key))
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T, Error> {
    T::deserialize(value).map_err(|e| Error::field_decode(key, e))
}

fn drop_unknown_value<M: Model>(value: &mut Value) -> usize {
    let Value::Object(map) = value else {
        return 0;
    };
    let mut model = M::from_raw(RawModel(std::mem::take(map)));
    let dropped = model.drop_unknown();
    *map = model.into_raw().0;
    dropped
}

impl PartialEq for RawModel {
    fn eq(&self, other: &Self) -> bool {
        objects_equal(&self.0, &other.0)
    }
}

impl ToWire for RawModel {
    fn to_wire(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for RawModel {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<RawModel> for Value {
    fn from(model: RawModel) -> Self {
        Self::Object(model.0)
    }
}

/// Structural JSON equality: object key order is ignored and numbers compare
/// by exact numeric value, so `1` equals `1.0`.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y),
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    match (x.is_f64(), y.is_f64()) {
        (false, false) => x == y,
        (true, true) => x.as_f64() == y.as_f64(),
        (true, false) => float_equals_integer(x, y),
        (false, true) => float_equals_integer(y, x),
    }
}

/// An integer equals a float only when the float is integral and converts to
/// exactly that integer; no rounding through `f64`.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn float_equals_integer(float: &Number, integer: &Number) -> bool {
    let Some(float) = float.as_f64() else {
        return false;
    };
    let integer = integer
        .as_i64()
        .map(i128::from)
        .or_else(|| integer.as_u64().map(i128::from));
    float.is_finite() && float.trunc() == float && integer == Some(float as i128)
}

fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| values_equal(value, other)))
}

/// A generated API model: a typed view over a [`RawModel`].
pub trait Model: Validate + ToWire + Sized {
    /// Schema name of the model.
    const NAME: &'static str;

    /// Wire keys of every declared field, in schema order.
    const FIELDS: &'static [&'static str];

    /// Wraps a backing map without checking it.
    fn from_raw(raw: RawModel) -> Self;

    /// Returns the backing map.
    fn raw(&self) -> &RawModel;

    /// Returns the backing map mutably, for raw passthrough edits.
    fn raw_mut(&mut self) -> &mut RawModel;

    /// Consumes the model and returns its backing map.
    fn into_raw(self) -> RawModel;

    /// Iterates over present keys that no declared field maps to.
    fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.raw()
            .keys()
            .filter(|key| !Self::FIELDS.iter().any(|field| field == key))
    }

    /// Removes undeclared keys here and in every nested model, returning how
    /// many keys were removed in total.
    fn drop_unknown(&mut self) -> usize {
        self.raw_mut().retain_declared(Self::FIELDS)
    }
}

/// Implements [`Model`], [`ToWire`] and raw-map equality for a struct of the
/// form `struct Name { raw: RawModel }`.
///
/// An optional `nested = path` names a `fn(&mut RawModel) -> usize` that drops
/// undeclared keys inside nested model fields.
#[macro_export]
macro_rules! impl_model {
    ($ty:ident, $name:literal, [$($field:expr),* $(,)?] $(, nested = $nested:path)?) => {
        impl $crate::Model for $ty {
            const NAME: &'static str = $name;
            const FIELDS: &'static [&'static str] = &[$($field),*];

            fn from_raw(raw: $crate::RawModel) -> Self {
                Self { raw }
            }

            fn raw(&self) -> &$crate::RawModel {
                &self.raw
            }

            fn raw_mut(&mut self) -> &mut $crate::RawModel {
                &mut self.raw
            }

            fn into_raw(self) -> $crate::RawModel {
                self.raw
            }

            fn drop_unknown(&mut self) -> usize {
                self.raw.retain_declared(Self::FIELDS) $(+ $nested(&mut self.raw))?
            }
        }

        impl $crate::ToWire for $ty {
            fn to_wire(&self) -> $crate::Value {
                $crate::ToWire::to_wire(&self.raw)
            }
        }

        impl ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.raw == other.raw
            }
        }
    };
}
