//! List response envelopes.
//!
//! Only the page fields are modelled; fetching the next page is up to the
//! caller.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::model::{FieldKind, Model, RawModel, ToWire};
use crate::{Error, Nullable, Validate};

macro_rules! page_model {
    ($ty:ident, $name:literal, $items:literal, [$($field:literal),* $(,)?]) => {
        impl<T> Clone for $ty<T> {
            fn clone(&self) -> Self {
                Self::wrap(self.raw.clone())
            }
        }

        impl<T> fmt::Debug for $ty<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple($name).field(&self.raw).finish()
            }
        }

        impl<T> PartialEq for $ty<T> {
            fn eq(&self, other: &Self) -> bool {
                self.raw == other.raw
            }
        }

        impl<T> Serialize for $ty<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.raw.serialize(serializer)
            }
        }

        impl<'de, T> Deserialize<'de> for $ty<T> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawModel::deserialize(deserializer).map(Self::wrap)
            }
        }

        impl<T> ToWire for $ty<T> {
            fn to_wire(&self) -> Value {
                self.raw.to_wire()
            }
        }

        impl<T: Model + DeserializeOwned> Model for $ty<T> {
            const NAME: &'static str = $name;
            const FIELDS: &'static [&'static str] = &[$($field),*];

            fn from_raw(raw: RawModel) -> Self {
                Self::wrap(raw)
            }

            fn raw(&self) -> &RawModel {
                &self.raw
            }

            fn raw_mut(&mut self) -> &mut RawModel {
                &mut self.raw
            }

            fn into_raw(self) -> RawModel {
                self.raw
            }

            fn drop_unknown(&mut self) -> usize {
                self.raw.retain_declared(Self::FIELDS) + self.raw.drop_unknown_in_items::<T>($items)
            }
        }
    };
}

/// A cursor-paginated list.
///
/// ```json
/// { "data": [ ... ], "iterator": "it_2", "done": false }
/// ```
pub struct CursorPage<T> {
    raw: RawModel,
    item: PhantomData<fn() -> T>,
}

page_model!(CursorPage, "CursorPage", "data", ["data", "iterator", "done"]);

impl<T> CursorPage<T> {
    const fn wrap(raw: RawModel) -> Self {
        Self {
            raw,
            item: PhantomData,
        }
    }
}

impl<T: DeserializeOwned + ToWire> CursorPage<T> {
    /// Creates a page from its items and completion flag.
    #[must_use]
    pub fn new(data: &[T], done: bool) -> Self {
        let mut raw = RawModel::new();
        raw.set("data", data);
        raw.set("done", &done);
        Self::wrap(raw)
    }

    /// Items on this page.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or any item has the wrong shape.
    pub fn data(&self) -> Result<Vec<T>, Error> {
        self.raw.get("data")
    }

    /// Cursor for the next page; `null` on the last page.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string.
    pub fn iterator(&self) -> Result<Nullable<String>, Error> {
        self.raw.get_nullable("iterator")
    }

    /// Sets the cursor, an explicit `null`, or removes the key.
    pub fn set_iterator(&mut self, value: impl Into<Nullable<String>>) {
        let value: Nullable<String> = value.into();
        self.raw.set_nullable("iterator", value.as_ref());
    }

    /// Builder form of [`Self::set_iterator`].
    #[must_use]
    pub fn with_iterator(mut self, value: impl Into<Nullable<String>>) -> Self {
        self.set_iterator(value);
        self
    }

    /// Whether this is the last page.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a boolean.
    pub fn done(&self) -> Result<bool, Error> {
        self.raw.get("done")
    }

    /// Returns the cursor to request next, or `None` when the list is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if `done` or `iterator` has the wrong shape.
    pub fn next_cursor(&self) -> Result<Option<String>, Error> {
        if self.done()? {
            return Ok(None);
        }
        Ok(self.iterator()?.value())
    }
}

impl<T: DeserializeOwned + Validate> Validate for CursorPage<T> {
    fn validate(&self) -> Result<(), Error> {
        self.raw.validate_field::<Vec<T>>("data", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("iterator", FieldKind::Nullable)?;
        self.raw.validate_field::<bool>("done", FieldKind::Required)?;
        Ok(())
    }
}

/// A page-number-paginated list.
///
/// ```json
/// { "items": [ ... ] }
/// ```
pub struct NumberedPage<T> {
    raw: RawModel,
    item: PhantomData<fn() -> T>,
}

page_model!(NumberedPage, "NumberedPage", "items", ["items"]);

impl<T> NumberedPage<T> {
    const fn wrap(raw: RawModel) -> Self {
        Self {
            raw,
            item: PhantomData,
        }
    }
}

impl<T: DeserializeOwned + ToWire> NumberedPage<T> {
    /// Creates a page from its items.
    #[must_use]
    pub fn new(items: &[T]) -> Self {
        let mut raw = RawModel::new();
        raw.set("items", items);
        Self::wrap(raw)
    }

    /// Items on this page.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or any item has the wrong shape.
    pub fn items(&self) -> Result<Vec<T>, Error> {
        self.raw.get("items")
    }
}

impl<T: DeserializeOwned + Validate> Validate for NumberedPage<T> {
    fn validate(&self) -> Result<(), Error> {
        self.raw.validate_field::<Vec<T>>("items", FieldKind::Required)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::WebhookDetails;

    #[test]
    fn test_cursor_page_fields() {
        let page: CursorPage<WebhookDetails> = serde_json::from_value(json!({
            "data": [
                { "id": "wh_1", "url": "u", "created_at": "t", "updated_at": "t" },
                { "id": "wh_2", "url": "u", "created_at": "t", "updated_at": "t", "rate_limit": 3 }
            ],
            "iterator": "it_2",
            "done": false
        }))
        .unwrap();

        let data = page.data().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].rate_limit().unwrap(), Nullable::Value(3));
        assert_eq!(page.next_cursor().unwrap().as_deref(), Some("it_2"));
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let page = CursorPage::<WebhookDetails>::new(&[], true).with_iterator(Nullable::Null);
        assert_eq!(page.next_cursor().unwrap(), None);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({ "data": [], "done": true, "iterator": null })
        );
    }

    #[test]
    fn test_invalid_item_reports_index() {
        let page: CursorPage<WebhookDetails> = serde_json::from_value(json!({
            "data": [
                { "id": "wh_1", "url": "u", "created_at": "t", "updated_at": "t" },
                { "id": "wh_2", "url": "u", "created_at": "t" }
            ],
            "done": true
        }))
        .unwrap();
        assert_eq!(page.validate().unwrap_err().path(), "data[1].updated_at");
    }

    #[test]
    fn test_numbered_page_roundtrip() {
        let text = r#"{"items":[{"id":"wh_1","url":"u","created_at":"t","updated_at":"t"}],"page_number":0}"#;
        let page: NumberedPage<WebhookDetails> = serde_json::from_str(text).unwrap();
        assert_eq!(page.items().unwrap()[0].id().unwrap(), "wh_1");
        assert_eq!(page.unknown_keys().collect::<Vec<_>>(), ["page_number"]);
        assert_eq!(serde_json::to_string(&page).unwrap(), text);
        assert_eq!(page.clone(), page);
    }

    #[test]
    fn test_drop_unknown_reaches_items() {
        let mut page: NumberedPage<WebhookDetails> = serde_json::from_value(json!({
            "items": [
                { "id": "wh_1", "url": "u", "created_at": "t", "updated_at": "t", "x_trace": 1 },
                { "id": "wh_2", "url": "u", "created_at": "t", "updated_at": "t" }
            ],
            "page_number": 0
        }))
        .unwrap();
        assert_eq!(page.drop_unknown(), 2);
        assert_eq!(
            page.to_wire(),
            json!({ "items": [
                { "id": "wh_1", "url": "u", "created_at": "t", "updated_at": "t" },
                { "id": "wh_2", "url": "u", "created_at": "t", "updated_at": "t" }
            ] })
        );
    }
}
