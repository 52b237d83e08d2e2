//! Open enums for API string values.
//!
//! The server may add enum values at any time. [`ApiEnum`] keeps the raw wire
//! value verbatim and resolves it against the variants known when this crate
//! was generated, so decoding never fails on a new value while callers can
//! still `match` on the variants they know about.
//!
//! # Example
//!
//! ```rust
//! use paywire::{ApiEnum, Validate};
//! use paywire::models::DisputeStatus;
//!
//! let known: ApiEnum<DisputeStatus> = DisputeStatus::DisputeWon.into();
//! assert_eq!(known.raw(), "dispute_won");
//! assert!(known.validate().is_ok());
//!
//! let future: ApiEnum<DisputeStatus> = serde_json::from_str("\"dispute_escalated\"").unwrap();
//! assert_eq!(future.known(), None);
//! assert!(future.validate().is_err());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::Error;
use crate::model::ToWire;
use crate::validate::Validate;

/// A closed set of symbolic variants with a fixed mapping to wire values.
///
/// Usually implemented through [`string_enum!`](crate::string_enum).
pub trait KnownVariant: Sized + Copy + Eq + 'static {
    /// The wire-level scalar type (`String` for generated enums).
    type Raw: Clone + Eq + Hash + fmt::Display + fmt::Debug + Serialize + DeserializeOwned;

    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Looks up the variant whose wire value is exactly `raw`.
    fn from_raw(raw: &Self::Raw) -> Option<Self>;

    /// Returns the wire value of this variant.
    fn to_raw(self) -> Self::Raw;
}

/// A wire enum value that may or may not be one of the known variants.
///
/// Equality and hashing consider only the raw value; the resolved variant is
/// derived from it and never stored independently.
#[derive(Clone)]
pub struct ApiEnum<K: KnownVariant> {
    raw: K::Raw,
    known: Option<K>,
}

impl<K: KnownVariant> ApiEnum<K> {
    /// Wraps a raw wire value, resolving it against the known variants.
    ///
    /// Unrecognized values are accepted; see [`Validate`].
    #[must_use]
    pub fn new(raw: K::Raw) -> Self {
        let known = K::from_raw(&raw);
        Self { raw, known }
    }

    /// Wraps a known variant.
    #[must_use]
    pub fn known_variant(variant: K) -> Self {
        Self {
            raw: variant.to_raw(),
            known: Some(variant),
        }
    }

    /// Returns the raw wire value.
    #[must_use]
    pub const fn raw(&self) -> &K::Raw {
        &self.raw
    }

    /// Consumes the wrapper and returns the raw wire value.
    #[must_use]
    pub fn into_raw(self) -> K::Raw {
        self.raw
    }

    /// Returns the resolved variant, or `None` if the raw value is unrecognized.
    #[must_use]
    pub const fn known(&self) -> Option<K> {
        self.known
    }

    /// Returns `true` if the raw value matches a known variant.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.known.is_some()
    }

    /// Returns the resolved variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEnumValue`] if the raw value is unrecognized.
    pub fn try_known(&self) -> Result<K, Error> {
        self.known
            .ok_or_else(|| Error::unknown_enum_value(K::TYPE_NAME, &self.raw))
    }
}

impl<K: KnownVariant> Validate for ApiEnum<K> {
    fn validate(&self) -> Result<(), Error> {
        self.try_known().map(|_| ())
    }
}

impl<K: KnownVariant> From<K> for ApiEnum<K> {
    fn from(variant: K) -> Self {
        Self::known_variant(variant)
    }
}

impl<K: KnownVariant> PartialEq for ApiEnum<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: KnownVariant> Eq for ApiEnum<K> {}

impl<K: KnownVariant> PartialEq<K> for ApiEnum<K> {
    fn eq(&self, other: &K) -> bool {
        self.raw == other.to_raw()
    }
}

impl<K: KnownVariant> Hash for ApiEnum<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K: KnownVariant + fmt::Debug> fmt::Debug for ApiEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.known {
            Some(variant) => write!(f, "{variant:?}"),
            None => write!(f, "Unknown({:?})", self.raw),
        }
    }
}

impl<K: KnownVariant> fmt::Display for ApiEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl<K: KnownVariant> Serialize for ApiEnum<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, K: KnownVariant> Deserialize<'de> for ApiEnum<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <K::Raw as Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}

impl<K> ToWire for ApiEnum<K>
where
    K: KnownVariant,
    K::Raw: ToWire,
{
    fn to_wire(&self) -> Value {
        self.raw.to_wire()
    }
}

/// Declares a string-valued enum of known variants and its [`KnownVariant`] table.
///
/// ```rust
/// paywire::string_enum! {
///     /// Card networks.
///     pub enum CardNetwork {
///         /// Visa.
///         Visa = "visa",
///         /// Mastercard.
///         Mastercard = "mastercard",
///     }
/// }
///
/// let network = paywire::ApiEnum::<CardNetwork>::new("visa".to_owned());
/// assert_eq!(network.known(), Some(CardNetwork::Visa));
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $raw:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant known to this client version.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire value of this variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $raw,)+
                }
            }
        }

        impl $crate::KnownVariant for $name {
            type Raw = ::std::string::String;

            const TYPE_NAME: &'static str = ::core::stringify!($name);

            fn from_raw(raw: &::std::string::String) -> ::core::option::Option<Self> {
                match raw.as_str() {
                    $($raw => ::core::option::Option::Some(Self::$variant),)+
                    _ => ::core::option::Option::None,
                }
            }

            fn to_raw(self) -> ::std::string::String {
                ::std::borrow::ToOwned::to_owned(self.as_str())
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
