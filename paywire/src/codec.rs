//! Explicit encode/decode configuration.
//!
//! There is no process-wide serializer setup: a [`Codec`] value is passed to
//! whatever decodes or encodes models, and two codecs with different settings
//! can coexist.
//!
//! # Example
//!
//! ```rust
//! use paywire::codec::{Codec, UnknownFields};
//! use paywire::models::Dispute;
//!
//! let codec = Codec::new()
//!     .with_validate_on_decode(true)
//!     .with_unknown_fields(UnknownFields::Drop);
//!
//! let payload = r#"{"dispute_id":"dsp_1","business_id":"bus_1","payment_id":"pay_1",
//!     "amount":"10.00","currency":"USD","dispute_status":"dispute_opened",
//!     "dispute_stage":"dispute","created_at":"2024-01-01T00:00:00Z","trace":"x"}"#;
//! let dispute: Dispute = codec.decode(payload).unwrap();
//! assert!(!dispute.raw().contains_key("trace"));
//! # use paywire::Model;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;
use crate::model::{Model, RawModel};

/// What to do with keys that no declared field maps to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFields {
    /// Keep them and write them back out unchanged.
    #[default]
    Preserve,
    /// Remove them right after decoding.
    Drop,
}

/// Decode/encode settings threaded through every codec call.
///
/// The default is lenient: no validation on decode, unknown keys preserved,
/// compact output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Codec {
    /// Run [`Validate`](crate::Validate) on every decoded model.
    pub validate_on_decode: bool,
    /// Handling of undeclared keys.
    pub unknown_fields: UnknownFields,
    /// Pretty-print encoded output.
    pub pretty: bool,
}

impl Codec {
    /// Creates a codec with lenient defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validate_on_decode: false,
            unknown_fields: UnknownFields::Preserve,
            pretty: false,
        }
    }

    /// Creates a codec that validates every decoded model.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new().with_validate_on_decode(true)
    }

    /// Sets whether decoded models are validated.
    #[must_use]
    pub const fn with_validate_on_decode(mut self, validate: bool) -> Self {
        self.validate_on_decode = validate;
        self
    }

    /// Sets the handling of undeclared keys.
    #[must_use]
    pub const fn with_unknown_fields(mut self, unknown_fields: UnknownFields) -> Self {
        self.unknown_fields = unknown_fields;
        self
    }

    /// Sets whether encoded output is pretty-printed.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Decodes a model from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Payload`] if the text is not a JSON object, or any
    /// validation error when [`Codec::validate_on_decode`] is set.
    pub fn decode<M: Model>(&self, text: &str) -> Result<M, Error> {
        let raw: RawModel = serde_json::from_str(text)?;
        self.finish(raw)
    }

    /// Decodes a model from JSON bytes.
    ///
    /// # Errors
    ///
    /// See [`Codec::decode`].
    pub fn decode_slice<M: Model>(&self, bytes: &[u8]) -> Result<M, Error> {
        let raw: RawModel = serde_json::from_slice(bytes)?;
        self.finish(raw)
    }

    /// Decodes a model from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// See [`Codec::decode`].
    pub fn decode_value<M: Model>(&self, value: Value) -> Result<M, Error> {
        let raw: RawModel = serde_json::from_value(value)?;
        self.finish(raw)
    }

    /// Encodes a model as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Payload`] if the writer fails, which cannot happen for
    /// in-memory output of a JSON object.
    pub fn encode<M: Model>(&self, model: &M) -> Result<String, Error> {
        let text = if self.pretty {
            serde_json::to_string_pretty(model.raw())?
        } else {
            serde_json::to_string(model.raw())?
        };
        Ok(text)
    }

    /// Encodes a model as JSON bytes.
    ///
    /// # Errors
    ///
    /// See [`Codec::encode`].
    pub fn encode_to_vec<M: Model>(&self, model: &M) -> Result<Vec<u8>, Error> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(model.raw())?
        } else {
            serde_json::to_vec(model.raw())?
        };
        Ok(bytes)
    }

    /// Encodes a model as a JSON value.
    #[must_use]
    pub fn encode_value<M: Model>(&self, model: &M) -> Value {
        model.to_wire()
    }

    fn finish<M: Model>(&self, raw: RawModel) -> Result<M, Error> {
        let mut model = M::from_raw(raw);
        if self.unknown_fields == UnknownFields::Drop {
            let dropped = model.drop_unknown();
            #[cfg(feature = "telemetry")]
            tracing::debug!(model = M::NAME, dropped, "dropped undeclared keys");
            #[cfg(not(feature = "telemetry"))]
            let _ = dropped;
        }

        if self.validate_on_decode {
            model.validate()?;
        }

        #[cfg(feature = "telemetry")]
        tracing::debug!(model = M::NAME, keys = model.raw().len(), "decoded model");

        Ok(model)
    }
}
