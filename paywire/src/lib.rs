#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Typed models for a payments platform HTTP API.
//!
//! The API evolves on the server side: new enum values appear, new fields are
//! added, and some fields distinguish "not sent" from "sent as `null`". This
//! crate keeps every model lossless across those changes.
//!
//! # Overview
//!
//! - [`ApiEnum`] wraps a wire enum value. Unrecognized values decode fine and
//!   only fail when [`Validate::validate`] is called.
//! - [`RawModel`] is the ordered JSON object behind every generated model.
//!   Typed getters decode from it lazily, setters encode into it, and
//!   re-serialization reproduces exactly the keys that are present.
//! - [`Nullable`] is the typed view of an optional-nullable field.
//! - [`Codec`](codec::Codec) carries decode/encode settings explicitly.
//!
//! # Modules
//!
//! - [`codec`] - Explicit decode/encode configuration
//! - [`enum_value`] - Open enum wrapper and the [`string_enum!`] macro
//! - [`error`] - Decode and validation errors
//! - [`model`] - Raw-preserving model storage and the [`Model`] trait
//! - [`models`] - Generated API models
//! - [`nullable`] - Tri-state optional-nullable values
//! - [`validate`] - Recursive validation
//!
//! # Feature Flags
//!
//! - `telemetry` - Emits `tracing` events from the codec

pub mod codec;
pub mod enum_value;
pub mod error;
pub mod model;
pub mod models;
pub mod nullable;
pub mod validate;

pub use enum_value::{ApiEnum, KnownVariant};
pub use error::{Error, ErrorKind};
pub use model::{FieldKind, Model, RawModel, ToWire};
pub use nullable::Nullable;
pub use serde_json::{Map, Value};
pub use validate::Validate;
