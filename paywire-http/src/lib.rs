#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport for the paywire API models.
//!
//! Provides typed request parameters, client configuration, and a
//! (feature-gated) async client that decodes responses into raw-preserving
//! models.
//!
//! # Modules
//!
//! - [`constants`] - Default base URLs and environment variable names
//! - [`config`] - Client configuration, from code, serde, or the environment
//! - [`error`] - Transport and configuration error types
//! - [`params`] - Endpoint parameters and URL building
//! - [`client`] - Async HTTP client (feature: `client`)
//!
//! # Feature Flags
//!
//! - `client` (default) - [`client::ApiClient`] on top of `reqwest`
//! - `telemetry` - Request spans and error events via `tracing`

pub mod config;
pub mod constants;
pub mod error;
pub mod params;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ConfigError};
pub use params::RequestParams;
