//! Error types for the HTTP transport layer.

#[cfg(feature = "client")]
use http::StatusCode;

/// Errors that can occur while building or sending an API request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// URL parse error.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("base URL cannot be a base: {url}")]
    CannotBeABase {
        /// The offending URL.
        url: String,
    },
    /// HTTP transport error.
    #[cfg(feature = "client")]
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// Unexpected HTTP status code.
    #[cfg(feature = "client")]
    #[error("Unexpected HTTP status {status}: {context}: {body}")]
    HttpStatus {
        /// Human-readable context.
        context: &'static str,
        /// The HTTP status code.
        status: StatusCode,
        /// The response body.
        body: String,
    },
    /// Failed to read response body.
    #[cfg(feature = "client")]
    #[error("Failed to read response body: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The response body is not a valid model, or failed strict validation.
    #[error("Failed to decode response: {context}: {source}")]
    Decode {
        /// Human-readable context.
        context: &'static str,
        /// The underlying model error.
        #[source]
        source: paywire::Error,
    },
}

impl ClientError {
    /// Returns the HTTP status for [`ClientError::HttpStatus`].
    #[cfg(feature = "client")]
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while reading [`ClientConfig`](crate::config::ClientConfig)
/// from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL does not parse.
    #[error("invalid base URL {value:?}: {source}")]
    BaseUrl {
        /// The rejected value.
        value: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The timeout is not a whole number of seconds.
    #[error("invalid timeout {value:?}: {source}")]
    Timeout {
        /// The rejected value.
        value: String,
        /// The underlying parse error.
        #[source]
        source: std::num::ParseIntError,
    },
    /// A boolean flag has an unrecognized value.
    #[error("invalid flag {name}={value:?}")]
    Flag {
        /// Environment variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}
