//! Client configuration.
//!
//! A [`ClientConfig`] can be built in code, deserialized from any serde
//! format, or read from the environment.
//!
//! # Environment Variables
//!
//! - `PAYWIRE_BASE_URL` - API base URL (default: [`DEFAULT_BASE_URL`])
//! - `PAYWIRE_TIMEOUT_SECS` - Request timeout in seconds (default: none)
//! - `PAYWIRE_STRICT` - `true`/`1` validates every decoded response
//!
//! # Example
//!
//! ```json
//! { "base_url": "https://test.paywire.dev/", "timeout": 30, "codec": { "validate_on_decode": true } }
//! ```

use std::time::Duration;

use paywire::codec::Codec;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{DurationSeconds, serde_as};
use url::Url;

use crate::constants::{
    BASE_URL_ENV, DEFAULT_BASE_URL, STRICT_ENV, TEST_MODE_BASE_URL, TIMEOUT_SECS_ENV,
};
use crate::error::{ClientError, ConfigError};

/// Connection and codec settings for [`ApiClient`](crate::client::ApiClient).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL, always ending in a single `/`.
    #[serde(deserialize_with = "deserialize_base_url")]
    pub base_url: Url,

    /// Per-request timeout.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    pub timeout: Option<Duration>,

    /// Decode/encode settings applied to every request and response.
    #[serde(default)]
    pub codec: Codec,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with no timeout and a lenient
    /// codec.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            timeout: None,
            codec: Codec::new(),
        }
    }

    /// Parses `base_url` and creates a configuration for it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UrlParse`] if the URL does not parse.
    pub fn parse(base_url: &str) -> Result<Self, ClientError> {
        let url = Url::parse(base_url).map_err(|e| ClientError::UrlParse {
            context: "Failed to parse base url",
            source: e,
        })?;
        Ok(Self::new(url))
    }

    /// Creates a configuration for the sandbox API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UrlParse`] if the sandbox URL does not parse.
    pub fn test_mode() -> Result<Self, ClientError> {
        Self::parse(TEST_MODE_BASE_URL)
    }

    /// Reads the configuration from `PAYWIRE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparsable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let url = Url::parse(&base_url).map_err(|e| ConfigError::BaseUrl {
            value: base_url.clone(),
            source: e,
        })?;
        let mut config = Self::new(url);

        if let Some(value) = lookup(TIMEOUT_SECS_ENV) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Timeout {
                    value: value.clone(),
                    source: e,
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(value) = lookup(STRICT_ENV) {
            let strict = parse_flag(STRICT_ENV, &value)?;
            config.codec = config.codec.with_validate_on_decode(strict);
        }

        Ok(config)
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the codec.
    #[must_use]
    pub const fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Flag {
            name,
            value: value.to_owned(),
        }),
    }
}

/// Strips trailing slashes from the path and adds exactly one, so relative
/// segments append instead of replacing the last one.
fn normalize_base_url(mut url: Url) -> Url {
    let path = format!("{}/", url.path().trim_end_matches('/'));
    url.set_path(&path);
    url
}

fn deserialize_base_url<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Url, D::Error> {
    Url::deserialize(deserializer).map(normalize_base_url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use paywire::codec::UnknownFields;
    use serde_json::json;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
        assert_eq!(config.codec, Codec::new());
        assert_eq!(config, ClientConfig::parse(DEFAULT_BASE_URL).unwrap());
    }

    #[test]
    fn test_test_mode_targets_sandbox() {
        let config = ClientConfig::test_mode().unwrap();
        assert_eq!(config.base_url.as_str(), TEST_MODE_BASE_URL);
        assert_ne!(config, ClientConfig::parse(DEFAULT_BASE_URL).unwrap());
        assert_eq!(config.codec, Codec::new());
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("PAYWIRE_BASE_URL", "http://localhost:8080/api//"),
            ("PAYWIRE_TIMEOUT_SECS", " 15 "),
            ("PAYWIRE_STRICT", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/api/");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert!(config.codec.validate_on_decode);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let err = ClientConfig::from_lookup(lookup(&[("PAYWIRE_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Timeout { .. }));

        let err = ClientConfig::from_lookup(lookup(&[("PAYWIRE_STRICT", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::Flag { name: "PAYWIRE_STRICT", .. }));

        let err = ClientConfig::from_lookup(lookup(&[("PAYWIRE_BASE_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::BaseUrl { .. }));
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let config = ClientConfig::parse("https://api.example.com/v1").unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.example.com/v1/");
        let config = ClientConfig::parse("https://api.example.com").unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.example.com/");
    }

    #[test]
    fn test_deserialize() {
        let config: ClientConfig = serde_json::from_value(json!({
            "base_url": "https://test.paywire.dev",
            "timeout": 30,
            "codec": { "unknown_fields": "drop" }
        }))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://test.paywire.dev/");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.codec.unknown_fields, UnknownFields::Drop);

        let config: ClientConfig =
            serde_json::from_value(json!({ "base_url": "https://test.paywire.dev/" })).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = ClientConfig::parse("https://test.paywire.dev/")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .with_codec(Codec::strict());
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["timeout"], 5);
        let back: ClientConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }
}
