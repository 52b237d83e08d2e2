//! Defaults and environment variable names.

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://live.paywire.dev/";

/// Sandbox API base URL.
pub const TEST_MODE_BASE_URL: &str = "https://test.paywire.dev/";

/// Overrides [`ClientConfig::base_url`](crate::config::ClientConfig::base_url).
pub const BASE_URL_ENV: &str = "PAYWIRE_BASE_URL";

/// Overrides the request timeout, in whole seconds.
pub const TIMEOUT_SECS_ENV: &str = "PAYWIRE_TIMEOUT_SECS";

/// Enables validation of every decoded response when set to `1` or `true`.
pub const STRICT_ENV: &str = "PAYWIRE_STRICT";
