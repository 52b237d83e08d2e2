//! An async client that sends [`RequestParams`] to the API over HTTP.
//!
//! ## Features
//!
//! - Uses `reqwest` for async HTTP requests
//! - Supports optional timeout and custom headers
//! - Decodes every response through the configured [`Codec`]
//! - Integrates with `tracing` if the `telemetry` feature is enabled
//!
//! Authentication and retries are left to the caller: pass an
//! `Authorization` header through [`ApiClient::with_headers`], or a
//! preconfigured [`reqwest::Client`] through [`ApiClient::with_http_client`].

use std::time::Duration;

use http::HeaderMap;
use paywire::codec::Codec;
use reqwest::Client;
use url::Url;

#[cfg(feature = "telemetry")]
use tracing::{Instrument, Span};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::params::{RequestParams, build_url};

/// A client for the payments API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Base URL, ending in `/`.
    base_url: Url,
    /// Shared Reqwest HTTP client
    client: Client,
    /// Custom headers sent with each request
    headers: HeaderMap,
    /// Optional request timeout
    timeout: Option<Duration>,
    /// Response decoding settings
    codec: Codec,
}

impl ApiClient {
    /// Creates a client from a configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url,
            client: Client::new(),
            headers: HeaderMap::new(),
            timeout: config.timeout,
            codec: config.codec,
        }
    }

    /// Creates a client configured from `PAYWIRE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](crate::error::ConfigError) if a variable is
    /// set to an unparsable value.
    pub fn from_env() -> Result<Self, crate::error::ConfigError> {
        ClientConfig::from_env().map(Self::new)
    }

    /// Returns the base URL used by this client.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns any custom headers configured on the client.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the configured timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the codec applied to responses.
    #[must_use]
    pub const fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Attaches custom headers to all future requests.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets a timeout for all future requests.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the codec applied to responses.
    #[must_use]
    pub const fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }

    /// Uses a preconfigured `reqwest` client, e.g. one with default headers
    /// or a proxy.
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Sends one request and decodes the response model.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the URL cannot be built, the request fails,
    /// the server answers with a non-success status, or the body does not
    /// decode (or fails validation under a strict codec).
    #[cfg(feature = "telemetry")]
    pub async fn send<P>(&self, params: &P) -> Result<P::Response, ClientError>
    where
        P: RequestParams + Sync,
        P::Response: Send,
    {
        let span = tracing::info_span!(
            "paywire.request",
            method = %P::METHOD,
            endpoint = P::CONTEXT,
            timeout = ?self.timeout,
            otel.status_code = tracing::field::Empty,
            error.message = tracing::field::Empty,
        );
        self.send_inner(params).instrument(span).await
    }

    /// Sends one request and decodes the response model.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the URL cannot be built, the request fails,
    /// the server answers with a non-success status, or the body does not
    /// decode (or fails validation under a strict codec).
    #[cfg(not(feature = "telemetry"))]
    pub async fn send<P>(&self, params: &P) -> Result<P::Response, ClientError>
    where
        P: RequestParams + Sync,
        P::Response: Send,
    {
        self.send_inner(params).await
    }

    async fn send_inner<P>(&self, params: &P) -> Result<P::Response, ClientError>
    where
        P: RequestParams + Sync,
        P::Response: Send,
    {
        let context = P::CONTEXT;
        let url = build_url(&self.base_url, params)?;

        let mut req = self.client.request(P::METHOD.into(), url);
        if let Some(body) = params.body() {
            req = req.json(&body);
        }
        for (key, value) in &self.headers {
            req = req.header(key, value);
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let http_response = req
            .send()
            .await
            .map_err(|e| ClientError::Http { context, source: e })?;

        let status = http_response.status();
        let result = if status.is_success() {
            let bytes = http_response
                .bytes()
                .await
                .map_err(|e| ClientError::ResponseBodyRead { context, source: e })?;
            self.codec
                .decode_slice::<P::Response>(&bytes)
                .map_err(|e| ClientError::Decode { context, source: e })
        } else {
            let body = http_response
                .text()
                .await
                .map_err(|e| ClientError::ResponseBodyRead { context, source: e })?;
            Err(ClientError::HttpStatus {
                context,
                status,
                body,
            })
        };

        record_result_on_span(&result);

        result
    }
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R>(result: &Result<R, ClientError>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "API request failed");
        }
    }
}

#[cfg(not(feature = "telemetry"))]
const fn record_result_on_span<R>(_result: &Result<R, ClientError>) {}
