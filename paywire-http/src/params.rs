//! Typed request parameters.
//!
//! Each endpoint is a [`RequestParams`] value that knows its method, path,
//! query string and JSON body. [`build_url`] turns one into a request URL
//! relative to the API base.
//!
//! List filters go out as repeated query keys, and enum filters always carry
//! the wire value, never a symbolic name:
//!
//! ```rust
//! use paywire::models::DisputeStatus;
//! use paywire_http::params::{DisputeListParams, build_url};
//! use url::Url;
//!
//! let base = Url::parse("https://test.paywire.dev/").unwrap();
//! let params = DisputeListParams::new()
//!     .with_dispute_status(DisputeStatus::DisputeOpened)
//!     .with_dispute_status(DisputeStatus::DisputeLost);
//! let url = build_url(&base, &params).unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "https://test.paywire.dev/disputes?dispute_status=dispute_opened&dispute_status=dispute_lost"
//! );
//! ```

use std::fmt;

use paywire::models::{
    CursorPage, Dispute, DisputeStage, DisputeStatus, NumberedPage, Subscription,
    WebhookCreateParams, WebhookDetails, WebhookUpdateParams,
};
use paywire::{ApiEnum, Model, ToWire, Value};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ClientError;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "client")]
impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Patch => Self::PATCH,
        }
    }
}

/// One API endpoint call.
pub trait RequestParams {
    /// The model the endpoint responds with.
    type Response: Model + DeserializeOwned;

    /// HTTP method.
    const METHOD: Method;

    /// Short label used in logs and error messages, e.g. `"GET /webhooks/{id}"`.
    const CONTEXT: &'static str;

    /// Path segments below the base URL, unencoded.
    fn path_segments(&self) -> Vec<String>;

    /// Query pairs, in order. Keys may repeat.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON request body, if the endpoint takes one.
    fn body(&self) -> Option<Value> {
        None
    }
}

/// Builds the full request URL for `params` below `base`.
///
/// Path segments are percent-encoded individually, so an identifier
/// containing `/` stays a single segment.
///
/// # Errors
///
/// Returns [`ClientError::CannotBeABase`] if `base` cannot carry a path.
pub fn build_url<P: RequestParams + ?Sized>(base: &Url, params: &P) -> Result<Url, ClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ClientError::CannotBeABase {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(params.path_segments());

    let query = params.query();
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(&query);
    }
    Ok(url)
}

fn push_enums<K: paywire::KnownVariant>(
    query: &mut Vec<(&'static str, String)>,
    key: &'static str,
    values: &[ApiEnum<K>],
) {
    query.extend(values.iter().map(|value| (key, value.raw().to_string())));
}

fn push_opt<T: ToString>(query: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&T>) {
    if let Some(value) = value {
        query.push((key, value.to_string()));
    }
}

/// `GET /webhooks`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookListParams {
    /// Page size.
    pub limit: Option<u32>,
    /// Cursor from a previous page's `iterator`.
    pub iterator: Option<String>,
}

impl WebhookListParams {
    /// Creates parameters for the first page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continues from `iterator`.
    #[must_use]
    pub fn with_iterator(mut self, iterator: impl Into<String>) -> Self {
        self.iterator = Some(iterator.into());
        self
    }
}

impl RequestParams for WebhookListParams {
    type Response = CursorPage<WebhookDetails>;
    const METHOD: Method = Method::Get;
    const CONTEXT: &'static str = "GET /webhooks";

    fn path_segments(&self) -> Vec<String> {
        vec!["webhooks".to_owned()]
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "limit", self.limit.as_ref());
        push_opt(&mut query, "iterator", self.iterator.as_ref());
        query
    }
}

/// `GET /webhooks/{webhook_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRetrieveParams {
    /// Webhook identifier.
    pub webhook_id: String,
}

impl WebhookRetrieveParams {
    /// Creates parameters for `webhook_id`.
    #[must_use]
    pub fn new(webhook_id: impl Into<String>) -> Self {
        Self {
            webhook_id: webhook_id.into(),
        }
    }
}

impl RequestParams for WebhookRetrieveParams {
    type Response = WebhookDetails;
    const METHOD: Method = Method::Get;
    const CONTEXT: &'static str = "GET /webhooks/{webhook_id}";

    fn path_segments(&self) -> Vec<String> {
        vec!["webhooks".to_owned(), self.webhook_id.clone()]
    }
}

/// `POST /webhooks`
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookCreateRequest {
    /// Request body.
    pub body: WebhookCreateParams,
}

impl WebhookCreateRequest {
    /// Wraps a create body.
    #[must_use]
    pub const fn new(body: WebhookCreateParams) -> Self {
        Self { body }
    }
}

impl RequestParams for WebhookCreateRequest {
    type Response = WebhookDetails;
    const METHOD: Method = Method::Post;
    const CONTEXT: &'static str = "POST /webhooks";

    fn path_segments(&self) -> Vec<String> {
        vec!["webhooks".to_owned()]
    }

    fn body(&self) -> Option<Value> {
        Some(self.body.to_wire())
    }
}

/// `PATCH /webhooks/{webhook_id}`
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookUpdateRequest {
    /// Webhook identifier.
    pub webhook_id: String,
    /// Request body; only the keys present are changed.
    pub body: WebhookUpdateParams,
}

impl WebhookUpdateRequest {
    /// Creates an update of `webhook_id`.
    #[must_use]
    pub fn new(webhook_id: impl Into<String>, body: WebhookUpdateParams) -> Self {
        Self {
            webhook_id: webhook_id.into(),
            body,
        }
    }
}

impl RequestParams for WebhookUpdateRequest {
    type Response = WebhookDetails;
    const METHOD: Method = Method::Patch;
    const CONTEXT: &'static str = "PATCH /webhooks/{webhook_id}";

    fn path_segments(&self) -> Vec<String> {
        vec!["webhooks".to_owned(), self.webhook_id.clone()]
    }

    fn body(&self) -> Option<Value> {
        Some(self.body.to_wire())
    }
}

/// `GET /disputes`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisputeListParams {
    /// Items per page.
    pub page_size: Option<u32>,
    /// Zero-based page index.
    pub page_number: Option<u32>,
    /// Only disputes in one of these statuses.
    pub dispute_status: Vec<ApiEnum<DisputeStatus>>,
    /// Only disputes in one of these stages.
    pub dispute_stage: Vec<ApiEnum<DisputeStage>>,
    /// Only disputes of this customer.
    pub customer_id: Option<String>,
    /// Created at or after this time (RFC 3339).
    pub created_at_gte: Option<String>,
    /// Created at or before this time (RFC 3339).
    pub created_at_lte: Option<String>,
}

impl DisputeListParams {
    /// Creates parameters with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the page index.
    #[must_use]
    pub const fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Adds a status to the filter.
    #[must_use]
    pub fn with_dispute_status(mut self, status: impl Into<ApiEnum<DisputeStatus>>) -> Self {
        self.dispute_status.push(status.into());
        self
    }

    /// Adds a stage to the filter.
    #[must_use]
    pub fn with_dispute_stage(mut self, stage: impl Into<ApiEnum<DisputeStage>>) -> Self {
        self.dispute_stage.push(stage.into());
        self
    }

    /// Filters by customer.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Filters by creation time range; either bound may be omitted.
    #[must_use]
    pub fn with_created_between(mut self, gte: Option<String>, lte: Option<String>) -> Self {
        self.created_at_gte = gte;
        self.created_at_lte = lte;
        self
    }
}

impl RequestParams for DisputeListParams {
    type Response = NumberedPage<Dispute>;
    const METHOD: Method = Method::Get;
    const CONTEXT: &'static str = "GET /disputes";

    fn path_segments(&self) -> Vec<String> {
        vec!["disputes".to_owned()]
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "page_size", self.page_size.as_ref());
        push_opt(&mut query, "page_number", self.page_number.as_ref());
        push_enums(&mut query, "dispute_status", &self.dispute_status);
        push_enums(&mut query, "dispute_stage", &self.dispute_stage);
        push_opt(&mut query, "customer_id", self.customer_id.as_ref());
        push_opt(&mut query, "created_at_gte", self.created_at_gte.as_ref());
        push_opt(&mut query, "created_at_lte", self.created_at_lte.as_ref());
        query
    }
}

/// `GET /disputes/{dispute_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisputeRetrieveParams {
    /// Dispute identifier.
    pub dispute_id: String,
}

impl DisputeRetrieveParams {
    /// Creates parameters for `dispute_id`.
    #[must_use]
    pub fn new(dispute_id: impl Into<String>) -> Self {
        Self {
            dispute_id: dispute_id.into(),
        }
    }
}

impl RequestParams for DisputeRetrieveParams {
    type Response = Dispute;
    const METHOD: Method = Method::Get;
    const CONTEXT: &'static str = "GET /disputes/{dispute_id}";

    fn path_segments(&self) -> Vec<String> {
        vec!["disputes".to_owned(), self.dispute_id.clone()]
    }
}

/// `GET /subscriptions/{subscription_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRetrieveParams {
    /// Subscription identifier.
    pub subscription_id: String,
}

impl SubscriptionRetrieveParams {
    /// Creates parameters for `subscription_id`.
    #[must_use]
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
        }
    }
}

impl RequestParams for SubscriptionRetrieveParams {
    type Response = Subscription;
    const METHOD: Method = Method::Get;
    const CONTEXT: &'static str = "GET /subscriptions/{subscription_id}";

    fn path_segments(&self) -> Vec<String> {
        vec!["subscriptions".to_owned(), self.subscription_id.clone()]
    }
}

#[cfg(test)]
mod tests {
    use paywire::Nullable;
    use paywire::models::EventType;
    use serde_json::json;

    use super::*;

    fn base() -> Url {
        Url::parse("https://test.paywire.dev/v1/").unwrap()
    }

    #[test]
    fn test_retrieve_path() {
        let url = build_url(&base(), &WebhookRetrieveParams::new("wh_1")).unwrap();
        assert_eq!(url.as_str(), "https://test.paywire.dev/v1/webhooks/wh_1");
        assert_eq!(WebhookRetrieveParams::METHOD, Method::Get);
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let url = build_url(&base(), &DisputeRetrieveParams::new("a/b c")).unwrap();
        assert_eq!(url.as_str(), "https://test.paywire.dev/v1/disputes/a%2Fb%20c");
    }

    #[test]
    fn test_list_query_omits_unset() {
        let url = build_url(&base(), &WebhookListParams::new()).unwrap();
        assert_eq!(url.as_str(), "https://test.paywire.dev/v1/webhooks");

        let params = WebhookListParams::new().with_limit(10).with_iterator("it_2");
        let url = build_url(&base(), &params).unwrap();
        assert_eq!(url.query(), Some("limit=10&iterator=it_2"));
    }

    #[test]
    fn test_enum_filters_use_raw_values() {
        let params = DisputeListParams::new()
            .with_page_size(20)
            .with_dispute_stage(DisputeStage::PreArbitration)
            .with_dispute_status(ApiEnum::<DisputeStatus>::new("dispute_escalated".to_owned()))
            .with_customer_id("cus 1");
        let url = build_url(&base(), &params).unwrap();
        assert_eq!(
            url.query(),
            Some("page_size=20&dispute_status=dispute_escalated&dispute_stage=pre_arbitration&customer_id=cus+1")
        );
    }

    #[test]
    fn test_create_and_update_bodies() {
        let body = WebhookCreateParams::new("https://example.com/hooks")
            .with_filter_types([EventType::PaymentSucceeded])
            .with_rate_limit(Nullable::Null);
        let request = WebhookCreateRequest::new(body);
        assert_eq!(WebhookCreateRequest::METHOD.as_str(), "POST");
        assert_eq!(
            request.body(),
            Some(json!({
                "url": "https://example.com/hooks",
                "filter_types": ["payment.succeeded"],
                "rate_limit": null
            }))
        );

        let update = WebhookUpdateRequest::new("wh_1", WebhookUpdateParams::new().with_disabled(true));
        assert_eq!(update.body(), Some(json!({ "disabled": true })));
        let url = build_url(&base(), &update).unwrap();
        assert_eq!(url.path(), "/v1/webhooks/wh_1");
        assert_eq!(WebhookUpdateRequest::METHOD, Method::Patch);
    }

    #[test]
    fn test_get_requests_have_no_body() {
        assert_eq!(SubscriptionRetrieveParams::new("sub_1").body(), None);
        assert_eq!(DisputeListParams::new().body(), None);
    }

    #[test]
    fn test_cannot_be_a_base() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        let err = build_url(&base, &WebhookListParams::new()).unwrap_err();
        assert!(matches!(err, ClientError::CannotBeABase { .. }));
    }
}
