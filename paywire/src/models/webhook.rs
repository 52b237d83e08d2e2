//! Webhook endpoint models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{FieldKind, RawModel};
use crate::models::EventType;
use crate::{ApiEnum, Error, Nullable, Validate};

/// A registered webhook endpoint, as returned by the API.
///
/// # JSON Format
///
/// ```json
/// {
///   "id": "wh_01",
///   "url": "https://example.com/hooks",
///   "description": "orders",
///   "created_at": "2024-05-01T10:00:00Z",
///   "updated_at": "2024-05-01T10:00:00Z",
///   "disabled": false,
///   "filter_types": ["payment.succeeded"],
///   "metadata": {},
///   "rate_limit": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookDetails {
    raw: RawModel,
}

crate::impl_model!(
    WebhookDetails,
    "WebhookDetails",
    [
        "id",
        "url",
        "description",
        "created_at",
        "updated_at",
        "disabled",
        "filter_types",
        "metadata",
        "rate_limit",
    ]
);

impl WebhookDetails {
    /// Creates a webhook with its required fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        created_at: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        let mut webhook = Self {
            raw: RawModel::new(),
        };
        webhook.set_id(id);
        webhook.set_url(url);
        webhook.set_created_at(created_at);
        webhook.set_updated_at(updated_at);
        webhook
    }

    /// The webhook identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn id(&self) -> Result<String, Error> {
        self.raw.get("id")
    }

    /// Sets the webhook identifier.
    pub fn set_id(&mut self, value: impl Into<String>) {
        self.raw.set("id", &value.into());
    }

    /// The endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn url(&self) -> Result<String, Error> {
        self.raw.get("url")
    }

    /// Sets the endpoint URL.
    pub fn set_url(&mut self, value: impl Into<String>) {
        self.raw.set("url", &value.into());
    }

    /// Free-form description.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string.
    pub fn description(&self) -> Result<Option<String>, Error> {
        self.raw.get_optional("description")
    }

    /// Sets or clears the description.
    pub fn set_description(&mut self, value: Option<String>) {
        self.raw.set_optional("description", value.as_ref());
    }

    /// Builder form of [`Self::set_description`].
    #[must_use]
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.set_description(Some(value.into()));
        self
    }

    /// Creation time (RFC 3339).
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn created_at(&self) -> Result<String, Error> {
        self.raw.get("created_at")
    }

    /// Sets the creation time.
    pub fn set_created_at(&mut self, value: impl Into<String>) {
        self.raw.set("created_at", &value.into());
    }

    /// Last update time (RFC 3339).
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn updated_at(&self) -> Result<String, Error> {
        self.raw.get("updated_at")
    }

    /// Sets the last update time.
    pub fn set_updated_at(&mut self, value: impl Into<String>) {
        self.raw.set("updated_at", &value.into());
    }

    /// Whether deliveries are paused.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a boolean.
    pub fn disabled(&self) -> Result<Option<bool>, Error> {
        self.raw.get_optional("disabled")
    }

    /// Sets or clears the disabled flag.
    pub fn set_disabled(&mut self, value: Option<bool>) {
        self.raw.set_optional("disabled", value.as_ref());
    }

    /// Builder form of [`Self::set_disabled`].
    #[must_use]
    pub fn with_disabled(mut self, value: bool) -> Self {
        self.set_disabled(Some(value));
        self
    }

    /// Event types delivered to this endpoint; all types when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not an array of strings.
    pub fn filter_types(&self) -> Result<Option<Vec<ApiEnum<EventType>>>, Error> {
        self.raw.get_optional("filter_types")
    }

    /// Sets or clears the event filter.
    pub fn set_filter_types(&mut self, value: Option<Vec<ApiEnum<EventType>>>) {
        self.raw.set_optional("filter_types", value.as_ref());
    }

    /// Builder form of [`Self::set_filter_types`].
    #[must_use]
    pub fn with_filter_types<I, E>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ApiEnum<EventType>>,
    {
        self.set_filter_types(Some(types.into_iter().map(Into::into).collect()));
        self
    }

    /// Merchant-defined key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string map.
    pub fn metadata(&self) -> Result<Option<BTreeMap<String, String>>, Error> {
        self.raw.get_optional("metadata")
    }

    /// Sets or clears the metadata.
    pub fn set_metadata(&mut self, value: Option<BTreeMap<String, String>>) {
        self.raw.set_optional("metadata", value.as_ref());
    }

    /// Maximum deliveries per second; `null` means unlimited.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not an integer.
    pub fn rate_limit(&self) -> Result<Nullable<i64>, Error> {
        self.raw.get_nullable("rate_limit")
    }

    /// Sets the rate limit, an explicit `null`, or removes the key.
    pub fn set_rate_limit(&mut self, value: impl Into<Nullable<i64>>) {
        let value: Nullable<i64> = value.into();
        self.raw.set_nullable("rate_limit", value.as_ref());
    }

    /// Builder form of [`Self::set_rate_limit`].
    #[must_use]
    pub fn with_rate_limit(mut self, value: impl Into<Nullable<i64>>) -> Self {
        self.set_rate_limit(value);
        self
    }
}

impl Validate for WebhookDetails {
    fn validate(&self) -> Result<(), Error> {
        self.raw.validate_field::<String>("id", FieldKind::Required)?;
        self.raw.validate_field::<String>("url", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("description", FieldKind::Optional)?;
        self.raw
            .validate_field::<String>("created_at", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("updated_at", FieldKind::Required)?;
        self.raw.validate_field::<bool>("disabled", FieldKind::Optional)?;
        self.raw
            .validate_field::<Vec<ApiEnum<EventType>>>("filter_types", FieldKind::Optional)?;
        self.raw
            .validate_field::<BTreeMap<String, String>>("metadata", FieldKind::Optional)?;
        self.raw
            .validate_field::<i64>("rate_limit", FieldKind::Nullable)?;
        Ok(())
    }
}

/// Request body for creating a webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookCreateParams {
    raw: RawModel,
}

crate::impl_model!(
    WebhookCreateParams,
    "WebhookCreateParams",
    [
        "url",
        "description",
        "disabled",
        "filter_types",
        "idempotency_key",
        "metadata",
        "rate_limit",
    ]
);

impl WebhookCreateParams {
    /// Creates a request for the given endpoint URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let mut params = Self {
            raw: RawModel::new(),
        };
        params.set_url(url);
        params
    }

    /// The endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn url(&self) -> Result<String, Error> {
        self.raw.get("url")
    }

    /// Sets the endpoint URL.
    pub fn set_url(&mut self, value: impl Into<String>) {
        self.raw.set("url", &value.into());
    }

    /// Free-form description.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string.
    pub fn description(&self) -> Result<Option<String>, Error> {
        self.raw.get_optional("description")
    }

    /// Sets or clears the description.
    pub fn set_description(&mut self, value: Option<String>) {
        self.raw.set_optional("description", value.as_ref());
    }

    /// Builder form of [`Self::set_description`].
    #[must_use]
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.set_description(Some(value.into()));
        self
    }

    /// Whether the endpoint starts paused.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a boolean.
    pub fn disabled(&self) -> Result<Option<bool>, Error> {
        self.raw.get_optional("disabled")
    }

    /// Sets or clears the disabled flag.
    pub fn set_disabled(&mut self, value: Option<bool>) {
        self.raw.set_optional("disabled", value.as_ref());
    }

    /// Event filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not an array of strings.
    pub fn filter_types(&self) -> Result<Option<Vec<ApiEnum<EventType>>>, Error> {
        self.raw.get_optional("filter_types")
    }

    /// Sets or clears the event filter.
    pub fn set_filter_types(&mut self, value: Option<Vec<ApiEnum<EventType>>>) {
        self.raw.set_optional("filter_types", value.as_ref());
    }

    /// Builder form of [`Self::set_filter_types`].
    #[must_use]
    pub fn with_filter_types<I, E>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ApiEnum<EventType>>,
    {
        self.set_filter_types(Some(types.into_iter().map(Into::into).collect()));
        self
    }

    /// Idempotency key; `null` asks the server to generate none.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string.
    pub fn idempotency_key(&self) -> Result<Nullable<String>, Error> {
        self.raw.get_nullable("idempotency_key")
    }

    /// Sets the idempotency key, an explicit `null`, or removes the key.
    pub fn set_idempotency_key(&mut self, value: impl Into<Nullable<String>>) {
        let value: Nullable<String> = value.into();
        self.raw.set_nullable("idempotency_key", value.as_ref());
    }

    /// Merchant-defined key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string map.
    pub fn metadata(&self) -> Result<Option<BTreeMap<String, String>>, Error> {
        self.raw.get_optional("metadata")
    }

    /// Sets or clears the metadata.
    pub fn set_metadata(&mut self, value: Option<BTreeMap<String, String>>) {
        self.raw.set_optional("metadata", value.as_ref());
    }

    /// Maximum deliveries per second; `null` means unlimited.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not an integer.
    pub fn rate_limit(&self) -> Result<Nullable<i64>, Error> {
        self.raw.get_nullable("rate_limit")
    }

    /// Sets the rate limit, an explicit `null`, or removes the key.
    pub fn set_rate_limit(&mut self, value: impl Into<Nullable<i64>>) {
        let value: Nullable<i64> = value.into();
        self.raw.set_nullable("rate_limit", value.as_ref());
    }

    /// Builder form of [`Self::set_rate_limit`].
    #[must_use]
    pub fn with_rate_limit(mut self, value: impl Into<Nullable<i64>>) -> Self {
        self.set_rate_limit(value);
        self
    }
}

impl Validate for WebhookCreateParams {
    fn validate(&self) -> Result<(), Error> {
        self.raw.validate_field::<String>("url", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("description", FieldKind::Optional)?;
        self.raw.validate_field::<bool>("disabled", FieldKind::Optional)?;
        self.raw
            .validate_field::<Vec<ApiEnum<EventType>>>("filter_types", FieldKind::Optional)?;
        self.raw
            .validate_field::<String>("idempotency_key", FieldKind::Nullable)?;
        self.raw
            .validate_field::<BTreeMap<String, String>>("metadata", FieldKind::Optional)?;
        self.raw
            .validate_field::<i64>("rate_limit", FieldKind::Nullable)?;
        Ok(())
    }
}

/// Request body for a partial webhook update. Every field is optional; only
/// the keys present are changed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookUpdateParams {
    raw: RawModel,
}

crate::impl_model!(
    WebhookUpdateParams,
    "WebhookUpdateParams",
    ["url", "description", "disabled", "filter_types", "metadata", "rate_limit"]
);

impl WebhookUpdateParams {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string.
    pub fn url(&self) -> Result<Option<String>, Error> {
        self.raw.get_optional("url")
    }

    /// Sets or clears the new URL.
    pub fn set_url(&mut self, value: Option<String>) {
        self.raw.set_optional("url", value.as_ref());
    }

    /// Builder form of [`Self::set_url`].
    #[must_use]
    pub fn with_url(mut self, value: impl Into<String>) -> Self {
        self.set_url(Some(value.into()));
        self
    }

    /// New description.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string.
    pub fn description(&self) -> Result<Option<String>, Error> {
        self.raw.get_optional("description")
    }

    /// Sets or clears the new description.
    pub fn set_description(&mut self, value: Option<String>) {
        self.raw.set_optional("description", value.as_ref());
    }

    /// Builder form of [`Self::set_description`].
    #[must_use]
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.set_description(Some(value.into()));
        self
    }

    /// New disabled flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a boolean.
    pub fn disabled(&self) -> Result<Option<bool>, Error> {
        self.raw.get_optional("disabled")
    }

    /// Sets or clears the new disabled flag.
    pub fn set_disabled(&mut self, value: Option<bool>) {
        self.raw.set_optional("disabled", value.as_ref());
    }

    /// Builder form of [`Self::set_disabled`].
    #[must_use]
    pub fn with_disabled(mut self, value: bool) -> Self {
        self.set_disabled(Some(value));
        self
    }

    /// New event filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not an array of strings.
    pub fn filter_types(&self) -> Result<Option<Vec<ApiEnum<EventType>>>, Error> {
        self.raw.get_optional("filter_types")
    }

    /// Sets or clears the new event filter.
    pub fn set_filter_types(&mut self, value: Option<Vec<ApiEnum<EventType>>>) {
        self.raw.set_optional("filter_types", value.as_ref());
    }

    /// New metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string map.
    pub fn metadata(&self) -> Result<Option<BTreeMap<String, String>>, Error> {
        self.raw.get_optional("metadata")
    }

    /// Sets or clears the new metadata.
    pub fn set_metadata(&mut self, value: Option<BTreeMap<String, String>>) {
        self.raw.set_optional("metadata", value.as_ref());
    }

    /// New rate limit; an explicit `null` removes the server-side limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not an integer.
    pub fn rate_limit(&self) -> Result<Nullable<i64>, Error> {
        self.raw.get_nullable("rate_limit")
    }

    /// Sets the new rate limit, an explicit `null`, or removes the key.
    pub fn set_rate_limit(&mut self, value: impl Into<Nullable<i64>>) {
        let value: Nullable<i64> = value.into();
        self.raw.set_nullable("rate_limit", value.as_ref());
    }

    /// Builder form of [`Self::set_rate_limit`].
    #[must_use]
    pub fn with_rate_limit(mut self, value: impl Into<Nullable<i64>>) -> Self {
        self.set_rate_limit(value);
        self
    }
}

impl Validate for WebhookUpdateParams {
    fn validate(&self) -> Result<(), Error> {
        self.raw.validate_field::<String>("url", FieldKind::Optional)?;
        self.raw
            .validate_field::<String>("description", FieldKind::Optional)?;
        self.raw.validate_field::<bool>("disabled", FieldKind::Optional)?;
        self.raw
            .validate_field::<Vec<ApiEnum<EventType>>>("filter_types", FieldKind::Optional)?;
        self.raw
            .validate_field::<BTreeMap<String, String>>("metadata", FieldKind::Optional)?;
        self.raw
            .validate_field::<i64>("rate_limit", FieldKind::Nullable)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::{ErrorKind, Model};

    fn webhook() -> WebhookDetails {
        WebhookDetails::new(
            "wh_01",
            "https://example.com/hooks",
            "2024-05-01T10:00:00Z",
            "2024-05-02T10:00:00Z",
        )
    }

    #[test]
    fn test_field_roundtrips() {
        let mut metadata = BTreeMap::new();
        metadata.insert("team".to_owned(), "billing".to_owned());

        let mut webhook = webhook()
            .with_description("orders")
            .with_disabled(true)
            .with_filter_types([EventType::PaymentSucceeded, EventType::RefundFailed])
            .with_rate_limit(25_i64);
        webhook.set_metadata(Some(metadata.clone()));

        assert_eq!(webhook.id().unwrap(), "wh_01");
        assert_eq!(webhook.url().unwrap(), "https://example.com/hooks");
        assert_eq!(webhook.description().unwrap().as_deref(), Some("orders"));
        assert_eq!(webhook.created_at().unwrap(), "2024-05-01T10:00:00Z");
        assert_eq!(webhook.updated_at().unwrap(), "2024-05-02T10:00:00Z");
        assert_eq!(webhook.disabled().unwrap(), Some(true));
        assert_eq!(
            webhook.filter_types().unwrap().unwrap(),
            vec![
                ApiEnum::from(EventType::PaymentSucceeded),
                ApiEnum::from(EventType::RefundFailed)
            ]
        );
        assert_eq!(webhook.metadata().unwrap(), Some(metadata));
        assert_eq!(webhook.rate_limit().unwrap(), Nullable::Value(25));
        assert!(webhook.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let webhook = webhook()
            .with_description("orders")
            .with_filter_types([EventType::DisputeOpened])
            .with_rate_limit(Nullable::Null);
        let text = serde_json::to_string(&webhook).unwrap();
        let back: WebhookDetails = serde_json::from_str(&text).unwrap();
        assert_eq!(back, webhook);
        assert_eq!(back.rate_limit().unwrap(), Nullable::Null);
    }

    #[test]
    fn test_null_nullable_and_unset_optional_serialize_differently() {
        let mut params = WebhookCreateParams::new("https://example.com/hooks");
        params.set_description(Some("d".to_owned()));
        params.set_rate_limit(Nullable::Null);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://example.com/hooks",
                "description": "d",
                "rate_limit": null
            })
        );
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("disabled"));
        assert!(!object.contains_key("filter_types"));
    }

    #[test]
    fn test_nullable_null_differs_from_absent() {
        let with_null = webhook().with_rate_limit(Nullable::Null);
        let absent = webhook();
        assert_ne!(with_null, absent);
        assert_ne!(
            serde_json::to_string(&with_null).unwrap(),
            serde_json::to_string(&absent).unwrap()
        );

        let with_null_back: WebhookDetails =
            serde_json::from_str(&serde_json::to_string(&with_null).unwrap()).unwrap();
        let absent_back: WebhookDetails =
            serde_json::from_str(&serde_json::to_string(&absent).unwrap()).unwrap();
        assert!(with_null_back.raw().contains_key("rate_limit"));
        assert!(!absent_back.raw().contains_key("rate_limit"));
        assert_eq!(with_null_back.rate_limit().unwrap().value(), None);
        assert_eq!(absent_back.rate_limit().unwrap().value(), None);
    }

    #[test]
    fn test_optional_null_assignment_equals_never_set() {
        let mut assigned = webhook().with_description("temp");
        assigned.set_description(None);
        assert_eq!(assigned, webhook());
        assert_eq!(assigned.description().unwrap(), None);
        assert!(!assigned.raw().contains_key("description"));

        let mut raw_null = webhook().with_description("temp");
        raw_null
            .raw_mut()
            .set_optional("description", Some(&Value::Null));
        assert_eq!(raw_null, webhook());
    }

    #[test]
    fn test_nullable_absent_removes_key() {
        let mut webhook = webhook().with_rate_limit(10_i64);
        webhook.set_rate_limit(Nullable::Absent);
        assert!(!webhook.raw().contains_key("rate_limit"));
    }

    #[test]
    fn test_decoded_null_for_optional_reads_as_none() {
        let webhook: WebhookDetails = serde_json::from_value(json!({
            "id": "wh_01",
            "url": "u",
            "created_at": "t",
            "updated_at": "t",
            "description": null
        }))
        .unwrap();
        assert_eq!(webhook.description().unwrap(), None);
        assert!(webhook.validate().is_ok());
        // Received keys are written back as received.
        assert!(serde_json::to_value(&webhook).unwrap()["description"].is_null());
    }

    #[test]
    fn test_validate_missing_required() {
        let webhook: WebhookDetails =
            serde_json::from_value(json!({ "id": "wh_01", "created_at": "t", "updated_at": "t" }))
                .unwrap();
        let err = webhook.validate().unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "url"));
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_validate_unknown_filter_type() {
        let webhook: WebhookDetails = serde_json::from_value(json!({
            "id": "wh_01",
            "url": "u",
            "created_at": "t",
            "updated_at": "t",
            "filter_types": ["payment.succeeded", "payout.sent"]
        }))
        .unwrap();
        assert_eq!(webhook.filter_types().unwrap().unwrap().len(), 2);
        let err = webhook.validate().unwrap_err();
        assert_eq!(err.path(), "filter_types[1]");
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_wrong_shape_surfaces_on_access_and_validation() {
        let webhook: WebhookDetails = serde_json::from_value(json!({
            "id": "wh_01",
            "url": "u",
            "created_at": "t",
            "updated_at": "t",
            "rate_limit": "ten"
        }))
        .unwrap();
        assert_eq!(webhook.rate_limit().unwrap_err().kind(), ErrorKind::DecodeShape);
        assert_eq!(webhook.validate().unwrap_err().kind(), ErrorKind::DecodeShape);
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let webhook: WebhookDetails = serde_json::from_value(json!({
            "id": "wh_01",
            "filter_types": ["x"],
            "extra": 1
        }))
        .unwrap();
        let before = webhook.clone();
        let _ = webhook.validate();
        assert_eq!(webhook, before);
        assert_eq!(webhook.raw().len(), 3);
    }

    #[test]
    fn test_update_params_default_is_empty() {
        let update = WebhookUpdateParams::new();
        assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
        assert!(update.validate().is_ok());

        let update = update.with_disabled(false).with_rate_limit(Nullable::Null);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "disabled": false, "rate_limit": null })
        );
    }

    #[test]
    fn test_create_params_idempotency_key_states() {
        let mut params = WebhookCreateParams::new("u");
        assert_eq!(params.idempotency_key().unwrap(), Nullable::Absent);
        params.set_idempotency_key(Nullable::Null);
        assert_eq!(params.idempotency_key().unwrap(), Nullable::Null);
        params.set_idempotency_key("idem_1".to_owned());
        assert_eq!(
            params.idempotency_key().unwrap(),
            Nullable::Value("idem_1".to_owned())
        );
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_declared_fields() {
        assert_eq!(WebhookDetails::NAME, "WebhookDetails");
        assert!(WebhookDetails::FIELDS.contains(&"rate_limit"));
        assert!(!WebhookUpdateParams::FIELDS.contains(&"id"));
    }
}
