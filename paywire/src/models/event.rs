//! Webhook delivery envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{FieldKind, Model, RawModel};
use crate::models::{Dispute, EventType, Subscription};
use crate::{ApiEnum, Error, Validate};

/// The body of a webhook delivery.
///
/// # JSON Format
///
/// ```json
/// {
///   "business_id": "bus_1",
///   "type": "dispute.opened",
///   "timestamp": "2024-05-01T10:00:00Z",
///   "data": { "dispute_id": "dsp_1", "...": "..." }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookPayload {
    raw: RawModel,
}

crate::impl_model!(
    WebhookPayload,
    "WebhookPayload",
    ["business_id", "type", "timestamp", "data"],
    nested = drop_unknown_data
);

fn drop_unknown_data(raw: &mut RawModel) -> usize {
    let event_type = raw
        .get_optional::<ApiEnum<EventType>>("type")
        .ok()
        .flatten()
        .and_then(|event_type| event_type.known());
    match event_type {
        Some(known) if known.is_dispute() => raw.drop_unknown_in::<Dispute>("data"),
        Some(known) if known.is_subscription() => raw.drop_unknown_in::<Subscription>("data"),
        _ => 0,
    }
}

/// The `data` object of a [`WebhookPayload`], typed by event family.
#[derive(Debug, Clone, PartialEq)]
pub enum EventData {
    /// Carried by `dispute.*` events.
    Dispute(Dispute),
    /// Carried by `subscription.*` events.
    Subscription(Subscription),
    /// Any other event, including types this crate does not know yet.
    Other(RawModel),
}

impl WebhookPayload {
    /// Creates an envelope around an already-encoded data object.
    #[must_use]
    pub fn new<D: Model>(
        business_id: impl Into<String>,
        event_type: impl Into<ApiEnum<EventType>>,
        timestamp: impl Into<String>,
        data: &D,
    ) -> Self {
        let mut raw = RawModel::new();
        raw.set("business_id", &business_id.into());
        raw.set("type", &event_type.into());
        raw.set("timestamp", &timestamp.into());
        raw.set("data", data);
        Self { raw }
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn business_id(&self) -> Result<String, Error> {
        self.raw.get("business_id")
    }

    /// The event type. Newer types decode as unknown values.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn event_type(&self) -> Result<ApiEnum<EventType>, Error> {
        self.raw.get("type")
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn timestamp(&self) -> Result<String, Error> {
        self.raw.get("timestamp")
    }

    /// The untyped data object.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent.
    pub fn data(&self) -> Result<Value, Error> {
        self.raw.get("data")
    }

    /// Decodes the data object as a specific model, without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not an object.
    pub fn data_as<M: Model + DeserializeOwned>(&self) -> Result<M, Error> {
        self.raw.get("data")
    }

    /// Decodes the data object according to the event family.
    ///
    /// # Errors
    ///
    /// Returns an error if `type` or `data` is absent or has the wrong shape.
    pub fn decode_data(&self) -> Result<EventData, Error> {
        let event_type = self.event_type()?;
        let data = match event_type.known() {
            Some(known) if known.is_dispute() => EventData::Dispute(self.data_as()?),
            Some(known) if known.is_subscription() => EventData::Subscription(self.data_as()?),
            _ => EventData::Other(self.raw.get("data")?),
        };

        #[cfg(feature = "telemetry")]
        tracing::trace!(event_type = %event_type, "decoded webhook data");

        Ok(data)
    }
}

impl Validate for EventData {
    fn validate(&self) -> Result<(), Error> {
        match self {
            Self::Dispute(dispute) => dispute.validate(),
            Self::Subscription(subscription) => subscription.validate(),
            Self::Other(_) => Ok(()),
        }
    }
}

impl Validate for WebhookPayload {
    fn validate(&self) -> Result<(), Error> {
        self.raw
            .validate_field::<String>("business_id", FieldKind::Required)?;
        self.raw
            .validate_field::<ApiEnum<EventType>>("type", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("timestamp", FieldKind::Required)?;
        self.decode_data()?
            .validate()
            .map_err(|e| e.in_field("data"))
    }
}
