//! Payment disputes.

use serde::{Deserialize, Serialize};

use crate::model::{FieldKind, RawModel};
use crate::models::{Currency, DisputeStage, DisputeStatus};
use crate::{ApiEnum, Error, Nullable, Validate};

/// A payment dispute raised by a customer's bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dispute {
    raw: RawModel,
}

crate::impl_model!(
    Dispute,
    "Dispute",
    [
        "dispute_id",
        "business_id",
        "payment_id",
        "amount",
        "currency",
        "dispute_status",
        "dispute_stage",
        "created_at",
        "remarks",
    ]
);

impl Dispute {
    /// Creates a dispute with its required fields.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dispute_id: impl Into<String>,
        business_id: impl Into<String>,
        payment_id: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<ApiEnum<Currency>>,
        dispute_status: impl Into<ApiEnum<DisputeStatus>>,
        dispute_stage: impl Into<ApiEnum<DisputeStage>>,
        created_at: impl Into<String>,
    ) -> Self {
        let mut raw = RawModel::new();
        raw.set("dispute_id", &dispute_id.into());
        raw.set("business_id", &business_id.into());
        raw.set("payment_id", &payment_id.into());
        raw.set("amount", &amount.into());
        raw.set("currency", &currency.into());
        raw.set("dispute_status", &dispute_status.into());
        raw.set("dispute_stage", &dispute_stage.into());
        raw.set("created_at", &created_at.into());
        Self { raw }
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn dispute_id(&self) -> Result<String, Error> {
        self.raw.get("dispute_id")
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn business_id(&self) -> Result<String, Error> {
        self.raw.get("business_id")
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn payment_id(&self) -> Result<String, Error> {
        self.raw.get("payment_id")
    }

    /// Disputed amount as a decimal string in major units.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn amount(&self) -> Result<String, Error> {
        self.raw.get("amount")
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn currency(&self) -> Result<ApiEnum<Currency>, Error> {
        self.raw.get("currency")
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn dispute_status(&self) -> Result<ApiEnum<DisputeStatus>, Error> {
        self.raw.get("dispute_status")
    }

    /// Sets the dispute status.
    pub fn set_dispute_status(&mut self, value: impl Into<ApiEnum<DisputeStatus>>) {
        self.raw.set("dispute_status", &value.into());
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn dispute_stage(&self) -> Result<ApiEnum<DisputeStage>, Error> {
        self.raw.get("dispute_stage")
    }

    /// Sets the dispute stage.
    pub fn set_dispute_stage(&mut self, value: impl Into<ApiEnum<DisputeStage>>) {
        self.raw.set("dispute_stage", &value.into());
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn created_at(&self) -> Result<String, Error> {
        self.raw.get("created_at")
    }

    /// Merchant remarks; `null` once cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string.
    pub fn remarks(&self) -> Result<Nullable<String>, Error> {
        self.raw.get_nullable("remarks")
    }

    /// Sets the remarks, an explicit `null`, or removes the key.
    pub fn set_remarks(&mut self, value: impl Into<Nullable<String>>) {
        let value: Nullable<String> = value.into();
        self.raw.set_nullable("remarks", value.as_ref());
    }

    /// Builder form of [`Self::set_remarks`].
    #[must_use]
    pub fn with_remarks(mut self, value: impl Into<Nullable<String>>) -> Self {
        self.set_remarks(value);
        self
    }
}

impl Validate for Dispute {
    fn validate(&self) -> Result<(), Error> {
        self.raw
            .validate_field::<String>("dispute_id", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("business_id", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("payment_id", FieldKind::Required)?;
        self.raw.validate_field::<String>("amount", FieldKind::Required)?;
        self.raw
            .validate_field::<ApiEnum<Currency>>("currency", FieldKind::Required)?;
        self.raw
            .validate_field::<ApiEnum<DisputeStatus>>("dispute_status", FieldKind::Required)?;
        self.raw
            .validate_field::<ApiEnum<DisputeStage>>("dispute_stage", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("created_at", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("remarks", FieldKind::Nullable)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ErrorKind;

    fn dispute() -> Dispute {
        Dispute::new(
            "dsp_1",
            "bus_1",
            "pay_1",
            "12.50",
            Currency::Eur,
            DisputeStatus::DisputeOpened,
            DisputeStage::PreDispute,
            "2024-03-01T00:00:00Z",
        )
    }

    #[test]
    fn test_new_and_getters() {
        let dispute = dispute();
        assert_eq!(dispute.dispute_id().unwrap(), "dsp_1");
        assert_eq!(dispute.business_id().unwrap(), "bus_1");
        assert_eq!(dispute.payment_id().unwrap(), "pay_1");
        assert_eq!(dispute.amount().unwrap(), "12.50");
        assert_eq!(dispute.currency().unwrap(), Currency::Eur);
        assert_eq!(dispute.dispute_status().unwrap(), DisputeStatus::DisputeOpened);
        assert_eq!(dispute.dispute_stage().unwrap(), DisputeStage::PreDispute);
        assert_eq!(dispute.remarks().unwrap(), Nullable::Absent);
        assert!(dispute.validate().is_ok());
    }

    #[test]
    fn test_wire_values_are_raw_strings() {
        let value = serde_json::to_value(dispute()).unwrap();
        assert_eq!(value["currency"], "EUR");
        assert_eq!(value["dispute_status"], "dispute_opened");
        assert_eq!(value["dispute_stage"], "pre_dispute");
    }

    #[test]
    fn test_unknown_status_decodes_and_fails_validation() {
        let mut value = serde_json::to_value(dispute()).unwrap();
        value["dispute_status"] = json!("dispute_escalated");
        let dispute: Dispute = serde_json::from_value(value).unwrap();

        let status = dispute.dispute_status().unwrap();
        assert!(!status.is_known());
        assert_eq!(status.raw(), "dispute_escalated");

        let err = dispute.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(err.path(), "dispute_status");
    }

    #[test]
    fn test_status_update_keeps_other_keys() {
        let mut value = serde_json::to_value(dispute()).unwrap();
        value["reason"] = json!("fraudulent");
        let mut dispute: Dispute = serde_json::from_value(value).unwrap();

        dispute.set_dispute_status(DisputeStatus::DisputeChallenged);
        dispute.set_dispute_stage(DisputeStage::PreArbitration);
        let out = serde_json::to_value(&dispute).unwrap();
        assert_eq!(out["reason"], "fraudulent");
        assert_eq!(out["dispute_status"], "dispute_challenged");
        assert_eq!(out["dispute_stage"], "pre_arbitration");
    }

    #[test]
    fn test_remarks_null_survives_round_trip() {
        let dispute = dispute().with_remarks(Nullable::Null);
        let text = serde_json::to_string(&dispute).unwrap();
        assert!(text.ends_with(r#""remarks":null}"#));
        let back: Dispute = serde_json::from_str(&text).unwrap();
        assert_eq!(back.remarks().unwrap(), Nullable::Null);
        assert_eq!(back, dispute);
    }
}
