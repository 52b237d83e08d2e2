//! Recurring subscriptions and the customer summary they embed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{FieldKind, RawModel};
use crate::models::{Currency, SubscriptionStatus, TimeInterval};
use crate::{ApiEnum, Error, Nullable, Validate};

/// The customer summary embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerLimited {
    raw: RawModel,
}

crate::impl_model!(CustomerLimited, "CustomerLimited", ["customer_id", "email", "name"]);

impl CustomerLimited {
    /// Creates a customer summary.
    #[must_use]
    pub fn new(
        customer_id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let mut raw = RawModel::new();
        raw.set("customer_id", &customer_id.into());
        raw.set("email", &email.into());
        raw.set("name", &name.into());
        Self { raw }
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn customer_id(&self) -> Result<String, Error> {
        self.raw.get("customer_id")
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn email(&self) -> Result<String, Error> {
        self.raw.get("email")
    }

    /// Sets the email address.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.raw.set("email", &value.into());
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn name(&self) -> Result<String, Error> {
        self.raw.get("name")
    }

    /// Sets the display name.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.raw.set("name", &value.into());
    }
}

impl Validate for CustomerLimited {
    fn validate(&self) -> Result<(), Error> {
        self.raw
            .validate_field::<String>("customer_id", FieldKind::Required)?;
        self.raw.validate_field::<String>("email", FieldKind::Required)?;
        self.raw.validate_field::<String>("name", FieldKind::Required)?;
        Ok(())
    }
}

/// A recurring subscription to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subscription {
    raw: RawModel,
}

crate::impl_model!(
    Subscription,
    "Subscription",
    [
        "subscription_id",
        "product_id",
        "customer",
        "status",
        "quantity",
        "recurring_pre_tax_amount",
        "currency",
        "payment_frequency_interval",
        "next_billing_date",
        "created_at",
        "cancelled_at",
        "metadata",
    ],
    nested = drop_unknown_customer
);

fn drop_unknown_customer(raw: &mut RawModel) -> usize {
    raw.drop_unknown_in::<CustomerLimited>("customer")
}

/// Required fields of a [`Subscription`].
#[derive(Debug, Clone)]
pub struct SubscriptionInit {
    /// Subscription identifier.
    pub subscription_id: String,
    /// Subscribed product.
    pub product_id: String,
    /// Subscribing customer.
    pub customer: CustomerLimited,
    /// Lifecycle status.
    pub status: ApiEnum<SubscriptionStatus>,
    /// Number of units.
    pub quantity: i64,
    /// Amount per period, in minor units, before tax.
    pub recurring_pre_tax_amount: i64,
    /// Billing currency.
    pub currency: ApiEnum<Currency>,
    /// Billing period unit.
    pub payment_frequency_interval: ApiEnum<TimeInterval>,
    /// Next charge date (RFC 3339).
    pub next_billing_date: String,
    /// Creation time (RFC 3339).
    pub created_at: String,
}

impl Subscription {
    /// Creates a subscription from its required fields.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(init: SubscriptionInit) -> Self {
        let mut raw = RawModel::new();
        raw.set("subscription_id", &init.subscription_id);
        raw.set("product_id", &init.product_id);
        raw.set("customer", &init.customer);
        raw.set("status", &init.status);
        raw.set("quantity", &init.quantity);
        raw.set("recurring_pre_tax_amount", &init.recurring_pre_tax_amount);
        raw.set("currency", &init.currency);
        raw.set("payment_frequency_interval", &init.payment_frequency_interval);
        raw.set("next_billing_date", &init.next_billing_date);
        raw.set("created_at", &init.created_at);
        Self { raw }
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn subscription_id(&self) -> Result<String, Error> {
        self.raw.get("subscription_id")
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn product_id(&self) -> Result<String, Error> {
        self.raw.get("product_id")
    }

    /// The subscribing customer. Unknown keys inside it are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not an object.
    pub fn customer(&self) -> Result<CustomerLimited, Error> {
        self.raw.get("customer")
    }

    /// Replaces the customer summary.
    pub fn set_customer(&mut self, value: &CustomerLimited) {
        self.raw.set("customer", value);
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn status(&self) -> Result<ApiEnum<SubscriptionStatus>, Error> {
        self.raw.get("status")
    }

    /// Sets the lifecycle status.
    pub fn set_status(&mut self, value: impl Into<ApiEnum<SubscriptionStatus>>) {
        self.raw.set("status", &value.into());
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not an integer.
    pub fn quantity(&self) -> Result<i64, Error> {
        self.raw.get("quantity")
    }

    /// Sets the number of units.
    pub fn set_quantity(&mut self, value: i64) {
        self.raw.set("quantity", &value);
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not an integer.
    pub fn recurring_pre_tax_amount(&self) -> Result<i64, Error> {
        self.raw.get("recurring_pre_tax_amount")
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
    pub fn payment_frequency_interval(&self) -> Result<ApiEnum<TimeInterval>, Error> {
        self.raw.get("payment_frequency_interval")
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn next_billing_date(&self) -> Result<String, Error> {
        self.raw.get("next_billing_date")
    }

    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string.
    pub fn created_at(&self) -> Result<String, Error> {
        self.raw.get("created_at")
    }

    /// Cancellation time; `null` while the subscription is live.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is present but not a string.
    pub fn cancelled_at(&self) -> Result<Nullable<String>, Error> {
        self.raw.get_nullable("cancelled_at")
    }

    /// Sets the cancellation time, an explicit `null`, or removes the key.
    pub fn set_cancelled_at(&mut self, value: impl Into<Nullable<String>>) {
        let value: Nullable<String> = value.into();
        self.raw.set_nullable("cancelled_at", value.as_ref());
    }

    /// Builder form of [`Self::set_cancelled_at`].
    #[must_use]
    pub fn with_cancelled_at(mut self, value: impl Into<Nullable<String>>) -> Self {
        self.set_cancelled_at(value);
        self
    }

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
}

impl Validate for Subscription {
    fn validate(&self) -> Result<(), Error> {
        self.raw
            .validate_field::<String>("subscription_id", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("product_id", FieldKind::Required)?;
        self.raw
            .validate_field::<CustomerLimited>("customer", FieldKind::Required)?;
        self.raw
            .validate_field::<ApiEnum<SubscriptionStatus>>("status", FieldKind::Required)?;
        self.raw.validate_field::<i64>("quantity", FieldKind::Required)?;
        self.raw
            .validate_field::<i64>("recurring_pre_tax_amount", FieldKind::Required)?;
        self.raw
            .validate_field::<ApiEnum<Currency>>("currency", FieldKind::Required)?;
        self.raw.validate_field::<ApiEnum<TimeInterval>>(
            "payment_frequency_interval",
            FieldKind::Required,
        )?;
        self.raw
            .validate_field::<String>("next_billing_date", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("created_at", FieldKind::Required)?;
        self.raw
            .validate_field::<String>("cancelled_at", FieldKind::Nullable)?;
        self.raw
            .validate_field::<BTreeMap<String, String>>("metadata", FieldKind::Optional)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::{ErrorKind, Model};

    fn subscription() -> Subscription {
        Subscription::new(SubscriptionInit {
            subscription_id: "sub_1".to_owned(),
            product_id: "prod_1".to_owned(),
            customer: CustomerLimited::new("cus_1", "a@example.com", "Ada"),
            status: SubscriptionStatus::Active.into(),
            quantity: 1,
            recurring_pre_tax_amount: 1999,
            currency: Currency::Usd.into(),
            payment_frequency_interval: TimeInterval::Month.into(),
            next_billing_date: "2024-07-01T00:00:00Z".to_owned(),
            created_at: "2024-06-01T00:00:00Z".to_owned(),
        })
    }

    #[test]
    fn test_nested_model_roundtrip() {
        let subscription = subscription();
        assert!(subscription.validate().is_ok());
        let customer = subscription.customer().unwrap();
        assert_eq!(customer.email().unwrap(), "a@example.com");
        assert_eq!(subscription.payment_frequency_interval().unwrap(), TimeInterval::Month);
        assert_eq!(
            serde_json::to_value(&subscription).unwrap()["payment_frequency_interval"],
            "Month"
        );
    }

    #[test]
    fn test_nested_unknown_keys_preserved() {
        let mut value = serde_json::to_value(subscription()).unwrap();
        value["customer"]["phone"] = json!("+100");
        let subscription: Subscription = serde_json::from_value(value.clone()).unwrap();

        let customer = subscription.customer().unwrap();
        assert_eq!(customer.unknown_keys().collect::<Vec<_>>(), ["phone"]);
        assert_eq!(serde_json::to_value(&subscription).unwrap(), value);
    }

    #[test]
    fn test_nested_validation_reports_path() {
        let mut value = serde_json::to_value(subscription()).unwrap();
        value["customer"]
            .as_object_mut()
            .unwrap()
            .remove("email");
        let subscription: Subscription = serde_json::from_value(value).unwrap();

        let err = subscription.validate().unwrap_err();
        assert_eq!(err.path(), "customer.email");
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_unknown_status_is_retained() {
        let mut value = serde_json::to_value(subscription()).unwrap();
        value["status"] = Value::from("paused");
        let subscription: Subscription = serde_json::from_value(value).unwrap();
        assert_eq!(subscription.status().unwrap().known(), None);
        assert_eq!(subscription.validate().unwrap_err().path(), "status");
        assert_eq!(serde_json::to_value(&subscription).unwrap()["status"], "paused");
    }

    #[test]
    fn test_cancel_sets_timestamp_and_status() {
        let mut subscription = subscription().with_cancelled_at(Nullable::Null);
        assert!(subscription.raw().contains_key("cancelled_at"));

        subscription.set_status(SubscriptionStatus::Cancelled);
        subscription.set_cancelled_at("2024-06-15T00:00:00Z".to_owned());
        assert_eq!(subscription.status().unwrap(), SubscriptionStatus::Cancelled);
        assert_eq!(
            subscription.cancelled_at().unwrap().value().as_deref(),
            Some("2024-06-15T00:00:00Z")
        );
    }

    #[test]
    fn test_set_customer_and_quantity() {
        let mut subscription = subscription();
        let mut customer = CustomerLimited::new("cus_2", "b@example.com", "Bo");
        customer.set_name("Bo Jensen");
        customer.set_email("bo@example.com");
        subscription.set_customer(&customer);
        subscription.set_quantity(3);
        assert_eq!(subscription.customer().unwrap().customer_id().unwrap(), "cus_2");
        assert_eq!(subscription.customer().unwrap().name().unwrap(), "Bo Jensen");
        assert_eq!(subscription.quantity().unwrap(), 3);
        assert_eq!(subscription.recurring_pre_tax_amount().unwrap(), 1999);
    }
}
