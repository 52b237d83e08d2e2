//! Enum value tables generated from the API schema.

crate::string_enum! {
    /// Webhook event types.
    pub enum EventType {
        /// A payment completed.
        PaymentSucceeded = "payment.succeeded",
        /// A payment attempt failed.
        PaymentFailed = "payment.failed",
        /// A payment is awaiting confirmation.
        PaymentProcessing = "payment.processing",
        /// A payment was cancelled before completion.
        PaymentCancelled = "payment.cancelled",
        /// A refund completed.
        RefundSucceeded = "refund.succeeded",
        /// A refund failed.
        RefundFailed = "refund.failed",
        /// A dispute was opened.
        DisputeOpened = "dispute.opened",
        /// A dispute expired without a response.
        DisputeExpired = "dispute.expired",
        /// A dispute was accepted by the merchant.
        DisputeAccepted = "dispute.accepted",
        /// A dispute was cancelled by the customer.
        DisputeCancelled = "dispute.cancelled",
        /// A dispute was challenged with evidence.
        DisputeChallenged = "dispute.challenged",
        /// A dispute was decided for the merchant.
        DisputeWon = "dispute.won",
        /// A dispute was decided for the customer.
        DisputeLost = "dispute.lost",
        /// A subscription became active.
        SubscriptionActive = "subscription.active",
        /// A subscription renewed.
        SubscriptionRenewed = "subscription.renewed",
        /// A subscription is on hold after a failed renewal.
        SubscriptionOnHold = "subscription.on_hold",
        /// A subscription was cancelled.
        SubscriptionCancelled = "subscription.cancelled",
        /// A subscription failed to start.
        SubscriptionFailed = "subscription.failed",
        /// A subscription reached its end date.
        SubscriptionExpired = "subscription.expired",
        /// A subscription moved to another plan.
        SubscriptionPlanChanged = "subscription.plan_changed",
        /// A license key was issued.
        LicenseKeyCreated = "license_key.created",
    }
}

impl EventType {
    /// Returns `true` for `dispute.*` events.
    #[must_use]
    pub const fn is_dispute(&self) -> bool {
        matches!(
            self,
            Self::DisputeOpened
                | Self::DisputeExpired
                | Self::DisputeAccepted
                | Self::DisputeCancelled
                | Self::DisputeChallenged
                | Self::DisputeWon
                | Self::DisputeLost
        )
    }

    /// Returns `true` for `subscription.*` events.
    #[must_use]
    pub const fn is_subscription(&self) -> bool {
        matches!(
            self,
            Self::SubscriptionActive
                | Self::SubscriptionRenewed
                | Self::SubscriptionOnHold
                | Self::SubscriptionCancelled
                | Self::SubscriptionFailed
                | Self::SubscriptionExpired
                | Self::SubscriptionPlanChanged
        )
    }
}

crate::string_enum! {
    /// Lifecycle status of a dispute.
    pub enum DisputeStatus {
        /// Opened by the customer's bank.
        DisputeOpened = "dispute_opened",
        /// Response window elapsed.
        DisputeExpired = "dispute_expired",
        /// Accepted by the merchant.
        DisputeAccepted = "dispute_accepted",
        /// Withdrawn.
        DisputeCancelled = "dispute_cancelled",
        /// Evidence submitted.
        DisputeChallenged = "dispute_challenged",
        /// Decided for the merchant.
        DisputeWon = "dispute_won",
        /// Decided for the customer.
        DisputeLost = "dispute_lost",
    }
}

crate::string_enum! {
    /// Stage of the card-network dispute process.
    pub enum DisputeStage {
        /// Inquiry before a formal dispute.
        PreDispute = "pre_dispute",
        /// Formal dispute.
        Dispute = "dispute",
        /// Escalated to arbitration.
        PreArbitration = "pre_arbitration",
    }
}

crate::string_enum! {
    /// Status of a subscription.
    pub enum SubscriptionStatus {
        /// Created, awaiting the first payment.
        Pending = "pending",
        /// Billing normally.
        Active = "active",
        /// Paused after a failed renewal.
        OnHold = "on_hold",
        /// Cancelled.
        Cancelled = "cancelled",
        /// First payment failed.
        Failed = "failed",
        /// Ended.
        Expired = "expired",
    }
}

crate::string_enum! {
    /// ISO 4217 currency codes accepted by the API.
    pub enum Currency {
        /// Australian dollar.
        Aud = "AUD",
        /// Brazilian real.
        Brl = "BRL",
        /// Canadian dollar.
        Cad = "CAD",
        /// Euro.
        Eur = "EUR",
        /// Pound sterling.
        Gbp = "GBP",
        /// Indian rupee.
        Inr = "INR",
        /// Japanese yen.
        Jpy = "JPY",
        /// Mexican peso.
        Mxn = "MXN",
        /// Singapore dollar.
        Sgd = "SGD",
        /// United States dollar.
        Usd = "USD",
    }
}

crate::string_enum! {
    /// Billing interval unit.
    pub enum TimeInterval {
        /// Daily.
        Day = "Day",
        /// Weekly.
        Week = "Week",
        /// Monthly.
        Month = "Month",
        /// Yearly.
        Year = "Year",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KnownVariant;

    #[test]
    fn test_wire_values_are_unique_and_resolve_back() {
        for variant in EventType::ALL {
            assert_eq!(EventType::from_raw(&variant.to_raw()), Some(*variant));
        }
        let mut raws: Vec<_> = EventType::ALL.iter().map(EventType::as_str).collect();
        raws.sort_unstable();
        raws.dedup();
        assert_eq!(raws.len(), EventType::ALL.len());
    }

    #[test]
    fn test_event_families() {
        assert!(EventType::DisputeWon.is_dispute());
        assert!(!EventType::DisputeWon.is_subscription());
        assert!(EventType::SubscriptionOnHold.is_subscription());
        assert!(!EventType::PaymentSucceeded.is_dispute());
    }

    #[test]
    fn test_symbolic_name_is_not_a_wire_value() {
        assert_eq!(Currency::from_raw(&"Usd".to_owned()), None);
        assert_eq!(TimeInterval::from_raw(&"month".to_owned()), None);
        assert_eq!(TimeInterval::Month.to_string(), "Month");
    }
}
