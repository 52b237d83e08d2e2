//! Generated API models.
//!
//! Each model is a `struct { raw: RawModel }` with typed accessors over the
//! backing map; see [`crate::model`] for the field categories.

mod dispute;
mod enums;
mod event;
mod page;
mod subscription;
mod webhook;

pub use dispute::Dispute;
pub use enums::{Currency, DisputeStage, DisputeStatus, EventType, SubscriptionStatus, TimeInterval};
pub use event::{EventData, WebhookPayload};
pub use page::{CursorPage, NumberedPage};
pub use subscription::{CustomerLimited, Subscription, SubscriptionInit};
pub use webhook::{WebhookCreateParams, WebhookDetails, WebhookUpdateParams};

#[cfg(test)]
mod tests {
    use super::*;

    const fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_models_are_send_sync() {
        assert_send_sync::<WebhookDetails>();
        assert_send_sync::<Dispute>();
        assert_send_sync::<Subscription>();
        assert_send_sync::<WebhookPayload>();
        assert_send_sync::<CursorPage<WebhookDetails>>();
        assert_send_sync::<NumberedPage<Dispute>>();
        assert_send_sync::<EventType>();
    }
}
