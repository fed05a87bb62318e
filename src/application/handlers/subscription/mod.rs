//! Subscription application handlers.

mod billing_portal;
mod cancel_subscription;
mod get_entitlements;

pub use billing_portal::{BillingPortalCommand, BillingPortalHandler};
pub use cancel_subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancellationOutcome,
};
pub use get_entitlements::{GetEntitlementsHandler, GetEntitlementsQuery};
