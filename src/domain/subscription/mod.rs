//! Subscription domain: tiers, limits, and the subscription aggregate.

mod errors;
mod status;
mod subscription;
mod tier;
mod tier_limits;

pub use errors::SubscriptionError;
pub use status::SubscriptionStatus;
pub use subscription::Subscription;
pub use tier::SubscriptionTier;
pub use tier_limits::TierLimits;
