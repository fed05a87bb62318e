//! Stripe billing adapter.

mod provider;

pub use provider::{StripeConfig, StripeProvider};
