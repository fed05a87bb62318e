//! Subscription domain errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Errors from subscription operations.
#[derive(Debug, Clone, Error)]
pub enum SubscriptionError {
    /// User has no subscription that can be cancelled.
    #[error("No active subscription found")]
    NoActiveSubscription(UserId),

    /// Cancellation is already scheduled for the end of the period.
    #[error("Subscription is already scheduled for cancellation")]
    AlreadyPendingCancellation(UserId),

    /// User has no billing customer record, so no portal can be created.
    #[error("No billing customer associated with this account")]
    NoBillingCustomer(UserId),

    /// The billing provider rejected or failed the operation.
    #[error("Payment provider error: {0}")]
    PaymentFailed(String),

    /// Database or other infrastructure failure.
    #[error("{0}")]
    Infrastructure(DomainError),
}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        SubscriptionError::Infrastructure(err)
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        match err {
            SubscriptionError::NoActiveSubscription(user_id) => {
                DomainError::new(ErrorCode::SubscriptionNotFound, "No active subscription found")
                    .with_detail("user_id", user_id.to_string())
            }
            SubscriptionError::AlreadyPendingCancellation(user_id) => DomainError::new(
                ErrorCode::ValidationFailed,
                "Subscription is already scheduled for cancellation",
            )
            .with_detail("user_id", user_id.to_string()),
            SubscriptionError::NoBillingCustomer(user_id) => DomainError::new(
                ErrorCode::ValidationFailed,
                "No billing customer associated with this account",
            )
            .with_detail("user_id", user_id.to_string()),
            SubscriptionError::PaymentFailed(msg) => {
                DomainError::new(ErrorCode::ExternalServiceError, msg)
            }
            SubscriptionError::Infrastructure(err) => err,
        }
    }
}
