//! API error type mapping domain failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError};
use crate::domain::subscription::SubscriptionError;
use crate::ports::RecommendationError;

use super::envelope::ErrorEnvelope;

/// Errors surfaced at the HTTP boundary.
///
/// Internal failures are logged where they occur; the response body always
/// carries a generic message so nothing about the infrastructure leaks.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid credentials.
    #[error("Authentication required")]
    Unauthorized,

    /// The request cannot be satisfied as stated.
    #[error("{0}")]
    BadRequest(String),

    /// The capability behind this endpoint is not implemented.
    #[error("{0}")]
    NotImplemented(String),

    /// Downstream failure; details stay in the logs.
    #[error("An unexpected error occurred")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope::new(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        tracing::error!(code = %err.code, error = %err, "Request failed");
        ApiError::Internal
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken => ApiError::Unauthorized,
            AuthError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "Session validation unavailable");
                ApiError::Internal
            }
        }
    }
}

impl From<SubscriptionError> for ApiError {
    fn from(err: SubscriptionError) -> Self {
        match err {
            SubscriptionError::NoActiveSubscription(_)
            | SubscriptionError::AlreadyPendingCancellation(_)
            | SubscriptionError::NoBillingCustomer(_) => ApiError::BadRequest(err.to_string()),
            SubscriptionError::PaymentFailed(msg) => {
                tracing::error!(error = %msg, "Billing provider call failed");
                ApiError::Internal
            }
            SubscriptionError::Infrastructure(e) => e.into(),
        }
    }
}

impl From<RecommendationError> for ApiError {
    fn from(err: RecommendationError) -> Self {
        match err {
            RecommendationError::NotImplemented => {
                ApiError::NotImplemented("Recommendation engine is not implemented".to_string())
            }
            RecommendationError::Unavailable(msg) => {
                tracing::error!(error = %msg, "Recommendation engine unavailable");
                ApiError::Internal
            }
        }
    }
}
