//! HTTP handlers for loyalty endpoints.

use axum::extract::State;
use axum::response::{IntoResponse, Json};

use crate::adapters::http::envelope::DataEnvelope;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;

/// GET /api/loyalty/points/summary - the caller's point balances.
pub async fn points_summary(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.loyalty.points_summary(&user.user_id).await?;
    Ok(Json(DataEnvelope::new(summary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{test_state, StubLoyaltyReader};
    use crate::domain::foundation::{AuthenticatedUser, UserId};
    use crate::ports::PointsSummary;
    use std::sync::Arc;

    #[tokio::test]
    async fn returns_summary_for_authenticated_user() {
        let state = AppState {
            loyalty: Arc::new(StubLoyaltyReader {
                summary: PointsSummary {
                    total: 150,
                    pending: 20,
                    available: 100,
                    expiring: 10,
                },
            }),
            ..test_state()
        };
        let user = AuthenticatedUser::new(UserId::new());

        let result = points_summary(State(state), RequireAuth(user)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn user_with_no_activity_gets_zero_summary() {
        let state = test_state();
        let user = AuthenticatedUser::new(UserId::new());

        let result = points_summary(State(state), RequireAuth(user)).await;
        assert!(result.is_ok());
    }
}
