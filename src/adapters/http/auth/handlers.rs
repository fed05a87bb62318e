//! HTTP handlers for auth endpoints.

use axum::extract::State;
use axum::response::{IntoResponse, Json};

use crate::adapters::http::envelope::MessageEnvelope;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::application::handlers::auth::LogoutCommand;

/// POST /api/auth/logout - destroy every credential the caller holds.
pub async fn logout(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.logout_handler();
    handler
        .handle(LogoutCommand {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(MessageEnvelope::new("Logged out successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{test_state, FailingSessionStore};
    use crate::domain::foundation::AuthenticatedUser;
    use std::sync::Arc;

    #[tokio::test]
    async fn logout_returns_success_message() {
        let state = test_state();
        let user = AuthenticatedUser::new(crate::domain::foundation::UserId::new());

        let result = logout(State(state), RequireAuth(user)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_error() {
        let state = AppState {
            session_store: Arc::new(FailingSessionStore),
            ..test_state()
        };
        let user = AuthenticatedUser::new(crate::domain::foundation::UserId::new());

        let result = logout(State(state), RequireAuth(user)).await;
        assert!(result.is_err());
    }
}
