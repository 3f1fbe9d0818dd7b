//! Time-on-site tracking for signed-in users.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::server::{
    middleware::auth::request_token, service::activity::ActivityService, state::AppState,
};

/// Records every request carrying a valid token.
///
/// Tracking failures are logged and never fail the request.
pub async fn track_activity(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let user_id = request_token(request.headers())
        .ok()
        .and_then(|token| state.jwt.verify(token).ok())
        .map(|claims| claims.user_id);

    if let Some(user_id) = user_id {
        let url = request.uri().to_string();

        if let Err(err) = ActivityService::new(&state.db)
            .record(user_id, &url, Utc::now())
            .await
        {
            tracing::warn!("Failed to record activity of user {}: {}", user_id, err);
        }
    }

    next.run(request).await
}
