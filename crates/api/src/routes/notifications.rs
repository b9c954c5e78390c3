use axum::{routing::post, Router};

use crate::handlers;
use crate::state::AppState;

/// Mount notification routes under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/notifications/push",
        post(handlers::notifications::send_push),
    )
}
