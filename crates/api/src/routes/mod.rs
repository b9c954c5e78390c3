pub mod health;
pub mod notifications;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notifications/push    relay a push notification (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(notifications::router())
}
