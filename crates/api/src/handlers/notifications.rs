//! Handler for the push notification relay endpoint.
//!
//! Consumes the raw request body so empty and malformed payloads can be
//! answered with the uniform envelope instead of axum's built-in
//! rejection responses.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use pushrelay_appwrite::messaging::{CreatePush, PushTarget};

use crate::error::{NotifyError, NotifyResult};
use crate::response::StatusResponse;
use crate::state::AppState;

/// Click action delivered with every notification, consumed by the
/// Flutter client to decide what to open on tap.
pub const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

/// `type` value selecting topic delivery.
pub const TYPE_BROADCAST: &str = "broadcast";

/// Inbound notification request. Untrusted; all fields default to empty
/// so shape validation happens in [`Route::from_request`] rather than at
/// decode time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    /// `"broadcast"` routes to a topic; anything else routes to a user.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Target user, required unless `type == "broadcast"`.
    #[serde(default)]
    pub user_id: String,
    /// Target topic, required when `type == "broadcast"`.
    #[serde(default)]
    pub topic: String,
    /// Notification title.
    #[serde(default)]
    pub title: String,
    /// Notification body text.
    #[serde(default)]
    pub message: String,
    /// Optional order reference, echoed in the auxiliary data payload.
    #[serde(default)]
    pub order_id: String,
}

/// Routing decision for one notification request.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Deliver to every subscriber of a topic.
    Broadcast { topic: String },
    /// Deliver to a single user.
    Targeted { user_id: String },
}

impl Route {
    /// Validating parse of the routing fields.
    ///
    /// Any `type` other than `"broadcast"` selects targeted delivery
    /// (callers send `"order_update"`, but other values are accepted and
    /// routed the same way). The field required by the chosen branch,
    /// plus `title` and `message`, must be non-empty.
    pub fn from_request(request: &NotificationRequest) -> NotifyResult<Self> {
        if request.title.is_empty() {
            return Err(NotifyError::MissingField("title"));
        }
        if request.message.is_empty() {
            return Err(NotifyError::MissingField("message"));
        }

        if request.kind == TYPE_BROADCAST {
            if request.topic.is_empty() {
                return Err(NotifyError::MissingField("topic"));
            }
            Ok(Route::Broadcast {
                topic: request.topic.clone(),
            })
        } else {
            if request.user_id.is_empty() {
                return Err(NotifyError::MissingField("userId"));
            }
            Ok(Route::Targeted {
                user_id: request.user_id.clone(),
            })
        }
    }
}

/// POST /api/v1/notifications/push
///
/// Parse, validate, route, and forward one notification request to the
/// push provider. Always answers HTTP 200 with the
/// `{ "status", "message" }` envelope; logical failure is carried in
/// `status`. Exactly one delivery call per invocation, no retries.
pub async fn send_push(
    State(state): State<AppState>,
    body: Bytes,
) -> NotifyResult<Json<StatusResponse>> {
    if body.is_empty() {
        return Err(NotifyError::EmptyBody);
    }

    let request: NotificationRequest = serde_json::from_slice(&body).map_err(|err| {
        // The decode detail stays server-side; callers get a generic message.
        tracing::error!(error = %err, "Failed to parse notification payload");
        NotifyError::MalformedJson
    })?;

    let route = Route::from_request(&request)?;

    let data = serde_json::json!({
        "click_action": CLICK_ACTION,
        "order_id": request.order_id,
        "type": request.kind,
    });

    let target = match &route {
        Route::Broadcast { topic } => PushTarget::Topics(vec![topic.clone()]),
        Route::Targeted { user_id } => PushTarget::Users(vec![user_id.clone()]),
    };

    let push = CreatePush {
        title: request.title.clone(),
        body: request.message.clone(),
        target,
        data,
    };

    let message = state.push.create_push(&push).await.map_err(|err| {
        tracing::error!(error = %err, "Push delivery failed");
        NotifyError::Delivery(err.provider_message())
    })?;

    let confirmation = match &route {
        Route::Broadcast { topic } => {
            tracing::info!(topic = %topic, message_id = %message.id, "Broadcast sent");
            format!("Notification sent to topic {topic}")
        }
        Route::Targeted { user_id } => {
            tracing::info!(user_id = %user_id, message_id = %message.id, "Order update sent");
            format!("Notification sent to user {user_id}")
        }
    };

    Ok(Json(StatusResponse::success(confirmation)))
}
