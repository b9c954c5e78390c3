//! REST wrapper for the Appwrite Messaging push endpoint.
//!
//! [`Messaging::create_push`] sends a `POST /messaging/messages/push`
//! request using [`reqwest`], addressed to either a set of topics or a
//! set of users.

use serde::Deserialize;

use crate::client::AppwriteClient;

/// Sentinel message ID asking the server to generate a unique ID.
pub const MESSAGE_ID_UNIQUE: &str = "unique()";

/// Messaging service client for one Appwrite project.
#[derive(Debug, Clone)]
pub struct Messaging {
    client: AppwriteClient,
}

/// Recipient of a push message: topic subscribers or named users.
///
/// The wire format carries exactly one of `topics` / `users`; the enum
/// makes "both" and "neither" unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum PushTarget {
    /// Deliver to every subscriber of the named topics.
    Topics(Vec<String>),
    /// Deliver to the named user IDs.
    Users(Vec<String>),
}

/// Parameters for one push message.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePush {
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Recipient set.
    pub target: PushTarget,
    /// Auxiliary key/value payload delivered alongside the notification.
    pub data: serde_json::Value,
}

impl CreatePush {
    /// Build the JSON request body for `POST /messaging/messages/push`.
    ///
    /// The message ID is always [`MESSAGE_ID_UNIQUE`], so the server
    /// assigns a fresh ID per call.
    fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "messageId": MESSAGE_ID_UNIQUE,
            "title": self.title,
            "body": self.body,
            "data": self.data,
        });

        match &self.target {
            PushTarget::Topics(topics) => {
                body["topics"] = serde_json::json!(topics);
            }
            PushTarget::Users(users) => {
                body["users"] = serde_json::json!(users);
            }
        }

        body
    }
}

/// A created message, as returned by the Messaging API.
#[derive(Debug, Clone, Deserialize)]
pub struct PushMessage {
    /// Server-assigned message ID.
    #[serde(rename = "$id")]
    pub id: String,
}

/// Errors from the Messaging API layer.
#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Appwrite returned a non-2xx status code.
    #[error("Appwrite API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },
}

impl MessagingError {
    /// The provider-facing error text, without the status prefix.
    ///
    /// For [`MessagingError::Api`] this is the message Appwrite returned;
    /// for transport failures it is the reqwest error description.
    pub fn provider_message(&self) -> String {
        match self {
            MessagingError::Api { message, .. } => message.clone(),
            MessagingError::Request(err) => err.to_string(),
        }
    }
}

/// Shape of an Appwrite error response body.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl Messaging {
    /// Create a Messaging client on top of an [`AppwriteClient`].
    pub fn new(client: AppwriteClient) -> Self {
        Self { client }
    }

    /// Create and send a push message.
    ///
    /// Sends a single `POST /messaging/messages/push` request. No retries;
    /// the transport default is the only timeout.
    pub async fn create_push(&self, push: &CreatePush) -> Result<PushMessage, MessagingError> {
        tracing::debug!(
            endpoint = %self.client.endpoint(),
            project_id = %self.client.project_id(),
            "Creating push message"
        );

        let response = self
            .client
            .post("/messaging/messages/push")
            .json(&push.to_body())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!(status = status.as_u16(), "Push request rejected by Appwrite");
            return Err(parse_error_body(status.as_u16(), &body));
        }

        let message = response.json::<PushMessage>().await?;
        tracing::debug!(message_id = %message.id, "Push message created");

        Ok(message)
    }
}

/// Extract the error message from a non-2xx response body.
///
/// Appwrite errors are JSON objects with a `message` field; anything else
/// (HTML error pages, proxies) is surfaced as raw text.
fn parse_error_body(status: u16, body: &str) -> MessagingError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.to_string(),
    };
    MessagingError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn push_to(target: PushTarget) -> CreatePush {
        CreatePush {
            title: "Sale".to_string(),
            body: "50% off".to_string(),
            target,
            data: serde_json::json!({ "order_id": "o456" }),
        }
    }

    #[test]
    fn topic_push_body_carries_topics_only() {
        let push = push_to(PushTarget::Topics(vec!["all_users".to_string()]));
        let body = push.to_body();

        assert_eq!(body["messageId"], MESSAGE_ID_UNIQUE);
        assert_eq!(body["title"], "Sale");
        assert_eq!(body["body"], "50% off");
        assert_eq!(body["topics"], serde_json::json!(["all_users"]));
        assert!(body.get("users").is_none());
    }

    #[test]
    fn user_push_body_carries_users_only() {
        let push = push_to(PushTarget::Users(vec!["u123".to_string()]));
        let body = push.to_body();

        assert_eq!(body["users"], serde_json::json!(["u123"]));
        assert!(body.get("topics").is_none());
    }

    #[test]
    fn push_body_passes_data_through() {
        let push = push_to(PushTarget::Users(vec!["u123".to_string()]));
        let body = push.to_body();

        assert_eq!(body["data"]["order_id"], "o456");
    }

    #[test]
    fn error_body_message_is_extracted() {
        let err = parse_error_body(401, r#"{"message":"API key is invalid","code":401}"#);

        assert_matches!(
            err,
            MessagingError::Api { status: 401, ref message } if message == "API key is invalid"
        );
        assert_eq!(err.provider_message(), "API key is invalid");
    }

    #[test]
    fn non_json_error_body_is_surfaced_raw() {
        let err = parse_error_body(502, "Bad Gateway");

        assert_matches!(
            err,
            MessagingError::Api { status: 502, ref message } if message == "Bad Gateway"
        );
    }
}
