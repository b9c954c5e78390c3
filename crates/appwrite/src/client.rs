//! HTTP client handle for a single Appwrite project.
//!
//! [`AppwriteClient`] holds the endpoint and credentials needed to issue
//! authenticated requests against one Appwrite project. Service wrappers
//! (e.g. [`Messaging`](crate::messaging::Messaging)) build their requests
//! through [`AppwriteClient::post`].

/// Configuration handle for an Appwrite project.
///
/// Cheap to clone; the inner [`reqwest::Client`] is reference-counted and
/// shares its connection pool across clones.
#[derive(Clone)]
pub struct AppwriteClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    api_key: String,
}

impl AppwriteClient {
    /// Create a new client for an Appwrite project.
    ///
    /// * `endpoint`   - Base API URL, e.g. `https://cloud.appwrite.io/v1`.
    /// * `project_id` - Appwrite project identifier.
    /// * `api_key`    - Server API key. Must carry the `messages.write`
    ///   scope for push delivery to succeed.
    pub fn new(endpoint: String, project_id: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            project_id,
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple services).
    pub fn with_client(
        http: reqwest::Client,
        endpoint: String,
        project_id: String,
        api_key: String,
    ) -> Self {
        Self {
            http,
            endpoint,
            project_id,
            api_key,
        }
    }

    /// Base API URL (e.g. `https://cloud.appwrite.io/v1`).
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Appwrite project identifier.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Build a `POST` request for an API path, with the project and key
    /// headers already attached.
    ///
    /// * `path` - API path relative to the endpoint, e.g.
    ///   `/messaging/messages/push`.
    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .post(format!("{}{}", self.endpoint, path))
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
    }
}

impl std::fmt::Debug for AppwriteClient {
    // The API key never appears in debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppwriteClient")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}
