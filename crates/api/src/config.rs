/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
        }
    }
}

/// Appwrite credentials loaded from environment variables.
///
/// Read once at startup; the client built from these is passed into the
/// handlers through [`AppState`](crate::state::AppState) rather than
/// re-read per request.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    /// Base API URL (default: Appwrite's cloud endpoint).
    pub endpoint: String,
    /// Project identifier.
    pub project_id: String,
    /// Server API key. Needs the `messages.write` scope.
    pub api_key: String,
}

/// Appwrite's default cloud endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

impl AppwriteConfig {
    /// Load Appwrite credentials from environment variables.
    ///
    /// `APPWRITE_ENDPOINT` defaults to [`DEFAULT_ENDPOINT`];
    /// `APPWRITE_FUNCTION_PROJECT_ID` and `APPWRITE_API_KEY` are required
    /// and missing values abort startup, which is the desired behaviour --
    /// we want misconfiguration to fail fast.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("APPWRITE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());

        let project_id = std::env::var("APPWRITE_FUNCTION_PROJECT_ID")
            .expect("APPWRITE_FUNCTION_PROJECT_ID must be set");

        let api_key = std::env::var("APPWRITE_API_KEY").expect("APPWRITE_API_KEY must be set");

        Self {
            endpoint,
            project_id,
            api_key,
        }
    }
}
