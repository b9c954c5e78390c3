use std::sync::Arc;

use crate::config::ServerConfig;
use crate::push::PushSender;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Push delivery client, constructed once at startup.
    pub push: Arc<dyn PushSender>,
}
