use std::sync::Arc;

use menugen_provider::MenuProvider;

use crate::config::ServerConfig;
use crate::sessions::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The provider is
/// held as a trait object so tests can inject a stub in place of the real
/// client.
#[derive(Clone)]
pub struct AppState {
    /// In-memory store of variant generation sessions.
    pub sessions: Arc<SessionStore>,
    /// AI capability client.
    pub provider: Arc<dyn MenuProvider>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
