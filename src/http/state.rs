//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::resolver::LocationResolver;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// City and client address lookup
    pub resolver: Arc<dyn LocationResolver>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(resolver: Arc<dyn LocationResolver>, config: ServerConfig) -> Self {
        Self {
            resolver,
            config: Arc::new(config),
        }
    }
}
