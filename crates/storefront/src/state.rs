//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::middleware::session::VisitorSessionStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Marketplace data is per visitor and lives in
/// the session, so the shared state only carries configuration and the
/// session store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    sessions: VisitorSessionStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                sessions: VisitorSessionStore::default(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Store holding every visitor session.
    #[must_use]
    pub fn session_store(&self) -> &VisitorSessionStore {
        &self.inner.sessions
    }
}
