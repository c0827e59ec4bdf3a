//! Application state.

use std::sync::Arc;

use catalog_store::{CatalogStore, MemoryCatalogStore};
use session::{FileSessionStore, MemorySessionStore, SessionManager, SessionStore};

use crate::composer::{select_dashboard, Dashboard};
use crate::config::Config;
use crate::error::AppResult;
use crate::rating::RatingFlow;
use crate::seed;

/// Shared application state handed to the UI layer.
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Entity catalogs.
    pub catalog: Arc<dyn CatalogStore>,
    /// Session manager.
    pub sessions: SessionManager,
}

/// Type alias for shared state.
pub type SharedState = Arc<AppState>;

/// Creates the application state from configuration.
pub fn create_state(config: Config) -> SharedState {
    let catalog: Arc<dyn CatalogStore> = if config.seed_demo_data {
        Arc::new(seed::demo_catalog())
    } else {
        Arc::new(MemoryCatalogStore::new())
    };

    let persist: Arc<dyn SessionStore> = match &config.session_file {
        Some(path) => Arc::new(FileSessionStore::new(path)),
        None => Arc::new(MemorySessionStore::new()),
    };

    let sessions =
        SessionManager::new(catalog.clone(), persist).with_latency(config.auth_latency());

    Arc::new(AppState {
        config,
        catalog,
        sessions,
    })
}

impl AppState {
    /// Composes the dashboard for the current session.
    pub async fn dashboard(&self) -> AppResult<Dashboard> {
        let session = self.sessions.state().await;
        let users = self.catalog.list_users().await?;
        let stores = self.catalog.list_stores().await?;
        let ratings = self.catalog.list_ratings().await?;
        Ok(select_dashboard(&session, &users, &stores, &ratings))
    }

    /// Creates a rating flow for one store-detail view.
    pub fn rating_flow(&self) -> RatingFlow {
        RatingFlow::new(self.catalog.clone()).with_latency(self.config.rating_latency())
    }
}
