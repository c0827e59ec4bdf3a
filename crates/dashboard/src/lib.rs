//! RateHub application shell.
//!
//! This crate wires the catalogs, the session manager, and the view
//! composition together for a UI layer to embed. It owns configuration,
//! application state, the role-scoped dashboard composer, the catalog
//! list views, the rating submission flow, and the admin catalog
//! management operations.

pub mod admin;
pub mod composer;
pub mod config;
pub mod error;
pub mod query;
pub mod rating;
pub mod seed;
pub mod state;

pub use composer::{select_dashboard, AdminView, Dashboard, RatedStore, StoreOwnerView, UserView};
pub use config::Config;
pub use error::{AppError, AppResult, RatingError};
pub use query::{
    query_rating_rows, query_stores, query_users, rating_rows, RatingRow, RatingSortField,
    StoreSortField, UserSortField,
};
pub use rating::{RatingFlow, SubmitState};
pub use state::{create_state, AppState, SharedState};

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
