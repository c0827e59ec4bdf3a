//! Catalog store trait definitions.

use async_trait::async_trait;
use entities::{NewStore, NewUser, Rating, Store, User, UserRecord};

use crate::CatalogResult;

/// Trait for catalog storage operations.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Appends a new user, minting the next identifier.
    ///
    /// Fails with `AlreadyExists` when the email is already in the
    /// roster, leaving it unchanged.
    async fn create_user(&self, new_user: NewUser) -> CatalogResult<User>;

    /// Gets a user by ID, credential stripped.
    async fn get_user(&self, id: &str) -> CatalogResult<Option<User>>;

    /// Gets a full roster record by email.
    async fn get_user_by_email(&self, email: &str) -> CatalogResult<Option<UserRecord>>;

    /// Lists all users, credentials stripped.
    async fn list_users(&self) -> CatalogResult<Vec<User>>;

    // =========================================================================
    // Store operations
    // =========================================================================

    /// Creates a new store, minting the next identifier.
    async fn create_store(&self, new_store: NewStore) -> CatalogResult<Store>;

    /// Gets a store by ID.
    async fn get_store(&self, id: &str) -> CatalogResult<Option<Store>>;

    /// Lists all stores.
    async fn list_stores(&self) -> CatalogResult<Vec<Store>>;

    // =========================================================================
    // Rating operations
    // =========================================================================

    /// Inserts or overwrites the rating for `(user_id, store_id)` and
    /// recomputes the store's aggregate mean and count from the rating
    /// set.
    ///
    /// Fails with `NotFound` when the store is not in the catalog.
    async fn upsert_rating(&self, user_id: &str, store_id: &str, value: u8)
        -> CatalogResult<Rating>;

    /// Gets the rating a user gave a store, if any.
    async fn get_rating(&self, user_id: &str, store_id: &str) -> CatalogResult<Option<Rating>>;

    /// Lists ratings for one store, newest first.
    async fn list_ratings_for_store(&self, store_id: &str) -> CatalogResult<Vec<Rating>>;

    /// Lists ratings submitted by one user, newest first.
    async fn list_ratings_by_user(&self, user_id: &str) -> CatalogResult<Vec<Rating>>;

    /// Lists all ratings, newest first.
    async fn list_ratings(&self) -> CatalogResult<Vec<Rating>>;
}
