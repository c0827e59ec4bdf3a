//! In-memory catalog store.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::Utc;
use entities::{NewStore, NewUser, Rating, Store, User, UserRecord};
use tokio::sync::RwLock;

use crate::{CatalogError, CatalogResult, CatalogStore};

/// In-memory catalog store.
///
/// Ratings are keyed by `(user_id, store_id)`, which enforces the
/// one-rating-per-pair invariant structurally.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    users: RwLock<HashMap<String, UserRecord>>,
    stores: RwLock<HashMap<String, Store>>,
    ratings: RwLock<HashMap<(String, String), Rating>>,
    next_user_id: AtomicU64,
    next_store_id: AtomicU64,
}

impl MemoryCatalogStore {
    /// Creates a new, empty catalog store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            stores: RwLock::new(HashMap::new()),
            ratings: RwLock::new(HashMap::new()),
            next_user_id: AtomicU64::new(1),
            next_store_id: AtomicU64::new(1),
        }
    }

    /// Seeds the roster, advancing the id counter past numeric seed ids.
    pub fn with_users(mut self, records: impl IntoIterator<Item = UserRecord>) -> Self {
        let users = self.users.get_mut();
        for record in records {
            bump_counter(&self.next_user_id, &record.user.id);
            users.insert(record.user.id.clone(), record);
        }
        self
    }

    /// Seeds the store catalog, advancing the id counter past numeric
    /// seed ids.
    pub fn with_stores(mut self, stores: impl IntoIterator<Item = Store>) -> Self {
        let catalog = self.stores.get_mut();
        for store in stores {
            bump_counter(&self.next_store_id, &store.id);
            catalog.insert(store.id.clone(), store);
        }
        self
    }

    /// Seeds the rating catalog. Seed aggregates on stores are kept
    /// as-is; recomputation only happens on submission.
    pub fn with_ratings(mut self, ratings: impl IntoIterator<Item = Rating>) -> Self {
        let catalog = self.ratings.get_mut();
        for rating in ratings {
            catalog.insert((rating.user_id.clone(), rating.store_id.clone()), rating);
        }
        self
    }

    fn mint(counter: &AtomicU64) -> String {
        counter.fetch_add(1, AtomicOrdering::SeqCst).to_string()
    }
}

/// Keeps a mint counter ahead of every numeric id already in use.
fn bump_counter(counter: &AtomicU64, id: &str) {
    if let Ok(numeric) = id.parse::<u64>() {
        counter.fetch_max(numeric + 1, AtomicOrdering::SeqCst);
    }
}

/// Deterministic catalog order: numeric ids first in numeric order,
/// everything else lexicographic.
fn id_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, new_user: NewUser) -> CatalogResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|r| r.user.email == new_user.email) {
            return Err(CatalogError::already_exists("User", new_user.email));
        }

        let user = User::new(
            Self::mint(&self.next_user_id),
            new_user.name,
            new_user.email,
            new_user.role,
        );
        users.insert(
            user.id.clone(),
            UserRecord::new(user.clone(), new_user.credential),
        );
        tracing::debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> CatalogResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).map(|record| record.user.clone()))
    }

    async fn get_user_by_email(&self, email: &str) -> CatalogResult<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.values().find(|r| r.user.email == email).cloned())
    }

    async fn list_users(&self) -> CatalogResult<Vec<User>> {
        let users = self.users.read().await;
        let mut result: Vec<User> = users.values().map(|record| record.user.clone()).collect();
        result.sort_by(|a, b| id_order(&a.id, &b.id));
        Ok(result)
    }

    // =========================================================================
    // Store operations
    // =========================================================================

    async fn create_store(&self, new_store: NewStore) -> CatalogResult<Store> {
        let mut stores = self.stores.write().await;
        let mut store = Store::new(
            Self::mint(&self.next_store_id),
            new_store.name,
            new_store.address,
        );
        store.owner_id = new_store.owner_id;
        stores.insert(store.id.clone(), store.clone());
        tracing::debug!(store_id = %store.id, "store created");
        Ok(store)
    }

    async fn get_store(&self, id: &str) -> CatalogResult<Option<Store>> {
        let stores = self.stores.read().await;
        Ok(stores.get(id).cloned())
    }

    async fn list_stores(&self) -> CatalogResult<Vec<Store>> {
        let stores = self.stores.read().await;
        let mut result: Vec<Store> = stores.values().cloned().collect();
        result.sort_by(|a, b| id_order(&a.id, &b.id));
        Ok(result)
    }

    // =========================================================================
    // Rating operations
    // =========================================================================

    async fn upsert_rating(
        &self,
        user_id: &str,
        store_id: &str,
        value: u8,
    ) -> CatalogResult<Rating> {
        let mut stores = self.stores.write().await;
        let store = stores
            .get_mut(store_id)
            .ok_or_else(|| CatalogError::not_found("Store", store_id))?;

        let mut ratings = self.ratings.write().await;
        let key = (user_id.to_string(), store_id.to_string());
        let rating = match ratings.get(&key) {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.value = value;
                updated.submitted_at = Utc::now();
                updated
            }
            None => Rating::new(store_id, user_id, value),
        };
        ratings.insert(key, rating.clone());

        // Aggregate invariant: the store's rating is the mean of its
        // rating set.
        let values: Vec<u8> = ratings
            .values()
            .filter(|r| r.store_id == store_id)
            .map(|r| r.value)
            .collect();
        store.total_ratings = values.len() as u32;
        store.rating = values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64;

        tracing::debug!(
            user_id,
            store_id,
            value,
            aggregate = store.rating,
            "rating upserted"
        );
        Ok(rating)
    }

    async fn get_rating(&self, user_id: &str, store_id: &str) -> CatalogResult<Option<Rating>> {
        let ratings = self.ratings.read().await;
        Ok(ratings
            .get(&(user_id.to_string(), store_id.to_string()))
            .cloned())
    }

    async fn list_ratings_for_store(&self, store_id: &str) -> CatalogResult<Vec<Rating>> {
        let ratings = self.ratings.read().await;
        let mut result: Vec<Rating> = ratings
            .values()
            .filter(|r| r.store_id == store_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(result)
    }

    async fn list_ratings_by_user(&self, user_id: &str) -> CatalogResult<Vec<Rating>> {
        let ratings = self.ratings.read().await;
        let mut result: Vec<Rating> = ratings
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(result)
    }

    async fn list_ratings(&self) -> CatalogResult<Vec<Rating>> {
        let ratings = self.ratings.read().await;
        let mut result: Vec<Rating> = ratings.values().cloned().collect();
        result.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(result)
    }
}
