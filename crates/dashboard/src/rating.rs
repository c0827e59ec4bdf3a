//! Rating submission flow.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use catalog_store::CatalogStore;
use entities::{is_valid_rating, Rating, User};

use crate::error::RatingError;

/// Default artificial latency applied to rating submission, in
/// milliseconds. Matches the reference behavior; zero it in tests.
pub const DEFAULT_RATING_LATENCY_MS: u64 = 500;

/// Submission state of a store-detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// No submission in flight.
    Idle,
    /// A submission is in flight; the control should be disabled.
    Submitting,
}

/// Drives the 1-5 star submission for one store-detail view.
///
/// The flow sits in [`SubmitState::Submitting`] for the duration of the
/// simulated latency and returns to [`SubmitState::Idle`] whether the
/// submission succeeds or fails.
pub struct RatingFlow {
    catalog: Arc<dyn CatalogStore>,
    latency: Duration,
    submitting: AtomicBool,
}

impl RatingFlow {
    /// Creates a flow over the given catalog.
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            catalog,
            latency: Duration::from_millis(DEFAULT_RATING_LATENCY_MS),
            submitting: AtomicBool::new(false),
        }
    }

    /// Sets the artificial latency applied to submissions.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Current submission state.
    pub fn state(&self) -> SubmitState {
        if self.submitting.load(Ordering::SeqCst) {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }

    /// Validates and submits `value` for the session user and store.
    ///
    /// Fails with `NotAuthenticated` when `session` is empty and with
    /// `InvalidValue` outside 1-5, both before entering `Submitting`.
    /// An existing rating for the pair is overwritten.
    pub async fn submit(
        &self,
        session: Option<&User>,
        store_id: &str,
        value: u8,
    ) -> Result<Rating, RatingError> {
        let user = session.ok_or(RatingError::NotAuthenticated)?;
        if !is_valid_rating(value) {
            return Err(RatingError::InvalidValue(value));
        }

        self.submitting.store(true, Ordering::SeqCst);
        let result = self.perform(user, store_id, value).await;
        self.submitting.store(false, Ordering::SeqCst);
        result
    }

    async fn perform(&self, user: &User, store_id: &str, value: u8) -> Result<Rating, RatingError> {
        tokio::time::sleep(self.latency).await;
        let rating = self.catalog.upsert_rating(&user.id, store_id, value).await?;
        tracing::info!(user_id = %user.id, store_id, value, "rating submitted");
        Ok(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_store::{CatalogError, MemoryCatalogStore};
    use entities::{NewStore, UserRole};

    async fn catalog_with_store() -> (Arc<MemoryCatalogStore>, String) {
        let catalog = Arc::new(MemoryCatalogStore::new());
        let store = catalog
            .create_store(NewStore {
                name: "Coffee Shop Downtown".to_string(),
                address: "123 Main St, Downtown".to_string(),
                owner_id: None,
            })
            .await
            .unwrap();
        (catalog, store.id)
    }

    fn normal_user() -> User {
        User::new("2", "Normal User", "user@example.com", UserRole::User)
    }

    fn flow(catalog: Arc<MemoryCatalogStore>) -> RatingFlow {
        RatingFlow::new(catalog).with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_submit_without_session() {
        let (catalog, store_id) = catalog_with_store().await;
        let flow = flow(catalog);

        let err = flow.submit(None, &store_id, 4).await.unwrap_err();
        assert!(matches!(err, RatingError::NotAuthenticated));
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn test_submit_rejects_out_of_range_values() {
        let (catalog, store_id) = catalog_with_store().await;
        let flow = flow(catalog.clone());
        let user = normal_user();

        for value in [0, 6] {
            let err = flow.submit(Some(&user), &store_id, value).await.unwrap_err();
            assert!(matches!(err, RatingError::InvalidValue(v) if v == value));
        }
        assert!(catalog.list_ratings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_creates_then_overwrites() {
        let (catalog, store_id) = catalog_with_store().await;
        let flow = flow(catalog.clone());
        let user = normal_user();

        flow.submit(Some(&user), &store_id, 4).await.unwrap();
        flow.submit(Some(&user), &store_id, 5).await.unwrap();

        // Exactly one record for the pair, with the latest value.
        let ratings = catalog.list_ratings_for_store(&store_id).await.unwrap();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].value, 5);

        // The aggregate follows the rating set.
        let store = catalog.get_store(&store_id).await.unwrap().unwrap();
        assert_eq!(store.total_ratings, 1);
        assert_eq!(store.rating, 5.0);
    }

    #[tokio::test]
    async fn test_submit_unknown_store_returns_to_idle() {
        let (catalog, _) = catalog_with_store().await;
        let flow = flow(catalog);
        let user = normal_user();

        let err = flow.submit(Some(&user), "404", 4).await.unwrap_err();
        assert!(matches!(
            err,
            RatingError::Catalog(CatalogError::NotFound { .. })
        ));
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn test_flow_reports_submitting_during_the_delay() {
        let (catalog, store_id) = catalog_with_store().await;
        let flow = Arc::new(
            RatingFlow::new(catalog).with_latency(Duration::from_millis(50)),
        );
        let user = normal_user();

        let submit = {
            let flow = flow.clone();
            let store_id = store_id.clone();
            tokio::spawn(async move { flow.submit(Some(&user), &store_id, 4).await })
        };

        // Give the submission a moment to enter the latency window.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(flow.state(), SubmitState::Submitting);

        submit.await.unwrap().unwrap();
        assert_eq!(flow.state(), SubmitState::Idle);
    }
}
