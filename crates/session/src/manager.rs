//! Session manager: login, register, logout, restore.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use catalog_store::{CatalogError, CatalogStore};
use entities::{validate, NewUser, User, UserRole};
use tokio::sync::RwLock;

use crate::{password, SessionError, SessionResult, SessionStore, DEFAULT_AUTH_LATENCY_MS};

/// Observable session state for view composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Startup restore has not completed yet.
    Restoring,
    /// No authenticated user.
    Anonymous,
    /// An authenticated user.
    Authenticated(User),
}

/// Holds the current authenticated identity and drives the
/// login/register/logout/restore operations against the roster.
///
/// Every mutation synchronously updates the persisted copy, so readers
/// of the current session always see the latest value.
pub struct SessionManager {
    catalog: Arc<dyn CatalogStore>,
    persist: Arc<dyn SessionStore>,
    current: RwLock<Option<User>>,
    restored: AtomicBool,
    latency: Duration,
}

impl SessionManager {
    /// Creates a manager over the given roster and persistence backend.
    pub fn new(catalog: Arc<dyn CatalogStore>, persist: Arc<dyn SessionStore>) -> Self {
        Self {
            catalog,
            persist,
            current: RwLock::new(None),
            restored: AtomicBool::new(false),
            latency: Duration::from_millis(DEFAULT_AUTH_LATENCY_MS),
        }
    }

    /// Sets the artificial latency applied to login and register.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Authenticates against the roster and activates the session.
    ///
    /// Fails with `InvalidCredentials` when no roster entry matches the
    /// email/password pair. The returned user carries no credential.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<User> {
        tokio::time::sleep(self.latency).await;

        let record = self
            .catalog
            .get_user_by_email(email)
            .await?
            .ok_or(SessionError::InvalidCredentials)?;
        if !password::verify_password(password, &record.credential) {
            tracing::debug!(email, "login rejected");
            return Err(SessionError::InvalidCredentials);
        }

        let user = record.user;
        self.activate(user.clone()).await?;
        tracing::info!(user_id = %user.id, role = user.role.as_str(), "login succeeded");
        Ok(user)
    }

    /// Registers a new user and activates the session.
    ///
    /// Per-field validation runs before any state-changing call; a
    /// duplicate email fails with `DuplicateEmail` and leaves the roster
    /// unchanged.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> SessionResult<User> {
        validate::validate_registration(name, email, password).map_err(SessionError::Validation)?;

        tokio::time::sleep(self.latency).await;

        if self.catalog.get_user_by_email(email).await?.is_some() {
            return Err(SessionError::DuplicateEmail(email.to_string()));
        }

        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            role,
            credential: password::hash_password(password),
        };
        let user = self.catalog.create_user(new_user).await.map_err(|e| match e {
            CatalogError::AlreadyExists { .. } => SessionError::DuplicateEmail(email.to_string()),
            other => other.into(),
        })?;

        self.activate(user.clone()).await?;
        tracing::info!(user_id = %user.id, role = user.role.as_str(), "registration succeeded");
        Ok(user)
    }

    /// Clears the active session and its persisted copy. Idempotent.
    pub async fn logout(&self) -> SessionResult<()> {
        *self.current.write().await = None;
        self.restored.store(true, Ordering::SeqCst);
        self.persist.clear().await?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Rehydrates the session persisted by a previous run.
    ///
    /// The stored record is trusted as-is; it is not re-checked against
    /// the roster. Persistence failures degrade to logged-out.
    pub async fn restore_session(&self) -> Option<User> {
        let restored = match self.persist.load().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load persisted session");
                None
            }
        };
        if let Some(user) = &restored {
            *self.current.write().await = Some(user.clone());
            tracing::info!(user_id = %user.id, "session restored");
        }
        self.restored.store(true, Ordering::SeqCst);
        restored
    }

    /// Current authenticated user, if any.
    pub async fn current(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// Returns true when a user is authenticated.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Session state, including whether the startup restore completed.
    pub async fn state(&self) -> SessionState {
        match self.current.read().await.clone() {
            Some(user) => SessionState::Authenticated(user),
            None if self.restored.load(Ordering::SeqCst) => SessionState::Anonymous,
            None => SessionState::Restoring,
        }
    }

    async fn activate(&self, user: User) -> SessionResult<()> {
        *self.current.write().await = Some(user.clone());
        self.restored.store(true, Ordering::SeqCst);
        self.persist.save(&user).await
    }
}
