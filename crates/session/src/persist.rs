//! Persisted session storage.
//!
//! The active session is a single serialized `User` record under a
//! well-known location; absence means logged out. Restore trusts the
//! stored record as-is, without re-validating against the roster.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use entities::User;
use tokio::sync::RwLock;

use crate::SessionResult;

/// Trait for session persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persists the active session.
    async fn save(&self, user: &User) -> SessionResult<()>;

    /// Loads the persisted session, if any.
    async fn load(&self) -> SessionResult<Option<User>>;

    /// Removes the persisted session. Idempotent.
    async fn clear(&self) -> SessionResult<()>;
}

/// In-memory session store (for tests and embedded use).
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: RwLock<Option<User>>,
}

impl MemorySessionStore {
    /// Creates a new in-memory session store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, user: &User) -> SessionResult<()> {
        *self.current.write().await = Some(user.clone());
        Ok(())
    }

    async fn load(&self) -> SessionResult<Option<User>> {
        Ok(self.current.read().await.clone())
    }

    async fn clear(&self) -> SessionResult<()> {
        *self.current.write().await = None;
        Ok(())
    }
}

/// File-backed session store: one JSON record at a well-known path.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, user: &User) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(user)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn load(&self) -> SessionResult<Option<User>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn clear(&self) -> SessionResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
