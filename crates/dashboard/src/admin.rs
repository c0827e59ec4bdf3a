//! Admin catalog management operations.

use entities::{validate, NewStore, NewUser, Store, User, UserRole};
use session::password;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

impl AppState {
    /// Creates a store on behalf of an admin session.
    ///
    /// Validates the fields per form input and verifies the owner
    /// exists when one is given.
    pub async fn create_store(
        &self,
        session: Option<&User>,
        new_store: NewStore,
    ) -> AppResult<Store> {
        let admin = require_admin(session)?;
        validate::validate_new_store(&new_store.name, &new_store.address)
            .map_err(AppError::Validation)?;

        if let Some(owner_id) = &new_store.owner_id {
            if self.catalog.get_user(owner_id).await?.is_none() {
                return Err(catalog_store::CatalogError::not_found("User", owner_id).into());
            }
        }

        let store = self.catalog.create_store(new_store).await?;
        tracing::info!(admin_id = %admin.id, store_id = %store.id, "store created by admin");
        Ok(store)
    }

    /// Creates a roster entry on behalf of an admin session.
    ///
    /// Unlike registration this does not activate a session for the new
    /// user; the credential goes through the same validation and
    /// hashing path.
    pub async fn create_user(
        &self,
        session: Option<&User>,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> AppResult<User> {
        let admin = require_admin(session)?;
        validate::validate_new_user(name, email, password).map_err(AppError::Validation)?;

        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            role,
            credential: password::hash_password(password),
        };
        let user = self.catalog.create_user(new_user).await.map_err(|e| match e {
            catalog_store::CatalogError::AlreadyExists { .. } => {
                AppError::Session(session::SessionError::DuplicateEmail(email.to_string()))
            }
            other => other.into(),
        })?;

        tracing::info!(admin_id = %admin.id, user_id = %user.id, role = role.as_str(), "user created by admin");
        Ok(user)
    }
}

fn require_admin(session: Option<&User>) -> AppResult<&User> {
    let user = session.ok_or(AppError::AuthenticationRequired)?;
    if !user.role.is_admin() {
        return Err(AppError::PermissionDenied("admin role required".to_string()));
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::create_state;

    fn test_state() -> crate::state::SharedState {
        create_state(Config {
            auth_latency_ms: 0,
            rating_latency_ms: 0,
            ..Config::default()
        })
    }

    fn admin() -> User {
        User::new("1", "Admin User", "admin@example.com", UserRole::Admin)
    }

    fn store_input(name: &str, owner_id: Option<&str>) -> NewStore {
        NewStore {
            name: name.to_string(),
            address: "159 Willow Way, Riverside".to_string(),
            owner_id: owner_id.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_store_requires_a_session() {
        let state = test_state();
        let err = state
            .create_store(None, store_input("Pet Supply Shop", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AuthenticationRequired));
    }

    #[tokio::test]
    async fn test_create_store_requires_admin_role() {
        let state = test_state();
        let user = User::new("2", "Normal User", "user@example.com", UserRole::User);
        let err = state
            .create_store(Some(&user), store_input("Pet Supply Shop", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_create_store_validates_fields() {
        let state = test_state();
        let err = state
            .create_store(Some(&admin()), store_input("X", None))
            .await
            .unwrap_err();
        let AppError::Validation(fields) = err else {
            panic!("expected per-field validation failure");
        };
        assert!(fields.name.is_some());
    }

    #[tokio::test]
    async fn test_create_store_checks_the_owner() {
        let state = test_state();
        let err = state
            .create_store(Some(&admin()), store_input("Pet Supply Shop", Some("404")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));

        let store = state
            .create_store(Some(&admin()), store_input("Pet Supply Shop", Some("3")))
            .await
            .unwrap();
        assert_eq!(store.owner_id.as_deref(), Some("3"));
        // Seeded stores run 1-8, so the minted id continues from there.
        assert_eq!(store.id, "9");
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let state = test_state();
        let err = state
            .create_user(Some(&admin()), "Other Admin", "admin@example.com", "Other@123", UserRole::Admin)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Session(session::SessionError::DuplicateEmail(_))
        ));
    }

    #[tokio::test]
    async fn test_create_user_does_not_activate_a_session() {
        let state = test_state();
        let user = state
            .create_user(Some(&admin()), "Sarah Wilson", "sarah@example.com", "Sarah@123", UserRole::User)
            .await
            .unwrap();

        assert_eq!(user.id, "7");
        assert!(!state.sessions.is_authenticated().await);

        // The new entry can log in with the supplied password.
        let logged_in = state.sessions.login("sarah@example.com", "Sarah@123").await.unwrap();
        assert_eq!(logged_in.id, "7");
    }
}
