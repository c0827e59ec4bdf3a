//! Role-scoped dashboard composition.
//!
//! [`select_dashboard`] is a pure selection function: it picks the
//! dashboard variant for the current session and scopes the catalogs to
//! it. Rendering is delegated to the UI layer.

use std::collections::{HashMap, HashSet};

use entities::{Rating, Store, User, UserRole};
use serde::Serialize;
use session::SessionState;

/// A store joined with the viewing user's own rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedStore {
    /// The store.
    pub store: Store,
    /// The star value this user gave it.
    pub user_rating: u8,
}

/// Admin dashboard data: the full user and store catalogs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminView {
    /// All users.
    pub users: Vec<User>,
    /// All stores.
    pub stores: Vec<Store>,
}

/// Store-owner dashboard data: owned stores and their ratings only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreOwnerView {
    /// Stores owned by the session user.
    pub stores: Vec<Store>,
    /// Ratings on those stores.
    pub ratings: Vec<Rating>,
}

/// Normal-user dashboard data: rated stores plus suggestions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    /// Stores this user has rated, joined with the rating value.
    pub rated: Vec<RatedStore>,
    /// Stores this user has not rated yet.
    pub suggestions: Vec<Store>,
}

/// The dashboard variant selected for the current session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Dashboard {
    /// Session restore is still in flight.
    Loading,
    /// No session; the caller should route to login.
    LoginRedirect,
    /// Administrator dashboard.
    Admin(AdminView),
    /// Store-owner dashboard.
    StoreOwner(StoreOwnerView),
    /// Normal-user dashboard.
    User(UserView),
}

/// Selects the dashboard variant for `session` and scopes the catalogs
/// to it.
pub fn select_dashboard(
    session: &SessionState,
    users: &[User],
    stores: &[Store],
    ratings: &[Rating],
) -> Dashboard {
    let user = match session {
        SessionState::Restoring => return Dashboard::Loading,
        SessionState::Anonymous => return Dashboard::LoginRedirect,
        SessionState::Authenticated(user) => user,
    };

    match user.role {
        UserRole::Admin => Dashboard::Admin(AdminView {
            users: users.to_vec(),
            stores: stores.to_vec(),
        }),
        UserRole::StoreOwner => {
            let owned: Vec<Store> = stores
                .iter()
                .filter(|store| store.owner_id.as_deref() == Some(user.id.as_str()))
                .cloned()
                .collect();
            let owned_ids: HashSet<&str> = owned.iter().map(|store| store.id.as_str()).collect();
            let ratings = ratings
                .iter()
                .filter(|rating| owned_ids.contains(rating.store_id.as_str()))
                .cloned()
                .collect();
            Dashboard::StoreOwner(StoreOwnerView { stores: owned, ratings })
        }
        UserRole::User => {
            let mine: HashMap<&str, u8> = ratings
                .iter()
                .filter(|rating| rating.user_id == user.id)
                .map(|rating| (rating.store_id.as_str(), rating.value))
                .collect();

            let mut rated = Vec::new();
            let mut suggestions = Vec::new();
            for store in stores {
                match mine.get(store.id.as_str()) {
                    Some(&value) => rated.push(RatedStore {
                        store: store.clone(),
                        user_rating: value,
                    }),
                    None => suggestions.push(store.clone()),
                }
            }
            Dashboard::User(UserView { rated, suggestions })
        }
    }
}
