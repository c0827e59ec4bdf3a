//! Search and sort for catalog list views.
//!
//! Thin wrappers over the list query engine with the fields each view
//! exposes: stores match on name or address, users on name or email,
//! and owner rating tables on the rater's display name.

use chrono::{DateTime, Utc};
use entities::{Rating, Store, User};
use list_query::{compare_f64, compare_str, query, Sort};
use serde::{Deserialize, Serialize};

/// Sortable fields of a store list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreSortField {
    /// Store name.
    Name,
    /// Street address.
    Address,
    /// Aggregate rating.
    Rating,
}

/// Filtered, ordered store list.
pub fn query_stores(stores: &[Store], term: &str, sort: Sort<StoreSortField>) -> Vec<Store> {
    query(
        stores,
        term,
        sort,
        |store| vec![store.name.as_str(), store.address.as_str()],
        |a, b, field| match field {
            StoreSortField::Name => compare_str(&a.name, &b.name),
            StoreSortField::Address => compare_str(&a.address, &b.address),
            StoreSortField::Rating => compare_f64(a.rating, b.rating),
        },
    )
}

/// Sortable fields of a user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSortField {
    /// Display name.
    Name,
    /// Email address.
    Email,
    /// Role.
    Role,
}

/// Filtered, ordered user list.
pub fn query_users(users: &[User], term: &str, sort: Sort<UserSortField>) -> Vec<User> {
    query(
        users,
        term,
        sort,
        |user| vec![user.name.as_str(), user.email.as_str()],
        |a, b, field| match field {
            UserSortField::Name => compare_str(&a.name, &b.name),
            UserSortField::Email => compare_str(&a.email, &b.email),
            UserSortField::Role => compare_str(a.role.as_str(), b.role.as_str()),
        },
    )
}

/// A rating joined with the rater's display name for owner tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRow {
    /// The rating.
    pub rating: Rating,
    /// The rater's display name; the user id when no roster entry
    /// matches.
    pub user_name: String,
}

impl RatingRow {
    fn submitted_at(&self) -> DateTime<Utc> {
        self.rating.submitted_at
    }
}

/// Joins ratings with rater display names.
pub fn rating_rows(ratings: &[Rating], users: &[User]) -> Vec<RatingRow> {
    ratings
        .iter()
        .map(|rating| {
            let user_name = users
                .iter()
                .find(|user| user.id == rating.user_id)
                .map(|user| user.name.clone())
                .unwrap_or_else(|| rating.user_id.clone());
            RatingRow {
                rating: rating.clone(),
                user_name,
            }
        })
        .collect()
}

/// Sortable fields of an owner rating table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingSortField {
    /// Rater display name.
    UserName,
    /// Star value.
    Value,
    /// Submission time.
    SubmittedAt,
}

/// Filtered, ordered rating table; the search term matches the rater's
/// display name.
pub fn query_rating_rows(
    rows: &[RatingRow],
    term: &str,
    sort: Sort<RatingSortField>,
) -> Vec<RatingRow> {
    query(
        rows,
        term,
        sort,
        |row| vec![row.user_name.as_str()],
        |a, b, field| match field {
            RatingSortField::UserName => compare_str(&a.user_name, &b.user_name),
            RatingSortField::Value => a.rating.value.cmp(&b.rating.value),
            RatingSortField::SubmittedAt => a.submitted_at().cmp(&b.submitted_at()),
        },
    )
}
