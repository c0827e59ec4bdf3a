//! Store entity definitions.

use serde::{Deserialize, Serialize};

/// A store that can be browsed and rated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Unique identifier.
    pub id: String,
    /// Store name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Mean of all submitted ratings; 0.0 when unrated.
    pub rating: f64,
    /// Number of ratings behind the mean.
    pub total_ratings: u32,
    /// Owning user, if any.
    pub owner_id: Option<String>,
}

impl Store {
    /// Creates a new, unrated store.
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            rating: 0.0,
            total_ratings: 0,
            owner_id: None,
        }
    }

    /// Sets the owner.
    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Sets the aggregate rating and count.
    pub fn with_aggregate(mut self, rating: f64, total_ratings: u32) -> Self {
        self.rating = rating;
        self.total_ratings = total_ratings;
        self
    }

    /// The aggregate rating formatted with one decimal of precision.
    pub fn display_rating(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Input for creating a store; the store mints the id.
#[derive(Debug, Clone)]
pub struct NewStore {
    /// Store name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Owning user, if any.
    pub owner_id: Option<String>,
}
