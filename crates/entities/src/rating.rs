//! Rating entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest accepted star value.
pub const RATING_MIN: u8 = 1;
/// Highest accepted star value.
pub const RATING_MAX: u8 = 5;

/// Checks that a star value is inside the accepted range.
pub const fn is_valid_rating(value: u8) -> bool {
    value >= RATING_MIN && value <= RATING_MAX
}

/// A single user's star rating of a store.
///
/// At most one rating exists per (user, store) pair; resubmission
/// overwrites the previous value instead of adding a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Unique identifier.
    pub id: String,
    /// Rated store.
    pub store_id: String,
    /// Submitting user.
    pub user_id: String,
    /// Star value, 1-5.
    pub value: u8,
    /// When the rating was submitted or last overwritten.
    pub submitted_at: DateTime<Utc>,
}

impl Rating {
    /// Creates a new rating submitted now.
    pub fn new(store_id: impl Into<String>, user_id: impl Into<String>, value: u8) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            store_id: store_id.into(),
            user_id: user_id.into(),
            value,
            submitted_at: Utc::now(),
        }
    }
}
