//! Aggregate review statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate statistics returned by `GET /api/reviews/stats`.
///
/// Owned and recomputed by the backend; the client holds no authoritative
/// copy and simply replaces what it has on each poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    /// Total number of stored reviews.
    pub total_reviews: i64,
    /// Mean rating across all reviews; 0 when there are none.
    pub average_rating: f64,
    /// Count of reviews per star value. Only ratings that occur appear as
    /// keys. A BTreeMap keeps the tiles ordered by rating.
    #[serde(default)]
    pub rating_distribution: BTreeMap<u8, i64>,
}

impl Stats {
    /// Average rating rounded to one decimal place for display.
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}
