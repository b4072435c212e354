//! Review wire types and display helpers.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Format rendered for review timestamps, in the viewer's local timezone.
const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// A stored review as returned by the backend.
///
/// The AI fields are populated by the backend when the review is processed;
/// each may be absent and is simply not rendered in that case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique identifier, assigned by the backend.
    pub id: i64,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Free-form review text.
    pub review_text: String,
    /// AI-generated reply shown to the submitting customer.
    pub ai_response: Option<String>,
    /// AI-generated one-line summary for the admin dashboard.
    pub ai_summary: Option<String>,
    /// AI-generated recommended actions, newline-delimited.
    pub ai_recommended_actions: Option<String>,
    /// Creation timestamp as emitted by the backend.
    pub created_at: String,
}

impl Review {
    /// Star glyphs for this review's rating.
    pub fn star_glyphs(&self) -> String {
        star_glyphs(self.rating)
    }

    /// Parse `created_at`, accepting RFC 3339 or the backend's naive
    /// `YYYY-MM-DD HH:MM:SS` form (stored in UTC).
    fn parse_created(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(&self.created_at, format) {
                return Some(Utc.from_utc_datetime(&naive));
            }
        }
        None
    }

    /// Creation timestamp formatted for display in the local timezone.
    ///
    /// Falls back to the raw backend string when it does not parse.
    pub fn created_display(&self) -> String {
        match self.parse_created() {
            Some(dt) => dt
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string(),
            None => self.created_at.clone(),
        }
    }
}

/// The review list envelope returned by `GET /api/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewListResponse {
    pub reviews: Vec<Review>,
    pub total: i64,
}

/// Body for `POST /api/submit-review`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitReviewRequest {
    pub rating: u8,
    pub review_text: String,
}

/// Response from `POST /api/submit-review`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitReviewResponse {
    pub success: bool,
    pub message: String,
    pub review_id: i64,
    pub ai_response: String,
}

/// Filled stars for the rating, outlined stars for the remainder up to five.
pub fn star_glyphs(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}

/// Restrict reviews to those matching the selected rating.
///
/// `None` keeps everything. Relative order is preserved; the backend is not
/// re-queried.
pub fn filter_by_rating(reviews: &[Review], rating: Option<u8>) -> Vec<Review> {
    match rating {
        Some(wanted) => reviews
            .iter()
            .filter(|review| review.rating == wanted)
            .cloned()
            .collect(),
        None => reviews.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_review(id: i64, rating: u8) -> Review {
        Review {
            id,
            rating,
            review_text: format!("review {id}"),
            ai_response: None,
            ai_summary: None,
            ai_recommended_actions: None,
            created_at: "2024-03-01 12:00:00".to_string(),
        }
    }

    // === Star Glyph Tests ===

    #[test]
    fn test_star_glyphs_full_range() {
        assert_eq!(star_glyphs(0), "☆☆☆☆☆");
        assert_eq!(star_glyphs(1), "★☆☆☆☆");
        assert_eq!(star_glyphs(3), "★★★☆☆");
        assert_eq!(star_glyphs(5), "★★★★★");
    }

    #[test]
    fn test_star_glyphs_clamped_above_five() {
        assert_eq!(star_glyphs(9), "★★★★★");
    }

    // === Filtering Tests ===

    #[test]
    fn test_filter_by_rating_keeps_matches_in_order() {
        let reviews: Vec<Review> = [1u8, 3, 5, 5, 2]
            .iter()
            .enumerate()
            .map(|(i, &rating)| make_review(i as i64, rating))
            .collect();

        let filtered = filter_by_rating(&reviews, Some(5));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 2);
        assert_eq!(filtered[1].id, 3);
    }

    #[test]
    fn test_filter_by_rating_none_keeps_all() {
        let reviews = vec![make_review(1, 1), make_review(2, 4)];
        assert_eq!(filter_by_rating(&reviews, None), reviews);
    }

    #[test]
    fn test_filter_by_rating_no_matches() {
        let reviews = vec![make_review(1, 1), make_review(2, 2)];
        assert!(filter_by_rating(&reviews, Some(5)).is_empty());
    }

    // === Serde Tests ===

    #[test]
    fn test_review_deserializes_null_ai_fields() {
        let json = r#"{
            "id": 7,
            "rating": 4,
            "review_text": "Solid experience",
            "ai_response": null,
            "ai_summary": null,
            "ai_recommended_actions": null,
            "created_at": "2024-03-01 12:00:00"
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.id, 7);
        assert_eq!(review.ai_response, None);
        assert_eq!(review.ai_summary, None);
        assert_eq!(review.ai_recommended_actions, None);
    }

    #[test]
    fn test_review_deserializes_ai_fields_verbatim() {
        let json = r#"{
            "id": 8,
            "rating": 1,
            "review_text": "Bad",
            "ai_response": "We are sorry.",
            "ai_summary": "Customer unhappy",
            "ai_recommended_actions": "1. Follow up\n2. Investigate",
            "created_at": "2024-03-01 12:00:00"
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.ai_summary.as_deref(), Some("Customer unhappy"));
        assert_eq!(
            review.ai_recommended_actions.as_deref(),
            Some("1. Follow up\n2. Investigate")
        );
    }

    #[test]
    fn test_submit_request_serializes_expected_body() {
        let request = SubmitReviewRequest {
            rating: 5,
            review_text: "Great service".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rating": 5, "review_text": "Great service"})
        );
    }

    #[test]
    fn test_review_list_envelope() {
        let json = r#"{"reviews": [], "total": 0}"#;
        let list: ReviewListResponse = serde_json::from_str(json).unwrap();
        assert!(list.reviews.is_empty());
        assert_eq!(list.total, 0);
    }

    // === Timestamp Tests ===

    #[test]
    fn test_parse_created_sqlite_format() {
        let review = make_review(1, 3);
        let parsed = review.parse_created().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_parse_created_rfc3339() {
        let mut review = make_review(1, 3);
        review.created_at = "2024-03-01T09:30:00+02:00".to_string();
        let parsed = review.parse_created().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T07:30:00+00:00");
    }

    #[test]
    fn test_parse_created_naive_iso() {
        let mut review = make_review(1, 3);
        review.created_at = "2024-03-01T12:00:00.123456".to_string();
        assert!(review.parse_created().is_some());
    }

    #[test]
    fn test_created_display_falls_back_to_raw() {
        let mut review = make_review(1, 3);
        review.created_at = "not a timestamp".to_string();
        assert_eq!(review.created_display(), "not a timestamp");
    }
}
