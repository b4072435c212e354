//! Draft validation for the submission form.

use crate::review::SubmitReviewRequest;
use thiserror::Error;

/// Maximum review length accepted by the backend.
pub const MAX_REVIEW_CHARS: usize = 5000;

/// Truncate review text to the accepted maximum.
///
/// Over-limit input is clamped silently rather than rejected; the form keeps
/// the first `MAX_REVIEW_CHARS` characters.
pub fn clamp_review_text(text: String) -> String {
    if text.chars().count() <= MAX_REVIEW_CHARS {
        text
    } else {
        text.chars().take(MAX_REVIEW_CHARS).collect()
    }
}

/// Validation failures caught before any network call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// No star selected (or an out-of-range value).
    #[error("Please select a rating")]
    MissingRating,

    /// Review text empty after trimming.
    #[error("Please write a review")]
    EmptyText,
}

/// The in-progress review on the submission form.
///
/// A rating of 0 means "unselected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub text: String,
}

impl ReviewDraft {
    /// Check the draft and build the submission body.
    ///
    /// The request carries the text as typed; trimming is only used for the
    /// emptiness check, matching what the backend accepts.
    pub fn validate(&self) -> Result<SubmitReviewRequest, DraftError> {
        if !(1..=5).contains(&self.rating) {
            return Err(DraftError::MissingRating);
        }
        if self.text.trim().is_empty() {
            return Err(DraftError::EmptyText);
        }
        Ok(SubmitReviewRequest {
            rating: self.rating,
            review_text: self.text.clone(),
        })
    }
}
