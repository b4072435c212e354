//! Client library for the feedback backend API.
//!
//! Provides the wire types spoken by the backend, draft validation for the
//! submission form, and an HTTP client with automatic JSON handling.
//!
//! # Example
//!
//! ```rust,ignore
//! use feedback_api::{ApiClient, ReviewDraft};
//!
//! let client = ApiClient::new("http://localhost:8000");
//!
//! let draft = ReviewDraft {
//!     rating: 5,
//!     text: "Great service".to_string(),
//! };
//!
//! let request = draft.validate()?;
//! let response = client.submit_review(&request).await?;
//! println!("{}", response.ai_response);
//! ```

mod client;
mod draft;
mod error;
mod review;
mod stats;

pub use client::ApiClient;
pub use draft::{clamp_review_text, DraftError, ReviewDraft, MAX_REVIEW_CHARS};
pub use error::ApiError;
pub use review::{
    filter_by_rating, star_glyphs, Review, ReviewListResponse, SubmitReviewRequest,
    SubmitReviewResponse,
};
pub use stats::Stats;
