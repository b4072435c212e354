//! Client configuration.

/// Backend address used when no override is baked in at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the feedback backend.
///
/// Set `FEEDBACK_API_URL` at compile time to point elsewhere; a CSR bundle
/// has no runtime environment to read from.
pub fn api_base_url() -> &'static str {
    option_env!("FEEDBACK_API_URL").unwrap_or(DEFAULT_API_URL)
}
