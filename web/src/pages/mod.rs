//! Page components.

mod admin;
mod submit;

pub use admin::AdminPage;
pub use submit::SubmitPage;
