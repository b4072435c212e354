//! Feedback portal front end.
//!
//! A two-page CSR application over the feedback backend API:
//! - `/` collects a star rating and review, showing the AI reply on success
//! - `/admin` lists reviews with AI annotations and aggregate statistics

mod app;
mod config;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
