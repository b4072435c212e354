//! Admin dashboard page.

use std::time::Duration;

use feedback_api::{filter_by_rating, ApiClient, Review, Stats};
use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;

/// How often the dashboard re-fetches reviews and stats while mounted.
const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Shown when the review fetch fails without a backend-supplied message.
const REVIEWS_FALLBACK: &str = "Failed to load reviews";

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = StoredValue::new(ApiClient::new(config::api_base_url()));

    let (reviews, set_reviews) = signal(Vec::<Review>::new());
    let (stats, set_stats) = signal(None::<Stats>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (filter, set_filter) = signal(None::<u8>);

    let refresh = move || {
        spawn_local(async move {
            match api.get_value().list_reviews().await {
                Ok(list) => {
                    set_reviews.set(list.reviews);
                    set_error.set(None);
                }
                // Keep the previously loaded list on failure.
                Err(err) => set_error.set(Some(err.user_message(REVIEWS_FALLBACK))),
            }
            set_loading.set(false);
        });
        spawn_local(async move {
            match api.get_value().review_stats().await {
                Ok(latest) => set_stats.set(Some(latest)),
                // Stats are supplementary; never block the review list.
                Err(err) => logging::error!("failed to load review stats: {err}"),
            }
        });
    };

    // Fetch once on mount, then poll until the view unmounts.
    refresh();
    match set_interval_with_handle(refresh, POLL_INTERVAL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::error!("failed to schedule review polling: {err:?}"),
    }

    let filtered = move || filter_by_rating(&reviews.get(), filter.get());

    view! {
        <div class="container">
            <div class="card">
                <h1>"Admin Dashboard"</h1>
                <p class="subtitle">"View all customer reviews and AI-generated insights"</p>

                {move || error.get().map(|message| view! {
                    <div class="error-message">{message}</div>
                })}

                {move || stats.get().map(|stats| view! { <StatsGrid stats=stats/> })}

                <FilterBar filter=filter set_filter=set_filter/>

                <h2>{move || format!("Reviews ({})", filtered().len())}</h2>

                {move || {
                    if loading.get() {
                        return view! { <div class="loading">"Loading reviews..."</div> }.into_any();
                    }
                    let shown = filtered();
                    if shown.is_empty() {
                        view! { <div class="empty">"No reviews found"</div> }.into_any()
                    } else {
                        view! {
                            <div class="review-list">
                                {shown.into_iter().map(|review| view! {
                                    <ReviewCard review=review/>
                                }).collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Stat tiles: totals, average, and one tile per rating present in the
/// distribution.
#[component]
fn StatsGrid(stats: Stats) -> impl IntoView {
    let total = stats.total_reviews.to_string();
    let average = stats.average_display();

    view! {
        <div class="stats-grid">
            <div class="stat-tile highlight">
                <div class="stat-label">"Total Reviews"</div>
                <div class="stat-value">{total}</div>
            </div>
            <div class="stat-tile highlight alt">
                <div class="stat-label">"Average Rating"</div>
                <div class="stat-value">{average} " ⭐"</div>
            </div>
            {stats.rating_distribution.into_iter().map(|(rating, count)| view! {
                <div class="stat-tile">
                    <div class="stat-label">{rating.to_string()} " Stars"</div>
                    <div class="stat-value">{count.to_string()}</div>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Rating filter: "All" plus one button per star value. Purely client-side.
#[component]
fn FilterBar(filter: ReadSignal<Option<u8>>, set_filter: WriteSignal<Option<u8>>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <label>"Filter by Rating:"</label>
            <div class="filter-buttons">
                <button
                    class="filter-button"
                    class:selected=move || filter.get().is_none()
                    on:click=move |_| set_filter.set(None)
                >
                    "All"
                </button>
                {(1..=5u8).map(|value| view! {
                    <button
                        class="filter-button"
                        class:selected=move || filter.get() == Some(value)
                        on:click=move |_| set_filter.set(Some(value))
                    >
                        {value.to_string()} " ⭐"
                    </button>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// One review with its conditional AI annotation blocks.
#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let stars = review.star_glyphs();
    let created = review.created_display();
    let rating_label = format!(
        "{} {}",
        review.rating,
        if review.rating == 1 { "star" } else { "stars" }
    );

    view! {
        <div class="review-card">
            <div class="review-header">
                <div>
                    <span class="review-stars">{stars}</span>
                    <span class="review-rating">{rating_label}</span>
                </div>
                <span class="review-date">{created}</span>
            </div>

            <div class="review-body">
                <strong>"Review:"</strong>
                <p>{review.review_text}</p>
            </div>

            {review.ai_summary.map(|summary| view! {
                <div class="ai-block summary">
                    <strong>"AI Summary:"</strong>
                    <p>{summary}</p>
                </div>
            })}

            {review.ai_recommended_actions.map(|actions| view! {
                <div class="ai-block actions">
                    <strong>"Recommended Actions:"</strong>
                    // Newline-delimited suggestions; line breaks preserved in CSS.
                    <div class="preserve-lines">{actions}</div>
                </div>
            })}

            {review.ai_response.map(|response| view! {
                <div class="ai-block response">
                    <strong>"AI Response to Customer:"</strong>
                    <p>{response}</p>
                </div>
            })}
        </div>
    }
}
