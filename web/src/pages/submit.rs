//! Review submission page.

use feedback_api::{clamp_review_text, ApiClient, ReviewDraft, MAX_REVIEW_CHARS};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;

/// Shown when a submission fails without a backend-supplied message.
const SUBMIT_FALLBACK: &str = "Failed to submit review. Please try again.";

#[component]
pub fn SubmitPage() -> impl IntoView {
    let api = StoredValue::new(ApiClient::new(config::api_base_url()));

    // Draft state; rating 0 means no star selected yet.
    let (rating, set_rating) = signal(0u8);
    let (review_text, set_review_text) = signal(String::new());

    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(false);
    let (ai_response, set_ai_response) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let draft = ReviewDraft {
            rating: rating.get_untracked(),
            text: review_text.get_untracked(),
        };

        // Validation failures never reach the network.
        let request = match draft.validate() {
            Ok(request) => request,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };

        set_submitting.set(true);
        set_error.set(None);
        set_success.set(false);
        set_ai_response.set(None);

        spawn_local(async move {
            match api.get_value().submit_review(&request).await {
                Ok(response) => {
                    set_success.set(true);
                    set_ai_response.set(Some(response.ai_response));
                    // Accepted; clear the draft for the next review.
                    set_review_text.set(String::new());
                    set_rating.set(0);
                }
                // Leave the draft intact so the user can retry.
                Err(err) => set_error.set(Some(err.user_message(SUBMIT_FALLBACK))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="container">
            <div class="card narrow">
                <h1>"Share Your Feedback"</h1>
                <p class="subtitle">
                    "We value your opinion! Please rate your experience and share your thoughts."
                </p>

                <form on:submit=on_submit>
                    <label>"Rating *"</label>
                    <StarPicker rating=rating set_rating=set_rating/>
                    {move || {
                        let selected = rating.get();
                        (selected > 0).then(|| view! {
                            <p class="hint">
                                "Selected: " {selected.to_string()} " "
                                {if selected == 1 { "star" } else { "stars" }}
                            </p>
                        })
                    }}

                    <label>"Your Review *"</label>
                    <textarea
                        class="textarea"
                        placeholder="Tell us about your experience..."
                        prop:value=move || review_text.get()
                        on:input=move |ev| {
                            set_review_text.set(clamp_review_text(event_target_value(&ev)));
                        }
                    ></textarea>
                    <p class="char-count">
                        {move || review_text.get().chars().count().to_string()}
                        " / " {MAX_REVIEW_CHARS.to_string()} " characters"
                    </p>

                    {move || error.get().map(|message| view! {
                        <div class="error-message">{message}</div>
                    })}

                    {move || success.get().then(|| view! {
                        <div class="success-message">
                            <strong>"✓ Review submitted successfully!"</strong>
                            {ai_response.get().map(|response| view! {
                                <div class="ai-response">
                                    <strong>"AI Response:"</strong>
                                    <p>{response}</p>
                                </div>
                            })}
                        </div>
                    })}

                    <button
                        type="submit"
                        class="button wide"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Five clickable stars; clicking star n selects rating n.
#[component]
fn StarPicker(rating: ReadSignal<u8>, set_rating: WriteSignal<u8>) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(1..=5u8).map(|star| view! {
                <button
                    type="button"
                    class="star"
                    class:active={move || rating.get() >= star}
                    on:click=move |_| set_rating.set(star)
                >
                    "★"
                </button>
            }).collect::<Vec<_>>()}
        </div>
    }
}
