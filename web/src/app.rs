//! Application shell and routing.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{AdminPage, SubmitPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Title text="AI Feedback System"/>
        <Meta name="description" content="Submit reviews and view analytics"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=SubmitPage/>
                    <Route path=path!("/admin") view=AdminPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header>
            <h1>"AI Feedback System"</h1>
            <nav>
                <a href="/">"Leave a Review"</a>
                <a href="/admin">"Admin Dashboard"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Reviews are processed with AI-generated responses and insights."</p>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to the review form"</a>
        </div>
    }
}
