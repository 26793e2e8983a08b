//! Public entry page with links into the auth flows.

use leptos::prelude::*;

/// Landing page — the unauthenticated entry point. Authenticated visitors
/// are redirected to the library by the route guard before this renders.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Focus Reader"</h1>
            <p>"Read, annotate, and track your focus."</p>
            <div class="landing-page__actions">
                <a href="/login" class="btn btn--primary">"Log in"</a>
                <a href="/signup" class="btn">"Sign up"</a>
            </div>
        </div>
    }
}
