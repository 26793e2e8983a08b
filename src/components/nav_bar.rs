//! Top navigation bar for authenticated pages.

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};

/// Navigation bar with section links and a logout button.
///
/// Logout clears the session through the store; the route guard then
/// redirects away from the protected page on its next evaluation.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = move || auth.get().username.unwrap_or_default();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            auth::logout(auth).await;
        });
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/library">"Focus Reader"</a>
            <div class="nav-bar__links">
                <a href="/library">"Library"</a>
                <a href="/annotations">"Annotations"</a>
                <a href="/stats">"Stats"</a>
                <a href="/profile">"Profile"</a>
            </div>
            <div class="nav-bar__session">
                <span class="nav-bar__user">{username}</span>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </div>
        </nav>
    }
}
