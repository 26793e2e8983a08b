//! Login page with a credential form backed by the session store.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Login page — submits credentials through the session store and navigates
/// to the library on success. `pending` disables the form while a request is
/// in flight; a failure message is rendered inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let pending = move || auth.get().pending;
    let error = move || auth.get().error;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if auth::login(auth, user, pass).await.is_ok() {
                navigate("/library", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=pending>
                    {move || if pending() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
            {move || {
                error().map(|msg| view! { <p class="auth-page__error">{msg}</p> })
            }}
            <p>"No account yet? " <a href="/signup">"Sign up"</a></p>
        </div>
    }
}
