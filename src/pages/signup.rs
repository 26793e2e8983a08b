//! Signup page — creates the account, then logs straight in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::{self, AuthState};

/// Signup page — account creation followed by an immediate login with the
/// same credentials, so a successful signup lands in the library.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            error.set(Some("Username and password are required".to_owned()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_account(&user, &pass).await {
                Ok(_) => {
                    if auth::login(auth, user, pass).await.is_ok() {
                        navigate("/library", NavigateOptions::default());
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Sign up"</h1>
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
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            {move || {
                error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })
            }}
            <p>"Already registered? " <a href="/login">"Log in"</a></p>
        </div>
    }
}
