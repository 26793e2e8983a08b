//! Profile page for the authenticated user.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::state::auth::AuthState;

/// Profile page — shows the account's display name. A restored session only
/// carries the user id, so the name is fetched rather than read from state.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = LocalResource::new(move || {
        let state = auth.get();
        async move {
            if let Some(name) = state.username {
                return Some(name);
            }
            match state.user_id {
                Some(user_id) => api::get_user_details(&user_id).await,
                None => None,
            }
        }
    });

    view! {
        <div class="profile-page">
            <NavBar/>
            <h1>"Profile"</h1>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    username
                        .get()
                        .map(|name| {
                            view! {
                                <p class="profile-page__name">
                                    {name.unwrap_or_else(|| "Unknown user".to_owned())}
                                </p>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
