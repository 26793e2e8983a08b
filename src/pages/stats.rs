//! Focus statistics page.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::state::auth::AuthState;

/// Stats page — shows how many focus sessions the user has recorded.
#[component]
pub fn StatsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let stats = LocalResource::new(move || {
        let user_id = auth.get().user_id;
        async move {
            match user_id {
                Some(user_id) => api::view_stats(&user_id).await,
                None => None,
            }
        }
    });

    view! {
        <div class="stats-page">
            <NavBar/>
            <h1>"Focus Stats"</h1>
            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|s| match s {
                            Some(s) => {
                                let count = s.focus_session_ids.len();
                                view! {
                                    <p class="stats-page__summary">
                                        {format!("{count} focus sessions recorded")}
                                    </p>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"No stats yet."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
