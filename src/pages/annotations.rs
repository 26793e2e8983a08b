//! Annotations page with a simple search-and-list view.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::Annotation;
use crate::state::auth::AuthState;

/// Annotations page — searches the user's annotations by free-text criteria
/// and lists the matches.
#[component]
pub fn AnnotationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let criteria = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Annotation>::new());
    let searched = RwSignal::new(false);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = auth.get().user_id else {
            return;
        };
        let text = criteria.get();
        leptos::task::spawn_local(async move {
            let found = api::search_annotations(&user_id, "", &text).await;
            results.set(found);
            searched.set(true);
        });
    };

    view! {
        <div class="annotations-page">
            <NavBar/>
            <h1>"Annotations"</h1>
            <form class="annotations-page__search" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Search annotations"
                    prop:value=move || criteria.get()
                    on:input=move |ev| criteria.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Search"</button>
            </form>
            <ul class="annotations-page__list">
                {move || {
                    let list = results.get();
                    if list.is_empty() && searched.get() {
                        view! { <li>"No annotations found."</li> }.into_any()
                    } else {
                        list.into_iter()
                            .map(|a| {
                                view! {
                                    <li class="annotations-page__item">
                                        <span class="annotations-page__location">{a.location}</span>
                                        {a.content.unwrap_or_default()}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </ul>
        </div>
    }
}
