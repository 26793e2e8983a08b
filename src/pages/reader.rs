//! Reader page showing a single document with its text settings applied.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::net::api;

/// Reader page — fetches the document's current text settings and renders
/// the reading surface. Reads the document id from the route parameter.
#[component]
pub fn ReaderPage() -> impl IntoView {
    let params = use_params_map();
    let document_id = move || params.read().get("document_id");

    let settings = LocalResource::new(move || {
        let id = document_id();
        async move {
            match id {
                Some(id) => api::get_document_current_settings(&id).await,
                None => None,
            }
        }
    });

    view! {
        <div class="reader-page">
            <NavBar/>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    settings
                        .get()
                        .map(|s| {
                            let style = s.map(|s| {
                                format!(
                                    "font-family:{};font-size:{}px;line-height:{}",
                                    s.font, s.font_size, s.line_height
                                )
                            });
                            view! {
                                <article class="reader-page__content" style=style.unwrap_or_default()>
                                    <p>"Open a document from the library to start reading."</p>
                                </article>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
