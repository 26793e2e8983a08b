//! Library page listing the user's documents.

use leptos::prelude::*;

use crate::components::document_card::DocumentCard;
use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::state::auth::AuthState;

/// Library page — the main authenticated destination. Resolves the user's
/// library id, then lists its documents.
#[component]
pub fn LibraryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let documents = LocalResource::new(move || {
        let user_id = auth.get().user_id;
        async move {
            let Some(user_id) = user_id else {
                return Vec::new();
            };
            match api::get_library_by_user(&user_id).await {
                Some(library) => api::get_documents_in_library(&library).await,
                None => Vec::new(),
            }
        }
    });

    view! {
        <div class="library-page">
            <NavBar/>
            <header class="library-page__header">
                <h1>"Library"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading documents..."</p> }>
                {move || {
                    documents
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p>"No documents yet."</p> }.into_any()
                            } else {
                                view! {
                                    <div class="library-page__cards">
                                        {list
                                            .into_iter()
                                            .map(|d| {
                                                view! { <DocumentCard id=d.id name=d.name/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
