//! Reusable card component for document list items in the library.

use leptos::prelude::*;

/// A clickable card representing a document in the library list.
#[component]
pub fn DocumentCard(id: String, name: String) -> impl IntoView {
    let href = format!("/reader/{id}");

    view! {
        <a class="document-card" href=href>
            <span class="document-card__name">{name}</span>
        </a>
    }
}
