//! REST API helpers for communicating with the Focus Reader server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors or empty lists since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth endpoints return `Result<_, AuthError>` so the session store can
//! record a precise failure. Query endpoints return `Option`/`Vec` so fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use crate::net::types::{Annotation, Document, FocusStats, Id, LoginOutcome, TextSettings};
use crate::state::auth::AuthError;

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    url: &str,
    body: &serde_json::Value,
) -> Result<T, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|_| AuthError::NetworkError)?
        .send()
        .await
        .map_err(|_| AuthError::NetworkError)?;
    resp.json::<T>().await.map_err(|_| AuthError::MalformedResponse)
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// `InvalidCredentials` when the server rejects the pair, `NetworkError` on
/// transport failure, `MalformedResponse` when the reply carries neither an
/// identity nor an error.
pub async fn auth_login(username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "username": username, "password": password });
        let resp: crate::net::types::LoginResponse = post_json("/api/auth/login", &body).await?;
        resp.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(AuthError::NetworkError)
    }
}

/// Notify the server that the session is ending via `POST /api/auth/logout`.
///
/// The response is not interpreted; failures are logged and swallowed.
pub async fn auth_logout(session: &str) {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "session": session });
        if let Err(err) = post_json::<serde_json::Value>("/api/auth/logout", &body).await {
            leptos::logging::warn!("logout notification failed: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Create a new account via `POST /api/Profile/createAccount`.
///
/// # Errors
///
/// Same taxonomy as [`auth_login`]; a rejected username surfaces as
/// `InvalidCredentials` with the server's message.
pub async fn create_account(username: &str, password: &str) -> Result<Id, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "username": username, "password": password });
        let resp: crate::net::types::ActionResponse =
            post_json("/api/Profile/createAccount", &body).await?;
        resp.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(AuthError::NetworkError)
    }
}

/// Fetch a user's display name from `POST /api/Profile/_getUserDetails`.
/// Returns `None` if the lookup fails or on the server.
pub async fn get_user_details(user: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Details {
            username: String,
        }
        let body = serde_json::json!({ "user": user });
        let rows: Vec<Details> = post_json("/api/Profile/_getUserDetails", &body).await.ok()?;
        rows.into_iter().next().map(|d| d.username)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        None
    }
}

/// Fetch the id of the user's library from `POST /api/Library/_getLibraryByUser`.
pub async fn get_library_by_user(user: &str) -> Option<Id> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Row {
            library: crate::net::types::Library,
        }
        let body = serde_json::json!({ "user": user });
        let rows: Vec<Row> = post_json("/api/Library/_getLibraryByUser", &body).await.ok()?;
        rows.into_iter().next().map(|r| r.library.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        None
    }
}

/// List the documents in a library via `POST /api/Library/_getDocumentsInLibrary`.
pub async fn get_documents_in_library(library: &str) -> Vec<Document> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Row {
            document: Document,
        }
        let body = serde_json::json!({ "library": library });
        let rows: Vec<Row> = post_json("/api/Library/_getDocumentsInLibrary", &body)
            .await
            .unwrap_or_default();
        rows.into_iter().map(|r| r.document).collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = library;
        Vec::new()
    }
}

/// Search a document's annotations via `POST /api/Annotation/search`.
pub async fn search_annotations(user: &str, document: &str, criteria: &str) -> Vec<Annotation> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Row {
            annotations: Vec<Annotation>,
        }
        let body = serde_json::json!({ "user": user, "document": document, "criteria": criteria });
        let rows: Vec<Row> = post_json("/api/Annotation/search", &body)
            .await
            .unwrap_or_default();
        rows.into_iter().flat_map(|r| r.annotations).collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user, document, criteria);
        Vec::new()
    }
}

/// Fetch a user's focus stats from `POST /api/FocusStats/_viewStats`.
pub async fn view_stats(user: &str) -> Option<FocusStats> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(rename = "focusStats")]
            focus_stats: FocusStats,
        }
        let body = serde_json::json!({ "user": user });
        let rows: Vec<Row> = post_json("/api/FocusStats/_viewStats", &body).await.ok()?;
        rows.into_iter().next().map(|r| r.focus_stats)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        None
    }
}

/// Fetch a document's current text settings from
/// `POST /api/TextSettings/_getDocumentCurrentSettings`.
pub async fn get_document_current_settings(document: &str) -> Option<TextSettings> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Row {
            settings: TextSettings,
        }
        let body = serde_json::json!({ "document": document });
        let rows: Vec<Row> = post_json("/api/TextSettings/_getDocumentCurrentSettings", &body)
            .await
            .ok()?;
        rows.into_iter().next().map(|r| r.settings)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = document;
        None
    }
}
