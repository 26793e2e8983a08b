//! Wire types for the Focus Reader API.
//!
//! Every endpoint answers with either a payload or an `error` string, so
//! most response envelopes model both as optional fields and interpret
//! afterwards.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::AuthError;

/// Opaque server-issued identifier.
pub type Id = String;

/// Response envelope for `POST /api/auth/login`.
///
/// A well-formed response carries either `user` (with an optional `session`
/// token) or `error` — never neither.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    pub user: Option<Id>,
    pub session: Option<Id>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// The identity committed by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user: Id,
    pub session: Option<Id>,
}

impl LoginResponse {
    /// Interpret the envelope: identity wins, then a server-reported error,
    /// and a response carrying neither is malformed.
    pub fn into_result(self) -> Result<LoginOutcome, AuthError> {
        if let Some(user) = self.user {
            return Ok(LoginOutcome {
                user,
                session: self.session,
            });
        }
        match self.error {
            Some(message) => Err(AuthError::InvalidCredentials(message)),
            None => Err(AuthError::MalformedResponse),
        }
    }
}

/// Response envelope for single-id action endpoints
/// (`createAccount`, `createDocument`, ...).
#[derive(Clone, Debug, Deserialize)]
pub struct ActionResponse {
    #[serde(alias = "user", alias = "document", alias = "annotation", alias = "library")]
    pub id: Option<Id>,
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn into_result(self) -> Result<Id, AuthError> {
        match (self.id, self.error) {
            (Some(id), _) => Ok(id),
            (None, Some(message)) => Err(AuthError::InvalidCredentials(message)),
            (None, None) => Err(AuthError::MalformedResponse),
        }
    }
}

/// A document stored in a user's library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: Id,
    pub name: String,
    #[serde(rename = "epubContent")]
    pub epub_content: String,
}

/// A user's library: an owned collection of document ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    #[serde(rename = "_id")]
    pub id: Id,
    pub user: Id,
    pub documents: Vec<Id>,
}

/// A highlight/note anchored to a location inside a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "_id")]
    pub id: Id,
    pub creator: Id,
    pub document: Id,
    pub color: Option<String>,
    pub content: Option<String>,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<Id>,
}

/// A single timed reading session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSession {
    #[serde(rename = "_id")]
    pub id: Id,
    pub user: Id,
    pub document: Id,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: Option<String>,
}

/// Aggregated focus-session stats for a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusStats {
    pub id: Id,
    pub user: Id,
    #[serde(rename = "focusSessionIds", default)]
    pub focus_session_ids: Vec<Id>,
}

/// Per-document text rendering settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    #[serde(rename = "_id")]
    pub id: Id,
    pub font: String,
    #[serde(rename = "fontSize")]
    pub font_size: f64,
    #[serde(rename = "lineHeight")]
    pub line_height: f64,
}
