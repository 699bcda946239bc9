//! Error types for the todo list client.
//!
//! # Design
//! The wire path is deliberately coarse: every non-2xx response lands in
//! `Http` with the raw status and body, no per-status variants. The
//! controller flattens all failures to a display string for the view, so a
//! richer taxonomy would go unread. `NotFound` covers the one failure the
//! client detects locally — a toggle aimed at an id that is not in the
//! current snapshot.

use std::fmt;

use uuid::Uuid;

/// Errors produced by `TodoClient` and `TodoListController`.
#[derive(Debug)]
pub enum ApiError {
    /// The targeted todo is not present in the fetched snapshot.
    NotFound(Uuid),

    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The HTTP round-trip itself failed (connection refused, DNS, ...).
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(id) => write!(f, "no todo with id {id}"),
            ApiError::Http { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
