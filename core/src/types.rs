//! Domain DTOs for the todo list API.
//!
//! # Design
//! These types mirror the remote resource's wire schema but are defined
//! independently of the mock-server crate. Integration tests catch any schema
//! drift between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as returned by the API.
///
/// `id` is assigned by the server on creation and never changes; `text` and
/// `completed` are the only mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server assigns the id and
/// defaults `completed` to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Request payload for updating an existing todo.
///
/// This is a full-document update, not a patch: both fields are required and
/// always serialized, so every update carries the item's complete state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub text: String,
    pub completed: bool,
}
