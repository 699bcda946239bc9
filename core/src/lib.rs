//! Synchronous client core for a remote todo list.
//!
//! # Overview
//! Implements the client half of a refetch-after-mutation contract: a
//! stateful [`TodoListController`] owns the last fetched snapshot and view
//! flags, and drives create/toggle/delete through a stateless [`TodoClient`]
//! that builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The server is the single source of truth — every
//! successful write is followed by a full list re-fetch.
//!
//! # Design
//! - I/O lives behind the [`Transport`] trait, injected by the host; the core
//!   itself is deterministic and runtime-free.
//! - Wire DTOs use owned fields and are defined independently of any server
//!   crate; integration tests catch schema drift.
//! - Operations store failures as display strings in the controller's `error`
//!   slot instead of propagating them; any non-2xx is one uniform failure.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use controller::TodoListController;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{CreateTodo, Todo, UpdateTodo};
