//! Stateful view-model mediating between a presentation layer and the remote
//! todo resource.
//!
//! # Design
//! `TodoListController` owns the last fetched snapshot (`items`) plus the two
//! derived view flags (`is_loading`, `error`) and drives every read and write
//! through an injected [`Transport`]. The server is the single source of
//! truth: every successful mutation is followed by a full list re-fetch, and
//! `items` is only ever replaced wholesale, never patched locally.
//!
//! Operations never return errors to the caller. Each one catches its own
//! failure and stores the display string in `error`, where it stays until the
//! next successful fetch clears it. There is no retry, deduplication, or
//! in-flight cancellation; calls are strictly sequential.

use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Owns the list snapshot and view state; exposes the four operations of the
/// synchronization contract plus read accessors and derived counts.
///
/// Lifecycle: construct with [`new`](Self::new), call [`mount`](Self::mount)
/// once to load the initial list, then invoke operations as the user acts.
#[derive(Debug)]
pub struct TodoListController<T: Transport> {
    client: TodoClient,
    transport: T,
    items: Vec<Todo>,
    is_loading: bool,
    error: Option<String>,
}

impl<T: Transport> TodoListController<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    /// Load the initial list. Equivalent to a first `refresh`.
    pub fn mount(&mut self) {
        self.refresh();
    }

    /// Fetch the full list and replace the local snapshot.
    ///
    /// `is_loading` is true for exactly the duration of this call. On success
    /// the snapshot is replaced and `error` cleared; on failure `error` is set
    /// and the previous snapshot is kept untouched.
    pub fn refresh(&mut self) {
        self.is_loading = true;
        let result = self.fetch_list();
        self.is_loading = false;
        match result {
            Ok(todos) => {
                self.items = todos;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Create a new item from `text` and re-fetch the list.
    ///
    /// Whitespace-only input is a no-op: nothing is sent. The submitted text
    /// is trimmed of surrounding whitespace.
    pub fn create(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        match self.submit_create(text) {
            Ok(()) => self.refresh(),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Flip the completion state of the item with `id` and re-fetch the list.
    ///
    /// The update carries the item's full document: its unchanged text and
    /// the negated completion flag. An id absent from the current snapshot
    /// fails locally (no request) and is reported through `error`.
    pub fn toggle(&mut self, id: Uuid) {
        match self.submit_toggle(id) {
            Ok(()) => self.refresh(),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Delete the item with `id` and re-fetch the list.
    pub fn remove(&mut self, id: Uuid) {
        match self.submit_remove(id) {
            Ok(()) => self.refresh(),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// The last fetched snapshot, in server order.
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// True only while a `refresh` is executing.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last failure message, until the next successful fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    fn fetch_list(&mut self) -> Result<Vec<Todo>, ApiError> {
        let request = self.client.build_list_todos();
        let response = self.transport.execute(request)?;
        self.client.parse_list_todos(response)
    }

    fn submit_create(&mut self, text: &str) -> Result<(), ApiError> {
        let input = CreateTodo {
            text: text.to_string(),
        };
        let request = self.client.build_create_todo(&input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_todo(response)
    }

    fn submit_toggle(&mut self, id: Uuid) -> Result<(), ApiError> {
        let item = self
            .items
            .iter()
            .find(|t| t.id == id)
            .ok_or(ApiError::NotFound(id))?;
        let input = UpdateTodo {
            text: item.text.clone(),
            completed: !item.completed,
        };
        let request = self.client.build_update_todo(id, &input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_update_todo(response)
    }

    fn submit_remove(&mut self, id: Uuid) -> Result<(), ApiError> {
        let request = self.client.build_delete_todo(id);
        let response = self.transport.execute(request)?;
        self.client.parse_delete_todo(response)
    }
}
