//! Client-side state container.
//!
//! # Design
//! `TodoState` is only ever replaced by [`TodoState::reduce`], a pure
//! function of the previous state and one [`Event`]. The controller emits
//! `Started` before a request and exactly one completion event after it, so
//! `loading` is released whatever the outcome.

use crate::types::{Todo, TodoId};

/// Something that happened to the client session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The input field changed.
    DraftChanged(String),
    /// A request was dispatched.
    Started,
    /// The list request succeeded.
    Refreshed(Vec<Todo>),
    /// The create request succeeded with the server's record.
    Added(Todo),
    /// The update request succeeded with the server's record.
    Toggled(Todo),
    /// The delete request succeeded.
    Removed(TodoId),
    /// A request failed; carries the message to show.
    Failed(String),
    /// The user closed the error banner.
    ErrorDismissed,
}

/// Last known server state plus transient UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    tasks: Vec<Todo>,
    draft_text: String,
    loading: bool,
    error: Option<String>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Todo>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Todo] {
        &self.tasks
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Number of tasks not yet completed.
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// True when the draft holds something worth sending.
    pub fn can_add(&self) -> bool {
        !self.draft_text.trim().is_empty()
    }

    #[must_use]
    pub fn reduce(mut self, event: Event) -> Self {
        match event {
            Event::DraftChanged(text) => self.draft_text = text,
            Event::Started => self.loading = true,
            Event::Refreshed(tasks) => {
                self.tasks = tasks;
                self.succeed();
            }
            Event::Added(todo) => {
                self.tasks.push(todo);
                self.draft_text.clear();
                self.succeed();
            }
            Event::Toggled(todo) => {
                if let Some(slot) = self.tasks.iter_mut().find(|task| task.id == todo.id) {
                    *slot = todo;
                }
                self.succeed();
            }
            Event::Removed(id) => {
                self.tasks.retain(|task| task.id != id);
                self.succeed();
            }
            Event::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            Event::ErrorDismissed => self.error = None,
        }
        self
    }

    fn succeed(&mut self) {
        self.loading = false;
        self.error = None;
    }
}
