//! Keeps a [`TodoState`] in sync with the server.
//!
//! # Design
//! Each operation is one sequential round trip: emit `Started`, build the
//! request, execute it, parse the response, emit exactly one completion
//! event. State changes only after the response arrives; nothing is applied
//! optimistically and nothing is retried. Failures land in the state's
//! error slot as `"<operation message>: <cause>"`.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::state::{Event, TodoState};
use crate::transport::Transport;
use crate::types::{CreateTodo, TodoId, UpdateTodo};
use crate::view::TodoView;

pub const FETCH_FAILED: &str = "Failed to fetch tasks";
pub const ADD_FAILED: &str = "Failed to add task";
pub const UPDATE_FAILED: &str = "Failed to update task";
pub const DELETE_FAILED: &str = "Failed to delete task";

pub struct TodoController<T> {
    client: TodoClient,
    transport: T,
    state: TodoState,
}

impl<T: Transport> TodoController<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            state: TodoState::new(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn view(&self) -> TodoView {
        TodoView::from_state(&self.state)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.dispatch(Event::DraftChanged(text.into()));
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(Event::ErrorDismissed);
    }

    /// Replace the task list with the server's.
    pub fn refresh(&mut self) {
        self.round_trip(
            FETCH_FAILED,
            |client, transport| {
                let response = transport.execute(client.build_list_todos())?;
                client.parse_list_todos(response)
            },
            Event::Refreshed,
        );
    }

    /// Create a todo from the draft. Does nothing when the draft is blank.
    pub fn add(&mut self) {
        if !self.state.can_add() {
            return;
        }
        let input = CreateTodo::new(self.state.draft_text());
        self.round_trip(
            ADD_FAILED,
            |client, transport| {
                let response = transport.execute(client.build_create_todo(&input)?)?;
                client.parse_create_todo(response)
            },
            Event::Added,
        );
    }

    /// Flip `completed` on the task with `id`, using the locally known value.
    pub fn toggle(&mut self, id: &TodoId) {
        let Some(task) = self.state.find(id) else {
            debug!(%id, "toggle ignored, task not in list");
            return;
        };
        let input = UpdateTodo::completed(!task.completed);
        self.round_trip(
            UPDATE_FAILED,
            |client, transport| {
                let response = transport.execute(client.build_update_todo(id, &input)?)?;
                client.parse_update_todo(response)
            },
            Event::Toggled,
        );
    }

    pub fn remove(&mut self, id: &TodoId) {
        self.round_trip(
            DELETE_FAILED,
            |client, transport| {
                let response = transport.execute(client.build_delete_todo(id))?;
                client.parse_delete_todo(response)
            },
            |()| Event::Removed(id.clone()),
        );
    }

    fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(event);
    }

    /// Hold `loading` for the duration of `call`, then record its outcome.
    fn round_trip<R>(
        &mut self,
        failure: &str,
        call: impl FnOnce(&TodoClient, &T) -> Result<R, ApiError>,
        on_success: impl FnOnce(R) -> Event,
    ) {
        self.dispatch(Event::Started);
        let event = match call(&self.client, &self.transport) {
            Ok(value) => on_success(value),
            Err(err) => {
                warn!(error = %err, "{failure}");
                Event::Failed(format!("{failure}: {err}"))
            }
        };
        self.dispatch(event);
    }
}
