//! Client side of the todo service.
//!
//! # Overview
//! [`TodoClient`] builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern). A
//! [`Transport`] executes the round trip; [`UreqTransport`] is the blocking
//! implementation used by the terminal frontend.
//!
//! On top of that, [`TodoController`] keeps a [`TodoState`] in sync with the
//! server, and [`TodoView`] derives everything a frontend needs to draw.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - `TodoState` changes only through the pure [`TodoState::reduce`], fed
//!   with [`Event`]s the controller produces after each call completes.
//! - DTOs are defined independently from the server crate; the integration
//!   test runs the real server to catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod state;
pub mod transport;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use controller::TodoController;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{Event, TodoState};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateTodo, HealthStatus, Todo, TodoId, UpdateTodo};
pub use view::{ListBody, Remaining, RowView, TodoView};
