//! Mesa Client - typed client for the restaurant operations backend
//!
//! Provides the HTTP transport, the typed REST API, the reservation gate
//! and the list screens' state machines used by the `mesa` CLI.

pub mod api;
pub mod config;
pub mod error;
pub mod gate;
pub mod http;
pub mod logger;
pub mod view;

pub use api::ApiClient;
pub use config::{ClientConfig, LogConfig};
pub use error::{ClientError, ClientResult, TABLE_UNAVAILABLE_MESSAGE, write_outcome};
pub use gate::ReservationGate;
pub use http::{HttpClient, NetworkHttpClient};
pub use view::{FetchTicket, Form, ListView, Screen, ViewState};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{ListFilter, ListResource, OrderComposer};
