//! Shared types for the Mesa restaurant client
//!
//! Wire models served by the restaurant backend, the order composer,
//! list filters and client-side pagination. Nothing in this crate performs I/O.

pub mod error;
pub mod intent;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{DomainError, DomainResult};
pub use intent::{ListFilter, ListResource, Page, Pager};
pub use order::{LineId, OrderComposer};
