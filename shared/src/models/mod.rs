//! Data models
//!
//! Wire types of the restaurant backend. Field names follow the backend's
//! JSON (Spanish); Rust field names are renamed through serde.
//! Read models are tolerant (defaults for missing fields), create payloads
//! are validated in their constructors.

pub mod history;
pub mod menu_item;
pub mod order;
pub mod preferences;
pub mod reservation;
pub mod review;
pub mod serde_helpers;

// Re-exports
pub use history::*;
pub use menu_item::*;
pub use order::*;
pub use preferences::*;
pub use reservation::*;
pub use review::*;
