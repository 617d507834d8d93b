//! Order composition
//!
//! - `composer`: in-memory line selection and derived total
//! - `money`: decimal helpers for line and order totals

pub mod composer;
pub mod money;

pub use composer::{LineId, OrderComposer, OrderLine};
