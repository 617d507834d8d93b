//! List query types
//!
//! - `filter`: sparse filter mapping serialized into the query string
//! - `page`: client-side pagination over a fetched list
//! - `resource`: the listing endpoints and their typed filters

pub mod filter;
pub mod page;
pub mod resource;

pub use filter::ListFilter;
pub use page::{Page, Pager};
pub use resource::{
    HistoryFilter, ListResource, MenuFilter, OrderFilter, ReservationFilter, ReviewFilter,
};
