//! Post store implementations.

mod query;
mod store;

pub use query::{apply_query, matches_query};
pub use store::LocalPostStore;
