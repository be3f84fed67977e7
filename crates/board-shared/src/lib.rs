//! # Board Shared
//!
//! Request/response shapes of the post board API.
//! Kept free of domain logic so any client of the API can depend on it.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, ListResponse};
