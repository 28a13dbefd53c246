//! # Cadence Shared
//!
//! Wire types exchanged between the API server and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
