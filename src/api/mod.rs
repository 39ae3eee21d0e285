//! HTTP surface of the service

pub mod dogs;
pub mod error_response;
pub mod routes;
pub mod walks;

pub use routes::{router, AppState};
