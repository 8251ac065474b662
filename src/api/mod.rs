//! HTTP API: routing, state and handlers.

pub mod catalog;
pub mod geoip;
pub mod routes;
pub mod shortlink;
pub mod tools;

pub use routes::{router, serve, AppState};
