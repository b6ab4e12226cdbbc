//! Folio HTTP server
//!
//! Wires the security core and the content service into an axum router.
//! [`AppBuilder`] collects configuration and adapters, then builds the shared
//! [`AppState`] and serves it.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod auth;
pub mod content;
pub mod core;
pub mod prelude;
pub mod routes;

pub use app::{App, AppBuilder, AppState};

// vim: ts=4
