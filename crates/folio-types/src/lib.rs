//! Shared types, adapter traits, and core utilities for Folio.
//!
//! Everything the security core, the content service and the adapters have to
//! agree on lives here, so adapter crates do not depend on the server.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod content_adapter;
pub mod error;
pub mod prelude;
pub mod session_adapter;
pub mod types;
pub mod utils;

// vim: ts=4
