//! Request plumbing shared by the handlers

pub mod extract;
pub mod middleware;

pub use extract::{Auth, ClientId};

// vim: ts=4
