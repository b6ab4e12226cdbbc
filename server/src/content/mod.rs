//! Portfolio content endpoints
//!
//! Reads are public, everything that changes content goes through the
//! session middleware.

pub mod category;
pub mod project;
pub mod settings;

// vim: ts=4
