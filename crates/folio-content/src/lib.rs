//! Portfolio content for Folio.
//!
//! [`ContentService`] is the only way user input reaches the content
//! adapter: every free-form field is sanitized and validated on the way in.
//! Listing helpers for the public showcase and the admin dashboard live in
//! [`filter`] and [`stats`].

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod filter;
pub mod prelude;
pub mod service;
pub mod stats;

pub use filter::{ProjectFilter, filter_projects};
pub use service::ContentService;
pub use stats::{CategoryCount, DashboardStats, dashboard_stats};

// vim: ts=4
