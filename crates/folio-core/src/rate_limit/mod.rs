//! Login rate limiting
//!
//! Counts failed login attempts per caller identifier. After `max_attempts`
//! failures inside the tracking window the identifier is blocked for
//! `block_duration`. A successful login forgets the identifier entirely.

pub mod config;
pub mod limiter;

pub use config::RateLimitConfig;
pub use limiter::{RateLimitStatus, RateLimiter};

// vim: ts=4
