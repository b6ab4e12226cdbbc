//! Security core for Folio.
//!
//! The trust boundary in front of every authenticated mutation: markup
//! sanitization, rule-based field validation, a per-identifier login rate
//! limiter, and a single-slot, time-boxed session manager. The login flow in
//! [`auth`] ties them together.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod headers;
pub mod prelude;
pub mod rate_limit;
pub mod sanitize;
pub mod session;
pub mod validate;

pub use auth::{
	CredentialVerifier, LoginConfig, LoginOutcome, LoginService, StaticCredentialVerifier,
	check_credentials,
};
pub use rate_limit::{RateLimitConfig, RateLimitStatus, RateLimiter};
pub use sanitize::sanitize;
pub use session::{
	ActiveSession, AuthState, MemorySessionAdapter, SessionConfig, SessionEvent, SessionManager,
	SessionRecord, SessionWatcher,
};
pub use validate::{RuleName, RuleSet, ValidationError, ValidationRule, validate};

// vim: ts=4
