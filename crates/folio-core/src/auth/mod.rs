//! Admin login
//!
//! Credentials are validated against the login rule sets, then checked by a
//! [`CredentialVerifier`]. [`LoginService`] wraps that check in rate limiting
//! and issues a session on success.

pub mod login;
pub mod verifier;

pub use login::{LoginConfig, LoginOutcome, LoginService};
pub use verifier::{CredentialVerifier, StaticCredentialVerifier, check_credentials};

// vim: ts=4
