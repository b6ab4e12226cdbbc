//! Credential verification

use std::fmt::Debug;

use folio_types::utils::constant_time_eq;

use crate::prelude::*;
use crate::validate::{RuleName, RuleSet, ValidationError};

pub trait CredentialVerifier: Debug + Send + Sync {
	fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one username and password pair
#[derive(Clone)]
pub struct StaticCredentialVerifier {
	username: Box<str>,
	password: Box<str>,
}

impl StaticCredentialVerifier {
	pub fn new(username: impl Into<Box<str>>, password: impl Into<Box<str>>) -> Self {
		Self { username: username.into(), password: password.into() }
	}
}

impl Default for StaticCredentialVerifier {
	fn default() -> Self {
		Self::new("admin", "admin123")
	}
}

impl Debug for StaticCredentialVerifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StaticCredentialVerifier")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

impl CredentialVerifier for StaticCredentialVerifier {
	fn verify(&self, username: &str, password: &str) -> bool {
		// Evaluate both so a wrong username takes as long as a wrong password
		let user_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
		let pass_ok = constant_time_eq(password.as_bytes(), self.password.as_bytes());
		user_ok & pass_ok
	}
}

/// Per-field validation failures of a login form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialErrors {
	pub username: Option<ValidationError>,
	pub password: Option<ValidationError>,
}

/// Runs the login rule sets on both fields
pub fn validate_credentials(
	rules: &RuleSet,
	username: &str,
	password: &str,
) -> Result<(), CredentialErrors> {
	let errors = CredentialErrors {
		username: rules.validate(RuleName::LoginUsername, username).err(),
		password: rules.validate(RuleName::LoginPassword, password).err(),
	};
	if errors.username.is_none() && errors.password.is_none() { Ok(()) } else { Err(errors) }
}

/// Validates both fields, then asks the verifier
pub fn check_credentials(
	rules: &RuleSet,
	verifier: &dyn CredentialVerifier,
	username: &str,
	password: &str,
) -> bool {
	if let Err(errors) = validate_credentials(rules, username, password) {
		debug!("login form rejected: {:?}", errors);
		return false;
	}
	verifier.verify(username, password)
}


// vim: ts=4
