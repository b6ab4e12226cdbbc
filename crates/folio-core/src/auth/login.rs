//! Rate-limited login flow

use rand::RngExt;
use std::sync::Arc;
use std::time::Duration;

use super::verifier::{CredentialErrors, CredentialVerifier, validate_credentials};
use crate::prelude::*;
use crate::rate_limit::{RateLimitStatus, RateLimiter};
use crate::session::{SessionManager, SessionRecord};
use crate::validate::RuleSet;

#[derive(Debug, Clone)]
pub struct LoginConfig {
	/// Lower bound of the random delay before credentials are checked
	pub delay_min: Duration,
	/// Upper bound of the random delay
	pub delay_max: Duration,
	/// Failed logins warn once fewer attempts than this remain
	pub low_attempts_warning: u32,
}

impl Default for LoginConfig {
	fn default() -> Self {
		Self {
			delay_min: Duration::from_secs(1),
			delay_max: Duration::from_secs(2),
			low_attempts_warning: 3,
		}
	}
}

impl LoginConfig {
	/// No artificial delay, for tests and local tooling
	pub fn without_delay() -> Self {
		Self { delay_min: Duration::ZERO, delay_max: Duration::ZERO, ..Self::default() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
	Success {
		session: SessionRecord,
	},
	/// Wrong username or password
	Rejected {
		remaining_attempts: u32,
		/// Few enough attempts left that the caller should be warned
		low_attempts: bool,
	},
	/// Too many failures, nothing was checked
	Blocked {
		block_time_remaining: u32,
	},
	/// The form failed validation, no attempt was recorded
	Invalid(CredentialErrors),
}

impl LoginOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, LoginOutcome::Success { .. })
	}
}

#[derive(Debug)]
pub struct LoginService {
	rules: Arc<RuleSet>,
	limiter: Arc<RateLimiter>,
	sessions: Arc<SessionManager>,
	verifier: Arc<dyn CredentialVerifier>,
	config: LoginConfig,
}

impl LoginService {
	pub fn new(
		rules: Arc<RuleSet>,
		limiter: Arc<RateLimiter>,
		sessions: Arc<SessionManager>,
		verifier: Arc<dyn CredentialVerifier>,
		config: LoginConfig,
	) -> Self {
		Self { rules, limiter, sessions, verifier, config }
	}

	pub fn sessions(&self) -> &Arc<SessionManager> {
		&self.sessions
	}

	pub fn limiter(&self) -> &Arc<RateLimiter> {
		&self.limiter
	}

	/// Runs one login attempt for the caller identified by `identifier`.
	///
	/// The identifier's lock is held from the rate limit check until the
	/// outcome is recorded, so concurrent attempts from one caller cannot
	/// slip past the limit.
	pub async fn login(
		&self,
		identifier: &str,
		username: &str,
		password: &str,
	) -> ClResult<LoginOutcome> {
		let _guard = self.limiter.lock(identifier).await;

		if let RateLimitStatus::Blocked { block_time_remaining } =
			self.limiter.check_rate_limit(identifier)
		{
			info!("login blocked for {}, {} minutes left", identifier, block_time_remaining);
			return Ok(LoginOutcome::Blocked { block_time_remaining });
		}

		if let Err(errors) = validate_credentials(&self.rules, username, password) {
			debug!("login form invalid for {}", identifier);
			return Ok(LoginOutcome::Invalid(errors));
		}

		self.auth_delay().await;

		let success = self.verifier.verify(username, password);
		self.limiter.record_attempt(identifier, success);

		if success {
			let session = self.sessions.issue_session().await?;
			info!("login succeeded for {}", identifier);
			return Ok(LoginOutcome::Success { session });
		}

		// Once the caller is blocked there is nothing left to warn about
		let (remaining_attempts, low_attempts) = match self.limiter.check_rate_limit(identifier) {
			RateLimitStatus::Allowed { remaining_attempts } => {
				(remaining_attempts, remaining_attempts < self.config.low_attempts_warning)
			}
			RateLimitStatus::Blocked { .. } => (0, false),
		};
		warn!("login failed for {}, {} attempts left", identifier, remaining_attempts);
		Ok(LoginOutcome::Rejected { remaining_attempts, low_attempts })
	}

	pub async fn logout(&self) -> ClResult<()> {
		info!("logout");
		self.sessions.clear_session().await
	}

	async fn auth_delay(&self) {
		let LoginConfig { delay_min, delay_max, .. } = self.config;
		let delay = if delay_max > delay_min {
			let min = delay_min.as_millis() as u64;
			let max = delay_max.as_millis() as u64;
			Duration::from_millis(rand::rng().random_range(min..=max))
		} else {
			delay_min
		};
		if !delay.is_zero() {
			tokio::time::sleep(delay).await;
		}
	}
}


// vim: ts=4
