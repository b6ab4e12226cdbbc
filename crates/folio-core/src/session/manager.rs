//! Session manager
//!
//! Reads and writes go through the adapter as whole records, so a reader sees
//! either the previous session or the new one. Reads never fail: a missing,
//! malformed or expired record, and any storage error, all mean "no session".

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use folio_types::clock::{Clock, SystemClock};
use folio_types::session_adapter::{SESSION_SLOT, SessionAdapter};
use folio_types::utils::{constant_time_eq, random_string};

use crate::prelude::*;

const TOKEN_LENGTH: usize = 32;

/// The persisted form of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
	pub token: Box<str>,
	pub created_at: Timestamp,
	pub expires_at: Timestamp,
}

impl SessionRecord {
	pub fn parse(data: &str) -> ClResult<Self> {
		serde_json::from_str(data).map_err(|_| Error::MalformedSession)
	}

	pub fn is_valid_at(&self, now: Timestamp) -> bool {
		now < self.expires_at
	}
}

/// A session that was valid when it was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
	pub token: Box<str>,
	pub is_valid: bool,
	pub created_at: Timestamp,
	pub expires_at: Timestamp,
}

impl From<SessionRecord> for ActiveSession {
	fn from(record: SessionRecord) -> Self {
		Self {
			token: record.token,
			is_valid: true,
			created_at: record.created_at,
			expires_at: record.expires_at,
		}
	}
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
	/// Lifetime of sessions created by `issue_session`
	pub ttl: Duration,
	/// Default threshold for `is_expiring_soon`
	pub expiring_soon_threshold: Duration,
	/// Adapter slot holding the record
	pub slot: Box<str>,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			ttl: Duration::from_secs(3600),
			expiring_soon_threshold: Duration::from_secs(5 * 60),
			slot: SESSION_SLOT.into(),
		}
	}
}

#[derive(Debug)]
pub struct SessionManager {
	adapter: Arc<dyn SessionAdapter>,
	clock: Arc<dyn Clock>,
	config: SessionConfig,
	/// Held across read-then-clear and across writes, so lazy expiry never
	/// removes a record written after the expired one was read
	slot_lock: tokio::sync::Mutex<()>,
}

impl SessionManager {
	pub fn new(adapter: Arc<dyn SessionAdapter>, config: SessionConfig) -> Self {
		Self::with_clock(adapter, config, Arc::new(SystemClock))
	}

	pub fn with_clock(
		adapter: Arc<dyn SessionAdapter>,
		config: SessionConfig,
		clock: Arc<dyn Clock>,
	) -> Self {
		Self { adapter, clock, config, slot_lock: tokio::sync::Mutex::new(()) }
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	pub fn now(&self) -> Timestamp {
		self.clock.now()
	}

	/// Stores a session for `token`, replacing any previous one
	pub async fn set_secure_session(
		&self,
		token: &str,
		expires_in: Duration,
	) -> ClResult<SessionRecord> {
		let now = self.clock.now();
		let record =
			SessionRecord { token: token.into(), created_at: now, expires_at: now.plus(expires_in) };
		let data = serde_json::to_string(&record)?;
		let _guard = self.slot_lock.lock().await;
		self.adapter.write_slot(&self.config.slot, &data).await?;
		debug!("session stored, expires at {}", record.expires_at);
		Ok(record)
	}

	/// Creates a session with a fresh random token and the configured lifetime
	pub async fn issue_session(&self) -> ClResult<SessionRecord> {
		let token = random_string(TOKEN_LENGTH);
		self.set_secure_session(&token, self.config.ttl).await
	}

	/// Returns the current session if there is a valid one.
	///
	/// Clears the slot when the record is malformed or expired.
	pub async fn get_session(&self) -> Option<ActiveSession> {
		let _guard = self.slot_lock.lock().await;
		let data = match self.adapter.read_slot(&self.config.slot).await {
			Ok(Some(data)) => data,
			Ok(None) => return None,
			Err(err) => {
				warn!("failed to read session slot: {}", err);
				return None;
			}
		};

		let record = match SessionRecord::parse(&data) {
			Ok(record) => record,
			Err(err) => {
				warn!("discarding session: {}", err);
				self.discard().await;
				return None;
			}
		};

		if !record.is_valid_at(self.clock.now()) {
			info!("session expired at {}", record.expires_at);
			self.discard().await;
			return None;
		}

		Some(record.into())
	}

	/// Removes the session. Clearing an empty slot is fine.
	pub async fn clear_session(&self) -> ClResult<()> {
		let _guard = self.slot_lock.lock().await;
		self.adapter.remove_slot(&self.config.slot).await
	}

	/// Caller holds `slot_lock`
	async fn discard(&self) {
		if let Err(err) = self.adapter.remove_slot(&self.config.slot).await {
			warn!("failed to clear session slot: {}", err);
		}
	}

	/// Time left until `session` expires
	pub fn time_left(&self, session: &ActiveSession) -> Duration {
		self.clock.now().until(session.expires_at)
	}

	/// True iff a valid session exists and expires within `threshold`
	pub async fn is_session_expiring_soon(&self, threshold: Duration) -> bool {
		match self.get_session().await {
			Some(session) => self.time_left(&session) < threshold,
			None => false,
		}
	}

	/// [`is_session_expiring_soon`](Self::is_session_expiring_soon) with the configured threshold
	pub async fn is_expiring_soon(&self) -> bool {
		self.is_session_expiring_soon(self.config.expiring_soon_threshold).await
	}

	/// Returns the current session if `token` is its token
	pub async fn verify_token(&self, token: &str) -> ClResult<ActiveSession> {
		let session = self.get_session().await.ok_or(Error::SessionExpired)?;
		if !constant_time_eq(session.token.as_bytes(), token.as_bytes()) {
			debug!("bearer token does not match the current session");
			return Err(Error::SessionExpired);
		}
		Ok(session)
	}
}


// vim: ts=4
