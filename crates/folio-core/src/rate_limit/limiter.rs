//! Failed-attempt tracking per identifier.
//!
//! Entries live in a bounded LRU map. Each entry counts failures since its
//! last reset together with the time of the most recent one:
//!
//! - unknown identifier: a fresh entry is created, full quota
//! - entry idle for longer than `window`: reset, full quota
//! - `count >= max_attempts` and blocked for less than `block_duration`: blocked
//! - `count >= max_attempts` and the block has run out: reset, full quota
//! - otherwise `max_attempts - count` attempts remain
//!
//! The idle check runs before the block check, so an identifier is never held
//! longer than `window` after its last failure, even with a longer block
//! duration configured.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;

use folio_types::clock::{Clock, SystemClock};
use lru::LruCache;
use parking_lot::Mutex;

use super::config::RateLimitConfig;
use crate::prelude::*;

/// Result of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitStatus {
	Allowed {
		remaining_attempts: u32,
	},
	Blocked {
		/// Whole minutes left, rounded up
		block_time_remaining: u32,
	},
}

impl RateLimitStatus {
	pub fn is_allowed(&self) -> bool {
		matches!(self, RateLimitStatus::Allowed { .. })
	}

	pub fn remaining_attempts(&self) -> u32 {
		match self {
			RateLimitStatus::Allowed { remaining_attempts } => *remaining_attempts,
			RateLimitStatus::Blocked { .. } => 0,
		}
	}
}

#[derive(Debug, Clone, Copy)]
struct AttemptEntry {
	count: u32,
	last_attempt: Timestamp,
}

impl AttemptEntry {
	fn fresh(now: Timestamp) -> Self {
		Self { count: 0, last_attempt: now }
	}
}

/// Login rate limiter
#[derive(Debug)]
pub struct RateLimiter {
	config: RateLimitConfig,
	entries: Mutex<LruCache<Box<str>, AttemptEntry>>,
	stripes: Box<[tokio::sync::Mutex<()>]>,
	clock: Arc<dyn Clock>,
}

impl RateLimiter {
	pub fn new(config: RateLimitConfig) -> Self {
		Self::with_clock(config, Arc::new(SystemClock))
	}

	pub fn with_clock(config: RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
		// SAFETY: non-zero constant
		const TEN_THOUSAND: NonZeroUsize = match NonZeroUsize::new(10_000) {
			Some(v) => v,
			None => unreachable!(),
		};
		let capacity = NonZeroUsize::new(config.max_tracked).unwrap_or(TEN_THOUSAND);
		let stripes = (0..config.lock_stripes.max(1)).map(|_| tokio::sync::Mutex::new(())).collect();

		Self { config, entries: Mutex::new(LruCache::new(capacity)), stripes, clock }
	}

	pub fn config(&self) -> &RateLimitConfig {
		&self.config
	}

	/// Checks whether `id` may attempt a login right now
	pub fn check_rate_limit(&self, id: &str) -> RateLimitStatus {
		let now = self.clock.now();
		let max = self.config.max_attempts;
		let mut entries = self.entries.lock();

		let Some(entry) = entries.get_mut(id) else {
			entries.put(id.into(), AttemptEntry::fresh(now));
			return RateLimitStatus::Allowed { remaining_attempts: max };
		};

		if now.since(entry.last_attempt) > self.config.window {
			*entry = AttemptEntry::fresh(now);
			return RateLimitStatus::Allowed { remaining_attempts: max };
		}

		if entry.count >= max {
			let blocked_for = now.since(entry.last_attempt);
			if let Some(left) = self.config.block_duration.checked_sub(blocked_for) {
				if !left.is_zero() {
					let minutes = left.as_millis().div_ceil(60_000);
					return RateLimitStatus::Blocked {
						block_time_remaining: u32::try_from(minutes).unwrap_or(u32::MAX),
					};
				}
			}
			debug!("rate limit block elapsed for {}", id);
			*entry = AttemptEntry::fresh(now);
			return RateLimitStatus::Allowed { remaining_attempts: max };
		}

		RateLimitStatus::Allowed { remaining_attempts: max - entry.count }
	}

	/// Records the outcome of a login attempt for `id`
	pub fn record_attempt(&self, id: &str, success: bool) {
		let mut entries = self.entries.lock();
		if success {
			entries.pop(id);
			return;
		}

		let now = self.clock.now();
		let entry = entries.get_or_insert_mut(id.into(), || AttemptEntry::fresh(now));
		entry.count = entry.count.saturating_add(1);
		entry.last_attempt = now;
		if entry.count >= self.config.max_attempts {
			warn!("login blocked for {} after {} failed attempts", id, entry.count);
		}
	}

	/// Acquires the critical section for `id`.
	///
	/// Identifiers are hashed onto a fixed set of async mutexes. Holding the
	/// guard across a check and the matching record makes the pair atomic with
	/// respect to other attempts from the same identifier.
	pub async fn lock(&self, id: &str) -> tokio::sync::MutexGuard<'_, ()> {
		let mut hasher = DefaultHasher::new();
		id.hash(&mut hasher);
		let idx = (hasher.finish() % self.stripes.len() as u64) as usize;
		self.stripes[idx].lock().await
	}

	/// Number of identifiers currently tracked
	pub fn tracked(&self) -> usize {
		self.entries.lock().len()
	}
}

impl Default for RateLimiter {
	fn default() -> Self {
		Self::new(RateLimitConfig::default())
	}
}


// vim: ts=4
