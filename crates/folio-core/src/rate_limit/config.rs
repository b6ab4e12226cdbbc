//! Rate limiter configuration

use std::time::Duration;

/// Login rate limit configuration
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
	/// Failed attempts allowed before the identifier is blocked
	pub max_attempts: u32,
	/// An entry untouched for longer than this starts over
	pub window: Duration,
	/// How long a blocked identifier stays blocked
	pub block_duration: Duration,
	/// Maximum number of identifiers to track (memory limit)
	pub max_tracked: usize,
	/// Number of async mutexes identifiers are hashed onto
	pub lock_stripes: usize,
}

impl Default for RateLimitConfig {
	fn default() -> Self {
		Self {
			max_attempts: 5,
			window: Duration::from_secs(15 * 60),
			block_duration: Duration::from_secs(30 * 60),
			max_tracked: 10_000,
			lock_stripes: 64,
		}
	}
}

// vim: ts=4
