//! Time source abstraction.
//!
//! The rate limiter and the session manager read the current time through
//! [`Clock`] so tests can drive expiry deterministically with [`ManualClock`].

use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use crate::types::{self, Timestamp};

pub trait Clock: Send + Sync + Debug {
	fn now(&self) -> Timestamp;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Timestamp {
		types::now()
	}
}

/// Clock that only moves when told to.
///
/// Clones share the same time value, so a test can hand one clone to the
/// component under test and advance the other.
#[derive(Debug, Clone)]
pub struct ManualClock {
	current: Arc<AtomicI64>,
}

impl ManualClock {
	pub fn new(start: Timestamp) -> Self {
		Self { current: Arc::new(AtomicI64::new(start.0)) }
	}

	pub fn advance(&self, duration: Duration) {
		let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
		self.current.fetch_add(millis, Ordering::SeqCst);
	}

	pub fn set(&self, ts: Timestamp) {
		self.current.store(ts.0, Ordering::SeqCst);
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Timestamp {
		Timestamp(self.current.load(Ordering::SeqCst))
	}
}


// vim: ts=4
