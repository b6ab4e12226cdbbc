//! Periodic session check
//!
//! Polls the session manager on a fixed interval. When the session has gone
//! away while the owner still believes it is logged in, the auth flag is
//! cleared and [`SessionEvent::Expired`] is sent. While a valid session is
//! close to expiry, every check sends [`SessionEvent::ExpiringSoon`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::manager::SessionManager;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
	Expired,
	ExpiringSoon { remaining: Duration },
}

/// Shared "logged in" flag of a session owner
#[derive(Debug, Clone, Default)]
pub struct AuthState(Arc<AtomicBool>);

impl AuthState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_authenticated(&self) -> bool {
		self.0.load(Ordering::SeqCst)
	}

	pub fn set_authenticated(&self, value: bool) {
		self.0.store(value, Ordering::SeqCst);
	}
}

/// Handle of a running session check loop. Dropping it stops the loop.
#[derive(Debug)]
pub struct SessionWatcher {
	cancel: CancellationToken,
	handle: Option<JoinHandle<()>>,
}

impl SessionWatcher {
	/// Starts checking every `period`, the first check runs immediately
	pub fn spawn(
		sessions: Arc<SessionManager>,
		auth: AuthState,
		period: Duration,
	) -> (Self, flume::Receiver<SessionEvent>) {
		let cancel = CancellationToken::new();
		let cancel_clone = cancel.clone();
		let (tx, rx) = flume::unbounded();

		let handle = tokio::spawn(async move {
			let mut ticker = tokio::time::interval(period);
			ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

			loop {
				tokio::select! {
					() = cancel_clone.cancelled() => break,
					_ = ticker.tick() => {}
				}

				let Some(event) = check_session(&sessions, &auth).await else {
					continue;
				};
				if tx.send(event).is_err() {
					debug!("session event receiver gone, stopping watcher");
					break;
				}
			}
		});

		(Self { cancel, handle: Some(handle) }, rx)
	}

	pub fn cancel(&self) {
		self.cancel.cancel();
	}

	/// Cancels the loop and waits for it to finish
	pub async fn stop(mut self) {
		self.cancel.cancel();
		if let Some(handle) = self.handle.take() {
			if let Err(err) = handle.await {
				warn!("session watcher task failed: {}", err);
			}
		}
	}
}

impl Drop for SessionWatcher {
	fn drop(&mut self) {
		self.cancel.cancel();
	}
}

async fn check_session(sessions: &SessionManager, auth: &AuthState) -> Option<SessionEvent> {
	match sessions.get_session().await {
		None if auth.is_authenticated() => {
			info!("session expired, logging out");
			auth.set_authenticated(false);
			Some(SessionEvent::Expired)
		}
		None => None,
		Some(session) => {
			let remaining = sessions.time_left(&session);
			(remaining < sessions.config().expiring_soon_threshold)
				.then_some(SessionEvent::ExpiringSoon { remaining })
		}
	}
}


// vim: ts=4
