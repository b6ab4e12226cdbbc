//! Login flow tests
//!
//! Drives the rate limiter, session manager and verifier together through
//! `LoginService`, with a manual clock for deterministic expiry.

#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use folio_core::{
	LoginConfig, LoginOutcome, LoginService, MemorySessionAdapter, RateLimitConfig,
	RateLimitStatus, RateLimiter, RuleSet, SessionConfig, SessionManager,
	StaticCredentialVerifier,
};
use folio_types::clock::{Clock, ManualClock};
use folio_types::types::Timestamp;

const MINUTE: Duration = Duration::from_secs(60);

fn create_service() -> (Arc<LoginService>, ManualClock) {
	let clock = ManualClock::new(Timestamp(1_700_000_000_000));
	let limiter = RateLimiter::with_clock(RateLimitConfig::default(), Arc::new(clock.clone()));
	let sessions = SessionManager::with_clock(
		Arc::new(MemorySessionAdapter::new()),
		SessionConfig::default(),
		Arc::new(clock.clone()),
	);
	let service = LoginService::new(
		Arc::new(RuleSet::standard().expect("Failed to build rule set")),
		Arc::new(limiter),
		Arc::new(sessions),
		Arc::new(StaticCredentialVerifier::default()),
		LoginConfig::without_delay(),
	);
	(Arc::new(service), clock)
}

#[tokio::test]
async fn test_default_admin_login() {
	let (service, clock) = create_service();

	let outcome = service.login("127.0.0.1", "admin", "admin123").await.unwrap();
	let LoginOutcome::Success { session } = outcome else {
		panic!("expected success, got {:?}", outcome);
	};
	assert_eq!(session.created_at, clock.now());
	assert_eq!(session.created_at.until(session.expires_at), Duration::from_secs(3600));

	let active = service.sessions().get_session().await.expect("session should exist");
	assert_eq!(active.token, session.token);
	assert!(!service.sessions().is_session_expiring_soon(MINUTE * 5).await);
}

#[tokio::test]
async fn test_session_expires_after_an_hour() {
	let (service, clock) = create_service();
	assert!(service.login("ip", "admin", "admin123").await.unwrap().is_success());

	clock.advance(MINUTE * 56);
	assert!(service.sessions().is_session_expiring_soon(MINUTE * 5).await);

	clock.advance(MINUTE * 4);
	assert!(service.sessions().get_session().await.is_none());
}

#[tokio::test]
async fn test_five_failures_block_for_thirty_minutes() {
	let (service, _clock) = create_service();
	for _ in 0..5 {
		let outcome = service.login("ip", "admin", "not-the-password").await.unwrap();
		assert!(matches!(outcome, LoginOutcome::Rejected { .. }), "{:?}", outcome);
	}

	assert_eq!(
		service.limiter().check_rate_limit("ip"),
		RateLimitStatus::Blocked { block_time_remaining: 30 }
	);
	// Another caller is unaffected
	assert!(service.login("other", "admin", "admin123").await.unwrap().is_success());
}

#[tokio::test]
async fn test_success_resets_failures() {
	let (service, _clock) = create_service();
	for _ in 0..3 {
		service.login("ip", "admin", "not-the-password").await.unwrap();
	}
	assert!(service.login("ip", "admin", "admin123").await.unwrap().is_success());
	assert_eq!(
		service.limiter().check_rate_limit("ip"),
		RateLimitStatus::Allowed { remaining_attempts: 5 }
	);
}

#[tokio::test]
async fn test_old_failures_are_forgotten() {
	let (service, clock) = create_service();
	for _ in 0..4 {
		service.login("ip", "admin", "not-the-password").await.unwrap();
	}
	clock.advance(MINUTE * 15 + Duration::from_secs(1));
	let outcome = service.login("ip", "admin", "not-the-password").await.unwrap();
	assert_eq!(outcome, LoginOutcome::Rejected { remaining_attempts: 4, low_attempts: false });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_attempts_cannot_exceed_limit() {
	let (service, _clock) = create_service();

	let mut handles = vec![];
	for _ in 0..20 {
		let service = Arc::clone(&service);
		handles.push(tokio::spawn(async move {
			service.login("ip", "admin", "not-the-password").await.unwrap()
		}));
	}

	let mut rejected = 0;
	let mut blocked = 0;
	for handle in handles {
		match handle.await.expect("Task panicked") {
			LoginOutcome::Rejected { .. } => rejected += 1,
			LoginOutcome::Blocked { .. } => blocked += 1,
			other => panic!("unexpected outcome {:?}", other),
		}
	}
	assert_eq!(rejected, 5);
	assert_eq!(blocked, 15);
}

// vim: ts=4
