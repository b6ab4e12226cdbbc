//! Adapter that holds the client-side session slot.
//!
//! The slot is a named entry in durable key/value storage holding one
//! serialized session record. Implementations must replace the whole value
//! atomically: readers never observe a partially written record.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// Name of the slot the session manager uses
pub const SESSION_SLOT: &str = "secure_session";

#[async_trait]
pub trait SessionAdapter: Debug + Send + Sync {
	/// Reads a slot, `None` if it was never written or has been removed
	async fn read_slot(&self, key: &str) -> ClResult<Option<Box<str>>>;

	/// Overwrites a slot
	async fn write_slot(&self, key: &str, value: &str) -> ClResult<()>;

	/// Removes a slot. Removing a missing slot is not an error.
	async fn remove_slot(&self, key: &str) -> ClResult<()>;
}

// vim: ts=4
