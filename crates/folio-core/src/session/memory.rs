//! In-memory session slot storage, lost on restart

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use folio_types::session_adapter::SessionAdapter;

use crate::prelude::*;

#[derive(Debug, Default)]
pub struct MemorySessionAdapter {
	slots: Mutex<HashMap<Box<str>, Box<str>>>,
}

impl MemorySessionAdapter {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl SessionAdapter for MemorySessionAdapter {
	async fn read_slot(&self, key: &str) -> ClResult<Option<Box<str>>> {
		Ok(self.slots.lock().get(key).cloned())
	}

	async fn write_slot(&self, key: &str, value: &str) -> ClResult<()> {
		self.slots.lock().insert(key.into(), value.into());
		Ok(())
	}

	async fn remove_slot(&self, key: &str) -> ClResult<()> {
		self.slots.lock().remove(key);
		Ok(())
	}
}


// vim: ts=4
