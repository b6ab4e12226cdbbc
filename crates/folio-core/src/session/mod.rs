//! Single-slot session management
//!
//! One session exists at a time. It is stored as a JSON record in a named
//! slot of a [`SessionAdapter`](folio_types::session_adapter::SessionAdapter)
//! and expires lazily: the first read after `expires_at` clears the slot.

pub mod manager;
pub mod memory;
pub mod watcher;

pub use manager::{ActiveSession, SessionConfig, SessionManager, SessionRecord};
pub use memory::MemorySessionAdapter;
pub use watcher::{AuthState, SessionEvent, SessionWatcher};

// vim: ts=4
