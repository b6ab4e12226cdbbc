//! Admin login, logout and session status

pub mod handler;

// vim: ts=4
