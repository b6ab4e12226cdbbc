//! Custom extractors for Folio-specific data

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use folio_core::ActiveSession;

use crate::prelude::*;

// Auth //
//******//
/// The admin session, inserted by [`require_session`](super::middleware::require_session)
#[derive(Debug, Clone)]
pub struct Auth(pub ActiveSession);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::SessionExpired)
		}
	}
}

// ClientId //
//**********//
/// Rate limiting identity of the caller: the peer IP address.
///
/// Requests without connection info (in-process calls) share the id "local".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(pub Box<str>);

impl<S> FromRequestParts<S> for ClientId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let id = match ConnectInfo::<SocketAddr>::from_request_parts(parts, state).await {
			Ok(ConnectInfo(addr)) => addr.ip().to_string().into(),
			Err(_) => "local".into(),
		};
		Ok(ClientId(id))
	}
}

// vim: ts=4
