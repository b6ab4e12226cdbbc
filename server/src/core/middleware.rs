//! Custom middlewares

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, header};
use axum::middleware::Next;

use crate::core::Auth;
use crate::prelude::*;

/// Admits requests whose bearer token is the token of the current session
pub async fn require_session(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> ClResult<Response<Body>> {
	let token = req
		.headers()
		.get(header::AUTHORIZATION)
		.and_then(|h| h.to_str().ok())
		.and_then(|h| h.strip_prefix("Bearer "))
		.map(str::trim)
		.ok_or(Error::SessionExpired)?;

	let session = match app.sessions.verify_token(token).await {
		Ok(session) => session,
		Err(err) => {
			if app.sessions.get_session().await.is_none() {
				app.auth.set_authenticated(false);
			}
			return Err(err);
		}
	};

	req.extensions_mut().insert(Auth(session));
	Ok(next.run(req).await)
}

// vim: ts=4
