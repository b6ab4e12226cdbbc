use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use folio_core::LoginOutcome;

use crate::core::{Auth, ClientId};
use crate::prelude::*;

const LOW_ATTEMPTS_WARNING: &str = "Few login attempts left before the login is blocked";

/// # POST /api/auth/login
#[derive(Deserialize)]
pub struct LoginReq {
	username: String,
	password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRes {
	token: Box<str>,
	expires_at: Timestamp,
}

#[skip_serializing_none]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RejectedDetails {
	remaining_attempts: u32,
	warning: Option<&'static str>,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct InvalidDetails {
	username: Option<String>,
	password: Option<String>,
}

pub async fn post_login(
	State(app): State<App>,
	ClientId(client): ClientId,
	Json(login): Json<LoginReq>,
) -> ClResult<Response> {
	let outcome = app.login.login(&client, &login.username, &login.password).await?;

	let response = match outcome {
		LoginOutcome::Success { session } => {
			app.auth.set_authenticated(true);
			let res = LoginRes { token: session.token, expires_at: session.expires_at };
			(StatusCode::OK, Json(res)).into_response()
		}
		LoginOutcome::Rejected { remaining_attempts, low_attempts } => {
			let details = RejectedDetails {
				remaining_attempts,
				warning: low_attempts.then_some(LOW_ATTEMPTS_WARNING),
			};
			Error::Unauthorized.with_details(serde_json::to_value(details)?)
		}
		LoginOutcome::Blocked { block_time_remaining } => {
			Error::RateLimited { minutes: block_time_remaining }.into_response()
		}
		LoginOutcome::Invalid(errors) => {
			let details = InvalidDetails {
				username: errors.username.map(|e| e.message()),
				password: errors.password.map(|e| e.message()),
			};
			Error::ValidationError("invalid login form".into())
				.with_details(serde_json::to_value(details)?)
		}
	};
	Ok(response)
}

/// # POST /api/auth/logout
///
/// Only the holder of the current session token can end it
pub async fn post_logout(State(app): State<App>, Auth(_session): Auth) -> ClResult<StatusCode> {
	app.login.logout().await?;
	app.auth.set_authenticated(false);
	Ok(StatusCode::NO_CONTENT)
}

/// # GET /api/auth/session
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRes {
	expires_at: Timestamp,
	expiring_soon: bool,
}

pub async fn get_session(State(app): State<App>, Auth(session): Auth) -> Json<SessionRes> {
	let expiring_soon =
		app.sessions.time_left(&session) < app.sessions.config().expiring_soon_threshold;
	Json(SessionRes { expires_at: session.expires_at, expiring_soon })
}


// vim: ts=4
