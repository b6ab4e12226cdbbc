//! Error type shared by every Folio crate.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	/// Wrong username or password
	Unauthorized,
	/// Caller believes it is authenticated but the session slot is empty or expired
	SessionExpired,
	/// The session slot holds data that does not parse as a session record
	MalformedSession,
	/// Login blocked for the given number of minutes
	RateLimited {
		minutes: u32,
	},
	ValidationError(String),
	ConfigError(String),
	Parse,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(_err: serde_json::Error) -> Self {
		Self::Parse
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::Unauthorized => write!(f, "invalid username or password"),
			Error::SessionExpired => write!(f, "session expired"),
			Error::MalformedSession => write!(f, "malformed session record"),
			Error::RateLimited { minutes } => {
				write!(f, "too many login attempts, retry in {} minutes", minutes)
			}
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Parse => write!(f, "parse error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl Error {
	/// Stable machine-readable code used in API error bodies
	pub fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-NOT-FOUND",
			Error::PermissionDenied => "E-PERMISSION-DENIED",
			Error::Unauthorized => "E-AUTH-FAILED",
			Error::SessionExpired | Error::MalformedSession => "E-SESSION-EXPIRED",
			Error::RateLimited { .. } => "E-RATE-LIMITED",
			Error::ValidationError(_) => "E-VALIDATION",
			Error::Parse => "E-PARSE",
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => "E-INTERNAL",
		}
	}

	fn status(&self) -> StatusCode {
		match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::Unauthorized | Error::SessionExpired | Error::MalformedSession => {
				StatusCode::UNAUTHORIZED
			}
			Error::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
			Error::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
			Error::Parse => StatusCode::BAD_REQUEST,
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl Error {
	/// Error response with extra fields under `error.details`
	pub fn with_details(self, details: serde_json::Value) -> Response {
		self.build_response(Some(details))
	}

	fn build_response(self, details: Option<serde_json::Value>) -> Response {
		let status = self.status();
		// Internal details stay in the log
		let message = match &self {
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				tracing::error!("request failed: {}", self);
				"Internal error".to_string()
			}
			_ => self.to_string(),
		};
		let mut body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});
		if let Some(details) = details {
			body["error"]["details"] = details;
		}

		let mut response = (status, Json(body)).into_response();
		if let Error::RateLimited { minutes } = self {
			if let Ok(val) = (u64::from(minutes) * 60).to_string().parse() {
				response.headers_mut().insert("Retry-After", val);
			}
		}
		response
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let details = match &self {
			Error::RateLimited { minutes } => {
				Some(serde_json::json!({ "blockTimeRemaining": minutes }))
			}
			_ => None,
		};
		self.build_response(details)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_mapping() {
		assert_eq!(Error::NotFound.status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::SessionExpired.status(), StatusCode::UNAUTHORIZED);
		assert_eq!(Error::RateLimited { minutes: 3 }.status(), StatusCode::TOO_MANY_REQUESTS);
		assert_eq!(
			Error::ValidationError("name".into()).status(),
			StatusCode::UNPROCESSABLE_ENTITY
		);
	}

	#[test]
	fn test_rate_limited_response_has_retry_after() {
		let response = Error::RateLimited { minutes: 2 }.into_response();
		assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
		assert_eq!(
			response.headers().get("Retry-After").and_then(|v| v.to_str().ok()),
			Some("120")
		);
	}

	#[test]
	fn test_details_are_attached() {
		let response =
			Error::Unauthorized.with_details(serde_json::json!({ "remainingAttempts": 2 }));
		assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
		assert!(response.headers().get("Retry-After").is_none());
	}

	#[test]
	fn test_malformed_session_shares_expired_code() {
		assert_eq!(Error::MalformedSession.code(), Error::SessionExpired.code());
	}
}

// vim: ts=4
