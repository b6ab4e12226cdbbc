use axum::http::{HeaderName, HeaderValue};
use axum::routing::{get, patch, post, put};
use axum::{Router, middleware};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use folio_core::headers::SECURITY_HEADERS;

use crate::auth;
use crate::content::{category, project, settings};
use crate::core::middleware::require_session;
use crate::prelude::*;

pub fn init(app: App) -> Router {
	let protected_router = Router::new()
		.route("/api/auth/session", get(auth::handler::get_session))
		.route("/api/auth/logout", post(auth::handler::post_logout))
		.route("/api/projects", post(project::post_project))
		.route(
			"/api/projects/{id}",
			patch(project::patch_project).delete(project::delete_project),
		)
		.route("/api/categories", post(category::post_category))
		.route(
			"/api/categories/{id}",
			patch(category::patch_category).delete(category::delete_category),
		)
		.route("/api/settings", put(settings::put_settings))
		.route("/api/dashboard", get(settings::get_dashboard))
		.layer(middleware::from_fn_with_state(app.clone(), require_session));

	let public_router = Router::new()
		.route("/api/auth/login", post(auth::handler::post_login))
		.route("/api/projects", get(project::list_projects))
		.route("/api/projects/{id}", get(project::get_project))
		.route("/api/categories", get(category::list_categories))
		.route("/api/settings", get(settings::get_settings));

	let mut router = Router::new().merge(public_router).merge(protected_router);
	for (name, value) in SECURITY_HEADERS {
		router = router.layer(SetResponseHeaderLayer::overriding(
			HeaderName::from_static(name),
			HeaderValue::from_static(value),
		));
	}
	router.layer(TraceLayer::new_for_http()).with_state(app)
}

// vim: ts=4
