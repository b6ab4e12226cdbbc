use axum::Json;
use axum::extract::State;

use folio_content::DashboardStats;
use folio_types::types::SiteSettings;

use crate::prelude::*;

/// # GET /api/settings
pub async fn get_settings(State(app): State<App>) -> ClResult<Json<SiteSettings>> {
	Ok(Json(app.content.read_site_settings().await?))
}

/// # PUT /api/settings
pub async fn put_settings(
	State(app): State<App>,
	Json(settings): Json<SiteSettings>,
) -> ClResult<Json<SiteSettings>> {
	Ok(Json(app.content.update_site_settings(&settings).await?))
}

/// # GET /api/dashboard
pub async fn get_dashboard(State(app): State<App>) -> ClResult<Json<DashboardStats>> {
	Ok(Json(app.content.dashboard().await?))
}

// vim: ts=4
