use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use folio_content::ProjectFilter;
use folio_types::types::{Project, ProjectData, ProjectPatch};

use crate::prelude::*;

/// # GET /api/projects
pub async fn list_projects(
	State(app): State<App>,
	Query(filter): Query<ProjectFilter>,
) -> ClResult<Json<Vec<Project>>> {
	Ok(Json(app.content.list_projects(&filter).await?))
}

/// # GET /api/projects/{id}
pub async fn get_project(
	State(app): State<App>,
	Path(id): Path<String>,
) -> ClResult<Json<Project>> {
	Ok(Json(app.content.read_project(&id).await?))
}

/// # POST /api/projects
pub async fn post_project(
	State(app): State<App>,
	Json(data): Json<ProjectData>,
) -> ClResult<(StatusCode, Json<Project>)> {
	let project = app.content.create_project(&data).await?;
	Ok((StatusCode::CREATED, Json(project)))
}

/// # PATCH /api/projects/{id}
pub async fn patch_project(
	State(app): State<App>,
	Path(id): Path<String>,
	Json(patch): Json<ProjectPatch>,
) -> ClResult<Json<Project>> {
	Ok(Json(app.content.update_project(&id, &patch).await?))
}

/// # DELETE /api/projects/{id}
pub async fn delete_project(
	State(app): State<App>,
	Path(id): Path<String>,
) -> ClResult<StatusCode> {
	app.content.delete_project(&id).await?;
	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
