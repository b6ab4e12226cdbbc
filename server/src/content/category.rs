use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use folio_types::types::{Category, CategoryData};

use crate::prelude::*;

/// # GET /api/categories
pub async fn list_categories(State(app): State<App>) -> ClResult<Json<Vec<Category>>> {
	Ok(Json(app.content.list_categories().await?))
}

/// # POST /api/categories
pub async fn post_category(
	State(app): State<App>,
	Json(data): Json<CategoryData>,
) -> ClResult<(StatusCode, Json<Category>)> {
	let category = app.content.create_category(&data).await?;
	Ok((StatusCode::CREATED, Json(category)))
}

/// # PATCH /api/categories/{id}
pub async fn patch_category(
	State(app): State<App>,
	Path(id): Path<String>,
	Json(data): Json<CategoryData>,
) -> ClResult<Json<Category>> {
	Ok(Json(app.content.update_category(&id, &data).await?))
}

/// # DELETE /api/categories/{id}
pub async fn delete_category(
	State(app): State<App>,
	Path(id): Path<String>,
) -> ClResult<StatusCode> {
	app.content.delete_category(&id).await?;
	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
