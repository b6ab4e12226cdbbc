//! Adapter for the remote data store holding portfolio content.
//!
//! Callers hand over values that were already sanitized and validated; the
//! adapter only persists them.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::types::{Category, CategoryData, Project, ProjectData, ProjectPatch, SiteSettings};

#[async_trait]
pub trait ContentAdapter: Debug + Send + Sync {
	// Categories
	//************

	/// Lists categories, oldest first
	async fn list_categories(&self) -> ClResult<Vec<Category>>;

	async fn create_category(&self, data: &CategoryData) -> ClResult<Category>;

	async fn update_category(&self, id: &str, data: &CategoryData) -> ClResult<Category>;

	/// Deletes a category and detaches it from every project referencing it
	async fn delete_category(&self, id: &str) -> ClResult<()>;

	// Projects
	//**********

	/// Lists projects newest first, with their category joined
	async fn list_projects(&self) -> ClResult<Vec<Project>>;

	async fn read_project(&self, id: &str) -> ClResult<Project>;

	async fn create_project(&self, data: &ProjectData) -> ClResult<Project>;

	async fn update_project(&self, id: &str, patch: &ProjectPatch) -> ClResult<Project>;

	async fn delete_project(&self, id: &str) -> ClResult<()>;

	// Site settings
	//***************

	async fn read_site_settings(&self) -> ClResult<SiteSettings>;

	async fn update_site_settings(&self, settings: &SiteSettings) -> ClResult<SiteSettings>;
}

// vim: ts=4
