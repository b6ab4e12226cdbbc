//! Project search for the public showcase and the admin list

use serde::Deserialize;

use folio_types::types::Project;

/// Query parameters of a project listing. Blank values match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
	pub search: Option<String>,
	pub category: Option<String>,
}

impl ProjectFilter {
	pub fn apply(&self, projects: Vec<Project>) -> Vec<Project> {
		filter_projects(projects, self.search.as_deref(), self.category.as_deref())
	}
}

/// Keeps projects in `category` whose name or description contains `search`,
/// ignoring case. Order is preserved.
pub fn filter_projects(
	projects: Vec<Project>,
	search: Option<&str>,
	category: Option<&str>,
) -> Vec<Project> {
	let search = search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_lowercase);
	let category = category.filter(|c| !c.is_empty());

	projects
		.into_iter()
		.filter(|project| category.is_none_or(|id| *project.category_id == *id))
		.filter(|project| {
			search.as_deref().is_none_or(|term| {
				project.name.to_lowercase().contains(term)
					|| project.description.to_lowercase().contains(term)
			})
		})
		.collect()
}


// vim: ts=4
