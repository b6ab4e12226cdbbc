//! Admin dashboard figures

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use serde_with::skip_serializing_none;

use folio_types::types::{Category, Project, Timestamp};

const RECENT_PROJECTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
	pub id: Box<str>,
	pub name: Box<str>,
	pub count: usize,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
	pub total_projects: usize,
	pub total_categories: usize,
	/// Projects created in the current calendar month (UTC)
	pub projects_this_month: usize,
	/// Creation time of the newest project
	pub latest_project_at: Option<Timestamp>,
	pub projects_by_category: Vec<CategoryCount>,
	pub recent_projects: Vec<Project>,
}

fn to_utc(ts: Timestamp) -> Option<DateTime<Utc>> {
	DateTime::from_timestamp_millis(ts.0)
}

/// Computes dashboard figures. `projects` must be ordered newest first.
pub fn dashboard_stats(projects: &[Project], categories: &[Category], now: Timestamp) -> DashboardStats {
	let month = to_utc(now).map(|dt| (dt.year(), dt.month()));
	let projects_this_month = projects
		.iter()
		.filter(|p| {
			let created = to_utc(p.created_at).map(|dt| (dt.year(), dt.month()));
			created.is_some() && created == month
		})
		.count();

	let projects_by_category = categories
		.iter()
		.map(|category| CategoryCount {
			id: category.id.clone(),
			name: category.name.clone(),
			count: projects.iter().filter(|p| p.category_id == category.id).count(),
		})
		.collect();

	DashboardStats {
		total_projects: projects.len(),
		total_categories: categories.len(),
		projects_this_month,
		latest_project_at: projects.first().map(|p| p.created_at),
		projects_by_category,
		recent_projects: projects.iter().take(RECENT_PROJECTS).cloned().collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// 2024-03-15T12:00:00Z
	const MID_MARCH: i64 = 1_710_504_000_000;
	const DAY: i64 = 86_400_000;

	fn project(id: &str, category_id: &str, created_at: i64) -> Project {
		Project {
			id: id.into(),
			name: format!("Project {}", id).into(),
			description: "Description".into(),
			image_url: None,
			external_link: None,
			category_id: category_id.into(),
			category: None,
			created_at: Timestamp(created_at),
		}
	}

	fn category(id: &str, name: &str) -> Category {
		Category { id: id.into(), name: name.into(), created_at: Timestamp(0) }
	}

	#[test]
	fn test_keys_are_camel_case() {
		let projects = [project("1", "a", MID_MARCH)];
		let stats = dashboard_stats(&projects, &[category("a", "A")], Timestamp(MID_MARCH));
		let json = serde_json::to_value(&stats).unwrap();
		assert_eq!(json["totalProjects"], 1);
		assert_eq!(json["projectsThisMonth"], 1);
		assert_eq!(json["projectsByCategory"][0]["count"], 1);
		assert_eq!(json["recentProjects"][0]["categoryId"], "a");
		assert!(json.get("total_projects").is_none());
	}

	#[test]
	fn test_empty() {
		let stats = dashboard_stats(&[], &[], Timestamp(MID_MARCH));
		assert_eq!(stats.total_projects, 0);
		assert_eq!(stats.latest_project_at, None);
		assert!(stats.recent_projects.is_empty());
	}

	#[test]
	fn test_counts() {
		let projects: Vec<Project> = (0..7)
			.map(|i| project(&i.to_string(), if i % 2 == 0 { "a" } else { "b" }, MID_MARCH - i * 3 * DAY))
			.collect();
		let categories = [category("a", "Web"), category("b", "Mobile"), category("c", "Empty")];

		let stats = dashboard_stats(&projects, &categories, Timestamp(MID_MARCH));
		assert_eq!(stats.total_projects, 7);
		assert_eq!(stats.total_categories, 3);
		// March 15, 12, 9, 6, 3 are in March; Feb 29 and 26 are not
		assert_eq!(stats.projects_this_month, 5);
		assert_eq!(stats.latest_project_at, Some(Timestamp(MID_MARCH)));
		let counts: Vec<usize> = stats.projects_by_category.iter().map(|c| c.count).collect();
		assert_eq!(counts, [4, 3, 0]);
		assert_eq!(stats.recent_projects.len(), 5);
		assert_eq!(&*stats.recent_projects[0].id, "0");
	}

	#[test]
	fn test_same_month_other_year_not_counted() {
		let projects = [project("1", "a", MID_MARCH - 365 * DAY)];
		let stats = dashboard_stats(&projects, &[], Timestamp(MID_MARCH));
		assert_eq!(stats.projects_this_month, 0);
	}
}

// vim: ts=4
