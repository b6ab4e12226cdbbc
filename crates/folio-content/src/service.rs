//! Content service
//!
//! Free-form text is sanitized and then validated; the cleaned, trimmed value
//! is what gets stored. URL fields are validated as entered: the URL pattern
//! admits no markup characters, and escaping would corrupt query strings.
//!
//! Validation failures become `Error::ValidationError("<field>: <message>")`.

use std::sync::Arc;

use folio_core::sanitize::sanitize_opt;
use folio_core::validate::{RuleName, RuleSet, ValidationRule, sanitize_and_validate};
use folio_types::clock::{Clock, SystemClock};
use folio_types::content_adapter::ContentAdapter;
use folio_types::types::{
	AboutSettings, Category, CategoryData, ContactSettings, Project, ProjectData, ProjectPatch,
	SiteSettings,
};

use crate::filter::ProjectFilter;
use crate::prelude::*;
use crate::stats::{DashboardStats, dashboard_stats};

/// Rules for site settings fields that have no named rule set
#[derive(Debug)]
struct SettingsRules {
	title: ValidationRule,
	description: ValidationRule,
	skill: ValidationRule,
	address: ValidationRule,
}

impl Default for SettingsRules {
	fn default() -> Self {
		Self {
			title: ValidationRule::new().min_length(1).max_length(100),
			description: ValidationRule::new().min_length(1).max_length(2000),
			skill: ValidationRule::new().min_length(1).max_length(50),
			address: ValidationRule::new().max_length(200),
		}
	}
}

#[derive(Debug)]
pub struct ContentService {
	adapter: Arc<dyn ContentAdapter>,
	rules: Arc<RuleSet>,
	settings_rules: SettingsRules,
	clock: Arc<dyn Clock>,
}

impl ContentService {
	pub fn new(adapter: Arc<dyn ContentAdapter>, rules: Arc<RuleSet>) -> Self {
		Self::with_clock(adapter, rules, Arc::new(SystemClock))
	}

	pub fn with_clock(
		adapter: Arc<dyn ContentAdapter>,
		rules: Arc<RuleSet>,
		clock: Arc<dyn Clock>,
	) -> Self {
		Self { adapter, rules, settings_rules: SettingsRules::default(), clock }
	}

	// Field helpers
	//***************

	fn text(&self, field: &str, rule: RuleName, value: &str) -> ClResult<String> {
		self.rules.sanitize_and_validate(rule, value).map_err(|e| e.for_field(field))
	}

	fn text_with(&self, field: &str, rule: &ValidationRule, value: &str) -> ClResult<String> {
		sanitize_and_validate(value, rule).map_err(|e| e.for_field(field))
	}

	/// Blank means "not set"
	fn optional_text(&self, field: &str, rule: RuleName, value: Option<&str>) -> ClResult<Option<String>> {
		sanitize_opt(value).map(|v| self.text(field, rule, &v)).transpose()
	}

	/// Blank means "not set"
	fn optional_url(&self, field: &str, value: Option<&str>) -> ClResult<Option<String>> {
		let Some(url) = value.map(str::trim).filter(|v| !v.is_empty()) else {
			return Ok(None);
		};
		self.rules.validate(RuleName::Url, url).map_err(|e| e.for_field(field))?;
		Ok(Some(url.to_string()))
	}

	async fn existing_category(&self, value: &str) -> ClResult<String> {
		let id = value.trim();
		if id.is_empty() {
			return Err(Error::ValidationError("categoryId: Field is required".into()));
		}
		let categories = self.adapter.list_categories().await?;
		if !categories.iter().any(|c| &*c.id == id) {
			return Err(Error::ValidationError("categoryId: Unknown category".into()));
		}
		Ok(id.to_string())
	}

	// Projects
	//**********

	pub async fn list_projects(&self, filter: &ProjectFilter) -> ClResult<Vec<Project>> {
		Ok(filter.apply(self.adapter.list_projects().await?))
	}

	pub async fn read_project(&self, id: &str) -> ClResult<Project> {
		self.adapter.read_project(id).await
	}

	pub async fn create_project(&self, data: &ProjectData) -> ClResult<Project> {
		let clean = ProjectData {
			name: self.text("name", RuleName::ProjectName, &data.name)?,
			description: self.text("description", RuleName::ProjectDescription, &data.description)?,
			image_url: self.optional_url("imageUrl", data.image_url.as_deref())?,
			external_link: self.optional_url("externalLink", data.external_link.as_deref())?,
			category_id: self.existing_category(&data.category_id).await?,
		};
		let project = self.adapter.create_project(&clean).await?;
		info!("project created: {}", project.id);
		Ok(project)
	}

	/// Applies a partial update. `Some("")` clears an optional URL field.
	pub async fn update_project(&self, id: &str, patch: &ProjectPatch) -> ClResult<Project> {
		let clear_blank = |field: &str, value: Option<&str>| -> ClResult<Option<String>> {
			match value {
				Some(v) => Ok(Some(self.optional_url(field, Some(v))?.unwrap_or_default())),
				None => Ok(None),
			}
		};

		let category_id = match patch.category_id.as_deref() {
			Some(v) => Some(self.existing_category(v).await?),
			None => None,
		};
		let clean = ProjectPatch {
			name: patch
				.name
				.as_deref()
				.map(|v| self.text("name", RuleName::ProjectName, v))
				.transpose()?,
			description: patch
				.description
				.as_deref()
				.map(|v| self.text("description", RuleName::ProjectDescription, v))
				.transpose()?,
			image_url: clear_blank("imageUrl", patch.image_url.as_deref())?,
			external_link: clear_blank("externalLink", patch.external_link.as_deref())?,
			category_id,
		};
		let project = self.adapter.update_project(id, &clean).await?;
		info!("project updated: {}", project.id);
		Ok(project)
	}

	pub async fn delete_project(&self, id: &str) -> ClResult<()> {
		self.adapter.delete_project(id).await?;
		info!("project deleted: {}", id);
		Ok(())
	}

	// Categories
	//************

	pub async fn list_categories(&self) -> ClResult<Vec<Category>> {
		self.adapter.list_categories().await
	}

	pub async fn create_category(&self, data: &CategoryData) -> ClResult<Category> {
		let clean = CategoryData { name: self.text("name", RuleName::CategoryName, &data.name)? };
		let category = self.adapter.create_category(&clean).await?;
		info!("category created: {}", category.id);
		Ok(category)
	}

	pub async fn update_category(&self, id: &str, data: &CategoryData) -> ClResult<Category> {
		let clean = CategoryData { name: self.text("name", RuleName::CategoryName, &data.name)? };
		self.adapter.update_category(id, &clean).await
	}

	/// Deletes a category, projects in it become uncategorized
	pub async fn delete_category(&self, id: &str) -> ClResult<()> {
		self.adapter.delete_category(id).await?;
		info!("category deleted: {}", id);
		Ok(())
	}

	// Site settings
	//***************

	pub async fn read_site_settings(&self) -> ClResult<SiteSettings> {
		self.adapter.read_site_settings().await
	}

	pub async fn update_site_settings(&self, settings: &SiteSettings) -> ClResult<SiteSettings> {
		let rules = &self.settings_rules;
		let about = &settings.about;
		let contact = &settings.contact;

		let mut skills: Vec<String> = Vec::with_capacity(about.skills.len());
		for skill in &about.skills {
			let Some(skill) = sanitize_opt(Some(skill.as_str())) else {
				continue;
			};
			let skill = self.text_with("skills", &rules.skill, &skill)?;
			if !skills.contains(&skill) {
				skills.push(skill);
			}
		}

		let clean = SiteSettings {
			about: AboutSettings {
				title: self.text_with("about.title", &rules.title, &about.title)?,
				description: self.text_with("about.description", &rules.description, &about.description)?,
				skills,
				experience_years: about.experience_years,
			},
			contact: ContactSettings {
				email: self.text("contact.email", RuleName::Email, &contact.email)?,
				phone: self.optional_text("contact.phone", RuleName::Phone, contact.phone.as_deref())?,
				linkedin: self.optional_url("contact.linkedin", contact.linkedin.as_deref())?,
				github: self.optional_url("contact.github", contact.github.as_deref())?,
				address: sanitize_opt(contact.address.as_deref())
					.map(|v| self.text_with("contact.address", &rules.address, &v))
					.transpose()?,
			},
		};
		let saved = self.adapter.update_site_settings(&clean).await?;
		info!("site settings updated");
		Ok(saved)
	}

	// Dashboard
	//***********

	pub async fn dashboard(&self) -> ClResult<DashboardStats> {
		let projects = self.adapter.list_projects().await?;
		let categories = self.adapter.list_categories().await?;
		Ok(dashboard_stats(&projects, &categories, self.clock.now()))
	}
}

// vim: ts=4
