//! In-memory content store.
//!
//! Stands in for the remote data store in development and tests. Content is
//! lost on restart.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

use async_trait::async_trait;
use parking_lot::RwLock;

use folio_types::content_adapter::ContentAdapter;
use folio_types::prelude::*;
use folio_types::types::{
	self, AboutSettings, Category, CategoryData, ContactSettings, Project, ProjectData,
	ProjectPatch, SiteSettings,
};
use folio_types::utils::random_id;

#[derive(Debug, Default)]
struct Store {
	/// Oldest first
	categories: Vec<Category>,
	/// Newest first, `category` is never stored
	projects: Vec<Project>,
	settings: SiteSettings,
}

impl Store {
	fn join(&self, project: &Project) -> Project {
		let mut project = project.clone();
		project.category = self.categories.iter().find(|c| c.id == project.category_id).cloned();
		project
	}
}

fn non_blank(value: Option<&str>) -> Option<Box<str>> {
	value.filter(|v| !v.is_empty()).map(Into::into)
}

#[derive(Debug, Default)]
pub struct ContentAdapterMemory {
	store: RwLock<Store>,
}

impl ContentAdapterMemory {
	pub fn new() -> Self {
		Self::default()
	}

	/// A store with a few demo categories, projects and site settings
	pub fn seeded() -> Self {
		// 2024-01-01T00:00:00Z
		const JAN_1: i64 = 1_704_067_200_000;
		const DAY: i64 = 86_400_000;

		let categories: Vec<Category> =
			["Web Development", "Mobile Apps", "UI-UX Design", "Data Science"]
				.into_iter()
				.zip(0..)
				.map(|(name, i)| Category {
					id: (i + 1).to_string().into(),
					name: name.into(),
					created_at: Timestamp(JAN_1 + i * DAY),
				})
				.collect();

		let demo = [
			(
				"E-commerce Platform",
				"A complete e-commerce platform built with React and Node.js, with payments and stock management.",
				"https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=400&fit=crop",
				"https://github.com/example/ecommerce",
				14,
			),
			(
				"Delivery App",
				"Mobile food delivery app with geolocation, integrated payments and reviews.",
				"https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&h=400&fit=crop",
				"https://github.com/example/delivery-app",
				19,
			),
			(
				"Analytics Dashboard",
				"Modern data visualization interface with interactive charts and custom reports.",
				"https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=400&fit=crop",
				"https://github.com/example/dashboard",
				24,
			),
			(
				"Recommendation Engine",
				"Machine learning product recommendations using Python and TensorFlow.",
				"https://images.unsplash.com/photo-1518186285589-2f7649de83e0?w=800&h=400&fit=crop",
				"https://github.com/example/ml-recommendation",
				31,
			),
		];
		let mut projects: Vec<Project> = demo
			.into_iter()
			.zip(&categories)
			.zip(1..)
			.map(|(((name, description, image, link, day), category), n): (_, i32)| Project {
				id: n.to_string().into(),
				name: name.into(),
				description: description.into(),
				image_url: Some(image.into()),
				external_link: Some(link.into()),
				category_id: category.id.clone(),
				category: None,
				created_at: Timestamp(JAN_1 + day * DAY),
			})
			.collect();
		projects.reverse();

		let settings = SiteSettings {
			about: AboutSettings {
				title: "About Me".into(),
				description: "Developer building web and mobile products for more than five years."
					.into(),
				skills: ["React", "Node.js", "TypeScript", "Python", "UI-UX Design"]
					.map(String::from)
					.to_vec(),
				experience_years: 5,
			},
			contact: ContactSettings {
				email: "contact@portfolio.com".into(),
				phone: Some("(11) 99999-9999".into()),
				linkedin: Some("https://linkedin.com/in/portfolio".into()),
				github: Some("https://github.com/portfolio".into()),
				address: Some("Sao Paulo, SP".into()),
			},
		};

		Self { store: RwLock::new(Store { categories, projects, settings }) }
	}
}

#[async_trait]
impl ContentAdapter for ContentAdapterMemory {
	async fn list_categories(&self) -> ClResult<Vec<Category>> {
		Ok(self.store.read().categories.clone())
	}

	async fn create_category(&self, data: &CategoryData) -> ClResult<Category> {
		let category =
			Category { id: random_id().into(), name: data.name.as_str().into(), created_at: types::now() };
		self.store.write().categories.push(category.clone());
		Ok(category)
	}

	async fn update_category(&self, id: &str, data: &CategoryData) -> ClResult<Category> {
		let mut store = self.store.write();
		let category =
			store.categories.iter_mut().find(|c| &*c.id == id).ok_or(Error::NotFound)?;
		category.name = data.name.as_str().into();
		Ok(category.clone())
	}

	async fn delete_category(&self, id: &str) -> ClResult<()> {
		let mut store = self.store.write();
		let before = store.categories.len();
		store.categories.retain(|c| &*c.id != id);
		if store.categories.len() == before {
			return Err(Error::NotFound);
		}
		for project in store.projects.iter_mut().filter(|p| &*p.category_id == id) {
			project.category_id = "".into();
		}
		Ok(())
	}

	async fn list_projects(&self) -> ClResult<Vec<Project>> {
		let store = self.store.read();
		Ok(store.projects.iter().map(|p| store.join(p)).collect())
	}

	async fn read_project(&self, id: &str) -> ClResult<Project> {
		let store = self.store.read();
		store.projects.iter().find(|p| &*p.id == id).map(|p| store.join(p)).ok_or(Error::NotFound)
	}

	async fn create_project(&self, data: &ProjectData) -> ClResult<Project> {
		let project = Project {
			id: random_id().into(),
			name: data.name.as_str().into(),
			description: data.description.as_str().into(),
			image_url: non_blank(data.image_url.as_deref()),
			external_link: non_blank(data.external_link.as_deref()),
			category_id: data.category_id.as_str().into(),
			category: None,
			created_at: types::now(),
		};
		let mut store = self.store.write();
		store.projects.insert(0, project);
		Ok(store.join(&store.projects[0]))
	}

	async fn update_project(&self, id: &str, patch: &ProjectPatch) -> ClResult<Project> {
		let mut store = self.store.write();
		let project = store.projects.iter_mut().find(|p| &*p.id == id).ok_or(Error::NotFound)?;
		if let Some(name) = &patch.name {
			project.name = name.as_str().into();
		}
		if let Some(description) = &patch.description {
			project.description = description.as_str().into();
		}
		if let Some(image_url) = &patch.image_url {
			project.image_url = non_blank(Some(image_url.as_str()));
		}
		if let Some(external_link) = &patch.external_link {
			project.external_link = non_blank(Some(external_link.as_str()));
		}
		if let Some(category_id) = &patch.category_id {
			project.category_id = category_id.as_str().into();
		}
		let project = project.clone();
		Ok(store.join(&project))
	}

	async fn delete_project(&self, id: &str) -> ClResult<()> {
		let mut store = self.store.write();
		let before = store.projects.len();
		store.projects.retain(|p| &*p.id != id);
		if store.projects.len() == before {
			return Err(Error::NotFound);
		}
		Ok(())
	}

	async fn read_site_settings(&self) -> ClResult<SiteSettings> {
		Ok(self.store.read().settings.clone())
	}

	async fn update_site_settings(&self, settings: &SiteSettings) -> ClResult<SiteSettings> {
		self.store.write().settings = settings.clone();
		Ok(settings.clone())
	}
}

// vim: ts=4
