//! Content service tests against the in-memory adapter

#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use folio_content::{ContentService, ProjectFilter};
use folio_content_adapter_memory::ContentAdapterMemory;
use folio_core::RuleSet;
use folio_types::error::Error;
use folio_types::types::{CategoryData, ProjectData, ProjectPatch, SiteSettings};

fn create_service(adapter: ContentAdapterMemory) -> ContentService {
	let rules = RuleSet::standard().expect("Failed to build rule set");
	ContentService::new(Arc::new(adapter), Arc::new(rules))
}

fn validation_message(err: Error) -> String {
	match err {
		Error::ValidationError(msg) => msg,
		other => panic!("expected validation error, got {:?}", other),
	}
}

fn project_data(category_id: &str) -> ProjectData {
	ProjectData {
		name: "Portfolio Site".into(),
		description: "Personal site, built with Rust.".into(),
		image_url: Some("https://images.example.com/p.png?w=800&h=400".into()),
		external_link: Some("  ".into()),
		category_id: category_id.into(),
	}
}

#[tokio::test]
async fn test_create_project_sanitizes_and_trims() {
	let service = create_service(ContentAdapterMemory::seeded());
	let data = ProjectData { name: "  <b>Portfolio</b> Site ".into(), ..project_data("1") };

	let project = service.create_project(&data).await.unwrap();
	assert_eq!(&*project.name, "Portfolio Site");
	// Query strings are kept as entered
	assert_eq!(project.image_url.as_deref(), Some("https://images.example.com/p.png?w=800&h=400"));
	assert_eq!(project.external_link, None);
	assert_eq!(project.category.map(|c| c.name), Some("Web Development".into()));
}

#[tokio::test]
async fn test_create_project_rejects_script_only_name() {
	let service = create_service(ContentAdapterMemory::seeded());
	let data = ProjectData { name: "<script>alert(1)</script>".into(), ..project_data("1") };

	let err = service.create_project(&data).await.unwrap_err();
	assert_eq!(validation_message(err), "name: Field is required");
	assert_eq!(service.list_projects(&ProjectFilter::default()).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_project_field_errors() {
	let service = create_service(ContentAdapterMemory::seeded());

	let data = ProjectData { description: "x".repeat(1001), ..project_data("1") };
	assert_eq!(
		validation_message(service.create_project(&data).await.unwrap_err()),
		"description: Maximum of 1000 characters"
	);

	let data = ProjectData { image_url: Some("javascript:alert(1)".into()), ..project_data("1") };
	assert_eq!(
		validation_message(service.create_project(&data).await.unwrap_err()),
		"imageUrl: Invalid format"
	);

	let data = project_data("missing");
	assert_eq!(
		validation_message(service.create_project(&data).await.unwrap_err()),
		"categoryId: Unknown category"
	);

	let data = project_data("");
	assert_eq!(
		validation_message(service.create_project(&data).await.unwrap_err()),
		"categoryId: Field is required"
	);
}

#[tokio::test]
async fn test_update_project_validates_only_given_fields() {
	let service = create_service(ContentAdapterMemory::seeded());
	let project = service.create_project(&project_data("1")).await.unwrap();

	let patch = ProjectPatch { image_url: Some(String::new()), ..ProjectPatch::default() };
	let updated = service.update_project(&project.id, &patch).await.unwrap();
	assert_eq!(updated.image_url, None);
	assert_eq!(updated.name, project.name);

	let patch = ProjectPatch { name: Some("Bad <name> & more".into()), ..ProjectPatch::default() };
	assert_eq!(
		validation_message(service.update_project(&project.id, &patch).await.unwrap_err()),
		"name: Invalid format"
	);
}

#[tokio::test]
async fn test_update_missing_project_not_found() {
	let service = create_service(ContentAdapterMemory::seeded());
	let patch = ProjectPatch { name: Some("Fine".into()), ..ProjectPatch::default() };
	assert!(matches!(service.update_project("nope", &patch).await, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_category_name_rules() {
	let service = create_service(ContentAdapterMemory::new());
	let category = service.create_category(&CategoryData { name: " Game Dev ".into() }).await.unwrap();
	assert_eq!(&*category.name, "Game Dev");

	let err = service.create_category(&CategoryData { name: "Web/Mobile".into() }).await.unwrap_err();
	assert_eq!(validation_message(err), "name: Invalid format");

	let renamed =
		service.update_category(&category.id, &CategoryData { name: "Games".into() }).await.unwrap();
	assert_eq!(&*renamed.name, "Games");
}

#[tokio::test]
async fn test_list_projects_filters() {
	let service = create_service(ContentAdapterMemory::seeded());
	let filter = ProjectFilter { search: Some("DELIVERY".into()), category: None };
	let projects = service.list_projects(&filter).await.unwrap();
	assert_eq!(projects.len(), 1);
	assert_eq!(&*projects[0].name, "Delivery App");

	let filter = ProjectFilter { search: None, category: Some("4".into()) };
	assert_eq!(service.list_projects(&filter).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_site_settings_cleanup() {
	let service = create_service(ContentAdapterMemory::seeded());
	let mut settings: SiteSettings = service.read_site_settings().await.unwrap();
	settings.about.title = " <h1>Hello</h1> ".into();
	settings.about.skills =
		vec!["Rust".into(), " Rust ".into(), "<i></i>".into(), "Go".into()];
	settings.contact.phone = Some("   ".into());
	settings.contact.github = Some(String::new());

	let saved = service.update_site_settings(&settings).await.unwrap();
	assert_eq!(saved.about.title, "Hello");
	assert_eq!(saved.about.skills, ["Rust", "Go"]);
	assert_eq!(saved.contact.phone, None);
	assert_eq!(saved.contact.github, None);
	assert_eq!(service.read_site_settings().await.unwrap(), saved);
}

#[tokio::test]
async fn test_site_settings_rejects_bad_contact() {
	let service = create_service(ContentAdapterMemory::seeded());
	let mut settings = service.read_site_settings().await.unwrap();
	settings.contact.email = "not-an-email".into();
	assert_eq!(
		validation_message(service.update_site_settings(&settings).await.unwrap_err()),
		"contact.email: Invalid format"
	);

	let mut settings = service.read_site_settings().await.unwrap();
	settings.contact.phone = Some("12".into());
	assert_eq!(
		validation_message(service.update_site_settings(&settings).await.unwrap_err()),
		"contact.phone: Invalid format"
	);
}

#[tokio::test]
async fn test_dashboard_counts_categories() {
	let service = create_service(ContentAdapterMemory::seeded());
	let stats = service.dashboard().await.unwrap();
	assert_eq!(stats.total_projects, 4);
	assert_eq!(stats.total_categories, 4);
	assert!(stats.projects_by_category.iter().all(|c| c.count == 1));
	assert_eq!(stats.latest_project_at, Some(stats.recent_projects[0].created_at));
}

// vim: ts=4
