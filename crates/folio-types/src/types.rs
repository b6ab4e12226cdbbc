//! Common types used throughout Folio.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::time::{Duration, SystemTime};

// Timestamp //
//***********//
/// Milliseconds since the Unix epoch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn plus(self, duration: Duration) -> Timestamp {
		let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
		Timestamp(self.0.saturating_add(millis))
	}

	/// Time elapsed from `earlier` to `self`, zero if `earlier` is in the future
	pub fn since(self, earlier: Timestamp) -> Duration {
		Duration::from_millis(u64::try_from(self.0.saturating_sub(earlier.0)).unwrap_or(0))
	}

	/// Time left from `self` until `later`, zero if `later` has passed
	pub fn until(self, later: Timestamp) -> Duration {
		later.since(self)
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(i64::try_from(res.as_millis()).unwrap_or(i64::MAX))
}

// Content //
//*********//
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
	pub id: Box<str>,
	pub name: Box<str>,
	pub created_at: Timestamp,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	pub id: Box<str>,
	pub name: Box<str>,
	pub description: Box<str>,
	pub image_url: Option<Box<str>>,
	pub external_link: Option<Box<str>>,
	/// Empty when the category was deleted
	pub category_id: Box<str>,
	/// Joined category, filled in by the content adapter on reads
	pub category: Option<Category>,
	pub created_at: Timestamp,
}

/// Payload for creating a project
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
	pub name: String,
	pub description: String,
	pub image_url: Option<String>,
	pub external_link: Option<String>,
	pub category_id: String,
}

/// Partial update of a project, `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
	pub name: Option<String>,
	pub description: Option<String>,
	pub image_url: Option<String>,
	pub external_link: Option<String>,
	pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
	pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSettings {
	pub title: String,
	pub description: String,
	pub skills: Vec<String>,
	pub experience_years: u32,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSettings {
	pub email: String,
	pub phone: Option<String>,
	pub linkedin: Option<String>,
	pub github: Option<String>,
	pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
	pub about: AboutSettings,
	pub contact: ContactSettings,
}


// vim: ts=4
