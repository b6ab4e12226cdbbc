//! Field validation against named rule sets.
//!
//! A rule is a bundle of optional length bounds and an optional pattern. The
//! value is trimmed first; checks then run in a fixed order (empty, too short,
//! too long, pattern) and stop at the first failure, so callers always get the
//! single most basic problem with a field.

use std::collections::HashMap;
use std::str::FromStr;

use regex::Regex;

use crate::prelude::*;
use crate::sanitize::sanitize;

/// Why a value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	/// Trimmed value is empty; every field is required
	EmptyInput,
	TooShort {
		min: usize,
	},
	TooLong {
		max: usize,
	},
	PatternMismatch,
}

impl ValidationError {
	/// Message suitable for showing next to the field
	pub fn message(&self) -> String {
		match self {
			ValidationError::EmptyInput => "Field is required".to_string(),
			ValidationError::TooShort { min } => format!("Minimum of {} characters", min),
			ValidationError::TooLong { max } => format!("Maximum of {} characters", max),
			ValidationError::PatternMismatch => "Invalid format".to_string(),
		}
	}

	/// Converts into an API error naming the offending field
	pub fn for_field(self, field: &str) -> Error {
		Error::ValidationError(format!("{}: {}", field, self.message()))
	}
}

impl std::fmt::Display for ValidationError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.message())
	}
}

impl std::error::Error for ValidationError {}

/// Length bounds and pattern for one class of input field
#[derive(Debug, Clone, Default)]
pub struct ValidationRule {
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
	pub pattern: Option<Regex>,
}

impl ValidationRule {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn min_length(mut self, min: usize) -> Self {
		self.min_length = Some(min);
		self
	}

	pub fn max_length(mut self, max: usize) -> Self {
		self.max_length = Some(max);
		self
	}

	/// Sets the pattern. The whole trimmed value has to match it.
	pub fn pattern(mut self, pattern: &str) -> ClResult<Self> {
		let anchored = format!("^(?:{})$", pattern);
		let re = Regex::new(&anchored)
			.map_err(|e| Error::ConfigError(format!("invalid validation pattern: {}", e)))?;
		self.pattern = Some(re);
		Ok(self)
	}
}

/// Checks `value` against `rule`. Length is counted in characters.
pub fn validate(value: &str, rule: &ValidationRule) -> Result<(), ValidationError> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		return Err(ValidationError::EmptyInput);
	}

	let len = trimmed.chars().count();
	if let Some(min) = rule.min_length {
		if len < min {
			return Err(ValidationError::TooShort { min });
		}
	}
	if let Some(max) = rule.max_length {
		if len > max {
			return Err(ValidationError::TooLong { max });
		}
	}
	if let Some(pattern) = &rule.pattern {
		if !pattern.is_match(trimmed) {
			return Err(ValidationError::PatternMismatch);
		}
	}

	Ok(())
}

/// Sanitizes `value` and validates the cleaned result, returning it trimmed
pub fn sanitize_and_validate(value: &str, rule: &ValidationRule) -> Result<String, ValidationError> {
	let clean = sanitize(value);
	validate(&clean, rule)?;
	Ok(clean.trim().to_string())
}

// Named rule sets //
//*****************//
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
	ProjectName,
	ProjectDescription,
	CategoryName,
	Url,
	Email,
	Phone,
	LoginUsername,
	LoginPassword,
}

impl RuleName {
	pub const ALL: [RuleName; 8] = [
		RuleName::ProjectName,
		RuleName::ProjectDescription,
		RuleName::CategoryName,
		RuleName::Url,
		RuleName::Email,
		RuleName::Phone,
		RuleName::LoginUsername,
		RuleName::LoginPassword,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			RuleName::ProjectName => "PROJECT_NAME",
			RuleName::ProjectDescription => "PROJECT_DESCRIPTION",
			RuleName::CategoryName => "CATEGORY_NAME",
			RuleName::Url => "URL",
			RuleName::Email => "EMAIL",
			RuleName::Phone => "PHONE",
			RuleName::LoginUsername => "LOGIN_USERNAME",
			RuleName::LoginPassword => "LOGIN_PASSWORD",
		}
	}
}

impl FromStr for RuleName {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		RuleName::ALL
			.into_iter()
			.find(|name| name.as_str() == s)
			.ok_or_else(|| Error::ValidationError(format!("unknown rule set: {}", s)))
	}
}

impl std::fmt::Display for RuleName {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

const TEXT_PATTERN: &str = r"[a-zA-Z0-9\s\-_.,!?()]+";
const MULTILINE_TEXT_PATTERN: &str = r"[a-zA-Z0-9\s\-_.,!?()\n]+";
const CATEGORY_PATTERN: &str = r"[a-zA-Z0-9\s\-_]+";
const URL_PATTERN: &str = r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)";
const EMAIL_PATTERN: &str = r"[^\s@]+@[^\s@]+\.[^\s@]+";
const PHONE_PATTERN: &str = r"\+?[0-9\s\-()]{10,20}";
const USERNAME_PATTERN: &str = r"[a-zA-Z0-9_]+";

/// The immutable table of named rule sets.
///
/// Built once at startup with [`RuleSet::standard`] and shared by reference.
#[derive(Debug, Clone)]
pub struct RuleSet {
	rules: HashMap<RuleName, ValidationRule>,
}

impl RuleSet {
	pub fn standard() -> ClResult<Self> {
		let rules = HashMap::from([
			(
				RuleName::ProjectName,
				ValidationRule::new().min_length(1).max_length(100).pattern(TEXT_PATTERN)?,
			),
			(
				RuleName::ProjectDescription,
				ValidationRule::new().min_length(1).max_length(1000).pattern(MULTILINE_TEXT_PATTERN)?,
			),
			(
				RuleName::CategoryName,
				ValidationRule::new().min_length(1).max_length(50).pattern(CATEGORY_PATTERN)?,
			),
			(RuleName::Url, ValidationRule::new().pattern(URL_PATTERN)?),
			(RuleName::Email, ValidationRule::new().pattern(EMAIL_PATTERN)?),
			(RuleName::Phone, ValidationRule::new().pattern(PHONE_PATTERN)?),
			(
				RuleName::LoginUsername,
				ValidationRule::new().min_length(3).max_length(50).pattern(USERNAME_PATTERN)?,
			),
			(RuleName::LoginPassword, ValidationRule::new().min_length(6).max_length(100)),
		]);
		Ok(Self { rules })
	}

	pub fn get(&self, name: RuleName) -> Option<&ValidationRule> {
		self.rules.get(&name)
	}

	/// Validates `value` against a named rule set
	pub fn validate(&self, name: RuleName, value: &str) -> Result<(), ValidationError> {
		match self.get(name) {
			Some(rule) => validate(value, rule),
			// Every name is registered by `standard`, an empty table only rejects blanks
			None => validate(value, &ValidationRule::default()),
		}
	}

	pub fn sanitize_and_validate(
		&self,
		name: RuleName,
		value: &str,
	) -> Result<String, ValidationError> {
		let clean = sanitize(value);
		self.validate(name, &clean)?;
		Ok(clean.trim().to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rules() -> RuleSet {
		RuleSet::standard().unwrap()
	}

	#[test]
	fn test_empty_input_for_any_rule() {
		let rules = rules();
		for name in RuleName::ALL {
			assert_eq!(rules.validate(name, ""), Err(ValidationError::EmptyInput));
			assert_eq!(rules.validate(name, "   \n"), Err(ValidationError::EmptyInput));
		}
		assert_eq!(validate("", &ValidationRule::new()), Err(ValidationError::EmptyInput));
	}

	#[test]
	fn test_min_length() {
		let rule = ValidationRule::new().min_length(3);
		assert_eq!(validate("ab", &rule), Err(ValidationError::TooShort { min: 3 }));
		assert_eq!(validate("abc", &rule), Ok(()));
		// Length is measured after trimming
		assert_eq!(validate("  ab  ", &rule), Err(ValidationError::TooShort { min: 3 }));
	}

	#[test]
	fn test_max_length_counts_chars() {
		let rule = ValidationRule::new().max_length(3);
		assert_eq!(validate("abcd", &rule), Err(ValidationError::TooLong { max: 3 }));
		assert_eq!(validate("äöü", &rule), Ok(()));
	}

	#[test]
	fn test_short_circuit_order() {
		let rule = ValidationRule::new().min_length(5).pattern("[0-9]+").unwrap();
		// Both too short and wrong pattern: length wins
		assert_eq!(validate("ab", &rule), Err(ValidationError::TooShort { min: 5 }));
		assert_eq!(validate("abcdef", &rule), Err(ValidationError::PatternMismatch));
		assert_eq!(validate("123456", &rule), Ok(()));
	}

	#[test]
	fn test_pattern_must_match_fully() {
		let rule = ValidationRule::new().pattern("[a-z]+").unwrap();
		assert_eq!(validate("abc", &rule), Ok(()));
		assert_eq!(validate("abc1", &rule), Err(ValidationError::PatternMismatch));
		assert_eq!(validate(" abc ", &rule), Ok(()));
	}

	#[test]
	fn test_invalid_pattern_is_config_error() {
		assert!(matches!(ValidationRule::new().pattern("(unclosed"), Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_project_name() {
		let rules = rules();
		assert_eq!(rules.validate(RuleName::ProjectName, "E-commerce Platform (v2)!"), Ok(()));
		assert_eq!(
			rules.validate(RuleName::ProjectName, "Bad <tag>"),
			Err(ValidationError::PatternMismatch)
		);
		assert_eq!(
			rules.validate(RuleName::ProjectName, &"x".repeat(101)),
			Err(ValidationError::TooLong { max: 100 })
		);
	}

	#[test]
	fn test_project_description_allows_newlines() {
		let rules = rules();
		assert_eq!(rules.validate(RuleName::ProjectDescription, "Line one.\nLine two?"), Ok(()));
		assert_eq!(
			rules.validate(RuleName::ProjectDescription, &"y".repeat(1001)),
			Err(ValidationError::TooLong { max: 1000 })
		);
	}

	#[test]
	fn test_category_name() {
		let rules = rules();
		assert_eq!(rules.validate(RuleName::CategoryName, "Web Development"), Ok(()));
		assert_eq!(rules.validate(RuleName::CategoryName, "UI_UX-design"), Ok(()));
		assert_eq!(
			rules.validate(RuleName::CategoryName, "Design/UX"),
			Err(ValidationError::PatternMismatch)
		);
		assert_eq!(
			rules.validate(RuleName::CategoryName, &"c".repeat(51)),
			Err(ValidationError::TooLong { max: 50 })
		);
	}

	#[test]
	fn test_url() {
		let rules = rules();
		for ok in [
			"https://github.com/exemplo/ecommerce",
			"http://www.example.com",
			"https://images.unsplash.com/photo-1?w=800&h=400&fit=crop",
		] {
			assert_eq!(rules.validate(RuleName::Url, ok), Ok(()), "{}", ok);
		}
		for bad in ["ftp://example.com", "example.com", "https://localhost", "javascript:alert(1)"] {
			assert_eq!(
				rules.validate(RuleName::Url, bad),
				Err(ValidationError::PatternMismatch),
				"{}",
				bad
			);
		}
	}

	#[test]
	fn test_email() {
		let rules = rules();
		assert_eq!(rules.validate(RuleName::Email, "contact@portfolio.com"), Ok(()));
		for bad in ["contact", "a@b", "a@@b.com", "a b@c.com"] {
			assert_eq!(
				rules.validate(RuleName::Email, bad),
				Err(ValidationError::PatternMismatch),
				"{}",
				bad
			);
		}
	}

	#[test]
	fn test_phone() {
		let rules = rules();
		assert_eq!(rules.validate(RuleName::Phone, "(11) 99999-9999"), Ok(()));
		assert_eq!(rules.validate(RuleName::Phone, "+55 11 99999 9999"), Ok(()));
		assert_eq!(rules.validate(RuleName::Phone, "12345"), Err(ValidationError::PatternMismatch));
		assert_eq!(
			rules.validate(RuleName::Phone, "call me maybe"),
			Err(ValidationError::PatternMismatch)
		);
	}

	#[test]
	fn test_login_rules() {
		let rules = rules();
		assert_eq!(rules.validate(RuleName::LoginUsername, "admin"), Ok(()));
		assert_eq!(
			rules.validate(RuleName::LoginUsername, "ad"),
			Err(ValidationError::TooShort { min: 3 })
		);
		assert_eq!(
			rules.validate(RuleName::LoginUsername, "ad min"),
			Err(ValidationError::PatternMismatch)
		);
		assert_eq!(rules.validate(RuleName::LoginPassword, "admin123"), Ok(()));
		assert_eq!(
			rules.validate(RuleName::LoginPassword, "12345"),
			Err(ValidationError::TooShort { min: 6 })
		);
	}

	#[test]
	fn test_sanitize_then_validate() {
		let rules = rules();
		assert_eq!(
			rules.sanitize_and_validate(RuleName::ProjectName, "  <b>My App</b> "),
			Ok("My App".to_string())
		);
		assert_eq!(
			rules.sanitize_and_validate(RuleName::ProjectName, "<script>x</script>"),
			Err(ValidationError::EmptyInput)
		);
	}

	#[test]
	fn test_rule_name_round_trip() {
		for name in RuleName::ALL {
			assert_eq!(name.as_str().parse::<RuleName>().unwrap(), name);
		}
		assert!("NOPE".parse::<RuleName>().is_err());
	}

	#[test]
	fn test_error_messages() {
		assert_eq!(ValidationError::TooShort { min: 3 }.message(), "Minimum of 3 characters");
		let err = ValidationError::EmptyInput.for_field("name");
		assert!(matches!(err, Error::ValidationError(msg) if msg == "name: Field is required"));
	}
}

// vim: ts=4
