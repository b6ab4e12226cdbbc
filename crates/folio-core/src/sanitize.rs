//! Markup stripping for free-form text.
//!
//! Every tag and attribute is removed; only text content survives, and it is
//! returned HTML-escaped so the result can be inserted into a document as-is.
//! The content of script-like elements is dropped together with the element.

use std::sync::LazyLock;

/// Elements whose text content is discarded along with the tag
static DROP_CONTENT_TAGS: [&str; 8] =
	["script", "style", "iframe", "noscript", "template", "noembed", "noframes", "xmp"];

static PLAIN_TEXT: LazyLock<ammonia::Builder<'static>> = LazyLock::new(|| {
	let mut cleaner = ammonia::Builder::empty();
	cleaner.strip_comments(true).add_clean_content_tags(&DROP_CONTENT_TAGS);
	cleaner
});

/// Strips all markup from `text`.
///
/// Total and idempotent: `sanitize(&sanitize(s)) == sanitize(s)` for every `s`.
pub fn sanitize(text: &str) -> String {
	if text.trim().is_empty() {
		return text.to_string();
	}
	PLAIN_TEXT.clean(text).to_string()
}

/// Sanitizes an optional field, mapping blank results to `None`
pub fn sanitize_opt(text: Option<&str>) -> Option<String> {
	text.map(sanitize).filter(|s| !s.trim().is_empty())
}


// vim: ts=4
