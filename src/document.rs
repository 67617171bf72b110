//! Page document model.
//!
//! A [`PageText`] is the in-memory document the extraction pipeline consumes:
//! a page title (a single-element list, as delivered by the fetcher) and the
//! page content as a list of text units (link texts or visible-text blocks).
//!
//! Documents can be built directly or validated out of loosely-shaped JSON,
//! in which case shape problems surface as distinct error kinds: a value that
//! is not a mapping is a wrong-type error, a mapping without `title` or
//! `content` is a missing-field error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TopicaError};

/// Raw text of a target page.
///
/// # Examples
///
/// ```
/// use topica::document::PageText;
///
/// let page = PageText::new(
///     vec!["Page title".to_string()],
///     vec!["First paragraph.".to_string(), "Second.".to_string()],
/// );
/// assert_eq!(page.title.len(), 1);
/// assert_eq!(page.content.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// The page title, wrapped in a single-element list.
    pub title: Vec<String>,

    /// Text units harvested from the page body.
    pub content: Vec<String>,
}

impl PageText {
    /// Create a new page document from title and content units.
    pub fn new(title: Vec<String>, content: Vec<String>) -> Self {
        PageText { title, content }
    }

    /// Validate and convert a JSON value into a page document.
    ///
    /// # Errors
    ///
    /// Returns [`TopicaError::InvalidType`] if `value` is not a JSON object
    /// or a field has the wrong shape, and [`TopicaError::MissingField`] if
    /// the object lacks a `title` or `content` key.
    pub fn from_json(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| TopicaError::invalid_type("document must be a JSON object"))?;

        for key in ["title", "content"] {
            if !map.contains_key(key) {
                return Err(TopicaError::missing_field(key));
            }
        }

        let title = Self::string_list(&map["title"], "title")?;
        let content = Self::string_list(&map["content"], "content")?;

        Ok(PageText { title, content })
    }

    /// Check whether the document carries no text at all.
    pub fn is_empty(&self) -> bool {
        self.title.iter().all(|t| t.trim().is_empty())
            && self.content.iter().all(|c| c.trim().is_empty())
    }

    fn string_list(value: &Value, field: &str) -> Result<Vec<String>> {
        let items = value
            .as_array()
            .ok_or_else(|| TopicaError::invalid_type(format!("{field} must be a list")))?;

        items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    TopicaError::invalid_type(format!("{field} must contain only strings"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_valid() {
        let value = json!({
            "title": ["Cats And Dogs"],
            "content": ["The cat sat.", "A dog ran."],
        });

        let page = PageText::from_json(&value).unwrap();
        assert_eq!(page.title, vec!["Cats And Dogs"]);
        assert_eq!(page.content.len(), 2);
    }

    #[test]
    fn test_from_json_not_an_object() {
        let value = json!(["not", "a", "mapping"]);
        let err = PageText::from_json(&value).unwrap_err();
        assert!(matches!(err, TopicaError::InvalidType(_)));
    }

    #[test]
    fn test_from_json_missing_content() {
        let value = json!({ "title": ["x"] });
        let err = PageText::from_json(&value).unwrap_err();
        // Missing key must surface as the missing-field kind, not wrong-type.
        match err {
            TopicaError::MissingField(field) => assert_eq!(field, "content"),
            other => panic!("expected missing-field error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_wrong_field_shape() {
        let value = json!({ "title": "not a list", "content": [] });
        let err = PageText::from_json(&value).unwrap_err();
        assert!(matches!(err, TopicaError::InvalidType(_)));
    }

    #[test]
    fn test_is_empty() {
        let page = PageText::new(vec!["  ".to_string()], vec![]);
        assert!(page.is_empty());

        let page = PageText::new(vec!["title".to_string()], vec![]);
        assert!(!page.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let page = PageText::new(vec!["t".to_string()], vec!["c".to_string()]);
        let json = serde_json::to_string(&page).unwrap();
        let back: PageText = serde_json::from_str(&json).unwrap();
        assert_eq!(page, back);
    }
}
