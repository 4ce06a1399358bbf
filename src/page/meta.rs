//! Page metadata from Markdown frontmatter.

use serde::{Deserialize, Serialize};

use super::PageKind;
use crate::utils::date::DateInput;

pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Page metadata from frontmatter in Markdown files
///
/// # Standard Fields
///
/// | Field         | Type           | Description                         |
/// |---------------|----------------|-------------------------------------|
/// | `title`       | `String`       | Page title, becomes the headline    |
/// | `date`        | `DateInput`    | Publication date                    |
/// | `update`      | `DateInput`    | Last update (`updated`, `modified`) |
/// | `description` | `String`       | SEO description                     |
/// | `summary`     | `String`       | Fallback description                |
/// | `kind`        | `PageKind`     | blog, about, contact or default     |
/// | `permalink`   | `String`       | Page path (`slug`)                  |
///
/// # Custom Fields (`extra`)
///
/// Everything else (`tags`, `draft`, ...) is kept in `extra` as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    pub title: Option<String>,
    pub date: Option<DateInput>,
    #[serde(alias = "updated", alias = "modified")]
    pub update: Option<DateInput>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub kind: Option<PageKind>,
    #[serde(alias = "slug")]
    pub permalink: Option<String>,
    /// Additional user-defined fields.
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_default() {
        let meta = PageMeta::default();
        assert!(meta.title.is_none());
        assert!(meta.date.is_none());
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_page_meta_deserialize() {
        let json = r#"{
            "title": "Hello",
            "date": "2024-01-15",
            "updated": 1718461845123,
            "kind": "blog",
            "slug": "/hello/",
            "tags": ["intro"],
            "series": "intro"
        }"#;
        let meta: PageMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.date, Some(DateInput::from("2024-01-15")));
        assert_eq!(meta.update, Some(DateInput::Timestamp(1_718_461_845_123)));
        assert_eq!(meta.kind, Some(PageKind::Blog));
        assert_eq!(meta.permalink.as_deref(), Some("/hello/"));
        assert_eq!(meta.extra["series"], "intro");
        assert_eq!(meta.extra["tags"], serde_json::json!(["intro"]));
    }
}
