//! Markdown pages: frontmatter, excerpts, and descriptor resolution.
//!
//! # Module Structure
//!
//! ```text
//! page/
//! ├── frontmatter   # `---` / `+++` header extraction
//! ├── excerpt       # plain-text body excerpts
//! ├── kind          # PageKind (schema.org page type)
//! ├── meta          # PageMeta (frontmatter fields)
//! └── resolve       # PageMeta + Document -> PageDescriptor
//! ```

mod excerpt;
mod frontmatter;
mod kind;
mod meta;
pub mod resolve;

pub use excerpt::{EXCERPT_LENGTH, excerpt};
pub use frontmatter::extract_frontmatter;
pub use kind::PageKind;
pub use meta::{JsonMap, PageMeta};
pub use resolve::{describe, post_date_label};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A Markdown source file split into frontmatter and body.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Source path, used for the fallback URL and error messages.
    pub path: PathBuf,
    pub meta: PageMeta,
    /// Markdown after the frontmatter block.
    pub body: String,
}

impl Document {
    /// Read and parse a Markdown file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(path, &content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse `content` as if read from `path`.
    ///
    /// Files without frontmatter get default metadata and the whole
    /// content as body.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let (meta, body) = match extract_frontmatter(content)? {
            Some((meta, body)) => (meta, body),
            None => (PageMeta::default(), content),
        };

        Ok(Self {
            path: path.to_path_buf(),
            meta,
            body: body.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_with_frontmatter() {
        let content = "---\ntitle: Hello\ndate: 2024-01-15\n---\nBody text.\n";
        let doc = Document::parse(Path::new("hello.md"), content).unwrap();
        assert_eq!(doc.meta.title.as_deref(), Some("Hello"));
        assert_eq!(doc.body.trim(), "Body text.");
    }

    #[test]
    fn test_parse_without_frontmatter() {
        let doc = Document::parse(Path::new("plain.md"), "Just text.").unwrap();
        assert!(doc.meta.title.is_none());
        assert_eq!(doc.body, "Just text.");
    }

    #[test]
    fn test_read_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.md");
        fs::write(&path, "+++\ntitle = \n+++\n").unwrap();

        let err = Document::read(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.md"));
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Document::read(&temp.path().join("missing.md")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
