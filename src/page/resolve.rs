//! Frontmatter to [`PageDescriptor`] resolution.
//!
//! Each defaulted field has one documented precedence order:
//!
//! | Field        | Precedence                                              |
//! |--------------|---------------------------------------------------------|
//! | kind         | explicit override → frontmatter `kind` → fallback kind  |
//! | description  | `description` → `summary` → body excerpt                |
//! | url          | `permalink`/`slug` → `/<file stem>/`, joined on site url |
//! | modified     | `update` → publish date (applied by the schema builder) |

use std::path::Path;

use anyhow::Result;

use super::excerpt::{EXCERPT_LENGTH, excerpt};
use super::{Document, PageKind, PageMeta};
use crate::config::SiteConfig;
use crate::seo::PageDescriptor;
use crate::utils::date::{self, DateInput, InvalidDateError};

/// Page kind: override, then frontmatter, then `fallback`.
pub fn resolve_kind(meta: &PageMeta, override_kind: Option<PageKind>, fallback: PageKind) -> PageKind {
    override_kind.or(meta.kind).unwrap_or(fallback)
}

/// Description: frontmatter `description`, then `summary`, then an excerpt.
pub fn resolve_description(meta: &PageMeta, body: &str) -> Option<String> {
    [meta.description.as_deref(), meta.summary.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| excerpt(body, EXCERPT_LENGTH))
}

/// Site-relative page path: `permalink`, else `/<file stem>/`.
pub fn resolve_path(meta: &PageMeta, source: &Path) -> String {
    if let Some(permalink) = meta.permalink.as_deref().map(str::trim)
        && !permalink.is_empty()
    {
        return permalink.to_string();
    }

    let stem = match source.file_stem().and_then(|s| s.to_str()) {
        // `posts/hello/index.md` is served at `/hello/`
        Some("index") => source
            .parent()
            .and_then(Path::file_name)
            .and_then(|s| s.to_str())
            .unwrap_or(""),
        Some(stem) => stem,
        None => "",
    };

    if stem.is_empty() {
        "/".to_string()
    } else {
        format!("/{stem}/")
    }
}

/// Build the descriptor for `doc` using site-level fields from `config`.
pub fn describe(
    config: &SiteConfig,
    doc: &Document,
    override_kind: Option<PageKind>,
    fallback_kind: PageKind,
) -> Result<PageDescriptor> {
    let meta = &doc.meta;
    let url = config.resolve_url(&resolve_path(meta, &doc.path))?;
    let site_name = Some(config.site.title.clone()).filter(|s| !s.is_empty());

    Ok(PageDescriptor {
        kind: resolve_kind(meta, override_kind, fallback_kind),
        title: meta.title.clone(),
        url: Some(url),
        description: resolve_description(meta, &doc.body),
        published: meta.date.clone(),
        modified: meta.update.clone(),
        site_name,
        logo_url: config.logo_url()?,
    })
}

/// Date line shown under a post title.
///
/// `Updated: <date>` when an update date exists, otherwise the publish date.
pub fn post_date_label(
    published: Option<&DateInput>,
    updated: Option<&DateInput>,
) -> Result<Option<String>, InvalidDateError> {
    if let Some(updated) = date::to_display_string(updated)? {
        return Ok(Some(format!("Updated: {updated}")));
    }
    date::to_display_string(published)
}
