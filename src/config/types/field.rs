//! Config field paths used in diagnostics.

use owo_colors::Style;
use std::fmt;

use crate::logger::paint;

/// A dotted path to a config field, e.g. `site.url`.
///
/// Sections expose their paths as associated constants so diagnostics
/// never spell a field name by hand:
///
/// ```ignore
/// diag.error(SiteInfoConfig::URL, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Top-level table, `site` for `site.url`.
    pub fn section(&self) -> &'static str {
        self.0.split_once('.').map_or(self.0, |(section, _)| section)
    }

    /// Path below the section, `alumni.name` for `author.alumni.name`.
    pub fn key(&self) -> &'static str {
        self.0.split_once('.').map_or(self.0, |(_, key)| key)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&paint(format_args!("`{}`", self.0), Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_and_key() {
        let path = FieldPath::new("author.alumni.name");
        assert_eq!(path.section(), "author");
        assert_eq!(path.key(), "alumni.name");

        let bare = FieldPath::new("site");
        assert_eq!(bare.section(), "site");
        assert_eq!(bare.key(), "site");
    }

    #[test]
    fn test_display_without_color() {
        owo_colors::set_override(false);
        assert_eq!(FieldPath::new("site.url").to_string(), "`site.url`");
    }
}
