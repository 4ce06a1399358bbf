//! Site configuration management for `blogmeta.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── author     # [author]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `[site]`           | Site metadata (title, url, description, logo)|
//! | `[author]`         | Author identity for structured data          |

pub mod section;
pub mod types;
mod util;

pub use section::{AddressConfig, AlumniConfig, AuthorConfig, CredentialConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::{debug, log, utils::text::collapse_whitespace};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::Path,
};
use url::Url;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blogmeta.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site information
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Author identity
    #[serde(default)]
    pub author: AuthorConfig,
}

impl SiteConfig {
    /// Load and validate configuration.
    ///
    /// Relative names are searched upward from cwd.
    pub fn load(config_name: &Path) -> Result<Self> {
        let config_path = find_config_file(config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;
        debug!("config"; "using {}", config_path.display());

        let config = Self::from_path(&config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        config.finalize();
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.finalize();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Normalize values after loading.
    fn finalize(&mut self) {
        self.site.description = collapse_whitespace(&self.site.description);
    }

    /// Validate all sections, printing warnings and failing on errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.author.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Resolve a page path or slug against `site.url`.
    ///
    /// Paths stay below the site URL's own path, so a leading `/` means
    /// the site root, not the host root. Absolute URLs are returned
    /// unchanged. Without a site URL the path itself is returned.
    ///
    /// # Examples
    /// ```ignore
    /// // site.url = "https://example.com/blog"
    /// config.resolve_url("/hello-world/")  -> "https://example.com/blog/hello-world/"
    /// config.resolve_url("assets/logo.png") -> "https://example.com/blog/assets/logo.png"
    /// ```
    pub fn resolve_url(&self, path: &str) -> Result<String> {
        let Some(base) = &self.site.url else {
            return Ok(path.to_string());
        };
        let mut base = Url::parse(base).with_context(|| format!("invalid site url '{base}'"))?;
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }

        // `//host/x` is scheme-relative and keeps its leading slashes
        let relative = if path.starts_with("//") {
            path
        } else {
            path.trim_start_matches('/')
        };
        let joined = base
            .join(relative)
            .with_context(|| format!("cannot resolve '{path}' against '{base}'"))?;
        Ok(joined.to_string())
    }

    /// Absolute URL of the site logo, if configured.
    pub fn logo_url(&self) -> Result<Option<String>> {
        self.site
            .logo
            .as_deref()
            .map(|logo| self.resolve_url(logo))
            .transpose()
    }
}
