//! `[site]` configuration.
//!
//! Basic site information used by the `WebSite` record and by every page
//! record's publisher.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteInfoConfig {
    /// Site title, also the publisher organization name.
    pub title: String,

    /// Site URL; page and logo paths are resolved against it.
    pub url: Option<String>,

    /// Site description. Runs of whitespace are collapsed on load.
    pub description: String,

    /// Logo path or absolute URL.
    pub logo: Option<String>,
}

impl SiteInfoConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const LOGO: FieldPath = FieldPath::new("site.logo");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `logo` needs `url` unless it is absolute itself
    /// - an empty `title` is only a warning
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "site title is empty, publisher records will have no name");
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if let Some(logo) = &self.logo
            && self.url.is_none()
            && url::Url::parse(logo).is_err()
        {
            diag.error_with_hint(
                Self::LOGO,
                format!("relative logo path '{logo}' needs {}", Self::URL.as_str()),
                "set site.url or use an absolute logo URL",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnose(config: &SiteInfoConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag
    }

    #[test]
    fn test_default() {
        let config = SiteInfoConfig::default();
        assert!(config.url.is_none());
        assert!(!diagnose(&config).has_errors());
    }

    #[test]
    fn test_valid_url() {
        let config = SiteInfoConfig {
            title: "Blog".into(),
            url: Some("https://example.com/".into()),
            logo: Some("assets/logo.png".into()),
            ..Default::default()
        };
        let diag = diagnose(&config);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_invalid_urls() {
        for url in ["not a url", "ftp://example.com", "mailto:me@example.com"] {
            let config = SiteInfoConfig {
                url: Some(url.into()),
                ..Default::default()
            };
            let diag = diagnose(&config);
            assert!(diag.has_errors(), "{url} should be rejected");
            assert_eq!(diag.errors()[0].field, SiteInfoConfig::URL);
        }
    }

    #[test]
    fn test_relative_logo_without_url() {
        let config = SiteInfoConfig {
            logo: Some("logo.png".into()),
            ..Default::default()
        };
        let diag = diagnose(&config);
        assert_eq!(diag.errors()[0].field, SiteInfoConfig::LOGO);

        let config = SiteInfoConfig {
            logo: Some("https://cdn.example.com/logo.png".into()),
            ..Default::default()
        };
        assert!(!diagnose(&config).has_errors());
    }

    #[test]
    fn test_empty_title_warns() {
        let diag = diagnose(&SiteInfoConfig::default());
        assert_eq!(diag.warnings()[0].0, SiteInfoConfig::TITLE);
    }
}
