//! Configuration errors and validation diagnostics.
//!
//! Sections report problems into [`ConfigDiagnostics`] while validating.
//! Warnings are logged and loading continues; any error fails the load
//! with every problem listed under its section:
//!
//! ```text
//! blogmeta.toml has 2 errors
//! [site]
//!   url: invalid URL: relative URL without a base
//!     hint: use format like https://example.com
//! [author]
//!   name: author name is required
//! ```

use super::FieldPath;
use crate::logger::paint;
use crate::utils::text::plural_count;
use owo_colors::Style;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading `blogmeta.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("`{0}` not found in this directory or any parent")]
    NotFound(PathBuf),

    // No #[from]: the diagnostics already print every message.
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One validation error on a config field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

/// Prints as an indented entry under its section header.
impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = paint(self.field.key(), Style::new().cyan());
        write!(f, "  {key}: {}", self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {hint}", paint("hint:", Style::new().yellow()))?;
        }
        Ok(())
    }
}

/// Errors and warnings collected while validating `blogmeta.toml`.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(field, message.into(), Some(hint.into()));
    }

    fn push(&mut self, field: FieldPath, message: String, hint: Option<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message,
            hint,
        });
    }

    /// Warnings never fail a load.
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    pub fn print_warnings(&self) {
        for (field, message) in &self.warnings {
            crate::log!("warning"; "{}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Sections with errors, in the order they were first reported.
    fn sections(&self) -> Vec<&'static str> {
        let mut sections = Vec::new();
        for err in &self.errors {
            let section = err.field.section();
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        sections
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = plural_count(self.errors.len(), "error");
        write!(
            f,
            "{}",
            paint(format_args!("blogmeta.toml has {count}"), Style::new().red().bold())
        )?;

        for section in self.sections() {
            write!(f, "\n{}", paint(format_args!("[{section}]"), Style::new().dimmed()))?;
            for err in self.errors.iter().filter(|e| e.field.section() == section) {
                write!(f, "\n{err}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
