//! `[author]` configuration.
//!
//! The site's single author, embedded as a `Person` record in every page
//! and in the site record.
//!
//! ```toml
//! [author]
//! name = "Jane Doe"
//! given-name = "Jane"
//! family-name = "Doe"
//! job-title = "Software Engineer"
//!
//! [author.alumni]
//! name = "Example University"
//!
//! [author.alumni.address]
//! country = "Poland"
//! city = "Wrocław"
//! street-address = "Main Street 1"
//! postal-code = "50-370"
//!
//! [author.credential]
//! degree-name = "Master of Science"
//! degree-level = "Masters"
//! field = "Computer Science"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AuthorConfig {
    pub name: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub job_title: Option<String>,
    /// School the author graduated from.
    pub alumni: Option<AlumniConfig>,
    pub credential: Option<CredentialConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AlumniConfig {
    pub name: String,
    pub address: Option<AddressConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AddressConfig {
    pub country: Option<String>,
    pub city: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CredentialConfig {
    /// e.g. "Master of Science"
    pub degree_name: Option<String>,
    /// e.g. "Masters"
    pub degree_level: Option<String>,
    /// e.g. "Computer Science"
    pub field: Option<String>,
}

impl AuthorConfig {
    pub const NAME: FieldPath = FieldPath::new("author.name");
    pub const ALUMNI_NAME: FieldPath = FieldPath::new("author.alumni.name");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::NAME,
                "author name is required",
                "add [author] with name = \"Your Name\"",
            );
        }

        if let Some(alumni) = &self.alumni
            && alumni.name.trim().is_empty()
        {
            diag.error(Self::ALUMNI_NAME, "alumni organization needs a name");
        }
    }
}
