//! schema.org records for the author, the site and individual pages.
//!
//! Every record serializes with an `@type` tag. Optional fields that are
//! absent are left out of the JSON instead of being written as `null`.
//!
//! ```text
//! BlogPosting / AboutPage / ContactPage / WebPage
//! ├── mainEntityOfPage: WebPage { @id }
//! ├── author: Person
//! │   ├── alumniOf: EducationalOrganization
//! │   │   └── address: PostalAddress
//! │   └── hasCredential: EducationalOccupationalCredential
//! └── publisher: Organization
//!     └── logo: ImageObject
//! ```

use anyhow::Result;
use serde::Serialize;

use crate::config::{AddressConfig, AlumniConfig, AuthorConfig, CredentialConfig, SiteConfig};
use crate::page::PageKind;
use crate::utils::date::{self, DateInput, InvalidDateError};

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Person", rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alumni_of: Option<EducationalOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_credential: Option<EducationalOccupationalCredential>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "EducationalOrganization")]
pub struct EducationalOrganization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "PostalAddress", rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "@type",
    rename = "EducationalOccupationalCredential",
    rename_all = "camelCase"
)]
pub struct EducationalOccupationalCredential {
    /// Degree name, e.g. "Master of Science".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_level: Option<String>,
    /// Field of study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Organization")]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "ImageObject")]
pub struct ImageObject {
    pub url: String,
}

/// Reference from a page record to the page itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "WebPage")]
pub struct WebPageRef {
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "WebSite")]
pub struct WebsiteRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub author: Person,
    pub publisher: Organization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    #[serde(rename = "@type")]
    pub kind: PageKind,
    pub main_entity_of_page: WebPageRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    pub author: Person,
    pub publisher: Organization,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// Inputs
// ============================================================================

/// Everything needed to describe one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDescriptor {
    pub kind: PageKind,
    pub title: Option<String>,
    /// Canonical absolute URL.
    pub url: Option<String>,
    pub description: Option<String>,
    pub published: Option<DateInput>,
    pub modified: Option<DateInput>,
    pub site_name: Option<String>,
    pub logo_url: Option<String>,
}

/// Site-level fields for the `WebSite` record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteDescriptor {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

impl WebsiteDescriptor {
    /// Take site fields from `[site]`, resolving the logo against the site URL.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let non_empty = |s: &str| Some(s.to_string()).filter(|s| !s.is_empty());
        Ok(Self {
            name: non_empty(&config.site.title),
            url: config.site.url.clone(),
            description: non_empty(&config.site.description),
            logo_url: config.logo_url()?,
        })
    }
}

/// Modification date to report: `modified` unless absent or blank,
/// otherwise the publish date.
pub fn resolve_modified<'a>(
    published: Option<&'a DateInput>,
    modified: Option<&'a DateInput>,
) -> Option<&'a DateInput> {
    modified.filter(|d| !d.is_blank()).or(published)
}

// ============================================================================
// Builder
// ============================================================================

/// Builds records around a fixed author identity.
///
/// The author record is computed once, so every record from the same
/// builder embeds an identical `Person`.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    author: Person,
}

impl SchemaBuilder {
    pub fn new(author: &AuthorConfig) -> Self {
        Self {
            author: person(author),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.author)
    }

    pub fn author(&self) -> Person {
        self.author.clone()
    }

    pub fn website(&self, site: &WebsiteDescriptor) -> WebsiteRecord {
        WebsiteRecord {
            url: site.url.clone(),
            name: site.name.clone(),
            description: site.description.clone(),
            author: self.author(),
            publisher: publisher(site.name.as_deref(), site.logo_url.as_deref()),
        }
    }

    /// Build a page record. Fails only when a date cannot be parsed.
    pub fn page(&self, page: &PageDescriptor) -> Result<PageRecord, InvalidDateError> {
        let modified = resolve_modified(page.published.as_ref(), page.modified.as_ref());

        Ok(PageRecord {
            kind: page.kind,
            main_entity_of_page: WebPageRef {
                id: page.url.clone(),
            },
            headline: page.title.clone(),
            date_published: date::to_iso_string(page.published.as_ref())?,
            date_modified: date::to_iso_string(modified)?,
            author: self.author(),
            publisher: publisher(page.site_name.as_deref(), page.logo_url.as_deref()),
            description: page.description.clone(),
        })
    }
}

fn publisher(name: Option<&str>, logo_url: Option<&str>) -> Organization {
    Organization {
        name: name.map(str::to_string),
        logo: logo_url.map(|url| ImageObject {
            url: url.to_string(),
        }),
    }
}

fn person(author: &AuthorConfig) -> Person {
    Person {
        name: author.name.clone(),
        family_name: author.family_name.clone(),
        given_name: author.given_name.clone(),
        alumni_of: author.alumni.as_ref().map(organization),
        job_title: author.job_title.clone(),
        has_credential: author.credential.as_ref().map(credential),
    }
}

fn organization(alumni: &AlumniConfig) -> EducationalOrganization {
    EducationalOrganization {
        address: alumni.address.as_ref().map(address),
        name: alumni.name.clone(),
    }
}

fn address(address: &AddressConfig) -> PostalAddress {
    PostalAddress {
        postal_code: address.postal_code.clone(),
        street_address: address.street_address.clone(),
        address_locality: address.city.clone(),
        address_country: address.country.clone(),
    }
}

fn credential(credential: &CredentialConfig) -> EducationalOccupationalCredential {
    EducationalOccupationalCredential {
        credential_category: credential.degree_name.clone(),
        educational_level: credential.degree_level.clone(),
        about: credential.field.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn author_config() -> AuthorConfig {
        AuthorConfig {
            name: "Jane Doe".into(),
            given_name: Some("Jane".into()),
            family_name: Some("Doe".into()),
            job_title: Some("Software Engineer".into()),
            alumni: Some(AlumniConfig {
                name: "Example University".into(),
                address: Some(AddressConfig {
                    country: Some("Poland".into()),
                    city: Some("Wrocław".into()),
                    street_address: Some("Main Street 1".into()),
                    postal_code: Some("50-370".into()),
                }),
            }),
            credential: Some(CredentialConfig {
                degree_name: Some("Master of Science".into()),
                degree_level: Some("Masters".into()),
                field: Some("Computer Science".into()),
            }),
        }
    }

    fn blog_post() -> PageDescriptor {
        PageDescriptor {
            kind: PageKind::Blog,
            title: Some("Hello".into()),
            url: Some("https://example.com/hello/".into()),
            description: Some("First post.".into()),
            published: Some(DateInput::from("2024-01-15")),
            modified: None,
            site_name: Some("Deep Dive".into()),
            logo_url: Some("https://example.com/logo.png".into()),
        }
    }

    #[test]
    fn test_author_record_shape() {
        let builder = SchemaBuilder::new(&author_config());
        assert_eq!(
            serde_json::to_value(builder.author()).unwrap(),
            json!({
                "@type": "Person",
                "name": "Jane Doe",
                "familyName": "Doe",
                "givenName": "Jane",
                "alumniOf": {
                    "@type": "EducationalOrganization",
                    "address": {
                        "@type": "PostalAddress",
                        "postalCode": "50-370",
                        "streetAddress": "Main Street 1",
                        "addressLocality": "Wrocław",
                        "addressCountry": "Poland"
                    },
                    "name": "Example University"
                },
                "jobTitle": "Software Engineer",
                "hasCredential": {
                    "@type": "EducationalOccupationalCredential",
                    "credentialCategory": "Master of Science",
                    "educationalLevel": "Masters",
                    "about": "Computer Science"
                }
            })
        );
    }

    #[test]
    fn test_minimal_author_omits_absent_fields() {
        let builder = SchemaBuilder::new(&AuthorConfig {
            name: "Jane".into(),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(builder.author()).unwrap(),
            json!({ "@type": "Person", "name": "Jane" })
        );
    }

    #[test]
    fn test_page_record_shape() {
        let builder = SchemaBuilder::new(&author_config());
        let record = builder.page(&blog_post()).unwrap();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["@type"], "BlogPosting");
        assert_eq!(
            value["mainEntityOfPage"],
            json!({ "@type": "WebPage", "@id": "https://example.com/hello/" })
        );
        assert_eq!(value["headline"], "Hello");
        assert_eq!(value["datePublished"], "2024-01-15T00:00:00.000Z");
        assert_eq!(value["description"], "First post.");
        assert_eq!(
            value["publisher"],
            json!({
                "@type": "Organization",
                "name": "Deep Dive",
                "logo": { "@type": "ImageObject", "url": "https://example.com/logo.png" }
            })
        );
    }

    #[test]
    fn test_modified_defaults_to_published() {
        let builder = SchemaBuilder::new(&author_config());
        let record = builder.page(&blog_post()).unwrap();
        assert!(record.date_published.is_some());
        assert_eq!(record.date_modified, record.date_published);

        let blank = PageDescriptor {
            modified: Some(DateInput::from(" ")),
            ..blog_post()
        };
        let record = builder.page(&blank).unwrap();
        assert_eq!(record.date_modified, record.date_published);
    }

    #[test]
    fn test_modified_date_wins_when_set() {
        let builder = SchemaBuilder::new(&author_config());
        let page = PageDescriptor {
            modified: Some(DateInput::from("2024-03-05T10:30:00Z")),
            ..blog_post()
        };
        let record = builder.page(&page).unwrap();
        assert_eq!(record.date_published.as_deref(), Some("2024-01-15T00:00:00.000Z"));
        assert_eq!(record.date_modified.as_deref(), Some("2024-03-05T10:30:00.000Z"));
    }

    #[test]
    fn test_page_without_dates() {
        let builder = SchemaBuilder::new(&author_config());
        let page = PageDescriptor {
            kind: PageKind::About,
            published: None,
            ..blog_post()
        };
        let value = serde_json::to_value(builder.page(&page).unwrap()).unwrap();
        assert_eq!(value["@type"], "AboutPage");
        assert!(value.get("datePublished").is_none());
        assert!(value.get("dateModified").is_none());
    }

    #[test]
    fn test_missing_title_and_url_pass_through() {
        let builder = SchemaBuilder::new(&author_config());
        let record = builder.page(&PageDescriptor::default()).unwrap();
        assert_eq!(record.kind, PageKind::Default);
        assert_eq!(record.headline, None);
        assert_eq!(
            serde_json::to_value(&record.main_entity_of_page).unwrap(),
            json!({ "@type": "WebPage" })
        );
        assert_eq!(
            serde_json::to_value(&record.publisher).unwrap(),
            json!({ "@type": "Organization" })
        );
    }

    #[test]
    fn test_invalid_date_propagates() {
        let builder = SchemaBuilder::new(&author_config());
        let page = PageDescriptor {
            published: Some(DateInput::from("not-a-date")),
            ..blog_post()
        };
        assert!(builder.page(&page).is_err());

        let page = PageDescriptor {
            modified: Some(DateInput::from("2024-13-01")),
            ..blog_post()
        };
        assert!(builder.page(&page).is_err());
    }

    #[test]
    fn test_website_and_page_share_author() {
        let builder = SchemaBuilder::new(&author_config());
        let site = WebsiteDescriptor {
            name: Some("Deep Dive".into()),
            url: Some("https://example.com/".into()),
            description: Some("A blog.".into()),
            logo_url: None,
        };

        let website = builder.website(&site);
        let page = builder.page(&blog_post()).unwrap();
        assert_eq!(website.author, page.author);
        assert_eq!(website.author, builder.author());

        let value = serde_json::to_value(&website).unwrap();
        assert_eq!(value["@type"], "WebSite");
        assert_eq!(value["url"], "https://example.com/");
        assert_eq!(
            value["publisher"],
            json!({ "@type": "Organization", "name": "Deep Dive" })
        );
    }

    #[test]
    fn test_website_descriptor_from_config() {
        let config = SiteConfig::from_str(
            "[site]\ntitle = \"Deep Dive\"\nurl = \"https://example.com/blog/\"\nlogo = \"logo.png\"\n",
        )
        .unwrap();
        let site = WebsiteDescriptor::from_config(&config).unwrap();
        assert_eq!(site.name.as_deref(), Some("Deep Dive"));
        assert_eq!(site.description, None);
        assert_eq!(
            site.logo_url.as_deref(),
            Some("https://example.com/blog/logo.png")
        );
    }

    #[test]
    fn test_resolve_modified() {
        let published = DateInput::from("2024-01-15");
        let modified = DateInput::from("2024-02-01");
        assert_eq!(resolve_modified(Some(&published), None), Some(&published));
        assert_eq!(
            resolve_modified(Some(&published), Some(&modified)),
            Some(&modified)
        );
        assert_eq!(resolve_modified(None, None), None);
    }
}
