//! Structured data (schema.org JSON-LD) for pages and the site.

pub mod jsonld;
pub mod schema;

pub use jsonld::{to_json_ld, to_script_tag};
pub use schema::{
    PageDescriptor, PageRecord, Person, SchemaBuilder, WebsiteDescriptor, WebsiteRecord,
    resolve_modified,
};
