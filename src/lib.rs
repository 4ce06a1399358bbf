//! Structured-data (schema.org JSON-LD) generation for Markdown blogs.
//!
//! - [`utils::date`] normalizes loosely-typed dates from frontmatter.
//! - [`seo`] builds `@type`-tagged records for the author, site and pages.
//! - [`page`] reads Markdown files and resolves their metadata.
//! - [`config`] loads `blogmeta.toml`.

pub mod config;
pub mod logger;
pub mod page;
pub mod seo;
pub mod utils;
