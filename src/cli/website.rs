//! Website command implementation.

use anyhow::Result;
use blogmeta::config::SiteConfig;
use blogmeta::log;
use blogmeta::seo::{SchemaBuilder, WebsiteDescriptor};

use super::{OutputArgs, render_records};

/// Execute website command
pub fn run_website(config: &SiteConfig, output: &OutputArgs) -> Result<()> {
    let site = WebsiteDescriptor::from_config(config)?;
    if site.url.is_none() {
        log!("warning"; "site.url is not set, WebSite record has no url");
    }

    let record = SchemaBuilder::from_config(config).website(&site);
    println!("{}", render_records(&[record], output)?);
    Ok(())
}
