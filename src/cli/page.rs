//! Page command implementation.
//!
//! Builds page records for many Markdown files in parallel. Output keeps
//! the order of the files on the command line.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use blogmeta::config::SiteConfig;
use blogmeta::page::{Document, PageKind, describe};
use blogmeta::seo::{PageRecord, SchemaBuilder};
use blogmeta::utils::text::plural_count;
use blogmeta::{debug, log};
use rayon::prelude::*;

use super::{PageArgs, render_records};

/// Execute page command
pub fn run_page(config: &SiteConfig, args: &PageArgs) -> Result<()> {
    debug!("page"; "describing {}", plural_count(args.files.len(), "file"));

    let records = build_records(config, &args.files, args.kind)?;
    println!("{}", render_records(&records, &args.output)?);
    Ok(())
}

/// Build one record per file, logging every failure before giving up.
fn build_records(
    config: &SiteConfig,
    files: &[PathBuf],
    kind: Option<PageKind>,
) -> Result<Vec<PageRecord>> {
    let builder = SchemaBuilder::from_config(config);

    let results: Vec<_> = files
        .par_iter()
        .map(|file| build_record(config, &builder, file, kind))
        .collect();

    let mut records = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                log!("error"; "{}: {:#}", file.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("failed to describe {}", plural_count(failed, "page"));
    }
    Ok(records)
}

fn build_record(
    config: &SiteConfig,
    builder: &SchemaBuilder,
    file: &Path,
    kind: Option<PageKind>,
) -> Result<PageRecord> {
    let doc = Document::read(file)?;
    let descriptor = describe(config, &doc, kind, PageKind::Default)?;

    if descriptor.title.is_none() {
        log!("warning"; "{}: no title, headline omitted", file.display());
    }
    if config.site.url.is_none() {
        debug!("page"; "{}: site.url is not set, url is site-relative", file.display());
    }

    Ok(builder.page(&descriptor)?)
}
