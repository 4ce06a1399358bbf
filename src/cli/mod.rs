//! Command-line interface module.

mod args;
pub mod date;
pub mod page;
pub mod website;

pub use args::{Cli, Commands, DateFormat, OutputArgs, PageArgs};

use anyhow::Result;
use blogmeta::seo::{to_json_ld, to_script_tag};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Render records for stdout.
///
/// With `script`, one `<script>` element per record, one per line.
/// Otherwise pretty JSON: a single document, or an array for several.
pub fn render_records<T: Serialize>(records: &[T], output: &OutputArgs) -> Result<String> {
    if output.script {
        let tags = records
            .iter()
            .map(to_script_tag)
            .collect::<serde_json::Result<Vec<_>>>()?;
        return Ok(tags.join("\n"));
    }

    let mut docs = records
        .iter()
        .map(to_json_ld)
        .collect::<serde_json::Result<Vec<_>>>()?;

    let value = if docs.len() == 1 {
        docs.remove(0)
    } else {
        JsonValue::Array(docs)
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
