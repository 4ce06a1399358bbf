//! Frontmatter extraction from YAML-like (`---`) or TOML (`+++`) blocks.

use anyhow::{Result, anyhow};

use super::{PageKind, PageMeta};
use crate::utils::date::DateInput;

/// Extract frontmatter and return (metadata, body).
///
/// Returns `None` when the content has no frontmatter block.
pub fn extract_frontmatter(content: &str) -> Result<Option<(PageMeta, &str)>> {
    match detect_frontmatter(content) {
        Some((fm, body, is_toml)) => {
            let meta = if is_toml {
                parse_toml(fm)?
            } else {
                parse_yaml_like(fm)?
            };
            Ok(Some((meta, body)))
        }
        None => Ok(None),
    }
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    // YAML: ---...---
    if let Some(rest) = trimmed.strip_prefix("---")
        && let Some(end) = rest.find("\n---")
    {
        let fm = rest[..end].trim();
        let body = rest[end + 4..].trim_start_matches('\n');
        return Some((fm, body, false));
    }

    // TOML: +++...+++
    if let Some(rest) = trimmed.strip_prefix("+++")
        && let Some(end) = rest.find("\n+++")
    {
        let fm = rest[..end].trim();
        let body = rest[end + 4..].trim_start_matches('\n');
        return Some((fm, body, true));
    }

    None
}

/// Parse TOML frontmatter.
fn parse_toml(content: &str) -> Result<PageMeta> {
    toml::from_str(content).map_err(|e| anyhow!("Invalid TOML frontmatter: {}", e))
}

/// Parse simple YAML-like frontmatter (key: value).
///
/// Supports standard fields (title, date, etc.) and custom fields in `extra`.
fn parse_yaml_like(content: &str) -> Result<PageMeta> {
    let mut meta = PageMeta::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key_lower = key.trim().to_lowercase();
        let value = unquote(value.trim());

        match key_lower.as_str() {
            "title" => meta.title = non_empty(value),
            "date" => meta.date = non_empty(value).map(date_input),
            "update" | "updated" | "modified" => meta.update = non_empty(value).map(date_input),
            "description" => meta.description = non_empty(value),
            "summary" => meta.summary = non_empty(value),
            "kind" => meta.kind = Some(value.parse::<PageKind>().map_err(|e| anyhow!(e))?),
            "permalink" | "slug" => meta.permalink = non_empty(value),
            _ => {
                // Custom field -> extra (preserve original key case)
                let key = key.trim().to_string();
                meta.extra.insert(key, parse_yaml_value(value));
            }
        }
    }

    Ok(meta)
}

/// A bare integer is a millisecond timestamp, anything else is date text.
fn date_input(value: String) -> DateInput {
    match value.parse::<i64>() {
        Ok(millis) => DateInput::Timestamp(millis),
        Err(_) => DateInput::Text(value),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Parse a YAML-like value string to JSON value
///
/// Supports:
/// - Booleans: `true`, `false`
/// - Numbers: `123`, `3.14`
/// - Arrays: `a, b, c` or `[a, b, c]` -> `["a", "b", "c"]`
/// - Strings: everything else
fn parse_yaml_value(s: &str) -> serde_json::Value {
    use serde_json::Value;

    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }

    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }

    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    let list = s.strip_prefix('[').and_then(|s| s.strip_suffix(']'));
    if let Some(items) = list.or_else(|| s.contains(',').then_some(s)) {
        let arr: Vec<Value> = items
            .split(',')
            .map(|item| Value::String(unquote(item.trim()).to_string()))
            .filter(|v| !matches!(v, Value::String(s) if s.is_empty()))
            .collect();
        return Value::Array(arr);
    }

    Value::String(s.to_string())
}
