//! JSON-LD serialization and `<script>` embedding.

use serde::Serialize;
use serde_json::{Map, Value};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Serialize `record` as a JSON-LD document with `@context` first.
///
/// Non-object values are wrapped as `{ "@context", "@graph": [...] }`.
pub fn to_json_ld<T: Serialize>(record: &T) -> serde_json::Result<Value> {
    let mut doc = Map::new();
    doc.insert("@context".to_string(), Value::from(SCHEMA_CONTEXT));

    match serde_json::to_value(record)? {
        Value::Object(fields) => doc.extend(fields),
        Value::Array(items) => {
            doc.insert("@graph".to_string(), Value::Array(items));
        }
        other => {
            doc.insert("@graph".to_string(), Value::Array(vec![other]));
        }
    }
    Ok(Value::Object(doc))
}

/// Render `record` as a `<script type="application/ld+json">` element.
///
/// `<`, `>` and `&` are written as JSON unicode escapes so text such as
/// `</script>` inside a field cannot close the element early.
pub fn to_script_tag<T: Serialize>(record: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(&to_json_ld(record)?)?;
    Ok(format!(
        r#"<script type="application/ld+json">{}</script>"#,
        escape_script(&json)
    ))
}

fn escape_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_comes_first() {
        let doc = to_json_ld(&json!({ "@type": "WebSite", "name": "Blog" })).unwrap();
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["@context", "@type", "name"]);
        assert_eq!(doc["@context"], SCHEMA_CONTEXT);
    }

    #[test]
    fn test_array_becomes_graph() {
        let doc = to_json_ld(&json!([{ "@type": "WebPage" }])).unwrap();
        assert_eq!(
            doc,
            json!({ "@context": SCHEMA_CONTEXT, "@graph": [{ "@type": "WebPage" }] })
        );
    }

    #[test]
    fn test_script_tag_escapes_markup() {
        let tag = to_script_tag(&json!({ "headline": "</script><b>Tom & Jerry</b>" })).unwrap();
        assert!(tag.starts_with(r#"<script type="application/ld+json">{"@context""#));
        assert!(tag.ends_with("</script>"));
        assert_eq!(tag.matches("</script>").count(), 1);
        assert!(tag.contains(r"\u003c/script\u003e"));
        assert!(tag.contains(r"Tom \u0026 Jerry"));
    }

    #[test]
    fn test_escaped_json_parses_back() {
        let record = json!({ "headline": "a < b && c > d" });
        let tag = to_script_tag(&record).unwrap();
        let body = tag
            .trim_start_matches(r#"<script type="application/ld+json">"#)
            .trim_end_matches("</script>");
        let parsed: Value = serde_json::from_str(body).unwrap();
        assert_eq!(parsed["headline"], "a < b && c > d");
    }
}
