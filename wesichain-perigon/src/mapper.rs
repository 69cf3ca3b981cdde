use std::collections::HashMap;

use serde_json::Value;
use wesichain_core::Document;

/// Article fields copied into document metadata as-is, keyed by their
/// metadata name.
const COPIED_FIELDS: [(&str, &str); 7] = [
    ("title", "title"),
    ("url", "url"),
    ("source", "source"),
    ("published_date", "publishedDate"),
    ("add_date", "addDate"),
    ("language", "language"),
    ("imageUrl", "imageUrl"),
];

/// Array fields flattened into `", "`-joined strings: (metadata key, article
/// field, name field inside each item).
const JOINED_FIELDS: [(&str, &str, &str); 5] = [
    ("entities", "entities", "data"),
    ("categories", "categories", "name"),
    ("topics", "topics", "name"),
    ("companies", "companies", "name"),
    ("people", "people", "name"),
];

/// Converts a vector search response into documents, one per result and in
/// response order. Missing fields never fail: text falls back to `""`, copied
/// fields to `null`, joined lists to `""`.
pub fn parse_response(raw: &Value) -> Vec<Document> {
    raw.get("results")
        .and_then(Value::as_array)
        .map(|results| results.iter().map(article_to_document).collect())
        .unwrap_or_default()
}

pub fn article_to_document(result: &Value) -> Document {
    let data = result.get("data").unwrap_or(&Value::Null);

    let page_content = data
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut metadata = HashMap::with_capacity(COPIED_FIELDS.len() + JOINED_FIELDS.len());
    for (key, field) in COPIED_FIELDS {
        let value = data.get(field).cloned().unwrap_or(Value::Null);
        metadata.insert(key.to_string(), value);
    }
    for (key, field, name_key) in JOINED_FIELDS {
        let joined = join_names(data.get(field), name_key);
        metadata.insert(key.to_string(), Value::String(joined));
    }

    Document {
        page_content,
        metadata,
    }
}

/// Joins the `name_key` string of every item in order. Items without one are
/// skipped.
pub fn join_names(items: Option<&Value>, name_key: &str) -> String {
    let Some(items) = items.and_then(Value::as_array) else {
        return String::new();
    };
    items
        .iter()
        .filter_map(|item| item.get(name_key).and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join(", ")
}
