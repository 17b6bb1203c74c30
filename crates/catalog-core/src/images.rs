//! Image reference normalization
//!
//! The upstream API is inconsistent about product images. Besides plain URLs
//! an entry can be a whole JSON array serialized into one string, or a URL
//! with leftover `[`, `]` and `"` characters from a broken split of such a
//! string, e.g.:
//!
//! ```text
//! ["https://a.png", "[\"https://b.png\",\"https://c.png\"]", "[\"https://d.png\"", "\"https://e.png\"]"]
//! ```
//!
//! Normalization turns any of these into a non-empty list of usable URLs,
//! falling back to a single placeholder.

use serde_json::Value;

/// Clean a product's raw `images` value into displayable URLs.
///
/// Steps, in order:
/// 1. Anything other than a non-empty array yields `[placeholder]`.
/// 2. Falsy entries (`null`, `false`, `0`, `""`) are skipped.
/// 3. A string entry that starts with `[` and ends with `]` and parses as a
///    JSON array is replaced by that array's elements. One level only; a
///    failed parse keeps the string as-is.
/// 4. Every string has `[`, `]` and `"` removed and is trimmed. Non-string
///    values become empty strings.
/// 5. Only strings starting with `http://` or `https://` are kept.
/// 6. If nothing survives, the result is `[placeholder]`.
pub fn normalize_images(raw: &Value, placeholder: &str) -> Vec<String> {
    let entries = match raw.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return vec![placeholder.to_string()],
    };

    let mut cleaned = Vec::with_capacity(entries.len());
    for entry in entries {
        if is_falsy(entry) {
            continue;
        }
        match entry.as_str().and_then(unwrap_json_array) {
            Some(inner) => cleaned.extend(inner.iter().map(clean_reference)),
            None => cleaned.push(clean_reference(entry)),
        }
    }

    let urls: Vec<String> = cleaned.into_iter().filter(|url| has_http_scheme(url)).collect();
    if urls.is_empty() {
        tracing::debug!(raw = %raw, "no usable image reference, using placeholder");
        vec![placeholder.to_string()]
    } else {
        urls
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn unwrap_json_array(s: &str) -> Option<Vec<Value>> {
    if !(s.starts_with('[') && s.ends_with(']')) {
        return None;
    }
    match serde_json::from_str(s) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

fn clean_reference(value: &Value) -> String {
    match value {
        Value::String(s) => s.replace(['[', ']', '"'], "").trim().to_string(),
        _ => String::new(),
    }
}

fn has_http_scheme(url: &str) -> bool {
    let starts_with = |prefix: &str| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    starts_with("http://") || starts_with("https://")
}
