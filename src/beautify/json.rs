//! JSON structural transforms: pretty-print, key sort, minify, YAML bridge.

use crate::error::BeautifyError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// Pretty-print a whole JSON document with the given indent width.
///
/// Key order is preserved (the crate enables `preserve_order`).
pub(crate) fn pretty(code: &str, size: usize) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(code)?;
    to_string_indented(&value, size)
}

/// Beautify strategy: whole-document pretty-print, falling back to
/// line-by-line recovery for JSON-Lines-like or fragmented input.
///
/// Recovery reformats each parseable non-blank line independently and keeps
/// failed lines unchanged; when no line parses at all, the original
/// whole-document parse error is raised.
pub(crate) fn format(code: &str, size: usize) -> Result<String, serde_json::Error> {
    match pretty(code, size) {
        Ok(formatted) => Ok(formatted),
        Err(parse_err) => {
            tracing::debug!("whole-document JSON parse failed; trying line recovery");
            recover_lines(code, size).ok_or(parse_err)
        }
    }
}

fn recover_lines(code: &str, size: usize) -> Option<String> {
    let mut formatted = Vec::new();
    let mut reformatted_any = false;
    for line in code.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            formatted.push(String::new());
            continue;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => match to_string_indented(&value, size) {
                Ok(pretty_line) => {
                    formatted.push(pretty_line);
                    reformatted_any = true;
                }
                Err(_) => formatted.push(line.to_string()),
            },
            Err(_) => formatted.push(line.to_string()),
        }
    }
    reformatted_any.then(|| formatted.join("\n"))
}

/// Recursively sort object keys; arrays keep their order but their elements
/// are sorted recursively. Reserializes with the given indent.
pub(crate) fn sort(code: &str, size: usize) -> Result<String, BeautifyError> {
    let value: Value = serde_json::from_str(code)?;
    Ok(to_string_indented(&sort_value(value), size)?)
}

fn sort_value(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(sort_value).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, nested)| (key, sort_value(nested)))
                    .collect(),
            )
        }
        scalar => scalar,
    }
}

/// Reserialize with no interstitial whitespace.
pub(crate) fn compact(code: &str) -> Result<String, BeautifyError> {
    let value: Value = serde_json::from_str(code)?;
    Ok(serde_json::to_string(&value)?)
}

/// JSON → YAML, preserving key order, nesting, and scalar types.
pub(crate) fn to_yaml(code: &str) -> Result<String, BeautifyError> {
    let value: Value = serde_json::from_str(code)?;
    Ok(serde_yaml::to_string(&value)?)
}

/// YAML → JSON, pretty-printed with a 2-space indent.
pub(crate) fn from_yaml(yaml: &str) -> Result<String, BeautifyError> {
    let value: Value = serde_yaml::from_str(yaml)?;
    Ok(to_string_indented(&value, 2)?)
}

fn to_string_indented(value: &Value, size: usize) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(size.max(1));
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(|err| serde::ser::Error::custom(err.to_string()))
}
