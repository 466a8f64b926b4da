//! Word-count size estimation for nested JSON data

use serde::Serialize;
use serde_json::Value;

/// Estimate the size of a JSON value in whitespace-separated words
///
/// - Strings: number of words in the text
/// - Objects: words in each key plus the size of its value
/// - Arrays: sum of the sizes of the items
/// - Numbers, booleans and null: words in their canonical text form
pub fn estimate_size(value: &Value) -> usize {
    match value {
        Value::String(text) => word_count(text),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| word_count(key) + estimate_size(value))
            .sum(),
        Value::Array(items) => items.iter().map(estimate_size).sum(),
        scalar => word_count(&scalar.to_string()),
    }
}

/// Estimate the size of any serializable value, measured on its JSON form
pub fn estimate_size_of<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<usize> {
    Ok(estimate_size(&serde_json::to_value(value)?))
}

/// Count whitespace-separated words in text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
