//! Presence and blankness of a single named field on a document node.

use serde_json::Value;

/// State of a textual attribute looked up on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute<'a> {
    /// The node has no such key (or is not a mapping at all)
    Missing,
    /// The key exists but holds no usable text
    Blank,
    /// The key holds at least one non-whitespace character
    Text(&'a str),
}

/// Look up `key` on `node` and classify its value.
///
/// Non-string values carry no text and are classified as [`Attribute::Blank`].
#[must_use]
pub fn attribute<'a>(node: &'a Value, key: &str) -> Attribute<'a> {
    match node.get(key) {
        None => Attribute::Missing,
        Some(value) if is_blank_value(value) => Attribute::Blank,
        Some(value) => value.as_str().map_or(Attribute::Blank, Attribute::Text),
    }
}

/// Returns true if `node[key]` holds only whitespace after trimming.
///
/// Presence is the caller's concern; an absent key has no text and counts as blank.
#[must_use]
pub fn is_blank(node: &Value, key: &str) -> bool {
    node.get(key).map_or(true, is_blank_value)
}

fn is_blank_value(value: &Value) -> bool {
    value.as_str().map_or(true, |text| text.trim().is_empty())
}
