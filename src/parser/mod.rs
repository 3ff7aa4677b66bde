pub mod extract;
pub mod lines;
pub mod zones;

use serde_json::Value;

use crate::error::{ItemError, Warning};
use crate::record::Restaurant;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedItem {
    pub record: Restaurant,
    pub warnings: Vec<Warning>,
}

/// Three-pass pipeline: raw text → lines → zones → record.
pub fn parse_item(text: &str, raw_reviews: Option<&Value>) -> Result<ParsedItem, ItemError> {
    let lines = lines::segment(text)?;
    let zones = zones::split(&lines);
    Ok(extract::extract_all(&zones, raw_reviews))
}

/// Short name of a JSON value's type, for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
