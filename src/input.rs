use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::{ItemError, StructuralError};
use crate::parser::{self, json_kind, ParsedItem};

/// One scraped listing as it appears in the input document.
#[derive(Debug, Clone, Copy)]
pub struct RawItem<'a> {
    pub name: &'a str,
    pub reviews: Option<&'a Value>,
}

impl<'a> RawItem<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self, ItemError> {
        let obj = value.as_object().ok_or_else(|| {
            ItemError::Unexpected(format!("item is a {}, not an object", json_kind(value)))
        })?;
        let name = obj.get("name").ok_or(ItemError::MissingNameField)?;
        let name = name.as_str().ok_or_else(|| {
            ItemError::Unexpected(format!("'name' is a {}, not text", json_kind(name)))
        })?;

        Ok(RawItem {
            name,
            reviews: obj.get("reviews"),
        })
    }

    pub fn parse(&self) -> Result<ParsedItem, ItemError> {
        parser::parse_item(self.name, self.reviews)
    }
}

pub fn load_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading input file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("decoding JSON from {}", path.display()))
}

/// The item list stored under `key`.
pub fn collection<'a>(doc: &'a Value, key: &str) -> Result<&'a [Value], StructuralError> {
    match doc.get(key) {
        None => Err(StructuralError::MissingCollection(key.to_string())),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(StructuralError::NotASequence(key.to_string())),
    }
}
