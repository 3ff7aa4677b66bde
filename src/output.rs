use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::record::Restaurant;

/// Serialize records, dropping every field that is null or empty in all of them.
pub fn prune_empty_fields(records: &[Restaurant]) -> Result<Vec<Map<String, Value>>> {
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        if let Value::Object(map) = serde_json::to_value(record)? {
            rows.push(map);
        }
    }

    let Some(first) = rows.first() else {
        return Ok(rows);
    };
    let empty: Vec<String> = first
        .keys()
        .filter(|key| rows.iter().all(|row| row.get(*key).map_or(true, is_empty)))
        .cloned()
        .collect();

    if !empty.is_empty() {
        for row in &mut rows {
            *row = std::mem::take(row)
                .into_iter()
                .filter(|(key, _)| !empty.contains(key))
                .collect();
        }
    }
    Ok(rows)
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

pub fn write_records(path: &Path, rows: &[Map<String, Value>]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json).with_context(|| format!("writing output file {}", path.display()))
}
