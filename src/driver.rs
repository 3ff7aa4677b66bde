use indicatif::ProgressBar;
use serde_json::Value;
use tracing::{debug, warn};

use crate::diagnostics::{excerpt, Diagnostic, DiagnosticsSink};
use crate::input::RawItem;
use crate::record::Restaurant;

pub struct BatchOutcome {
    pub records: Vec<Restaurant>,
    pub skipped: usize,
}

impl BatchOutcome {
    pub fn parsed(&self) -> usize {
        self.records.len()
    }
}

/// Parse every item in input order. Failing items are logged and skipped.
pub fn parse_batch(
    items: &[Value],
    sink: &mut dyn DiagnosticsSink,
    excerpt_chars: usize,
    pb: &ProgressBar,
) -> BatchOutcome {
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for (i, item) in items.iter().enumerate() {
        match RawItem::from_value(item).and_then(|raw| raw.parse()) {
            Ok(parsed) => {
                for w in parsed.warnings {
                    debug!(item = i + 1, "{}", w);
                    sink.record(Diagnostic::for_item(i, w.to_string()));
                }
                records.push(parsed.record);
            }
            Err(e) => {
                warn!(item = i + 1, "Skipping item: {}", e);
                let content = excerpt(&raw_content(item), excerpt_chars);
                sink.record(Diagnostic::for_item(i, e.to_string()).with_excerpt(content));
                skipped += 1;
            }
        }
        pb.inc(1);
    }

    BatchOutcome { records, skipped }
}

/// The scraped text if there is any, otherwise the item as JSON.
fn raw_content(item: &Value) -> String {
    match item.get("name").and_then(Value::as_str) {
        Some(name) => name.to_string(),
        None => item.to_string(),
    }
}

// ── Tests ──
