use std::sync::LazyLock;

use regex::Regex;

use crate::error::Warning;
use crate::record::Restaurant;

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+)\s+\((\d+)\)").unwrap());

/// Fill rating, review count and establishment type from lines 1 and 2.
/// Line 0 is the name and is set when the record is created.
pub fn extract(prefix: &[String], record: &mut Restaurant, warnings: &mut Vec<Warning>) {
    if let Some(line) = prefix.get(1) {
        match parse_rating(line) {
            Some((rating, count)) => {
                record.rating = Some(rating);
                record.num_reviews = Some(count);
            }
            None => warnings.push(Warning::PatternMismatch {
                field: "rating",
                line: line.clone(),
            }),
        }
    }

    record.establishment_type = prefix.get(2).cloned();
}

/// "4.5 (120)" -> (4.5, 120). Both halves or nothing.
fn parse_rating(line: &str) -> Option<(f64, u64)> {
    let caps = RATING_RE.captures(line)?;
    let rating = caps[1].parse::<f64>().ok()?;
    let count = caps[2].parse::<u64>().ok()?;
    Some((rating, count))
}
