use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Warning;
use crate::parser::json_kind;
use crate::record::Review;

/// The shapes a scraped `reviews` field comes in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ReviewsPayload {
    /// One review per line.
    Lines(String),
    Texts(Vec<String>),
    /// Objects with optional `text`, `rating` and `date`. Fields are coerced
    /// per entry so one odd value does not reject the whole list.
    Detailed(Vec<Map<String, Value>>),
}

impl ReviewsPayload {
    /// Resolve the raw field once. `Ok(None)` means no reviews were scraped.
    pub fn resolve(raw: Option<&Value>) -> Result<Option<Self>, Warning> {
        match raw {
            None | Some(Value::Null) => Ok(None),
            Some(value) => ReviewsPayload::deserialize(value)
                .map(Some)
                .map_err(|_| Warning::UnsupportedReviews(json_kind(value).to_string())),
        }
    }

    pub fn into_reviews(self) -> Vec<Review> {
        match self {
            ReviewsPayload::Lines(text) => from_lines(&text),
            ReviewsPayload::Texts(texts) => from_texts(&texts),
            ReviewsPayload::Detailed(entries) => entries.into_iter().map(from_detailed).collect(),
        }
    }
}

pub fn extract(raw: Option<&Value>, warnings: &mut Vec<Warning>) -> Vec<Review> {
    let reviews = match ReviewsPayload::resolve(raw) {
        Ok(Some(payload)) => payload.into_reviews(),
        Ok(None) => Vec::new(),
        Err(w) => {
            warnings.push(w);
            return Vec::new();
        }
    };

    if reviews.is_empty() {
        warnings.push(Warning::NoReviews);
    }
    reviews
}

fn from_lines(text: &str) -> Vec<Review> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(Review::text_only)
        .collect()
}

fn from_texts(texts: &[String]) -> Vec<Review> {
    texts
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(Review::text_only)
        .collect()
}

fn from_detailed(mut entry: Map<String, Value>) -> Review {
    let rating = match entry.remove("rating") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Review {
        text: scalar_text(entry.remove("text")).unwrap_or_default(),
        rating,
        date: scalar_text(entry.remove("date")),
    }
}

/// Strings as-is, numbers rendered. Anything else is treated as unset.
fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
