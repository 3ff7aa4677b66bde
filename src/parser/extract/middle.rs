use std::sync::LazyLock;

use regex::Regex;

use crate::record::{Restaurant, Status};

// Comma-separated tag run, then whitespace, then a capitalized description.
// The last tag is a single word so a capitalized word right after it starts
// the description.
static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^((?:[\p{Alphabetic}\p{N}/ -]+,\s*)*[\p{Alphabetic}\p{N}/-]+)\s+(\p{Lu}.*)$")
        .unwrap()
});
static SENTENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+\p{Lu}").unwrap());

const PARTNER: &str = "Partner";

/// Status, partner flag, cuisine tags and description, in that order.
pub fn extract(middle: &[String], record: &mut Restaurant) {
    let mut rest = middle;

    if let Some(status) = rest.first().and_then(|l| Status::from_line(l)) {
        record.status = Some(status);
        rest = &rest[1..];
    }

    if rest.first().is_some_and(|l| l == PARTNER) {
        record.is_partner = true;
        rest = &rest[1..];
    }

    let blob = rest.join(" ");
    let blob = blob.trim();
    if blob.is_empty() {
        return;
    }

    let (cuisines, description) = split_cuisines(blob);
    record.cuisines_features = cuisines;
    record.description = description;
}

/// Separate leading cuisine tags from free text.
///
/// Falls back to "all tags" for a comma list with no sentence break, and to
/// "all description" otherwise.
pub fn split_cuisines(blob: &str) -> (Vec<String>, Option<String>) {
    if let Some(caps) = SPLIT_RE.captures(blob) {
        let description = caps[2].trim();
        let description = (!description.is_empty()).then(|| description.to_string());
        return (split_tags(&caps[1]), description);
    }

    if blob.contains(',') && !SENTENCE_RE.is_match(blob) {
        (split_tags(blob), None)
    } else {
        (Vec::new(), Some(blob.to_string()))
    }
}

fn split_tags(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Restaurant {
        let middle: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        let mut r = Restaurant::named("X");
        extract(&middle, &mut r);
        r
    }

    #[test]
    fn status_partner_cuisines_description() {
        let r = run(&["Open Now", "Partner", "Vegan, Organic Lovely spot near the river."]);
        assert_eq!(r.status, Some(Status::OpenNow));
        assert!(r.is_partner);
        assert_eq!(r.cuisines_features, ["Vegan", "Organic"]);
        assert_eq!(r.description.as_deref(), Some("Lovely spot near the river."));
    }

    #[test]
    fn partner_without_status() {
        let r = run(&["Partner", "Thai, Vegan Cozy."]);
        assert_eq!(r.status, None);
        assert!(r.is_partner);
        assert_eq!(r.cuisines_features, ["Thai", "Vegan"]);
    }

    #[test]
    fn partner_before_status_is_not_consumed_as_status() {
        let r = run(&["Partner", "Closed"]);
        assert!(r.is_partner);
        assert_eq!(r.status, None);
        assert_eq!(r.description.as_deref(), Some("Closed"));
    }

    #[test]
    fn status_only() {
        let r = run(&["Closed"]);
        assert_eq!(r.status, Some(Status::Closed));
        assert!(!r.is_partner);
        assert!(r.cuisines_features.is_empty());
        assert_eq!(r.description, None);
    }

    #[test]
    fn empty_middle() {
        let r = run(&[]);
        assert_eq!(r, Restaurant::named("X"));
    }

    #[test]
    fn multiline_description_joined() {
        let r = run(&["Indian, Vegan", "Spicy curries.", "Great naan."]);
        assert_eq!(r.cuisines_features, ["Indian", "Vegan"]);
        assert_eq!(r.description.as_deref(), Some("Spicy curries. Great naan."));
    }

    #[test]
    fn cuisine_list_without_description() {
        let (c, d) = split_cuisines("Vegan, Organic, Gluten-free");
        assert_eq!(c, ["Vegan", "Organic", "Gluten-free"]);
        assert_eq!(d, None);
    }

    #[test]
    fn multi_word_tags_before_last() {
        let (c, d) = split_cuisines("Gluten Free, Raw Food, Vegan Bright and airy.");
        assert_eq!(c, ["Gluten Free", "Raw Food", "Vegan"]);
        assert_eq!(d.as_deref(), Some("Bright and airy."));
    }

    #[test]
    fn comma_in_description_is_not_a_tag_boundary() {
        let (c, d) = split_cuisines("Vegan, Bakery Fresh bread, pastries and coffee.");
        assert_eq!(c, ["Vegan", "Bakery"]);
        assert_eq!(d.as_deref(), Some("Fresh bread, pastries and coffee."));
    }

    #[test]
    fn plain_sentence_is_description() {
        let (c, d) = split_cuisines("lovely place by the canal.");
        assert!(c.is_empty());
        assert_eq!(d.as_deref(), Some("lovely place by the canal."));
    }

    #[test]
    fn sentences_with_commas_fall_back_to_description() {
        let blob = "nice, quiet. Friendly staff, good prices";
        let (c, d) = split_cuisines(blob);
        assert!(c.is_empty());
        assert_eq!(d.as_deref(), Some(blob));
    }

    #[test]
    fn accented_tags() {
        let (c, d) = split_cuisines("Végétarien, Crêperie Délicieuses galettes.");
        assert_eq!(c, ["Végétarien", "Crêperie"]);
        assert_eq!(d.as_deref(), Some("Délicieuses galettes."));
    }
}
