pub mod bottom;
pub mod middle;
pub mod reviews;
pub mod top;

use serde_json::Value;

use super::zones::Zones;
use super::ParsedItem;
use crate::record::Restaurant;

pub fn extract_all(zones: &Zones<'_>, raw_reviews: Option<&Value>) -> ParsedItem {
    let name = zones.prefix.first().cloned().unwrap_or_default();
    let mut record = Restaurant::named(name);
    let mut warnings = Vec::new();

    top::extract(zones.prefix, &mut record, &mut warnings);
    bottom::extract(&zones.suffix, &mut record, &mut warnings);
    middle::extract(zones.middle, &mut record);
    record.reviews = reviews::extract(raw_reviews, &mut warnings);

    ParsedItem { record, warnings }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Warning;
    use crate::parser::zones;
    use crate::record::Status;

    fn parse(text: &str) -> ParsedItem {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        extract_all(&zones::split(&lines), None)
    }

    #[test]
    fn zones_feed_every_field() {
        let p = parse("Chez Vert\n4.5 (120)\nVegan Restaurant\nOpen Now\nPartner\nVegan, Organic Lovely spot near the river.\n+33-123456789\n12 Rue de Paris\nRead Reviews");
        let r = &p.record;
        assert_eq!(r.restaurant_name, "Chez Vert");
        assert_eq!(r.rating, Some(4.5));
        assert_eq!(r.num_reviews, Some(120));
        assert_eq!(r.establishment_type.as_deref(), Some("Vegan Restaurant"));
        assert_eq!(r.status, Some(Status::OpenNow));
        assert!(r.is_partner);
        assert_eq!(r.cuisines_features, ["Vegan", "Organic"]);
        assert_eq!(r.description.as_deref(), Some("Lovely spot near the river."));
        assert_eq!(r.phone_number.as_deref(), Some("+33-123456789"));
        assert_eq!(r.address.as_deref(), Some("12 Rue de Paris"));
        assert_eq!(p.warnings, [Warning::NoReviews]);
    }

    #[test]
    fn warnings_in_field_order() {
        let p = parse("X\nunrated\nCafe\nNice place.\nnot a phone\n1 Rue Y\nRead Reviews");
        assert!(matches!(
            &p.warnings[..],
            [
                Warning::PatternMismatch { field: "rating", .. },
                Warning::PatternMismatch { field: "phone", .. },
                Warning::NoReviews,
            ]
        ));
        assert_eq!(p.record.address.as_deref(), Some("1 Rue Y"));
        assert_eq!(p.record.description.as_deref(), Some("Nice place. not a phone"));
    }

    #[test]
    fn listing_without_middle_has_no_phone_warning() {
        let p = parse("Name\n4.0 (3)\nCafe\n5 Rue X\nRead Reviews");
        assert_eq!(p.warnings, [Warning::NoReviews]);
        assert_eq!(p.record.establishment_type.as_deref(), Some("Cafe"));
        assert_eq!(p.record.address.as_deref(), Some("5 Rue X"));
        assert_eq!(p.record.phone_number, None);
    }
}
