use std::sync::LazyLock;

use regex::Regex;

use crate::error::Warning;
use crate::parser::zones::Suffix;
use crate::record::Restaurant;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+\d{1,3}-\d+").unwrap());

/// "+33-123456789"
pub fn is_phone(line: &str) -> bool {
    PHONE_RE.is_match(line)
}

pub fn extract(suffix: &Suffix<'_>, record: &mut Restaurant, warnings: &mut Vec<Warning>) {
    record.address = suffix.address.map(str::to_string);
    record.phone_number = suffix.phone.map(str::to_string);

    if let Some(line) = suffix.rejected_phone {
        warnings.push(Warning::PatternMismatch {
            field: "phone",
            line: line.to_string(),
        });
    }
}
