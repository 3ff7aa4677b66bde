use super::extract::bottom::is_phone;

/// Marker line that closes every listing's contact block.
pub const ANCHOR: &str = "Read Reviews";

/// Name, rating line, establishment type.
pub const PREFIX_LEN: usize = 3;

/// A listing split into its fixed head, variable middle and anchored tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Zones<'a> {
    pub prefix: &'a [String],
    pub middle: &'a [String],
    pub suffix: Suffix<'a>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suffix<'a> {
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    /// Line above the address that failed the phone pattern.
    pub rejected_phone: Option<&'a str>,
}

/// Locate the three zones of a segmented listing.
///
/// The suffix is found first because it decides where the middle ends: with
/// an anchor, the middle stops before the address line and, if it looks like
/// one, the phone line. Without an anchor the middle runs to the last line.
pub fn split(lines: &[String]) -> Zones<'_> {
    let anchor = lines.iter().position(|l| l.contains(ANCHOR));
    let mut suffix = Suffix::default();

    let mut end = lines.len();
    if let Some(idx) = anchor {
        end = idx;
        if idx >= 1 {
            suffix.address = Some(lines[idx - 1].as_str());
            end -= 1;
        }
        if idx >= 2 {
            let candidate = lines[idx - 2].as_str();
            if is_phone(candidate) {
                suffix.phone = Some(candidate);
                end -= 1;
            } else if idx - 2 >= PREFIX_LEN {
                // Prefix lines are not phone candidates.
                suffix.rejected_phone = Some(candidate);
            }
        }
    }

    let prefix = &lines[..lines.len().min(PREFIX_LEN)];
    let middle: &[String] = if PREFIX_LEN < end {
        &lines[PREFIX_LEN..end]
    } else {
        &[]
    };

    Zones {
        prefix,
        middle,
        suffix,
    }
}
