use crate::error::ItemError;

/// Split a scraped block into trimmed, non-blank lines.
pub fn segment(raw: &str) -> Result<Vec<String>, ItemError> {
    let lines: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(ItemError::EmptyContent);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let lines = segment("  Chez Vert \n\n\t4.5 (120)\n   \nVegan Restaurant").unwrap();
        assert_eq!(lines, ["Chez Vert", "4.5 (120)", "Vegan Restaurant"]);
    }

    #[test]
    fn handles_crlf() {
        let lines = segment("Chez Vert\r\n4.5 (120)\r\n").unwrap();
        assert_eq!(lines, ["Chez Vert", "4.5 (120)"]);
    }

    #[test]
    fn blank_block_is_empty_content() {
        assert_eq!(segment(""), Err(ItemError::EmptyContent));
        assert_eq!(segment(" \n\t\n  "), Err(ItemError::EmptyContent));
    }
}
