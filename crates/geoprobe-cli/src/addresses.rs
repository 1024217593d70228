//! Built-in sample address list and address-list file loading.
//!
//! The sample list is the standing QA set: addresses that should geocode
//! cleanly, one formerly-failing entry kept as a regression canary, and
//! deliberately bad addresses that should fail. `# ` lines flow through to
//! the report as section headers.

use std::path::Path;

use anyhow::Context;

use geoprobe_core::{parse_lines, InputLine};

pub(crate) const SAMPLE_ADDRESSES: &[&str] = &[
    "# Addresses that should be valid",
    "100 Harris Street, Pyrmont, NSW 2009",
    "146 Homebush Road, Strathfield, NSW 2135",
    "9/11-13 Clarence Street, Burwood, NSW 2134",
    "99/11-13 Clarence Street, Burwood, NSW 2134",
    "11-13 Clarence Street, Burwood, NSW 2134",
    "50 Valdora View, Valdora, QLD 4561",
    "16 The Escarpments, Katoomba, NSW 2780",
    "8 Station Street, Pymble, NSW 2073",
    "1 Cayambe Court, Tamborine Mountain",
    "37 Daphne Street, Botany NSW",
    "1/37 Daphne Street, Botany NSW",
    "20/37 Daphne Street, Botany NSW",
    "11 Valentine street, Yagoona, NSW 2199",
    "1 Griffiths street, Blacktown NSW 2148",
    "6 Griffiths street, Blacktown NSW 2148",
    "179 Dunmore street, Wentworthville",
    "34 Northwater Drive, Hope Island",
    "26 Gold Street, Banyo",
    "# Formerly failing addresses we want to pass",
    "9/11-1300 Clarence Street, Burwood, NSW 2134",
    "# Deliberately bad addresses we want to fail",
    "100 Harros Street, Pyrmont, NSW 2009",
    "100 Undefined Street, Pyrmont, NSW 2009",
    "9/11-13 Clarence, Burwood, NSW 2134",
    "9/11-13 Clarence Road, Burwood, NSW 2134",
    "9-130000 Griffiths, Blacktown NSW 2148",
];

/// The built-in sample list, parsed with the batch-wide search mode.
pub(crate) fn sample_lines(advanced: bool) -> Vec<InputLine> {
    parse_lines(SAMPLE_ADDRESSES.iter().copied(), advanced)
}

/// Load an address list from a plain-text file, one entry per line.
pub(crate) fn load_input_file(path: &Path, advanced: bool) -> anyhow::Result<Vec<InputLine>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read address list {}", path.display()))?;
    Ok(parse_lines(raw.lines(), advanced))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_list_parses_with_section_comments() {
        let lines = sample_lines(true);
        assert_eq!(lines.len(), SAMPLE_ADDRESSES.len());
        assert!(matches!(&lines[0], InputLine::Comment(text) if text == "Addresses that should be valid"));
        assert!(matches!(&lines[1], InputLine::Address { .. }));
    }

    #[test]
    fn sample_list_has_three_sections() {
        let sections = sample_lines(true)
            .iter()
            .filter(|l| matches!(l, InputLine::Comment(_)))
            .count();
        assert_eq!(sections, 3);
    }
}
