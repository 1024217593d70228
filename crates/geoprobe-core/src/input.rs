//! Input line model for report runs.
//!
//! Address lists are plain text, one entry per line. A line starting with
//! `# ` is a section comment that flows through to the report as a header
//! row; everything else is an address to geocode. Ordering is significant:
//! the reporter emits exactly one output row per input line, in input order.

/// One line of report input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// Section header text (without the `# ` marker). Never geocoded.
    Comment(String),
    /// A free-text address to geocode.
    Address {
        text: String,
        /// Use the service's advanced/fuzzy matching mode for this entry.
        advanced: bool,
    },
}

impl InputLine {
    /// The display text of the line: comment text or raw address.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            InputLine::Comment(text) | InputLine::Address { text, .. } => text,
        }
    }
}

/// Parse a single raw line. Returns `None` for blank lines.
#[must_use]
pub fn parse_line(raw: &str, advanced: bool) -> Option<InputLine> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(comment) = trimmed.strip_prefix("# ") {
        return Some(InputLine::Comment(comment.to_string()));
    }
    Some(InputLine::Address {
        text: trimmed.to_string(),
        advanced,
    })
}

/// Parse raw lines into an ordered list of [`InputLine`]s.
///
/// `advanced` is the batch-wide search mode; it is stamped onto every
/// address entry. Blank lines are dropped, order is preserved otherwise.
pub fn parse_lines<I, S>(raw: I, advanced: bool) -> Vec<InputLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|line| parse_line(line.as_ref(), advanced))
        .collect()
}
