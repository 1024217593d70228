//! The address batch report generator.
//!
//! Dispatches one geocode call per address in a single wave, waits for the
//! whole batch to settle, then renders one row per input line in input
//! order. Completion order is irrelevant: results are collected into a list
//! aligned with input index before any output is produced.

use futures::future::join_all;

use geoprobe_client::{GeocodeOutcome, Geocoder};
use geoprobe_core::InputLine;

use crate::csv;

/// Report output flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// One column per match field (24 columns).
    Fields,
    /// The input address plus the whole result serialized as JSON.
    RawJson,
}

/// Settled result for one input line.
enum RowOutcome {
    /// Section comment, resolved without a client call.
    Header(String),
    Geocoded(GeocodeOutcome),
}

/// Generates the full report for `lines`: a fixed header line followed by
/// exactly one row per input line, in input order.
///
/// All addresses are dispatched concurrently with no in-flight bound — the
/// batch is sized by the caller. A failed or unmatched address renders as an
/// error row and never aborts the rest of the batch; there are no retries.
pub async fn generate_report<G: Geocoder>(
    client: &G,
    lines: &[InputLine],
    format: ReportFormat,
) -> Vec<String> {
    // Fire all, then await all: no output until every dispatch has settled.
    let outcomes: Vec<RowOutcome> = join_all(lines.iter().map(|line| async move {
        match line {
            InputLine::Comment(text) => RowOutcome::Header(text.clone()),
            InputLine::Address { text, advanced } => {
                RowOutcome::Geocoded(client.geocode(text, *advanced).await)
            }
        }
    }))
    .await;

    tracing::debug!(lines = lines.len(), "report batch settled");

    let header = match format {
        ReportFormat::Fields => csv::FIELDS_HEADER,
        ReportFormat::RawJson => csv::RAW_JSON_HEADER,
    };

    let mut rows = Vec::with_capacity(lines.len() + 1);
    rows.push(header.to_string());
    for (line, outcome) in lines.iter().zip(&outcomes) {
        rows.push(render_row(line, outcome, format));
    }
    rows
}

fn render_row(line: &InputLine, outcome: &RowOutcome, format: ReportFormat) -> String {
    match outcome {
        RowOutcome::Header(text) => csv::comment_row(text),
        RowOutcome::Geocoded(outcome) => match outcome.as_match() {
            Some(result) => match format {
                ReportFormat::Fields => csv::match_row(line.text(), result),
                ReportFormat::RawJson => csv::raw_json_row(line.text(), result),
            },
            // NoMatch and Failed both collapse to the error marker; the
            // distinction lives in the diagnostics channel.
            None => csv::error_row(line.text()),
        },
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
