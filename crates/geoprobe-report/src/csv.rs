//! CSV-ish row rendering for geocode reports.
//!
//! The output is a human-readable report, not strict tabular CSV: comment
//! rows carry a single quoted field (intentionally breaking the column count
//! for that row), and failed addresses collapse to an `"error"` marker.
//! Every field value is double-quoted with embedded quotes doubled, so an
//! address containing `"` can never corrupt a row.
//!
//! Absent fields always render as the empty string. The service may return
//! arbitrarily partial objects; rendering is total and never shifts columns.

use geoprobe_client::GeocodeResult;

/// Column header for the fielded report format.
pub const FIELDS_HEADER: &str = "Input address, isSuccessful, duration, isExactMatch, \
    isStreetLevelMatch, matchMethod, matchLevel, consolidatedScore, streetNumberScore, \
    streetNameScore, streetTypeScore, streetSuffixScore, suburbScore, stateScore, \
    postcodeScore, countryScore, unit, streetType, streetAddress, street, streetSuffix, \
    locality, state, postcode";

/// Column header for the raw-JSON report format.
pub const RAW_JSON_HEADER: &str = "Input address, JSON response";

/// Wraps a value in double quotes, doubling any embedded quotes.
#[must_use]
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// A section-header row: the comment text as a single quoted field.
#[must_use]
pub fn comment_row(text: &str) -> String {
    quote_field(text)
}

/// The row emitted when an address produced no usable result.
#[must_use]
pub fn error_row(address: &str) -> String {
    format!("{}, {}", quote_field(address), quote_field("error"))
}

/// The full fielded row for a match: the input address followed by the 23
/// result columns in header order.
#[must_use]
pub fn match_row(address: &str, result: &GeocodeResult) -> String {
    let score = result.score.as_ref();
    let addr = result.address.as_ref();

    let fields = [
        address.to_string(),
        opt_bool(result.is_successful),
        opt_u64(result.duration_ms),
        opt_bool(result.is_exact_match),
        opt_bool(result.is_street_level_match),
        opt_str(result.match_method.as_deref()),
        opt_str(result.match_level.as_deref()),
        opt_f64(score.and_then(|s| s.consolidated_score)),
        opt_f64(score.and_then(|s| s.street_number_score)),
        opt_f64(score.and_then(|s| s.street_name_score)),
        opt_f64(score.and_then(|s| s.street_type_score)),
        opt_f64(score.and_then(|s| s.street_suffix_score)),
        opt_f64(score.and_then(|s| s.suburb_score)),
        opt_f64(score.and_then(|s| s.state_score)),
        opt_f64(score.and_then(|s| s.postcode_score)),
        opt_f64(score.and_then(|s| s.country_score)),
        opt_str(addr.and_then(|a| a.unit.as_deref())),
        opt_str(addr.and_then(|a| a.street_type.as_deref())),
        opt_str(addr.and_then(|a| a.street_address.as_deref())),
        opt_str(addr.and_then(|a| a.street.as_deref())),
        opt_str(addr.and_then(|a| a.street_suffix.as_deref())),
        opt_str(addr.and_then(|a| a.locality.as_deref())),
        opt_str(addr.and_then(|a| a.state.as_deref())),
        opt_str(addr.and_then(|a| a.postcode.as_deref())),
    ];

    fields
        .iter()
        .map(|f| quote_field(f))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The raw-dump row: the input address plus the whole result as JSON.
#[must_use]
pub fn raw_json_row(address: &str, result: &GeocodeResult) -> String {
    let json = serde_json::to_string(result).unwrap_or_else(|_| "null".to_string());
    format!("{}, {}", quote_field(address), quote_field(&json))
}

fn opt_bool(value: Option<bool>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

fn opt_u64(value: Option<u64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

fn opt_f64(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use geoprobe_client::ScoreBreakdown;

    use super::*;

    #[test]
    fn quote_field_plain() {
        assert_eq!(quote_field("1 Main St"), "\"1 Main St\"");
    }

    #[test]
    fn quote_field_doubles_embedded_quotes() {
        assert_eq!(quote_field(r#"5 O"Brien St"#), r#""5 O""Brien St""#);
    }

    #[test]
    fn error_row_shape() {
        assert_eq!(error_row("bad address"), r#""bad address", "error""#);
    }

    #[test]
    fn comment_row_is_single_field() {
        assert_eq!(comment_row("Section A"), "\"Section A\"");
    }

    #[test]
    fn header_has_twenty_four_columns() {
        assert_eq!(FIELDS_HEADER.split(", ").count(), 24);
    }

    #[test]
    fn match_row_on_empty_result_keeps_column_count() {
        let row = match_row("1 Main St", &GeocodeResult::default());
        assert_eq!(row.split(", ").count(), 24, "unexpected shape: {row}");
        assert!(row.starts_with("\"1 Main St\", \"\", "));
    }

    #[test]
    fn match_row_renders_present_fields_in_place() {
        let result = GeocodeResult {
            is_successful: Some(true),
            duration_ms: Some(120),
            match_level: Some("EXACT".to_string()),
            score: Some(ScoreBreakdown {
                consolidated_score: Some(0.98),
                ..ScoreBreakdown::default()
            }),
            ..GeocodeResult::default()
        };
        let row = match_row("1 Main St", &result);
        let fields: Vec<&str> = row.split(", ").collect();
        assert_eq!(fields[0], "\"1 Main St\"");
        assert_eq!(fields[1], "\"true\"");
        assert_eq!(fields[2], "\"120\"");
        assert_eq!(fields[6], "\"EXACT\"");
        assert_eq!(fields[7], "\"0.98\"");
        assert_eq!(fields[8], "\"\"", "absent scores must stay blank");
    }

    #[test]
    fn raw_json_row_doubles_quotes_in_payload() {
        let result = GeocodeResult {
            is_successful: Some(true),
            ..GeocodeResult::default()
        };
        let row = raw_json_row("1 Main St", &result);
        assert!(row.starts_with("\"1 Main St\", \""));
        assert!(
            row.contains(r#"""isSuccessful"":true"#),
            "JSON quotes must be doubled: {row}"
        );
    }
}
