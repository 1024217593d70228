//! Geocoding service response types.
//!
//! ## Observed shape
//!
//! Both transports return the same result object; the GraphQL gateway wraps
//! it in the usual `{"data": {"geocode": ...}}` envelope, the REST endpoint
//! returns it as the response body.
//!
//! Every service field is independently optional. The REST endpoint omits
//! whole sub-objects on weak matches (a body without `score` has been
//! observed on live traffic), and the GraphQL gateway returns explicit
//! `null` for any selected field it cannot populate. `#[serde(default)]`
//! on every field means a partial object can never fail deserialization.
//!
//! ### `duration`
//! Not a service field. The client stamps the request round-trip time onto
//! the result after the response settles, so it flows through both the
//! fielded CSV column and the raw JSON dump.

use serde::{Deserialize, Serialize};

/// A single geocode match, possibly partial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    /// Whether the service considers the match usable.
    #[serde(default)]
    pub is_successful: Option<bool>,

    /// Exact match against a canonical address record.
    #[serde(default)]
    pub is_exact_match: Option<bool>,

    /// Matched at least to street level (as opposed to locality level).
    #[serde(default)]
    pub is_street_level_match: Option<bool>,

    /// Service-reported matching algorithm identifier.
    #[serde(default)]
    pub match_method: Option<String>,

    /// Service-reported closeness classification (e.g. `"EXACT"`).
    #[serde(default)]
    pub match_level: Option<String>,

    /// Per-field confidence breakdown. Absent on weak matches.
    #[serde(default)]
    pub score: Option<ScoreBreakdown>,

    /// Normalized address fields. Absent on weak matches.
    #[serde(default)]
    pub address: Option<NormalizedAddress>,

    /// Round-trip latency in milliseconds, attached by the client — the
    /// service never sends this.
    #[serde(default, rename = "duration")]
    pub duration_ms: Option<u64>,
}

/// Per-field confidence sub-scores. All independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Aggregate confidence combining the per-field sub-scores.
    #[serde(default)]
    pub consolidated_score: Option<f64>,
    #[serde(default)]
    pub street_number_score: Option<f64>,
    #[serde(default)]
    pub street_name_score: Option<f64>,
    #[serde(default)]
    pub street_type_score: Option<f64>,
    #[serde(default)]
    pub street_suffix_score: Option<f64>,
    #[serde(default)]
    pub suburb_score: Option<f64>,
    #[serde(default)]
    pub state_score: Option<f64>,
    #[serde(default)]
    pub postcode_score: Option<f64>,
    #[serde(default)]
    pub country_score: Option<f64>,
}

/// Normalized address components for a match. All independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAddress {
    #[serde(default)]
    pub building_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    /// Local government area.
    #[serde(default)]
    pub lga: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub lot: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub street_type: Option<String>,
    #[serde(default)]
    pub street_suffix: Option<String>,
    #[serde(default)]
    pub street_number: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub street_location: Option<String>,
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Top-level envelope for GraphQL gateway responses:
/// `{"data": {"geocode": <result|null>}}`.
///
/// `geocode: null` is the gateway's "no match" signal, distinct from a
/// transport failure.
#[derive(Debug, Deserialize)]
pub struct GraphqlEnvelope {
    #[serde(default)]
    pub data: Option<GraphqlData>,
}

/// The `data` payload of a [`GraphqlEnvelope`].
#[derive(Debug, Deserialize)]
pub struct GraphqlData {
    #[serde(default)]
    pub geocode: Option<GeocodeResult>,
}
