//! HTTP client for the geocoding service.
//!
//! Wraps `reqwest` with bearer-token auth, per-call latency measurement, and
//! the two transport flavors the service exposes: the direct REST endpoint
//! (`GET /v1/geocode`) and the GraphQL gateway (`POST /gql`). The transport
//! is fixed at construction; callers never choose per request.
//!
//! The public surface is the [`Geocoder`] trait. Its contract is that a call
//! always settles with a [`GeocodeOutcome`] — transport and shape failures
//! are logged here and folded into [`GeocodeOutcome::Failed`], never
//! propagated. Requests are one-shot: no retry, no backoff.

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Client, Url};

use geoprobe_core::ApiMode;

use crate::error::GeocodeError;
use crate::outcome::GeocodeOutcome;
use crate::types::{GeocodeResult, GraphqlEnvelope};

/// A source of geocode results for the batch reporter.
///
/// Implemented by [`GeocodeClient`] for production and by in-memory mocks in
/// reporter tests.
pub trait Geocoder {
    /// Geocode one free-text address.
    ///
    /// Never fails: all transport and parsing errors are handled internally
    /// and surfaced as [`GeocodeOutcome`] variants.
    fn geocode(
        &self,
        address: &str,
        advanced: bool,
    ) -> impl Future<Output = GeocodeOutcome> + Send;
}

/// Connection settings for a [`GeocodeClient`].
///
/// An explicit configuration object rather than ambient env reads, so tests
/// can point the client at a mock server deterministically.
#[derive(Clone)]
pub struct GeocodeConfig {
    pub base_url: String,
    pub bearer_token: String,
    pub mode: ApiMode,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for GeocodeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodeConfig")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"[redacted]")
            .field("mode", &self.mode)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Client for the geocoding service.
pub struct GeocodeClient {
    client: Client,
    rest_url: Url,
    gql_url: Url,
    bearer_token: String,
    mode: ApiMode,
}

impl GeocodeClient {
    /// Creates a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining endpoint paths appends to the base path rather than
        // replacing its last segment.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        let endpoint = |path: &str| -> Result<Url, GeocodeError> {
            base_url.join(path).map_err(|e| GeocodeError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                reason: format!("cannot join endpoint path \"{path}\": {e}"),
            })
        };

        Ok(Self {
            client,
            rest_url: endpoint("v1/geocode")?,
            gql_url: endpoint("gql")?,
            bearer_token: config.bearer_token,
            mode: config.mode,
        })
    }

    /// Fetches one address over the REST endpoint.
    ///
    /// Any 2xx body deserializes directly into a [`GeocodeResult`]; the REST
    /// endpoint signals weak matches through missing `score`/`address`
    /// sub-objects rather than an explicit no-match marker, so this path
    /// never returns `Ok(None)`.
    async fn fetch_rest(
        &self,
        address: &str,
        advanced: bool,
    ) -> Result<Option<GeocodeResult>, GeocodeError> {
        let mut url = self.rest_url.clone();
        url.query_pairs_mut()
            .append_pair(
                "search_method",
                if advanced { "advanced" } else { "simple" },
            )
            .append_pair("q", address);

        let body = self.send_checked(self.client.get(url.clone()), &url).await?;
        let result =
            serde_json::from_str::<GeocodeResult>(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("geocode response for \"{address}\""),
                source: e,
            })?;
        Ok(Some(result))
    }

    /// Fetches one address through the GraphQL gateway.
    ///
    /// `geocode: null` in the envelope (or a missing `data` payload) is the
    /// gateway's no-match signal and maps to `Ok(None)`.
    async fn fetch_graphql(
        &self,
        address: &str,
        advanced: bool,
    ) -> Result<Option<GeocodeResult>, GeocodeError> {
        let payload = serde_json::json!({ "query": build_graphql_query(address, advanced) });
        let url = self.gql_url.clone();

        let body = self
            .send_checked(self.client.post(url.clone()).json(&payload), &url)
            .await?;
        let envelope =
            serde_json::from_str::<GraphqlEnvelope>(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("gql geocode response for \"{address}\""),
                source: e,
            })?;
        Ok(envelope.data.and_then(|data| data.geocode))
    }

    /// Sends a request with bearer auth, asserts a 2xx status, and returns
    /// the response body.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] on network failure and
    /// [`GeocodeError::UnexpectedStatus`] (carrying whatever body the
    /// service sent) on a non-2xx status.
    async fn send_checked(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<String, GeocodeError> {
        let response = request.bearer_auth(&self.bearer_token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

impl Geocoder for GeocodeClient {
    async fn geocode(&self, address: &str, advanced: bool) -> GeocodeOutcome {
        let started = Instant::now();
        let fetched = match self.mode {
            ApiMode::Rest => self.fetch_rest(address, advanced).await,
            ApiMode::Graphql => self.fetch_graphql(address, advanced).await,
        };
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match fetched {
            Ok(Some(mut result)) => {
                result.duration_ms = Some(elapsed_ms);
                tracing::debug!(address, elapsed_ms, "geocoded address");
                GeocodeOutcome::Match(Box::new(result))
            }
            Ok(None) => {
                tracing::info!(address, elapsed_ms, "no geocode match");
                GeocodeOutcome::NoMatch
            }
            Err(e) => {
                tracing::warn!(address, elapsed_ms, error = %e, "geocode request failed");
                GeocodeOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Builds the fixed GraphQL query document for one address.
///
/// The selection set is the full result shape: every address and score
/// sub-field plus the top-level match metadata.
fn build_graphql_query(address: &str, advanced: bool) -> String {
    format!(
        r#"query {{
  geocode(query: "{}", useAdvancedSearch: {advanced}) {{
    address {{
      buildingName
      countryCode
      level
      lga
      locality
      lot
      postcode
      unit
      streetType
      streetSuffix
      streetNumber
      streetName
      streetLocation
      streetAddress
      street
      state
    }}
    score {{
      consolidatedScore
      streetNumberScore
      streetNameScore
      streetTypeScore
      streetSuffixScore
      suburbScore
      stateScore
      postcodeScore
      countryScore
    }}
    isSuccessful
    isExactMatch
    isStreetLevelMatch
    matchMethod
    matchLevel
  }}
}}"#,
        escape_graphql_string(address)
    )
}

/// Escapes a value for splicing into a double-quoted GraphQL string literal.
fn escape_graphql_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> GeocodeConfig {
        GeocodeConfig {
            base_url: base_url.to_string(),
            bearer_token: "test-token".to_string(),
            mode: ApiMode::Rest,
            timeout_secs: 5,
            user_agent: "geoprobe-test/0.1".to_string(),
        }
    }

    #[test]
    fn new_builds_endpoint_urls() {
        let client = GeocodeClient::new(test_config("https://geocode.example.com"))
            .expect("client construction should not fail");
        assert_eq!(
            client.rest_url.as_str(),
            "https://geocode.example.com/v1/geocode"
        );
        assert_eq!(client.gql_url.as_str(), "https://geocode.example.com/gql");
    }

    #[test]
    fn new_strips_trailing_slash() {
        let client = GeocodeClient::new(test_config("https://geocode.example.com/"))
            .expect("client construction should not fail");
        assert_eq!(
            client.rest_url.as_str(),
            "https://geocode.example.com/v1/geocode"
        );
    }

    #[test]
    fn new_keeps_base_path_segments() {
        let client = GeocodeClient::new(test_config("https://example.com/geocoder"))
            .expect("client construction should not fail");
        assert_eq!(
            client.rest_url.as_str(),
            "https://example.com/geocoder/v1/geocode"
        );
    }

    #[test]
    fn new_rejects_unparseable_base_url() {
        let result = GeocodeClient::new(test_config("not a url"));
        assert!(
            matches!(result, Err(GeocodeError::InvalidBaseUrl { .. })),
            "expected InvalidBaseUrl"
        );
    }

    #[test]
    fn graphql_query_includes_address_and_mode() {
        let query = build_graphql_query("1 Main St, Pyrmont", true);
        assert!(query.contains(r#"geocode(query: "1 Main St, Pyrmont", useAdvancedSearch: true)"#));
        assert!(query.contains("consolidatedScore"));
        assert!(query.contains("streetAddress"));
        assert!(query.contains("matchLevel"));
    }

    #[test]
    fn graphql_query_simple_mode() {
        let query = build_graphql_query("1 Main St", false);
        assert!(query.contains("useAdvancedSearch: false"));
    }

    #[test]
    fn graphql_string_escaping() {
        assert_eq!(
            escape_graphql_string(r#"The "Old" Mill \ Rear"#),
            r#"The \"Old\" Mill \\ Rear"#
        );
    }

    #[test]
    fn config_debug_redacts_bearer_token() {
        let rendered = format!("{:?}", test_config("https://geocode.example.com"));
        assert!(!rendered.contains("test-token"), "leaked token: {rendered}");
    }
}
