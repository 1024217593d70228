use thiserror::Error;

/// Errors produced inside the geocode client.
///
/// These never escape [`crate::Geocoder::geocode`]: the client logs them and
/// folds them into [`crate::GeocodeOutcome::Failed`] at its boundary. They
/// are typed so the transport methods and their tests can branch on the
/// failure class.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `body` carries whatever the service sent back,
    /// which is the only diagnostic the gateway provides for auth failures.
    #[error("unexpected HTTP status {status} from {url}: {body}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed at construction time.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
