use crate::types::GeocodeResult;

/// Settled result of one geocode call.
///
/// Per-address failures are data, not errors: the client catches transport
/// and shape failures internally, logs them, and reports them here. The
/// reporter needs no failure-handling branches beyond matching on this enum,
/// and a single address can never abort a batch.
#[derive(Debug, Clone)]
pub enum GeocodeOutcome {
    /// The service returned a (possibly partial) result object.
    Match(Box<GeocodeResult>),
    /// The service answered but reported no matching address.
    NoMatch,
    /// Transport or response-shape failure, already logged at the client.
    Failed {
        /// Human-readable failure description for diagnostics.
        reason: String,
    },
}

impl GeocodeOutcome {
    /// The matched result, if any.
    #[must_use]
    pub fn as_match(&self) -> Option<&GeocodeResult> {
        match self {
            GeocodeOutcome::Match(result) => Some(result),
            GeocodeOutcome::NoMatch | GeocodeOutcome::Failed { .. } => None,
        }
    }
}
