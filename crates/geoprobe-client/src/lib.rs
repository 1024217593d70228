pub mod client;
pub mod error;
pub mod outcome;
pub mod types;

pub use client::{GeocodeClient, GeocodeConfig, Geocoder};
pub use error::GeocodeError;
pub use outcome::GeocodeOutcome;
pub use types::{GeocodeResult, NormalizedAddress, ScoreBreakdown};
