//! Sources of current weather observations.
//!
//! The service does not call a real weather provider. [`RandomSource`]
//! synthesizes plausible values instead; tests substitute their own
//! [`ObservationSource`].

use rand::Rng;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use weather_types::NewObservation;

/// Condition labels produced by [`RandomSource`].
pub const CONDITIONS: [&str; 4] = ["Sunny", "Cloudy", "Rainy", "Stormy"];

/// Produces the current observation for a city.
pub trait ObservationSource: Send + Sync {
    /// Produce an observation for `city`, timestamped now.
    fn observe(&self, city: &str) -> NewObservation;
}

/// Generates random observations.
///
/// - temperature: whole degrees in 5..=39
/// - humidity: 0..=99
/// - wind speed: 0..=49
/// - date: current UTC time in RFC 3339
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSource;

impl ObservationSource for RandomSource {
    fn observe(&self, city: &str) -> NewObservation {
        info!("Fetching weather for {}", city);

        let mut rng = rand::rng();
        let date_recorded = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();

        NewObservation {
            city: city.to_string(),
            temperature: f64::from(rng.random_range(5u8..40)),
            conditions: CONDITIONS[rng.random_range(0..CONDITIONS.len())].to_string(),
            humidity: f64::from(rng.random_range(0u8..100)),
            wind_speed: f64::from(rng.random_range(0u8..50)),
            date_recorded,
        }
    }
}
