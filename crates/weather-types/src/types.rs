//! Core types for weather observations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A weather observation held by the record store.
///
/// Numeric fields are kept as `f64` so that values which failed to parse
/// can be carried as `f64::NAN` instead of being rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// Store-assigned identifier, increasing in insertion order.
    pub id: i64,
    /// City name as supplied by the caller.
    pub city: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Free-text condition label (e.g. "Sunny").
    pub conditions: String,
    /// Relative humidity percentage. Integral unless it failed to parse.
    pub humidity: f64,
    /// Wind speed in km/h.
    pub wind_speed: f64,
    /// Lexically sortable date, `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date_recorded: String,
}

/// The fields of an observation before it has been stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewObservation {
    pub city: String,
    pub temperature: f64,
    pub conditions: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub date_recorded: String,
}

impl NewObservation {
    /// Create a new set of observation fields.
    pub fn new(
        city: impl Into<String>,
        temperature: f64,
        conditions: impl Into<String>,
        humidity: f64,
        wind_speed: f64,
        date_recorded: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            temperature,
            conditions: conditions.into(),
            humidity,
            wind_speed,
            date_recorded: date_recorded.into(),
        }
    }

    /// Attach a store identifier, producing a stored [`Observation`].
    #[must_use]
    pub fn into_observation(self, id: i64) -> Observation {
        Observation {
            id,
            city: self.city,
            temperature: self.temperature,
            conditions: self.conditions,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            date_recorded: self.date_recorded,
        }
    }
}

impl From<Observation> for NewObservation {
    fn from(observation: Observation) -> Self {
        Self {
            city: observation.city,
            temperature: observation.temperature,
            conditions: observation.conditions,
            humidity: observation.humidity,
            wind_speed: observation.wind_speed,
            date_recorded: observation.date_recorded,
        }
    }
}

/// High, low and average for one measured dimension.
///
/// For an empty input the values are the sentinels `high = -inf`,
/// `low = +inf` and `average = NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionStats {
    pub high: f64,
    pub low: f64,
    pub average: f64,
}

impl DimensionStats {
    /// Stats for a dimension with no samples.
    pub const EMPTY: Self = Self {
        high: f64::NEG_INFINITY,
        low: f64::INFINITY,
        average: f64::NAN,
    };

    /// Whether these stats carry the empty-input sentinels.
    pub fn is_empty(&self) -> bool {
        self.high == f64::NEG_INFINITY && self.low == f64::INFINITY && self.average.is_nan()
    }
}

impl Default for DimensionStats {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Result of analysing a set of observations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisReport {
    pub temperature: DimensionStats,
    pub humidity: DimensionStats,
    pub wind_speed: DimensionStats,
    /// Natural-language summary, e.g. `"Warm. Very humid. Calm winds."`.
    pub summary: String,
}
