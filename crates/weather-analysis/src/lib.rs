//! Statistical analysis of weather observations.
//!
//! [`analyze`] reduces a slice of observations to an [`AnalysisReport`]:
//! high, low and average for temperature, humidity and wind speed, plus a
//! summary built from the [`bands`] each average falls into.
//!
//! Empty input is not an error. Every dimension then reports
//! `high = -inf`, `low = +inf` and `average = NaN`.
//!
//! # Example
//!
//! ```
//! use weather_analysis::analyze;
//! use weather_types::NewObservation;
//!
//! let observations = vec![
//!     NewObservation::new("Jakarta", 32.0, "Sunny", 65.0, 8.0, "2024-01-01").into_observation(1),
//!     NewObservation::new("Jakarta", 28.0, "Rainy", 80.0, 12.0, "2024-01-02").into_observation(2),
//! ];
//!
//! let report = analyze(&observations);
//! assert_eq!(report.temperature.average, 30.0);
//! assert_eq!(report.summary, "Warm. Humid. Calm winds.");
//! ```
//!
//! [`AnalysisReport`]: weather_types::AnalysisReport

pub mod analysis;
pub mod bands;

pub use analysis::{analyze, summarize};
pub use bands::{HumidityBand, TemperatureBand, WindBand};
