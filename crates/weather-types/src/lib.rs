//! Shared data types for the weather-report workspace.
//!
//! This crate holds the plain data that flows between the record store,
//! the analysis engine and the HTTP boundary:
//!
//! - [`Observation`]: one stored weather reading for a city
//! - [`NewObservation`]: the fields of a reading before the store assigns an id
//! - [`AnalysisReport`] and [`DimensionStats`]: derived high/low/average figures
//!
//! # Example
//!
//! ```
//! use weather_types::NewObservation;
//!
//! let fields = NewObservation::new("Jakarta", 32.0, "Sunny", 65.0, 8.0, "2024-01-01");
//! let observation = fields.into_observation(1);
//! assert_eq!(observation.id, 1);
//! assert_eq!(observation.city, "Jakarta");
//! ```

pub mod types;

pub use types::{AnalysisReport, DimensionStats, NewObservation, Observation};
