//! HTTP REST API for city weather observations.
//!
//! This crate provides a service that:
//! - Synthesizes a current observation for a city and records it
//! - Returns recorded history for a city, optionally from a given date
//! - Reports high/low/average statistics and a summary per city
//! - Checks a static admin credential
//!
//! # REST API Endpoints
//!
//! - `GET /api/health` - Service health check
//! - `GET /api/weather/current?city=` - Record and return current weather
//! - `GET /api/weather/history/{city}?from=` - Recorded observations
//! - `GET /api/weather/analysis/{city}` - Statistics and summary
//! - `POST /api/weather/admin/login` - Static credential check
//!
//! # Configuration
//!
//! The service reads configuration from `~/.config/weather-report/server.toml`:
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:3000"
//!
//! [query]
//! # "parameterized" binds values; "raw" concatenates them into the query text
//! mode = "parameterized"
//!
//! [security]
//! admin_username = "admin"
//! admin_password = "change-me"
//! token = "session-token"
//! ```

pub mod api;
pub mod config;
pub mod source;
pub mod state;
pub mod validate;

pub use config::{Config, ConfigError, QueryConfig, SecurityConfig, ServerConfig};
pub use source::{ObservationSource, RandomSource};
pub use state::AppState;
