//! Application state shared across handlers.
//!
//! The query engine serialises access to the record store itself, so
//! handlers share it without an outer lock. Configuration sits behind a
//! `RwLock` so tests and future endpoints can adjust it at runtime.

use std::sync::Arc;

use tokio::sync::RwLock;
use weather_store::{QueryEngine, QueryMode};

use crate::config::Config;
use crate::source::{ObservationSource, RandomSource};

/// Shared application state.
pub struct AppState {
    /// Query engine over the in-memory record store.
    pub engine: QueryEngine,
    /// Configuration (RwLock for runtime updates).
    pub config: RwLock<Config>,
    /// Where current observations come from.
    pub source: Box<dyn ObservationSource>,
}

impl AppState {
    /// Create new application state with the random observation source.
    pub fn new(engine: QueryEngine, config: Config) -> Arc<Self> {
        Self::with_source(engine, config, Box::new(RandomSource))
    }

    /// Create new application state with a specific observation source.
    pub fn with_source(
        engine: QueryEngine,
        config: Config,
        source: Box<dyn ObservationSource>,
    ) -> Arc<Self> {
        Arc::new(Self {
            engine,
            config: RwLock::new(config),
            source,
        })
    }

    /// The configured query mode.
    pub async fn query_mode(&self) -> QueryMode {
        self.config.read().await.query.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_state_new() {
        let state = AppState::new(QueryEngine::new(), Config::default());

        let config = state.config.read().await;
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        drop(config);

        assert!(state.engine.is_empty().unwrap());
        assert_eq!(state.query_mode().await, QueryMode::Parameterized);
    }

    #[tokio::test]
    async fn test_query_mode_follows_config() {
        let state = AppState::new(QueryEngine::new(), Config::default());
        state.config.write().await.query.mode = QueryMode::Raw;
        assert_eq!(state.query_mode().await, QueryMode::Raw);
    }
}
