//! In-memory storage and query simulation for weather observations.
//!
//! This crate provides the append-only [`RecordStore`] and the
//! [`QueryEngine`] that drives it. The engine recognises instructions
//! written in a small SQL-like text form, turns them into a tagged
//! [`Instruction`] and applies that to the store.
//!
//! # Features
//!
//! - Monotonic identifiers, never reused
//! - Case-insensitive substring matching on city names
//! - Optional lexical `date_recorded >=` lower bound
//! - Raw (text concatenation) and parameterized (bound values) modes
//!
//! # Example
//!
//! ```
//! use weather_store::{QueryEngine, QueryMode};
//! use weather_types::NewObservation;
//!
//! let engine = QueryEngine::new();
//! let fields = NewObservation::new("Jakarta", 32.0, "Sunny", 65.0, 8.0, "2024-01-01");
//! let id = engine.insert(&fields, QueryMode::Parameterized)?;
//! assert_eq!(id, Some(1));
//!
//! let rows = engine.history("jakar", None, QueryMode::Parameterized)?;
//! assert_eq!(rows.len(), 1);
//! # Ok::<(), weather_store::Error>(())
//! ```

mod engine;
mod error;
mod instruction;
mod store;

pub use engine::{QueryEngine, QueryMode, QueryOutcome, compose_history_query, compose_insert_query};
pub use error::{Error, Result};
pub use instruction::{
    INSERT_MARKER, Instruction, InstructionParser, NoopReason, SELECT_MARKER, SelectFilter, Value,
};
pub use store::RecordStore;
