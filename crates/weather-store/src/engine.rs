//! Query engine that applies instructions to the record store.
//!
//! # Concurrency
//!
//! The engine owns the [`RecordStore`] behind a single mutex. Each
//! instruction holds the lock for the duration of one insert or select,
//! so inserts are observed by later selects in insertion order. A
//! poisoned lock is reported as [`Error::StoreUnavailable`].
//!
//! # Modes
//!
//! [`QueryMode::Raw`] builds instruction text by string concatenation and
//! runs it through the text parser. Values are not escaped, so a quote in a
//! city or date ends up inside the instruction exactly as supplied.
//! [`QueryMode::Parameterized`] sends placeholder text with bound values and
//! is the default.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use weather_types::{NewObservation, Observation};

use crate::error::{Error, Result};
use crate::instruction::{Instruction, InstructionParser, SelectFilter, Value};
use crate::store::RecordStore;

const INSERT_COLUMNS: &str =
    "INSERT INTO weather_data (city, temperature, conditions, humidity, wind_speed, date_recorded)";

/// How the engine turns caller values into an instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Placeholder text with positionally bound values.
    #[default]
    Parameterized,
    /// Values concatenated into the instruction text without escaping.
    Raw,
}

/// Result of executing one instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// An observation was stored under `id`.
    Inserted { id: i64 },
    /// Selected observations, possibly none.
    Rows(Vec<Observation>),
    /// The instruction was a no-op.
    Empty,
}

impl QueryOutcome {
    /// Selected rows, or an empty list for inserts and no-ops.
    pub fn into_rows(self) -> Vec<Observation> {
        match self {
            QueryOutcome::Rows(rows) => rows,
            QueryOutcome::Inserted { .. } | QueryOutcome::Empty => Vec::new(),
        }
    }

    /// Identifier of the inserted observation, if any.
    pub fn inserted_id(&self) -> Option<i64> {
        match self {
            QueryOutcome::Inserted { id } => Some(*id),
            _ => None,
        }
    }
}

/// Build the select text for a city with an optional date lower bound.
///
/// Values are interpolated as-is.
///
/// ```
/// use weather_store::compose_history_query;
///
/// assert_eq!(
///     compose_history_query("Jakarta", Some("2024-01-01")),
///     "SELECT * FROM weather_data WHERE city = 'Jakarta' AND date_recorded >= '2024-01-01'"
/// );
/// ```
pub fn compose_history_query(city: &str, date_from: Option<&str>) -> String {
    let mut query = format!("SELECT * FROM weather_data WHERE city = '{}'", city);
    if let Some(date) = date_from {
        query.push_str(&format!(" AND date_recorded >= '{}'", date));
    }
    query
}

/// Build the insert text for an observation with values interpolated as-is.
pub fn compose_insert_query(fields: &NewObservation) -> String {
    format!(
        "{} VALUES ('{}', {}, '{}', {}, {}, '{}')",
        INSERT_COLUMNS,
        fields.city,
        fields.temperature,
        fields.conditions,
        fields.humidity,
        fields.wind_speed,
        fields.date_recorded
    )
}

/// Stateless front end over a shared [`RecordStore`].
#[derive(Debug, Default)]
pub struct QueryEngine {
    store: Mutex<RecordStore>,
    parser: InstructionParser,
}

impl QueryEngine {
    /// Create an engine over an empty store.
    pub fn new() -> Self {
        Self::with_store(RecordStore::new())
    }

    /// Create an engine over an existing store.
    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store: Mutex::new(store),
            parser: InstructionParser::new(),
        }
    }

    /// Execute literal instruction text.
    pub fn execute(&self, text: &str) -> Result<QueryOutcome> {
        debug!("Executing query: {}", text);
        let instruction = self.parser.parse(text);
        self.apply(instruction)
    }

    /// Execute placeholder text with bound values.
    pub fn execute_prepared(&self, text: &str, params: &[Value]) -> Result<QueryOutcome> {
        debug!("Executing prepared query: {} ({} params)", text, params.len());
        let instruction = self.parser.parse_prepared(text, params)?;
        self.apply(instruction)
    }

    /// Apply an already recognised instruction to the store.
    pub fn apply(&self, instruction: Instruction) -> Result<QueryOutcome> {
        match instruction {
            Instruction::Insert(fields) => {
                let city = fields.city.clone();
                let id = self.lock()?.insert(fields);
                info!("Inserted observation {} for {}", id, city);
                Ok(QueryOutcome::Inserted { id })
            }
            Instruction::Select(filter) => Ok(QueryOutcome::Rows(self.select(&filter)?)),
            Instruction::Noop(reason) => {
                warn!("Ignoring instruction: {}", reason);
                Ok(QueryOutcome::Empty)
            }
        }
    }

    /// Store an observation and return its identifier.
    ///
    /// Returns `Ok(None)` when the instruction produced no insert, which can
    /// happen in raw mode if an interpolated value breaks the template.
    pub fn insert(&self, fields: &NewObservation, mode: QueryMode) -> Result<Option<i64>> {
        let outcome = match mode {
            QueryMode::Raw => self.execute(&compose_insert_query(fields))?,
            QueryMode::Parameterized => {
                let text = format!("{} VALUES (?, ?, ?, ?, ?, ?)", INSERT_COLUMNS);
                let params = [
                    Value::from(fields.city.as_str()),
                    Value::Real(fields.temperature),
                    Value::from(fields.conditions.as_str()),
                    Value::Real(fields.humidity),
                    Value::Real(fields.wind_speed),
                    Value::from(fields.date_recorded.as_str()),
                ];
                self.execute_prepared(&text, &params)?
            }
        };
        Ok(outcome.inserted_id())
    }

    /// Observations for `city`, optionally recorded on or after `date_from`.
    ///
    /// In raw mode a city containing `' AND ` ends the city clause early, so
    /// `"Jakarta' AND 'x"` filters on `"Jakarta"` while parameterized mode
    /// filters on the whole value.
    pub fn history(
        &self,
        city: &str,
        date_from: Option<&str>,
        mode: QueryMode,
    ) -> Result<Vec<Observation>> {
        let outcome = match mode {
            QueryMode::Raw => self.execute(&compose_history_query(city, date_from))?,
            QueryMode::Parameterized => {
                let mut text = String::from("SELECT * FROM weather_data WHERE city = ?");
                let mut params = vec![Value::from(city)];
                if let Some(date) = date_from {
                    text.push_str(" AND date_recorded >= ?");
                    params.push(Value::from(date));
                }
                self.execute_prepared(&text, &params)?
            }
        };
        Ok(outcome.into_rows())
    }

    /// Number of stored observations.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn select(&self, filter: &SelectFilter) -> Result<Vec<Observation>> {
        let store = self.lock()?;
        let mut rows = match &filter.city {
            Some(city) => store.select_by_city(city),
            None => store.all().to_vec(),
        };
        drop(store);

        if let Some(from) = &filter.date_from {
            rows.retain(|row| row.date_recorded.as_str() >= from.as_str());
        }

        debug!("Selected {} observation(s)", rows.len());
        Ok(rows)
    }

    fn lock(&self) -> Result<MutexGuard<'_, RecordStore>> {
        self.store
            .lock()
            .map_err(|e| Error::StoreUnavailable(e.to_string()))
    }
}
