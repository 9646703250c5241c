//! Recognition of SQL-like instruction text.
//!
//! The record store has no query language. Instead, instruction text is
//! matched against a handful of fixed templates and the captured values
//! are turned into an [`Instruction`]:
//!
//! | Template | Result |
//! |----------|--------|
//! | `SELECT * FROM weather_data` | [`Instruction::Select`] with no filter |
//! | `... WHERE city = '<city>'` | select filtered by city |
//! | `... AND date_recorded >= '<date>'` | select with a date lower bound |
//! | `INSERT INTO weather_data ... VALUES ('<city>', <t>, '<cond>', <h>, <w>, '<date>')` | [`Instruction::Insert`] |
//!
//! Every capture is non-greedy and taken verbatim. Quotes inside a value are
//! not unescaped or rejected, so text built by concatenation carries any
//! injected fragment through unchanged. A clause followed by anything other
//! than ` AND ` or the end of the text (`;`, `ORDER BY`, `LIMIT`) is still
//! read, up to its first closing quote.
//!
//! Placeholder forms (`city = ?`, `VALUES (?, ?, ?, ?, ?, ?)`) are handled by
//! [`InstructionParser::parse_prepared`], which binds typed [`Value`]s by
//! position instead of reading values out of the text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use weather_types::NewObservation;

use crate::error::{Error, Result};

/// Marker that identifies a select instruction.
pub const SELECT_MARKER: &str = "SELECT * FROM weather_data";

/// Marker that identifies an insert instruction.
pub const INSERT_MARKER: &str = "INSERT INTO weather_data";

static CITY_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)city = '(.*?)'(?:\s+AND\s|\s*$)").expect("city clause pattern is valid")
});

static DATE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)date_recorded >= '(.*?)'\s*$").expect("date clause pattern is valid")
});

// Used when trailing text (`;`, `ORDER BY`, `LIMIT`) follows the clause.
static CITY_CLAUSE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"city = '([^']+)'").expect("quoted city pattern is valid"));

static DATE_CLAUSE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"date_recorded >= '([^']+)'").expect("quoted date pattern is valid")
});

static INSERT_VALUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)VALUES \('(.+?)', (.+?), '(.+?)', (.+?), (.+?), '(.+?)'\)")
        .expect("insert values pattern is valid")
});

static CITY_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"city = \?").expect("city placeholder pattern is valid"));

static DATE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"date_recorded >= \?").expect("date placeholder pattern is valid")
});

static VALUES_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"VALUES \(\?, \?, \?, \?, \?, \?\)").expect("values placeholder pattern is valid")
});

/// Filter carried by a select instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectFilter {
    /// Case-insensitive substring to match against the city.
    pub city: Option<String>,
    /// Inclusive lexical lower bound on `date_recorded`.
    pub date_from: Option<String>,
}

/// Why an instruction was accepted but does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoopReason {
    /// Insert marker present but the value list did not fit the template.
    InsertTemplateMismatch,
    /// Neither the select nor the insert marker was found.
    Unrecognized,
}

impl fmt::Display for NoopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoopReason::InsertTemplateMismatch => write!(f, "insert values did not match template"),
            NoopReason::Unrecognized => write!(f, "unrecognized instruction"),
        }
    }
}

/// Structured intent recovered from instruction text.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Append a new observation.
    Insert(NewObservation),
    /// Select observations, optionally filtered.
    Select(SelectFilter),
    /// Accepted but produces an empty outcome.
    Noop(NoopReason),
}

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Real(f64),
    Integer(i64),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

/// Turns instruction text into an [`Instruction`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionParser;

impl InstructionParser {
    /// Create a parser.
    pub fn new() -> Self {
        Self
    }

    /// Recognise literal instruction text.
    ///
    /// Never fails: text matching no template yields [`Instruction::Noop`].
    pub fn parse(&self, text: &str) -> Instruction {
        if text.contains(SELECT_MARKER) {
            let city = capture(&CITY_CLAUSE, text).or_else(|| capture(&CITY_CLAUSE_QUOTED, text));
            let date_from = city.as_ref().and_then(|_| {
                capture(&DATE_CLAUSE, text).or_else(|| capture(&DATE_CLAUSE_QUOTED, text))
            });
            return Instruction::Select(SelectFilter { city, date_from });
        }

        if text.contains(INSERT_MARKER) {
            return match INSERT_VALUES.captures(text) {
                Some(caps) => Instruction::Insert(NewObservation {
                    city: caps[1].to_string(),
                    temperature: parse_real(&caps[2]),
                    conditions: caps[3].to_string(),
                    humidity: parse_integer(&caps[4]),
                    wind_speed: parse_real(&caps[5]),
                    date_recorded: caps[6].to_string(),
                }),
                None => {
                    debug!("Insert instruction did not match the values template");
                    Instruction::Noop(NoopReason::InsertTemplateMismatch)
                }
            };
        }

        Instruction::Noop(NoopReason::Unrecognized)
    }

    /// Recognise placeholder text and bind `params` by position.
    ///
    /// Text with no recognised placeholders is handled by [`parse`](Self::parse)
    /// and must come with no parameters.
    ///
    /// # Errors
    ///
    /// - [`Error::ParameterCount`] if `params` does not match the placeholders
    /// - [`Error::ParameterType`] if a value cannot fill its placeholder
    pub fn parse_prepared(&self, text: &str, params: &[Value]) -> Result<Instruction> {
        if text.contains(SELECT_MARKER) {
            let has_city = CITY_PLACEHOLDER.is_match(text);
            let has_date = has_city && DATE_PLACEHOLDER.is_match(text);
            let expected = usize::from(has_city) + usize::from(has_date);
            check_count(expected, params)?;

            if expected == 0 {
                return Ok(self.parse(text));
            }

            let city = Some(bind_text(params, 0, "city")?);
            let date_from = if has_date {
                Some(bind_text(params, 1, "date_recorded")?)
            } else {
                None
            };
            return Ok(Instruction::Select(SelectFilter { city, date_from }));
        }

        if text.contains(INSERT_MARKER) && VALUES_PLACEHOLDER.is_match(text) {
            check_count(6, params)?;
            return Ok(Instruction::Insert(NewObservation {
                city: bind_text(params, 0, "city")?,
                temperature: bind_real(params, 1, "temperature")?,
                conditions: bind_text(params, 2, "conditions")?,
                humidity: bind_integer(params, 3, "humidity")?,
                wind_speed: bind_real(params, 4, "wind_speed")?,
                date_recorded: bind_text(params, 5, "date_recorded")?,
            }));
        }

        check_count(0, params)?;
        Ok(self.parse(text))
    }
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse a floating-point field, yielding NaN when it is not a number.
fn parse_real(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse an integer field from its leading signed digits, yielding NaN when
/// there are none. `"65.7"` reads as 65.
fn parse_integer(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return f64::NAN;
    }
    digits.parse::<f64>().map_or(f64::NAN, |v| sign * v)
}

fn check_count(expected: usize, params: &[Value]) -> Result<()> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(Error::ParameterCount {
            expected,
            actual: params.len(),
        })
    }
}

fn bind_text(params: &[Value], index: usize, field: &'static str) -> Result<String> {
    match &params[index] {
        Value::Text(s) => Ok(s.clone()),
        _ => Err(Error::ParameterType {
            index,
            field,
            expected: "text",
        }),
    }
}

fn bind_real(params: &[Value], index: usize, field: &'static str) -> Result<f64> {
    match params[index] {
        Value::Real(v) => Ok(v),
        Value::Integer(v) => Ok(v as f64),
        Value::Text(_) => Err(Error::ParameterType {
            index,
            field,
            expected: "a number",
        }),
    }
}

fn bind_integer(params: &[Value], index: usize, field: &'static str) -> Result<f64> {
    match params[index] {
        Value::Integer(v) => Ok(v as f64),
        Value::Real(v) => Ok(v.trunc()),
        Value::Text(_) => Err(Error::ParameterType {
            index,
            field,
            expected: "an integer",
        }),
    }
}
