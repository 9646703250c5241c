//! Request input validation.
//!
//! City names are checked before they reach the query engine, and admin
//! credentials are compared in constant time.

use std::sync::LazyLock;

use regex::Regex;
use subtle::ConstantTimeEq;

static CITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("city pattern is valid"));

/// Why a city parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CityError {
    #[error("City parameter is required")]
    Missing,
    #[error("Invalid city name format")]
    InvalidFormat,
}

/// Check that a city is present and made of letters, whitespace, hyphens
/// and apostrophes.
///
/// Apostrophes are allowed so names like "Val d'Or" pass.
///
/// # Examples
///
/// ```
/// use weather_service::validate::{CityError, validate_city};
///
/// assert_eq!(validate_city(Some("New York")), Ok("New York"));
/// assert_eq!(validate_city(Some("")), Err(CityError::Missing));
/// assert_eq!(validate_city(Some("Paris75")), Err(CityError::InvalidFormat));
/// ```
pub fn validate_city(city: Option<&str>) -> Result<&str, CityError> {
    match city {
        None | Some("") => Err(CityError::Missing),
        Some(city) if CITY_PATTERN.is_match(city) => Ok(city),
        Some(_) => Err(CityError::InvalidFormat),
    }
}

/// Compare a provided credential with the expected one in constant time.
pub fn credentials_match(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cities() {
        for city in ["Jakarta", "New York", "Val d'Or", "Stratford-upon-Avon"] {
            assert_eq!(validate_city(Some(city)), Ok(city));
        }
    }

    #[test]
    fn test_missing_city() {
        assert_eq!(validate_city(None), Err(CityError::Missing));
        assert_eq!(validate_city(Some("")), Err(CityError::Missing));
    }

    #[test]
    fn test_invalid_cities() {
        for city in ["Jakarta;", "<script>", "São Paulo", "city=1", "Jakarta'; DROP TABLE--1"] {
            assert_eq!(validate_city(Some(city)), Err(CityError::InvalidFormat), "{}", city);
        }
    }

    #[test]
    fn test_apostrophe_injection_passes_validation() {
        assert!(validate_city(Some("Jakarta' OR 'a")).is_ok());
    }

    #[test]
    fn test_credentials_match() {
        assert!(credentials_match("admin123", "admin123"));
        assert!(!credentials_match("admin123", "admin124"));
        assert!(!credentials_match("admin123", "admin"));
        assert!(!credentials_match("admin123", ""));
    }

    #[test]
    fn test_city_error_messages() {
        assert_eq!(CityError::Missing.to_string(), "City parameter is required");
        assert_eq!(CityError::InvalidFormat.to_string(), "Invalid city name format");
    }
}
