//! Append-only record store.

use tracing::debug;

use weather_types::{NewObservation, Observation};

/// In-memory, append-only collection of observations.
///
/// Records are kept in insertion order and never updated or removed.
/// Identifiers start at 1 and increase by one per insert.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Observation>,
    next_id: i64,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an observation and return its assigned identifier.
    ///
    /// Field values are stored verbatim; nothing is validated.
    pub fn insert(&mut self, fields: NewObservation) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(fields.into_observation(id));
        debug!("Stored observation {}", id);
        id
    }

    /// Every observation whose city contains `city_filter`, ignoring case.
    ///
    /// This is a substring match: `"jakar"` selects `"Jakarta"`.
    pub fn select_by_city(&self, city_filter: &str) -> Vec<Observation> {
        let needle = city_filter.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.city.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// All observations in insertion order.
    pub fn all(&self) -> &[Observation] {
        &self.records
    }

    /// Number of stored observations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no observations.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(city: &str) -> NewObservation {
        NewObservation::new(city, 22.5, "Cloudy", 45.0, 10.0, "2024-03-01")
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.select_by_city("anything").is_empty());
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut store = RecordStore::new();

        assert_eq!(store.insert(fields("Jakarta")), 1);
        assert_eq!(store.insert(fields("London")), 2);
        assert_eq!(store.insert(fields("Jakarta")), 3);

        let ids: Vec<i64> = store.all().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_then_select_exact_city() {
        let mut store = RecordStore::new();
        let id = store.insert(fields("Jakarta"));

        let rows = store.select_by_city("Jakarta");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
    }

    #[test]
    fn test_select_is_case_insensitive_substring() {
        let mut store = RecordStore::new();
        store.insert(fields("Jakarta"));
        store.insert(fields("London"));

        let rows = store.select_by_city("jakar");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city, "Jakarta");

        let rows = store.select_by_city("ON");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city, "London");
    }

    #[test]
    fn test_select_no_match_returns_empty() {
        let mut store = RecordStore::new();
        store.insert(fields("Jakarta"));

        assert!(store.select_by_city("NonExistentCity").is_empty());
    }

    #[test]
    fn test_select_preserves_insertion_order() {
        let mut store = RecordStore::new();
        store.insert(fields("Paris"));
        store.insert(fields("Berlin"));
        store.insert(fields("paris"));

        let ids: Vec<i64> = store.select_by_city("PARIS").iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_insert_accepts_unvalidated_values() {
        let mut store = RecordStore::new();
        let mut odd = fields("");
        odd.humidity = f64::NAN;
        odd.wind_speed = -5.0;

        let id = store.insert(odd);
        let stored = &store.all()[0];
        assert_eq!(stored.id, id);
        assert!(stored.humidity.is_nan());
        assert_eq!(stored.wind_speed, -5.0);
    }
}
