use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{AirQualityCategory, RawRecord, Season};

/// A raw reading plus the fields derived at load time.
///
/// Derived fields are pure functions of the raw fields, computed once by the
/// enricher and immutable afterwards. The raw record itself is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub raw: RawRecord,

    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
    pub time_of_day: NaiveTime,
    pub hour: u32,
    pub month: u32,
    pub year: i32,
    pub season: Season,

    pub aqi: f64,
    pub category: AirQualityCategory,
}

/// The enriched dataset, row order preserved from the source.
///
/// Immutable after construction. Queries clone matching rows out, so result
/// sets are snapshots that never alias the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedTable {
    records: Vec<EnrichedRecord>,
}

impl EnrichedTable {
    pub fn new(records: Vec<EnrichedRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnrichedRecord> {
        self.records.iter()
    }

    /// Sorted unique country names, for populating filter choices.
    pub fn countries(&self) -> Vec<String> {
        let mut countries: Vec<String> =
            self.records.iter().map(|r| r.raw.country.clone()).collect();
        countries.sort();
        countries.dedup();
        countries
    }

    /// Sorted unique location names, optionally restricted to one country.
    pub fn locations(&self, country: Option<&str>) -> Vec<String> {
        let mut locations: Vec<String> = self
            .records
            .iter()
            .filter(|r| country.map_or(true, |c| r.raw.country == c))
            .map(|r| r.raw.location_name.clone())
            .collect();
        locations.sort();
        locations.dedup();
        locations
    }

    /// The row with the maximum timestamp, if any.
    pub fn latest_record(&self) -> Option<&EnrichedRecord> {
        self.records.iter().max_by_key(|r| r.timestamp)
    }
}

impl<'a> IntoIterator for &'a EnrichedTable {
    type Item = &'a EnrichedRecord;
    type IntoIter = std::slice::Iter<'a, EnrichedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn record(country: &str, location: &str, timestamp: &str) -> EnrichedRecord {
        let ts = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M").unwrap();
        EnrichedRecord {
            raw: RawRecord::new(
                country.to_string(),
                location.to_string(),
                timestamp.to_string(),
                2.0,
                2.3,
            ),
            timestamp: ts,
            date: ts.date(),
            time_of_day: ts.time(),
            hour: ts.hour(),
            month: ts.month(),
            year: ts.year(),
            season: Season::from_month(ts.month()),
            aqi: 8.33,
            category: AirQualityCategory::Good,
        }
    }

    #[test]
    fn test_countries_sorted_unique() {
        let table = EnrichedTable::new(vec![
            record("Ukraine", "Kyiv", "2024-05-16 11:45"),
            record("France", "Paris", "2024-05-16 12:00"),
            record("Ukraine", "Lviv", "2024-05-16 12:15"),
        ]);
        assert_eq!(table.countries(), vec!["France", "Ukraine"]);
    }

    #[test]
    fn test_locations_restricted_to_country() {
        let table = EnrichedTable::new(vec![
            record("Ukraine", "Kyiv", "2024-05-16 11:45"),
            record("France", "Paris", "2024-05-16 12:00"),
            record("Ukraine", "Lviv", "2024-05-16 12:15"),
        ]);
        assert_eq!(table.locations(Some("Ukraine")), vec!["Kyiv", "Lviv"]);
        assert_eq!(table.locations(None), vec!["Kyiv", "Lviv", "Paris"]);
    }

    #[test]
    fn test_latest_record() {
        let table = EnrichedTable::new(vec![
            record("Ukraine", "Kyiv", "2024-05-16 11:45"),
            record("France", "Paris", "2024-05-17 09:00"),
            record("Ukraine", "Lviv", "2024-05-16 12:15"),
        ]);
        let latest = table.latest_record().unwrap();
        assert_eq!(latest.raw.location_name, "Paris");
    }

    #[test]
    fn test_empty_table() {
        let table = EnrichedTable::default();
        assert!(table.is_empty());
        assert!(table.latest_record().is_none());
        assert!(table.countries().is_empty());
    }
}
