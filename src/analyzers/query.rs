use chrono::NaiveDate;
use tracing::warn;

use crate::models::{EnrichedRecord, EnrichedTable};
use crate::processors::enricher::parse_timestamp;

/// Optional predicates for one query. Constructed per call, not persisted.
///
/// Date bounds are set from raw strings; a string that fails to parse leaves
/// that bound unset, so the predicate is simply not applied. This leniency is
/// deliberate policy, visible here in the `Option` rather than buried in
/// control flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    country: Option<String>,
    location: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_start_date(mut self, raw: &str) -> Self {
        self.start_date = parse_date_predicate(raw);
        self
    }

    pub fn with_end_date(mut self, raw: &str) -> Self {
        self.end_date = parse_date_predicate(raw);
        self
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// All predicates AND-composed; an absent predicate passes every row.
    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        if let Some(country) = &self.country {
            if record.raw.country != *country {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if record.raw.location_name != *location {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if record.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if record.date > end {
                return false;
            }
        }
        true
    }
}

/// Parse a date predicate leniently: `None` means "predicate not applied".
pub fn parse_date_predicate(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    // A full timestamp is acceptable too; only the date part is kept
    if let Ok(timestamp) = parse_timestamp(trimmed) {
        return Some(timestamp.date());
    }
    warn!(value = raw, "ignoring unparsable date predicate");
    None
}

/// Query engine over one enriched table.
///
/// Holds `None` when the load failed; every query then returns an empty
/// result deterministically, never an error. Queries are pure reads and
/// return cloned snapshots.
pub struct AirQualityAnalyzer {
    table: Option<EnrichedTable>,
}

impl AirQualityAnalyzer {
    pub fn new(table: Option<EnrichedTable>) -> Self {
        Self { table }
    }

    pub fn from_table(table: EnrichedTable) -> Self {
        Self { table: Some(table) }
    }

    pub fn without_data() -> Self {
        Self { table: None }
    }

    pub fn has_data(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Option<&EnrichedTable> {
        self.table.as_ref()
    }

    /// Rows matching the filter, in table order, as a snapshot.
    pub fn filtered(&self, filter: &RecordFilter) -> Vec<EnrichedRecord> {
        match &self.table {
            Some(table) => table
                .iter()
                .filter(|record| filter.matches(record))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn countries(&self) -> Vec<String> {
        self.table
            .as_ref()
            .map(EnrichedTable::countries)
            .unwrap_or_default()
    }

    pub fn locations(&self, country: Option<&str>) -> Vec<String> {
        self.table
            .as_ref()
            .map(|t| t.locations(country))
            .unwrap_or_default()
    }

    pub fn latest_record(&self) -> Option<&EnrichedRecord> {
        self.table.as_ref().and_then(EnrichedTable::latest_record)
    }
}
