use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::{AirQualityCategory, EnrichedRecord, EnrichedTable, RawRecord, Season};
use crate::processors::aqi::compute_aqi;
use crate::utils::constants::TIMESTAMP_FORMATS;

/// Derives calendar features, AQI and severity category for raw readings.
///
/// Enrichment is pure and runs once per load. A single unparsable
/// `last_updated` value fails the whole load; callers then treat the table
/// as absent rather than partially loaded.
pub struct Enricher;

impl Enricher {
    pub fn new() -> Self {
        Self
    }

    pub fn enrich(&self, raw_records: Vec<RawRecord>) -> Result<EnrichedTable> {
        let mut records = Vec::with_capacity(raw_records.len());
        for raw in raw_records {
            records.push(self.enrich_record(raw)?);
        }
        debug!(records = records.len(), "enrichment complete");
        Ok(EnrichedTable::new(records))
    }

    pub fn enrich_record(&self, raw: RawRecord) -> Result<EnrichedRecord> {
        raw.validate()?;

        let timestamp = parse_timestamp(&raw.last_updated)?;
        let aqi = compute_aqi(raw.pm2_5, raw.pm10);

        Ok(EnrichedRecord {
            timestamp,
            date: timestamp.date(),
            time_of_day: timestamp.time(),
            hour: timestamp.hour(),
            month: timestamp.month(),
            year: timestamp.year(),
            season: Season::from_month(timestamp.month()),
            aqi,
            category: AirQualityCategory::from_aqi(aqi),
            raw,
        })
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `last_updated` value, trying each accepted format in order.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(timestamp);
        }
    }
    // Date-only values are taken as midnight
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(timestamp) = date.and_hms_opt(0, 0, 0) {
            return Ok(timestamp);
        }
    }
    Err(ProcessingError::TimestampParse {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(last_updated: &str, pm2_5: f64, pm10: f64) -> RawRecord {
        RawRecord::new(
            "Ukraine".to_string(),
            "Kyiv".to_string(),
            last_updated.to_string(),
            pm2_5,
            pm10,
        )
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-05-16 11:45").is_ok());
        assert!(parse_timestamp("2024-05-16 11:45:30").is_ok());
        assert!(parse_timestamp("2024-05-16T11:45:30").is_ok());
        assert!(parse_timestamp("2024-05-16").is_ok());
        assert!(parse_timestamp("not a date").is_err());
    }

    #[test]
    fn test_enrich_record_derives_calendar_fields() {
        let record = Enricher::new().enrich_record(raw("2024-05-16 11:45", 2.0, 2.3)).unwrap();

        assert_eq!(record.hour, 11);
        assert_eq!(record.month, 5);
        assert_eq!(record.year, 2024);
        assert_eq!(record.season, Season::Spring);
        assert_eq!(record.date.to_string(), "2024-05-16");
        assert!((record.aqi - 8.33).abs() < 0.01);
        assert_eq!(record.category, AirQualityCategory::Good);
    }

    #[test]
    fn test_enrich_preserves_raw_fields() {
        let input = raw("2024-05-16 11:45", 40.0, 100.0);
        let record = Enricher::new().enrich_record(input.clone()).unwrap();
        assert_eq!(record.raw, input);
        assert_eq!(
            record.category,
            AirQualityCategory::UnhealthyForSensitiveGroups
        );
    }

    #[test]
    fn test_bad_timestamp_fails_whole_load() {
        let enricher = Enricher::new();
        let result = enricher.enrich(vec![
            raw("2024-05-16 11:45", 2.0, 2.3),
            raw("yesterday-ish", 2.0, 2.3),
        ]);
        assert!(matches!(
            result,
            Err(ProcessingError::TimestampParse { .. })
        ));
    }

    #[test]
    fn test_enrichment_is_deterministic() {
        let enricher = Enricher::new();
        let rows = vec![
            raw("2024-05-16 11:45", 2.0, 2.3),
            raw("2024-12-01 08:00", 40.0, 100.0),
        ];
        let first = enricher.enrich(rows.clone()).unwrap();
        let second = enricher.enrich(rows).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_order_preserved() {
        let enricher = Enricher::new();
        let table = enricher
            .enrich(vec![
                raw("2024-05-16 12:00", 2.0, 2.3),
                raw("2024-05-16 11:00", 2.0, 2.3),
            ])
            .unwrap();
        assert_eq!(table.records()[0].hour, 12);
        assert_eq!(table.records()[1].hour, 11);
    }
}
