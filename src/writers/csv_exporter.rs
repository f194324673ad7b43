use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::EnrichedRecord;
use crate::utils::constants::{
    COL_COUNTRY, COL_LAST_UPDATED, COL_LOCATION, COL_PM10, COL_PM2_5, DERIVED_COLUMNS,
};

/// Writes an enriched (or filtered) subset as a row-oriented CSV table.
///
/// Column layout: the five required raw columns, the passthrough columns in
/// stable sorted order, then the derived columns. Row order follows the
/// input subset.
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_records(&self, records: &[EnrichedRecord], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);

        let extra_columns: Vec<String> = records
            .first()
            .map(|r| r.raw.extra.keys().cloned().collect())
            .unwrap_or_default();

        writer.write_record(self.headers(&extra_columns))?;
        for record in records {
            writer.write_record(self.row(record, &extra_columns))?;
        }
        writer.flush()?;

        debug!(records = records.len(), path = %path.display(), "CSV export complete");
        Ok(())
    }

    fn headers(&self, extra_columns: &[String]) -> Vec<String> {
        let mut headers = vec![
            COL_COUNTRY.to_string(),
            COL_LOCATION.to_string(),
            COL_LAST_UPDATED.to_string(),
            COL_PM2_5.to_string(),
            COL_PM10.to_string(),
        ];
        headers.extend(extra_columns.iter().cloned());
        headers.extend(DERIVED_COLUMNS.iter().map(|c| c.to_string()));
        headers
    }

    fn row(&self, record: &EnrichedRecord, extra_columns: &[String]) -> Vec<String> {
        let mut row = vec![
            record.raw.country.clone(),
            record.raw.location_name.clone(),
            record.raw.last_updated.clone(),
            format_concentration(record.raw.pm2_5),
            format_concentration(record.raw.pm10),
        ];
        for column in extra_columns {
            row.push(record.raw.extra.get(column).cloned().unwrap_or_default());
        }
        row.push(record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
        row.push(record.date.to_string());
        row.push(record.time_of_day.format("%H:%M:%S").to_string());
        row.push(record.hour.to_string());
        row.push(record.month.to_string());
        row.push(record.year.to_string());
        row.push(record.season.to_string());
        row.push(format!("{:.2}", record.aqi));
        row.push(record.category.label().to_string());
        row
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

// Trailing-zero-free, so 2.0 exports as "2" and 2.3 as "2.3"
fn format_concentration(value: f64) -> String {
    format!("{}", value)
}
