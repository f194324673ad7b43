use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::RawRecord;
use crate::utils::constants::{
    COL_COUNTRY, COL_LAST_UPDATED, COL_LOCATION, COL_PM10, COL_PM2_5, DEFAULT_BUFFER_SIZE,
};

/// Reads raw sensor readings from a weather repository CSV export.
///
/// The five required columns are a fixed contract; any further columns are
/// carried through as passthrough fields on the record.
pub struct WeatherCsvReader {
    use_mmap: bool,
}

impl WeatherCsvReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    pub fn read_records(&self, path: &Path) -> Result<Vec<RawRecord>> {
        if self.use_mmap {
            self.read_records_mmap(path)
        } else {
            self.read_records_buffered(path)
        }
    }

    /// Read using buffered I/O
    fn read_records_buffered(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        self.collect_records(csv::Reader::from_reader(reader))
    }

    /// Read using memory-mapped I/O for large files
    fn read_records_mmap(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        self.collect_records(csv::Reader::from_reader(&mmap[..]))
    }

    fn collect_records<R: Read>(&self, mut reader: csv::Reader<R>) -> Result<Vec<RawRecord>> {
        self.check_required_columns(reader.headers()?)?;

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: RawRecord = result?;
            records.push(record);
        }
        debug!(records = records.len(), "CSV read complete");
        Ok(records)
    }

    /// Fail early with the missing column name rather than a row-level
    /// deserialization error.
    fn check_required_columns(&self, headers: &csv::StringRecord) -> Result<()> {
        let required = [
            COL_COUNTRY,
            COL_LOCATION,
            COL_LAST_UPDATED,
            COL_PM2_5,
            COL_PM10,
        ];
        for column in required {
            if !headers.iter().any(|h| h == column) {
                return Err(ProcessingError::MissingData(format!(
                    "required column '{}' not found in CSV header",
                    column
                )));
            }
        }
        Ok(())
    }
}

impl Default for WeatherCsvReader {
    fn default() -> Self {
        Self::new()
    }
}
