pub mod query;
pub mod summary;

pub use query::{parse_date_predicate, AirQualityAnalyzer, RecordFilter};
pub use summary::{latest_record, mean_aqi_by_date, AdvisoryReport, AqiSummary};
