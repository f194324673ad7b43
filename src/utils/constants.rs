/// Required source columns (fixed external contract)
pub const COL_COUNTRY: &str = "country";
pub const COL_LOCATION: &str = "location_name";
pub const COL_LAST_UPDATED: &str = "last_updated";
pub const COL_PM2_5: &str = "air_quality_PM2.5";
pub const COL_PM10: &str = "air_quality_PM10";

/// Derived columns, in export order
pub const DERIVED_COLUMNS: [&str; 9] = [
    "timestamp",
    "date",
    "time_of_day",
    "hour",
    "month",
    "year",
    "season",
    "aqi",
    "air_quality_category",
];

/// Accepted `last_updated` formats, tried in order
pub const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// AQI scale bounds
pub const AQI_MIN: f64 = 0.0;
pub const AQI_MAX: f64 = 500.0;

/// Read buffering
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
