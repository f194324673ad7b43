use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One sensor reading as it appears in the source CSV.
///
/// Column names are a fixed external contract; every column that is not one
/// of the required five is carried through unchanged in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RawRecord {
    pub country: String,

    pub location_name: String,

    pub last_updated: String,

    #[serde(
        rename = "air_quality_PM2.5",
        deserialize_with = "deserialize_concentration"
    )]
    #[validate(range(min = 0.0))]
    pub pm2_5: f64,

    #[serde(
        rename = "air_quality_PM10",
        deserialize_with = "deserialize_concentration"
    )]
    #[validate(range(min = 0.0))]
    pub pm10: f64,

    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new(
        country: String,
        location_name: String,
        last_updated: String,
        pm2_5: f64,
        pm10: f64,
    ) -> Self {
        Self {
            country,
            location_name,
            last_updated,
            pm2_5,
            pm10,
            extra: BTreeMap::new(),
        }
    }
}

/// With `#[serde(flatten)]` in play the CSV deserializer buffers every field
/// as a string, so concentrations must accept both numeric and string input.
fn deserialize_concentration<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct ConcentrationVisitor;

    impl<'de> Visitor<'de> for ConcentrationVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative concentration in µg/m³")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<f64, E> {
            value.trim().parse::<f64>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(ConcentrationVisitor)
}
