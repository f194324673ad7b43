use std::fmt;

use serde::{Deserialize, Serialize};

/// EPA severity category for an AQI value.
///
/// The six bands are mutually exclusive and exhaustive over non-negative AQI.
/// `Unknown` is the fallback for values outside that range (negative, NaN);
/// it is unreachable for valid pollutant input but kept as an invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AirQualityCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Unknown,
}

impl AirQualityCategory {
    /// Categorize an AQI value against the fixed severity thresholds.
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi.is_nan() || aqi < 0.0 {
            return AirQualityCategory::Unknown;
        }
        if aqi <= 50.0 {
            AirQualityCategory::Good
        } else if aqi <= 100.0 {
            AirQualityCategory::Moderate
        } else if aqi <= 150.0 {
            AirQualityCategory::UnhealthyForSensitiveGroups
        } else if aqi <= 200.0 {
            AirQualityCategory::Unhealthy
        } else if aqi <= 300.0 {
            AirQualityCategory::VeryUnhealthy
        } else {
            AirQualityCategory::Hazardous
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AirQualityCategory::Good => "Good",
            AirQualityCategory::Moderate => "Moderate",
            AirQualityCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AirQualityCategory::Unhealthy => "Unhealthy",
            AirQualityCategory::VeryUnhealthy => "Very Unhealthy",
            AirQualityCategory::Hazardous => "Hazardous",
            AirQualityCategory::Unknown => "Unknown",
        }
    }

    /// Fixed health advisory passed verbatim to downstream consumers.
    pub fn advisory(&self) -> &'static str {
        match self {
            AirQualityCategory::Good => {
                "Air quality is good. Enjoy your time outdoors!"
            }
            AirQualityCategory::Moderate => {
                "Air quality is acceptable. Sensitive groups should limit prolonged time outdoors."
            }
            AirQualityCategory::UnhealthyForSensitiveGroups => {
                "Sensitive groups (children, the elderly, people with respiratory conditions) should avoid outdoor exertion."
            }
            AirQualityCategory::Unhealthy => {
                "Avoid prolonged time outdoors. Wear a mask if necessary."
            }
            AirQualityCategory::VeryUnhealthy => {
                "Stay indoors and avoid outside air. Use air purifiers."
            }
            AirQualityCategory::Hazardous => {
                "Avoid any contact with outside air. Use respirators and air purifiers."
            }
            AirQualityCategory::Unknown => {
                "Air quality could not be determined for the latest reading."
            }
        }
    }

    /// The six defined severity labels, in increasing order of severity.
    pub fn all() -> [AirQualityCategory; 6] {
        [
            AirQualityCategory::Good,
            AirQualityCategory::Moderate,
            AirQualityCategory::UnhealthyForSensitiveGroups,
            AirQualityCategory::Unhealthy,
            AirQualityCategory::VeryUnhealthy,
            AirQualityCategory::Hazardous,
        ]
    }
}

impl fmt::Display for AirQualityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
