pub mod aqi;
pub mod enricher;

pub use aqi::{compute_aqi, pollutant_sub_index, BreakpointBand, PM10_BREAKPOINTS, PM25_BREAKPOINTS};
pub use enricher::{parse_timestamp, Enricher};
