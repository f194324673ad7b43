//! EPA AQI computation from particulate concentrations.
//!
//! Each pollutant maps through a static ordered table of breakpoint bands;
//! the sub-index is a linear interpolation within the first band whose upper
//! concentration bound contains the value. The overall AQI is the worse of
//! the two pollutant sub-indices.

/// A pollutant-concentration interval and its AQI sub-index interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointBand {
    pub conc_lo: f64,
    pub conc_hi: f64,
    pub index_lo: f64,
    pub index_hi: f64,
}

impl BreakpointBand {
    const fn new(conc_lo: f64, conc_hi: f64, index_lo: f64, index_hi: f64) -> Self {
        Self {
            conc_lo,
            conc_hi,
            index_lo,
            index_hi,
        }
    }

    /// Linear interpolation of the sub-index for a concentration in this band.
    pub fn sub_index(&self, conc: f64) -> f64 {
        (self.index_hi - self.index_lo) / (self.conc_hi - self.conc_lo) * (conc - self.conc_lo)
            + self.index_lo
    }
}

/// PM2.5 breakpoints (µg/m³), EPA convention.
pub const PM25_BREAKPOINTS: [BreakpointBand; 6] = [
    BreakpointBand::new(0.0, 12.0, 0.0, 50.0),
    BreakpointBand::new(12.1, 35.4, 51.0, 100.0),
    BreakpointBand::new(35.5, 55.4, 101.0, 150.0),
    BreakpointBand::new(55.5, 150.4, 151.0, 200.0),
    BreakpointBand::new(150.5, 250.4, 201.0, 300.0),
    BreakpointBand::new(250.5, 500.4, 301.0, 500.0),
];

/// PM10 breakpoints (µg/m³), EPA convention.
pub const PM10_BREAKPOINTS: [BreakpointBand; 6] = [
    BreakpointBand::new(0.0, 54.0, 0.0, 50.0),
    BreakpointBand::new(55.0, 154.0, 51.0, 100.0),
    BreakpointBand::new(155.0, 254.0, 101.0, 150.0),
    BreakpointBand::new(255.0, 354.0, 151.0, 200.0),
    BreakpointBand::new(355.0, 424.0, 201.0, 300.0),
    BreakpointBand::new(425.0, 604.0, 301.0, 500.0),
];

/// Sub-index for one pollutant via first-match scan of its breakpoint table.
///
/// Concentrations above the last band's upper bound still interpolate against
/// the last band (open-ended top band).
pub fn pollutant_sub_index(conc: f64, bands: &[BreakpointBand]) -> f64 {
    for band in bands {
        if conc <= band.conc_hi {
            return band.sub_index(conc);
        }
    }
    bands[bands.len() - 1].sub_index(conc)
}

/// Overall AQI: the worse of the PM2.5 and PM10 sub-indices.
pub fn compute_aqi(pm2_5: f64, pm10: f64) -> f64 {
    let aqi_pm25 = pollutant_sub_index(pm2_5, &PM25_BREAKPOINTS);
    let aqi_pm10 = pollutant_sub_index(pm10, &PM10_BREAKPOINTS);
    aqi_pm25.max(aqi_pm10)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_low_concentration_case() {
        // pm2_5=2.0 -> 8.33, pm10=2.3 -> 2.13; worse pollutant wins
        assert_close(compute_aqi(2.0, 2.3), 8.33, 0.01);
    }

    #[test]
    fn test_moderate_concentration_case() {
        // pm2_5=40.0 -> 112.08, pm10=100.0 -> 73.27
        assert_close(compute_aqi(40.0, 100.0), 112.08, 0.01);
    }

    #[test]
    fn test_pm25_breakpoint_continuity() {
        // At each boundary the lower band lands exactly on its index ceiling,
        // and the next band starts at its index floor.
        let boundaries = [
            (12.0, 50.0, 12.1, 51.0),
            (35.4, 100.0, 35.5, 101.0),
            (55.4, 150.0, 55.5, 151.0),
            (150.4, 200.0, 150.5, 201.0),
            (250.4, 300.0, 250.5, 301.0),
        ];
        for (hi, index_hi, next_lo, next_index_lo) in boundaries {
            assert_close(pollutant_sub_index(hi, &PM25_BREAKPOINTS), index_hi, 1e-9);
            assert_close(
                pollutant_sub_index(next_lo, &PM25_BREAKPOINTS),
                next_index_lo,
                1e-9,
            );
        }
    }

    #[test]
    fn test_pm10_breakpoint_continuity() {
        let boundaries = [
            (54.0, 50.0, 55.0, 51.0),
            (154.0, 100.0, 155.0, 101.0),
            (254.0, 150.0, 255.0, 151.0),
            (354.0, 200.0, 355.0, 201.0),
            (424.0, 300.0, 425.0, 301.0),
        ];
        for (hi, index_hi, next_lo, next_index_lo) in boundaries {
            assert_close(pollutant_sub_index(hi, &PM10_BREAKPOINTS), index_hi, 1e-9);
            assert_close(
                pollutant_sub_index(next_lo, &PM10_BREAKPOINTS),
                next_index_lo,
                1e-9,
            );
        }
    }

    #[test]
    fn test_open_top_band() {
        // Above the last breakpoint the final band still applies
        let aqi = pollutant_sub_index(600.0, &PM25_BREAKPOINTS);
        assert!(aqi > 500.0);
        let aqi = pollutant_sub_index(700.0, &PM10_BREAKPOINTS);
        assert!(aqi > 500.0);
    }

    #[test]
    fn test_aqi_non_negative_for_valid_input() {
        for pm25 in [0.0, 5.0, 12.0, 35.5, 55.4, 150.5, 250.4, 400.0, 600.0] {
            for pm10 in [0.0, 54.0, 100.0, 254.0, 355.0, 424.0, 604.0, 800.0] {
                assert!(compute_aqi(pm25, pm10) >= 0.0);
            }
        }
    }
}
