use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{AirQualityCategory, EnrichedRecord};

/// Descriptive statistics over a set of enriched rows.
#[derive(Debug, Clone, Serialize)]
pub struct AqiSummary {
    pub total_records: usize,
    pub unique_countries: usize,
    pub unique_locations: usize,
    pub date_range: (NaiveDate, NaiveDate),
    pub min_aqi: f64,
    pub max_aqi: f64,
    pub mean_aqi: f64,
    pub category_counts: Vec<(AirQualityCategory, usize)>,
}

impl AqiSummary {
    /// `None` for an empty set; zero rows is a valid outcome, not an error.
    pub fn from_records(records: &[EnrichedRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut countries = HashSet::new();
        let mut locations = HashSet::new();
        let mut min_date = records[0].date;
        let mut max_date = records[0].date;
        let mut min_aqi = f64::INFINITY;
        let mut max_aqi = f64::NEG_INFINITY;
        let mut aqi_sum = 0.0f64;
        let mut counts: BTreeMap<AirQualityCategory, usize> = BTreeMap::new();

        for record in records {
            countries.insert(record.raw.country.as_str());
            locations.insert(record.raw.location_name.as_str());

            if record.date < min_date {
                min_date = record.date;
            }
            if record.date > max_date {
                max_date = record.date;
            }

            min_aqi = min_aqi.min(record.aqi);
            max_aqi = max_aqi.max(record.aqi);
            aqi_sum += record.aqi;

            *counts.entry(record.category).or_default() += 1;
        }

        Some(Self {
            total_records: records.len(),
            unique_countries: countries.len(),
            unique_locations: locations.len(),
            date_range: (min_date, max_date),
            min_aqi,
            max_aqi,
            mean_aqi: aqi_sum / records.len() as f64,
            category_counts: counts.into_iter().collect(),
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("AQI Summary\n");
        out.push_str("===========\n");
        out.push_str(&format!("Total records:    {}\n", self.total_records));
        out.push_str(&format!("Countries:        {}\n", self.unique_countries));
        out.push_str(&format!("Locations:        {}\n", self.unique_locations));
        out.push_str(&format!(
            "Date range:       {} to {}\n",
            self.date_range.0, self.date_range.1
        ));
        out.push_str(&format!(
            "AQI (min/mean/max): {:.2} / {:.2} / {:.2}\n",
            self.min_aqi, self.mean_aqi, self.max_aqi
        ));
        out.push_str("Categories:\n");
        for (category, count) in &self.category_counts {
            out.push_str(&format!("  {:<32} {}\n", category.label(), count));
        }
        out
    }
}

/// Mean AQI per calendar date, ascending by date.
pub fn mean_aqi_by_date(records: &[EnrichedRecord]) -> Vec<(NaiveDate, f64)> {
    let mut grouped: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = grouped.entry(record.date).or_insert((0.0, 0));
        entry.0 += record.aqi;
        entry.1 += 1;
    }
    grouped
        .into_iter()
        .map(|(date, (sum, count))| (date, sum / count as f64))
        .collect()
}

/// The row with the maximum timestamp in a subset.
pub fn latest_record(records: &[EnrichedRecord]) -> Option<&EnrichedRecord> {
    records.iter().max_by_key(|r| r.timestamp)
}

/// Advisory for the most recent reading in a subset, keyed solely on its
/// severity category.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    pub aqi: f64,
    pub category: AirQualityCategory,
    pub advisory: &'static str,
}

impl AdvisoryReport {
    pub fn from_records(records: &[EnrichedRecord]) -> Option<Self> {
        let latest = latest_record(records)?;
        Some(Self {
            aqi: latest.aqi,
            category: latest.category,
            advisory: latest.category.advisory(),
        })
    }

    pub fn render(&self) -> String {
        format!(
            "Latest AQI: {:.2}\nAir quality category: {}\n\nAdvisory:\n- {}\n",
            self.aqi,
            self.category.label(),
            self.advisory
        )
    }
}
