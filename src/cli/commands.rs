use std::path::Path;

use crate::analyzers::{mean_aqi_by_date, AdvisoryReport, AirQualityAnalyzer, AqiSummary, RecordFilter};
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::EnrichedTable;
use crate::processors::Enricher;
use crate::readers::WeatherCsvReader;
use crate::utils::filename::generate_default_export_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvExporter;

pub async fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match cli.command {
        Commands::Process {
            input_file,
            output_file,
            country,
            location,
            start_date,
            end_date,
            mmap,
        } => {
            let output_file = output_file.unwrap_or_else(generate_default_export_filename);
            println!("Processing air quality data...");
            println!("Input file: {}", input_file.display());
            println!("Output file: {}", output_file.display());

            let progress = ProgressReporter::new_spinner("Loading and enriching data...", false);
            let table = load_table(&input_file, mmap, &progress)?;
            progress.finish_with_message(&format!("Enriched {} records", table.len()));

            let mut filter = RecordFilter::new();
            if let Some(country) = country {
                filter = filter.with_country(country);
            }
            if let Some(location) = location {
                filter = filter.with_location(location);
            }
            if let Some(start_date) = start_date {
                filter = filter.with_start_date(&start_date);
                if filter.start_date().is_none() {
                    println!("Warning: unparsable start date ignored");
                }
            }
            if let Some(end_date) = end_date {
                filter = filter.with_end_date(&end_date);
                if filter.end_date().is_none() {
                    println!("Warning: unparsable end date ignored");
                }
            }

            let analyzer = AirQualityAnalyzer::from_table(table);
            let subset = analyzer.filtered(&filter);
            println!("{} records matched the filter", subset.len());

            // Create output directory if it doesn't exist
            if let Some(parent) = output_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            CsvExporter::new().write_records(&subset, &output_file)?;
            println!("Processing complete!");
        }

        Commands::Validate { input_file, mmap } => {
            println!("Validating air quality data...");
            println!("Input file: {}", input_file.display());

            let progress = ProgressReporter::new_spinner("Validating data...", false);
            let table = load_table(&input_file, mmap, &progress)?;
            progress.finish_with_message("Validation complete");

            println!(
                "✅ All {} records parsed, enriched and categorized",
                table.len()
            );
        }

        Commands::Info {
            input_file,
            sample,
            json,
        } => {
            println!("Analyzing CSV export: {}", input_file.display());

            let progress = ProgressReporter::new_spinner("Loading and enriching data...", false);
            let table = load_table(&input_file, false, &progress)?;
            progress.finish_and_clear();

            match AqiSummary::from_records(table.records()) {
                Some(summary) if json => {
                    println!("{}", serde_json::to_string_pretty(&summary)?)
                }
                Some(summary) => {
                    println!("\n{}", summary.render());

                    println!("Mean AQI by date:");
                    for (date, mean) in mean_aqi_by_date(table.records()).iter().take(sample) {
                        println!("  {} {:>8.2}", date, mean);
                    }
                    println!();
                }
                None => println!("No records found"),
            }

            if sample > 0 && !table.is_empty() {
                println!("Sample records:");
                for record in table.records().iter().take(sample) {
                    println!(
                        "  {} | {}, {} | AQI {:>7.2} | {}",
                        record.timestamp,
                        record.raw.location_name,
                        record.raw.country,
                        record.aqi,
                        record.category
                    );
                }
            }
        }

        Commands::Advise {
            input_file,
            country,
            location,
        } => {
            let progress = ProgressReporter::new_spinner("Loading and enriching data...", false);
            let table = load_table(&input_file, false, &progress)?;
            progress.finish_and_clear();

            let mut filter = RecordFilter::new();
            if let Some(country) = country {
                filter = filter.with_country(country);
            }
            if let Some(location) = location {
                filter = filter.with_location(location);
            }

            let analyzer = AirQualityAnalyzer::from_table(table);
            let subset = analyzer.filtered(&filter);

            match AdvisoryReport::from_records(&subset) {
                Some(report) => println!("{}", report.render()),
                None => println!("No matching records to advise on"),
            }
        }
    }

    Ok(())
}

fn load_table(input_file: &Path, mmap: bool, progress: &ProgressReporter) -> Result<EnrichedTable> {
    let reader = WeatherCsvReader::with_mmap(mmap);
    let raw_records = reader.read_records(input_file)?;
    progress.set_message("Deriving AQI and calendar features...");
    Enricher::new().enrich(raw_records)
}
