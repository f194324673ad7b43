use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aqi-processor")]
#[command(about = "Air quality data processor deriving AQI and severity categories")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich a weather CSV export and write the (optionally filtered) result
    Process {
        #[arg(short, long, help = "Input CSV file")]
        input_file: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV file path [default: aqi-export-{YYMMDD}.csv]"
        )]
        output_file: Option<PathBuf>,

        #[arg(short, long, help = "Keep only rows from this country")]
        country: Option<String>,

        #[arg(short, long, help = "Keep only rows from this location")]
        location: Option<String>,

        #[arg(long, help = "Inclusive start date (YYYY-MM-DD); ignored if unparsable")]
        start_date: Option<String>,

        #[arg(long, help = "Inclusive end date (YYYY-MM-DD); ignored if unparsable")]
        end_date: Option<String>,

        #[arg(long, default_value = "false", help = "Memory-map the input file")]
        mmap: bool,
    },

    /// Load and enrich without writing output, reporting any data problems
    Validate {
        #[arg(short, long, help = "Input CSV file")]
        input_file: PathBuf,

        #[arg(long, default_value = "false", help = "Memory-map the input file")]
        mmap: bool,
    },

    /// Display summary statistics and sample rows for a CSV export
    Info {
        #[arg(short, long, help = "Input CSV file")]
        input_file: PathBuf,

        #[arg(short, long, default_value = "10", help = "Sample rows to display")]
        sample: usize,

        #[arg(long, default_value = "false", help = "Emit the summary as JSON")]
        json: bool,
    },

    /// Print the health advisory for the most recent matching reading
    Advise {
        #[arg(short, long, help = "Input CSV file")]
        input_file: PathBuf,

        #[arg(short, long, help = "Restrict to this country")]
        country: Option<String>,

        #[arg(short, long, help = "Restrict to this location")]
        location: Option<String>,
    },
}
