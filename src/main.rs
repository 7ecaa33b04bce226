use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use rust_decimal_macros::dec;
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing::info;

use fittrack::{
    dispatch, logging, InfoMessage, LogFormat, LogLevel, SensorPackage,
};

/// fittrack - Fitness Metrics Calculator
///
/// Computes distance, mean speed and calories burned from raw sensor
/// readings for running, sports walking and swimming sessions.
#[derive(Parser, Debug)]
#[command(name = "fittrack")]
#[command(version = "0.1.0")]
#[command(about = "Fitness metrics calculator", long_about = None)]
struct Cli {
    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format (pretty, json)
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process sensor packages from a JSON file
    Process {
        /// Input file: a JSON array of {workout_type, values} records
        #[arg(short = 'i', long)]
        file: PathBuf,

        /// Output format (lines, table, json)
        #[arg(short = 'f', long, default_value = "lines")]
        format: OutputFormat,
    },

    /// Run the built-in demo package list
    Demo,
}

/// Summary output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// One summary line per workout
    Lines,
    /// Aligned table
    Table,
    /// JSON array of summaries
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" => Ok(OutputFormat::Lines),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

/// Table row for `--format table` output
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Type")]
    training_type: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories (kcal)")]
    calories: String,
}

impl From<&InfoMessage> for SummaryRow {
    fn from(msg: &InfoMessage) -> Self {
        Self {
            training_type: msg.training_type.to_string(),
            duration: format!("{:.3}", msg.duration_h.round_dp(3)),
            distance: format!("{:.3}", msg.distance_km.round_dp(3)),
            speed: format!("{:.3}", msg.mean_speed_kmh.round_dp(3)),
            calories: format!("{:.3}", msg.calories_kcal.round_dp(3)),
        }
    }
}

fn summarize(packages: &[SensorPackage]) -> Result<Vec<InfoMessage>> {
    packages
        .iter()
        .map(|package| {
            let workout = dispatch::read_sensor_package(package)
                .with_context(|| format!("package with tag {:?}", package.workout_type))?;
            Ok(workout.summary())
        })
        .collect()
}

fn render(summaries: &[InfoMessage], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Lines => {
            for summary in summaries {
                println!("{}", summary.get_message());
            }
        }
        OutputFormat::Table => {
            let rows: Vec<SummaryRow> = summaries.iter().map(SummaryRow::from).collect();
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summaries)?);
        }
    }
    Ok(())
}

fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![dec!(720), dec!(1), dec!(80), dec!(25), dec!(40)]),
        SensorPackage::new("RUN", vec![dec!(15000), dec!(1), dec!(75)]),
        SensorPackage::new("WLK", vec![dec!(9000), dec!(1), dec!(75), dec!(180)]),
        SensorPackage::new(
            "WLK",
            vec![dec!(3000.33), dec!(2.512), dec!(75.8), dec!(180.1)],
        ),
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(LogLevel::from_verbosity(cli.verbose), cli.log_format)?;

    match cli.command {
        Commands::Process { file, format } => {
            let data = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let packages = SensorPackage::from_json(&data)
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            info!(count = packages.len(), "processing sensor packages");

            let summaries = summarize(&packages)?;
            render(&summaries, format)?;
            eprintln!(
                "{}",
                format!("✓ Processed {} workouts", summaries.len()).green()
            );
        }

        Commands::Demo => {
            let summaries = summarize(&demo_packages())?;
            render(&summaries, OutputFormat::Lines)?;
        }
    }

    Ok(())
}
