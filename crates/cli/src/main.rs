//! # stk-analytics
//!
//! Command-line interface for STK membership trend forecasting and anomaly detection.

mod config;
mod input;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anomaly_facade::{EarlyWarningScanner, MonthlyEventCounts, ZScoreDetector};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use trend_facade::{LinearTrendForecaster, TimePoint};

use crate::config::AnalyticsConfig;

#[derive(Parser)]
#[command(name = "stk-analytics")]
#[command(about = "Membership trend forecasting and anomaly detection", long_about = None)]
struct Cli {
    /// JSON file with trend and anomaly defaults
    #[arg(short, long, global = true, env = "STK_ANALYTICS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a linear trend and project it forward
    Forecast {
        /// Monthly series file (CSV or JSON) with year, month, value
        #[arg(short, long)]
        input: PathBuf,

        /// Months to project past the last observation
        #[arg(long)]
        horizon: Option<usize>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Flag unusual months in each membership event series
    Detect {
        /// Event count file (CSV or JSON) with year, month, new_members, resigned_members, expelled_members
        #[arg(short, long)]
        input: PathBuf,

        /// Z-score threshold
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check the most recent three months for deteriorating membership
    Warnings {
        /// Event count file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stk_analytics=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AnalyticsConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Forecast {
            input,
            horizon,
            output,
        } => {
            let config = config.with_overrides(horizon, None)?;
            let series: Vec<TimePoint> = input::load_records(&input)?;
            let summary =
                LinearTrendForecaster::new().summarize(&series, config.trend.horizon_months);
            tracing::info!(
                slope = summary.forecast.slope,
                r_squared = summary.forecast.r_squared,
                growth_rate = summary.growth_rate,
                "trend fitted"
            );
            write_json(&summary, output.as_deref())
        }
        Commands::Detect {
            input,
            threshold,
            output,
        } => {
            let config = config.with_overrides(None, threshold)?;
            let rows: Vec<MonthlyEventCounts> = input::load_records(&input)?;
            let result = ZScoreDetector::from_config(&config.anomaly).detect_multi_metric(&rows);
            tracing::info!(anomalies = result.all_anomalies.len(), "detection complete");
            write_json(&result, output.as_deref())
        }
        Commands::Warnings { input, output } => {
            let rows: Vec<MonthlyEventCounts> = input::load_records(&input)?;
            let warnings = EarlyWarningScanner::default().scan(&rows);
            if warnings.is_empty() {
                tracing::info!("no early warnings");
            }
            for warning in &warnings {
                tracing::warn!(kind = ?warning.kind, severity = ?warning.severity, "{}", warning.message);
            }
            write_json(&warnings, output.as_deref())
        }
    }
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "results written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
