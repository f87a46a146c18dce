//! `station-anomaly`: flag anomalous and blocked bike-share stations
//!
//! Reads hourly station snapshots from CSV, scores every observation against
//! its station's rolling median/IQR, tracks consecutive hours with neither
//! bikes nor docks, and writes one record per observation.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use robust_anomaly::{AnomalyParameters, DuplicatePolicy, OutputOrder, StationOrchestrator};
use station_anomaly::{load_parameters, run_pipeline, ParameterOverrides};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable lines
    Fmt,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    /// Record i describes input row i
    Input,
    /// Grouped by station code, each station in time order
    StationTime,
}

impl From<Order> for OutputOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Input => OutputOrder::Input,
            Order::StationTime => OutputOrder::StationTime,
        }
    }
}

/// Robust per-station anomaly detection for bike-share occupancy
#[derive(Debug, Parser)]
#[command(name = "station-anomaly", version, about)]
struct Args {
    /// Hourly observations CSV
    #[arg(default_value = "historique_hourly.csv")]
    input: PathBuf,

    /// Anomaly records CSV
    #[arg(short, long, default_value = "anomalies_velib.csv")]
    output: PathBuf,

    /// TOML parameter file; flags below take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Observations retained per station
    #[arg(long)]
    window_size: Option<usize>,

    /// Non-missing values required before statistics are defined
    #[arg(long)]
    min_periods: Option<usize>,

    /// Robust z-score above which an observation is anomalous
    #[arg(long)]
    threshold: Option<f64>,

    /// Consecutive blocked hours that flag a sustained block
    #[arg(long)]
    blocked_run_threshold: Option<usize>,

    /// Keep the first of duplicated (station, hour) rows instead of failing
    #[arg(long)]
    keep_first_duplicate: bool,

    /// Output record order
    #[arg(long, value_enum)]
    order: Option<Order>,

    /// Process stations on a thread pool
    #[arg(long)]
    parallel: bool,

    /// Thread pool size, defaults to one per core
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    #[arg(long, value_enum, default_value = "fmt")]
    log_format: LogFormat,
}

impl Args {
    fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            window_size: self.window_size,
            min_periods: self.min_periods,
            anomaly_threshold: self.threshold,
            blocked_run_threshold: self.blocked_run_threshold,
            duplicate_policy: self.keep_first_duplicate.then_some(DuplicatePolicy::KeepFirst),
            output_order: self.order.map(OutputOrder::from),
        }
    }

    fn parameters(&self) -> Result<AnomalyParameters> {
        let base = match &self.config {
            Some(path) => load_parameters(path)?,
            None => AnomalyParameters::default(),
        };
        let params = self.overrides().apply(base);
        params.validate()?;
        Ok(params)
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Fmt => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_format);

    let params = args.parameters()?;
    info!(
        window_size = params.window_size,
        min_periods = params.resolved_min_periods(),
        threshold = params.anomaly_threshold,
        blocked_run_threshold = params.blocked_run_threshold,
        "Starting anomaly detection"
    );

    let summary = if args.parallel {
        run_parallel(&args, params)?
    } else {
        run_pipeline(&args.input, &args.output, &StationOrchestrator::sequential(params))?
    };

    println!("Output: {}", args.output.display());
    println!("{summary}");
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_parallel(args: &Args, params: AnomalyParameters) -> Result<robust_anomaly::AnomalySummary> {
    let engine = match args.threads {
        Some(n) => robust_core::ParallelEngine::with_num_threads(n)?,
        None => robust_core::parallel(),
    };
    run_pipeline(&args.input, &args.output, &StationOrchestrator::new(params, engine))
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(args: &Args, params: AnomalyParameters) -> Result<robust_anomaly::AnomalySummary> {
    tracing::warn!("Built without the `parallel` feature, processing stations sequentially");
    run_pipeline(&args.input, &args.output, &StationOrchestrator::sequential(params))
}
