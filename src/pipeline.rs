//! Read observations, detect, write records

use anyhow::{Context, Result};
use robust_anomaly::{AnomalySummary, StationOrchestrator};
use robust_core::ExecutionEngine;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Run detection from a CSV reader to a CSV writer
pub fn detect_csv<R, W, E>(
    input: R,
    output: W,
    orchestrator: &StationOrchestrator<E>,
) -> Result<AnomalySummary>
where
    R: Read,
    W: Write,
    E: ExecutionEngine,
{
    let observations = robust_csv::read_observations(input).context("Failed to read observations")?;
    let records = orchestrator
        .run(&observations)
        .context("Anomaly detection failed")?;
    robust_csv::write_records(output, &records).context("Failed to write anomaly records")?;
    Ok(AnomalySummary::from_records(&records))
}

/// Run detection from the CSV file at `input` into the CSV file at `output`
///
/// The output file is only created once detection has succeeded.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn run_pipeline<E: ExecutionEngine>(
    input: &Path,
    output: &Path,
    orchestrator: &StationOrchestrator<E>,
) -> Result<AnomalySummary> {
    let observations = robust_csv::read_observations_from_path(input)
        .with_context(|| format!("Failed to read observations from {}", input.display()))?;
    let records = orchestrator
        .run(&observations)
        .context("Anomaly detection failed")?;
    robust_csv::write_records_to_path(output, &records)
        .with_context(|| format!("Failed to write anomaly records to {}", output.display()))?;

    let summary = AnomalySummary::from_records(&records);
    info!(
        rows = summary.rows,
        stations = summary.stations,
        anomalies = summary.anomalies,
        blocked = summary.blocked_long,
        "Wrote anomaly records"
    );
    Ok(summary)
}
