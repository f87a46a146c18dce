//! Detection parameters from a TOML file and command-line overrides
//!
//! Precedence, lowest first: built-in defaults, the TOML file, overrides.
//!
//! ```toml
//! window_size = 48
//! anomaly_threshold = 4.0
//! blocked_run_threshold = 6
//! duplicate_policy = "keep_first"   # or "reject"
//! output_order = "station_time"     # or "input"
//! ```

use anyhow::{Context, Result};
use robust_anomaly::{AnomalyParameters, DuplicatePolicy, OutputOrder};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a parameter file; absent keys keep their defaults
pub fn load_parameters(path: &Path) -> Result<AnomalyParameters> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let params: AnomalyParameters = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    debug!(?params, path = %path.display(), "Loaded parameters");
    Ok(params)
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterOverrides {
    pub window_size: Option<usize>,
    pub min_periods: Option<usize>,
    pub anomaly_threshold: Option<f64>,
    pub blocked_run_threshold: Option<usize>,
    pub duplicate_policy: Option<DuplicatePolicy>,
    pub output_order: Option<OutputOrder>,
}

impl ParameterOverrides {
    pub fn apply(&self, mut params: AnomalyParameters) -> AnomalyParameters {
        if let Some(window_size) = self.window_size {
            params.window_size = window_size;
        }
        if let Some(min_periods) = self.min_periods {
            params.min_periods = Some(min_periods);
        }
        if let Some(threshold) = self.anomaly_threshold {
            params.anomaly_threshold = threshold;
        }
        if let Some(threshold) = self.blocked_run_threshold {
            params.blocked_run_threshold = threshold;
        }
        if let Some(policy) = self.duplicate_policy {
            params.duplicate_policy = policy;
        }
        if let Some(order) = self.output_order {
            params.output_order = order;
        }
        params
    }
}
