//! Anomaly record writer
//!
//! The column set and order are fixed so that map and dashboard consumers
//! can rely on them. Undefined statistics and missing metrics are written as
//! empty cells.

use crate::error::Result;
use crate::timestamp::format_timestamp;
use csv::WriterBuilder;
use robust_anomaly::AnomalyRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Output header, in order
pub const OUTPUT_COLUMNS: [&str; 16] = [
    "ts_hour",
    "stationcode",
    "name",
    "arrdt",
    "lat",
    "lon",
    "bikes_mean",
    "bikes_median",
    "docks_mean",
    "roll_med",
    "roll_iqr",
    "anomaly_score",
    "is_anomaly",
    "is_blocked_now",
    "blocked_run_len",
    "is_blocked_3h",
];

// Field order must match OUTPUT_COLUMNS
#[derive(Debug, Serialize)]
struct RecordRow<'a> {
    ts_hour: String,
    stationcode: &'a str,
    name: &'a str,
    arrdt: &'a str,
    lat: Option<f64>,
    lon: Option<f64>,
    bikes_mean: Option<f64>,
    bikes_median: Option<f64>,
    docks_mean: Option<f64>,
    roll_med: Option<f64>,
    roll_iqr: Option<f64>,
    anomaly_score: Option<f64>,
    is_anomaly: bool,
    is_blocked_now: bool,
    blocked_run_len: usize,
    is_blocked_3h: bool,
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl<'a> From<&'a AnomalyRecord> for RecordRow<'a> {
    fn from(record: &'a AnomalyRecord) -> Self {
        let obs = &record.observation;
        Self {
            ts_hour: format_timestamp(&obs.timestamp),
            stationcode: &obs.station_code,
            name: &obs.name,
            arrdt: &obs.district,
            lat: finite(obs.lat),
            lon: finite(obs.lon),
            bikes_mean: finite(obs.bikes_mean),
            bikes_median: finite(obs.bikes_median),
            docks_mean: finite(obs.docks_mean),
            roll_med: record.rolling_median,
            roll_iqr: record.rolling_iqr,
            anomaly_score: record.anomaly_score,
            is_anomaly: record.is_anomaly,
            is_blocked_now: record.is_blocked_now,
            blocked_run_len: record.blocked_run_len,
            is_blocked_3h: record.is_blocked_3h,
        }
    }
}

/// Write `records` with a header row to `output`
pub fn write_records<W: Write>(output: W, records: &[AnomalyRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.serialize(RecordRow::from(record))?;
    }
    writer.flush()?;
    debug!(records = records.len(), "Wrote anomaly records");
    Ok(())
}

/// Create or truncate the file at `path` and write `records` to it
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_records_to_path(path: impl AsRef<Path>, records: &[AnomalyRecord]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_records(BufWriter::new(file), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use robust_anomaly::StationObservation;

    fn record() -> AnomalyRecord {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap();
        AnomalyRecord {
            observation: StationObservation::new("16107", ts, 4.0, 31.0)
                .with_location("Benjamin Godard", "Paris", 48.865983, 2.275725)
                .with_bikes_mean(3.5),
            rolling_median: Some(4.0),
            rolling_iqr: Some(0.5),
            anomaly_score: Some(0.0),
            is_anomaly: false,
            is_blocked_now: false,
            blocked_run_len: 0,
            is_blocked_3h: false,
        }
    }

    fn written(records: &[AnomalyRecord]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_is_stable() {
        let text = written(&[]);
        assert_eq!(text.trim_end(), OUTPUT_COLUMNS.join(","));
    }

    #[test]
    fn test_row_layout() {
        let text = written(&[record()]);
        let row = text.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2024-05-01 13:00:00+00:00,16107,Benjamin Godard,Paris,48.865983,2.275725,\
             3.5,4.0,31.0,4.0,0.5,0.0,false,false,0,false"
        );
    }

    #[test]
    fn test_undefined_values_are_empty_cells() {
        let mut rec = record();
        rec.rolling_median = None;
        rec.rolling_iqr = None;
        rec.anomaly_score = None;
        rec.observation.bikes_mean = f64::NAN;
        rec.observation.lat = f64::NAN;
        rec.is_blocked_now = true;
        rec.blocked_run_len = 4;
        rec.is_blocked_3h = true;

        let text = written(&[rec]);
        let cells: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(cells.len(), OUTPUT_COLUMNS.len());
        assert_eq!(cells[4], "");
        assert_eq!(cells[6], "");
        assert_eq!(&cells[9..12], &["", "", ""]);
        assert_eq!(&cells[12..], &["false", "true", "4", "true"]);
    }
}
