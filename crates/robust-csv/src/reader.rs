//! Hourly observation reader
//!
//! Columns are matched by header name; their order is free and extra
//! columns are ignored. `ts_hour`, `stationcode`, `bikes_median` and
//! `docks_mean` are required. Empty metric cells read as missing (NaN).

use crate::error::{Error, Result};
use crate::timestamp::parse_timestamp;
use csv::{ReaderBuilder, StringRecord, Trim};
use robust_anomaly::StationObservation;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, instrument};

/// Columns without which an observation cannot be built
pub const REQUIRED_COLUMNS: [&str; 4] = ["ts_hour", "stationcode", "bikes_median", "docks_mean"];

const BOM: char = '\u{feff}';

#[derive(Debug, Deserialize)]
struct ObservationRow {
    ts_hour: String,
    stationcode: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    arrdt: String,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    bikes_mean: Option<f64>,
    bikes_median: Option<f64>,
    docks_mean: Option<f64>,
}

impl ObservationRow {
    fn into_observation(self, line: u64) -> Result<StationObservation> {
        let timestamp = parse_timestamp(&self.ts_hour).ok_or(Error::InvalidTimestamp {
            line,
            value: self.ts_hour,
        })?;
        let missing = f64::NAN;
        Ok(StationObservation {
            timestamp,
            station_code: self.stationcode,
            name: self.name,
            district: self.arrdt,
            lat: self.lat.unwrap_or(missing),
            lon: self.lon.unwrap_or(missing),
            bikes_mean: self.bikes_mean.unwrap_or(missing),
            bikes_median: self.bikes_median.unwrap_or(missing),
            docks_mean: self.docks_mean.unwrap_or(missing),
        })
    }
}

/// Header names with a leading byte-order mark and padding removed
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| h.trim_start_matches(BOM).trim())
        .collect()
}

/// Read every observation from `input`
///
/// Fails on the first malformed row; nothing is returned for a partially
/// valid file.
pub fn read_observations<R: Read>(input: R) -> Result<Vec<StationObservation>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let headers = normalize_headers(reader.headers()?);
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingField(column));
        }
    }

    let mut observations = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let row: ObservationRow = record.deserialize(Some(&headers))?;
        observations.push(row.into_observation(line)?);
    }

    debug!(observations = observations.len(), "Read observations");
    Ok(observations)
}

/// Read every observation from the file at `path`
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_observations_from_path(path: impl AsRef<Path>) -> Result<Vec<StationObservation>> {
    let file = File::open(path.as_ref())?;
    read_observations(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const SAMPLE: &str = "\
ts_hour,stationcode,name,arrdt,lat,lon,bikes_mean,bikes_median,docks_mean
2024-05-01T13:00:00Z,16107,Benjamin Godard - Victor Hugo,Paris,48.865983,2.275725,3.5,4,31
2024-05-01 14:00:00+00:00,16107,Benjamin Godard - Victor Hugo,Paris,48.865983,2.275725,,,
";

    #[test]
    fn test_reads_rows() {
        let obs = read_observations(SAMPLE.as_bytes()).unwrap();
        assert_eq!(obs.len(), 2);

        let first = &obs[0];
        assert_eq!(first.timestamp, Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap());
        assert_eq!(first.station_code, "16107");
        assert_eq!(first.name, "Benjamin Godard - Victor Hugo");
        assert_eq!(first.district, "Paris");
        assert_eq!(first.bikes_mean, 3.5);
        assert_eq!(first.bikes_median, 4.0);
        assert_eq!(first.docks_mean, 31.0);

        let second = &obs[1];
        assert_eq!(second.timestamp, Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap());
        assert!(second.bikes_mean.is_nan());
        assert!(second.bikes_median.is_nan());
        assert!(second.docks_mean.is_nan());
    }

    #[test]
    fn test_bom_and_column_order() {
        let text = "\u{feff}stationcode,docks_mean,extra,bikes_median,ts_hour\n\
                    00901,0,ignored,0,2024-05-01 13:00:00\n";
        let obs = read_observations(text.as_bytes()).unwrap();
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].station_code, "00901");
        assert!(obs[0].name.is_empty());
        assert!(obs[0].lat.is_nan());
        assert_eq!(obs[0].bikes_median, 0.0);
    }

    #[test]
    fn test_missing_column() {
        let text = "ts_hour,stationcode,bikes_median\n2024-05-01 13:00:00,1,2\n";
        let err = read_observations(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingField("docks_mean")));
    }

    #[test]
    fn test_invalid_timestamp_reports_line() {
        let text = "ts_hour,stationcode,bikes_median,docks_mean\n\
                    2024-05-01 13:00:00,1,2,3\n\
                    yesterday,1,2,3\n";
        match read_observations(text.as_bytes()).unwrap_err() {
            Error::InvalidTimestamp { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_metric_is_an_error() {
        let text = "ts_hour,stationcode,bikes_median,docks_mean\n2024-05-01 13:00:00,1,many,3\n";
        assert!(matches!(
            read_observations(text.as_bytes()),
            Err(Error::Csv(_))
        ));
    }

    #[test]
    fn test_header_only() {
        let text = "ts_hour,stationcode,bikes_median,docks_mean\n";
        assert!(read_observations(text.as_bytes()).unwrap().is_empty());
    }
}
