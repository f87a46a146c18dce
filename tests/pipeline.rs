//! File-to-file pipeline tests

use station_anomaly::prelude::*;
use station_anomaly::{detect_csv, run_pipeline};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("station-anomaly-{}-{name}", std::process::id()))
}

/// Two stations, 30 hours each: "A" is flat at 5 with a spike to 20 at hour
/// 24; "B" has zero bikes and docks for its last four hours
fn sample_csv() -> String {
    let mut text = String::from("ts_hour,stationcode,name,arrdt,lat,lon,bikes_mean,bikes_median,docks_mean\n");
    for h in 0..30 {
        let a = if h == 24 { 20 } else { 5 };
        let (b, docks) = if h >= 26 { (0, 0) } else { (3, 12) };
        writeln!(
            text,
            "2024-05-01T{:02}:00:00Z,A,Alpha,Paris,48.85,2.35,{a},{a},10",
            h % 24
        )
        .unwrap();
        writeln!(
            text,
            "2024-05-01T{:02}:00:00Z,B,Bravo,Paris,48.86,2.36,{b},{b},{docks}",
            h % 24
        )
        .unwrap();
    }
    text
}

fn lines_for<'a>(output: &'a str, station: &str) -> Vec<Vec<&'a str>> {
    output
        .lines()
        .skip(1)
        .map(|l| l.split(',').collect::<Vec<_>>())
        .filter(|cells| cells[1] == station)
        .collect()
}

#[test]
fn test_duplicate_hours_fail_by_default() {
    // Hours wrap past 23, so each station repeats timestamps
    let input = sample_csv();
    let orchestrator = StationOrchestrator::sequential(AnomalyParameters::default());
    let mut out = Vec::new();
    let err = detect_csv(input.as_bytes(), &mut out, &orchestrator).unwrap_err();
    let core = err.downcast_ref::<Error>().unwrap();
    assert!(matches!(core, Error::DuplicateObservation { .. }));
    assert!(out.is_empty());
}

fn distinct_hours_csv() -> String {
    sample_csv()
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                return line.to_string();
            }
            // Row pairs (A, B) per hour; rewrite the timestamp from the row index
            let h = (i - 1) / 2;
            let rest = line.split_once(',').map(|(_, rest)| rest).unwrap();
            format!("2024-05-{:02}T{:02}:00:00Z,{rest}", 1 + h / 24, h % 24)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_detects_spike_and_block() {
    let input = distinct_hours_csv();
    let orchestrator = StationOrchestrator::sequential(AnomalyParameters::default());
    let mut out = Vec::new();
    let summary = detect_csv(input.as_bytes(), &mut out, &orchestrator).unwrap();

    assert_eq!(summary.rows, 60);
    assert_eq!(summary.stations, 2);
    // A's spike, plus every hour of B's drop from a flat 3 to 0
    assert_eq!(summary.anomalies, 5);
    // B is blocked for hours 26..30: runs 1, 2, 3, 4
    assert_eq!(summary.blocked_long, 2);

    let text = String::from_utf8(out).unwrap();
    let a = lines_for(&text, "A");
    assert_eq!(a.len(), 30);
    assert_eq!(a[24][0], "2024-05-02 00:00:00+00:00");
    assert_eq!(a[24][12], "true");
    assert!(a.iter().enumerate().all(|(i, c)| i == 24 || c[12] == "false"));
    // Undefined statistics for the first seven hours
    assert!(a[..7].iter().all(|c| c[9].is_empty() && c[11].is_empty()));

    let b = lines_for(&text, "B");
    let runs: Vec<&str> = b.iter().map(|c| c[14]).collect();
    assert_eq!(&runs[25..], &["0", "1", "2", "3", "4"]);
    let flagged: Vec<&str> = b.iter().map(|c| c[12]).collect();
    assert!(flagged[..26].iter().all(|&f| f == "false"));
    assert!(flagged[26..].iter().all(|&f| f == "true"));
}

#[test]
fn test_run_pipeline_files() {
    let input = temp_path("input.csv");
    let output = temp_path("output.csv");
    fs::write(&input, distinct_hours_csv()).unwrap();

    let params = AnomalyParameters::default().with_output_order(OutputOrder::StationTime);
    let summary = run_pipeline(&input, &output, &StationOrchestrator::sequential(params)).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    fs::remove_file(&input).unwrap();
    fs::remove_file(&output).unwrap();

    assert_eq!(summary.rows, 60);
    let codes: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|l| l.split(',').nth(1).unwrap())
        .collect();
    assert!(codes[..30].iter().all(|&c| c == "A"));
    assert!(codes[30..].iter().all(|&c| c == "B"));
}

#[test]
fn test_failed_run_creates_no_output() {
    let input = temp_path("empty.csv");
    let output = temp_path("never.csv");
    fs::write(&input, "ts_hour,stationcode,bikes_median,docks_mean\n").unwrap();

    let err = run_pipeline(&input, &output, &StationOrchestrator::sequential(AnomalyParameters::default()))
        .unwrap_err();
    fs::remove_file(&input).unwrap();

    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::EmptyInput(_))));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file() {
    let err = run_pipeline(
        &temp_path("does-not-exist.csv"),
        &temp_path("unused.csv"),
        &StationOrchestrator::sequential(AnomalyParameters::default()),
    )
    .unwrap_err();
    assert!(err.to_string().contains("Failed to read observations"));
}
