//! Report builder: load a pitch log, run the analytics core, emit a report.
//!
//! A pitch log is a JSON file holding either a bare array of pitch events or
//! an object with an `events` array. Malformed event fields degrade to
//! `None` inside the core; only unreadable files or invalid JSON fail here.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use pt_core::models::PitchEvent;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pitch log: {0}")]
    InvalidLog(#[from] serde_json::Error),
}

/// Accepted pitch log layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PitchLog {
    Wrapped { events: Vec<PitchEvent> },
    Bare(Vec<PitchEvent>),
}

/// Which report to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Analysis,
    Game,
    Fatigue,
    Advice,
}

/// Load a pitch log from disk.
pub fn load_events(path: &Path) -> Result<Vec<PitchEvent>, ReportError> {
    let raw = fs::read_to_string(path)?;
    let log: PitchLog = serde_json::from_str(&raw)?;
    Ok(match log {
        PitchLog::Wrapped { events } => events,
        PitchLog::Bare(events) => events,
    })
}

/// Keep only the events matching the optional pitcher/game scope.
pub fn scope_events(
    events: Vec<PitchEvent>,
    pitcher_id: Option<&str>,
    game_id: Option<&str>,
) -> Vec<PitchEvent> {
    events
        .into_iter()
        .filter(|e| pitcher_id.map(|p| e.pitcher_id == p).unwrap_or(true))
        .filter(|e| game_id.map(|g| e.game_id == g).unwrap_or(true))
        .collect()
}

/// Build one report as pretty-printed JSON.
pub fn build_report(kind: ReportKind, events: &[PitchEvent]) -> Result<String, ReportError> {
    let json = match kind {
        ReportKind::Analysis => serde_json::to_string_pretty(&pt_core::analyze(events))?,
        ReportKind::Game => serde_json::to_string_pretty(&pt_core::analyze_game(events))?,
        ReportKind::Fatigue => serde_json::to_string_pretty(&pt_core::assess_fatigue(events))?,
        ReportKind::Advice => serde_json::to_string_pretty(&pt_core::build_advice(events))?,
    };
    Ok(json)
}

/// Write a report to a file, or to stdout when no path is given.
pub fn write_report(out: Option<&Path>, report: &str) -> Result<(), ReportError> {
    match out {
        Some(path) => fs::write(path, report)?,
        None => println!("{}", report),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_log() -> String {
        let events: Vec<String> = (0..12)
            .map(|i| {
                format!(
                    r#"{{"pitcherId":"p1","gameId":"g1","inning":1,"isTop":true,"outs":0,
                        "count":"0-0","pitchType":"fastball","result":"strike",
                        "batterSide":"R","timestamp":"2025-06-01T18:{:02}:00Z"}}"#,
                    i
                )
            })
            .collect();
        format!("[{}]", events.join(","))
    }

    #[test]
    fn loads_bare_and_wrapped_logs() {
        let mut bare = tempfile::NamedTempFile::new().unwrap();
        bare.write_all(sample_log().as_bytes()).unwrap();
        assert_eq!(load_events(bare.path()).unwrap().len(), 12);

        let mut wrapped = tempfile::NamedTempFile::new().unwrap();
        write!(wrapped, r#"{{"events":{}}}"#, sample_log()).unwrap();
        assert_eq!(load_events(wrapped.path()).unwrap().len(), 12);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a pitch log").unwrap();
        assert!(matches!(
            load_events(file.path()),
            Err(ReportError::InvalidLog(_))
        ));
    }

    #[test]
    fn scope_filters_by_pitcher_and_game() {
        let mut events: Vec<PitchEvent> =
            serde_json::from_str(&sample_log()).unwrap();
        events[0].pitcher_id = "p2".into();
        events[1].game_id = "g2".into();

        assert_eq!(scope_events(events.clone(), Some("p1"), Some("g1")).len(), 10);
        assert_eq!(scope_events(events.clone(), Some("p2"), None).len(), 1);
        assert_eq!(scope_events(events, None, None).len(), 12);
    }

    #[test]
    fn analysis_report_round_trips() {
        let events: Vec<PitchEvent> = serde_json::from_str(&sample_log()).unwrap();
        let report = build_report(ReportKind::Analysis, &events).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["has_data"], true);
        assert_eq!(value["total_pitches"], 12);

        let fatigue = build_report(ReportKind::Fatigue, &events).unwrap();
        let value: serde_json::Value = serde_json::from_str(&fatigue).unwrap();
        assert_eq!(value["has_data"], true);

        let out = tempfile::NamedTempFile::new().unwrap();
        write_report(Some(out.path()), &report).unwrap();
        assert_eq!(fs::read_to_string(out.path()).unwrap(), report);
    }
}
