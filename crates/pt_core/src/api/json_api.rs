//! String-in/string-out JSON API.
//!
//! Thin wrappers for host applications that want to call the analytics
//! without linking against the Rust types directly. Requests carry a schema
//! version and the full event list; responses are the serialized analysis
//! structures. This layer is the only place the core can return an error,
//! and only for undecodable requests.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::analysis::advisory::build_advice;
use crate::analysis::fatigue::assess_fatigue;
use crate::analysis::tendencies::{analyze, analyze_game};
use crate::error::{CoreError, Result};
use crate::models::PitchEvent;

pub const SCHEMA_VERSION: u8 = 1;

/// Common request envelope for every entry point.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub schema_version: u8,
    pub events: Vec<PitchEvent>,
    /// Optional scope filters applied before analysis.
    #[serde(default)]
    pub pitcher_id: Option<String>,
    #[serde(default)]
    pub game_id: Option<String>,
}

impl AnalysisRequest {
    fn decode(request_json: &str) -> Result<Self> {
        let request: AnalysisRequest = serde_json::from_str(request_json)
            .map_err(|e| CoreError::DeserializationError(e.to_string()))?;
        if request.schema_version != SCHEMA_VERSION {
            warn!(
                "rejecting request with schema version {}",
                request.schema_version
            );
            return Err(CoreError::InvalidParameter(format!(
                "unsupported schema version {}, expected {}",
                request.schema_version, SCHEMA_VERSION
            )));
        }
        Ok(request)
    }

    /// Events after applying the optional pitcher/game scope.
    fn scoped_events(self) -> Vec<PitchEvent> {
        let AnalysisRequest {
            events,
            pitcher_id,
            game_id,
            ..
        } = self;
        events
            .into_iter()
            .filter(|e| pitcher_id.as_deref().map(|p| e.pitcher_id == p).unwrap_or(true))
            .filter(|e| game_id.as_deref().map(|g| e.game_id == g).unwrap_or(true))
            .collect()
    }
}

/// Run the tendency analysis for one pitcher scope.
pub fn analyze_pitcher_json(request_json: &str) -> Result<String> {
    let events = AnalysisRequest::decode(request_json)?.scoped_events();
    debug!("analyzing {} scoped pitch events", events.len());
    Ok(serde_json::to_string(&analyze(&events))?)
}

/// Run the per-pitcher game breakdown.
pub fn analyze_game_json(request_json: &str) -> Result<String> {
    let events = AnalysisRequest::decode(request_json)?.scoped_events();
    debug!("analyzing game with {} pitch events", events.len());
    Ok(serde_json::to_string(&analyze_game(&events))?)
}

/// Run the fatigue assessment.
pub fn assess_fatigue_json(request_json: &str) -> Result<String> {
    let events = AnalysisRequest::decode(request_json)?.scoped_events();
    debug!("assessing fatigue over {} pitch events", events.len());
    Ok(serde_json::to_string(&assess_fatigue(&events))?)
}

/// Build the coaching advisory.
pub fn coaching_advice_json(request_json: &str) -> Result<String> {
    let events = AnalysisRequest::decode(request_json)?.scoped_events();
    debug!("building advice from {} pitch events", events.len());
    Ok(serde_json::to_string(&build_advice(&events))?)
}
