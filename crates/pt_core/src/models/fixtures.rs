//! Shared test fixtures for building pitch sequences.

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::{BatterSide, Count, PitchEvent, PitchResult};

/// Deterministic timestamp for the i-th pitch of a fixture game.
pub(crate) fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap() + Duration::seconds(i as i64 * 20)
}

/// One pitch with the fields the analytics care about; everything else fixed.
pub(crate) fn pitch(i: usize, pitch_type: &str, count: &str, result: PitchResult) -> PitchEvent {
    PitchEvent {
        pitcher_id: "p1".into(),
        game_id: "g1".into(),
        inning: (i / 15 + 1) as u8,
        is_top: true,
        outs: (i % 3) as u8,
        count: Count::parse(count),
        pitch_type: Some(pitch_type.into()),
        result: Some(result),
        batter_side: Some(BatterSide::R),
        timestamp: ts(i),
    }
}

/// A run of identical pitches starting at sequence index `start`.
pub(crate) fn run(
    start: usize,
    n: usize,
    pitch_type: &str,
    count: &str,
    result: PitchResult,
) -> Vec<PitchEvent> {
    (start..start + n).map(|i| pitch(i, pitch_type, count, result)).collect()
}
