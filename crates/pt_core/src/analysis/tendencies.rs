//! Pitcher tendency analysis.
//!
//! `analyze` is the main entry point: it recomputes every tendency statistic
//! from the raw event list on each call. Nothing is cached or incrementally
//! updated; correctness only requires that the result be a pure function of
//! the input.

use serde::{Deserialize, Serialize};

use super::aggregate::{percent, PartitionTally};
use super::prediction::{predict, Predictions};
use crate::config::{AnalysisConfig, QualityTiers};
use crate::models::{BatterSide, Count, PitchEvent, PitchResult};

/// Coarse reliability label for an analysis, based on total sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    #[default]
    Low,
    Medium,
    High,
}

impl QualityTier {
    /// `low` strictly below the first boundary, `medium` strictly below the
    /// second, else `high`. A sample of exactly 10 is `medium`.
    pub fn from_sample(total: usize, tiers: &QualityTiers) -> Self {
        if total < tiers.low_below {
            QualityTier::Low
        } else if total < tiers.medium_below {
            QualityTier::Medium
        } else {
            QualityTier::High
        }
    }
}

/// Pitch-type mix observed in one ball-strike count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountCell {
    pub count: Count,
    pub tally: PartitionTally,
}

/// Pitch-type mix observed with a given number of outs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsMix {
    pub outs: u8,
    pub tally: PartitionTally,
}

/// Per-pitch-type outcome rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchEffectiveness {
    pub pitch_type: String,
    pub pitches: usize,
    pub strike_percentage: u32,
    pub swing_and_miss_percentage: u32,
}

/// Pitches thrown in one half-inning, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningLoad {
    /// E.g. "Top 3".
    pub label: String,
    pub pitches: usize,
}

/// Simple pitch-limit pace projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceProjection {
    pub avg_pitches_per_inning: f64,
    pub pitches_remaining: usize,
    pub projected_innings_remaining: usize,
    pub estimated_batters: usize,
    pub pitches_per_batter: f64,
}

/// Full tendency snapshot for one pitcher scope.
///
/// `has_data == false` is the explicit no-data sentinel returned for an
/// empty event list; every other field is then empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub has_data: bool,
    pub message: Option<String>,
    pub total_pitches: usize,
    pub quality: QualityTier,
    pub pitch_types: PartitionTally,
    pub first_pitch: PartitionTally,
    /// Only counts with at least one observation appear, in balls-major
    /// enumeration order.
    pub count_matrix: Vec<CountCell>,
    pub ahead_in_count: usize,
    pub behind_in_count: usize,
    pub even_count: usize,
    pub vs_left: usize,
    pub vs_right: usize,
    pub results: PartitionTally,
    pub outs_distribution: [usize; 3],
    pub pitch_types_by_outs: Vec<OutsMix>,
    pub two_out_pitches: PartitionTally,
    pub contact_rate: u32,
    pub swing_and_miss_rate: u32,
    pub hit_rate_on_contact: u32,
    pub out_rate_on_contact: u32,
    pub pitch_effectiveness: Vec<PitchEffectiveness>,
    pub innings: Vec<InningLoad>,
    pub pace: Option<PaceProjection>,
    pub predictions: Predictions,
}

impl AnalysisResult {
    fn no_data() -> Self {
        Self {
            has_data: false,
            message: Some("No pitch data available".into()),
            ..Self::default()
        }
    }

    /// Pitch-type tally for one count, if observed.
    pub fn count_cell(&self, count: Count) -> Option<&PartitionTally> {
        self.count_matrix
            .iter()
            .find(|cell| cell.count == count)
            .map(|cell| &cell.tally)
    }
}

/// Analyze a pitch sequence with the default configuration.
pub fn analyze(events: &[PitchEvent]) -> AnalysisResult {
    analyze_with(events, &AnalysisConfig::default())
}

/// Analyze a pitch sequence. Pure; the input is never mutated.
pub fn analyze_with(events: &[PitchEvent], config: &AnalysisConfig) -> AnalysisResult {
    if events.is_empty() {
        return AnalysisResult::no_data();
    }

    let total = events.len();
    let pitch_types = PartitionTally::from_events(events, |e| e.pitch_type.clone());
    let first_pitch = PartitionTally::from_events(
        events
            .iter()
            .filter(|e| e.count.map(|c| c.is_first_pitch()).unwrap_or(false)),
        |e| e.pitch_type.clone(),
    );

    let count_matrix: Vec<CountCell> = Count::all()
        .filter_map(|count| {
            let tally = PartitionTally::from_events(
                events.iter().filter(|e| e.count == Some(count)),
                |e| e.pitch_type.clone(),
            );
            tally.has_data().then_some(CountCell { count, tally })
        })
        .collect();

    let count_where = |pred: fn(&Count) -> bool| {
        events
            .iter()
            .filter(|e| e.count.as_ref().map(pred).unwrap_or(false))
            .count()
    };

    let results = PartitionTally::from_events(events, |e| e.result.map(|r| r.label().to_string()));

    let mut outs_distribution = [0usize; 3];
    for event in events {
        if let Some(slot) = outs_distribution.get_mut(event.outs as usize) {
            *slot += 1;
        }
    }

    let pitch_types_by_outs: Vec<OutsMix> = (0u8..=2)
        .filter_map(|outs| {
            let tally = PartitionTally::from_events(
                events.iter().filter(|e| e.outs == outs),
                |e| e.pitch_type.clone(),
            );
            tally.has_data().then_some(OutsMix { outs, tally })
        })
        .collect();

    let two_out_pitches = PartitionTally::from_events(
        events.iter().filter(|e| e.outs == 2),
        |e| e.pitch_type.clone(),
    );

    let contact = events
        .iter()
        .filter(|e| e.result.map(|r| r.is_contact()).unwrap_or(false))
        .count();
    let hits = events.iter().filter(|e| e.result == Some(PitchResult::Hit)).count();
    let outs_in_play = events.iter().filter(|e| e.result == Some(PitchResult::Out)).count();
    let whiffs = events
        .iter()
        .filter(|e| e.result == Some(PitchResult::SwingingStrike))
        .count();

    let pitch_effectiveness: Vec<PitchEffectiveness> = pitch_types
        .categories()
        .iter()
        .map(|entry| {
            let of_type: Vec<&PitchEvent> = events
                .iter()
                .filter(|e| e.pitch_type.as_deref() == Some(entry.category.as_str()))
                .collect();
            let strikes = of_type.iter().filter(|e| e.is_strike_like()).count();
            let misses = of_type
                .iter()
                .filter(|e| e.result == Some(PitchResult::SwingingStrike))
                .count();
            PitchEffectiveness {
                pitch_type: entry.category.clone(),
                pitches: of_type.len(),
                strike_percentage: percent(strikes, of_type.len()),
                swing_and_miss_percentage: percent(misses, of_type.len()),
            }
        })
        .collect();

    let innings = inning_loads(events);
    let pace = pace_projection(total, &innings, config);

    AnalysisResult {
        has_data: true,
        message: None,
        total_pitches: total,
        quality: QualityTier::from_sample(total, &config.quality),
        pitch_types,
        first_pitch,
        count_matrix,
        ahead_in_count: count_where(Count::is_ahead),
        behind_in_count: count_where(Count::is_behind),
        even_count: count_where(Count::is_even),
        vs_left: events.iter().filter(|e| e.batter_side == Some(BatterSide::L)).count(),
        vs_right: events.iter().filter(|e| e.batter_side == Some(BatterSide::R)).count(),
        results,
        outs_distribution,
        pitch_types_by_outs,
        two_out_pitches,
        contact_rate: percent(contact, total),
        swing_and_miss_rate: percent(whiffs, total),
        hit_rate_on_contact: percent(hits, contact),
        out_rate_on_contact: percent(outs_in_play, contact),
        pitch_effectiveness,
        innings,
        pace,
        predictions: predict(events, config),
    }
}

/// Pitches per half-inning, in chronological first-appearance order.
fn inning_loads(events: &[PitchEvent]) -> Vec<InningLoad> {
    let sorted = super::trend::chronological(events);
    let mut loads: Vec<((bool, u8), usize)> = Vec::new();
    for event in &sorted {
        let key = (event.is_top, event.inning);
        match loads.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => loads.push((key, 1)),
        }
    }
    loads
        .into_iter()
        .map(|((is_top, inning), pitches)| InningLoad {
            label: format!("{} {}", if is_top { "Top" } else { "Bottom" }, inning),
            pitches,
        })
        .collect()
}

fn pace_projection(
    total: usize,
    innings: &[InningLoad],
    config: &AnalysisConfig,
) -> Option<PaceProjection> {
    if innings.is_empty() || total == 0 {
        return None;
    }
    let advisory = &config.advisory;
    let avg = total as f64 / innings.len() as f64;
    let remaining = advisory.pitch_limit.saturating_sub(total);
    let estimated_batters = (total as f64 / advisory.pitches_per_batter).ceil() as usize;
    Some(PaceProjection {
        avg_pitches_per_inning: avg,
        pitches_remaining: remaining,
        projected_innings_remaining: (remaining as f64 / avg).floor() as usize,
        estimated_batters,
        pitches_per_batter: total as f64 / estimated_batters.max(1) as f64,
    })
}

/// Per-pitcher breakdown of a whole game's pitches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherBreakdown {
    pub pitcher_id: String,
    pub analysis: AnalysisResult,
}

/// Game-scope analysis: every pitcher who threw, analyzed independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameAnalysis {
    pub has_data: bool,
    pub message: Option<String>,
    pub total_pitches: usize,
    pub pitchers: Vec<PitcherBreakdown>,
}

/// Analyze a game's pitches grouped by pitcher, with the default config.
pub fn analyze_game(events: &[PitchEvent]) -> GameAnalysis {
    analyze_game_with(events, &AnalysisConfig::default())
}

pub fn analyze_game_with(events: &[PitchEvent], config: &AnalysisConfig) -> GameAnalysis {
    if events.is_empty() {
        return GameAnalysis {
            has_data: false,
            message: Some("No pitch data available for this game".into()),
            ..GameAnalysis::default()
        };
    }

    // Group by pitcher, preserving first-appearance order.
    let mut groups: Vec<(String, Vec<&PitchEvent>)> = Vec::new();
    for event in events {
        match groups.iter_mut().find(|(id, _)| *id == event.pitcher_id) {
            Some((_, list)) => list.push(event),
            None => groups.push((event.pitcher_id.clone(), vec![event])),
        }
    }

    let pitchers = groups
        .into_iter()
        .map(|(pitcher_id, list)| {
            let owned: Vec<PitchEvent> = list.into_iter().cloned().collect();
            PitcherBreakdown {
                pitcher_id,
                analysis: analyze_with(&owned, config),
            }
        })
        .collect();

    GameAnalysis {
        has_data: true,
        message: None,
        total_pitches: events.len(),
        pitchers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{pitch, run};

    #[test]
    fn empty_input_returns_no_data_sentinel() {
        let result = analyze(&[]);
        assert!(!result.has_data);
        assert_eq!(result.message.as_deref(), Some("No pitch data available"));
        assert_eq!(result.total_pitches, 0);
        assert!(result.count_matrix.is_empty());
        // Deterministic: identical calls give identical sentinels.
        assert_eq!(result, analyze(&[]));
    }

    #[test]
    fn uniform_fastballs_give_full_shares_and_confidence() {
        let events = run(0, 15, "fastball", "0-0", PitchResult::Strike);
        let result = analyze(&events);
        assert!(result.has_data);
        assert_eq!(result.total_pitches, 15);
        assert_eq!(result.pitch_types.share("fastball"), 100);
        assert_eq!(result.quality, QualityTier::Medium);
        let first_pitch = result.predictions.first_pitch.as_ref().unwrap();
        assert_eq!(first_pitch.pitch_type, "fastball");
        assert_eq!(first_pitch.confidence, 100);
    }

    #[test]
    fn ten_pitches_sit_on_the_medium_boundary() {
        let mut events = run(0, 5, "fastball", "1-1", PitchResult::Strike);
        events.extend(run(5, 5, "fastball", "1-1", PitchResult::Ball));
        let result = analyze(&events);
        assert_eq!(result.results.share("strike"), 50);
        // n = 10: low is strictly below 10.
        assert_eq!(result.quality, QualityTier::Medium);
    }

    #[test]
    fn analysis_is_idempotent() {
        let mut events = run(0, 8, "fastball", "0-0", PitchResult::Strike);
        events.extend(run(8, 7, "changeup", "1-2", PitchResult::Ball));
        assert_eq!(analyze(&events), analyze(&events));
    }

    #[test]
    fn count_matrix_only_holds_observed_counts() {
        let mut events = run(0, 4, "fastball", "0-0", PitchResult::Strike);
        events.extend(run(4, 2, "changeup", "2-1", PitchResult::Ball));
        let result = analyze(&events);
        assert_eq!(result.count_matrix.len(), 2);
        assert_eq!(result.count_matrix[0].count.to_string(), "0-0");
        assert_eq!(result.count_matrix[1].count.to_string(), "2-1");
        assert!(result.count_cell(Count::new(3, 2).unwrap()).is_none());
    }

    #[test]
    fn count_situations_split_ahead_behind_even() {
        let mut events = run(0, 2, "fastball", "0-1", PitchResult::Strike); // ahead
        events.extend(run(2, 3, "fastball", "2-0", PitchResult::Ball)); // behind
        events.extend(run(5, 1, "fastball", "1-1", PitchResult::Strike)); // even
        events.extend(run(6, 1, "fastball", "0-0", PitchResult::Strike)); // even
        let result = analyze(&events);
        assert_eq!(result.ahead_in_count, 2);
        assert_eq!(result.behind_in_count, 3);
        assert_eq!(result.even_count, 2);
    }

    #[test]
    fn malformed_events_count_toward_totals_only() {
        let mut events = run(0, 9, "fastball", "0-0", PitchResult::Strike);
        events.push(pitch(9, "fastball", "0-0", PitchResult::Strike));
        let last = events.last_mut().unwrap();
        last.pitch_type = None;
        last.count = None;
        last.result = None;

        let result = analyze(&events);
        assert_eq!(result.total_pitches, 10);
        assert_eq!(result.pitch_types.total(), 9);
        assert_eq!(result.first_pitch.total(), 9);
        assert_eq!(result.results.total(), 9);
        // Quality is tiered on the overall total, malformed included.
        assert_eq!(result.quality, QualityTier::Medium);
    }

    #[test]
    fn contact_and_whiff_rates_use_overall_total() {
        let mut events = run(0, 5, "fastball", "0-0", PitchResult::Foul);
        events.extend(run(5, 2, "fastball", "0-0", PitchResult::Hit));
        events.extend(run(7, 1, "fastball", "0-0", PitchResult::Out));
        events.extend(run(8, 2, "fastball", "0-0", PitchResult::SwingingStrike));
        let result = analyze(&events);
        // 8 of 10 pitches saw contact.
        assert_eq!(result.contact_rate, 80);
        assert_eq!(result.swing_and_miss_rate, 20);
        assert_eq!(result.hit_rate_on_contact, 25);
        assert_eq!(result.out_rate_on_contact, 13);
    }

    #[test]
    fn effectiveness_is_computed_per_pitch_type() {
        let mut events = run(0, 3, "fastball", "0-0", PitchResult::Strike);
        events.extend(run(3, 1, "fastball", "0-0", PitchResult::Ball));
        events.extend(run(4, 2, "changeup", "0-0", PitchResult::SwingingStrike));
        let result = analyze(&events);
        let fastball = &result.pitch_effectiveness[0];
        assert_eq!(fastball.pitch_type, "fastball");
        assert_eq!(fastball.pitches, 4);
        assert_eq!(fastball.strike_percentage, 75);
        assert_eq!(fastball.swing_and_miss_percentage, 0);
        let changeup = &result.pitch_effectiveness[1];
        assert_eq!(changeup.strike_percentage, 100);
        assert_eq!(changeup.swing_and_miss_percentage, 100);
    }

    #[test]
    fn pace_projection_tracks_innings() {
        // Fixture innings: 15 pitches each, Top 1 and Top 2.
        let events = run(0, 30, "fastball", "0-0", PitchResult::Strike);
        let result = analyze(&events);
        assert_eq!(result.innings.len(), 2);
        assert_eq!(result.innings[0].label, "Top 1");
        assert_eq!(result.innings[0].pitches, 15);

        let pace = result.pace.unwrap();
        assert_eq!(pace.avg_pitches_per_inning, 15.0);
        assert_eq!(pace.pitches_remaining, 65);
        assert_eq!(pace.projected_innings_remaining, 4);
        assert_eq!(pace.estimated_batters, 8);
        assert!((pace.pitches_per_batter - 3.75).abs() < 1e-9);
    }

    #[test]
    fn game_analysis_groups_by_pitcher() {
        let mut events = run(0, 12, "fastball", "0-0", PitchResult::Strike);
        let mut relief = run(12, 6, "changeup", "0-0", PitchResult::Ball);
        for e in relief.iter_mut() {
            e.pitcher_id = "p2".into();
        }
        events.extend(relief);

        let game = analyze_game(&events);
        assert!(game.has_data);
        assert_eq!(game.total_pitches, 18);
        assert_eq!(game.pitchers.len(), 2);
        assert_eq!(game.pitchers[0].pitcher_id, "p1");
        assert_eq!(game.pitchers[1].pitcher_id, "p2");
        let per_pitcher: usize =
            game.pitchers.iter().map(|p| p.analysis.total_pitches).sum();
        assert_eq!(per_pitcher, game.total_pitches);
    }

    #[test]
    fn empty_game_returns_no_data() {
        let game = analyze_game(&[]);
        assert!(!game.has_data);
        assert!(game.pitchers.is_empty());
    }
}
