//! Threshold configuration for the analytics core.
//!
//! Every cutoff the analysis uses lives here instead of inline in the
//! algorithms, so the numbers are visible in one place and testable. The
//! defaults were tuned for youth-league pitch volumes (a game yields well
//! under a few hundred events) together with independent per-category
//! rounding; do not retune one without the other.

use serde::{Deserialize, Serialize};

/// All tunable thresholds, grouped by the module that consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Trend window length in pitches. 15 splits a typical 75-pitch youth
    /// outing into five segments.
    pub segment_size: usize,
    /// How many of the most recent pitches feed the "recent control" checks.
    pub recent_window: usize,
    pub samples: SampleThresholds,
    pub quality: QualityTiers,
    pub fatigue: FatigueThresholds,
    pub advisory: AdvisoryThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            segment_size: 15,
            recent_window: 10,
            samples: SampleThresholds::default(),
            quality: QualityTiers::default(),
            fatigue: FatigueThresholds::default(),
            advisory: AdvisoryThresholds::default(),
        }
    }
}

/// Minimum sample sizes below which a prediction is suppressed entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleThresholds {
    pub first_pitch: usize,
    pub three_ball: usize,
    /// Two-strike, two-out and batter-side partitions.
    pub situation: usize,
    /// Below this many total events fatigue assessment reports no data.
    pub fatigue: usize,
}

impl Default for SampleThresholds {
    fn default() -> Self {
        Self { first_pitch: 3, three_ball: 2, situation: 3, fatigue: 10 }
    }
}

/// Sample-size boundaries for the overall quality tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityTiers {
    /// Strictly below this is `low`.
    pub low_below: usize,
    /// Strictly below this (and at least `low_below`) is `medium`.
    pub medium_below: usize,
}

impl Default for QualityTiers {
    fn default() -> Self {
        Self { low_below: 10, medium_below: 20 }
    }
}

/// Point values and cutoffs for the fatigue rule table.
///
/// Drops are magnitudes in the units of their series: percentage points for
/// strike rate and consistency, proxy mph for velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueThresholds {
    pub strike_drop_high: i32,
    pub strike_drop_medium: i32,
    pub velocity_drop_high: i32,
    pub velocity_drop_medium: i32,
    pub consistency_drop_high: i32,
    pub consistency_drop_medium: i32,
    /// Dominant-pitch share drop (same type) that scores a point.
    pub dominant_share_drop: i32,
    /// Recent strike rate strictly below this is a high-severity signal.
    pub recent_strike_high_below: i32,
    /// Recent strike rate strictly below this is a medium-severity signal.
    pub recent_strike_medium_below: i32,
    pub high_points: i32,
    pub medium_points: i32,
    /// Dominant pitch type changed between first and last segment.
    pub switch_points: i32,
    /// Dominant share dropped with the type unchanged.
    pub share_drop_points: i32,
    pub warning_high_at: i32,
    pub warning_medium_at: i32,
    pub warning_low_at: i32,
}

impl Default for FatigueThresholds {
    fn default() -> Self {
        Self {
            strike_drop_high: 10,
            strike_drop_medium: 5,
            velocity_drop_high: 3,
            velocity_drop_medium: 2,
            consistency_drop_high: 20,
            consistency_drop_medium: 10,
            dominant_share_drop: 15,
            recent_strike_high_below: 50,
            recent_strike_medium_below: 60,
            high_points: 3,
            medium_points: 2,
            switch_points: 2,
            share_drop_points: 1,
            warning_high_at: 8,
            warning_medium_at: 5,
            warning_low_at: 3,
        }
    }
}

/// Cutoffs for the coaching advisory generator. Shares and rates are rounded
/// integer percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryThresholds {
    /// Above this overall share a pitch is called out as heavily favored.
    pub heavy_mix_share: u32,
    /// Above this the batter should expect the pitch but stay adjustable.
    pub lean_mix_share: u32,
    /// First-pitch prediction confidence needed to recommend attacking early.
    pub first_pitch_attack_share: u32,
    /// Minimum dominant share for a count to be called out as a key count.
    pub key_count_share: u32,
    pub high_pitch_count: usize,
    pub medium_pitch_count: usize,
    pub recent_strike_risk_below: u32,
    pub recent_strike_watch_below: u32,
    pub strong_strike_rate: u32,
    pub weak_strike_rate: u32,
    /// A single pitch type above this share is flagged as predictable.
    pub predictable_share: u32,
    /// Between-half mix shift (percentage points) that counts as an
    /// in-game adjustment.
    pub adjustment_shift: u32,
    pub deep_outfield_fastball_share: u32,
    /// League pitch limit used for the pace projection.
    pub pitch_limit: usize,
    /// Rough pitches-per-batter estimate for youth play.
    pub pitches_per_batter: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            heavy_mix_share: 75,
            lean_mix_share: 60,
            first_pitch_attack_share: 65,
            key_count_share: 65,
            high_pitch_count: 70,
            medium_pitch_count: 50,
            recent_strike_risk_below: 50,
            recent_strike_watch_below: 60,
            strong_strike_rate: 65,
            weak_strike_rate: 55,
            predictable_share: 70,
            adjustment_shift: 15,
            deep_outfield_fastball_share: 60,
            pitch_limit: 95,
            pitches_per_batter: 3.8,
        }
    }
}
