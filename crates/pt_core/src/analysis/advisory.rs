//! Coaching advisory generation.
//!
//! Composes templated advisory text from the tendency analysis, the
//! prediction module and fixed thresholds. Every sentence here is either a
//! fixed string or a template filled with measured numbers; there is no
//! free-text generation and no learned model. Items whose underlying sample
//! is too small are suppressed rather than guessed.

use serde::{Deserialize, Serialize};

use super::aggregate::{percent, PartitionTally};
use super::tendencies::{analyze_with, AnalysisResult};
use super::trend;
use crate::config::AnalysisConfig;
use crate::models::{Count, PitchEvent};

/// Advice for batters facing this pitcher. `None` fields mean the sample
/// was too thin to say anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterAdvice {
    pub general: Option<String>,
    pub first_pitch: Option<String>,
    pub two_strikes: Option<String>,
    pub key_count: Option<KeyCount>,
}

/// The single count where the pitcher is most predictable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCount {
    pub count: Count,
    pub advice: String,
}

/// Pitch-count driven risk for the pitcher's own coach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FatigueRisk {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitcherManagement {
    pub fatigue_risk: FatigueRisk,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveAdvice {
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStrategy {
    pub overall: Option<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Detected mid-game pitch-mix shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InGameAdjustments {
    pub adjustments_made: bool,
    pub adjustments: Vec<String>,
    pub recommendation: String,
}

/// Composite advisory: a purely derived view over one pitch sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachingAdvice {
    pub has_data: bool,
    pub message: Option<String>,
    pub batter: BatterAdvice,
    pub pitcher_management: PitcherManagement,
    pub defense: DefensiveAdvice,
    pub game_strategy: GameStrategy,
    pub in_game_adjustments: InGameAdjustments,
}

impl CoachingAdvice {
    fn no_data() -> Self {
        Self {
            has_data: false,
            message: Some("No pitch data available for analysis".into()),
            ..Self::default()
        }
    }
}

/// Build the full advisory with the default configuration.
pub fn build_advice(events: &[PitchEvent]) -> CoachingAdvice {
    build_advice_with(events, &AnalysisConfig::default())
}

pub fn build_advice_with(events: &[PitchEvent], config: &AnalysisConfig) -> CoachingAdvice {
    let analysis = analyze_with(events, config);
    if !analysis.has_data {
        return CoachingAdvice::no_data();
    }
    let sorted = trend::chronological(events);

    CoachingAdvice {
        has_data: true,
        message: None,
        batter: batter_advice(&analysis, config),
        pitcher_management: pitcher_management(&sorted, config),
        defense: defensive_advice(&analysis, config),
        game_strategy: game_strategy(&analysis, &sorted, config),
        in_game_adjustments: in_game_adjustments(&sorted, config),
    }
}

fn batter_advice(analysis: &AnalysisResult, config: &AnalysisConfig) -> BatterAdvice {
    let advisory = &config.advisory;

    let general = analysis.pitch_types.dominant().map(|dominant| {
        if dominant.percentage > advisory.heavy_mix_share {
            format!(
                "Look for {} ({}% of pitches)",
                dominant.category, dominant.percentage
            )
        } else if dominant.percentage > advisory.lean_mix_share {
            format!("Expect {} but be ready to adjust", dominant.category)
        } else {
            "Mixed approach - focus on good pitch selection".into()
        }
    });

    // First-pitch framing comes from the gated prediction, so a thin
    // first-pitch sample produces no advice at all.
    let first_pitch = analysis.predictions.first_pitch.as_ref().map(|prediction| {
        if prediction.confidence > advisory.first_pitch_attack_share {
            format!(
                "Aggressive on first pitch - expect {}",
                prediction.pitch_type
            )
        } else {
            "Take first pitch - mixed approach".into()
        }
    });

    // Merge the raw two-strike partitions (0-2, 1-2, 2-2) before picking a
    // dominant type, so sparse counts do not outvote full ones.
    let mut two_strike_tally = PartitionTally::new();
    for cell in &analysis.count_matrix {
        if cell.count.is_two_strike() {
            two_strike_tally.merge(&cell.tally);
        }
    }
    let two_strikes = if two_strike_tally.total() >= config.samples.situation {
        two_strike_tally
            .dominant()
            .map(|d| format!("Protect against {} with two strikes", d.category))
    } else if two_strike_tally.has_data() {
        Some("Shorten swing with two strikes".into())
    } else {
        None
    };

    // Key count: highest dominant share strictly above the cutoff, scanned
    // in the canonical count enumeration order so ties are deterministic.
    let mut key_count: Option<(Count, String, u32)> = None;
    for cell in &analysis.count_matrix {
        if let Some(dominant) = cell.tally.dominant() {
            if dominant.percentage > advisory.key_count_share
                && key_count
                    .as_ref()
                    .map(|(_, _, best)| dominant.percentage > *best)
                    .unwrap_or(true)
            {
                key_count = Some((cell.count, dominant.category, dominant.percentage));
            }
        }
    }
    let key_count = key_count.map(|(count, pitch_type, share)| KeyCount {
        count,
        advice: format!("On {} count: Look for {} ({}%)", count, pitch_type, share),
    });

    BatterAdvice {
        general,
        first_pitch,
        two_strikes,
        key_count,
    }
}

fn pitcher_management(sorted: &[PitchEvent], config: &AnalysisConfig) -> PitcherManagement {
    let advisory = &config.advisory;
    let mut management = PitcherManagement::default();
    let total = sorted.len();

    if total > advisory.high_pitch_count {
        management.fatigue_risk = FatigueRisk::High;
        management
            .warnings
            .push("Approaching pitch limit - prepare relief pitcher".into());
    } else if total > advisory.medium_pitch_count {
        management.fatigue_risk = FatigueRisk::Medium;
        management
            .recommendations
            .push("Begin considering relief options in next inning".into());
    }

    if let Some(rate) = trend::recent_strike_rate(sorted, config.recent_window) {
        if rate < advisory.recent_strike_risk_below {
            // Control problems escalate the risk to at least medium.
            management.fatigue_risk = management.fatigue_risk.max(FatigueRisk::Medium);
            management.warnings.push(format!(
                "Control issues: Only {}% strikes in last {} pitches",
                rate, config.recent_window
            ));
        } else if rate < advisory.recent_strike_watch_below {
            management
                .recommendations
                .push("Monitor control - strike percentage dropping".into());
        }
    }

    management
}

fn defensive_advice(analysis: &AnalysisResult, config: &AnalysisConfig) -> DefensiveAdvice {
    let mut recommendations = vec![
        "Position middle infielders straight up (not expecting advanced pull/oppo tendencies at this age)"
            .to_string(),
    ];
    if analysis.pitch_types.share("fastball") > config.advisory.deep_outfield_fastball_share {
        recommendations.push(
            "Outfielders slightly deeper - high fastball percentage increases likelihood of hard contact"
                .into(),
        );
    } else {
        recommendations.push("Outfielders at medium depth - mixed pitch selection".into());
    }
    DefensiveAdvice { recommendations }
}

fn game_strategy(
    analysis: &AnalysisResult,
    sorted: &[PitchEvent],
    config: &AnalysisConfig,
) -> GameStrategy {
    let advisory = &config.advisory;
    let mut strategy = GameStrategy::default();

    let strikes = sorted.iter().filter(|e| e.is_strike_like()).count();
    let strike_rate = percent(strikes, sorted.len());
    strategy.overall = Some(if strike_rate > advisory.strong_strike_rate {
        strategy.strengths.push("Good control".into());
        "High-strike pitcher - emphasize strike zone discipline".into()
    } else if strike_rate < advisory.weak_strike_rate {
        strategy.weaknesses.push("Inconsistent control".into());
        "Control issues - take until you get a strike".into()
    } else {
        "Average control - normal approach".to_string()
    });

    if let Some(dominant) = analysis.pitch_types.dominant() {
        if dominant.percentage > advisory.predictable_share {
            strategy
                .weaknesses
                .push(format!("Heavy reliance on {}", dominant.category));
        }
    }

    strategy
}

fn in_game_adjustments(sorted: &[PitchEvent], config: &AnalysisConfig) -> InGameAdjustments {
    let halfway = sorted.len() / 2;
    let first_mix = PartitionTally::from_events(&sorted[..halfway], |e| e.pitch_type.clone());
    let second_mix = PartitionTally::from_events(&sorted[halfway..], |e| e.pitch_type.clone());

    // Union of both halves' types, first-half order then new second-half
    // types, so the report order is stable.
    let mut types: Vec<&str> = first_mix.categories().iter().map(|c| c.category.as_str()).collect();
    for entry in second_mix.categories() {
        if !types.contains(&entry.category.as_str()) {
            types.push(&entry.category);
        }
    }

    let shift = config.advisory.adjustment_shift;
    let mut adjustments = Vec::new();
    for pitch_type in types {
        let first = first_mix.share(pitch_type);
        let second = second_mix.share(pitch_type);
        if first.abs_diff(second) >= shift {
            if second > first {
                adjustments.push(format!(
                    "Increased {} usage from {}% to {}%",
                    pitch_type, first, second
                ));
            } else {
                adjustments.push(format!(
                    "Decreased {} usage from {}% to {}%",
                    pitch_type, first, second
                ));
            }
        }
    }

    let adjustments_made = !adjustments.is_empty();
    InGameAdjustments {
        adjustments_made,
        adjustments,
        recommendation: if adjustments_made {
            "Pitcher makes adjustments during game - be ready to adapt your approach".into()
        } else {
            "Consistent approach throughout game - stick with initial strategy".into()
        },
    }
}
