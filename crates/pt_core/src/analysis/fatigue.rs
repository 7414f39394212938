//! Rule-table fatigue scoring.
//!
//! A pure function from trend segments to an integer score: each qualifying
//! signal contributes a fixed point value, the sum maps to a warning level,
//! and the recommendation text is a fixed lookup per level. No state machine
//! and no free-text generation.

use serde::{Deserialize, Serialize};

use super::trend::{self, HeuristicProxy, ProxyModel, TrendSegment};
use crate::config::AnalysisConfig;
use crate::models::PitchEvent;

/// Overall fatigue warning level derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WarningLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

/// Severity of a single fatigue signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Medium,
    High,
}

/// One triggered fatigue signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatigueIndicator {
    /// Signal name, e.g. "Strike Percentage".
    pub signal: String,
    pub severity: Severity,
    /// Human-readable detail with the measured magnitude.
    pub detail: String,
}

/// Full fatigue assessment for a pitch sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueAssessment {
    /// False when the sequence was too short to assess.
    pub has_data: bool,
    pub fatigue_score: i32,
    pub indicators: Vec<FatigueIndicator>,
    /// The trend windows the score was derived from.
    pub segments: Vec<TrendSegment>,
    /// Strike-like share of the most recent pitches.
    pub recent_strike_rate: Option<u32>,
    pub warning_level: WarningLevel,
    /// Fixed recommendation text for the warning level.
    pub recommendation: String,
    /// Fixed checklist for the warning level.
    pub action_items: Vec<String>,
}

impl FatigueAssessment {
    fn insufficient_data() -> Self {
        Self {
            has_data: false,
            fatigue_score: 0,
            indicators: Vec::new(),
            segments: Vec::new(),
            recent_strike_rate: None,
            warning_level: WarningLevel::None,
            recommendation: "Not enough pitches to analyze fatigue".into(),
            action_items: Vec::new(),
        }
    }
}

/// Assess fatigue with the default configuration and heuristic proxies.
pub fn assess_fatigue(events: &[PitchEvent]) -> FatigueAssessment {
    assess_fatigue_with(events, &AnalysisConfig::default(), &HeuristicProxy::default())
}

/// Assess fatigue for a pitch sequence.
///
/// Requires at least `config.samples.fatigue` events (default 10); below
/// that the assessment reports no data, a zero score and no indicators.
pub fn assess_fatigue_with(
    events: &[PitchEvent],
    config: &AnalysisConfig,
    proxy: &dyn ProxyModel,
) -> FatigueAssessment {
    if events.len() < config.samples.fatigue {
        return FatigueAssessment::insufficient_data();
    }

    let rules = &config.fatigue;
    let sorted = trend::chronological(events);
    let segments = trend::segment(&sorted, config, proxy);

    let mut indicators = Vec::new();
    let mut score = 0;

    // Strike rate over the last two windows.
    if segments.len() >= 2 {
        let last = &segments[segments.len() - 1];
        let prev = &segments[segments.len() - 2];
        let delta = last.strike_rate as i32 - prev.strike_rate as i32;
        if delta <= -rules.strike_drop_high {
            indicators.push(FatigueIndicator {
                signal: "Strike Percentage".into(),
                severity: Severity::High,
                detail: format!("Dropped {}% in latest pitches", delta.abs()),
            });
            score += rules.high_points;
        } else if delta <= -rules.strike_drop_medium {
            indicators.push(FatigueIndicator {
                signal: "Strike Percentage".into(),
                severity: Severity::Medium,
                detail: format!("Dropped {}% in latest pitches", delta.abs()),
            });
            score += rules.medium_points;
        }
    }

    // First-versus-last deltas for both proxy series.
    if let (Some(first), Some(last)) = (segments.first(), segments.last()) {
        if segments.len() >= 2 {
            let velocity_delta = last.proxy_velocity - first.proxy_velocity;
            if velocity_delta <= -rules.velocity_drop_high {
                indicators.push(FatigueIndicator {
                    signal: "Velocity".into(),
                    severity: Severity::High,
                    detail: format!("Down {} mph from start", velocity_delta.abs()),
                });
                score += rules.high_points;
            } else if velocity_delta <= -rules.velocity_drop_medium {
                indicators.push(FatigueIndicator {
                    signal: "Velocity".into(),
                    severity: Severity::Medium,
                    detail: format!("Down {} mph from start", velocity_delta.abs()),
                });
                score += rules.medium_points;
            }

            let consistency_delta = last.proxy_consistency - first.proxy_consistency;
            if consistency_delta <= -rules.consistency_drop_high {
                indicators.push(FatigueIndicator {
                    signal: "Location Consistency".into(),
                    severity: Severity::High,
                    detail: format!("Down {}% from start", consistency_delta.abs()),
                });
                score += rules.high_points;
            } else if consistency_delta <= -rules.consistency_drop_medium {
                indicators.push(FatigueIndicator {
                    signal: "Location Consistency".into(),
                    severity: Severity::Medium,
                    detail: format!("Down {}% from start", consistency_delta.abs()),
                });
                score += rules.medium_points;
            }

            // Dominant pitch type change or share collapse.
            if let (Some(start_mix), Some(end_mix)) =
                (first.dominant_pitch.as_ref(), last.dominant_pitch.as_ref())
            {
                if start_mix.category != end_mix.category {
                    indicators.push(FatigueIndicator {
                        signal: "Pitch Selection".into(),
                        severity: Severity::Medium,
                        detail: format!(
                            "Switched from {} to {}",
                            start_mix.category, end_mix.category
                        ),
                    });
                    score += rules.switch_points;
                } else if (end_mix.percentage as i32)
                    < start_mix.percentage as i32 - rules.dominant_share_drop
                {
                    indicators.push(FatigueIndicator {
                        signal: "Pitch Selection".into(),
                        severity: Severity::Medium,
                        detail: format!(
                            "{} usage down {}%",
                            start_mix.category,
                            start_mix.percentage as i32 - end_mix.percentage as i32
                        ),
                    });
                    score += rules.share_drop_points;
                }
            }
        }
    }

    // Recent control over the last pitches regardless of window boundaries.
    let recent = trend::recent_strike_rate(&sorted, config.recent_window);
    if let Some(rate) = recent {
        if (rate as i32) < rules.recent_strike_high_below {
            indicators.push(FatigueIndicator {
                signal: "Recent Control".into(),
                severity: Severity::High,
                detail: format!(
                    "Only {}% strikes in last {} pitches",
                    rate, config.recent_window
                ),
            });
            score += rules.high_points;
        } else if (rate as i32) < rules.recent_strike_medium_below {
            indicators.push(FatigueIndicator {
                signal: "Recent Control".into(),
                severity: Severity::Medium,
                detail: format!(
                    "Only {}% strikes in last {} pitches",
                    rate, config.recent_window
                ),
            });
            score += rules.medium_points;
        }
    }

    let warning_level = if score >= rules.warning_high_at {
        WarningLevel::High
    } else if score >= rules.warning_medium_at {
        WarningLevel::Medium
    } else if score >= rules.warning_low_at {
        WarningLevel::Low
    } else {
        WarningLevel::None
    };

    FatigueAssessment {
        has_data: true,
        fatigue_score: score,
        indicators,
        segments,
        recent_strike_rate: recent,
        warning_level,
        recommendation: recommendation_for(warning_level).into(),
        action_items: action_items_for(warning_level)
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Fixed recommendation text per warning level.
pub fn recommendation_for(level: WarningLevel) -> &'static str {
    match level {
        WarningLevel::High => "Consider removing pitcher - multiple fatigue indicators present",
        WarningLevel::Medium => "Watch closely - signs of fatigue are emerging",
        WarningLevel::Low => "Monitor situation - early fatigue indicators present",
        WarningLevel::None => "No significant fatigue detected",
    }
}

/// Fixed action checklist per warning level.
pub fn action_items_for(level: WarningLevel) -> &'static [&'static str] {
    match level {
        WarningLevel::High => &[
            "Begin warming up relief pitcher immediately",
            "Consider a mound visit to check pitcher",
            "Be ready to make a change this inning",
        ],
        WarningLevel::Medium => &[
            "Start warming up relief pitcher",
            "Monitor next 5-10 pitches closely",
            "Look for mechanical changes",
        ],
        WarningLevel::Low => &[
            "Have relief pitcher start light warmup",
            "Watch for additional fatigue signs",
        ],
        WarningLevel::None => &[],
    }
}
