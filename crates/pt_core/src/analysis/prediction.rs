//! Situational pitch predictions gated by minimum sample size.
//!
//! For each tracked situation the dominant pitch type becomes the predicted
//! pitch and its rounded percentage share becomes the confidence. A
//! situation whose sample is below its minimum threshold yields no
//! prediction at all rather than a low-confidence guess.

use serde::{Deserialize, Serialize};

use super::aggregate::PartitionTally;
use crate::config::AnalysisConfig;
use crate::models::PitchEvent;

/// Predicted pitch for one situation. Confidence is the dominant type's
/// percentage share within the situation's partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub pitch_type: String,
    pub confidence: u32,
}

/// Predictions for every tracked situation. `None` means the sample was too
/// small, never that a guess was withheld for another reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predictions {
    pub first_pitch: Option<Prediction>,
    pub three_ball: Option<Prediction>,
    pub two_strike: Option<Prediction>,
    pub two_outs: Option<Prediction>,
    pub vs_left: Option<Prediction>,
    pub vs_right: Option<Prediction>,
}

/// Build all situational predictions for a pitch sequence.
pub fn predict(events: &[PitchEvent], config: &AnalysisConfig) -> Predictions {
    let samples = &config.samples;
    Predictions {
        first_pitch: predict_where(
            events,
            |e| e.count.map(|c| c.is_first_pitch()).unwrap_or(false),
            samples.first_pitch,
        ),
        three_ball: predict_where(
            events,
            |e| e.count.map(|c| c.is_three_ball()).unwrap_or(false),
            samples.three_ball,
        ),
        two_strike: predict_where(
            events,
            |e| e.count.map(|c| c.is_two_strike()).unwrap_or(false),
            samples.situation,
        ),
        two_outs: predict_where(events, |e| e.outs == 2, samples.situation),
        vs_left: predict_where(
            events,
            |e| e.batter_side == Some(crate::models::BatterSide::L),
            samples.situation,
        ),
        vs_right: predict_where(
            events,
            |e| e.batter_side == Some(crate::models::BatterSide::R),
            samples.situation,
        ),
    }
}

/// Tally pitch types within a situation and emit a prediction if the sample
/// meets `min_sample`. Ties break to the first-encountered type (see
/// [`PartitionTally::dominant`]).
fn predict_where<F>(events: &[PitchEvent], in_situation: F, min_sample: usize) -> Option<Prediction>
where
    F: Fn(&PitchEvent) -> bool,
{
    let tally = PartitionTally::from_events(events.iter().filter(|e| in_situation(e)), |e| {
        e.pitch_type.clone()
    });
    if tally.total() < min_sample {
        return None;
    }
    tally.dominant().map(|d| Prediction {
        pitch_type: d.category,
        confidence: d.percentage,
    })
}
