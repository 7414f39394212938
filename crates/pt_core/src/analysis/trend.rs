//! Segmentation of a pitch sequence into fixed-size trend windows.
//!
//! The sequence is sorted chronologically and split into consecutive windows
//! (default 15 pitches, the last window may be short). Each window carries
//! its strike rate, its dominant pitch type and two synthetic proxy values.
//!
//! The proxies are heuristic stand-ins for velocity and location
//! consistency, which the capture layer does not measure. They carry no
//! ground truth; they exist only so the fatigue scorer has qualitative trend
//! inputs until real instrumentation replaces them via [`ProxyModel`].

use serde::{Deserialize, Serialize};

use super::aggregate::{percent, Dominant, PartitionTally};
use crate::config::AnalysisConfig;
use crate::models::PitchEvent;

/// One fixed-size window of a chronologically sorted pitch sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSegment {
    /// Zero-based window index.
    pub index: usize,
    /// Pitches in this window (only the final window may be short).
    pub pitches: usize,
    /// Rounded percentage of strike-like results over the full window.
    pub strike_rate: u32,
    /// Most-used pitch type in the window, if any event carried one.
    pub dominant_pitch: Option<Dominant>,
    /// Synthetic velocity proxy. Heuristic, see module docs.
    pub proxy_velocity: i32,
    /// Synthetic location-consistency proxy. Heuristic, see module docs.
    pub proxy_consistency: i32,
}

/// Source of the synthetic fatigue proxy series.
///
/// Both series are computed per window from the window index and the
/// strike-rate delta (percentage points) against the previous window. Real
/// instrumentation can implement this trait and plug into
/// [`crate::analysis::fatigue::assess_fatigue_with`] without touching the
/// scoring rules.
pub trait ProxyModel {
    fn velocity(&self, window_index: usize, strike_delta: i32) -> i32;
    fn consistency(&self, window_index: usize, strike_delta: i32) -> i32;
}

/// Default heuristic proxy: starts from a baseline, declines linearly with
/// the window index, declines further in proportion to a negative
/// strike-rate delta, and never falls below its floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicProxy {
    /// Baseline proxy velocity for a fresh youth pitcher (proxy mph).
    pub velocity_baseline: f64,
    /// Natural per-window velocity decline.
    pub velocity_slope: f64,
    /// Strike-rate deltas below this feed into the velocity drop.
    pub velocity_delta_gate: i32,
    pub velocity_floor: i32,
    /// Baseline location-consistency percentage.
    pub consistency_baseline: f64,
    /// Natural per-window consistency decline.
    pub consistency_slope: f64,
    pub consistency_floor: i32,
}

impl Default for HeuristicProxy {
    fn default() -> Self {
        Self {
            velocity_baseline: 65.0,
            velocity_slope: 0.5,
            velocity_delta_gate: -5,
            velocity_floor: 50,
            consistency_baseline: 80.0,
            consistency_slope: 2.0,
            consistency_floor: 40,
        }
    }
}

impl ProxyModel for HeuristicProxy {
    fn velocity(&self, window_index: usize, strike_delta: i32) -> i32 {
        let strike_impact = if strike_delta < self.velocity_delta_gate {
            strike_delta.abs() as f64 / 10.0
        } else {
            0.0
        };
        let value = self.velocity_baseline - self.velocity_slope * window_index as f64
            - strike_impact;
        (value.round() as i32).max(self.velocity_floor)
    }

    fn consistency(&self, window_index: usize, strike_delta: i32) -> i32 {
        let strike_impact = if strike_delta < 0 {
            strike_delta.abs() as f64
        } else {
            0.0
        };
        let value = self.consistency_baseline - self.consistency_slope * window_index as f64
            - strike_impact;
        (value.round() as i32).max(self.consistency_floor)
    }
}

/// Clone and sort a pitch sequence by timestamp. The sort is stable, so
/// same-timestamp events keep their input order.
pub fn chronological(events: &[PitchEvent]) -> Vec<PitchEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.timestamp);
    sorted
}

/// Strike-like share of the most recent `window` events of a sorted
/// sequence. `None` on empty input.
pub fn recent_strike_rate(sorted: &[PitchEvent], window: usize) -> Option<u32> {
    if sorted.is_empty() {
        return None;
    }
    let recent = &sorted[sorted.len().saturating_sub(window)..];
    let strikes = recent.iter().filter(|e| e.is_strike_like()).count();
    Some(percent(strikes, recent.len()))
}

/// Split a sequence into trend windows. Events are sorted chronologically
/// first; the input is never mutated.
pub fn segment(
    events: &[PitchEvent],
    config: &AnalysisConfig,
    proxy: &dyn ProxyModel,
) -> Vec<TrendSegment> {
    let sorted = chronological(events);
    let windows: Vec<&[PitchEvent]> = sorted.chunks(config.segment_size.max(1)).collect();

    let strike_rates: Vec<u32> = windows
        .iter()
        .map(|w| percent(w.iter().filter(|e| e.is_strike_like()).count(), w.len()))
        .collect();

    windows
        .iter()
        .enumerate()
        .map(|(index, window)| {
            let strike_delta = if index > 0 {
                strike_rates[index] as i32 - strike_rates[index - 1] as i32
            } else {
                0
            };
            let dominant_pitch =
                PartitionTally::from_events(window.iter(), |e| e.pitch_type.clone()).dominant();
            TrendSegment {
                index,
                pitches: window.len(),
                strike_rate: strike_rates[index],
                dominant_pitch,
                proxy_velocity: proxy.velocity(index, strike_delta),
                proxy_consistency: proxy.consistency(index, strike_delta),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::run;
    use crate::models::PitchResult;

    fn config() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    #[test]
    fn windows_are_fixed_size_with_short_tail() {
        let events = run(0, 35, "fastball", "0-0", PitchResult::Strike);
        let segments = segment(&events, &config(), &HeuristicProxy::default());
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].pitches, 15);
        assert_eq!(segments[1].pitches, 15);
        assert_eq!(segments[2].pitches, 5);
    }

    #[test]
    fn events_are_sorted_before_windowing() {
        let mut events = run(0, 20, "fastball", "0-0", PitchResult::Strike);
        // Last five thrown first in input order, all balls.
        for (i, e) in events.iter_mut().enumerate().take(5) {
            e.timestamp = crate::models::fixtures::ts(100 + i);
            e.result = Some(PitchResult::Ball);
        }
        let segments = segment(&events, &config(), &HeuristicProxy::default());
        assert_eq!(segments[0].strike_rate, 100);
        // Tail window holds the five late balls.
        assert_eq!(segments[1].pitches, 5);
        assert_eq!(segments[1].strike_rate, 0);
    }

    #[test]
    fn first_window_sits_at_proxy_baselines() {
        let events = run(0, 15, "fastball", "0-0", PitchResult::Strike);
        let segments = segment(&events, &config(), &HeuristicProxy::default());
        assert_eq!(segments[0].proxy_velocity, 65);
        assert_eq!(segments[0].proxy_consistency, 80);
    }

    #[test]
    fn falling_strike_rate_drags_proxies_down() {
        // 80% then 60%: delta of -20 passes both proxy gates.
        let mut events = Vec::new();
        events.extend(run(0, 12, "fastball", "0-0", PitchResult::Strike));
        events.extend(run(12, 3, "fastball", "0-0", PitchResult::Ball));
        events.extend(run(15, 9, "fastball", "0-0", PitchResult::Strike));
        events.extend(run(24, 6, "fastball", "0-0", PitchResult::Ball));

        let segments = segment(&events, &config(), &HeuristicProxy::default());
        assert_eq!(segments[0].strike_rate, 80);
        assert_eq!(segments[1].strike_rate, 60);
        // 65 - 0.5 - 20/10 = 62.5, rounded.
        assert_eq!(segments[1].proxy_velocity, 63);
        // 80 - 2 - 20 = 58.
        assert_eq!(segments[1].proxy_consistency, 58);
    }

    #[test]
    fn proxies_never_fall_below_their_floors() {
        let proxy = HeuristicProxy::default();
        for index in 0..100 {
            assert!(proxy.velocity(index, -100) >= proxy.velocity_floor);
            assert!(proxy.consistency(index, -100) >= proxy.consistency_floor);
        }
    }

    #[test]
    fn dominant_pitch_reflects_window_mix() {
        let mut events = run(0, 9, "fastball", "0-0", PitchResult::Strike);
        events.extend(run(9, 6, "changeup", "0-0", PitchResult::Ball));
        let segments = segment(&events, &config(), &HeuristicProxy::default());
        let dominant = segments[0].dominant_pitch.as_ref().unwrap();
        assert_eq!(dominant.category, "fastball");
        assert_eq!(dominant.percentage, 60);
    }

    #[test]
    fn recent_strike_rate_covers_last_window() {
        let mut events = run(0, 10, "fastball", "0-0", PitchResult::Strike);
        events.extend(run(10, 10, "fastball", "0-0", PitchResult::Ball));
        let sorted = chronological(&events);
        assert_eq!(recent_strike_rate(&sorted, 10), Some(0));
        assert_eq!(recent_strike_rate(&sorted, 20), Some(50));
        assert_eq!(recent_strike_rate(&[], 10), None);
    }

    #[test]
    fn empty_input_yields_no_segments() {
        let segments = segment(&[], &config(), &HeuristicProxy::default());
        assert!(segments.is_empty());
    }

    #[test]
    fn segments_ignore_missing_pitch_types_for_dominance() {
        let mut events = run(0, 15, "fastball", "0-0", PitchResult::Strike);
        for e in events.iter_mut() {
            e.pitch_type = None;
        }
        let segments = segment(&events, &config(), &HeuristicProxy::default());
        assert!(segments[0].dominant_pitch.is_none());
        assert_eq!(segments[0].strike_rate, 100);
    }
}
