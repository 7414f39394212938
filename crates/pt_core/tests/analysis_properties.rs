//! Property tests for the analytics core invariants.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use pt_core::analysis::{analyze, assess_fatigue, build_advice, PartitionTally};
use pt_core::models::{BatterSide, Count, PitchEvent, PitchResult};

const PITCH_TYPES: [&str; 4] = ["fastball", "changeup", "curveball", "slider"];
const RESULTS: [PitchResult; 6] = [
    PitchResult::Ball,
    PitchResult::Strike,
    PitchResult::Foul,
    PitchResult::SwingingStrike,
    PitchResult::Hit,
    PitchResult::Out,
];

/// Arbitrary pitch sequences, including out-of-range counts that the model
/// treats as malformed.
fn arb_events() -> impl Strategy<Value = Vec<PitchEvent>> {
    prop::collection::vec(
        (0usize..4, 0u8..5, 0u8..4, 0usize..6, prop::bool::ANY),
        0..80,
    )
    .prop_map(|rows| {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (ty, balls, strikes, result, lefty))| PitchEvent {
                pitcher_id: "p1".into(),
                game_id: "g1".into(),
                inning: (i / 15 + 1) as u8,
                is_top: true,
                outs: (i % 3) as u8,
                count: Count::new(balls, strikes),
                pitch_type: Some(PITCH_TYPES[ty].into()),
                result: Some(RESULTS[result]),
                batter_side: Some(if lefty { BatterSide::L } else { BatterSide::R }),
                timestamp: start + Duration::seconds(i as i64 * 20),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn analysis_is_idempotent(events in arb_events()) {
        prop_assert_eq!(analyze(&events), analyze(&events));
    }

    #[test]
    fn category_counts_sum_to_partition_totals(events in arb_events()) {
        let result = analyze(&events);
        for tally in [&result.pitch_types, &result.first_pitch, &result.results] {
            let sum: usize = tally.categories().iter().map(|c| c.count).sum();
            prop_assert_eq!(sum, tally.total());
        }
        for cell in &result.count_matrix {
            let sum: usize = cell.tally.categories().iter().map(|c| c.count).sum();
            prop_assert_eq!(sum, cell.tally.total());
            prop_assert!(cell.tally.has_data());
        }
    }

    #[test]
    fn percentage_sums_drift_at_most_one_per_category(events in arb_events()) {
        let result = analyze(&events);
        if result.pitch_types.has_data() {
            let shares = result.pitch_types.percentages();
            let sum: i64 = shares.iter().map(|s| s.percentage as i64).sum();
            prop_assert!((sum - 100).unsigned_abs() as usize <= shares.len());
        }
    }

    #[test]
    fn prediction_confidence_matches_dominant_share(events in arb_events()) {
        let result = analyze(&events);
        if let Some(prediction) = &result.predictions.first_pitch {
            let tally = PartitionTally::from_events(
                events
                    .iter()
                    .filter(|e| e.count.map(|c| c.is_first_pitch()).unwrap_or(false)),
                |e| e.pitch_type.clone(),
            );
            let dominant = tally.dominant().unwrap();
            prop_assert_eq!(&prediction.pitch_type, &dominant.category);
            prop_assert_eq!(prediction.confidence, dominant.percentage);
        }
    }

    #[test]
    fn fatigue_score_is_never_negative(events in arb_events()) {
        let assessment = assess_fatigue(&events);
        prop_assert!(assessment.fatigue_score >= 0);
        prop_assert_eq!(&assessment, &assess_fatigue(&events));
        if events.len() < 10 {
            prop_assert!(!assessment.has_data);
            prop_assert!(assessment.indicators.is_empty());
        }
    }

    #[test]
    fn advice_is_pure_and_never_panics(events in arb_events()) {
        let advice = build_advice(&events);
        prop_assert_eq!(&advice, &build_advice(&events));
        prop_assert_eq!(advice.has_data, !events.is_empty());
    }
}
