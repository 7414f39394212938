//! # Analysis Module
//!
//! The analytics core: pure, deterministic functions from an ordered pitch
//! event list to tendency statistics, predictions, trend segments, a fatigue
//! assessment and a coaching advisory.
//!
//! ## Submodules
//!
//! - `aggregate` - Generic frequency/percentage tallies over partitions
//! - `tendencies` - Tendency snapshot (`analyze`, `analyze_game`)
//! - `prediction` - Sample-size-gated situational predictions
//! - `trend` - Fixed-window segmentation and the heuristic proxy series
//! - `fatigue` - Rule-table fatigue scoring (`assess_fatigue`)
//! - `advisory` - Threshold-driven coaching advisory (`build_advice`)
//!
//! Every function here recomputes from scratch: identical input gives
//! identical output, and nothing is cached between calls.

pub mod advisory;
pub mod aggregate;
pub mod fatigue;
pub mod prediction;
pub mod tendencies;
pub mod trend;

pub use advisory::{build_advice, build_advice_with, CoachingAdvice};
pub use aggregate::{CategoryCount, CategoryShare, Dominant, PartitionTally};
pub use fatigue::{
    assess_fatigue, assess_fatigue_with, FatigueAssessment, FatigueIndicator, Severity,
    WarningLevel,
};
pub use prediction::{predict, Prediction, Predictions};
pub use tendencies::{
    analyze, analyze_game, analyze_game_with, analyze_with, AnalysisResult, GameAnalysis,
    QualityTier,
};
pub use trend::{segment, HeuristicProxy, ProxyModel, TrendSegment};
