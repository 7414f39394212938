//! # pt_core - Deterministic Pitch Tendency & Fatigue Analytics
//!
//! This library converts a sequence of discrete pitch observations into
//! situational tendency statistics, segmented trend signals and
//! confidence-gated recommendations usable for live in-game decisions.
//!
//! ## Properties
//! - 100% deterministic: identical input always gives identical output
//! - Works on small, noisy samples and degrades gracefully instead of
//!   guessing when a partition is too thin
//! - Pure functions over a fully materialized event list; no shared state,
//!   no caching, O(n log n) per analysis in the scoped event count
//! - JSON API for easy integration with host applications

pub mod analysis;
pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod models;

// Re-export the main entry points.
pub use analysis::{
    analyze, analyze_game, assess_fatigue, build_advice, AnalysisResult, CoachingAdvice,
    FatigueAssessment, GameAnalysis, HeuristicProxy, ProxyModel, QualityTier, WarningLevel,
};
pub use api::{
    analyze_game_json, analyze_pitcher_json, assess_fatigue_json, coaching_advice_json,
    SCHEMA_VERSION,
};
pub use config::AnalysisConfig;
pub use data::{EventStore, InMemoryEventStore};
pub use error::{CoreError, Result};
pub use models::{BatterSide, Count, PitchEvent, PitchResult};
