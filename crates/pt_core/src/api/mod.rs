pub mod json_api;

pub use json_api::{
    analyze_game_json, analyze_pitcher_json, assess_fatigue_json, coaching_advice_json,
    AnalysisRequest, SCHEMA_VERSION,
};
