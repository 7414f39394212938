//! Pitch event model.
//!
//! Events arrive from an external capture layer and are treated as immutable.
//! The analytics core never validates or repairs them: a field that fails to
//! parse becomes `None`, the partitions that need that field skip the event,
//! and the event still counts toward overall totals.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ball-strike state at the moment a pitch is thrown.
///
/// Serialized as `"B-S"` (e.g. `"3-2"`). Balls run 0-3, strikes 0-2;
/// anything outside that range is not a valid count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Count {
    balls: u8,
    strikes: u8,
}

impl Count {
    pub fn new(balls: u8, strikes: u8) -> Option<Self> {
        if balls <= 3 && strikes <= 2 {
            Some(Self { balls, strikes })
        } else {
            None
        }
    }

    /// Parse a `"B-S"` string. Returns `None` for anything malformed.
    pub fn parse(raw: &str) -> Option<Self> {
        let (balls, strikes) = raw.split_once('-')?;
        Self::new(balls.trim().parse().ok()?, strikes.trim().parse().ok()?)
    }

    pub fn balls(&self) -> u8 {
        self.balls
    }

    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    pub fn is_first_pitch(&self) -> bool {
        self.balls == 0 && self.strikes == 0
    }

    pub fn is_three_ball(&self) -> bool {
        self.balls == 3
    }

    pub fn is_two_strike(&self) -> bool {
        self.strikes == 2
    }

    /// Pitcher ahead: more strikes than balls.
    pub fn is_ahead(&self) -> bool {
        self.strikes > self.balls
    }

    /// Pitcher behind: more balls than strikes.
    pub fn is_behind(&self) -> bool {
        self.balls > self.strikes
    }

    pub fn is_even(&self) -> bool {
        self.balls == self.strikes
    }

    /// All twelve counts in balls-major order: 0-0, 0-1, 0-2, 1-0, ...
    ///
    /// This is the canonical enumeration order used wherever counts are
    /// scanned, so "first encountered" is well defined.
    pub fn all() -> impl Iterator<Item = Count> {
        (0..=3u8).flat_map(|balls| (0..=2u8).map(move |strikes| Count { balls, strikes }))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}

impl Serialize for Count {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Count::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid count: {raw:?}")))
    }
}

/// Outcome of a single pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchResult {
    Ball,
    Strike,
    Foul,
    SwingingStrike,
    Hit,
    Out,
}

impl PitchResult {
    /// Everything that counts toward the strike rate: called strikes, fouls,
    /// swinging strikes and balls put in play for outs.
    pub fn is_strike_like(&self) -> bool {
        matches!(
            self,
            PitchResult::Strike | PitchResult::Foul | PitchResult::SwingingStrike | PitchResult::Out
        )
    }

    /// Batter made contact: fouls, hits and in-play outs.
    pub fn is_contact(&self) -> bool {
        matches!(self, PitchResult::Foul | PitchResult::Hit | PitchResult::Out)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ball" => Some(PitchResult::Ball),
            "strike" => Some(PitchResult::Strike),
            "foul" => Some(PitchResult::Foul),
            "swinging_strike" => Some(PitchResult::SwingingStrike),
            "hit" => Some(PitchResult::Hit),
            "out" => Some(PitchResult::Out),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PitchResult::Ball => "ball",
            PitchResult::Strike => "strike",
            PitchResult::Foul => "foul",
            PitchResult::SwingingStrike => "swinging_strike",
            PitchResult::Hit => "hit",
            PitchResult::Out => "out",
        }
    }
}

/// Which side of the plate the batter stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatterSide {
    L,
    R,
}

impl BatterSide {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "L" | "l" => Some(BatterSide::L),
            "R" | "r" => Some(BatterSide::R),
            _ => None,
        }
    }
}

/// One observed pitch, as supplied by the capture layer.
///
/// `count`, `pitch_type`, `result` and `batter_side` are optional: a
/// malformed or missing value is carried as `None` rather than rejecting the
/// event, and only the partitions that need the field exclude it.
/// `timestamp` is used solely for chronological ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchEvent {
    pub pitcher_id: String,
    pub game_id: String,
    pub inning: u8,
    #[serde(default)]
    pub is_top: bool,
    pub outs: u8,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: Option<Count>,
    #[serde(default)]
    pub pitch_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_result")]
    pub result: Option<PitchResult>,
    #[serde(default, deserialize_with = "lenient_side")]
    pub batter_side: Option<BatterSide>,
    pub timestamp: DateTime<Utc>,
}

impl PitchEvent {
    pub fn is_strike_like(&self) -> bool {
        self.result.map(|r| r.is_strike_like()).unwrap_or(false)
    }
}

// Lenient field deserializers: a value that fails to parse becomes `None`
// instead of failing the whole event load.

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Count>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Count::parse))
}

fn lenient_result<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<PitchResult>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PitchResult::parse))
}

fn lenient_side<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BatterSide>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(BatterSide::parse))
}
