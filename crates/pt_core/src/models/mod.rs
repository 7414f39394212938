pub mod pitch;

pub use pitch::{BatterSide, Count, PitchEvent, PitchResult};

#[cfg(test)]
pub(crate) mod fixtures;
