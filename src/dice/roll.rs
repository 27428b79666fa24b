//! The result of a single die roll.

use std::fmt;

use crate::dice::source::RandomSource;

/// Error produced when a roll cannot be computed.
#[derive(Debug, thiserror::Error)]
pub enum RollError {
    /// The random source failed to produce a value.
    #[error("random source failed: {0}")]
    Source(String),

    /// The random source produced a value outside the faces of the die.
    #[error("roll value {0} outside {min}..={max}", min = Roll::MIN, max = Roll::MAX)]
    OutOfRange(u8),
}

/// A die face in `1..=6`.
///
/// Immutable once created. The same value feeds the span attribute, the
/// counter label and the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll(u8);

impl Roll {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Validate a raw face value.
    pub fn new(value: u8) -> Result<Self, RollError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RollError::OutOfRange(value))
        }
    }

    /// Draw one roll from `source`.
    pub fn roll(source: &dyn RandomSource) -> Result<Self, RollError> {
        let value = source.uniform_int(Self::MIN, Self::MAX)?;
        Self::new(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
