//! Dice rolling subsystem.
//!
//! # Data Flow
//! ```text
//! GET /rolldice
//!     → source.rs (RandomSource::uniform_int(1, 6))
//!     → roll.rs (range check, Roll value)
//!     → handler (span attribute, counter label, response body)
//! ```
//!
//! # Design Decisions
//! - A Roll is created once per request and never recomputed
//! - The random source is injected, so tests can pin the outcome
//! - Out-of-range values from a source are errors, not clamped

pub mod roll;
pub mod source;

pub use roll::{Roll, RollError};
pub use source::{RandomSource, ThreadRngSource};
