//! Random number sources.

use rand::Rng;

use crate::dice::roll::RollError;

/// Uniform integer generator with inclusive bounds.
pub trait RandomSource: Send + Sync {
    fn uniform_int(&self, low: u8, high: u8) -> Result<u8, RollError>;
}

/// Source backed by the thread-local `rand` generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn uniform_int(&self, low: u8, high: u8) -> Result<u8, RollError> {
        if low > high {
            return Err(RollError::Source(format!("empty range {}..={}", low, high)));
        }
        Ok(rand::thread_rng().gen_range(low..=high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_bounds() {
        let source = ThreadRngSource;
        for _ in 0..500 {
            let v = source.uniform_int(1, 6).unwrap();
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(ThreadRngSource.uniform_int(6, 1).is_err());
    }
}
