//! Random source abstraction for determinism.
//!
//! Generators never touch an RNG directly. They draw through `RandomSource`,
//! which is seeded in production and stubbed or recorded in tests.

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::FixtureError;

/// Abstraction over uniform random draws.
///
/// Ranged draws enforce their own bounds: `from < until` for the integer
/// variants and `from <= to` for doubles. Callers never pre-validate.
pub trait RandomSource: Send {
    /// A uniformly distributed `i32` over the full range.
    fn next_int(&mut self) -> i32;

    /// A uniformly distributed `i32` in `[from, until)`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` if `until <= from`.
    fn next_int_in(&mut self, from: i32, until: i32) -> Result<i32, FixtureError>;

    /// A uniformly distributed `i64` over the full range.
    fn next_long(&mut self) -> i64;

    /// A uniformly distributed `i64` in `[from, until)`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` if `until <= from`.
    fn next_long_in(&mut self, from: i64, until: i64) -> Result<i64, FixtureError>;

    /// A uniformly distributed `f64` in `[from, to)`, or `from` when both
    /// bounds are equal.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` if `to < from` or the span is not
    /// finite.
    fn next_double_in(&mut self, from: f64, to: f64) -> Result<f64, FixtureError>;

    /// A uniformly distributed `f32` in `[0.0, 1.0)`.
    fn next_float(&mut self) -> f32;

    /// A fair coin flip.
    fn next_boolean(&mut self) -> bool;

    /// `n` uniformly distributed bytes.
    fn next_bytes(&mut self, n: usize) -> Vec<u8>;
}

/// Production source backed by a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Creates a source whose stream is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_int(&mut self) -> i32 {
        self.rng.random()
    }

    fn next_int_in(&mut self, from: i32, until: i32) -> Result<i32, FixtureError> {
        if until <= from {
            return Err(FixtureError::invalid_range(from, until));
        }
        Ok(self.rng.random_range(from..until))
    }

    fn next_long(&mut self) -> i64 {
        self.rng.random()
    }

    fn next_long_in(&mut self, from: i64, until: i64) -> Result<i64, FixtureError> {
        if until <= from {
            return Err(FixtureError::invalid_range(from, until));
        }
        Ok(self.rng.random_range(from..until))
    }

    #[allow(clippy::float_cmp)]
    fn next_double_in(&mut self, from: f64, to: f64) -> Result<f64, FixtureError> {
        if from == to {
            return Ok(from);
        }
        if from.is_finite() && to.is_finite() && from < to && (to - from).is_infinite() {
            // The span overflows; draw over half of it and scale back up.
            let half = Uniform::new(0.0, to / 2.0 - from / 2.0)
                .map_err(|_| FixtureError::invalid_range(from, to))?;
            return Ok(2.0_f64.mul_add(half.sample(&mut self.rng), from).min(to));
        }
        let uniform =
            Uniform::new(from, to).map_err(|_| FixtureError::invalid_range(from, to))?;
        Ok(uniform.sample(&mut self.rng))
    }

    fn next_float(&mut self) -> f32 {
        self.rng.random()
    }

    fn next_boolean(&mut self) -> bool {
        self.rng.random()
    }

    fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut bytes = vec![0_u8; n];
        self.rng.fill(bytes.as_mut_slice());
        bytes
    }
}
