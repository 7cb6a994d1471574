//! Floating point generators.

use fixtura_core::{
    FilterableGenerator, FixtureError, Generator, RangedGenerator, SharedRandom, Sign,
    SignedGenerator,
};

/// Draws a magnitude in `[0, max]`.
///
/// The source only yields `[0, max)`; a coin flip decides whether the open
/// end sits at `max` or at zero, so both ends are reachable.
fn magnitude(random: &SharedRandom, max: f64) -> Result<f64, FixtureError> {
    let drawn = random.next_double_in(0.0, max)?;
    if random.next_boolean()? {
        Ok(drawn)
    } else {
        Ok(max - drawn)
    }
}

fn signed_double(random: &SharedRandom, sign: Sign, max: f64) -> Result<f64, FixtureError> {
    let value = magnitude(random, max)?;
    Ok(match sign {
        Sign::Positive => value,
        Sign::Negative => -value,
    })
}

/// `f32` generator.
///
/// A plain draw composes an integer part from `next_int` with a fractional
/// part from `next_float`.
#[derive(Debug, Clone)]
pub struct FloatGenerator {
    random: SharedRandom,
}

impl FloatGenerator {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub fn new(random: SharedRandom) -> Self {
        Self { random }
    }
}

impl Generator<f32> for FloatGenerator {
    #[allow(clippy::cast_precision_loss)]
    fn generate(&self) -> Result<f32, FixtureError> {
        let whole = self.random.next_int()? as f32;
        Ok(whole + self.random.next_float()?)
    }
}

impl RangedGenerator<f32> for FloatGenerator {
    #[allow(clippy::cast_possible_truncation)]
    fn generate_in(&self, from: f32, to: f32) -> Result<f32, FixtureError> {
        let value = self
            .random
            .next_double_in(f64::from(from), f64::from(to))?;
        Ok(value as f32)
    }
}

impl SignedGenerator<f32> for FloatGenerator {
    #[allow(clippy::cast_possible_truncation)]
    fn generate_signed(&self, sign: Sign) -> Result<f32, FixtureError> {
        let value = signed_double(&self.random, sign, f64::from(f32::MAX))?;
        Ok(value as f32)
    }
}

impl FilterableGenerator<f32> for FloatGenerator {}

/// `f64` generator.
///
/// A plain draw composes an integer part from `next_long` with a fractional
/// part drawn from `[0, 1)`.
#[derive(Debug, Clone)]
pub struct DoubleGenerator {
    random: SharedRandom,
}

impl DoubleGenerator {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub fn new(random: SharedRandom) -> Self {
        Self { random }
    }
}

impl Generator<f64> for DoubleGenerator {
    #[allow(clippy::cast_precision_loss)]
    fn generate(&self) -> Result<f64, FixtureError> {
        let whole = self.random.next_long()? as f64;
        Ok(whole + self.random.next_double_in(0.0, 1.0)?)
    }
}

impl RangedGenerator<f64> for DoubleGenerator {
    fn generate_in(&self, from: f64, to: f64) -> Result<f64, FixtureError> {
        self.random.next_double_in(from, to)
    }
}

impl SignedGenerator<f64> for DoubleGenerator {
    fn generate_signed(&self, sign: Sign) -> Result<f64, FixtureError> {
        signed_double(&self.random, sign, f64::MAX)
    }
}

impl FilterableGenerator<f64> for DoubleGenerator {}

#[cfg(test)]
mod tests {
    use fixtura_test_support::StubRandom;

    use super::*;

    #[test]
    fn test_float_generate_adds_fraction_to_whole_part() {
        let stub = StubRandom::new().with_ints([12]).with_floats([0.5]);
        let generator = FloatGenerator::new(SharedRandom::new(stub));

        assert!((generator.generate().unwrap() - 12.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_double_generate_adds_fraction_to_whole_part() {
        let stub = StubRandom::new().with_longs([-3]).with_doubles([0.25]);
        let generator = DoubleGenerator::new(SharedRandom::new(stub.clone()));

        assert!((generator.generate().unwrap() + 2.75).abs() < f64::EPSILON);
        assert_eq!(stub.double_ranges(), vec![(0.0, 1.0)]);
    }

    #[test]
    fn test_double_ranged_stays_in_bounds() {
        let generator = DoubleGenerator::new(SharedRandom::seeded(9));

        for _ in 0..1000 {
            let value = generator.generate_in(-1.5, 2.5).unwrap();
            assert!((-1.5..=2.5).contains(&value));
        }
    }

    #[test]
    fn test_float_ranged_stays_in_bounds() {
        let generator = FloatGenerator::new(SharedRandom::seeded(9));

        for _ in 0..1000 {
            let value = generator.generate_in(0.1, 0.2).unwrap();
            assert!((0.1..=0.2).contains(&value));
        }
    }

    #[test]
    fn test_inverted_range_propagates_invalid_range() {
        let generator = DoubleGenerator::new(SharedRandom::seeded(9));

        assert!(matches!(
            generator.generate_in(1.0, -1.0),
            Err(FixtureError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_signed_values_respect_sign() {
        let random = SharedRandom::seeded(9);
        let doubles = DoubleGenerator::new(random.clone());
        let floats = FloatGenerator::new(random);

        for _ in 0..1000 {
            assert!(doubles.generate_signed(Sign::Positive).unwrap() >= 0.0);
            assert!(doubles.generate_signed(Sign::Negative).unwrap() <= 0.0);
            assert!(floats.generate_signed(Sign::Positive).unwrap() >= 0.0);
            assert!(floats.generate_signed(Sign::Negative).unwrap() <= 0.0);
        }
    }

    #[test]
    fn test_signed_coin_flip_can_reach_boundary() {
        let stub = StubRandom::new()
            .with_doubles([0.0, 0.0])
            .with_booleans([true, false]);
        let generator = DoubleGenerator::new(SharedRandom::new(stub.clone()));

        assert!(generator.generate_signed(Sign::Negative).unwrap().abs() < f64::EPSILON);
        assert!((generator.generate_signed(Sign::Positive).unwrap() - f64::MAX).abs() < 1.0);
        assert_eq!(stub.double_ranges(), vec![(0.0, f64::MAX), (0.0, f64::MAX)]);
    }

    #[test]
    fn test_matching_returns_accepted_value() {
        let generator = DoubleGenerator::new(SharedRandom::seeded(9));

        let value = generator
            .generate_matching(&|v: &f64| *v > 0.0)
            .unwrap();

        assert!(value > 0.0);
    }
}
