//! Boolean generator.

use fixtura_core::{FilterableGenerator, FixtureError, Generator, SharedRandom};

/// `bool` generator backed by the source's coin flip.
#[derive(Debug, Clone)]
pub struct BooleanGenerator {
    random: SharedRandom,
}

impl BooleanGenerator {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub fn new(random: SharedRandom) -> Self {
        Self { random }
    }
}

impl Generator<bool> for BooleanGenerator {
    fn generate(&self) -> Result<bool, FixtureError> {
        self.random.next_boolean()
    }
}

impl FilterableGenerator<bool> for BooleanGenerator {}

#[cfg(test)]
mod tests {
    use fixtura_test_support::StubRandom;

    use super::*;

    #[test]
    fn test_generate_returns_coin_flip() {
        let stub = StubRandom::new().with_booleans([true, false]);
        let generator = BooleanGenerator::new(SharedRandom::new(stub));

        assert!(generator.generate().unwrap());
        assert!(!generator.generate().unwrap());
    }

    #[test]
    fn test_matching_retries_until_accepted() {
        let stub = StubRandom::new().with_booleans([false, false, true]);
        let generator = BooleanGenerator::new(SharedRandom::new(stub.clone()));

        assert!(generator.generate_matching(&|v: &bool| *v).unwrap());
        assert_eq!(stub.draw_count(), 3);
    }
}
