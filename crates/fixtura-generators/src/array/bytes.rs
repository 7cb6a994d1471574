//! `Vec<u8>` generator.

use std::sync::Arc;

use fixtura_core::{
    ArrayGenerator, FixtureError, Generator, Predicate, RangedArrayGenerator, SharedRandom, Sign,
    SignedArrayGenerator,
};

use super::element::ElementArrayGenerator;
use crate::primitive::UByteGenerator;

/// `Vec<u8>` generator.
///
/// Unconstrained buffers come from a single `next_bytes` draw. Ranged and
/// signed requests fall back to per-element draws through `UByteGenerator`.
#[derive(Debug)]
pub struct UByteArrayGenerator {
    random: SharedRandom,
    elements: ElementArrayGenerator<u8, UByteGenerator>,
}

impl UByteArrayGenerator {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub fn new(random: SharedRandom, element: Arc<UByteGenerator>) -> Self {
        Self {
            elements: ElementArrayGenerator::new(random.clone(), element),
            random,
        }
    }
}

impl Generator<Vec<u8>> for UByteArrayGenerator {
    fn generate(&self) -> Result<Vec<u8>, FixtureError> {
        let size = self.random.next_size()?;
        self.generate_sized(size)
    }
}

impl ArrayGenerator<Vec<u8>> for UByteArrayGenerator {
    fn generate_sized(&self, size: usize) -> Result<Vec<u8>, FixtureError> {
        self.random.next_bytes(size)
    }
}

impl RangedArrayGenerator<u8, Vec<u8>> for UByteArrayGenerator {
    fn generate_in(
        &self,
        from: u8,
        to: u8,
        size: Option<usize>,
        predicate: Option<Predicate<'_, u8>>,
    ) -> Result<Vec<u8>, FixtureError> {
        self.elements.generate_in(from, to, size, predicate)
    }

    fn generate_in_any(
        &self,
        ranges: &[(u8, u8)],
        size: Option<usize>,
        predicate: Option<Predicate<'_, u8>>,
    ) -> Result<Vec<u8>, FixtureError> {
        self.elements.generate_in_any(ranges, size, predicate)
    }
}

impl SignedArrayGenerator<u8, Vec<u8>> for UByteArrayGenerator {
    fn generate_signed(
        &self,
        sign: Sign,
        size: Option<usize>,
        predicate: Option<Predicate<'_, u8>>,
    ) -> Result<Vec<u8>, FixtureError> {
        self.elements.generate_signed(sign, size, predicate)
    }
}

#[cfg(test)]
mod tests {
    use fixtura_test_support::StubRandom;

    use super::*;

    fn generator(random: &SharedRandom) -> UByteArrayGenerator {
        UByteArrayGenerator::new(random.clone(), Arc::new(UByteGenerator::new(random.clone())))
    }

    #[test]
    fn test_generate_uses_one_bytes_draw() {
        let stub = StubRandom::new().with_ints([3]).with_bytes([1, 2, 3]);
        let random = SharedRandom::new(stub.clone());

        assert_eq!(generator(&random).generate().unwrap(), vec![1, 2, 3]);
        assert_eq!(stub.draw_count(), 2);
        assert_eq!(stub.int_ranges(), vec![(1, 11)]);
    }

    #[test]
    fn test_generate_sized_zero_is_empty() {
        let random = SharedRandom::seeded(2);

        assert!(generator(&random).generate_sized(0).unwrap().is_empty());
    }

    #[test]
    fn test_ranged_draws_per_element() {
        let random = SharedRandom::seeded(2);

        let values = generator(&random).generate_in(10, 20, Some(64), None).unwrap();

        assert_eq!(values.len(), 64);
        assert!(values.iter().all(|v| (10..=20).contains(v)));
    }
}
