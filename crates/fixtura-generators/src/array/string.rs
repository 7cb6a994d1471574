//! `String` generator built on the char array generator.

use fixtura_core::{
    ArrayGenerator, FilterableGenerator, FixtureError, Generator, Predicate,
    RangedArrayGenerator,
};

use super::element::CharArrayGenerator;

/// `String` generator.
///
/// Draws a char array exactly as `CharArrayGenerator` does and concatenates
/// it, so a string of unspecified length has 1 to 10 printable characters.
#[derive(Debug)]
pub struct StringGenerator {
    chars: CharArrayGenerator,
}

impl StringGenerator {
    /// Creates a string generator over `chars`.
    #[must_use]
    pub fn new(chars: CharArrayGenerator) -> Self {
        Self { chars }
    }
}

impl Generator<String> for StringGenerator {
    fn generate(&self) -> Result<String, FixtureError> {
        Ok(self.chars.generate()?.into_iter().collect())
    }
}

impl ArrayGenerator<String> for StringGenerator {
    fn generate_sized(&self, size: usize) -> Result<String, FixtureError> {
        Ok(self.chars.generate_sized(size)?.into_iter().collect())
    }
}

impl RangedArrayGenerator<char, String> for StringGenerator {
    fn generate_in(
        &self,
        from: char,
        to: char,
        size: Option<usize>,
        predicate: Option<Predicate<'_, char>>,
    ) -> Result<String, FixtureError> {
        let chars = self.chars.generate_in(from, to, size, predicate)?;
        Ok(chars.into_iter().collect())
    }

    fn generate_in_any(
        &self,
        ranges: &[(char, char)],
        size: Option<usize>,
        predicate: Option<Predicate<'_, char>>,
    ) -> Result<String, FixtureError> {
        let chars = self.chars.generate_in_any(ranges, size, predicate)?;
        Ok(chars.into_iter().collect())
    }
}

impl FilterableGenerator<String> for StringGenerator {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fixtura_core::SharedRandom;
    use fixtura_test_support::StubRandom;

    use super::*;
    use crate::array::ElementArrayGenerator;
    use crate::primitive::CharGenerator;

    fn generator(random: &SharedRandom) -> StringGenerator {
        let element = Arc::new(CharGenerator::new(random.clone()));
        StringGenerator::new(ElementArrayGenerator::new(random.clone(), element))
    }

    #[test]
    fn test_generate_concatenates_chars() {
        let stub = StubRandom::new().with_ints([3, 102, 111, 111]);
        let random = SharedRandom::new(stub.clone());

        assert_eq!(generator(&random).generate().unwrap(), "foo");
        assert_eq!(stub.int_ranges(), vec![(1, 11), (32, 127), (32, 127), (32, 127)]);
    }

    #[test]
    fn test_generate_sized_counts_chars() {
        let random = SharedRandom::seeded(6);

        assert_eq!(generator(&random).generate_sized(12).unwrap().chars().count(), 12);
        assert!(generator(&random).generate_sized(0).unwrap().is_empty());
    }

    #[test]
    fn test_ranged_string_uses_only_range_chars() {
        let random = SharedRandom::seeded(6);

        let value = generator(&random)
            .generate_in('a', 'f', Some(30), None)
            .unwrap();

        assert!(value.chars().all(|c| ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_multi_range_string() {
        let random = SharedRandom::seeded(6);

        let value = generator(&random)
            .generate_in_any(&[('0', '9'), ('A', 'F')], Some(40), None)
            .unwrap();

        assert!(value.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_matching_filters_whole_string() {
        let random = SharedRandom::seeded(6);

        let value = generator(&random)
            .generate_matching(&|s: &String| s.len() > 5)
            .unwrap();

        assert!(value.len() > 5);
    }
}
