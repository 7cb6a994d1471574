//! Character generator.

use fixtura_core::{FilterableGenerator, FixtureError, Generator, RangedGenerator, SharedRandom};

use super::integer::int_inclusive;

/// First printable ASCII code point.
const PRINTABLE_FROM: i32 = 32;

/// One past the last printable ASCII code point.
const PRINTABLE_UNTIL: i32 = 127;

/// `char` generator.
///
/// Plain draws stay within printable ASCII. Ranged draws accept any scalar
/// values and redraw code points that fall on surrogates.
#[derive(Debug, Clone)]
pub struct CharGenerator {
    random: SharedRandom,
}

impl CharGenerator {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub fn new(random: SharedRandom) -> Self {
        Self { random }
    }
}

#[allow(clippy::cast_sign_loss)]
fn to_char(code: i32) -> Option<char> {
    char::from_u32(code as u32)
}

#[allow(clippy::cast_possible_wrap)]
fn to_code(value: char) -> i32 {
    u32::from(value) as i32
}

impl Generator<char> for CharGenerator {
    fn generate(&self) -> Result<char, FixtureError> {
        let code = self.random.next_int_in(PRINTABLE_FROM, PRINTABLE_UNTIL)?;
        to_char(code).ok_or_else(|| FixtureError::invalid_range(PRINTABLE_FROM, PRINTABLE_UNTIL))
    }
}

impl RangedGenerator<char> for CharGenerator {
    fn generate_in(&self, from: char, to: char) -> Result<char, FixtureError> {
        loop {
            let code = int_inclusive(&self.random, to_code(from), to_code(to))?;
            if let Some(value) = to_char(code) {
                return Ok(value);
            }
        }
    }
}

impl FilterableGenerator<char> for CharGenerator {}
