//! `TimeDelta` generator.

use std::sync::Arc;

use chrono::TimeDelta;
use fixtura_core::{
    FilterableGenerator, FixtureError, Generator, GeneratorEntry, GeneratorTable, IntoEntry,
    RangedGenerator, Sign, SignedGenerator, TypeKey,
};

/// Largest representable delta, in milliseconds. The negative limit mirrors it.
const MAX_MILLIS: i64 = i64::MAX;

fn delta_of(millis: i64) -> Result<TimeDelta, FixtureError> {
    TimeDelta::try_milliseconds(millis)
        .ok_or_else(|| FixtureError::invalid_range(-MAX_MILLIS, MAX_MILLIS))
}

/// Whole milliseconds at or above `delta`.
fn millis_at_or_above(delta: TimeDelta) -> i64 {
    let millis = delta.num_milliseconds();
    if TimeDelta::try_milliseconds(millis).is_some_and(|whole| whole < delta) {
        millis + 1
    } else {
        millis
    }
}

/// Whole milliseconds at or below `delta`.
fn millis_at_or_below(delta: TimeDelta) -> i64 {
    let millis = delta.num_milliseconds();
    if TimeDelta::try_milliseconds(millis).is_some_and(|whole| whole > delta) {
        millis - 1
    } else {
        millis
    }
}

/// Durations drawn through the `i64` ranged generator.
///
/// Unbounded and signed draws have millisecond precision. Ranged draws use
/// nanoseconds when both bounds fit in an `i64` of nanoseconds, and
/// otherwise whole milliseconds inside the bounds.
pub struct TimeDeltaGenerator {
    longs: Arc<dyn RangedGenerator<i64>>,
}

impl TimeDeltaGenerator {
    /// Creates a generator over `longs`.
    #[must_use]
    pub fn new(longs: Arc<dyn RangedGenerator<i64>>) -> Self {
        Self { longs }
    }

    /// Resolves the built-in `i64` generator from `table`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if `i64` has no ranged
    /// generator.
    pub fn from_table(table: &GeneratorTable) -> Result<Self, FixtureError> {
        Ok(Self::new(
            table.resolve::<dyn RangedGenerator<i64>>(&TypeKey::of::<i64>())?,
        ))
    }

    fn draw(&self, from: i64, to: i64) -> Result<TimeDelta, FixtureError> {
        delta_of(self.longs.generate_in(from, to)?)
    }
}

impl Generator<TimeDelta> for TimeDeltaGenerator {
    fn generate(&self) -> Result<TimeDelta, FixtureError> {
        self.draw(-MAX_MILLIS, MAX_MILLIS)
    }
}

impl RangedGenerator<TimeDelta> for TimeDeltaGenerator {
    fn generate_in(&self, from: TimeDelta, to: TimeDelta) -> Result<TimeDelta, FixtureError> {
        if let (Some(low), Some(high)) = (from.num_nanoseconds(), to.num_nanoseconds()) {
            return Ok(TimeDelta::nanoseconds(self.longs.generate_in(low, high)?));
        }
        self.draw(millis_at_or_above(from), millis_at_or_below(to))
    }
}

impl SignedGenerator<TimeDelta> for TimeDeltaGenerator {
    fn generate_signed(&self, sign: Sign) -> Result<TimeDelta, FixtureError> {
        match sign {
            Sign::Positive => self.draw(0, MAX_MILLIS),
            Sign::Negative => self.draw(-MAX_MILLIS, 0),
        }
    }
}

impl FilterableGenerator<TimeDelta> for TimeDeltaGenerator {}

impl IntoEntry<TimeDelta> for TimeDeltaGenerator {
    fn into_entry(self) -> GeneratorEntry {
        let generator = Arc::new(self);
        GeneratorEntry::new::<TimeDelta>(generator.clone())
            .with_ranged::<TimeDelta>(generator.clone())
            .with_signed::<TimeDelta>(generator.clone())
            .with_filterable::<TimeDelta>(generator)
    }
}

#[cfg(test)]
mod tests {
    use fixtura::{Configuration, Fixture};
    use fixtura_test_support::StubRandom;

    use super::*;
    use crate::CompoundConfigurationExt;

    fn seeded(seed: u64) -> Fixture {
        Configuration::new(seed)
            .with_compound_generators()
            .build()
            .unwrap()
    }

    #[test]
    fn test_generate_spans_the_full_delta_range() {
        // The upper bound overflows, so the window shifts down by one.
        let stub = StubRandom::new().with_longs([1_499]);
        let fixture = Configuration::new(0)
            .with_random_source(stub.clone())
            .with_compound_generators()
            .build()
            .unwrap();

        let delta = fixture.fixture::<TimeDelta>(None).unwrap();

        assert_eq!(delta, TimeDelta::try_milliseconds(1_500).unwrap());
        assert_eq!(stub.long_ranges(), vec![(i64::MIN, i64::MAX)]);
    }

    #[test]
    fn test_generate_in_stays_in_bounds() {
        let fixture = seeded(90);
        let (from, to) = (
            TimeDelta::try_seconds(-5).unwrap(),
            TimeDelta::try_seconds(5).unwrap(),
        );

        for _ in 0..500 {
            let delta = fixture.fixture_in::<TimeDelta>(from, to, None).unwrap();
            assert!((from..=to).contains(&delta));
        }
    }

    #[test]
    fn test_generate_in_sub_millisecond_bounds_stays_in_bounds() {
        let fixture = seeded(90);
        let (from, to) = (
            TimeDelta::microseconds(1_500),
            TimeDelta::microseconds(1_900),
        );

        for _ in 0..100 {
            let delta = fixture.fixture_in::<TimeDelta>(from, to, None).unwrap();
            assert!((from..=to).contains(&delta), "{delta} not in [{from}, {to}]");
        }
    }

    #[test]
    fn test_generate_in_draws_nanoseconds_for_short_bounds() {
        let stub = StubRandom::new().with_longs([1_700_000]);
        let fixture = Configuration::new(0)
            .with_random_source(stub.clone())
            .with_compound_generators()
            .build()
            .unwrap();

        let delta = fixture
            .fixture_in::<TimeDelta>(
                TimeDelta::microseconds(1_500),
                TimeDelta::microseconds(1_900),
                None,
            )
            .unwrap();

        assert_eq!(delta, TimeDelta::microseconds(1_700));
        assert_eq!(stub.long_ranges(), vec![(1_500_000, 1_900_001)]);
    }

    #[test]
    fn test_generate_in_long_bounds_round_toward_the_inside() {
        let span = TimeDelta::try_days(200_000).unwrap();
        let extra = TimeDelta::microseconds(1_500);
        let (from, to) = (-span - extra, span + extra);
        let stub = StubRandom::new().with_longs([-17_280_000_000_001]);
        let fixture = Configuration::new(0)
            .with_random_source(stub.clone())
            .with_compound_generators()
            .build()
            .unwrap();

        let delta = fixture.fixture_in::<TimeDelta>(from, to, None).unwrap();

        assert_eq!(delta, TimeDelta::try_milliseconds(-17_280_000_000_001).unwrap());
        assert!((from..=to).contains(&delta));
        assert_eq!(
            stub.long_ranges(),
            vec![(-17_280_000_000_001, 17_280_000_000_002)]
        );
    }

    #[test]
    fn test_whole_millis_round_toward_the_inside() {
        let positive = TimeDelta::microseconds(1_500);
        let negative = TimeDelta::microseconds(-1_500);

        assert_eq!(millis_at_or_above(positive), 2);
        assert_eq!(millis_at_or_below(positive), 1);
        assert_eq!(millis_at_or_above(negative), -1);
        assert_eq!(millis_at_or_below(negative), -2);
        assert_eq!(millis_at_or_above(TimeDelta::MAX), i64::MAX);
        assert_eq!(millis_at_or_below(TimeDelta::MIN), -i64::MAX);
    }

    #[test]
    fn test_signed_deltas() {
        let fixture = seeded(90);

        for _ in 0..200 {
            let positive = fixture.fixture_signed::<TimeDelta>(Sign::Positive, None).unwrap();
            let negative = fixture.fixture_signed::<TimeDelta>(Sign::Negative, None).unwrap();
            assert!(positive >= TimeDelta::zero());
            assert!(negative <= TimeDelta::zero());
        }
    }

    #[test]
    fn test_signed_matching_deltas() {
        let fixture = seeded(90);

        let delta = fixture
            .fixture_signed_matching::<TimeDelta>(
                Sign::Negative,
                |d| d.num_days() < -1,
                None,
            )
            .unwrap();

        assert!(delta.num_days() < -1);
    }
}
