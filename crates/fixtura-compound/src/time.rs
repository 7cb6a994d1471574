//! `NaiveTime` generator.

use std::sync::Arc;

use chrono::{NaiveTime, Timelike};
use fixtura_core::{
    FilterableGenerator, FixtureError, Generator, GeneratorEntry, GeneratorTable, IntoEntry,
    RangedGenerator, TypeKey,
};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Last nanosecond of a day. Leap seconds are never generated.
const LAST_NANO: i64 = 86_400 * NANOS_PER_SECOND - 1;

/// Nanoseconds since midnight, leap seconds folded into the last nanosecond
/// of their second. Used for upper bounds.
fn nanos_of_day(time: NaiveTime) -> i64 {
    let nano = time.nanosecond().min(999_999_999);
    i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + i64::from(nano)
}

/// Nanoseconds since midnight, leap seconds moved up to the start of the
/// following second. Used for lower bounds; a leap second at the end of the
/// day maps past `LAST_NANO`.
fn nanos_of_day_from(time: NaiveTime) -> i64 {
    if time.nanosecond() >= 1_000_000_000 {
        (i64::from(time.num_seconds_from_midnight()) + 1) * NANOS_PER_SECOND
    } else {
        nanos_of_day(time)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn time_of(nanos: i64) -> Result<NaiveTime, FixtureError> {
    if !(0..=LAST_NANO).contains(&nanos) {
        return Err(FixtureError::invalid_range(0, LAST_NANO + 1));
    }
    let seconds = (nanos / NANOS_PER_SECOND) as u32;
    let nano = (nanos % NANOS_PER_SECOND) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, nano)
        .ok_or_else(|| FixtureError::invalid_range(0, LAST_NANO + 1))
}

/// Midnight and the last nanosecond of the day.
pub(crate) fn day_bounds() -> Result<(NaiveTime, NaiveTime), FixtureError> {
    Ok((time_of(0)?, time_of(LAST_NANO)?))
}

/// Times of day with nanosecond precision, drawn through the `i64` ranged
/// generator as nanoseconds since midnight.
pub struct TimeGenerator {
    nanos: Arc<dyn RangedGenerator<i64>>,
}

impl TimeGenerator {
    /// Creates a generator over `nanos`.
    #[must_use]
    pub fn new(nanos: Arc<dyn RangedGenerator<i64>>) -> Self {
        Self { nanos }
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
}

impl Generator<NaiveTime> for TimeGenerator {
    fn generate(&self) -> Result<NaiveTime, FixtureError> {
        time_of(self.nanos.generate_in(0, LAST_NANO)?)
    }
}

impl RangedGenerator<NaiveTime> for TimeGenerator {
    fn generate_in(&self, from: NaiveTime, to: NaiveTime) -> Result<NaiveTime, FixtureError> {
        time_of(
            self.nanos
                .generate_in(nanos_of_day_from(from), nanos_of_day(to))?,
        )
    }
}

impl FilterableGenerator<NaiveTime> for TimeGenerator {}

impl IntoEntry<NaiveTime> for TimeGenerator {
    fn into_entry(self) -> GeneratorEntry {
        let generator = Arc::new(self);
        GeneratorEntry::new::<NaiveTime>(generator.clone())
            .with_ranged::<NaiveTime>(generator.clone())
            .with_filterable::<NaiveTime>(generator)
    }
}
