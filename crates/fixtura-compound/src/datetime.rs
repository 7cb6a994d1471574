//! `NaiveDateTime` and `DateTime<Utc>` generators.
//!
//! Both are composed from other compound generators, so they must be
//! registered after the date and time generators they resolve.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use fixtura_core::{
    FilterableGenerator, FixtureError, Generator, GeneratorEntry, GeneratorTable, IntoEntry,
    RangedGenerator, TypeKey,
};

use crate::time::day_bounds;

/// Date-times built from one date draw followed by one time draw.
///
/// A ranged request first picks a date between the bounds' dates, then a
/// time narrowed to the bounds on the first and last day.
pub struct DateTimeGenerator {
    dates: Arc<dyn RangedGenerator<NaiveDate>>,
    times: Arc<dyn RangedGenerator<NaiveTime>>,
}

impl DateTimeGenerator {
    /// Creates a generator over `dates` and `times`.
    #[must_use]
    pub fn new(
        dates: Arc<dyn RangedGenerator<NaiveDate>>,
        times: Arc<dyn RangedGenerator<NaiveTime>>,
    ) -> Self {
        Self { dates, times }
    }

    /// Resolves the `NaiveDate` and `NaiveTime` generators from `table`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if either is not registered
    /// with a ranged capability.
    pub fn from_table(table: &GeneratorTable) -> Result<Self, FixtureError> {
        Ok(Self::new(
            table.resolve::<dyn RangedGenerator<NaiveDate>>(&TypeKey::of::<NaiveDate>())?,
            table.resolve::<dyn RangedGenerator<NaiveTime>>(&TypeKey::of::<NaiveTime>())?,
        ))
    }
}

impl Generator<NaiveDateTime> for DateTimeGenerator {
    fn generate(&self) -> Result<NaiveDateTime, FixtureError> {
        let date = self.dates.generate()?;
        Ok(date.and_time(self.times.generate()?))
    }
}

impl RangedGenerator<NaiveDateTime> for DateTimeGenerator {
    fn generate_in(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<NaiveDateTime, FixtureError> {
        let date = self.dates.generate_in(from.date(), to.date())?;
        let (midnight, last) = day_bounds()?;
        let earliest = if date == from.date() { from.time() } else { midnight };
        let latest = if date == to.date() { to.time() } else { last };
        Ok(date.and_time(self.times.generate_in(earliest, latest)?))
    }
}

impl FilterableGenerator<NaiveDateTime> for DateTimeGenerator {}

impl IntoEntry<NaiveDateTime> for DateTimeGenerator {
    fn into_entry(self) -> GeneratorEntry {
        let generator = Arc::new(self);
        GeneratorEntry::new::<NaiveDateTime>(generator.clone())
            .with_ranged::<NaiveDateTime>(generator.clone())
            .with_filterable::<NaiveDateTime>(generator)
    }
}

/// UTC timestamps over the `NaiveDateTime` generator.
pub struct UtcDateTimeGenerator {
    naive: Arc<dyn RangedGenerator<NaiveDateTime>>,
}

impl UtcDateTimeGenerator {
    /// Creates a generator over `naive`.
    #[must_use]
    pub fn new(naive: Arc<dyn RangedGenerator<NaiveDateTime>>) -> Self {
        Self { naive }
    }

    /// Resolves the `NaiveDateTime` generator from `table`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if it is not registered with
    /// a ranged capability.
    pub fn from_table(table: &GeneratorTable) -> Result<Self, FixtureError> {
        Ok(Self::new(table.resolve::<dyn RangedGenerator<NaiveDateTime>>(
            &TypeKey::of::<NaiveDateTime>(),
        )?))
    }
}

impl Generator<DateTime<Utc>> for UtcDateTimeGenerator {
    fn generate(&self) -> Result<DateTime<Utc>, FixtureError> {
        Ok(self.naive.generate()?.and_utc())
    }
}

impl RangedGenerator<DateTime<Utc>> for UtcDateTimeGenerator {
    fn generate_in(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, FixtureError> {
        Ok(self
            .naive
            .generate_in(from.naive_utc(), to.naive_utc())?
            .and_utc())
    }
}

impl FilterableGenerator<DateTime<Utc>> for UtcDateTimeGenerator {}

impl IntoEntry<DateTime<Utc>> for UtcDateTimeGenerator {
    fn into_entry(self) -> GeneratorEntry {
        let generator = Arc::new(self);
        GeneratorEntry::new::<DateTime<Utc>>(generator.clone())
            .with_ranged::<DateTime<Utc>>(generator.clone())
            .with_filterable::<DateTime<Utc>>(generator)
    }
}
