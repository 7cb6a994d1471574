//! Registration of the compound generators on a `Configuration`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use fixtura::Configuration;
use tracing::debug;
use uuid::Uuid;

use crate::date::DateGenerator;
use crate::datetime::{DateTimeGenerator, UtcDateTimeGenerator};
use crate::delta::TimeDeltaGenerator;
use crate::identifier::UuidGenerator;
use crate::time::TimeGenerator;

/// Adds the compound generators to a [`Configuration`].
pub trait CompoundConfigurationExt: Sized {
    /// Registers unqualified generators for `NaiveDate`, `NaiveTime`,
    /// `NaiveDateTime`, `DateTime<Utc>`, `TimeDelta` and `Uuid`.
    ///
    /// Date-time generators resolve the date and time generators, so those
    /// are registered first.
    #[must_use]
    fn with_compound_generators(self) -> Self;
}

impl CompoundConfigurationExt for Configuration {
    fn with_compound_generators(self) -> Self {
        debug!("registering compound generators");
        self.add_dependent_generator::<NaiveDate, _, _>(
            |_, table| DateGenerator::from_table(table),
            None,
        )
        .add_dependent_generator::<NaiveTime, _, _>(
            |_, table| TimeGenerator::from_table(table),
            None,
        )
        .add_dependent_generator::<NaiveDateTime, _, _>(
            |_, table| DateTimeGenerator::from_table(table),
            None,
        )
        .add_dependent_generator::<DateTime<Utc>, _, _>(
            |_, table| UtcDateTimeGenerator::from_table(table),
            None,
        )
        .add_dependent_generator::<TimeDelta, _, _>(
            |_, table| TimeDeltaGenerator::from_table(table),
            None,
        )
        .add_dependent_generator::<Uuid, _, _>(|_, table| UuidGenerator::from_table(table), None)
    }
}
