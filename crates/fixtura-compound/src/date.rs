//! `NaiveDate` generator.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use fixtura_core::{
    FilterableGenerator, FixtureError, Generator, GeneratorEntry, GeneratorTable, IntoEntry,
    RangedGenerator, TypeKey,
};

fn date_of(days: i32) -> Result<NaiveDate, FixtureError> {
    NaiveDate::from_num_days_from_ce_opt(days)
        .ok_or_else(|| FixtureError::invalid_range(NaiveDate::MIN, NaiveDate::MAX))
}

/// Calendar dates across chrono's whole supported range, drawn through the
/// `i32` ranged generator as days from the common era.
pub struct DateGenerator {
    days: Arc<dyn RangedGenerator<i32>>,
}

impl DateGenerator {
    /// Creates a generator over `days`.
    #[must_use]
    pub fn new(days: Arc<dyn RangedGenerator<i32>>) -> Self {
        Self { days }
    }

    /// Resolves the built-in `i32` generator from `table`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if `i32` has no ranged
    /// generator.
    pub fn from_table(table: &GeneratorTable) -> Result<Self, FixtureError> {
        Ok(Self::new(
            table.resolve::<dyn RangedGenerator<i32>>(&TypeKey::of::<i32>())?,
        ))
    }
}

impl Generator<NaiveDate> for DateGenerator {
    fn generate(&self) -> Result<NaiveDate, FixtureError> {
        self.generate_in(NaiveDate::MIN, NaiveDate::MAX)
    }
}

impl RangedGenerator<NaiveDate> for DateGenerator {
    fn generate_in(&self, from: NaiveDate, to: NaiveDate) -> Result<NaiveDate, FixtureError> {
        date_of(
            self.days
                .generate_in(from.num_days_from_ce(), to.num_days_from_ce())?,
        )
    }
}

impl FilterableGenerator<NaiveDate> for DateGenerator {}

impl IntoEntry<NaiveDate> for DateGenerator {
    fn into_entry(self) -> GeneratorEntry {
        let generator = Arc::new(self);
        GeneratorEntry::new::<NaiveDate>(generator.clone())
            .with_ranged::<NaiveDate>(generator.clone())
            .with_filterable::<NaiveDate>(generator)
    }
}
