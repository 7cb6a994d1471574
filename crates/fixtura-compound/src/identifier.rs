//! `Uuid` generator.

use std::sync::Arc;

use fixtura_core::{
    FilterableGenerator, FixtureError, Generator, GeneratorEntry, GeneratorTable, IntoEntry,
    TypeKey,
};
use uuid::Uuid;

/// UUIDs assembled from two `u64` draws, high word first. The bits are taken
/// as drawn, so the result carries no particular version or variant.
pub struct UuidGenerator {
    words: Arc<dyn Generator<u64>>,
}

impl UuidGenerator {
    /// Creates a generator over `words`.
    #[must_use]
    pub fn new(words: Arc<dyn Generator<u64>>) -> Self {
        Self { words }
    }

    /// Resolves the built-in `u64` generator from `table`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if `u64` has no generator.
    pub fn from_table(table: &GeneratorTable) -> Result<Self, FixtureError> {
        Ok(Self::new(
            table.resolve::<dyn Generator<u64>>(&TypeKey::of::<u64>())?,
        ))
    }
}

impl Generator<Uuid> for UuidGenerator {
    fn generate(&self) -> Result<Uuid, FixtureError> {
        let high = self.words.generate()?;
        let low = self.words.generate()?;
        Ok(Uuid::from_u64_pair(high, low))
    }
}

impl FilterableGenerator<Uuid> for UuidGenerator {}

impl IntoEntry<Uuid> for UuidGenerator {
    fn into_entry(self) -> GeneratorEntry {
        let generator = Arc::new(self);
        GeneratorEntry::new::<Uuid>(generator.clone()).with_filterable::<Uuid>(generator)
    }
}
