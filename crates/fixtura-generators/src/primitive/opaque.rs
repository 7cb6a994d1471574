//! Generators for the unit value and for opaque "any" values.

use std::sync::atomic::{AtomicU64, Ordering};

use fixtura_core::{FixtureError, Generator};

/// `()` generator. Never touches the random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitGenerator;

impl Generator<()> for UnitGenerator {
    fn generate(&self) -> Result<(), FixtureError> {
        Ok(())
    }
}

/// An opaque value whose only property is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opaque {
    id: u64,
}

impl Opaque {
    /// Returns `true` if both values came from the same generator call.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        self == other
    }
}

/// `Opaque` generator handing out a fresh identity on every call.
#[derive(Debug, Default)]
pub struct AnyGenerator {
    next_id: AtomicU64,
}

impl AnyGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Generator<Opaque> for AnyGenerator {
    fn generate(&self) -> Result<Opaque, FixtureError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Ok(Opaque { id })
    }
}
