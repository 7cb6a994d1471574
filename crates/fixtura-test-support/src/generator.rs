//! Test generators — fixed-output `Generator` implementations for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fixtura_core::{FixtureError, Generator};

/// Always returns the same value and counts its invocations.
///
/// Clones share the counter.
#[derive(Debug, Clone)]
pub struct ConstantGenerator<T> {
    value: T,
    calls: Arc<AtomicUsize>,
}

impl<T> ConstantGenerator<T> {
    /// Creates a generator returning `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `generate` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: Clone + Send + Sync> Generator<T> for ConstantGenerator<T> {
    fn generate(&self) -> Result<T, FixtureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.value.clone())
    }
}

/// Returns its values in order, starting over after the last one.
///
/// Panics on `generate` if constructed with no values.
#[derive(Debug)]
pub struct CyclingGenerator<T> {
    values: Vec<T>,
    position: AtomicUsize,
}

impl<T> CyclingGenerator<T> {
    /// Creates a generator cycling through `values`.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            position: AtomicUsize::new(0),
        }
    }
}

impl<T: Clone + Send + Sync> Generator<T> for CyclingGenerator<T> {
    fn generate(&self) -> Result<T, FixtureError> {
        let position = self.position.fetch_add(1, Ordering::SeqCst);
        Ok(self.values[position % self.values.len()].clone())
    }
}
