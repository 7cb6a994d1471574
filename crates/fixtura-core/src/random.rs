//! Shared, serialized access to one random stream.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::FixtureError;
use crate::rng::{RandomSource, StdRandomSource};

/// Cloneable handle to a single random stream.
///
/// Every generator of a fixture holds a clone of the same handle, so all of
/// them advance one stream. Each draw locks the underlying source for the
/// duration of that draw only: concurrent callers serialize and never tear
/// the source's state.
#[derive(Clone)]
pub struct SharedRandom {
    source: Arc<Mutex<dyn RandomSource>>,
}

impl SharedRandom {
    /// Wraps an arbitrary source.
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self {
            source: Arc::new(Mutex::new(source)),
        }
    }

    /// A `StdRandomSource` seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRandomSource::seeded(seed))
    }

    fn lock(&self) -> Result<MutexGuard<'_, dyn RandomSource + 'static>, FixtureError> {
        self.source
            .lock()
            .map_err(|e| FixtureError::RandomSourcePoisoned(e.to_string()))
    }

    /// See [`RandomSource::next_int`].
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    pub fn next_int(&self) -> Result<i32, FixtureError> {
        Ok(self.lock()?.next_int())
    }

    /// See [`RandomSource::next_int_in`].
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` if `until <= from`, or
    /// `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    pub fn next_int_in(&self, from: i32, until: i32) -> Result<i32, FixtureError> {
        self.lock()?.next_int_in(from, until)
    }

    /// See [`RandomSource::next_long`].
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    pub fn next_long(&self) -> Result<i64, FixtureError> {
        Ok(self.lock()?.next_long())
    }

    /// See [`RandomSource::next_long_in`].
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` if `until <= from`, or
    /// `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    pub fn next_long_in(&self, from: i64, until: i64) -> Result<i64, FixtureError> {
        self.lock()?.next_long_in(from, until)
    }

    /// See [`RandomSource::next_double_in`].
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` if the bounds are rejected, or
    /// `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    pub fn next_double_in(&self, from: f64, to: f64) -> Result<f64, FixtureError> {
        self.lock()?.next_double_in(from, to)
    }

    /// See [`RandomSource::next_float`].
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    pub fn next_float(&self) -> Result<f32, FixtureError> {
        Ok(self.lock()?.next_float())
    }

    /// See [`RandomSource::next_boolean`].
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    pub fn next_boolean(&self) -> Result<bool, FixtureError> {
        Ok(self.lock()?.next_boolean())
    }

    /// See [`RandomSource::next_bytes`].
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    pub fn next_bytes(&self, n: usize) -> Result<Vec<u8>, FixtureError> {
        Ok(self.lock()?.next_bytes(n))
    }

    /// Draws a collection size from the default window `[1, 10]`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    #[allow(clippy::cast_sign_loss)]
    pub fn next_size(&self) -> Result<usize, FixtureError> {
        let size = self.next_int_in(crate::DEFAULT_SIZE_LOWER, crate::DEFAULT_SIZE_UPPER)?;
        Ok(size as usize)
    }

    /// Resolves an optional explicit size, drawing one when absent.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::RandomSourcePoisoned` if the source mutex is poisoned.
    pub fn size_or_draw(&self, size: Option<usize>) -> Result<usize, FixtureError> {
        match size {
            Some(size) => Ok(size),
            None => self.next_size(),
        }
    }
}

impl fmt::Debug for SharedRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRandom").finish_non_exhaustive()
    }
}
