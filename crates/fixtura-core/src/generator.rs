//! Generator capability traits.
//!
//! A concrete generator implements `Generator<T>` plus any subset of the
//! other capabilities. Callers probe for the capability they need when they
//! look a generator up, so capability is never implied by type hierarchy.

use crate::error::FixtureError;

/// Borrowed predicate over generated values.
pub type Predicate<'a, T> = &'a dyn Fn(&T) -> bool;

/// Sign constraint for numeric generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Values `>= 0`.
    Positive,
    /// Values `<= 0`.
    Negative,
}

/// Produces values of `T`.
pub trait Generator<T>: Send + Sync {
    /// Generates one value.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the random source fails.
    fn generate(&self) -> Result<T, FixtureError>;
}

/// Produces values of `T` within inclusive bounds.
pub trait RangedGenerator<T: Copy>: Generator<T> {
    /// Generates one value in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` when the random source rejects
    /// the bounds.
    fn generate_in(&self, from: T, to: T) -> Result<T, FixtureError>;

    /// Generates one value in `[from, to]` that satisfies `predicate`.
    ///
    /// Never returns if no value in range satisfies the predicate.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` when the random source rejects
    /// the bounds.
    fn generate_in_matching(
        &self,
        from: T,
        to: T,
        predicate: Predicate<'_, T>,
    ) -> Result<T, FixtureError> {
        retry_until(|| self.generate_in(from, to), predicate)
    }
}

/// Produces numeric values constrained by sign.
pub trait SignedGenerator<T>: Generator<T> {
    /// Generates one value with the requested sign. Zero satisfies both signs.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the random source fails.
    fn generate_signed(&self, sign: Sign) -> Result<T, FixtureError>;

    /// Generates one signed value that satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the random source fails.
    fn generate_signed_matching(
        &self,
        sign: Sign,
        predicate: Predicate<'_, T>,
    ) -> Result<T, FixtureError> {
        retry_until(|| self.generate_signed(sign), predicate)
    }
}

/// Produces values of `T` that satisfy a caller predicate.
pub trait FilterableGenerator<T>: Generator<T> {
    /// Generates values until one satisfies `predicate`.
    ///
    /// There is no retry cap: a predicate that never accepts never returns.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the random source fails.
    fn generate_matching(&self, predicate: Predicate<'_, T>) -> Result<T, FixtureError> {
        retry_until(|| self.generate(), predicate)
    }
}

/// Produces collections `R` of a chosen size.
pub trait ArrayGenerator<R>: Generator<R> {
    /// Generates a collection with exactly `size` elements.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the random source fails.
    fn generate_sized(&self, size: usize) -> Result<R, FixtureError>;
}

/// Produces collections `R` whose elements `E` respect bounds.
///
/// `size` falls back to the default window when `None`; `predicate` is
/// applied per element.
pub trait RangedArrayGenerator<E: Copy, R>: ArrayGenerator<R> {
    /// Every element is drawn from `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` when the random source rejects
    /// the bounds.
    fn generate_in(
        &self,
        from: E,
        to: E,
        size: Option<usize>,
        predicate: Option<Predicate<'_, E>>,
    ) -> Result<R, FixtureError>;

    /// Every element is drawn from one of `ranges`, picked uniformly per
    /// element.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` when `ranges` is empty or the
    /// random source rejects a picked range.
    fn generate_in_any(
        &self,
        ranges: &[(E, E)],
        size: Option<usize>,
        predicate: Option<Predicate<'_, E>>,
    ) -> Result<R, FixtureError>;
}

/// Produces collections `R` whose elements `E` respect a sign.
pub trait SignedArrayGenerator<E, R>: ArrayGenerator<R> {
    /// Every element carries `sign`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the random source fails.
    fn generate_signed(
        &self,
        sign: Sign,
        size: Option<usize>,
        predicate: Option<Predicate<'_, E>>,
    ) -> Result<R, FixtureError>;
}

/// Calls `draw` until `predicate` accepts its value.
///
/// # Errors
///
/// Propagates the first error `draw` returns.
pub fn retry_until<T>(
    mut draw: impl FnMut() -> Result<T, FixtureError>,
    predicate: Predicate<'_, T>,
) -> Result<T, FixtureError> {
    loop {
        let value = draw()?;
        if predicate(&value) {
            return Ok(value);
        }
    }
}
