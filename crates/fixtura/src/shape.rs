//! Output shapes that can be requested by type alone.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::Hash;

use fixtura_core::{FixtureError, Qualifier};

use crate::fixture::Fixture;

/// A value a [`Fixture`] can build from nothing but its type.
///
/// Each impl produces the same value, from the same draws, as the matching
/// generic call on [`Fixture`].
pub trait FixtureShape: Sized {
    /// Builds `Self`. `size` is ignored by shapes without a length.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if a generator the shape
    /// needs is missing.
    fn from_fixture(
        fixture: &Fixture,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<Self, FixtureError>;
}

impl<T: 'static> FixtureShape for Vec<T> {
    fn from_fixture(
        fixture: &Fixture,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<Self, FixtureError> {
        fixture.list_fixture(qualifier, size)
    }
}

impl<T: 'static> FixtureShape for VecDeque<T> {
    fn from_fixture(
        fixture: &Fixture,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<Self, FixtureError> {
        fixture.collection_fixture::<T, Self>(qualifier, size)
    }
}

impl<T: Eq + Hash + 'static> FixtureShape for HashSet<T> {
    fn from_fixture(
        fixture: &Fixture,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<Self, FixtureError> {
        fixture.set_fixture(qualifier, size)
    }
}

impl<T: Ord + 'static> FixtureShape for BTreeSet<T> {
    fn from_fixture(
        fixture: &Fixture,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<Self, FixtureError> {
        fixture.collection_fixture::<T, Self>(qualifier, size)
    }
}

/// Both sides are looked up under the same qualifier.
impl<A: 'static, B: 'static> FixtureShape for (A, B) {
    fn from_fixture(
        fixture: &Fixture,
        qualifier: Option<&Qualifier>,
        _size: Option<usize>,
    ) -> Result<Self, FixtureError> {
        fixture.pair_fixture(qualifier, qualifier)
    }
}

impl<T: 'static> FixtureShape for Option<T> {
    fn from_fixture(
        fixture: &Fixture,
        qualifier: Option<&Qualifier>,
        _size: Option<usize>,
    ) -> Result<Self, FixtureError> {
        fixture.nullable_fixture(qualifier)
    }
}
