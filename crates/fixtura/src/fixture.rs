//! The fixture façade: generator lookup, nullability and collection shapes.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use fixtura_core::{
    ArrayGenerator, FilterableGenerator, FixtureError, Generator, GeneratorTable, Predicate,
    Qualifier, RangedArrayGenerator, RangedGenerator, SharedRandom, Sign, SignedArrayGenerator,
    SignedGenerator, TypeKey,
};

use crate::shape::FixtureShape;

/// Resolves generators from one table and draws from one random stream.
///
/// Clones share the stream and the table. Lookups happen before any draw, so
/// a missing generator never consumes randomness.
#[derive(Debug, Clone)]
pub struct Fixture {
    random: SharedRandom,
    generators: Arc<GeneratorTable>,
}

impl Fixture {
    pub(crate) fn new(random: SharedRandom, generators: Arc<GeneratorTable>) -> Self {
        Self { random, generators }
    }

    /// The random stream every generator of this fixture draws from.
    #[must_use]
    pub fn random(&self) -> &SharedRandom {
        &self.random
    }

    /// The generator table.
    #[must_use]
    pub fn generators(&self) -> &GeneratorTable {
        &self.generators
    }

    fn lookup<C, T>(&self, qualifier: Option<&Qualifier>) -> Result<Arc<C>, FixtureError>
    where
        C: ?Sized + Send + Sync + 'static,
        T: ?Sized + 'static,
    {
        self.generators
            .resolve::<C>(&TypeKey::resolve::<T>(qualifier))
    }

    /// Flips the nullability coin; `true` means the value is skipped.
    fn is_null(&self) -> Result<bool, FixtureError> {
        self.random.next_boolean()
    }

    fn nullable<T>(&self, generator: &dyn Generator<T>) -> Result<Option<T>, FixtureError> {
        if self.is_null()? {
            return Ok(None);
        }
        generator.generate().map(Some)
    }

    // --- scalars ---

    /// Generates a `T`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if no generator is registered
    /// for `T` under `qualifier`.
    pub fn fixture<T: 'static>(&self, qualifier: Option<&Qualifier>) -> Result<T, FixtureError> {
        self.lookup::<dyn Generator<T>, T>(qualifier)?.generate()
    }

    /// Generates a `T` or, when the coin flip comes up `true`, `None` without
    /// calling the generator.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if no generator is registered
    /// for `T` under `qualifier`.
    pub fn nullable_fixture<T: 'static>(
        &self,
        qualifier: Option<&Qualifier>,
    ) -> Result<Option<T>, FixtureError> {
        let generator = self.lookup::<dyn Generator<T>, T>(qualifier)?;
        self.nullable(&*generator)
    }

    /// Generates a `T` in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if the generator for `T` is
    /// not ranged, or `FixtureError::InvalidRange` for bounds the random
    /// source rejects.
    pub fn fixture_in<T: Copy + 'static>(
        &self,
        from: T,
        to: T,
        qualifier: Option<&Qualifier>,
    ) -> Result<T, FixtureError> {
        self.lookup::<dyn RangedGenerator<T>, T>(qualifier)?
            .generate_in(from, to)
    }

    /// Generates a `T` with the given sign.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if the generator for `T` is
    /// not signed.
    pub fn fixture_signed<T: 'static>(
        &self,
        sign: Sign,
        qualifier: Option<&Qualifier>,
    ) -> Result<T, FixtureError> {
        self.lookup::<dyn SignedGenerator<T>, T>(qualifier)?
            .generate_signed(sign)
    }

    /// Generates a `T` satisfying `predicate`. Never returns if no value does.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if the generator for `T` is
    /// not filterable.
    pub fn fixture_matching<T: 'static>(
        &self,
        predicate: impl Fn(&T) -> bool,
        qualifier: Option<&Qualifier>,
    ) -> Result<T, FixtureError> {
        self.lookup::<dyn FilterableGenerator<T>, T>(qualifier)?
            .generate_matching(&predicate)
    }

    /// Generates a `T` in `[from, to]` satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if the generator for `T` is
    /// not both ranged and filterable, or `FixtureError::InvalidRange` for
    /// bounds the random source rejects.
    pub fn fixture_in_matching<T: Copy + 'static>(
        &self,
        from: T,
        to: T,
        predicate: impl Fn(&T) -> bool,
        qualifier: Option<&Qualifier>,
    ) -> Result<T, FixtureError> {
        self.lookup::<dyn FilterableGenerator<T>, T>(qualifier)?;
        self.lookup::<dyn RangedGenerator<T>, T>(qualifier)?
            .generate_in_matching(from, to, &predicate)
    }

    /// Generates a `T` with the given sign satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if the generator for `T` is
    /// not both signed and filterable.
    pub fn fixture_signed_matching<T: 'static>(
        &self,
        sign: Sign,
        predicate: impl Fn(&T) -> bool,
        qualifier: Option<&Qualifier>,
    ) -> Result<T, FixtureError> {
        self.lookup::<dyn FilterableGenerator<T>, T>(qualifier)?;
        self.lookup::<dyn SignedGenerator<T>, T>(qualifier)?
            .generate_signed_matching(sign, &predicate)
    }

    // --- arrays ---

    /// Generates an array `R` of `size` elements, or of a size drawn from
    /// `[1, 10]` when `size` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if no array generator is
    /// registered for `R`.
    pub fn array_fixture<R: 'static>(
        &self,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<R, FixtureError> {
        let generator = self.lookup::<dyn ArrayGenerator<R>, R>(qualifier)?;
        match size {
            Some(size) => generator.generate_sized(size),
            None => generator.generate(),
        }
    }

    /// Generates an array `R` whose elements lie in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if the array generator for
    /// `R` is not ranged over `E`, or `FixtureError::InvalidRange` for bounds
    /// the random source rejects.
    pub fn array_fixture_in<E: Copy + 'static, R: 'static>(
        &self,
        from: E,
        to: E,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
        predicate: Option<Predicate<'_, E>>,
    ) -> Result<R, FixtureError> {
        self.lookup::<dyn RangedArrayGenerator<E, R>, R>(qualifier)?
            .generate_in(from, to, size, predicate)
    }

    /// Generates an array `R` whose elements each lie in one of `ranges`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if the array generator for
    /// `R` is not ranged over `E`, or `FixtureError::InvalidRange` when
    /// `ranges` is empty and at least one element is requested.
    pub fn array_fixture_in_any<E: Copy + 'static, R: 'static>(
        &self,
        ranges: &[(E, E)],
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
        predicate: Option<Predicate<'_, E>>,
    ) -> Result<R, FixtureError> {
        self.lookup::<dyn RangedArrayGenerator<E, R>, R>(qualifier)?
            .generate_in_any(ranges, size, predicate)
    }

    /// Generates an array `R` whose elements all carry `sign`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if the array generator for
    /// `R` is not signed over `E`.
    pub fn array_fixture_signed<E: 'static, R: 'static>(
        &self,
        sign: Sign,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
        predicate: Option<Predicate<'_, E>>,
    ) -> Result<R, FixtureError> {
        self.lookup::<dyn SignedArrayGenerator<E, R>, R>(qualifier)?
            .generate_signed(sign, size, predicate)
    }

    // --- collections ---

    /// Collects `size` generated values, or a size drawn from `[1, 10]`,
    /// into any `C: FromIterator<T>`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if no generator is registered
    /// for `T` under `qualifier`.
    pub fn collection_fixture<T, C>(
        &self,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<C, FixtureError>
    where
        T: 'static,
        C: FromIterator<T>,
    {
        let generator = self.lookup::<dyn Generator<T>, T>(qualifier)?;
        let size = self.random.size_or_draw(size)?;
        (0..size).map(|_| generator.generate()).collect()
    }

    /// Generates a `Vec<T>`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if no generator is registered
    /// for `T` under `qualifier`.
    pub fn list_fixture<T: 'static>(
        &self,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<Vec<T>, FixtureError> {
        self.collection_fixture(qualifier, size)
    }

    /// Generates a `Vec<Option<T>>`, flipping the nullability coin before
    /// each element.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if no generator is registered
    /// for `T` under `qualifier`.
    pub fn nullable_list_fixture<T: 'static>(
        &self,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<Vec<Option<T>>, FixtureError> {
        let generator = self.lookup::<dyn Generator<T>, T>(qualifier)?;
        let size = self.random.size_or_draw(size)?;
        (0..size).map(|_| self.nullable(&*generator)).collect()
    }

    /// Generates a `HashSet<T>`. Duplicates collapse, so the set may hold
    /// fewer than `size` values.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if no generator is registered
    /// for `T` under `qualifier`.
    pub fn set_fixture<T: Eq + Hash + 'static>(
        &self,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<HashSet<T>, FixtureError> {
        self.collection_fixture(qualifier, size)
    }

    /// Generates `size` key/value pairs and folds them into a map. Later
    /// duplicate keys overwrite earlier ones, so the map may be smaller than
    /// `size`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if either generator is
    /// missing.
    pub fn map_fixture<K, V>(
        &self,
        key_qualifier: Option<&Qualifier>,
        value_qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<HashMap<K, V>, FixtureError>
    where
        K: Eq + Hash + 'static,
        V: 'static,
    {
        let keys = self.lookup::<dyn Generator<K>, K>(key_qualifier)?;
        let values = self.lookup::<dyn Generator<V>, V>(value_qualifier)?;
        let size = self.random.size_or_draw(size)?;
        (0..size)
            .map(|_| -> Result<(K, V), FixtureError> {
                Ok((keys.generate()?, values.generate()?))
            })
            .collect()
    }

    /// Generates one `A` and one `B`, in that order.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if either generator is
    /// missing.
    pub fn pair_fixture<A: 'static, B: 'static>(
        &self,
        first_qualifier: Option<&Qualifier>,
        second_qualifier: Option<&Qualifier>,
    ) -> Result<(A, B), FixtureError> {
        let first = self.lookup::<dyn Generator<A>, A>(first_qualifier)?;
        let second = self.lookup::<dyn Generator<B>, B>(second_qualifier)?;
        Ok((first.generate()?, second.generate()?))
    }

    /// Generates a pair whose sides are independently nullable.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if either generator is
    /// missing.
    pub fn nullable_pair_fixture<A: 'static, B: 'static>(
        &self,
        first_qualifier: Option<&Qualifier>,
        second_qualifier: Option<&Qualifier>,
    ) -> Result<(Option<A>, Option<B>), FixtureError> {
        let first = self.lookup::<dyn Generator<A>, A>(first_qualifier)?;
        let second = self.lookup::<dyn Generator<B>, B>(second_qualifier)?;
        Ok((self.nullable(&*first)?, self.nullable(&*second)?))
    }

    /// Generates a value of shape `S`, named by type alone.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if a generator the shape
    /// needs is missing.
    pub fn shaped<S: FixtureShape>(
        &self,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<S, FixtureError> {
        S::from_fixture(self, qualifier, size)
    }
}
