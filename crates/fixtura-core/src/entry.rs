//! Generator entries and the immutable generator table.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::FixtureError;
use crate::generator::{
    ArrayGenerator, FilterableGenerator, Generator, RangedArrayGenerator, RangedGenerator,
    SignedArrayGenerator, SignedGenerator,
};
use crate::key::TypeKey;

/// One registered generator and the capability views it exposes.
///
/// Each view is an `Arc<dyn Capability>` stored under the `TypeId` of the
/// capability trait object, so probing for `dyn RangedGenerator<i32>` on an
/// entry that only registered `dyn Generator<i32>` yields `None`.
pub struct GeneratorEntry {
    value_type: &'static str,
    views: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl GeneratorEntry {
    /// An entry exposing only the plain `Generator<T>` view.
    pub fn new<T: 'static>(generator: Arc<dyn Generator<T>>) -> Self {
        let entry = Self {
            value_type: std::any::type_name::<T>(),
            views: HashMap::new(),
        };
        entry.with_capability(generator)
    }

    /// Adds a capability view.
    #[must_use]
    pub fn with_capability<C>(mut self, view: Arc<C>) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.views.insert(TypeId::of::<C>(), Box::new(view));
        self
    }

    /// Adds the `RangedGenerator<T>` view.
    #[must_use]
    pub fn with_ranged<T: Copy + 'static>(self, view: Arc<dyn RangedGenerator<T>>) -> Self {
        self.with_capability(view)
    }

    /// Adds the `SignedGenerator<T>` view.
    #[must_use]
    pub fn with_signed<T: 'static>(self, view: Arc<dyn SignedGenerator<T>>) -> Self {
        self.with_capability(view)
    }

    /// Adds the `FilterableGenerator<T>` view.
    #[must_use]
    pub fn with_filterable<T: 'static>(self, view: Arc<dyn FilterableGenerator<T>>) -> Self {
        self.with_capability(view)
    }

    /// Adds the `ArrayGenerator<R>` view.
    #[must_use]
    pub fn with_array<R: 'static>(self, view: Arc<dyn ArrayGenerator<R>>) -> Self {
        self.with_capability(view)
    }

    /// Adds the `RangedArrayGenerator<E, R>` view.
    #[must_use]
    pub fn with_ranged_array<E: Copy + 'static, R: 'static>(
        self,
        view: Arc<dyn RangedArrayGenerator<E, R>>,
    ) -> Self {
        self.with_capability(view)
    }

    /// Adds the `SignedArrayGenerator<E, R>` view.
    #[must_use]
    pub fn with_signed_array<E: 'static, R: 'static>(
        self,
        view: Arc<dyn SignedArrayGenerator<E, R>>,
    ) -> Self {
        self.with_capability(view)
    }

    /// Returns the view for capability `C`, if the entry exposes it.
    #[must_use]
    pub fn capability<C>(&self) -> Option<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.views
            .get(&TypeId::of::<C>())
            .and_then(|view| view.downcast_ref::<Arc<C>>())
            .cloned()
    }

    /// Name of the value type the plain view produces.
    #[must_use]
    pub fn value_type(&self) -> &'static str {
        self.value_type
    }

    /// Number of capability views, the plain view included.
    #[must_use]
    pub fn capability_count(&self) -> usize {
        self.views.len()
    }
}

impl fmt::Debug for GeneratorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorEntry")
            .field("value_type", &self.value_type)
            .field("capabilities", &self.views.len())
            .finish()
    }
}

/// Converts a concrete generator into a table entry exposing every
/// capability it implements.
pub trait IntoEntry<T> {
    /// Wraps `self` into an entry.
    fn into_entry(self) -> GeneratorEntry;
}

impl<T, G> IntoEntry<T> for Arc<G>
where
    T: 'static,
    G: Generator<T> + 'static,
{
    fn into_entry(self) -> GeneratorEntry {
        GeneratorEntry::new::<T>(self)
    }
}

impl<T: 'static> IntoEntry<T> for GeneratorEntry {
    fn into_entry(self) -> GeneratorEntry {
        self
    }
}

/// Immutable mapping from `TypeKey` to `GeneratorEntry`.
#[derive(Debug, Default)]
pub struct GeneratorTable {
    entries: HashMap<TypeKey, GeneratorEntry>,
}

impl GeneratorTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` unless `key` is already present.
    ///
    /// Returns `false` when the key was taken and the entry was dropped.
    pub fn insert_if_absent(&mut self, key: TypeKey, entry: GeneratorEntry) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, entry);
        true
    }

    /// Returns `true` if a generator is registered under `key`.
    #[must_use]
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// The entry registered under `key`.
    #[must_use]
    pub fn get(&self, key: &TypeKey) -> Option<&GeneratorEntry> {
        self.entries.get(key)
    }

    /// Resolves capability `C` of the generator registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if nothing is registered under
    /// `key` or the entry lacks capability `C`.
    pub fn resolve<C>(&self, key: &TypeKey) -> Result<Arc<C>, FixtureError>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.entries
            .get(key)
            .and_then(GeneratorEntry::capability::<C>)
            .ok_or_else(|| {
                debug!(key = %key, capability = std::any::type_name::<C>(), "generator lookup failed");
                FixtureError::MissingGenerator(key.clone())
            })
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no generator is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the registered keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &TypeKey> {
        self.entries.keys()
    }
}
