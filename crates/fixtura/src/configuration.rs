//! Fixture configuration: seed, random source and generator registrations.

use std::fmt;
use std::sync::Arc;

use fixtura_core::{
    FixtureError, GeneratorEntry, GeneratorTable, IntoEntry, Qualifier, RandomSource,
    SharedRandom, TypeKey,
};
use fixtura_generators::builtin_table;
use tracing::{debug, info, instrument};

use crate::fixture::Fixture;

/// Environment variable read by [`Configuration::from_env`].
pub const SEED_VAR: &str = "FIXTURA_SEED";

type Factory = Box<dyn FnOnce(&SharedRandom) -> GeneratorEntry + Send>;

type DependentFactory =
    Box<dyn FnOnce(&SharedRandom, &GeneratorTable) -> Result<GeneratorEntry, FixtureError> + Send>;

/// Builder for a [`Fixture`].
///
/// Holds the seed, an optional replacement random source, and the user
/// registrations. Built-in generators are always present and cannot be
/// replaced: a registration under a built-in key is dropped.
pub struct Configuration {
    seed: u64,
    source: Option<SharedRandom>,
    generators: Vec<(TypeKey, Factory)>,
    dependents: Vec<(TypeKey, DependentFactory)>,
}

impl Configuration {
    /// A configuration whose random stream is seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            source: None,
            generators: Vec::new(),
            dependents: Vec::new(),
        }
    }

    /// A configuration seeded from the `FIXTURA_SEED` environment variable,
    /// or with seed 0 when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::Config` if the variable is set but is not a
    /// decimal `u64`.
    pub fn from_env() -> Result<Self, FixtureError> {
        let seed = parse_seed(std::env::var(SEED_VAR).ok().as_deref())?;
        Ok(Self::new(seed))
    }

    /// The configured seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the seeded source with `source`. The seed is then unused.
    #[must_use]
    pub fn with_random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.source = Some(SharedRandom::new(source));
        self
    }

    /// Registers a generator for `T`, optionally under `qualifier`.
    ///
    /// `factory` runs once during [`build`](Self::build) with the fixture's
    /// random source. Registrations under a built-in key, or under a key
    /// registered earlier, are ignored.
    #[must_use]
    pub fn add_generator<T, G, F>(mut self, factory: F, qualifier: Option<&Qualifier>) -> Self
    where
        T: 'static,
        G: IntoEntry<T>,
        F: FnOnce(&SharedRandom) -> G + Send + 'static,
    {
        let key = TypeKey::resolve::<T>(qualifier);
        self.generators
            .push((key, Box::new(move |random| factory(random).into_entry())));
        self
    }

    /// Registers a generator for `T` that composes other registered
    /// generators.
    ///
    /// `factory` runs after every plain registration, in registration order,
    /// and sees the table as built so far. A dependency that is not in the
    /// table yet fails the build with `FixtureError::MissingGenerator`.
    #[must_use]
    pub fn add_dependent_generator<T, G, F>(
        mut self,
        factory: F,
        qualifier: Option<&Qualifier>,
    ) -> Self
    where
        T: 'static,
        G: IntoEntry<T>,
        F: FnOnce(&SharedRandom, &GeneratorTable) -> Result<G, FixtureError> + Send + 'static,
    {
        let key = TypeKey::resolve::<T>(qualifier);
        self.dependents.push((
            key,
            Box::new(move |random, table| factory(random, table).map(IntoEntry::into_entry)),
        ));
        self
    }

    /// Builds the fixture.
    ///
    /// Phase one assembles the built-in table and adds plain registrations;
    /// phase two runs the dependent factories against that table.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::MissingGenerator` if a dependent factory cannot
    /// resolve one of its dependencies.
    #[instrument(skip_all, fields(seed = self.seed))]
    pub fn build(self) -> Result<Fixture, FixtureError> {
        let random = self
            .source
            .unwrap_or_else(|| SharedRandom::seeded(self.seed));

        let mut table = builtin_table(&random);
        let builtin = table.len();

        for (key, factory) in self.generators {
            if table.contains(&key) {
                debug!(key = %key, "ignoring registration for a taken key");
                continue;
            }
            table.insert_if_absent(key, factory(&random));
        }
        let plain = table.len() - builtin;

        for (key, factory) in self.dependents {
            if table.contains(&key) {
                debug!(key = %key, "ignoring dependent registration for a taken key");
                continue;
            }
            let entry = factory(&random, &table)?;
            table.insert_if_absent(key, entry);
        }
        let dependent = table.len() - builtin - plain;

        debug!(builtin, plain, dependent, "generator table built");
        info!(generators = table.len(), "fixture ready");

        Ok(Fixture::new(random, Arc::new(table)))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("seed", &self.seed)
            .field("custom_source", &self.source.is_some())
            .field("generators", &self.generators.len())
            .field("dependents", &self.dependents.len())
            .finish()
    }
}

fn parse_seed(raw: Option<&str>) -> Result<u64, FixtureError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value
            .parse()
            .map_err(|e| FixtureError::Config(format!("{SEED_VAR} must be a valid u64: {e}"))),
    }
}
