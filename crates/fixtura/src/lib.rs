//! Fixtura — deterministic random fixtures for tests.
//!
//! Build a [`Fixture`] from a [`Configuration`], then ask it for values by
//! type. The same seed and the same call sequence always produce the same
//! values.
//!
//! ```
//! use fixtura::{Configuration, Sign};
//!
//! let fixture = Configuration::new(23).build()?;
//! let age = fixture.fixture_in::<u8>(18, 99, None)?;
//! let balance = fixture.fixture_signed::<i64>(Sign::Positive, None)?;
//! let tags = fixture.list_fixture::<String>(None, Some(3))?;
//!
//! assert!((18..=99).contains(&age));
//! assert!(balance >= 0);
//! assert_eq!(tags.len(), 3);
//! # Ok::<(), fixtura::FixtureError>(())
//! ```

pub mod configuration;
pub mod fixture;
pub mod shape;

pub use configuration::{Configuration, SEED_VAR};
pub use fixture::Fixture;
pub use shape::FixtureShape;

pub use fixtura_core::{
    ArrayGenerator, FilterableGenerator, FixtureError, Generator, GeneratorEntry,
    GeneratorTable, IntoEntry, Predicate, Qualifier, RandomSource, RangedArrayGenerator,
    RangedGenerator, SharedRandom, Sign, SignedArrayGenerator, SignedGenerator,
    StdRandomSource, TypeKey,
};
pub use fixtura_generators::{Opaque, numeric_entry, signed_array_entry};
