//! Fixtura Core — shared abstractions for deterministic fixture generation.
//!
//! This crate defines the random-source seam, type keys, the error type and
//! the capability traits every generator implements. It contains no concrete
//! generators.

pub mod entry;
pub mod error;
pub mod generator;
pub mod key;
pub mod random;
pub mod rng;

pub use entry::{GeneratorEntry, GeneratorTable, IntoEntry};
pub use error::FixtureError;
pub use generator::{
    ArrayGenerator, FilterableGenerator, Generator, Predicate, RangedArrayGenerator,
    RangedGenerator, Sign, SignedArrayGenerator, SignedGenerator,
};
pub use key::{Qualifier, TypeKey};
pub use random::SharedRandom;
pub use rng::{RandomSource, StdRandomSource};

/// Lower bound (inclusive) of the size window used when no size is given.
pub const DEFAULT_SIZE_LOWER: i32 = 1;

/// Upper bound (exclusive) of the size window used when no size is given.
pub const DEFAULT_SIZE_UPPER: i32 = 11;
