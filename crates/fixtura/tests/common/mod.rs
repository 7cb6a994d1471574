//! Shared helpers for fixture integration tests.
#![allow(dead_code)]

use fixtura::{Configuration, Fixture, RandomSource};
use fixtura_test_support::init_tracing;

/// Builds a fixture over the seeded default source.
pub fn seeded_fixture(seed: u64) -> Fixture {
    init_tracing();
    Configuration::new(seed)
        .build()
        .expect("built-in table always builds")
}

/// Builds a fixture over `source`, with no custom generators.
pub fn fixture_with(source: impl RandomSource + 'static) -> Fixture {
    init_tracing();
    Configuration::new(0)
        .with_random_source(source)
        .build()
        .expect("built-in table always builds")
}
