//! Shared test doubles and utilities for Fixtura.

mod generator;
mod rng;
mod tracing;

pub use generator::{ConstantGenerator, CyclingGenerator};
pub use rng::{MockRandom, StubRandom};
pub use tracing::init_tracing;
