//! Fixtura Compound — fixtures for chrono and uuid types.
//!
//! Every generator here is a dependent generator: it is built from the
//! generator table rather than the random source, and draws only through the
//! built-in generators it resolves.

pub mod date;
pub mod datetime;
pub mod delta;
pub mod identifier;
pub mod register;
pub mod time;

pub use date::DateGenerator;
pub use datetime::{DateTimeGenerator, UtcDateTimeGenerator};
pub use delta::TimeDeltaGenerator;
pub use identifier::UuidGenerator;
pub use register::CompoundConfigurationExt;
pub use time::TimeGenerator;
