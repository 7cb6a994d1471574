//! Fixture error types.

use thiserror::Error;

use crate::key::TypeKey;

/// Top-level error type for fixture generation.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// No generator is registered under the key, or the registered generator
    /// lacks the capability the request needs.
    #[error("missing generator for ClassID ({0})")]
    MissingGenerator(TypeKey),

    /// The random source rejected the bounds of a ranged draw.
    #[error("invalid range: {from} until {until}")]
    InvalidRange {
        /// The lower bound as requested.
        from: String,
        /// The upper bound as requested.
        until: String,
    },

    /// A thread panicked while holding the random source.
    #[error("random source mutex poisoned: {0}")]
    RandomSourcePoisoned(String),

    /// The environment carried a malformed setting.
    #[error("configuration error: {0}")]
    Config(String),
}

impl FixtureError {
    /// Builds an `InvalidRange` from any pair of displayable bounds.
    pub fn invalid_range(from: impl ToString, until: impl ToString) -> Self {
        Self::InvalidRange {
            from: from.to_string(),
            until: until.to_string(),
        }
    }
}
