//! Fixtura Generators — the built-in generator set.
//!
//! One generator per primitive kind, array generators layered over them, and
//! the table that registers all of them under their unqualified type keys.

pub mod array;
pub mod builtins;
pub mod primitive;

pub use builtins::{builtin_table, numeric_entry, signed_array_entry};
pub use primitive::Opaque;
