//! Type keys and qualifiers used to address generators.

use std::fmt;

/// Prefix marking a qualified key.
const QUALIFIED_PREFIX: &str = "q";

/// Separator between qualifier parts and the type name.
const SEPARATOR: char = ':';

/// Identity of a `(type, qualifier)` pair inside a generator table.
///
/// Unqualified keys are the canonical type name. Qualified keys take the
/// form `q:<qualifier>:<name>`, so a qualified lookup can never hit an
/// unqualified entry and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(String);

impl TypeKey {
    /// The unqualified key of `T`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>().to_owned())
    }

    /// The key of `T` under `qualifier`.
    #[must_use]
    pub fn qualified<T: ?Sized>(qualifier: &Qualifier) -> Self {
        Self(format!(
            "{QUALIFIED_PREFIX}{SEPARATOR}{qualifier}{SEPARATOR}{}",
            std::any::type_name::<T>()
        ))
    }

    /// The key of `T`, qualified when a qualifier is given.
    #[must_use]
    pub fn resolve<T: ?Sized>(qualifier: Option<&Qualifier>) -> Self {
        match qualifier {
            Some(qualifier) => Self::qualified::<T>(qualifier),
            None => Self::of::<T>(),
        }
    }

    /// Returns `true` when this key carries a qualifier.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        self.0
            .strip_prefix(QUALIFIED_PREFIX)
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag that tells apart several generators registered for the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier(String);

impl Qualifier {
    /// A qualifier identified by a free-form name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// A qualifier identified by the type `T`.
    #[must_use]
    pub fn typed<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>().to_owned())
    }

    /// Joins several qualifiers into one, in order.
    #[must_use]
    pub fn join<'a>(parts: impl IntoIterator<Item = &'a Qualifier>) -> Self {
        let joined = parts
            .into_iter()
            .map(|part| part.0.as_str())
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string());
        Self(joined)
    }

    /// The qualifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
