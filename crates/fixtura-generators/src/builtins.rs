//! The built-in generator table.
//!
//! Every supported primitive and array type is registered here under its
//! unqualified key. User registrations can only add keys this table lacks.

use std::sync::Arc;

use fixtura_core::{
    ArrayGenerator, FilterableGenerator, GeneratorEntry, GeneratorTable, RangedArrayGenerator,
    RangedGenerator, SharedRandom, SignedArrayGenerator, SignedGenerator, TypeKey,
};
use tracing::debug;

use crate::array::{ElementArrayGenerator, StringGenerator, UByteArrayGenerator};
use crate::primitive::{
    AnyGenerator, BooleanGenerator, CharGenerator, DoubleGenerator, FloatGenerator,
    IntegerGenerator, IntegerKind, Opaque, UnitGenerator,
};

/// Entry exposing the plain, ranged, signed and filterable views of `generator`.
pub fn numeric_entry<T, G>(generator: Arc<G>) -> GeneratorEntry
where
    T: Copy + 'static,
    G: RangedGenerator<T> + SignedGenerator<T> + FilterableGenerator<T> + 'static,
{
    GeneratorEntry::new::<T>(generator.clone())
        .with_ranged::<T>(generator.clone())
        .with_signed::<T>(generator.clone())
        .with_filterable::<T>(generator)
}

/// Entry exposing the plain, sized, ranged and signed views of an array
/// generator producing `R` from elements `E`.
pub fn signed_array_entry<E, R, G>(generator: Arc<G>) -> GeneratorEntry
where
    E: Copy + 'static,
    R: 'static,
    G: RangedArrayGenerator<E, R> + SignedArrayGenerator<E, R> + 'static,
{
    GeneratorEntry::new::<R>(generator.clone())
        .with_array::<R>(generator.clone())
        .with_ranged_array::<E, R>(generator.clone())
        .with_signed_array::<E, R>(generator)
}

fn plain_array_entry<R, G>(generator: Arc<G>) -> GeneratorEntry
where
    R: 'static,
    G: ArrayGenerator<R> + 'static,
{
    GeneratorEntry::new::<R>(generator.clone()).with_array::<R>(generator)
}

fn insert(table: &mut GeneratorTable, key: TypeKey, entry: GeneratorEntry) {
    let inserted = table.insert_if_absent(key, entry);
    debug_assert!(inserted, "built-in keys are unique");
}

/// Registers the scalar generator of one integer kind and hands it back for
/// the matching array generator.
fn integer_kind<T>(table: &mut GeneratorTable, random: &SharedRandom) -> Arc<IntegerGenerator<T>>
where
    T: IntegerKind,
{
    let scalar = Arc::new(IntegerGenerator::<T>::new(random.clone()));
    insert(table, TypeKey::of::<T>(), numeric_entry::<T, _>(scalar.clone()));
    scalar
}

fn signed_array<E, G>(table: &mut GeneratorTable, random: &SharedRandom, element: Arc<G>)
where
    E: Copy + 'static,
    G: RangedGenerator<E> + SignedGenerator<E> + 'static,
{
    let array = Arc::new(ElementArrayGenerator::<E, G>::new(random.clone(), element));
    insert(
        table,
        TypeKey::of::<Vec<E>>(),
        signed_array_entry::<E, Vec<E>, _>(array),
    );
}

/// Builds the table of built-in generators, all drawing from `random`.
#[must_use]
pub fn builtin_table(random: &SharedRandom) -> GeneratorTable {
    let mut table = GeneratorTable::new();

    // Scalars
    let bytes = integer_kind::<i8>(&mut table, random);
    let shorts = integer_kind::<i16>(&mut table, random);
    let ints = integer_kind::<i32>(&mut table, random);
    let longs = integer_kind::<i64>(&mut table, random);
    let ubytes = integer_kind::<u8>(&mut table, random);
    let ushorts = integer_kind::<u16>(&mut table, random);
    let uints = integer_kind::<u32>(&mut table, random);
    let ulongs = integer_kind::<u64>(&mut table, random);

    let floats = Arc::new(FloatGenerator::new(random.clone()));
    insert(&mut table, TypeKey::of::<f32>(), numeric_entry::<f32, _>(floats.clone()));
    let doubles = Arc::new(DoubleGenerator::new(random.clone()));
    insert(&mut table, TypeKey::of::<f64>(), numeric_entry::<f64, _>(doubles.clone()));

    let chars = Arc::new(CharGenerator::new(random.clone()));
    insert(
        &mut table,
        TypeKey::of::<char>(),
        GeneratorEntry::new::<char>(chars.clone())
            .with_ranged::<char>(chars.clone())
            .with_filterable::<char>(chars.clone()),
    );

    let booleans = Arc::new(BooleanGenerator::new(random.clone()));
    insert(
        &mut table,
        TypeKey::of::<bool>(),
        GeneratorEntry::new::<bool>(booleans.clone()).with_filterable::<bool>(booleans.clone()),
    );

    insert(
        &mut table,
        TypeKey::of::<()>(),
        GeneratorEntry::new::<()>(Arc::new(UnitGenerator)),
    );
    insert(
        &mut table,
        TypeKey::of::<Opaque>(),
        GeneratorEntry::new::<Opaque>(Arc::new(AnyGenerator::new())),
    );

    // Arrays
    signed_array::<i8, _>(&mut table, random, bytes);
    signed_array::<i16, _>(&mut table, random, shorts);
    signed_array::<i32, _>(&mut table, random, ints);
    signed_array::<i64, _>(&mut table, random, longs);
    signed_array::<u32, _>(&mut table, random, uints);
    signed_array::<u64, _>(&mut table, random, ulongs);
    signed_array::<f32, _>(&mut table, random, floats);
    signed_array::<f64, _>(&mut table, random, doubles);

    let ubyte_array = Arc::new(UByteArrayGenerator::new(random.clone(), ubytes));
    insert(
        &mut table,
        TypeKey::of::<Vec<u8>>(),
        signed_array_entry::<u8, Vec<u8>, _>(ubyte_array),
    );

    let ushort_array = Arc::new(ElementArrayGenerator::<u16, _>::new(random.clone(), ushorts));
    insert(
        &mut table,
        TypeKey::of::<Vec<u16>>(),
        plain_array_entry::<Vec<u16>, _>(ushort_array),
    );

    let boolean_array = Arc::new(ElementArrayGenerator::<bool, _>::new(random.clone(), booleans));
    insert(
        &mut table,
        TypeKey::of::<Vec<bool>>(),
        plain_array_entry::<Vec<bool>, _>(boolean_array),
    );

    let char_array = Arc::new(ElementArrayGenerator::<char, _>::new(random.clone(), chars.clone()));
    insert(
        &mut table,
        TypeKey::of::<Vec<char>>(),
        plain_array_entry::<Vec<char>, _>(char_array.clone())
            .with_ranged_array::<char, Vec<char>>(char_array),
    );

    let strings = Arc::new(StringGenerator::new(ElementArrayGenerator::new(
        random.clone(),
        chars,
    )));
    insert(
        &mut table,
        TypeKey::of::<String>(),
        plain_array_entry::<String, _>(strings.clone())
            .with_ranged_array::<char, String>(strings.clone())
            .with_filterable::<String>(strings),
    );

    debug!(entries = table.len(), "built-in generator table assembled");
    table
}

#[cfg(test)]
mod tests {
    use fixtura_core::{FixtureError, Generator, Sign};

    use super::*;

    fn table() -> GeneratorTable {
        builtin_table(&SharedRandom::seeded(0))
    }

    #[test]
    fn test_every_primitive_kind_is_registered() {
        let table = table();

        for key in [
            TypeKey::of::<bool>(),
            TypeKey::of::<i8>(),
            TypeKey::of::<i16>(),
            TypeKey::of::<i32>(),
            TypeKey::of::<i64>(),
            TypeKey::of::<u8>(),
            TypeKey::of::<u16>(),
            TypeKey::of::<u32>(),
            TypeKey::of::<u64>(),
            TypeKey::of::<f32>(),
            TypeKey::of::<f64>(),
            TypeKey::of::<char>(),
            TypeKey::of::<String>(),
            TypeKey::of::<()>(),
            TypeKey::of::<Opaque>(),
        ] {
            assert!(table.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn test_every_array_kind_is_registered() {
        let table = table();

        for key in [
            TypeKey::of::<Vec<bool>>(),
            TypeKey::of::<Vec<i8>>(),
            TypeKey::of::<Vec<i16>>(),
            TypeKey::of::<Vec<i32>>(),
            TypeKey::of::<Vec<i64>>(),
            TypeKey::of::<Vec<u8>>(),
            TypeKey::of::<Vec<u16>>(),
            TypeKey::of::<Vec<u32>>(),
            TypeKey::of::<Vec<u64>>(),
            TypeKey::of::<Vec<f32>>(),
            TypeKey::of::<Vec<f64>>(),
            TypeKey::of::<Vec<char>>(),
        ] {
            assert!(table.contains(&key), "missing {key}");
        }
        assert_eq!(table.len(), 27);
    }

    #[test]
    fn test_numeric_entries_expose_all_scalar_capabilities() {
        let table = table();
        let key = TypeKey::of::<i16>();

        assert!(table.resolve::<dyn RangedGenerator<i16>>(&key).is_ok());
        assert!(table.resolve::<dyn SignedGenerator<i16>>(&key).is_ok());
        assert!(table.resolve::<dyn FilterableGenerator<i16>>(&key).is_ok());
    }

    #[test]
    fn test_boolean_has_no_ranged_capability() {
        let table = table();

        let result = table.resolve::<dyn RangedGenerator<bool>>(&TypeKey::of::<bool>());

        assert!(matches!(result, Err(FixtureError::MissingGenerator(_))));
    }

    #[test]
    fn test_ushort_and_boolean_arrays_bypass_ranged_machinery() {
        let table = table();

        assert!(
            table
                .resolve::<dyn ArrayGenerator<Vec<u16>>>(&TypeKey::of::<Vec<u16>>())
                .is_ok()
        );
        assert!(
            table
                .resolve::<dyn RangedArrayGenerator<u16, Vec<u16>>>(&TypeKey::of::<Vec<u16>>())
                .is_err()
        );
        assert!(
            table
                .resolve::<dyn RangedArrayGenerator<bool, Vec<bool>>>(&TypeKey::of::<Vec<bool>>())
                .is_err()
        );
    }

    #[test]
    fn test_string_entry_supports_ranged_chars() {
        let table = table();
        let strings = table
            .resolve::<dyn RangedArrayGenerator<char, String>>(&TypeKey::of::<String>())
            .unwrap();

        let value = strings.generate_in('x', 'z', Some(8), None).unwrap();

        assert_eq!(value.len(), 8);
        assert!(value.chars().all(|c| ('x'..='z').contains(&c)));
    }

    #[test]
    fn test_signed_array_entry_dispatches() {
        let table = table();
        let longs = table
            .resolve::<dyn SignedArrayGenerator<i64, Vec<i64>>>(&TypeKey::of::<Vec<i64>>())
            .unwrap();

        let values = longs.generate_signed(Sign::Negative, Some(10), None).unwrap();

        assert!(values.iter().all(|v| *v <= 0));
    }

    #[test]
    fn test_generators_share_the_stream() {
        let a = builtin_table(&SharedRandom::seeded(5));
        let b = builtin_table(&SharedRandom::seeded(5));
        let key = TypeKey::of::<i32>();

        let first_a = a.resolve::<dyn Generator<i32>>(&key).unwrap();
        let first_b = b.resolve::<dyn Generator<i32>>(&key).unwrap();

        for _ in 0..20 {
            assert_eq!(first_a.generate().unwrap(), first_b.generate().unwrap());
        }
    }
}
