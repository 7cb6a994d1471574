//! Registration rules: built-in immutability, qualifiers and lookup errors.

mod common;

use std::sync::Arc;

use fixtura::{Configuration, FixtureError, Generator, Qualifier, Sign, TypeKey};
use fixtura_test_support::{ConstantGenerator, CyclingGenerator, StubRandom, init_tracing};

#[test]
fn test_builtin_int_cannot_be_replaced() {
    init_tracing();
    let custom = ConstantGenerator::new(7_i32);
    let probe = custom.clone();
    let fixture = Configuration::new(0)
        .with_random_source(StubRandom::new().with_ints([42]))
        .add_generator::<i32, _, _>(move |_| Arc::new(custom), None)
        .build()
        .unwrap();

    assert_eq!(fixture.fixture::<i32>(None).unwrap(), 42);
    assert_eq!(probe.calls(), 0);
}

#[test]
fn test_builtin_factory_is_never_invoked() {
    init_tracing();
    let fixture = Configuration::new(0)
        .add_generator::<String, _, _>(
            |_| -> Arc<ConstantGenerator<String>> { panic!("built-in key factory must not run") },
            None,
        )
        .build();

    assert!(fixture.is_ok());
}

#[test]
fn test_qualified_builtin_type_is_accepted() {
    init_tracing();
    let qualifier = Qualifier::typed::<u8>();
    let fixture = Configuration::new(0)
        .add_generator::<i32, _, _>(|_| Arc::new(ConstantGenerator::new(3_i32)), Some(&qualifier))
        .build()
        .unwrap();

    assert_eq!(fixture.fixture::<i32>(Some(&qualifier)).unwrap(), 3);
    assert!(
        fixture
            .generators()
            .contains(&TypeKey::qualified::<i32>(&qualifier))
    );
}

#[test]
fn test_map_keys_dedup_by_construction() {
    init_tracing();
    let qualifier = Qualifier::named("cycling");
    let fixture = Configuration::new(0)
        .add_generator::<i32, _, _>(
            |_| Arc::new(CyclingGenerator::new(vec![0, 1, 2])),
            Some(&qualifier),
        )
        .build()
        .unwrap();

    let map = fixture
        .map_fixture::<i32, i32>(Some(&qualifier), None, Some(5))
        .unwrap();

    assert_eq!(map.len(), 3);
    assert!(map.keys().all(|k| (0..=2).contains(k)));
}

#[test]
fn test_missing_generator_message_names_the_key() {
    struct Unknown;

    let fixture = common::seeded_fixture(0);

    let plain = fixture.fixture::<Unknown>(None).err().unwrap();
    let qualified = fixture
        .fixture::<i32>(Some(&Qualifier::named("nope")))
        .err()
        .unwrap();

    assert!(plain.to_string().starts_with("missing generator for ClassID ("));
    assert!(plain.to_string().contains("Unknown"));
    assert_eq!(
        qualified.to_string(),
        "missing generator for ClassID (q:nope:i32)"
    );
}

#[test]
fn test_wrong_capability_is_missing_generator() {
    let fixture = common::seeded_fixture(0);

    let ranged_bool = fixture.fixture_in::<bool>(false, true, None);
    let signed_char = fixture.fixture_signed::<char>(Sign::Positive, None);
    let ranged_bools = fixture.array_fixture_in::<bool, Vec<bool>>(false, true, None, None, None);

    assert!(matches!(ranged_bool, Err(FixtureError::MissingGenerator(_))));
    assert!(matches!(signed_char, Err(FixtureError::MissingGenerator(_))));
    assert!(matches!(ranged_bools, Err(FixtureError::MissingGenerator(_))));
}

#[test]
fn test_dependent_generator_reads_the_table() {
    struct Labelled(Arc<dyn Generator<u16>>);

    impl Generator<String> for Labelled {
        fn generate(&self) -> Result<String, FixtureError> {
            Ok(format!("item-{}", self.0.generate()?))
        }
    }

    init_tracing();
    let label = Qualifier::named("label");
    let fixture = Configuration::new(3)
        .add_dependent_generator::<String, _, _>(
            |_, table| {
                let numbers = table.resolve::<dyn Generator<u16>>(&TypeKey::of::<u16>())?;
                Ok(Arc::new(Labelled(numbers)))
            },
            Some(&label),
        )
        .build()
        .unwrap();

    let value = fixture.fixture::<String>(Some(&label)).unwrap();

    assert!(value.starts_with("item-"));
    assert!(value["item-".len()..].parse::<u16>().is_ok());
}
