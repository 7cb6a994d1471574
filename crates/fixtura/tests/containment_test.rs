//! Range, size, sign and predicate containment across the built-in kinds.

mod common;

use fixtura::Sign;

const DRAWS: usize = 1000;

#[test]
fn test_integer_ranges_are_inclusive() {
    let fixture = common::seeded_fixture(41);
    let mut seen_low = false;
    let mut seen_high = false;

    for _ in 0..DRAWS {
        let value = fixture.fixture_in::<i32>(-2, 2, None).unwrap();
        assert!((-2..=2).contains(&value));
        seen_low |= value == -2;
        seen_high |= value == 2;
    }

    assert!(seen_low && seen_high);
}

#[test]
fn test_ranges_touching_the_kind_maximum() {
    let fixture = common::seeded_fixture(41);

    for _ in 0..DRAWS {
        assert!(fixture.fixture_in::<i8>(120, i8::MAX, None).unwrap() >= 120);
        assert!(fixture.fixture_in::<u64>(u64::MAX - 3, u64::MAX, None).unwrap() >= u64::MAX - 3);
        assert!(fixture.fixture_in::<i64>(i64::MAX - 1, i64::MAX, None).unwrap() >= i64::MAX - 1);
    }

    // Full domain never fails.
    fixture.fixture_in::<i32>(i32::MIN, i32::MAX, None).unwrap();
    fixture.fixture_in::<u8>(u8::MIN, u8::MAX, None).unwrap();
}

#[test]
fn test_float_ranges() {
    let fixture = common::seeded_fixture(41);

    for _ in 0..DRAWS {
        let value = fixture.fixture_in::<f32>(0.25, 0.75, None).unwrap();
        assert!((0.25..=0.75).contains(&value));
    }
}

#[test]
fn test_full_double_range_stays_finite() {
    let fixture = common::seeded_fixture(43);

    for _ in 0..DRAWS {
        let value = fixture.fixture_in::<f64>(f64::MIN, f64::MAX, None).unwrap();
        assert!(value.is_finite());
    }

    let values = fixture
        .array_fixture_in::<f64, Vec<f64>>(f64::MIN, f64::MAX, None, Some(50), None)
        .unwrap();
    assert_eq!(values.len(), 50);
    assert!(values.iter().all(|v| v.is_finite()));
}

#[test]
fn test_char_ranges() {
    let fixture = common::seeded_fixture(41);

    for _ in 0..DRAWS {
        let printable = fixture.fixture::<char>(None).unwrap();
        assert!((' '..='~').contains(&printable));
        let value = fixture.fixture_in::<char>('a', 'f', None).unwrap();
        assert!(('a'..='f').contains(&value));
    }
}

#[test]
fn test_signs_hold_for_every_signed_kind() {
    let fixture = common::seeded_fixture(17);

    for _ in 0..DRAWS {
        assert!(fixture.fixture_signed::<i8>(Sign::Positive, None).unwrap() >= 0);
        assert!(fixture.fixture_signed::<i16>(Sign::Negative, None).unwrap() <= 0);
        assert!(fixture.fixture_signed::<i32>(Sign::Negative, None).unwrap() <= 0);
        assert!(fixture.fixture_signed::<i64>(Sign::Positive, None).unwrap() >= 0);
        assert!(fixture.fixture_signed::<f32>(Sign::Positive, None).unwrap() >= 0.0);
        assert!(fixture.fixture_signed::<f64>(Sign::Negative, None).unwrap() <= 0.0);
        assert_eq!(fixture.fixture_signed::<u32>(Sign::Negative, None).unwrap(), 0);
    }
}

#[test]
fn test_array_sizes() {
    let fixture = common::seeded_fixture(17);

    for _ in 0..200 {
        let len = fixture.array_fixture::<Vec<i16>>(None, None).unwrap().len();
        assert!((1..=10).contains(&len));
        let len = fixture.array_fixture::<String>(None, None).unwrap().chars().count();
        assert!((1..=10).contains(&len));
    }
    assert!(fixture.array_fixture::<Vec<u8>>(None, Some(0)).unwrap().is_empty());
    assert_eq!(fixture.array_fixture::<Vec<u8>>(None, Some(64)).unwrap().len(), 64);
}

#[test]
fn test_ranged_arrays_and_multi_ranges() {
    let fixture = common::seeded_fixture(17);

    let bytes = fixture
        .array_fixture_in_any::<i8, Vec<i8>>(&[(0, 42), (3, 41)], None, Some(100), None)
        .unwrap();
    let longs = fixture
        .array_fixture_in::<i64, Vec<i64>>(-10, 10, None, Some(100), Some(&|v: &i64| *v != 0))
        .unwrap();

    assert!(bytes.iter().all(|b| (0..=42).contains(b)));
    assert!(longs.iter().all(|v| (-10..=10).contains(v) && *v != 0));
}

#[test]
fn test_predicates_are_satisfied() {
    let fixture = common::seeded_fixture(17);

    for _ in 0..200 {
        let even = fixture.fixture_matching::<u32>(|v| v % 2 == 0, None).unwrap();
        let upper = fixture
            .fixture_in_matching::<char>('A', 'z', |c| c.is_ascii_uppercase(), None)
            .unwrap();
        let text = fixture.fixture_matching::<String>(|s| s.len() > 3, None).unwrap();
        let flag = fixture.fixture_matching::<bool>(|b| *b, None).unwrap();

        assert_eq!(even % 2, 0);
        assert!(upper.is_ascii_uppercase());
        assert!(text.len() > 3);
        assert!(flag);
    }
}
