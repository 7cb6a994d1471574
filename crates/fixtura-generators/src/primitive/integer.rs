//! Integer generators: signed and unsigned, 8 to 64 bits.
//!
//! All kinds share one generator type. What differs per kind is how a full
//! range draw and an inclusive ranged draw map onto the random source, which
//! `IntegerKind` captures.

use std::marker::PhantomData;

use fixtura_core::{
    FilterableGenerator, FixtureError, Generator, RangedGenerator, SharedRandom, Sign,
    SignedGenerator,
};

/// An integer type the random source can produce.
pub trait IntegerKind: Copy + Send + Sync + 'static {
    /// Smallest value of the kind.
    const MIN: Self;
    /// Largest value of the kind.
    const MAX: Self;
    /// Zero of the kind.
    const ZERO: Self;

    /// Draws a value over the full range of the kind.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the random source fails.
    fn draw(random: &SharedRandom) -> Result<Self, FixtureError>;

    /// Draws a value in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::InvalidRange` if the random source rejects the
    /// bounds.
    fn draw_inclusive(random: &SharedRandom, from: Self, to: Self) -> Result<Self, FixtureError>;
}

/// Draws an `i32` in `[from, to]`.
///
/// The source takes an exclusive upper bound, so `to + 1` is requested. When
/// that overflows the window is shifted down by one and the result back up.
pub(crate) fn int_inclusive(
    random: &SharedRandom,
    from: i32,
    to: i32,
) -> Result<i32, FixtureError> {
    match to.checked_add(1) {
        Some(until) => random.next_int_in(from, until),
        None if from == i32::MIN => random.next_int(),
        None => Ok(random.next_int_in(from - 1, to)? + 1),
    }
}

/// Draws an `i64` in `[from, to]`. See [`int_inclusive`].
pub(crate) fn long_inclusive(
    random: &SharedRandom,
    from: i64,
    to: i64,
) -> Result<i64, FixtureError> {
    match to.checked_add(1) {
        Some(until) => random.next_long_in(from, until),
        None if from == i64::MIN => random.next_long(),
        None => Ok(random.next_long_in(from - 1, to)? + 1),
    }
}

macro_rules! narrow_kind {
    ($($kind:ty),*) => {$(
        impl IntegerKind for $kind {
            const MIN: Self = <$kind>::MIN;
            const MAX: Self = <$kind>::MAX;
            const ZERO: Self = 0;

            fn draw(random: &SharedRandom) -> Result<Self, FixtureError> {
                Self::draw_inclusive(random, Self::MIN, Self::MAX)
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn draw_inclusive(
                random: &SharedRandom,
                from: Self,
                to: Self,
            ) -> Result<Self, FixtureError> {
                let value = int_inclusive(random, i32::from(from), i32::from(to))?;
                Ok(value as $kind)
            }
        }
    )*};
}

narrow_kind!(i8, i16, u8, u16);

impl IntegerKind for i32 {
    const MIN: Self = i32::MIN;
    const MAX: Self = i32::MAX;
    const ZERO: Self = 0;

    fn draw(random: &SharedRandom) -> Result<Self, FixtureError> {
        random.next_int()
    }

    fn draw_inclusive(random: &SharedRandom, from: Self, to: Self) -> Result<Self, FixtureError> {
        int_inclusive(random, from, to)
    }
}

impl IntegerKind for i64 {
    const MIN: Self = i64::MIN;
    const MAX: Self = i64::MAX;
    const ZERO: Self = 0;

    fn draw(random: &SharedRandom) -> Result<Self, FixtureError> {
        random.next_long()
    }

    fn draw_inclusive(random: &SharedRandom, from: Self, to: Self) -> Result<Self, FixtureError> {
        long_inclusive(random, from, to)
    }
}

impl IntegerKind for u32 {
    const MIN: Self = u32::MIN;
    const MAX: Self = u32::MAX;
    const ZERO: Self = 0;

    fn draw(random: &SharedRandom) -> Result<Self, FixtureError> {
        Self::draw_inclusive(random, Self::MIN, Self::MAX)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw_inclusive(random: &SharedRandom, from: Self, to: Self) -> Result<Self, FixtureError> {
        let value = long_inclusive(random, i64::from(from), i64::from(to))?;
        Ok(value as u32)
    }
}

const SIGN_BIT: u64 = 1 << 63;

/// Maps `u64` onto `i64` preserving order.
#[allow(clippy::cast_possible_wrap)]
fn ordered_from_unsigned(value: u64) -> i64 {
    (value ^ SIGN_BIT) as i64
}

/// Inverse of [`ordered_from_unsigned`].
#[allow(clippy::cast_sign_loss)]
fn unsigned_from_ordered(value: i64) -> u64 {
    (value as u64) ^ SIGN_BIT
}

impl IntegerKind for u64 {
    const MIN: Self = u64::MIN;
    const MAX: Self = u64::MAX;
    const ZERO: Self = 0;

    #[allow(clippy::cast_sign_loss)]
    fn draw(random: &SharedRandom) -> Result<Self, FixtureError> {
        Ok(random.next_long()? as u64)
    }

    fn draw_inclusive(random: &SharedRandom, from: Self, to: Self) -> Result<Self, FixtureError> {
        let value = long_inclusive(
            random,
            ordered_from_unsigned(from),
            ordered_from_unsigned(to),
        )?;
        Ok(unsigned_from_ordered(value))
    }
}

/// Generator for any `IntegerKind`.
#[derive(Debug, Clone)]
pub struct IntegerGenerator<T> {
    random: SharedRandom,
    kind: PhantomData<fn() -> T>,
}

impl<T: IntegerKind> IntegerGenerator<T> {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub fn new(random: SharedRandom) -> Self {
        Self {
            random,
            kind: PhantomData,
        }
    }
}

impl<T: IntegerKind> Generator<T> for IntegerGenerator<T> {
    fn generate(&self) -> Result<T, FixtureError> {
        T::draw(&self.random)
    }
}

impl<T: IntegerKind> RangedGenerator<T> for IntegerGenerator<T> {
    fn generate_in(&self, from: T, to: T) -> Result<T, FixtureError> {
        T::draw_inclusive(&self.random, from, to)
    }
}

impl<T: IntegerKind> SignedGenerator<T> for IntegerGenerator<T> {
    fn generate_signed(&self, sign: Sign) -> Result<T, FixtureError> {
        match sign {
            Sign::Positive => self.generate_in(T::ZERO, T::MAX),
            Sign::Negative => self.generate_in(T::MIN, T::ZERO),
        }
    }
}

impl<T: IntegerKind> FilterableGenerator<T> for IntegerGenerator<T> {}

/// `i8` generator.
pub type ByteGenerator = IntegerGenerator<i8>;
/// `i16` generator.
pub type ShortGenerator = IntegerGenerator<i16>;
/// `i32` generator.
pub type IntGenerator = IntegerGenerator<i32>;
/// `i64` generator.
pub type LongGenerator = IntegerGenerator<i64>;
/// `u8` generator.
pub type UByteGenerator = IntegerGenerator<u8>;
/// `u16` generator.
pub type UShortGenerator = IntegerGenerator<u16>;
/// `u32` generator.
pub type UIntGenerator = IntegerGenerator<u32>;
/// `u64` generator.
pub type ULongGenerator = IntegerGenerator<u64>;
