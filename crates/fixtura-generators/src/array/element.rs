//! Arrays built by calling an element generator once per slot.

use std::marker::PhantomData;
use std::sync::Arc;

use fixtura_core::{
    ArrayGenerator, FixtureError, Generator, Predicate, RangedArrayGenerator, RangedGenerator,
    SharedRandom, Sign, SignedArrayGenerator, SignedGenerator,
};

use crate::primitive::{
    BooleanGenerator, ByteGenerator, CharGenerator, DoubleGenerator, FloatGenerator,
    IntGenerator, LongGenerator, ShortGenerator, UIntGenerator, ULongGenerator, UShortGenerator,
};

/// `Vec<E>` generator layered over an element generator `G`.
///
/// The size is always settled first, drawn from the default window when the
/// caller gives none, and only then are elements drawn. Range, sign and
/// predicate requests are forwarded to `G` per element, so the array exposes
/// exactly the capabilities its element generator has.
#[derive(Debug)]
pub struct ElementArrayGenerator<E, G> {
    random: SharedRandom,
    element: Arc<G>,
    kind: PhantomData<fn() -> E>,
}

impl<E, G> ElementArrayGenerator<E, G> {
    /// Creates an array generator over `element`.
    #[must_use]
    pub fn new(random: SharedRandom, element: Arc<G>) -> Self {
        Self {
            random,
            element,
            kind: PhantomData,
        }
    }

    /// The element generator.
    #[must_use]
    pub fn element(&self) -> &Arc<G> {
        &self.element
    }

    fn build(
        &self,
        size: Option<usize>,
        mut draw: impl FnMut() -> Result<E, FixtureError>,
    ) -> Result<Vec<E>, FixtureError> {
        let size = self.random.size_or_draw(size)?;
        (0..size).map(|_| draw()).collect()
    }

    #[allow(clippy::cast_sign_loss)]
    fn pick(&self, ranges: &[(E, E)]) -> Result<(E, E), FixtureError>
    where
        E: Copy,
    {
        let upper = i32::try_from(ranges.len()).unwrap_or(i32::MAX);
        let index = self.random.next_int_in(0, upper)?;
        ranges
            .get(index as usize)
            .copied()
            .ok_or_else(|| FixtureError::invalid_range(0, upper))
    }
}

fn ranged_element<E: Copy, G: RangedGenerator<E>>(
    element: &G,
    from: E,
    to: E,
    predicate: Option<Predicate<'_, E>>,
) -> Result<E, FixtureError> {
    match predicate {
        Some(predicate) => element.generate_in_matching(from, to, predicate),
        None => element.generate_in(from, to),
    }
}

impl<E, G: Generator<E>> Generator<Vec<E>> for ElementArrayGenerator<E, G> {
    fn generate(&self) -> Result<Vec<E>, FixtureError> {
        self.build(None, || self.element.generate())
    }
}

impl<E, G: Generator<E>> ArrayGenerator<Vec<E>> for ElementArrayGenerator<E, G> {
    fn generate_sized(&self, size: usize) -> Result<Vec<E>, FixtureError> {
        self.build(Some(size), || self.element.generate())
    }
}

impl<E: Copy, G: RangedGenerator<E>> RangedArrayGenerator<E, Vec<E>>
    for ElementArrayGenerator<E, G>
{
    fn generate_in(
        &self,
        from: E,
        to: E,
        size: Option<usize>,
        predicate: Option<Predicate<'_, E>>,
    ) -> Result<Vec<E>, FixtureError> {
        self.build(size, || ranged_element(&*self.element, from, to, predicate))
    }

    fn generate_in_any(
        &self,
        ranges: &[(E, E)],
        size: Option<usize>,
        predicate: Option<Predicate<'_, E>>,
    ) -> Result<Vec<E>, FixtureError> {
        self.build(size, || {
            let (from, to) = self.pick(ranges)?;
            ranged_element(&*self.element, from, to, predicate)
        })
    }
}

impl<E, G: SignedGenerator<E>> SignedArrayGenerator<E, Vec<E>> for ElementArrayGenerator<E, G> {
    fn generate_signed(
        &self,
        sign: Sign,
        size: Option<usize>,
        predicate: Option<Predicate<'_, E>>,
    ) -> Result<Vec<E>, FixtureError> {
        self.build(size, || match predicate {
            Some(predicate) => self.element.generate_signed_matching(sign, predicate),
            None => self.element.generate_signed(sign),
        })
    }
}

/// `Vec<bool>` generator.
pub type BooleanArrayGenerator = ElementArrayGenerator<bool, BooleanGenerator>;
/// `Vec<i8>` generator.
pub type ByteArrayGenerator = ElementArrayGenerator<i8, ByteGenerator>;
/// `Vec<i16>` generator.
pub type ShortArrayGenerator = ElementArrayGenerator<i16, ShortGenerator>;
/// `Vec<i32>` generator.
pub type IntArrayGenerator = ElementArrayGenerator<i32, IntGenerator>;
/// `Vec<i64>` generator.
pub type LongArrayGenerator = ElementArrayGenerator<i64, LongGenerator>;
/// `Vec<u16>` generator.
pub type UShortArrayGenerator = ElementArrayGenerator<u16, UShortGenerator>;
/// `Vec<u32>` generator.
pub type UIntArrayGenerator = ElementArrayGenerator<u32, UIntGenerator>;
/// `Vec<u64>` generator.
pub type ULongArrayGenerator = ElementArrayGenerator<u64, ULongGenerator>;
/// `Vec<f32>` generator.
pub type FloatArrayGenerator = ElementArrayGenerator<f32, FloatGenerator>;
/// `Vec<f64>` generator.
pub type DoubleArrayGenerator = ElementArrayGenerator<f64, DoubleGenerator>;
/// `Vec<char>` generator.
pub type CharArrayGenerator = ElementArrayGenerator<char, CharGenerator>;
