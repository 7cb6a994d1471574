//! One generator per primitive kind.

pub mod boolean;
pub mod character;
pub mod floating;
pub mod integer;
pub mod opaque;

pub use boolean::BooleanGenerator;
pub use character::CharGenerator;
pub use floating::{DoubleGenerator, FloatGenerator};
pub use integer::{
    ByteGenerator, IntGenerator, IntegerGenerator, IntegerKind, LongGenerator, ShortGenerator,
    UByteGenerator, UIntGenerator, ULongGenerator, UShortGenerator,
};
pub use opaque::{AnyGenerator, Opaque, UnitGenerator};
