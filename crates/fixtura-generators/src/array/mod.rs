//! Array and string generators layered over element generators.

pub mod bytes;
pub mod element;
pub mod string;

pub use bytes::UByteArrayGenerator;
pub use element::{
    BooleanArrayGenerator, ByteArrayGenerator, CharArrayGenerator, DoubleArrayGenerator,
    ElementArrayGenerator, FloatArrayGenerator, IntArrayGenerator, LongArrayGenerator,
    ShortArrayGenerator, UIntArrayGenerator, ULongArrayGenerator, UShortArrayGenerator,
};
pub use string::StringGenerator;
