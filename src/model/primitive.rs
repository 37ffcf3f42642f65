// Mon May 4 2026 - Alex

use crate::layout::bits_storage_bytes;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    Int8,
    Int16,
    Int32,
    Int64,
}

impl IntWidth {
    pub fn bytes(&self) -> u64 {
        match self {
            IntWidth::Int8 => 1,
            IntWidth::Int16 => 2,
            IntWidth::Int32 => 4,
            IntWidth::Int64 => 8,
        }
    }

    pub fn bits(&self) -> u64 {
        self.bytes() * 8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Signed,
    Unsigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    Single,
    Double,
}

impl FloatWidth {
    pub fn bytes(&self) -> u64 {
        match self {
            FloatWidth::Single => 4,
            FloatWidth::Double => 8,
        }
    }
}

/// A scalar field type. `Bits(n)` is a raw bit-width field that occupies
/// its own power-of-two storage unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int(IntWidth, Sign),
    Float(FloatWidth),
    Bits(u8),
}

static C_NAME_TABLE: Lazy<Vec<(&'static str, Primitive)>> = Lazy::new(|| {
    vec![
        ("bool", Primitive::u8()),
        ("_Bool", Primitive::u8()),
        ("char", Primitive::i8()),
        ("signed char", Primitive::i8()),
        ("unsigned char", Primitive::u8()),
        ("short", Primitive::i16()),
        ("short int", Primitive::i16()),
        ("signed short", Primitive::i16()),
        ("unsigned short", Primitive::u16()),
        ("unsigned short int", Primitive::u16()),
        ("int", Primitive::i32()),
        ("signed", Primitive::i32()),
        ("signed int", Primitive::i32()),
        ("unsigned", Primitive::u32()),
        ("unsigned int", Primitive::u32()),
        ("long", Primitive::i64()),
        ("long int", Primitive::i64()),
        ("signed long", Primitive::i64()),
        ("unsigned long", Primitive::u64()),
        ("unsigned long int", Primitive::u64()),
        ("long long", Primitive::i64()),
        ("signed long long", Primitive::i64()),
        ("unsigned long long", Primitive::u64()),
        ("float", Primitive::f32()),
        ("double", Primitive::f64()),
        ("int8_t", Primitive::i8()),
        ("int16_t", Primitive::i16()),
        ("int32_t", Primitive::i32()),
        ("int64_t", Primitive::i64()),
        ("uint8_t", Primitive::u8()),
        ("uint16_t", Primitive::u16()),
        ("uint32_t", Primitive::u32()),
        ("uint64_t", Primitive::u64()),
        ("size_t", Primitive::u64()),
        ("ssize_t", Primitive::i64()),
        ("ptrdiff_t", Primitive::i64()),
    ]
});

impl Primitive {
    pub const fn u8() -> Self {
        Primitive::Int(IntWidth::Int8, Sign::Unsigned)
    }

    pub const fn u16() -> Self {
        Primitive::Int(IntWidth::Int16, Sign::Unsigned)
    }

    pub const fn u32() -> Self {
        Primitive::Int(IntWidth::Int32, Sign::Unsigned)
    }

    pub const fn u64() -> Self {
        Primitive::Int(IntWidth::Int64, Sign::Unsigned)
    }

    pub const fn i8() -> Self {
        Primitive::Int(IntWidth::Int8, Sign::Signed)
    }

    pub const fn i16() -> Self {
        Primitive::Int(IntWidth::Int16, Sign::Signed)
    }

    pub const fn i32() -> Self {
        Primitive::Int(IntWidth::Int32, Sign::Signed)
    }

    pub const fn i64() -> Self {
        Primitive::Int(IntWidth::Int64, Sign::Signed)
    }

    pub const fn f32() -> Self {
        Primitive::Float(FloatWidth::Single)
    }

    pub const fn f64() -> Self {
        Primitive::Float(FloatWidth::Double)
    }

    pub fn size(&self) -> u64 {
        match self {
            Primitive::Int(width, _) => width.bytes(),
            Primitive::Float(width) => width.bytes(),
            Primitive::Bits(bits) => bits_storage_bytes(*bits),
        }
    }

    /// Natural alignment. Equal to the size for every scalar, including the
    /// power-of-two storage unit of a bit-width field.
    pub fn alignment(&self) -> u64 {
        self.size()
    }

    pub fn size_bits(&self) -> u64 {
        match self {
            Primitive::Bits(bits) => *bits as u64,
            other => other.size() * 8,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Primitive::Int(_, Sign::Signed))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Primitive::Float(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Primitive::Int(_, _))
    }

    pub fn from_c_name(name: &str) -> Option<Self> {
        C_NAME_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, p)| *p)
    }

    /// Canonical stdint spelling. `Bits` has no C name of its own.
    pub fn c_name(&self) -> Option<&'static str> {
        match self {
            Primitive::Int(IntWidth::Int8, Sign::Unsigned) => Some("uint8_t"),
            Primitive::Int(IntWidth::Int16, Sign::Unsigned) => Some("uint16_t"),
            Primitive::Int(IntWidth::Int32, Sign::Unsigned) => Some("uint32_t"),
            Primitive::Int(IntWidth::Int64, Sign::Unsigned) => Some("uint64_t"),
            Primitive::Int(IntWidth::Int8, Sign::Signed) => Some("int8_t"),
            Primitive::Int(IntWidth::Int16, Sign::Signed) => Some("int16_t"),
            Primitive::Int(IntWidth::Int32, Sign::Signed) => Some("int32_t"),
            Primitive::Int(IntWidth::Int64, Sign::Signed) => Some("int64_t"),
            Primitive::Float(FloatWidth::Single) => Some("float"),
            Primitive::Float(FloatWidth::Double) => Some("double"),
            Primitive::Bits(_) => None,
        }
    }

    pub fn known_c_names() -> impl Iterator<Item = &'static str> {
        C_NAME_TABLE.iter().map(|(n, _)| *n)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Int(width, Sign::Unsigned) => write!(f, "u{}", width.bits()),
            Primitive::Int(width, Sign::Signed) => write!(f, "i{}", width.bits()),
            Primitive::Float(FloatWidth::Single) => write!(f, "f32"),
            Primitive::Float(FloatWidth::Double) => write!(f, "f64"),
            Primitive::Bits(bits) => write!(f, "bits({})", bits),
        }
    }
}

/// Byte order annotation for a field. Metadata only: it never moves an
/// offset, but it is carried through definitions and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little"),
            Endianness::Big => write!(f, "big"),
        }
    }
}
