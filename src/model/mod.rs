// Mon May 4 2026 - Alex

pub mod composite;
pub mod primitive;

pub use composite::{
    AggregateDef, FieldDef, Section, StructBuilder, StructDef, UnionBuilder, UnionDef,
};
pub use primitive::{Endianness, FloatWidth, IntWidth, Primitive, Sign};
