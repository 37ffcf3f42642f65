// Fri May 8 2026 - Alex

pub mod config;
pub mod model;
pub mod layout;
pub mod defs;
pub mod demo;
pub mod report;
pub mod cli;
pub mod utils;

pub use config::Config;
pub use defs::TypeRegistry;
pub use layout::{resolve, LayoutError, PaddingHole, ResolvedField, ResolvedLayout};
pub use model::{
    AggregateDef, Endianness, FieldDef, Primitive, Section, StructBuilder, StructDef,
    UnionBuilder, UnionDef,
};
pub use report::LayoutReport;
