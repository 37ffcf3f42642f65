// Wed May 6 2026 - Alex

use crate::config::Config;
use crate::layout::{resolve_struct, LayoutError, ResolvedLayout};
use crate::model::{Primitive, Section, StructDef};
use std::io::Write;

/// First record: the wide field first, so the compiler pads the tail.
pub fn s1() -> StructDef {
    StructDef::builder("S1")
        .field("field1", Section::Prim(Primitive::u32()))
        .field("field2", Section::Prim(Primitive::u8()))
        .build()
}

/// Second record: the same two fields reversed, so the padding moves
/// between them instead.
pub fn s2() -> StructDef {
    StructDef::builder("S2")
        .field("field1", Section::Prim(Primitive::u8()))
        .field("field2", Section::Prim(Primitive::u32()))
        .build()
}

pub fn records() -> Vec<StructDef> {
    vec![s1(), s2()]
}

pub fn layouts(config: &Config) -> Result<Vec<ResolvedLayout>, LayoutError> {
    records()
        .iter()
        .map(|def| resolve_struct(def, config))
        .collect()
}

/// The demonstration output: one `sizeof` line per record.
pub fn render(config: &Config) -> Result<String, LayoutError> {
    Ok(layouts(config)?
        .iter()
        .map(|layout| format!("sizeof({}) = {}\n", layout.name, layout.size))
        .collect())
}

pub fn run(out: &mut impl Write, config: &Config) -> Result<(), LayoutError> {
    out.write_all(render(config)?.as_bytes())?;
    Ok(())
}
