// Thu May 7 2026 - Alex

use crate::config::Config;
use crate::layout::{resolve, LayoutError};
use crate::model::{AggregateDef, FieldDef, Primitive, Section};
use std::path::Path;

/// Renders each definition back as a C `typedef`, annotated with the
/// resolved offsets.
pub fn render(defs: &[AggregateDef], config: &Config) -> Result<String, LayoutError> {
    let mut out = String::new();
    out.push_str(&format!(
        "// Generated by clayout {}\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("#include <stdint.h>\n\n");

    for def in defs {
        out.push_str(&render_def(def, config)?);
        out.push('\n');
    }

    Ok(out)
}

fn render_def(def: &AggregateDef, config: &Config) -> Result<String, LayoutError> {
    let layout = resolve(def, config)?;
    let mut out = String::new();

    if let Some(pack) = def.pack() {
        out.push_str(&format!("#pragma pack(push, {})\n", pack));
    }

    out.push_str(&format!("typedef {} {} {{\n", def.kind_name(), def.name()));
    for (field, resolved) in def.fields().iter().zip(&layout.fields) {
        out.push_str(&render_field(field, resolved.offset, resolved.size));
    }
    out.push_str(&format!(
        "}} {};  // sizeof = 0x{:x} ({} bytes)\n",
        def.name(),
        layout.size,
        layout.size
    ));

    if def.pack().is_some() {
        out.push_str("#pragma pack(pop)\n");
    }

    Ok(out)
}

fn render_field(field: &FieldDef, offset: u64, size: u64) -> String {
    if let Section::Prim(prim @ Primitive::Bits(bits)) = &field.ty {
        return format!(
            "    {} {} : {};  // offset 0x{:x}, size {}\n",
            storage_c_name(prim),
            field.name,
            bits,
            offset,
            size
        );
    }

    format!(
        "    {} {}{};  // offset 0x{:x}, size {}\n",
        c_base_name(&field.ty),
        field.name,
        c_dims(&field.ty),
        offset,
        size
    )
}

fn c_base_name(section: &Section) -> String {
    match section {
        Section::Prim(p) => match p.c_name() {
            Some(name) => name.to_string(),
            None => storage_c_name(p),
        },
        Section::Struct(d) => format!("struct {}", d.name),
        Section::Union(d) => format!("union {}", d.name),
        Section::Array { element, .. } => c_base_name(element),
    }
}

/// Array suffixes in C declaration order, outermost dimension first.
fn c_dims(section: &Section) -> String {
    let mut dims = String::new();
    let mut cur = section;
    while let Section::Array { element, count } = cur {
        dims.push_str(&format!("[{}]", count));
        cur = element;
    }
    dims
}

fn storage_c_name(prim: &Primitive) -> String {
    format!("uint{}_t", prim.size() * 8)
}

pub fn write_file(
    defs: &[AggregateDef],
    config: &Config,
    path: &Path,
) -> Result<(), LayoutError> {
    crate::report::write_string_to_file(path, &render(defs, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use crate::model::{StructDef, UnionDef};

    fn prim(p: Primitive) -> Section {
        Section::Prim(p)
    }

    #[test]
    fn test_demo_declarations() {
        let defs: Vec<AggregateDef> = demo::records()
            .into_iter()
            .map(AggregateDef::Struct)
            .collect();
        let out = render(&defs, &Config::default()).unwrap();

        assert!(out.contains("#include <stdint.h>"));
        assert!(out.contains("typedef struct S1 {\n"));
        assert!(out.contains("    uint32_t field1;  // offset 0x0, size 4\n"));
        assert!(out.contains("    uint8_t field2;  // offset 0x4, size 1\n"));
        assert!(out.contains("} S1;  // sizeof = 0x8 (8 bytes)\n"));
        assert!(out.contains("typedef struct S2 {\n"));
        assert!(out.contains("    uint32_t field2;  // offset 0x4, size 4\n"));
        assert!(!out.contains("#pragma pack"));
    }

    #[test]
    fn test_packed_declaration_wrapped_in_pragma() {
        let def = AggregateDef::Struct(
            StructDef::builder("Tight")
                .field("word", prim(Primitive::u32()))
                .field("tag", prim(Primitive::u8()))
                .pack(1)
                .build(),
        );
        let out = render(&[def], &Config::default()).unwrap();

        assert!(out.contains("#pragma pack(push, 1)\n"));
        assert!(out.contains("} Tight;  // sizeof = 0x5 (5 bytes)\n"));
        assert!(out.contains("#pragma pack(pop)\n"));
    }

    #[test]
    fn test_bit_width_field_declaration() {
        let def = AggregateDef::Struct(
            StructDef::builder("Flags")
                .field("bits", prim(Primitive::Bits(12)))
                .build(),
        );
        let out = render(&[def], &Config::default()).unwrap();
        assert!(out.contains("    uint16_t bits : 12;  // offset 0x0, size 2\n"));
    }

    #[test]
    fn test_array_field_declaration() {
        let grid = Section::array_of(Section::array_of(prim(Primitive::u8()), 2), 4);
        let def = AggregateDef::Struct(StructDef::builder("Grid").field("cells", grid).build());
        let out = render(&[def], &Config::default()).unwrap();
        assert!(out.contains("    uint8_t cells[4][2];  // offset 0x0, size 8\n"));
    }

    #[test]
    fn test_union_declaration() {
        let def = AggregateDef::Union(
            UnionDef::builder("Word")
                .field("raw", Section::array_of(prim(Primitive::u8()), 4))
                .field("value", prim(Primitive::u32()))
                .build(),
        );
        let out = render(&[def], &Config::default()).unwrap();
        assert!(out.contains("typedef union Word {\n"));
        assert!(out.contains("    uint8_t raw[4];  // offset 0x0, size 4\n"));
        assert!(out.contains("} Word;  // sizeof = 0x4 (4 bytes)\n"));
    }

    #[test]
    fn test_nested_reference_uses_tag() {
        let inner = StructDef::builder("Inner")
            .field("x", prim(Primitive::u8()))
            .build();
        let outer = AggregateDef::Struct(
            StructDef::builder("Outer")
                .field("inner", Section::Struct(inner.clone()))
                .build(),
        );
        let out = render(&[AggregateDef::Struct(inner), outer], &Config::default()).unwrap();
        assert!(out.contains("    struct Inner inner;  // offset 0x0, size 1\n"));
    }
}
