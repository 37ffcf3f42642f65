// Mon May 4 2026 - Alex

use crate::config::Config;
use crate::layout::{resolver, LayoutError};
use crate::model::{Endianness, Primitive};
use std::fmt;

/// One node of the type tree. Aggregates are embedded by value, so the
/// tree is always finite.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Prim(Primitive),
    Struct(StructDef),
    Union(UnionDef),
    Array { element: Box<Section>, count: u64 },
}

impl Section {
    pub fn array_of(element: Section, count: u64) -> Self {
        Section::Array {
            element: Box::new(element),
            count,
        }
    }

    /// Size in bytes under the default platform rules.
    pub fn size(&self) -> Result<u64, LayoutError> {
        resolver::section_size(self, &Config::default())
    }

    /// Natural alignment under the default platform rules.
    pub fn alignment(&self) -> u64 {
        resolver::section_alignment(self, &Config::default())
    }

    /// Declared width for a lone bit-width scalar, storage bits otherwise.
    pub fn size_bits(&self) -> Result<u64, LayoutError> {
        match self {
            Section::Prim(p) => Ok(p.size_bits()),
            other => other
                .size()?
                .checked_mul(8)
                .ok_or_else(|| LayoutError::TooLarge(other.to_string())),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Prim(p) => write!(f, "{}", p),
            Section::Struct(d) => write!(f, "struct {}", d.name),
            Section::Union(d) => write!(f, "union {}", d.name),
            Section::Array { .. } => {
                // Dimensions print outermost first, as declared in C.
                let mut base = self;
                let mut dims = Vec::new();
                while let Section::Array { element, count } = base {
                    dims.push(*count);
                    base = element;
                }
                write!(f, "{}", base)?;
                for dim in dims {
                    write!(f, "[{}]", dim)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub ty: Section,
    pub endian: Endianness,
}

impl FieldDef {
    pub fn new(name: &str, ty: Section) -> Self {
        Self {
            name: name.to_string(),
            ty,
            endian: Endianness::Little,
        }
    }

    pub fn with_endian(mut self, endian: Endianness) -> Self {
        self.endian = endian;
        self
    }
}

/// A struct definition. `pack` caps member alignment the way
/// `#pragma pack(n)` does.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
    pub pack: Option<u64>,
}

impl StructDef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
            pack: None,
        }
    }

    pub fn builder(name: &str) -> StructBuilder {
        StructBuilder {
            def: StructDef::new(name),
        }
    }

    pub fn add_field(&mut self, name: &str, ty: Section) {
        self.fields.push(FieldDef::new(name, ty));
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn size(&self) -> Result<u64, LayoutError> {
        resolver::struct_size(self, &Config::default())
    }

    pub fn alignment(&self) -> u64 {
        resolver::struct_alignment(self, &Config::default())
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if let Some(pack) = self.pack {
            if !pack.is_power_of_two() {
                return Err(LayoutError::BadPack(pack));
            }
        }
        validate_fields(&self.name, &self.fields)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl UnionDef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn builder(name: &str) -> UnionBuilder {
        UnionBuilder {
            def: UnionDef::new(name),
        }
    }

    pub fn add_field(&mut self, name: &str, ty: Section) {
        self.fields.push(FieldDef::new(name, ty));
    }

    pub fn size(&self) -> Result<u64, LayoutError> {
        resolver::union_size(self, &Config::default())
    }

    pub fn alignment(&self) -> u64 {
        resolver::union_alignment(self, &Config::default())
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_fields(&self.name, &self.fields)
    }
}

fn validate_fields(aggregate: &str, fields: &[FieldDef]) -> Result<(), LayoutError> {
    for (i, field) in fields.iter().enumerate() {
        if fields[..i].iter().any(|f| f.name == field.name) {
            return Err(LayoutError::DuplicateField {
                aggregate: aggregate.to_string(),
                field: field.name.clone(),
            });
        }
        validate_section(&field.ty)?;
    }
    Ok(())
}

fn validate_section(section: &Section) -> Result<(), LayoutError> {
    match section {
        Section::Prim(Primitive::Bits(bits)) => {
            if *bits == 0 || *bits > 64 {
                return Err(LayoutError::BadBitWidth(*bits as u64));
            }
            Ok(())
        }
        Section::Prim(_) => Ok(()),
        Section::Struct(d) => d.validate(),
        Section::Union(d) => d.validate(),
        Section::Array { element, .. } => validate_section(element),
    }
}

/// A named top-level definition.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateDef {
    Struct(StructDef),
    Union(UnionDef),
}

impl AggregateDef {
    pub fn name(&self) -> &str {
        match self {
            AggregateDef::Struct(d) => &d.name,
            AggregateDef::Union(d) => &d.name,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            AggregateDef::Struct(_) => "struct",
            AggregateDef::Union(_) => "union",
        }
    }

    pub fn fields(&self) -> &[FieldDef] {
        match self {
            AggregateDef::Struct(d) => &d.fields,
            AggregateDef::Union(d) => &d.fields,
        }
    }

    pub fn pack(&self) -> Option<u64> {
        match self {
            AggregateDef::Struct(d) => d.pack,
            AggregateDef::Union(_) => None,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        match self {
            AggregateDef::Struct(d) => d.validate(),
            AggregateDef::Union(d) => d.validate(),
        }
    }

    /// Clone into a section, for embedding a named definition as a field.
    pub fn as_section(&self) -> Section {
        match self {
            AggregateDef::Struct(d) => Section::Struct(d.clone()),
            AggregateDef::Union(d) => Section::Union(d.clone()),
        }
    }
}

pub struct StructBuilder {
    def: StructDef,
}

impl StructBuilder {
    pub fn field(mut self, name: &str, ty: Section) -> Self {
        self.def.add_field(name, ty);
        self
    }

    pub fn field_endian(mut self, name: &str, ty: Section, endian: Endianness) -> Self {
        self.def.fields.push(FieldDef::new(name, ty).with_endian(endian));
        self
    }

    pub fn pack(mut self, pack: u64) -> Self {
        self.def.pack = Some(pack);
        self
    }

    pub fn build(self) -> StructDef {
        self.def
    }
}

pub struct UnionBuilder {
    def: UnionDef,
}

impl UnionBuilder {
    pub fn field(mut self, name: &str, ty: Section) -> Self {
        self.def.add_field(name, ty);
        self
    }

    pub fn build(self) -> UnionDef {
        self.def
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prim(p: Primitive) -> Section {
        Section::Prim(p)
    }

    #[test]
    fn test_struct_size_wide_then_narrow() {
        let def = StructDef::builder("S1")
            .field("field1", prim(Primitive::u32()))
            .field("field2", prim(Primitive::u8()))
            .build();
        assert_eq!(8, def.size().unwrap());
        assert_eq!(4, def.alignment());
    }

    #[test]
    fn test_struct_size_narrow_then_wide() {
        let def = StructDef::builder("S2")
            .field("field1", prim(Primitive::u8()))
            .field("field2", prim(Primitive::u32()))
            .build();
        assert_eq!(8, def.size().unwrap());
        assert_eq!(4, def.alignment());
    }

    #[test]
    fn test_struct_interior_and_tail_padding() {
        let def = StructDef::builder("Mixed")
            .field("a", prim(Primitive::u8()))
            .field("b", prim(Primitive::u32()))
            .field("c", prim(Primitive::u8()))
            .build();
        assert_eq!(12, def.size().unwrap());
    }

    #[test]
    fn test_struct_fully_packed() {
        let def = StructDef::builder("Packed")
            .field("a", prim(Primitive::u8()))
            .field("b", prim(Primitive::u32()))
            .field("c", prim(Primitive::u8()))
            .pack(1)
            .build();
        assert_eq!(6, def.size().unwrap());
        assert_eq!(1, def.alignment());
    }

    #[test]
    fn test_struct_pack_cap() {
        let def = StructDef::builder("Pack2")
            .field("a", prim(Primitive::u8()))
            .field("b", prim(Primitive::u32()))
            .pack(2)
            .build();
        assert_eq!(6, def.size().unwrap());
        assert_eq!(2, def.alignment());
    }

    #[test]
    fn test_empty_struct() {
        let def = StructDef::new("Empty");
        assert_eq!(0, def.size().unwrap());
        assert_eq!(1, def.alignment());
    }

    #[test]
    fn test_union_size() {
        let def = UnionDef::builder("U")
            .field("a", prim(Primitive::u8()))
            .field("b", prim(Primitive::u32()))
            .build();
        assert_eq!(4, def.size().unwrap());
        assert_eq!(4, def.alignment());
    }

    #[test]
    fn test_union_tail_padded_to_alignment() {
        let def = UnionDef::builder("U")
            .field("raw", Section::array_of(prim(Primitive::u8()), 5))
            .field("word", prim(Primitive::u32()))
            .build();
        assert_eq!(8, def.size().unwrap());
        assert_eq!(4, def.alignment());
    }

    #[test]
    fn test_array_section() {
        let arr = Section::array_of(prim(Primitive::u32()), 4);
        assert_eq!(16, arr.size().unwrap());
        assert_eq!(4, arr.alignment());
        assert_eq!(0, Section::array_of(prim(Primitive::u8()), 0).size().unwrap());
    }

    #[test]
    fn test_oversized_array_errors() {
        let huge = Section::array_of(prim(Primitive::u64()), u64::MAX / 4);
        assert!(matches!(huge.size(), Err(LayoutError::TooLarge(_))));
        // The count alone fits; eight bits per byte does not.
        let wide = Section::array_of(prim(Primitive::u8()), 1u64 << 62);
        assert_eq!(1u64 << 62, wide.size().unwrap());
        assert!(matches!(wide.size_bits(), Err(LayoutError::TooLarge(_))));
    }

    #[test]
    fn test_nested_struct_layout() {
        let inner = StructDef::builder("Inner")
            .field("big", prim(Primitive::i64()))
            .field("small", prim(Primitive::u8()))
            .build();
        assert_eq!(16, inner.size().unwrap());

        let nested = StructDef::builder("Nested")
            .field("inner", Section::Struct(inner))
            .field("last", prim(Primitive::u8()))
            .build();
        assert_eq!(24, nested.size().unwrap());

        let together = StructDef::builder("Together")
            .field("big", prim(Primitive::i64()))
            .field("small", prim(Primitive::u8()))
            .field("last", prim(Primitive::u8()))
            .build();
        assert_eq!(16, together.size().unwrap());
    }

    #[test]
    fn test_validate_duplicate_field() {
        let def = StructDef::builder("Dup")
            .field("x", prim(Primitive::u8()))
            .field("x", prim(Primitive::u16()))
            .build();
        assert!(matches!(
            def.validate(),
            Err(LayoutError::DuplicateField { .. })
        ));
    }

    #[test]
    fn test_validate_bad_pack() {
        let def = StructDef::builder("BadPack")
            .field("x", prim(Primitive::u32()))
            .pack(3)
            .build();
        assert!(matches!(def.validate(), Err(LayoutError::BadPack(3))));
    }

    #[test]
    fn test_validate_bad_bit_width() {
        let def = StructDef::builder("BadBits")
            .field("x", prim(Primitive::Bits(0)))
            .build();
        assert!(matches!(def.validate(), Err(LayoutError::BadBitWidth(0))));
    }

    #[test]
    fn test_section_display() {
        assert_eq!("u32", prim(Primitive::u32()).to_string());
        let def = StructDef::new("S1");
        assert_eq!("struct S1", Section::Struct(def).to_string());

        let grid = Section::array_of(Section::array_of(prim(Primitive::u8()), 2), 4);
        assert_eq!("u8[4][2]", grid.to_string());
    }

    #[test]
    fn test_field_lookup() {
        let def = StructDef::builder("S")
            .field("x", prim(Primitive::u8()))
            .build();
        assert!(def.get_field("x").is_some());
        assert!(def.get_field("y").is_none());
    }

    #[test]
    fn test_field_endian_annotation() {
        let def = StructDef::builder("Net")
            .field_endian("seq", prim(Primitive::u32()), Endianness::Big)
            .field("flags", prim(Primitive::u8()))
            .build();
        assert_eq!(Endianness::Big, def.fields[0].endian);
        assert_eq!(Endianness::Little, def.fields[1].endian);
        // The annotation never moves an offset.
        assert_eq!(8, def.size().unwrap());
    }
}
