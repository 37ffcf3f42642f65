// Tue May 5 2026 - Alex

use crate::config::Config;
use crate::layout::{checked_align_up, is_aligned, LayoutError};
use crate::model::{AggregateDef, Endianness, Section, StructDef, UnionDef};
use itertools::Itertools;

/// A fully laid-out aggregate: every field placed, every hole found.
#[derive(Debug, Clone)]
pub struct ResolvedLayout {
    pub name: String,
    pub kind: &'static str,
    pub size: u64,
    pub alignment: u64,
    pub bit_size: u64,
    pub pack: Option<u64>,
    pub fields: Vec<ResolvedField>,
    pub holes: Vec<PaddingHole>,
}

#[derive(Debug, Clone)]
pub struct ResolvedField {
    pub name: String,
    pub type_name: String,
    pub offset: u64,
    pub size: u64,
    pub alignment: u64,
    pub endian: Endianness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingHole {
    pub offset: u64,
    pub size: u64,
}

impl ResolvedLayout {
    pub fn total_padding(&self) -> u64 {
        self.holes.iter().map(|h| h.size).sum()
    }

    pub fn padding_percentage(&self) -> f64 {
        if self.size == 0 {
            return 0.0;
        }
        (self.total_padding() as f64 / self.size as f64) * 100.0
    }

    pub fn field(&self, name: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl ResolvedField {
    pub fn end_offset(&self) -> u64 {
        self.offset + self.size
    }
}

pub fn resolve(def: &AggregateDef, config: &Config) -> Result<ResolvedLayout, LayoutError> {
    match def {
        AggregateDef::Struct(d) => resolve_struct(d, config),
        AggregateDef::Union(d) => resolve_union(d, config),
    }
}

pub fn resolve_struct(def: &StructDef, config: &Config) -> Result<ResolvedLayout, LayoutError> {
    let alignment = struct_alignment(def, config);
    let mut fields = Vec::with_capacity(def.fields.len());
    let mut offset = 0u64;

    for field in &def.fields {
        let align = effective_alignment(&field.ty, def.pack, config);
        offset = checked_align_up(offset, align)
            .ok_or_else(|| LayoutError::TooLarge(def.name.clone()))?;
        debug_assert!(is_aligned(offset, align));
        let size = section_size(&field.ty, config)?;
        fields.push(ResolvedField {
            name: field.name.clone(),
            type_name: field.ty.to_string(),
            offset,
            size,
            alignment: align,
            endian: field.endian,
        });
        offset = offset
            .checked_add(size)
            .ok_or_else(|| LayoutError::TooLarge(def.name.clone()))?;
    }

    let size = checked_align_up(offset, alignment)
        .ok_or_else(|| LayoutError::TooLarge(def.name.clone()))?;
    let bit_size = size
        .checked_mul(8)
        .ok_or_else(|| LayoutError::TooLarge(def.name.clone()))?;
    let holes = scan_struct_holes(&fields, size);

    Ok(ResolvedLayout {
        name: def.name.clone(),
        kind: "struct",
        size,
        alignment,
        bit_size,
        pack: def.pack,
        fields,
        holes,
    })
}

pub fn resolve_union(def: &UnionDef, config: &Config) -> Result<ResolvedLayout, LayoutError> {
    let alignment = union_alignment(def, config);
    let mut fields = Vec::with_capacity(def.fields.len());
    for field in &def.fields {
        fields.push(ResolvedField {
            name: field.name.clone(),
            type_name: field.ty.to_string(),
            offset: 0,
            size: section_size(&field.ty, config)?,
            alignment: section_alignment(&field.ty, config),
            endian: field.endian,
        });
    }

    let max_end = fields.iter().map(|f| f.size).max().unwrap_or(0);
    let size = checked_align_up(max_end, alignment)
        .ok_or_else(|| LayoutError::TooLarge(def.name.clone()))?;
    let bit_size = size
        .checked_mul(8)
        .ok_or_else(|| LayoutError::TooLarge(def.name.clone()))?;

    // Union members overlap, so the only hole is the tail.
    let holes = if size > max_end {
        vec![PaddingHole {
            offset: max_end,
            size: size - max_end,
        }]
    } else {
        Vec::new()
    };

    Ok(ResolvedLayout {
        name: def.name.clone(),
        kind: "union",
        size,
        alignment,
        bit_size,
        pack: None,
        fields,
        holes,
    })
}

pub fn section_size(section: &Section, config: &Config) -> Result<u64, LayoutError> {
    match section {
        Section::Prim(p) => Ok(p.size()),
        Section::Struct(d) => Ok(resolve_struct(d, config)?.size),
        Section::Union(d) => Ok(resolve_union(d, config)?.size),
        Section::Array { element, count } => section_size(element, config)?
            .checked_mul(*count)
            .ok_or_else(|| LayoutError::TooLarge(section.to_string())),
    }
}

pub fn section_alignment(section: &Section, config: &Config) -> u64 {
    match section {
        Section::Prim(p) => p.alignment().min(config.max_alignment),
        Section::Struct(d) => struct_alignment(d, config),
        Section::Union(d) => union_alignment(d, config),
        Section::Array { element, .. } => section_alignment(element, config),
    }
}

pub fn struct_size(def: &StructDef, config: &Config) -> Result<u64, LayoutError> {
    Ok(resolve_struct(def, config)?.size)
}

pub fn struct_alignment(def: &StructDef, config: &Config) -> u64 {
    def.fields
        .iter()
        .map(|f| effective_alignment(&f.ty, def.pack, config))
        .max()
        .unwrap_or(1)
}

pub fn union_size(def: &UnionDef, config: &Config) -> Result<u64, LayoutError> {
    Ok(resolve_union(def, config)?.size)
}

pub fn union_alignment(def: &UnionDef, config: &Config) -> u64 {
    def.fields
        .iter()
        .map(|f| section_alignment(&f.ty, config))
        .max()
        .unwrap_or(1)
}

fn effective_alignment(section: &Section, pack: Option<u64>, config: &Config) -> u64 {
    let natural = section_alignment(section, config);
    match pack {
        Some(cap) => natural.min(cap),
        None => natural,
    }
}

fn scan_struct_holes(fields: &[ResolvedField], size: u64) -> Vec<PaddingHole> {
    let mut holes = Vec::new();

    for (prev, next) in fields.iter().tuple_windows() {
        let end = prev.end_offset();
        if next.offset > end {
            holes.push(PaddingHole {
                offset: end,
                size: next.offset - end,
            });
        }
    }

    if let Some(last) = fields.last() {
        let end = last.end_offset();
        if size > end {
            holes.push(PaddingHole {
                offset: end,
                size: size - end,
            });
        }
    }

    holes
}
