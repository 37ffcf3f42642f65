// Wed May 6 2026 - Alex

use crate::config::Config;
use crate::layout::LayoutError;
use crate::model::{AggregateDef, Endianness, FieldDef, Primitive, Section, StructDef, UnionDef};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level shape of a definitions file.
#[derive(Debug, Deserialize)]
pub struct DefsFile {
    pub types: Vec<RawType>,
}

#[derive(Debug, Deserialize)]
pub struct RawType {
    pub kind: RawKind,
    pub name: String,
    #[serde(default)]
    pub pack: Option<u64>,
    #[serde(default)]
    pub fields: Vec<RawField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawKind {
    Struct,
    Union,
}

#[derive(Debug, Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub endian: Option<Endianness>,
}

/// Named definitions in declaration order. Later entries may refer to
/// earlier ones by name; forward references are rejected.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, AggregateDef>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, def: AggregateDef) -> Result<(), LayoutError> {
        let name = def.name().to_string();
        if self.types.contains_key(&name) {
            return Err(LayoutError::DuplicateType(name));
        }
        self.types.insert(name, def);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AggregateDef> {
        self.types.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AggregateDef> {
        self.types.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

pub fn load_file(path: &Path, config: &Config) -> Result<TypeRegistry, LayoutError> {
    let text = fs::read_to_string(path)?;
    parse_str(&text, config)
}

pub fn parse_str(text: &str, config: &Config) -> Result<TypeRegistry, LayoutError> {
    let file: DefsFile = serde_json::from_str(text)?;
    build_registry(&file, config)
}

fn build_registry(file: &DefsFile, config: &Config) -> Result<TypeRegistry, LayoutError> {
    let mut registry = TypeRegistry::new();
    for raw in &file.types {
        let def = lower_type(raw, &registry, config)?;
        def.validate()?;
        registry.insert(def)?;
    }
    Ok(registry)
}

fn lower_type(
    raw: &RawType,
    registry: &TypeRegistry,
    config: &Config,
) -> Result<AggregateDef, LayoutError> {
    let mut fields = Vec::with_capacity(raw.fields.len());
    for field in &raw.fields {
        let ty = parse_type_expr(&field.ty, registry)?;
        let endian = field.endian.unwrap_or(config.default_endianness);
        fields.push(FieldDef::new(&field.name, ty).with_endian(endian));
    }

    match raw.kind {
        RawKind::Struct => Ok(AggregateDef::Struct(StructDef {
            name: raw.name.clone(),
            fields,
            pack: raw.pack,
        })),
        RawKind::Union => {
            if raw.pack.is_some() {
                return Err(LayoutError::PackOnUnion(raw.name.clone()));
            }
            Ok(AggregateDef::Union(UnionDef {
                name: raw.name.clone(),
                fields,
            }))
        }
    }
}

/// Parses a field type expression: a primitive spelling, `bits(N)`, or
/// the name of an earlier definition, with optional array dimensions.
pub fn parse_type_expr(expr: &str, registry: &TypeRegistry) -> Result<Section, LayoutError> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(bad(expr));
    }

    let (base, dims) = split_dims(trimmed)?;
    let section = resolve_base(base.trim(), registry)?;

    if dims.is_empty() {
        return Ok(section);
    }
    // Bit-width scalars describe a lone storage unit; arrays of them
    // have no defined layout here.
    if matches!(section, Section::Prim(Primitive::Bits(_))) {
        return Err(bad(expr));
    }

    let mut built = section;
    for dim in dims.into_iter().rev() {
        built = Section::array_of(built, dim);
    }
    Ok(built)
}

fn split_dims(expr: &str) -> Result<(&str, Vec<u64>), LayoutError> {
    let open = match expr.find('[') {
        Some(i) => i,
        None => return Ok((expr, Vec::new())),
    };

    let base = &expr[..open];
    if base.trim().is_empty() {
        return Err(bad(expr));
    }

    let mut dims = Vec::new();
    let mut rest = &expr[open..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return Err(bad(expr));
        }
        let close = rest.find(']').ok_or_else(|| bad(expr))?;
        let dim: u64 = rest[1..close].trim().parse().map_err(|_| bad(expr))?;
        dims.push(dim);
        rest = &rest[close + 1..];
    }
    Ok((base, dims))
}

fn resolve_base(base: &str, registry: &TypeRegistry) -> Result<Section, LayoutError> {
    if let Some(inner) = base.strip_prefix("bits(") {
        let inner = inner.strip_suffix(')').ok_or_else(|| bad(base))?;
        let bits: u64 = inner.trim().parse().map_err(|_| bad(base))?;
        if bits == 0 || bits > 64 {
            return Err(LayoutError::BadBitWidth(bits));
        }
        return Ok(Section::Prim(Primitive::Bits(bits as u8)));
    }

    if let Some(prim) = parse_primitive(base) {
        return Ok(Section::Prim(prim));
    }

    let (kind, name) = if let Some(rest) = base.strip_prefix("struct ") {
        (Some("struct"), rest.trim())
    } else if let Some(rest) = base.strip_prefix("union ") {
        (Some("union"), rest.trim())
    } else {
        (None, base)
    };

    match registry.get(name) {
        Some(def) => {
            if let Some(kind) = kind {
                if def.kind_name() != kind {
                    return Err(LayoutError::UnknownType(base.to_string()));
                }
            }
            Ok(def.as_section())
        }
        None => {
            log::debug!(
                "Known primitive spellings: {}",
                Primitive::known_c_names().join(", ")
            );
            Err(LayoutError::UnknownType(name.to_string()))
        }
    }
}

fn parse_primitive(name: &str) -> Option<Primitive> {
    let prim = match name {
        "u8" => Primitive::u8(),
        "u16" => Primitive::u16(),
        "u32" => Primitive::u32(),
        "u64" => Primitive::u64(),
        "i8" => Primitive::i8(),
        "i16" => Primitive::i16(),
        "i32" => Primitive::i32(),
        "i64" => Primitive::i64(),
        "f32" => Primitive::f32(),
        "f64" => Primitive::f64(),
        other => return Primitive::from_c_name(other),
    };
    Some(prim)
}

fn bad(expr: &str) -> LayoutError {
    LayoutError::BadTypeExpr(expr.to_string())
}
