// Mon May 4 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unknown type name: {0}")]
    UnknownType(String),
    #[error("Duplicate type definition: {0}")]
    DuplicateType(String),
    #[error("Duplicate field '{field}' in {aggregate}")]
    DuplicateField { aggregate: String, field: String },
    #[error("Bit width must be between 1 and 64, got {0}")]
    BadBitWidth(u64),
    #[error("Pack value must be a power of two, got {0}")]
    BadPack(u64),
    #[error("Pack applies to structs only: {0}")]
    PackOnUnion(String),
    #[error("Malformed type expression: {0}")]
    BadTypeExpr(String),
    #[error("Type too large for a 64-bit size: {0}")]
    TooLarge(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
