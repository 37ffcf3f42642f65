// Tue May 5 2026 - Alex

pub mod alignment;
pub mod error;
pub mod resolver;

pub use alignment::{align_up, bits_storage_bytes, checked_align_up, is_aligned};
pub use error::LayoutError;
pub use resolver::{
    resolve, resolve_struct, resolve_union, section_alignment, section_size, struct_alignment,
    struct_size, union_alignment, union_size, PaddingHole, ResolvedField, ResolvedLayout,
};
