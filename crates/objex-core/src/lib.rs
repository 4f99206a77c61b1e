//! Objex Core - generic object-graph to tree-value conversion
//!
//! This crate provides the schema-less introspection-and-normalization
//! engine, including:
//! - The `TreeValue` tree model every exporter consumes
//! - Attribute introspection over the explicit `Describe` capability
//! - Cycle detection via a per-conversion, identity-based guard
//! - Recursive normalization of scalars, collections, maps, and objects
//! - Tabular flattening of record sequences into header/rows layouts
//!
//! The core performs no file I/O; its output contract is the tree value
//! (plus the flattener's header/rows pair for tabular targets).

pub mod describe;
pub mod errors;
pub mod flatten;
pub mod guard;
pub mod logging_facility;
pub mod normalize;
pub mod value;

// Re-export commonly used types
pub use describe::{
    introspect, AttrResult, AttributeError, Describe, Diagnostic, Diagnostics, RawValue,
    ACCESS_ERROR_SENTINEL,
};
pub use errors::{ObjexError, Result};
pub use flatten::{cell_text, flatten, Flattened};
pub use guard::{CycleGuard, ObjectId};
pub use normalize::{
    convert, convert_keyed, convert_list, convert_with, Conversion, ConvertOptions, Traversal,
};
pub use value::{TreeMap, TreeValue};
