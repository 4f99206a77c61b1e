//! Value normalization - raw object graphs into tree values
//!
//! Depth-first, synchronous recursion. Scalars pass through, collections and
//! mappings recurse, opaque objects are introspected behind the cycle guard.
//! Every per-attribute problem stays in-band: the tree carries sentinel and
//! marker entries, the diagnostics side-channel carries the details, and
//! nothing short of a broken record shape escapes as a hard error.

use std::rc::Rc;

use crate::describe::{introspect, Describe, Diagnostic, Diagnostics, RawValue};
use crate::guard::{CycleGuard, ObjectId};
use crate::value::{TreeMap, TreeValue};

/// Key of the in-band marker map
pub const ERROR_KEY: &str = "error";
/// Marker message for a detected circular reference
pub const CIRCULAR_REFERENCE_MESSAGE: &str = "circular reference detected";
/// Marker message when recursion exceeds the depth limit
pub const MAX_DEPTH_MESSAGE: &str = "max depth exceeded";

/// Synthetic record key carrying an entity's external identifier
pub const KEY_FIELD: &str = "key";
/// Synthetic record key carrying an entity's runtime type name
pub const OBJECT_TYPE_FIELD: &str = "object_type";

/// Tuning knobs for one conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Hard bound on recursion depth. The cycle guard alone does not bound
    /// depth on acyclic graphs, so pathologically deep inputs terminate with
    /// an in-band marker instead of exhausting the stack.
    pub max_depth: usize,
    /// Prefix every nested object map with an `"object_type"` entry
    pub tag_object_types: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            tag_object_types: false,
        }
    }
}

/// Result of one conversion: the tree plus everything recovered along the way
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Normalized tree value
    pub value: TreeValue,
    /// Recovered problems, in occurrence order
    pub diagnostics: Diagnostics,
}

/// Explicit traversal context for one top-level conversion
///
/// Owns its own [`CycleGuard`] and [`Diagnostics`]; no shared mutable state,
/// so concurrent conversions never interfere.
#[derive(Debug, Default)]
pub struct Traversal {
    options: ConvertOptions,
    guard: CycleGuard,
    diagnostics: Diagnostics,
    depth: usize,
}

impl Traversal {
    /// Create a fresh traversal with the given options
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            guard: CycleGuard::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
        }
    }

    /// Normalize one raw value into a tree value
    ///
    /// Dispatch order: null, scalars, mappings, sequences, opaque objects.
    /// Circular references and depth overruns come back as in-band marker
    /// maps, never as errors.
    pub fn normalize(&mut self, raw: &RawValue) -> TreeValue {
        if self.depth >= self.options.max_depth {
            tracing::warn!(depth = self.depth, "depth limit reached, inserting marker");
            self.diagnostics
                .record(Diagnostic::DepthLimitExceeded { depth: self.depth });
            return marker(MAX_DEPTH_MESSAGE);
        }

        self.depth += 1;
        let value = match raw {
            RawValue::Null => TreeValue::Null,
            RawValue::Bool(b) => TreeValue::Bool(*b),
            RawValue::Int(n) => TreeValue::Number(*n as f64),
            RawValue::Float(x) => TreeValue::Number(*x),
            RawValue::Str(s) => TreeValue::String(s.clone()),
            RawValue::Map(entries) => {
                let mut map = TreeMap::new();
                for (key, value) in entries {
                    map.insert(key.clone(), self.normalize(value));
                }
                TreeValue::Map(map)
            }
            RawValue::List(items) => {
                TreeValue::List(items.iter().map(|item| self.normalize(item)).collect())
            }
            RawValue::Object(obj) => self.normalize_object(obj),
        };
        self.depth -= 1;

        value
    }

    /// Tear down the traversal, yielding what it collected
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn normalize_object(&mut self, obj: &Rc<dyn Describe>) -> TreeValue {
        let id = identity(obj);

        if !self.guard.enter(id) {
            // Only ancestors count: a diamond (same object via two siblings)
            // re-enters after exit and is normalized again, not flagged.
            tracing::debug!(
                object_type = obj.type_name(),
                depth = self.depth,
                "circular reference detected"
            );
            self.diagnostics.record(Diagnostic::CycleDetected {
                object_type: obj.type_name().to_string(),
                depth: self.depth,
            });
            return marker(CIRCULAR_REFERENCE_MESSAGE);
        }

        let mut map = TreeMap::new();
        if self.options.tag_object_types {
            map.insert(OBJECT_TYPE_FIELD, TreeValue::String(obj.type_name().to_string()));
        }
        for (name, raw) in introspect(obj.as_ref(), &mut self.diagnostics) {
            let value = self.normalize(&raw);
            map.insert(name, value);
        }

        self.guard.exit(id);
        TreeValue::Map(map)
    }
}

/// Reference identity of an object: its allocation address
fn identity(obj: &Rc<dyn Describe>) -> ObjectId {
    Rc::as_ptr(obj) as *const () as usize
}

fn marker(message: &str) -> TreeValue {
    let mut map = TreeMap::new();
    map.insert(ERROR_KEY, TreeValue::String(message.to_string()));
    TreeValue::Map(map)
}

/// Convert one object into a tree value with default options
pub fn convert(object: &Rc<dyn Describe>) -> Conversion {
    convert_with(object, &ConvertOptions::default())
}

/// Convert one object into a tree value
pub fn convert_with(object: &Rc<dyn Describe>, options: &ConvertOptions) -> Conversion {
    tracing::debug!(object_type = object.type_name(), "convert");
    let mut traversal = Traversal::new(options.clone());
    let value = traversal.normalize(&RawValue::Object(Rc::clone(object)));
    Conversion {
        value,
        diagnostics: traversal.into_diagnostics(),
    }
}

/// Convert an ordered sequence of objects into one record per object
///
/// Each record is the object's attribute map prefixed with an
/// `"object_type"` entry. Every object gets its own fresh cycle guard, so
/// records are independent conversions.
pub fn convert_list(objects: &[Rc<dyn Describe>], options: &ConvertOptions) -> Conversion {
    let mut records = Vec::with_capacity(objects.len());
    let mut diagnostics = Diagnostics::new();

    for object in objects {
        let record = convert_record(None, object, options, &mut diagnostics);
        records.push(record);
    }

    Conversion {
        value: TreeValue::List(records),
        diagnostics,
    }
}

/// Convert a keyed ordered collection into one record per entry
///
/// Each record carries the synthetic `"key"` and `"object_type"` entries
/// before the entity's own attributes, in that order.
pub fn convert_keyed(
    entries: &[(String, Rc<dyn Describe>)],
    options: &ConvertOptions,
) -> Conversion {
    let mut records = Vec::with_capacity(entries.len());
    let mut diagnostics = Diagnostics::new();

    for (key, object) in entries {
        let record = convert_record(Some(key.as_str()), object, options, &mut diagnostics);
        records.push(record);
    }

    Conversion {
        value: TreeValue::List(records),
        diagnostics,
    }
}

fn convert_record(
    key: Option<&str>,
    object: &Rc<dyn Describe>,
    options: &ConvertOptions,
    diagnostics: &mut Diagnostics,
) -> TreeValue {
    let mut traversal = Traversal::new(options.clone());
    let normalized = traversal.normalize(&RawValue::Object(Rc::clone(object)));
    diagnostics.extend(traversal.into_diagnostics());

    let mut record = TreeMap::new();
    if let Some(key) = key {
        record.insert(KEY_FIELD, TreeValue::String(key.to_string()));
    }
    record.insert(
        OBJECT_TYPE_FIELD,
        TreeValue::String(object.type_name().to_string()),
    );
    match normalized {
        TreeValue::Map(attributes) => {
            for (name, value) in attributes {
                record.insert(name, value);
            }
        }
        // Object normalization always yields a map; nothing to merge otherwise.
        other => {
            record.insert("value", other);
        }
    }

    TreeValue::Map(record)
}
