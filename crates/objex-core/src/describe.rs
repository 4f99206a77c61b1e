//! Attribute introspection over the `Describe` capability
//!
//! Instead of runtime reflection, every exportable type implements
//! [`Describe`], an explicit, compile-time-checked contract for "what counts
//! as an attribute". The introspector is then a plain dispatch over that
//! capability, applying the best-effort recovery policy: an unreadable field
//! is replaced by a sentinel string, a failed accessor is omitted and
//! recorded on the diagnostics side-channel.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Sentinel emitted for a field whose value could not be read
pub const ACCESS_ERROR_SENTINEL: &str = "ERROR_ACCESS";

/// A single attribute could not be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct AttributeError {
    /// Why the attribute could not be read or computed
    pub reason: String,
}

impl AttributeError {
    /// Create a new attribute error with the given reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Result of reading or computing one attribute
pub type AttrResult = Result<RawValue, AttributeError>;

/// Raw, un-normalized attribute value
///
/// This is what `Describe` implementations hand to the normalizer. Integers
/// and floats are kept distinct here; normalization folds both into
/// `TreeValue::Number`. Nested objects are carried as `Rc<dyn Describe>` so
/// graphs can share nodes (and form cycles) with reference identity intact.
#[derive(Clone)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<RawValue>),
    Map(Vec<(String, RawValue)>),
    Object(Rc<dyn Describe>),
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "Null"),
            RawValue::Bool(b) => write!(f, "Bool({})", b),
            RawValue::Int(n) => write!(f, "Int({})", n),
            RawValue::Float(x) => write!(f, "Float({})", x),
            RawValue::Str(s) => write!(f, "Str({:?})", s),
            RawValue::List(items) => f.debug_tuple("List").field(items).finish(),
            RawValue::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            RawValue::Object(obj) => write!(f, "Object(<{}>)", obj.type_name()),
        }
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Int(n)
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Float(x)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Str(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Str(s)
    }
}

impl From<Rc<dyn Describe>> for RawValue {
    fn from(obj: Rc<dyn Describe>) -> Self {
        RawValue::Object(obj)
    }
}

/// Capability for exportable types: enumerate your own attributes
///
/// `fields()` yields declared data members in declaration order; the
/// optional `accessors()` yields derived, niladic values appended after the
/// fields. Both return per-attribute `Result`s so a single unreadable or
/// failing attribute never aborts introspection of the whole object.
pub trait Describe {
    /// Runtime type name carried into `"object_type"` keys
    fn type_name(&self) -> &str;

    /// Declared data members, in declaration order
    fn fields(&self) -> Vec<(String, AttrResult)>;

    /// Derived niladic values, appended after the fields
    fn accessors(&self) -> Vec<(String, AttrResult)> {
        Vec::new()
    }
}

/// One recovered problem observed during a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An accessor raised and its key was omitted from the output
    AccessorSkipped {
        object_type: String,
        attribute: String,
        reason: String,
    },
    /// A circular reference was replaced by the in-band marker
    CycleDetected { object_type: String, depth: usize },
    /// The depth limit was hit and replaced by the in-band marker
    DepthLimitExceeded { depth: usize },
}

/// Ordered side-channel of recovered problems
///
/// Best-effort recovery (omitted accessors, cycle markers) is policy, but
/// silent loss complicates debugging missing columns; every recovery is
/// recorded here and surfaced alongside the converted value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostics {
    events: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty diagnostics collector
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Record one event
    pub fn record(&mut self, event: Diagnostic) {
        self.events.push(event);
    }

    /// All recorded events, in occurrence order
    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    /// Fold another collector's events into this one
    pub fn extend(&mut self, other: Diagnostics) {
        self.events.extend(other.events);
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Introspect one object into an ordered name-to-raw-value mapping
///
/// Fields come first in declaration order; accessor entries follow, their
/// keys rendered with a trailing `()`. An unreadable field yields the
/// [`ACCESS_ERROR_SENTINEL`] string for that single key; a failed accessor
/// is omitted and recorded in `diagnostics`. Does not recurse.
pub fn introspect(
    object: &dyn Describe,
    diagnostics: &mut Diagnostics,
) -> Vec<(String, RawValue)> {
    let mut attributes = Vec::new();

    for (name, result) in object.fields() {
        match result {
            Ok(value) => attributes.push((name, value)),
            Err(_) => attributes.push((name, RawValue::Str(ACCESS_ERROR_SENTINEL.to_string()))),
        }
    }

    for (name, result) in object.accessors() {
        match result {
            Ok(value) => attributes.push((format!("{}()", name), value)),
            Err(err) => {
                tracing::warn!(
                    object_type = object.type_name(),
                    attribute = %name,
                    reason = %err.reason,
                    "accessor skipped"
                );
                diagnostics.record(Diagnostic::AccessorSkipped {
                    object_type: object.type_name().to_string(),
                    attribute: name,
                    reason: err.reason,
                });
            }
        }
    }

    attributes
}
