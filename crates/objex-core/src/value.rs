use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// TreeValue - the universal tree representation for normalized objects
///
/// Every input object graph is normalized into this tagged union, which is
/// the sole interchange type between the core and the exporters. Map keys
/// are unique and preserve discovery order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TreeValue {
    /// Absent value
    #[default]
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Numeric scalar. Integers and floats both live here; values with no
    /// fractional part serialize as JSON integers.
    Number(f64),
    /// Text scalar
    String(String),
    /// Ordered sequence
    List(Vec<TreeValue>),
    /// Ordered string-keyed mapping
    Map(TreeMap),
}

impl TreeValue {
    /// Get the map if this value is a `Map`
    pub fn as_map(&self) -> Option<&TreeMap> {
        match self {
            TreeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get the string if this value is a `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TreeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the elements if this value is a `List`
    pub fn as_list(&self) -> Option<&[TreeValue]> {
        match self {
            TreeValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Check if this value is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, TreeValue::Null)
    }
}

impl From<bool> for TreeValue {
    fn from(b: bool) -> Self {
        TreeValue::Bool(b)
    }
}

impl From<i64> for TreeValue {
    fn from(n: i64) -> Self {
        TreeValue::Number(n as f64)
    }
}

impl From<f64> for TreeValue {
    fn from(n: f64) -> Self {
        TreeValue::Number(n)
    }
}

impl From<&str> for TreeValue {
    fn from(s: &str) -> Self {
        TreeValue::String(s.to_string())
    }
}

impl From<String> for TreeValue {
    fn from(s: String) -> Self {
        TreeValue::String(s)
    }
}

/// Render a number the way the tree treats it: no fractional part for
/// integral values (`28`, not `28.0`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < (i64::MAX as f64) {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl Serialize for TreeValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TreeValue::Null => serializer.serialize_unit(),
            TreeValue::Bool(b) => serializer.serialize_bool(*b),
            TreeValue::Number(n) => {
                // Integral values emit as JSON integers so the JSON path
                // stays faithful to the source scalar.
                if n.is_finite() && n.fract() == 0.0 && n.abs() < (i64::MAX as f64) {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            TreeValue::String(s) => serializer.serialize_str(s),
            TreeValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            TreeValue::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

impl fmt::Display for TreeValue {
    /// Compact textual dump, used for tabular cells that cannot hold a tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeValue::Null => write!(f, "null"),
            TreeValue::Bool(b) => write!(f, "{}", b),
            TreeValue::Number(n) => write!(f, "{}", format_number(*n)),
            TreeValue::String(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
            TreeValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            TreeValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    let quoted = serde_json::to_string(key).map_err(|_| fmt::Error)?;
                    write!(f, "{}:{}", quoted, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Ordered string-keyed map with unique keys
///
/// Preserves first-insertion order; inserting an existing key replaces the
/// value in place. Backed by a plain vector since attribute maps are small
/// and discovery order is the contract.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeMap {
    entries: Vec<(String, TreeValue)>,
}

impl TreeMap {
    /// Create a new empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a key-value pair, replacing in place if the key exists
    pub fn insert(&mut self, key: impl Into<String>, value: TreeValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&TreeValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(String, TreeValue)> {
        self.entries.iter()
    }

    /// Iterate keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &TreeValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for TreeMap {
    type Item = (String, TreeValue);
    type IntoIter = std::vec::IntoIter<(String, TreeValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, TreeValue)> for TreeMap {
    fn from_iter<I: IntoIterator<Item = (String, TreeValue)>>(iter: I) -> Self {
        let mut map = TreeMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
