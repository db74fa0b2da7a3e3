//! Records of unknown shape and per-column value extraction

use indexmap::IndexMap;
use serde_json::Value;

use crate::model::CellValue;

/// Derived record shape: an entity probed by name
///
/// Resolution order in [`Record::value`] is accessor first, then field. An
/// accessor models a named zero-argument function on the entity; a field is
/// plain named state. Either probe returning `None` means the name is not
/// present. Implementations must be side-effect-free: extraction never
/// mutates a record.
pub trait Entity {
    /// Invoke the named accessor, if the entity has one
    fn accessor(&self, name: &str) -> Option<CellValue> {
        let _ = name;
        None
    }

    /// Read the named field, if the entity has one
    fn field(&self, name: &str) -> Option<CellValue> {
        let _ = name;
        None
    }
}

/// One row of data, in one of three shapes
///
/// Shape is carried per record, so a single record set may mix shapes. The
/// dispatch in [`Record::value`] is explicit per variant rather than a chain
/// of runtime capability probes.
pub enum Record {
    /// Ordered values selected by column position
    Positional(Vec<CellValue>),
    /// Key/value mapping selected by column key
    Keyed(IndexMap<String, CellValue>),
    /// Entity probed by column key, accessors before fields
    Derived(Box<dyn Entity>),
}

impl Record {
    /// Build a keyed record from (key, value) pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellValue>,
    {
        Record::Keyed(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Extract the value for one column
    ///
    /// `key` is the column's identifier and `position` its index within the
    /// column map; positional records use the position, the other shapes use
    /// the key. Anything unresolvable yields [`CellValue::Null`], never an
    /// error.
    pub fn value(&self, key: &str, position: usize) -> CellValue {
        match self {
            Record::Positional(cells) => {
                cells.get(position).cloned().unwrap_or(CellValue::Null)
            }
            Record::Keyed(map) => map.get(key).cloned().unwrap_or(CellValue::Null),
            Record::Derived(entity) => entity
                .accessor(key)
                .or_else(|| entity.field(key))
                .unwrap_or(CellValue::Null),
        }
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Record::Positional(cells) => f.debug_tuple("Positional").field(cells).finish(),
            Record::Keyed(map) => f.debug_tuple("Keyed").field(map).finish(),
            Record::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

impl<V: Into<CellValue>> From<Vec<V>> for Record {
    fn from(cells: Vec<V>) -> Self {
        Record::Positional(cells.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, CellValue>> for Record {
    fn from(map: IndexMap<String, CellValue>) -> Self {
        Record::Keyed(map)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                Record::Positional(items.iter().map(CellValue::from).collect())
            }
            Value::Object(fields) => Record::Keyed(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), CellValue::from(v)))
                    .collect(),
            ),
            // A bare scalar has no recognizable shape; the row degrades to
            // all-absent values
            _ => Record::Positional(Vec::new()),
        }
    }
}
