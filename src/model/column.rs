//! Column definitions and the ordered column map

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::{CellDataType, TypeHint};

/// Resolved per-column view handed to the renderer
///
/// Assembled from the label, type, and format containers of a [`ColumnMap`]
/// at read time; the containers themselves stay independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Stable identifier, also the probe name for keyed and derived records
    pub key: String,
    /// Display label used for the header row
    pub label: String,
    /// Declared type, if any; `None` resolves to a tagged string write
    pub value_type: Option<TypeHint>,
    /// Number format code, if any; `None` means the sink's general format
    pub format: Option<String>,
}

impl Column {
    /// Type resolution for data cells: declared hint, else the generic
    /// string default
    pub fn effective_type(&self) -> TypeHint {
        self.value_type
            .unwrap_or(TypeHint::Typed(CellDataType::String))
    }
}

/// Ordered set of columns with per-key type and format overrides
///
/// Insertion order defines physical column order, left to right. The three
/// containers share the same keys but are consulted independently: a column
/// may have a label and no declared type or format.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    labels: IndexMap<String, String>,
    types: IndexMap<String, TypeHint>,
    formats: IndexMap<String, String>,
}

impl ColumnMap {
    /// Create an empty column map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column map from (key, label) pairs
    pub fn from_pairs<I, K, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<String>,
    {
        let mut map = Self::new();
        map.set_columns(pairs);
        map
    }

    /// Create a column map whose keys equal their labels
    ///
    /// Matches the positional-record use case where columns are just a list
    /// of header names.
    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let mut map = Self::new();
        for label in labels {
            let label = label.into();
            map.labels.insert(label.clone(), label);
        }
        map
    }

    /// Replace all columns with the given (key, label) pairs
    ///
    /// Type and format overrides are untouched; stale keys are simply never
    /// consulted.
    pub fn set_columns<I, K, L>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<String>,
    {
        self.labels = pairs
            .into_iter()
            .map(|(k, l)| (k.into(), l.into()))
            .collect();
    }

    /// Insert or update a single column's label
    ///
    /// An existing key keeps its position; a new key appends at the end.
    pub fn set_column(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(key.into(), label.into());
    }

    /// Label for a key, if the column exists
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Replace all type declarations
    pub fn set_types<I, K>(&mut self, types: I)
    where
        I: IntoIterator<Item = (K, TypeHint)>,
        K: Into<String>,
    {
        self.types = types.into_iter().map(|(k, t)| (k.into(), t)).collect();
    }

    /// Declare the type for a single column
    pub fn set_type(&mut self, key: impl Into<String>, hint: TypeHint) {
        self.types.insert(key.into(), hint);
    }

    /// Declared type for a key, if any
    pub fn value_type(&self, key: &str) -> Option<TypeHint> {
        self.types.get(key).copied()
    }

    /// Replace all format codes
    pub fn set_formats<I, K, F>(&mut self, formats: I)
    where
        I: IntoIterator<Item = (K, F)>,
        K: Into<String>,
        F: Into<String>,
    {
        self.formats = formats
            .into_iter()
            .map(|(k, f)| (k.into(), f.into()))
            .collect();
    }

    /// Set the format code for a single column
    pub fn set_format(&mut self, key: impl Into<String>, format: impl Into<String>) {
        self.formats.insert(key.into(), format.into());
    }

    /// Format code for a key, if any
    pub fn format(&self, key: &str) -> Option<&str> {
        self.formats.get(key).map(String::as_str)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the map has no columns
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of a key within the column order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.labels.get_index_of(key)
    }

    /// Iterate resolved columns in physical order
    pub fn iter(&self) -> impl Iterator<Item = Column> + '_ {
        self.labels.iter().map(|(key, label)| Column {
            key: key.clone(),
            label: label.clone(),
            value_type: self.types.get(key).copied(),
            format: self.formats.get(key).cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_insertion_order() {
        let mut map = ColumnMap::new();
        map.set_column("b", "B");
        map.set_column("a", "A");
        map.set_column("c", "C");

        let keys: Vec<String> = map.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(map.position("a"), Some(1));
    }

    #[test]
    fn test_upsert_keeps_position() {
        let mut map = ColumnMap::from_pairs([("x", "X"), ("y", "Y")]);
        map.set_column("x", "X renamed");

        assert_eq!(map.position("x"), Some(0));
        assert_eq!(map.label("x"), Some("X renamed"));
    }

    #[test]
    fn test_full_replace() {
        let mut map = ColumnMap::from_pairs([("x", "X")]);
        map.set_columns([("p", "P"), ("q", "Q")]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.label("x"), None);
        assert_eq!(map.position("p"), Some(0));
    }

    #[test]
    fn test_overrides_are_independent() {
        let mut map = ColumnMap::from_pairs([("amount", "Amount")]);
        assert_eq!(map.value_type("amount"), None);
        assert_eq!(map.format("amount"), None);

        map.set_type("amount", TypeHint::Typed(CellDataType::Numeric));
        map.set_format("amount", "#,##0.00");

        let col = map.iter().next().unwrap();
        assert_eq!(col.value_type, Some(TypeHint::Typed(CellDataType::Numeric)));
        assert_eq!(col.format.as_deref(), Some("#,##0.00"));
    }

    #[test]
    fn test_effective_type_default() {
        let col = Column {
            key: "k".into(),
            label: "K".into(),
            value_type: None,
            format: None,
        };
        assert_eq!(col.effective_type(), TypeHint::Typed(CellDataType::String));

        let untyped = Column {
            value_type: Some(TypeHint::Untyped),
            ..col
        };
        assert_eq!(untyped.effective_type(), TypeHint::Untyped);
    }
}
