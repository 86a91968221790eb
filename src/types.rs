//! Column descriptors, cell values and rows for export input.

use indexmap::IndexMap;

/// Describes one exported column: the row key it reads, the header label
/// shown in row 1, and an optional display width in Excel character units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Key looked up in each row. Must be unique across columns.
    pub key: String,
    /// Header label written to row 1.
    pub header: String,
    /// Optional column width; when set, a `<col>` sizing element is emitted.
    pub width: Option<f64>,
}

impl Column {
    /// Create a column with default width.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            header: header.into(),
            width: None,
        }
    }

    /// Set an explicit column width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

/// A single cell value, resolved to its worksheet representation at
/// ingestion time rather than during serialization.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Finite numeric value, written as a plain `<v>` element.
    Number(f64),
    /// Non-empty text, written as an inline string.
    Text(String),
    /// Renders as no cell at all.
    #[default]
    Blank,
}

impl CellValue {
    /// Whether this value produces no `<c>` element.
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }
}

impl From<f64> for CellValue {
    /// Non-finite values (NaN, infinities) have no numeric cell encoding
    /// and collapse to blank.
    fn from(value: f64) -> Self {
        if value.is_finite() {
            CellValue::Number(value)
        } else {
            CellValue::Blank
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<&str> for CellValue {
    /// Empty strings render as blank cells, same as missing keys.
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Blank
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Blank
        } else {
            CellValue::Text(value)
        }
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Blank,
        }
    }
}

/// One data row: an insertion-ordered key-to-value map.
///
/// Keys that match no column are ignored; columns whose key is absent from
/// a row render as blank cells.
#[derive(Debug, Clone, Default)]
pub struct Row {
    values: IndexMap<String, CellValue>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Row::default()
    }

    /// Set a value, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CellValue>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up the value for a column key.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.values.get(key)
    }

    /// Number of values stored in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (key, value) in iter {
            row.set(key, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ingestion() {
        assert_eq!(CellValue::from(5.0), CellValue::Number(5.0));
        assert_eq!(CellValue::from(42i64), CellValue::Number(42.0));
        assert_eq!(CellValue::from(f64::NAN), CellValue::Blank);
        assert_eq!(CellValue::from(f64::INFINITY), CellValue::Blank);
    }

    #[test]
    fn test_text_ingestion() {
        assert_eq!(CellValue::from("hi"), CellValue::Text("hi".to_string()));
        assert_eq!(CellValue::from(""), CellValue::Blank);
        assert_eq!(CellValue::from(String::new()), CellValue::Blank);
    }

    #[test]
    fn test_option_ingestion() {
        assert_eq!(CellValue::from(None::<f64>), CellValue::Blank);
        assert_eq!(CellValue::from(Some("x")), CellValue::Text("x".to_string()));
    }

    #[test]
    fn test_row_preserves_insertion_order() {
        let mut row = Row::new();
        row.set("z", 1.0).set("a", 2.0).set("m", 3.0);

        assert_eq!(row.len(), 3);
        assert_eq!(row.get("z"), Some(&CellValue::Number(1.0)));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_row_from_iterator() {
        let row: Row = [("id", CellValue::from(1.0)), ("name", CellValue::from("Alice"))]
            .into_iter()
            .collect();
        assert_eq!(row.get("name"), Some(&CellValue::Text("Alice".to_string())));
    }
}
