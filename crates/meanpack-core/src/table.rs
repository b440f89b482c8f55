//! # Raw Table
//!
//! The decoded tabular input the catalog parser consumes.
//!
//! A `RawTable` is what the file-decoding layer (meanpack-catalog) produces
//! from a workbook: a header row plus data rows of loosely-typed cells. The
//! parser looks cells up by column name; extra columns are simply never
//! looked at.

// =============================================================================
// Cell Value
// =============================================================================

/// A single decoded cell: text, a number, or nothing.
///
/// Blank cells map to `Empty` (never to an empty string or zero), so the
/// parser can tell "column absent for this row" from "column holds a value".
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// True when the cell holds no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The cell as display text. `Empty` yields an empty string.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// The cell coerced to a number, when possible.
    ///
    /// Text cells are parsed (trimmed first) so catalogs with numeric
    /// columns typed as text still load. Unparseable text and `Empty`
    /// yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Empty => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

// =============================================================================
// Raw Table
// =============================================================================

/// One sheet's worth of decoded cells: a header row plus data rows.
///
/// Rows are padded/truncated against the header implicitly: a row shorter
/// than the header reads `Empty` for the missing columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column names from the header row, in sheet order.
    pub headers: Vec<String>,

    /// Data rows. `rows[i][j]` belongs to column `headers[j]`.
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Builds a table from a header row and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        RawTable { headers, rows }
    }

    /// Index of a column by name, if present in the header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// True when a column name appears in the header.
    #[inline]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// The cell at (row, column name). Missing column or short row reads
    /// as `Empty`.
    pub fn cell<'a>(&'a self, row: &'a [CellValue], name: &str) -> &'a CellValue {
        self.column_index(name)
            .and_then(|idx| row.get(idx))
            .unwrap_or(&CellValue::Empty)
    }

    /// Number of data rows (header excluded).
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
