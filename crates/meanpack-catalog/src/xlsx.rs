//! # Workbook Decoding
//!
//! Reads the first worksheet of an .xlsx/.xls file into the loosely-typed
//! `RawTable` the catalog parser consumes.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                          read_table()                          │
//! │                                                                │
//! │  path ──► extension gate ──► calamine ──► first sheet          │
//! │              │                               │                 │
//! │              │ not .xlsx/.xls                ▼                 │
//! │              ▼                     header row = column names   │
//! │       UnsupportedFile              data rows  = CellValues     │
//! │                                    (all-empty rows dropped)    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decoding is synchronous and CPU-bound; the session layer runs it inside
//! `spawn_blocking`.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use meanpack_core::{CellValue, RawTable};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

/// Decodes the first worksheet of the workbook at `path`.
///
/// The first row becomes the header (cells stringified and trimmed); every
/// following row becomes a data row. Rows with no values at all are
/// dropped, matching how spreadsheet tools pad trailing rows.
///
/// ## Errors
/// - `UnsupportedFile` for extensions other than `.xlsx`/`.xls`
/// - `Workbook` when the file cannot be opened or decoded
/// - `NoSheets` for a workbook without a single sheet
pub fn read_table(path: impl AsRef<Path>) -> CatalogResult<RawTable> {
    let path = path.as_ref();
    check_extension(path)?;

    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(CatalogError::NoSheets)?;
    debug!(sheet = %sheet_name, "decoding first worksheet");

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_text).collect(),
        None => Vec::new(),
    };
    let data: Vec<Vec<CellValue>> = rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    debug!(columns = headers.len(), rows = data.len(), "worksheet decoded");

    Ok(RawTable::new(headers, data))
}

/// Accepts only the two workbook extensions the importer supports.
fn check_extension(path: &Path) -> CatalogResult<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("xlsx") | Some("xls") => Ok(()),
        _ => Err(CatalogError::unsupported(path)),
    }
}

/// Maps one decoded cell into the parser's loosely-typed value.
///
/// Numbers stay numeric (dates surface as their serial number), booleans
/// coerce to 0/1, and error cells read as blank.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

/// Stringifies a header cell; numeric headers keep their short form.
fn header_text(cell: &Data) -> String {
    cell_value(cell).as_text().trim().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use meanpack_core::{parse_table, RowWarning, UnitWeight};
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("testdata")
            .join("catalog.xlsx")
    }

    #[test]
    fn test_rejects_unsupported_extensions() {
        assert!(matches!(
            read_table("catalogo.csv"),
            Err(CatalogError::UnsupportedFile { .. })
        ));
        assert!(matches!(
            read_table("catalogo"),
            Err(CatalogError::UnsupportedFile { .. })
        ));
    }

    #[test]
    fn test_extension_gate_is_case_insensitive() {
        // .XLSX passes the gate; the error comes from calamine afterwards,
        // which proves the gate let it through.
        assert!(matches!(
            read_table("no-such-file.XLSX"),
            Err(CatalogError::Workbook(_))
        ));
    }

    #[test]
    fn test_decodes_fixture_workbook() {
        let table = read_table(fixture_path()).unwrap();

        assert_eq!(table.headers.len(), 8);
        assert_eq!(table.headers[0], "model");
        assert_eq!(table.headers[7], "unit_weight_kg");
        assert_eq!(table.row_count(), 4);

        let first = &table.rows[0];
        assert_eq!(
            table.cell(first, "model"),
            &CellValue::Text("LRS-350-24".to_string())
        );
        assert_eq!(
            table.cell(first, "units_per_box"),
            &CellValue::Number(1.0)
        );
        assert!(table.cell(first, "unit_weight_kg").is_empty());
    }

    #[test]
    fn test_fixture_parses_into_catalog() {
        let table = read_table(fixture_path()).unwrap();
        let parsed = parse_table(&table).unwrap();

        assert_eq!(parsed.products.len(), 2);
        assert_eq!(parsed.products[0].model, "LRS-350-24");
        assert_eq!(parsed.products[1].model, "HDR-15-5");
        assert_eq!(parsed.products[1].unit_weight, UnitWeight::Exact(0.5));

        // one blank-model row, one row with a non-numeric pack size
        assert_eq!(parsed.warnings.len(), 2);
        assert_eq!(parsed.warnings[0], RowWarning::EmptyModel { row: 4 });
        assert_eq!(
            parsed.warnings[1],
            RowWarning::InvalidNumeric {
                row: 5,
                model: "RSP-500-48".to_string(),
            }
        );
    }
}
