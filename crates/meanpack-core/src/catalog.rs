//! # Catalog Parsing
//!
//! Validates a decoded spreadsheet (`RawTable`) into a product catalog.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           parse_table()                             │
//! │                                                                     │
//! │  RawTable ──► fatal checks ──► per-row validation ──► ParsedCatalog │
//! │                   │                   │                             │
//! │                   │ no data rows      │ blank model    ──► warning  │
//! │                   │ missing columns   │ bad numeric    ──► warning  │
//! │                   ▼                   │ duplicate model──► warning  │
//! │               ParseError              ▼                             │
//! │                                  row skipped (duplicates kept)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fatal problems (`ParseError`) reject the whole file. Row-level problems
//! skip that row and surface as `RowWarning`s next to whatever did import,
//! so one typo never blocks a 500-row catalog.

use std::collections::HashMap;

use crate::error::{ParseError, RowWarning};
use crate::table::{CellValue, RawTable};
use crate::types::{Product, UnitWeight};

// =============================================================================
// Column Schema
// =============================================================================

/// Spreadsheet columns a catalog must provide, in reporting order.
///
/// `series` and `unit_weight_kg` are recognized but optional; any further
/// columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "model",
    "units_per_box",
    "box_weight_kg",
    "box_length_in",
    "box_width_in",
    "box_height_in",
];

// =============================================================================
// Parsed Catalog
// =============================================================================

/// Outcome of a successful parse: the products that imported, plus the rows
/// that were skipped or imported with a caveat.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCatalog {
    /// Products in spreadsheet order.
    pub products: Vec<Product>,
    /// One warning per skipped or flagged row, in row order.
    pub warnings: Vec<RowWarning>,
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decoded spreadsheet into a product catalog.
///
/// ## Fatal Errors
///
/// Checked in order:
/// 1. No data rows at all (`ParseError::EmptyCatalog`)
/// 2. Required columns missing from the header (`ParseError::MissingColumns`)
/// 3. Every data row invalid (`ParseError::NoValidRows`, carrying the
///    per-row warnings)
///
/// ## Row Validation
///
/// Rows validate independently. A row is skipped, with a warning, when its
/// model is blank, when any required numeric is missing, non-finite or not
/// strictly positive, or when a present `unit_weight_kg` fails the same
/// numeric rule. Later rows reusing an earlier model are kept but flagged.
///
/// Warnings name spreadsheet rows: data row `i` (0-based) is reported as
/// row `i + 2`, accounting for 1-based numbering plus the header row.
pub fn parse_table(table: &RawTable) -> Result<ParsedCatalog, ParseError> {
    if table.is_empty() {
        return Err(ParseError::EmptyCatalog);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !table.has_column(column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingColumns(missing));
    }

    let mut products = Vec::new();
    let mut warnings = Vec::new();
    let mut first_rows: HashMap<String, usize> = HashMap::new();

    for (index, row) in table.rows.iter().enumerate() {
        let row_num = index + 2;

        let model = table.cell(row, "model").as_text().trim().to_string();
        if model.is_empty() {
            warnings.push(RowWarning::EmptyModel { row: row_num });
            continue;
        }

        let required = (
            positive_number(table.cell(row, "units_per_box")),
            positive_number(table.cell(row, "box_weight_kg")),
            positive_number(table.cell(row, "box_length_in")),
            positive_number(table.cell(row, "box_width_in")),
            positive_number(table.cell(row, "box_height_in")),
        );
        let (units, box_weight_kg, box_length_in, box_width_in, box_height_in) = match required {
            (Some(u), Some(bw), Some(l), Some(w), Some(h)) => (u, bw, l, w, h),
            _ => {
                warnings.push(RowWarning::InvalidNumeric { row: row_num, model });
                continue;
            }
        };

        // Fractional pack sizes truncate; below 1 a truncated pack size
        // would be a zero-unit box, so the row is rejected instead.
        let units_per_box = units.trunc() as i64;
        if units_per_box < 1 {
            warnings.push(RowWarning::InvalidNumeric { row: row_num, model });
            continue;
        }

        // Optional: a blank cell means "prorate partial boxes", but a
        // present value must still be a valid positive number.
        let unit_weight_cell = table.cell(row, "unit_weight_kg");
        let unit_weight = if unit_weight_cell.is_empty() {
            UnitWeight::Unknown
        } else {
            match positive_number(unit_weight_cell) {
                Some(kg) => UnitWeight::Exact(kg),
                None => {
                    warnings.push(RowWarning::InvalidNumeric { row: row_num, model });
                    continue;
                }
            }
        };

        let series = optional_text(table.cell(row, "series"));

        if let Some(&first_row) = first_rows.get(&model) {
            warnings.push(RowWarning::DuplicateModel {
                row: row_num,
                model: model.clone(),
                first_row,
            });
        } else {
            first_rows.insert(model.clone(), row_num);
        }

        products.push(Product {
            model,
            series,
            units_per_box,
            box_weight_kg,
            box_length_in,
            box_width_in,
            box_height_in,
            unit_weight,
        });
    }

    if products.is_empty() {
        return Err(ParseError::NoValidRows(warnings));
    }

    Ok(ParsedCatalog { products, warnings })
}

/// Coerces a cell to a usable required numeric: parseable, finite and
/// strictly positive.
fn positive_number(cell: &CellValue) -> Option<f64> {
    cell.as_number().filter(|n| n.is_finite() && *n > 0.0)
}

/// Trims a cell's text; blank collapses to `None`.
fn optional_text(cell: &CellValue) -> Option<String> {
    let text = cell.as_text();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// =============================================================================
// Catalog Lookup
// =============================================================================

/// Finds a product by exact model match.
///
/// Duplicate models resolve to the first (topmost) spreadsheet row.
pub fn find_by_model<'a>(products: &'a [Product], model: &str) -> Option<&'a Product> {
    products.iter().find(|product| product.model == model)
}

/// Filters products by a case-insensitive substring query against model and
/// series. A blank query matches everything.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|product| {
            product.model.to_lowercase().contains(&query)
                || product
                    .series
                    .as_deref()
                    .map_or(false, |series| series.to_lowercase().contains(&query))
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
