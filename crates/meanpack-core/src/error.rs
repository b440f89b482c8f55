//! # Error Types
//!
//! Domain-specific error types for meanpack-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  meanpack-core errors (this file)                                      │
//! │  ├── CoreError        - Order-store / domain errors                    │
//! │  ├── ValidationError  - Input precondition failures                    │
//! │  ├── ParseError       - Fatal catalog parse failures                   │
//! │  └── RowWarning       - Per-row skips (collected, never thrown)        │
//! │                                                                         │
//! │  meanpack-catalog errors (separate crate)                              │
//! │  └── CatalogError     - File decoding failures                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CatalogError → Frontend           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (row number, model, id)
//! 3. Errors are enum variants, never String
//! 4. Fatal vs. non-fatal is a type distinction: `ParseError` aborts a
//!    catalog load, `RowWarning` is accumulated and shown as a list

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use ts_rs::TS;

use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent contract violations against the order store.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order item cannot be found.
    ///
    /// ## When This Occurs
    /// - `edit`/`remove`/`begin_edit` called with an id the store never
    ///   issued, or one that was already removed
    ///
    /// This is a programming-contract violation by the caller: the UI must
    /// not offer edit/remove on ids it does not hold. Fail loudly in
    /// development; embedders that prefer a defensive no-op can match on
    /// this variant and drop it.
    #[error("Order item not found: {0}")]
    ItemNotFound(ItemId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input precondition errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before the store or calculator runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Fatal Parse Errors
// =============================================================================

/// Fatal catalog parse failures.
///
/// When any of these occur, NO partial catalog is installed — the load is
/// rejected as a whole and the message is shown to the user verbatim.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The decoded table has zero data rows.
    #[error("Catalog file is empty or has no data rows")]
    EmptyCatalog,

    /// One or more required columns are absent from the header row.
    ///
    /// ## When This Occurs
    /// - Wrong file uploaded (not a catalog export)
    /// - Column renamed or deleted in the source spreadsheet
    ///
    /// No partial parse is attempted: fixing the header is cheaper than
    /// guessing which column the user meant.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Every data row was skipped; the warnings explain why, row by row.
    #[error("No valid products found:\n{}", join_warnings(.0))]
    NoValidRows(Vec<RowWarning>),
}

/// Joins accumulated row warnings into the fatal-error detail block.
fn join_warnings(warnings: &[RowWarning]) -> String {
    warnings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Row Warnings
// =============================================================================

/// A skipped catalog row.
///
/// Warnings are collected, never thrown: a catalog with some bad rows still
/// loads, and the UI shows these as a dismissible list next to it.
///
/// ## Row Numbering
/// `row` is the spreadsheet row as a human sees it: data row N is reported
/// as N + 1 to account for the header row (the first data row is "row 2").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind")]
#[ts(export)]
pub enum RowWarning {
    /// The `model` cell was blank (or whitespace) after trimming.
    EmptyModel { row: usize },

    /// A required numeric cell was blank, non-numeric, non-finite, or ≤ 0,
    /// or an optional `unit_weight_kg` was present but invalid.
    InvalidNumeric { row: usize, model: String },

    /// The row repeats a `model` already defined earlier in the table.
    /// The row is still kept; by-model lookup resolves to the first one.
    DuplicateModel {
        row: usize,
        model: String,
        first_row: usize,
    },
}

impl RowWarning {
    /// The 1-indexed spreadsheet row this warning refers to.
    pub fn row(&self) -> usize {
        match self {
            RowWarning::EmptyModel { row }
            | RowWarning::InvalidNumeric { row, .. }
            | RowWarning::DuplicateModel { row, .. } => *row,
        }
    }
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowWarning::EmptyModel { row } => write!(f, "row {}: empty model", row),
            RowWarning::InvalidNumeric { row, model } => {
                write!(f, "row {} ({}): invalid numeric values", row, model)
            }
            RowWarning::DuplicateModel {
                row,
                model,
                first_row,
            } => write!(
                f,
                "row {} ({}): duplicate model, first defined at row {}",
                row, model, first_row
            ),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product".to_string(),
        };
        assert_eq!(err.to_string(), "product is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_row_warning_messages() {
        let warn = RowWarning::EmptyModel { row: 3 };
        assert_eq!(warn.to_string(), "row 3: empty model");

        let warn = RowWarning::InvalidNumeric {
            row: 4,
            model: "LRS-350-24".to_string(),
        };
        assert_eq!(warn.to_string(), "row 4 (LRS-350-24): invalid numeric values");

        let warn = RowWarning::DuplicateModel {
            row: 7,
            model: "HDR-15-5".to_string(),
            first_row: 2,
        };
        assert_eq!(
            warn.to_string(),
            "row 7 (HDR-15-5): duplicate model, first defined at row 2"
        );
    }

    #[test]
    fn test_missing_columns_message_lists_all() {
        let err = ParseError::MissingColumns(vec![
            "box_weight_kg".to_string(),
            "box_height_in".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing required columns: box_weight_kg, box_height_in"
        );
    }

    #[test]
    fn test_no_valid_rows_embeds_warnings() {
        let err = ParseError::NoValidRows(vec![
            RowWarning::EmptyModel { row: 2 },
            RowWarning::InvalidNumeric {
                row: 3,
                model: "X-1".to_string(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("No valid products found:"));
        assert!(msg.contains("row 2: empty model"));
        assert!(msg.contains("row 3 (X-1): invalid numeric values"));
    }

    #[test]
    fn test_row_warning_serializes_tagged() {
        let warn = RowWarning::DuplicateModel {
            row: 7,
            model: "HDR-15-5".to_string(),
            first_row: 2,
        };
        let json = serde_json::to_value(&warn).unwrap();

        assert_eq!(json["kind"], "DuplicateModel");
        assert_eq!(json["row"], 7);
        assert_eq!(json["first_row"], 2);
    }
}
