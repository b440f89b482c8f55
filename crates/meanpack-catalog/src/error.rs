//! # Catalog Import Error Types
//!
//! Error types for file decoding and session operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Error Propagation                                │
//! │                                                                         │
//! │  Decode error (calamine::Error)      Domain error (meanpack-core)       │
//! │       │                                   │                             │
//! │       └───────────────┬───────────────────┘                             │
//! │                       ▼                                                 │
//! │            CatalogError (this module)                                   │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │     Embedding layer shows the message verbatim: fatal parse             │
//! │     errors already carry human-readable detail (missing column          │
//! │     names, per-row warnings)                                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use meanpack_core::{CoreError, ParseError};
use thiserror::Error;

/// Catalog import and session operation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The picked file is not a spreadsheet this importer accepts.
    ///
    /// ## When This Occurs
    /// - Extension is neither `.xlsx` nor `.xls` (case-insensitive)
    /// - Path has no extension at all
    #[error("Unsupported file '{}': only .xlsx or .xls catalogs are accepted", .path.display())]
    UnsupportedFile { path: PathBuf },

    /// The workbook could not be opened or decoded.
    ///
    /// ## When This Occurs
    /// - File missing or unreadable
    /// - Corrupt or truncated workbook
    /// - Worksheet fails to decode
    #[error("Could not read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook opened but contains no sheets.
    #[error("Workbook has no sheets")]
    NoSheets,

    /// The sheet decoded but failed catalog validation.
    ///
    /// Passed through verbatim: the parse errors carry their own
    /// human-readable detail (missing column names, per-row warnings).
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An order operation was rejected by the domain layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The background decode task died before finishing.
    ///
    /// ## When This Occurs
    /// - Decode task panicked
    /// - Runtime shut down mid-load
    #[error("Catalog decode task failed: {0}")]
    DecodeTask(#[from] tokio::task::JoinError),
}

impl CatalogError {
    /// Creates an UnsupportedFile error for the given path.
    pub fn unsupported(path: impl Into<PathBuf>) -> Self {
        CatalogError::UnsupportedFile { path: path.into() }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_file_message_names_path() {
        let err = CatalogError::unsupported("catalogo.csv");
        assert_eq!(
            err.to_string(),
            "Unsupported file 'catalogo.csv': only .xlsx or .xls catalogs are accepted"
        );
    }

    #[test]
    fn test_parse_errors_pass_through_verbatim() {
        let err: CatalogError = ParseError::EmptyCatalog.into();
        assert_eq!(err.to_string(), "Catalog file is empty or has no data rows");

        let err: CatalogError =
            ParseError::MissingColumns(vec!["box_weight_kg".to_string()]).into();
        assert_eq!(err.to_string(), "Missing required columns: box_weight_kg");
    }
}
