//! # meanpack-core: Pure Business Logic for Meanpack
//!
//! This crate is the **heart** of Meanpack. It contains catalog parsing,
//! packing calculation and order building as pure logic with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Meanpack Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                      Embedding UI                               │    │
//! │  │   File picker ──► Product search ──► Order table ──► Summary    │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ JSON DTOs                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │              meanpack-catalog (Session Layer)                   │    │
//! │  │     .xlsx/.xls decode, async loads, shared session state        │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ meanpack-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │    │
//! │  │   │   table   │  │  catalog  │  │   calc    │  │   order   │   │    │
//! │  │   │ RawTable  │  │ parse +   │  │ boxes,    │  │ items +   │   │    │
//! │  │   │ CellValue │  │ warnings  │  │ weights   │  │ edit slot │   │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO ASYNC • NO FILE FORMATS • PURE LOGIC              │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, OrderItem, CalculationResult, etc.)
//! - [`table`] - The decoded spreadsheet the parser consumes
//! - [`catalog`] - Catalog parsing, warnings and lookup
//! - [`calc`] - Packing calculation and order aggregation
//! - [`order`] - Order line items and the edit-state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Precondition checks for order mutations
//!
//! ## Design Principles
//!
//! 1. **Pure Logic**: parsing and calculation are deterministic functions
//!    over in-memory data
//! 2. **No I/O**: file decode, async and anything needing a runtime is
//!    FORBIDDEN here and lives in `meanpack-catalog`
//! 3. **Unrounded f64**: weights and volumes keep full precision; rounding
//!    happens only at display time, outside this crate
//! 4. **Explicit Errors**: fatal and row-level problems are typed, never
//!    strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use meanpack_core::{calculate, parse_table, RawTable};
//!
//! let table = RawTable::new(
//!     [
//!         "model",
//!         "units_per_box",
//!         "box_weight_kg",
//!         "box_length_in",
//!         "box_width_in",
//!         "box_height_in",
//!     ]
//!     .map(String::from)
//!     .to_vec(),
//!     vec![vec![
//!         "LRS-350-24".into(),
//!         1.0.into(),
//!         1.9.into(),
//!         8.0.into(),
//!         4.0.into(),
//!         2.0.into(),
//!     ]],
//! );
//!
//! let catalog = parse_table(&table).unwrap();
//! let result = calculate(&catalog.products[0], 5);
//!
//! // 5 units, one per box: 5 boxes, 320 in³
//! assert_eq!(result.total_boxes, 5);
//! assert_eq!(result.total_volume_in3, 320.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calc;
pub mod catalog;
pub mod error;
pub mod order;
pub mod table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use meanpack_core::Product` instead of
// `use meanpack_core::types::Product`

pub use calc::{aggregate, calculate};
pub use catalog::{filter_products, find_by_model, parse_table, ParsedCatalog, REQUIRED_COLUMNS};
pub use error::{CoreError, CoreResult, ParseError, RowWarning, ValidationError};
pub use order::{EditState, OrderStore};
pub use table::{CellValue, RawTable};
pub use types::*;
pub use validation::{validate_quantity, validate_selection, ValidationResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cubic inches per cubic foot (12 × 12 × 12).
///
/// Catalogs give box dimensions in inches; order summaries display cubic
/// feet. Every conversion goes through this one constant.
pub const IN3_PER_FT3: f64 = 1728.0;
