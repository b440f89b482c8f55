//! # meanpack-catalog: Catalog I/O Layer for Meanpack
//!
//! This crate turns spreadsheet catalog files into live session state.
//! It decodes .xlsx/.xls workbooks with calamine and drives the pure
//! logic in meanpack-core behind an async, thread-safe session.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Meanpack Data Flow                               │
//! │                                                                         │
//! │  Embedding UI (load_catalog, commit_selection, order_summary)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   meanpack-catalog (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Decoding    │    │    Session    │    │    Errors    │  │   │
//! │  │   │   (xlsx.rs)   │    │ (session.rs)  │    │  (error.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ .xlsx / .xls  │───►│ SessionState  │    │ CatalogError │  │   │
//! │  │   │ ──► RawTable  │    │ last-load-wins│    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   meanpack-core (pure logic)                    │   │
//! │  │     parse_table · calculate · OrderStore · aggregate            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`xlsx`] - Workbook decoding into the cell grid meanpack-core parses
//! - [`session`] - Shared session state: catalog installs and order commands
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meanpack_catalog::{LoadOutcome, SessionState};
//!
//! let state = SessionState::new();
//!
//! // Decode, parse, and install a catalog
//! match state.load_catalog("catalog.xlsx").await? {
//!     LoadOutcome::Installed { product_count, .. } => {
//!         println!("{} products ready", product_count);
//!     }
//!     LoadOutcome::Superseded => {}
//! }
//!
//! // Build an order against it
//! let product = state.catalog_products(|p| p.first().cloned()).unwrap();
//! let id = state.commit_selection(Some(&product), 25)?;
//! let breakdown = state.item_result(id)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod session;
pub mod xlsx;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use session::{LoadOutcome, LoadedCatalog, Session, SessionState};
pub use xlsx::read_table;
