//! # Session State
//!
//! One user's working state: the installed catalog plus the order being
//! built against it, shared behind a single lock.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. The embedding layer may issue commands concurrently
//! 2. Only one command should mutate the session at a time
//! 3. A catalog install must swap the catalog and clear the order atomically
//!
//! ## Concurrent Loads
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Last Load Wins                                 │
//! │                                                                         │
//! │  load A (gen 1) ──► decode ──────────────► gen check: 1 ≠ 2 ──► drop    │
//! │  load B (gen 2) ──► decode ──► gen check: 2 = 2 ──► install             │
//! │                                                                         │
//! │  Every load claims a fresh generation up front. After decoding, a       │
//! │  load installs only if its generation is still the newest; stale        │
//! │  results are discarded whole, never merged.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use meanpack_core::{
    calculate, filter_products, parse_table, validate_selection, CalculationResult, CoreError,
    ItemId, OrderStore, OrderSummary, ParsedCatalog, Product, RowWarning,
};
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::{debug, info, warn};

use crate::error::CatalogResult;
use crate::xlsx;

// =============================================================================
// Loaded Catalog
// =============================================================================

/// A successfully imported catalog plus its import context.
///
/// `warnings` ride along so the embedding layer can keep showing them next
/// to the loaded product list, not just once at import time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedCatalog {
    /// File name (not the full path) the catalog came from.
    pub file_name: String,

    /// Products in spreadsheet order.
    pub products: Vec<Product>,

    /// Rows skipped or flagged during import.
    pub warnings: Vec<RowWarning>,

    /// When the install happened.
    pub loaded_at: DateTime<Utc>,
}

// =============================================================================
// Load Outcome
// =============================================================================

/// What became of one `load_catalog` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LoadOutcome {
    /// The decode finished and this catalog is now installed.
    #[serde(rename_all = "camelCase")]
    Installed {
        file_name: String,
        product_count: usize,
        warnings: Vec<RowWarning>,
    },

    /// A newer load started while this one was decoding; its result was
    /// discarded without touching the session.
    Superseded,
}

// =============================================================================
// Session
// =============================================================================

/// Everything one user works with: the installed catalog and the order
/// being built against it.
#[derive(Debug, Default)]
pub struct Session {
    /// The most recently installed catalog, once a load has succeeded.
    pub catalog: Option<LoadedCatalog>,

    /// The order under construction.
    pub order: OrderStore,
}

/// Shared session handle for the embedding layer.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>` because:
/// - `Arc`: shared ownership across threads
/// - `Mutex`: one mutation at a time
///
/// The load generation lives outside the mutex so a new load can claim
/// "newest" without waiting for an in-flight install to release the lock.
#[derive(Debug)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
    load_generation: AtomicU64,
}

impl SessionState {
    /// Creates a state with no catalog and an empty order.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::default())),
            load_generation: AtomicU64::new(0),
        }
    }

    /// Loads a catalog workbook and, if this load is still the newest,
    /// installs it.
    ///
    /// Decode and parse run on the blocking pool; the async caller stays
    /// responsive. Fatal decode/parse problems return an error and leave
    /// the session untouched. A successful but stale decode reports
    /// `LoadOutcome::Superseded` and is likewise discarded.
    pub async fn load_catalog(&self, path: impl AsRef<Path>) -> CatalogResult<LoadOutcome> {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("catalog")
            .to_string();
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(file = %file_name, generation, "loading catalog");

        let parsed = task::spawn_blocking(move || -> CatalogResult<ParsedCatalog> {
            let table = xlsx::read_table(&path)?;
            Ok(parse_table(&table)?)
        })
        .await??;

        Ok(self.install(generation, file_name, parsed))
    }

    /// Installs a decoded catalog if its load is still the newest one.
    ///
    /// The generation check and the swap happen under the session lock, so
    /// a slow older load can never overwrite a newer one. Installing clears
    /// the order and any edit session: existing line items were built
    /// against the replaced catalog.
    fn install(&self, generation: u64, file_name: String, parsed: ParsedCatalog) -> LoadOutcome {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        if self.load_generation.load(Ordering::SeqCst) != generation {
            debug!(file = %file_name, generation, "catalog load superseded; discarding");
            return LoadOutcome::Superseded;
        }

        if !parsed.warnings.is_empty() {
            warn!(
                file = %file_name,
                flagged = parsed.warnings.len(),
                "catalog rows flagged during import"
            );
        }
        let product_count = parsed.products.len();
        let warnings = parsed.warnings.clone();
        session.order.clear();
        session.catalog = Some(LoadedCatalog {
            file_name: file_name.clone(),
            products: parsed.products,
            warnings: parsed.warnings,
            loaded_at: Utc::now(),
        });
        info!(file = %file_name, products = product_count, "catalog installed");

        LoadOutcome::Installed {
            file_name,
            product_count,
            warnings,
        }
    }

    /// Commits the current selection to the order: appends a new line, or
    /// overwrites the line under edit.
    ///
    /// Validation runs before the store is touched; a `None` product or a
    /// non-positive quantity never reaches it.
    pub fn commit_selection(
        &self,
        product: Option<&Product>,
        quantity: i64,
    ) -> CatalogResult<ItemId> {
        let product = validate_selection(product, quantity).map_err(CoreError::from)?;
        let id =
            self.with_session_mut(|session| session.order.commit(product.clone(), quantity))?;
        debug!(%id, model = %product.model, quantity, "order line committed");
        Ok(id)
    }

    /// Starts editing an order line.
    pub fn begin_edit(&self, id: ItemId) -> CatalogResult<()> {
        self.with_session_mut(|session| session.order.begin_edit(id))?;
        Ok(())
    }

    /// Abandons the current edit session, if any.
    pub fn cancel_edit(&self) {
        self.with_session_mut(|session| session.order.cancel_edit());
    }

    /// Removes an order line; removing the line under edit also ends the
    /// edit session.
    pub fn remove_item(&self, id: ItemId) -> CatalogResult<()> {
        self.with_session_mut(|session| session.order.remove(id))?;
        debug!(%id, "order line removed");
        Ok(())
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let file = state.with_session(|s| s.catalog.as_ref().map(|c| c.file_name.clone()));
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session. Mutations go
    /// through the named operations above so they are always pre-validated.
    fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }

    /// Order-level totals across every line.
    pub fn order_summary(&self) -> OrderSummary {
        self.with_session(|session| session.order.summary())
    }

    /// The packing breakdown for one order line.
    pub fn item_result(&self, id: ItemId) -> CatalogResult<CalculationResult> {
        let item = self.with_session(|session| session.order.get(id).cloned());
        let item = item.ok_or(CoreError::ItemNotFound(id))?;
        Ok(calculate(&item.product, item.quantity))
    }

    /// Executes a function over the installed catalog's products (an empty
    /// slice before any load).
    pub fn catalog_products<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Product]) -> R,
    {
        self.with_session(|session| match &session.catalog {
            Some(catalog) => f(&catalog.products),
            None => f(&[]),
        })
    }

    /// Case-insensitive product search over model and series; a blank
    /// query returns the whole catalog.
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        self.catalog_products(|products| {
            filter_products(products, query)
                .into_iter()
                .cloned()
                .collect()
        })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
