//! # Order Building
//!
//! The order under construction: line items plus the single edit slot.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         OrderStore                           │
//! │                                                              │
//! │   items: [ OrderItem, OrderItem, ... ]   (insertion order)   │
//! │   edit_state: Idle | Editing(item id)                        │
//! │                                                              │
//! │   commit(product, qty):                                      │
//! │     Idle        ──► append new item                          │
//! │     Editing(id) ──► overwrite item in place, back to Idle    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items hold a full `Product` snapshot taken when the line is committed,
//! so a later catalog reload never rewrites existing lines. At most one
//! item is under edit at a time; starting a new edit retargets the marker,
//! and removing the item under edit clears it.

use chrono::Utc;

use crate::calc::aggregate;
use crate::error::{CoreError, CoreResult};
use crate::types::{ItemId, OrderItem, OrderSummary, Product};
use crate::validation::validate_quantity;

// =============================================================================
// Edit State
// =============================================================================

/// Which item, if any, an edit session currently targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// No edit in progress; commits append new items.
    Idle,
    /// The identified item is under edit; the next commit overwrites it.
    Editing(ItemId),
}

impl Default for EditState {
    fn default() -> Self {
        EditState::Idle
    }
}

// =============================================================================
// Order Store
// =============================================================================

/// In-memory order line items plus the edit slot.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    items: Vec<OrderItem>,
    edit_state: EditState,
}

impl OrderStore {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new line item, returning its id.
    ///
    /// The product is snapshotted into the item as-is; the quantity must be
    /// strictly positive.
    pub fn add(&mut self, product: Product, quantity: i64) -> CoreResult<ItemId> {
        validate_quantity(quantity)?;
        let id = ItemId::new();
        self.items.push(OrderItem {
            id,
            product,
            quantity,
            added_at: Utc::now(),
        });
        Ok(id)
    }

    /// Overwrites an existing item's product and quantity in place.
    ///
    /// The item keeps its id, list position and creation timestamp.
    pub fn edit(&mut self, id: ItemId, product: Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::ItemNotFound(id))?;
        item.product = product;
        item.quantity = quantity;
        Ok(())
    }

    /// Starts editing the identified item.
    ///
    /// There is one edit slot; a second `begin_edit` retargets it. Unknown
    /// ids are rejected so the marker always points at a live item.
    pub fn begin_edit(&mut self, id: ItemId) -> CoreResult<()> {
        if self.get(id).is_none() {
            return Err(CoreError::ItemNotFound(id));
        }
        self.edit_state = EditState::Editing(id);
        Ok(())
    }

    /// Abandons the current edit session, if any.
    pub fn cancel_edit(&mut self) {
        self.edit_state = EditState::Idle;
    }

    /// Commits a product + quantity against the current edit state.
    ///
    /// While editing, the targeted item is overwritten and the edit session
    /// ends. Otherwise a new item is appended. Either way the affected
    /// item's id is returned.
    ///
    /// A commit that fails validation leaves the edit session in place so
    /// the caller can correct the input and commit again.
    pub fn commit(&mut self, product: Product, quantity: i64) -> CoreResult<ItemId> {
        match self.edit_state {
            EditState::Editing(id) => {
                self.edit(id, product, quantity)?;
                self.edit_state = EditState::Idle;
                Ok(id)
            }
            EditState::Idle => self.add(product, quantity),
        }
    }

    /// Removes an item.
    ///
    /// Removing the item under edit also ends the edit session, so the next
    /// commit appends instead of targeting a dead id.
    pub fn remove(&mut self, id: ItemId) -> CoreResult<()> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CoreError::ItemNotFound(id))?;
        self.items.remove(index);
        if self.edit_state == EditState::Editing(id) {
            self.edit_state = EditState::Idle;
        }
        Ok(())
    }

    /// Drops every item and any edit session.
    pub fn clear(&mut self) {
        self.items.clear();
        self.edit_state = EditState::Idle;
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Looks an item up by id.
    pub fn get(&self, id: ItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the order has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id under edit, when an edit session is active.
    pub fn editing_id(&self) -> Option<ItemId> {
        match self.edit_state {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        }
    }

    /// Recalculates and sums every line into an order-level summary.
    pub fn summary(&self) -> OrderSummary {
        aggregate(&self.items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitWeight;

    fn test_product(model: &str) -> Product {
        Product {
            model: model.to_string(),
            series: Some("LRS".to_string()),
            units_per_box: 24,
            box_weight_kg: 8.0,
            box_length_in: 20.0,
            box_width_in: 12.0,
            box_height_in: 6.0,
            unit_weight: UnitWeight::Unknown,
        }
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut order = OrderStore::new();
        let a = order.add(test_product("A-1"), 10).unwrap();
        let b = order.add(test_product("B-2"), 20).unwrap();

        assert_ne!(a, b);
        assert_eq!(order.len(), 2);
        assert_eq!(order.items()[0].product.model, "A-1");
        assert_eq!(order.items()[1].product.model, "B-2");
        assert_eq!(order.get(a).unwrap().quantity, 10);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut order = OrderStore::new();
        assert!(order.add(test_product("A-1"), 0).is_err());
        assert!(order.add(test_product("A-1"), -3).is_err());
        assert!(order.is_empty());
    }

    #[test]
    fn test_edit_overwrites_in_place() {
        let mut order = OrderStore::new();
        let a = order.add(test_product("A-1"), 10).unwrap();
        let b = order.add(test_product("B-2"), 20).unwrap();
        let added_at = order.get(a).unwrap().added_at;

        order.edit(a, test_product("C-3"), 5).unwrap();

        assert_eq!(order.len(), 2);
        assert_eq!(order.items()[0].id, a);
        assert_eq!(order.items()[0].product.model, "C-3");
        assert_eq!(order.items()[0].quantity, 5);
        assert_eq!(order.items()[0].added_at, added_at);
        assert_eq!(order.items()[1].id, b);
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut order = OrderStore::new();
        order.add(test_product("A-1"), 10).unwrap();
        let err = order
            .edit(ItemId::new(), test_product("B-2"), 5)
            .unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(_)));
    }

    #[test]
    fn test_begin_edit_tracks_single_item() {
        let mut order = OrderStore::new();
        let a = order.add(test_product("A-1"), 10).unwrap();
        let b = order.add(test_product("B-2"), 20).unwrap();

        order.begin_edit(a).unwrap();
        assert_eq!(order.editing_id(), Some(a));

        // one slot: retargeting replaces the marker
        order.begin_edit(b).unwrap();
        assert_eq!(order.editing_id(), Some(b));

        order.cancel_edit();
        assert_eq!(order.editing_id(), None);
        order.cancel_edit(); // idempotent
        assert_eq!(order.editing_id(), None);
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let mut order = OrderStore::new();
        order.add(test_product("A-1"), 10).unwrap();

        assert!(matches!(
            order.begin_edit(ItemId::new()),
            Err(CoreError::ItemNotFound(_))
        ));
        assert_eq!(order.editing_id(), None);
    }

    #[test]
    fn test_commit_appends_when_idle() {
        let mut order = OrderStore::new();
        let a = order.commit(test_product("A-1"), 10).unwrap();

        assert_eq!(order.len(), 1);
        assert_eq!(order.editing_id(), None);
        assert_eq!(order.get(a).unwrap().quantity, 10);
    }

    #[test]
    fn test_commit_overwrites_while_editing() {
        let mut order = OrderStore::new();
        let a = order.add(test_product("A-1"), 10).unwrap();
        let b = order.add(test_product("B-2"), 20).unwrap();

        order.begin_edit(a).unwrap();
        let committed = order.commit(test_product("C-3"), 7).unwrap();

        assert_eq!(committed, a);
        assert_eq!(order.len(), 2);
        assert_eq!(order.items()[0].product.model, "C-3");
        assert_eq!(order.items()[1].id, b);
        assert_eq!(order.editing_id(), None);
    }

    #[test]
    fn test_failed_commit_keeps_edit_session() {
        let mut order = OrderStore::new();
        let a = order.add(test_product("A-1"), 10).unwrap();
        order.begin_edit(a).unwrap();

        assert!(order.commit(test_product("A-1"), 0).is_err());

        assert_eq!(order.editing_id(), Some(a));
        assert_eq!(order.get(a).unwrap().quantity, 10);
    }

    #[test]
    fn test_remove_item() {
        let mut order = OrderStore::new();
        let a = order.add(test_product("A-1"), 10).unwrap();
        let b = order.add(test_product("B-2"), 20).unwrap();

        order.remove(a).unwrap();
        assert_eq!(order.len(), 1);
        assert_eq!(order.items()[0].id, b);

        assert!(matches!(order.remove(a), Err(CoreError::ItemNotFound(_))));
    }

    #[test]
    fn test_remove_edited_item_clears_marker() {
        let mut order = OrderStore::new();
        let a = order.add(test_product("A-1"), 10).unwrap();
        order.begin_edit(a).unwrap();

        order.remove(a).unwrap();
        assert_eq!(order.editing_id(), None);

        // the next commit appends rather than targeting the removed id
        let c = order.commit(test_product("C-3"), 4).unwrap();
        assert_ne!(c, a);
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_remove_other_item_keeps_marker() {
        let mut order = OrderStore::new();
        let a = order.add(test_product("A-1"), 10).unwrap();
        let b = order.add(test_product("B-2"), 20).unwrap();
        order.begin_edit(a).unwrap();

        order.remove(b).unwrap();
        assert_eq!(order.editing_id(), Some(a));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut order = OrderStore::new();
        let a = order.add(test_product("A-1"), 10).unwrap();
        order.begin_edit(a).unwrap();

        order.clear();
        assert!(order.is_empty());
        assert_eq!(order.editing_id(), None);
    }

    #[test]
    fn test_summary_totals() {
        let mut order = OrderStore::new();
        order.add(test_product("A-1"), 24).unwrap(); // exactly one box
        order.add(test_product("B-2"), 12).unwrap(); // one half-full box

        let summary = order.summary();
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.total_units, 36);
        assert_eq!(summary.total_boxes, 2);
        // 8 kg full box + prorated half box
        assert_eq!(summary.total_weight, 12.0);
    }
}
