//! # Packing Calculator
//!
//! Turns a product's packing profile plus an ordered quantity into box
//! counts, weights and volumes.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          calculate()                             │
//! │                                                                  │
//! │   quantity ──┬──► full_boxes = quantity ÷ units_per_box          │
//! │              └──► remainder  = quantity mod units_per_box        │
//! │                                                                  │
//! │   total_boxes  = full_boxes + (1 if remainder > 0)               │
//! │   total_weight = full_boxes × box_weight + partial box weight    │
//! │   volume       = total_boxes × (L × W × H)                       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Partial Box Weight
//!
//! A remainder ships in one extra box that is not full. Its weight is
//! `remainder × unit_weight` when the per-unit weight is known, and
//! `(remainder / units_per_box) × box_weight` prorated from the full-box
//! weight otherwise. Prorated results carry the `estimated_weight` flag so
//! displays can mark them.
//!
//! All arithmetic is plain `f64` and nothing here rounds; display rounding
//! is the embedding UI's concern.

use crate::types::{CalculationResult, OrderItem, OrderSummary, Product, UnitWeight};
use crate::IN3_PER_FT3;

// =============================================================================
// Per-Line Calculation
// =============================================================================

/// Computes the packing breakdown for `quantity` units of `product`.
///
/// The function is total over `i64`: a quantity of zero yields the all-zero
/// breakdown rather than an error. Callers are expected to reject
/// non-positive quantities up front via `validate_quantity`; nothing here
/// re-checks them. Assumes `units_per_box >= 1`, which the catalog parser
/// guarantees for every `Product` it constructs.
///
/// ## Example
///
/// ```rust
/// use meanpack_core::{calculate, Product, UnitWeight};
///
/// let product = Product {
///     model: "HDR-15-5".to_string(),
///     series: Some("HDR".to_string()),
///     units_per_box: 20,
///     box_weight_kg: 10.0,
///     box_length_in: 10.0,
///     box_width_in: 10.0,
///     box_height_in: 10.0,
///     unit_weight: UnitWeight::Unknown,
/// };
///
/// let result = calculate(&product, 25);
/// assert_eq!(result.full_boxes, 1);
/// assert_eq!(result.remainder, 5);
/// assert_eq!(result.total_boxes, 2);
/// assert_eq!(result.total_weight, 12.5);
/// assert!(result.estimated_weight);
/// ```
pub fn calculate(product: &Product, quantity: i64) -> CalculationResult {
    let full_boxes = quantity / product.units_per_box;
    let remainder = quantity % product.units_per_box;
    let total_boxes = full_boxes + if remainder > 0 { 1 } else { 0 };

    let box_volume_in3 = product.box_volume_in3();
    let total_volume_in3 = box_volume_in3 * total_boxes as f64;
    let total_volume_ft3 = total_volume_in3 / IN3_PER_FT3;

    let (partial_box_weight, estimated_weight) = if remainder > 0 {
        match product.unit_weight {
            UnitWeight::Exact(kg) => (remainder as f64 * kg, false),
            UnitWeight::Unknown => (
                (remainder as f64 / product.units_per_box as f64) * product.box_weight_kg,
                true,
            ),
        }
    } else {
        (0.0, false)
    };

    let total_weight = full_boxes as f64 * product.box_weight_kg + partial_box_weight;

    CalculationResult {
        full_boxes,
        remainder,
        total_boxes,
        box_volume_in3,
        total_volume_in3,
        total_volume_ft3,
        partial_box_weight,
        total_weight,
        estimated_weight,
    }
}

// =============================================================================
// Order Aggregation
// =============================================================================

/// Folds every order line into one order-level summary.
///
/// Each line is recalculated from its stored product snapshot, so the
/// summary always agrees with the per-line results a display shows next to
/// it. An empty order yields the all-zero summary.
pub fn aggregate(items: &[OrderItem]) -> OrderSummary {
    items.iter().fold(OrderSummary::default(), |mut summary, item| {
        let result = calculate(&item.product, item.quantity);
        summary.line_count += 1;
        summary.total_units += item.quantity;
        summary.total_boxes += result.total_boxes;
        summary.total_weight += result.total_weight;
        summary.total_volume_ft3 += result.total_volume_ft3;
        summary
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;
    use chrono::Utc;

    fn product(
        units_per_box: i64,
        box_weight_kg: f64,
        dims: (f64, f64, f64),
        unit_weight: UnitWeight,
    ) -> Product {
        Product {
            model: "TEST-1".to_string(),
            series: None,
            units_per_box,
            box_weight_kg,
            box_length_in: dims.0,
            box_width_in: dims.1,
            box_height_in: dims.2,
            unit_weight,
        }
    }

    fn order_item(product: Product, quantity: i64) -> OrderItem {
        OrderItem {
            id: ItemId::new(),
            product,
            quantity,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_exact_division_fills_boxes() {
        let p = product(24, 8.0, (20.0, 12.0, 6.0), UnitWeight::Unknown);
        let r = calculate(&p, 48);
        assert_eq!(r.full_boxes, 2);
        assert_eq!(r.remainder, 0);
        assert_eq!(r.total_boxes, 2);
        assert_eq!(r.partial_box_weight, 0.0);
        assert_eq!(r.total_weight, 16.0);
        assert!(!r.estimated_weight);
    }

    #[test]
    fn test_remainder_adds_one_box() {
        let p = product(24, 8.0, (20.0, 12.0, 6.0), UnitWeight::Unknown);
        let r = calculate(&p, 50);
        assert_eq!(r.full_boxes, 2);
        assert_eq!(r.remainder, 2);
        assert_eq!(r.total_boxes, 3);
    }

    #[test]
    fn test_quotient_remainder_identity() {
        let p = product(7, 1.0, (1.0, 1.0, 1.0), UnitWeight::Unknown);
        for quantity in 1..=100 {
            let r = calculate(&p, quantity);
            assert_eq!(r.full_boxes * 7 + r.remainder, quantity);
            assert!(r.remainder >= 0 && r.remainder < 7);
            // total_boxes is the ceiling division: least box count that fits
            assert_eq!(r.total_boxes, (quantity + 6) / 7);
        }
    }

    #[test]
    fn test_known_unit_weight_is_exact() {
        let p = product(20, 10.0, (10.0, 10.0, 10.0), UnitWeight::Exact(0.5));
        let r = calculate(&p, 25);
        assert_eq!(r.partial_box_weight, 2.5);
        assert_eq!(r.total_weight, 12.5);
        assert!(!r.estimated_weight);
    }

    #[test]
    fn test_unknown_unit_weight_prorates_and_flags() {
        let p = product(20, 10.0, (10.0, 10.0, 10.0), UnitWeight::Unknown);
        let r = calculate(&p, 25);
        assert_eq!(r.full_boxes, 1);
        assert_eq!(r.remainder, 5);
        // (5 / 20) × 10 kg
        assert_eq!(r.partial_box_weight, 2.5);
        assert_eq!(r.total_weight, 12.5);
        assert_eq!(r.total_boxes, 2);
        assert!(r.estimated_weight);
    }

    #[test]
    fn test_full_boxes_never_estimated() {
        // Unknown unit weight is irrelevant without a partial box.
        let p = product(20, 10.0, (10.0, 10.0, 10.0), UnitWeight::Unknown);
        let r = calculate(&p, 40);
        assert_eq!(r.remainder, 0);
        assert_eq!(r.total_weight, 20.0);
        assert!(!r.estimated_weight);
    }

    #[test]
    fn test_single_unit_boxes_and_volume() {
        // 8 × 4 × 2 in = 64 in³ per box, one unit per box.
        let p = product(1, 1.9, (8.0, 4.0, 2.0), UnitWeight::Unknown);
        let r = calculate(&p, 5);
        assert_eq!(r.full_boxes, 5);
        assert_eq!(r.remainder, 0);
        assert_eq!(r.total_boxes, 5);
        assert_eq!(r.box_volume_in3, 64.0);
        assert_eq!(r.total_volume_in3, 320.0);
        assert_eq!(r.total_volume_ft3, 320.0 / 1728.0);
        assert!((r.total_volume_ft3 - 0.185).abs() < 0.001);
        assert!((r.total_weight - 9.5).abs() < 1e-9);
        assert!(!r.estimated_weight);
    }

    #[test]
    fn test_zero_quantity_is_degenerate_zero() {
        let p = product(24, 8.0, (20.0, 12.0, 6.0), UnitWeight::Exact(0.3));
        let r = calculate(&p, 0);
        assert_eq!(r.full_boxes, 0);
        assert_eq!(r.remainder, 0);
        assert_eq!(r.total_boxes, 0);
        assert_eq!(r.total_weight, 0.0);
        assert_eq!(r.total_volume_in3, 0.0);
        assert!(!r.estimated_weight);
    }

    #[test]
    fn test_aggregate_empty_order() {
        assert_eq!(aggregate(&[]), OrderSummary::default());
    }

    #[test]
    fn test_aggregate_sums_lines() {
        // Dimensions picked so per-box volumes are exact in ft³.
        let a = order_item(
            product(10, 2.5, (12.0, 12.0, 12.0), UnitWeight::Exact(0.25)),
            25,
        );
        let b = order_item(product(4, 1.5, (12.0, 12.0, 6.0), UnitWeight::Unknown), 8);
        let c = order_item(product(1, 2.0, (24.0, 12.0, 12.0), UnitWeight::Unknown), 3);

        let summary = aggregate(&[a, b, c]);
        assert_eq!(summary.line_count, 3);
        assert_eq!(summary.total_units, 36);
        // 3 boxes (2 full + 1 partial) + 2 + 3
        assert_eq!(summary.total_boxes, 8);
        // (2 × 2.5 + 5 × 0.25) + 2 × 1.5 + 3 × 2.0
        assert_eq!(summary.total_weight, 15.25);
        // 3 × 1.0 + 2 × 0.5 + 3 × 2.0 ft³
        assert_eq!(summary.total_volume_ft3, 10.0);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let a = order_item(
            product(10, 2.5, (12.0, 12.0, 12.0), UnitWeight::Exact(0.25)),
            25,
        );
        let b = order_item(product(4, 1.5, (12.0, 12.0, 6.0), UnitWeight::Unknown), 8);
        let c = order_item(product(1, 2.0, (24.0, 12.0, 12.0), UnitWeight::Unknown), 3);

        let forward = aggregate(&[a.clone(), b.clone(), c.clone()]);
        let reversed = aggregate(&[c, b, a]);
        assert_eq!(forward, reversed);
    }
}
