//! # Domain Types
//!
//! Core domain types used throughout Meanpack.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌───────────────────┐     │
//! │  │    Product      │   │   OrderItem     │   │ CalculationResult │     │
//! │  │  ─────────────  │   │  ─────────────  │   │  ───────────────  │     │
//! │  │  model          │   │  id (ItemId)    │   │  full_boxes       │     │
//! │  │  units_per_box  │   │  product (copy) │   │  remainder        │     │
//! │  │  box_weight_kg  │   │  quantity       │   │  total_boxes      │     │
//! │  │  box dims (in)  │   │  added_at       │   │  total_weight     │     │
//! │  │  unit_weight    │   └─────────────────┘   │  volumes, flag    │     │
//! │  └─────────────────┘                         └───────────────────┘     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   UnitWeight    │   │  OrderSummary   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Exact(kg)      │   │  total_boxes    │                             │
//! │  │  Unknown        │   │  total_weight   │                             │
//! │  └─────────────────┘   │  total_volume   │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Identity Pattern
//! An OrderItem freezes a value copy of its Product at add/edit time: a later
//! catalog reload never retroactively alters existing line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Unit Weight
// =============================================================================

/// Per-unit weight of a product, when the catalog provides one.
///
/// ## Why a tagged variant?
/// "Exact weight known" vs. "estimate by proration" used to be a nullable
/// field, re-inferred at every call site. As a variant, the calculator's
/// branch is exhaustive and the "estimated" flag on the result is derived
/// from which arm ran, not from nullability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UnitWeight {
    /// The catalog specifies the weight of a single unit, in kilograms.
    Exact(f64),
    /// No per-unit weight; partial boxes are prorated from the full-box
    /// weight and flagged as estimated.
    Unknown,
}

impl UnitWeight {
    /// Builds a UnitWeight from an optional parsed cell value.
    #[inline]
    pub fn from_option(kg: Option<f64>) -> Self {
        match kg {
            Some(kg) => UnitWeight::Exact(kg),
            None => UnitWeight::Unknown,
        }
    }

    /// Returns the exact weight, if known.
    #[inline]
    pub fn as_option(&self) -> Option<f64> {
        match self {
            UnitWeight::Exact(kg) => Some(*kg),
            UnitWeight::Unknown => None,
        }
    }

    /// Checks whether an exact per-unit weight is known.
    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, UnitWeight::Exact(_))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A shippable product and its packing data, parsed from one catalog row.
///
/// ## Invariants (enforced by the parser — violating rows are never built)
/// - `model` is non-empty and trimmed
/// - `units_per_box` is a positive integer
/// - `box_weight_kg` and all three dimensions are finite and > 0
/// - `UnitWeight::Exact` values are finite and > 0
///
/// ## Serialization
/// Field names stay snake_case on purpose: they are the spreadsheet column
/// names, and the frontend consumes the parsed rows under those keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Model number — the product's identity within a catalog.
    pub model: String,

    /// Optional product series/family (e.g. "LRS").
    pub series: Option<String>,

    /// How many units fill one shipping box.
    pub units_per_box: i64,

    /// Weight of one full box, in kilograms.
    pub box_weight_kg: f64,

    /// Box length in inches.
    pub box_length_in: f64,

    /// Box width in inches.
    pub box_width_in: f64,

    /// Box height in inches.
    pub box_height_in: f64,

    /// Per-unit weight, when the catalog provides one.
    pub unit_weight: UnitWeight,
}

impl Product {
    /// Geometric volume of one box, in cubic inches.
    #[inline]
    pub fn box_volume_in3(&self) -> f64 {
        self.box_length_in * self.box_width_in * self.box_height_in
    }

    /// Display label: the model, with the series in parentheses when present.
    pub fn label(&self) -> String {
        match &self.series {
            Some(series) => format!("{} ({})", self.model, series),
            None => self.model.clone(),
        }
    }
}

// =============================================================================
// Item Id
// =============================================================================

/// Unique identifier of an order line item.
///
/// Ids are minted at creation (UUID v4), never reused within a session, and
/// carry no ordering semantics — the store's sequence is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(#[ts(as = "String")] Uuid);

impl ItemId {
    /// Mints a fresh id.
    #[inline]
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in the working order: a product plus a desired unit count.
///
/// Uses the snapshot pattern: `product` is a frozen value copy taken when the
/// item was added or last edited, so catalog reloads don't rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Stable identity, assigned at creation and preserved across edits.
    pub id: ItemId,

    /// Product snapshot at add/edit time.
    pub product: Product,

    /// Desired unit count (> 0).
    pub quantity: i64,

    /// When this item was added to the order.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Calculation Result
// =============================================================================

/// Box count, weight and volume for one (product, quantity) pair.
///
/// Derived on demand, never persisted: `calculate` is pure and idempotent,
/// so exports and re-renders recompute rather than cache.
///
/// No rounding is applied here. Presentation rounding (1-3 decimals) is the
/// frontend's job and must not feed back into further computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Boxes filled to exactly `units_per_box`.
    pub full_boxes: i64,

    /// Leftover units in [0, units_per_box − 1].
    pub remainder: i64,

    /// `full_boxes`, plus one partial box when `remainder > 0`.
    pub total_boxes: i64,

    /// Volume of a single box, in cubic inches.
    pub box_volume_in3: f64,

    /// Volume of all `total_boxes` boxes, in cubic inches.
    pub total_volume_in3: f64,

    /// Volume of all `total_boxes` boxes, in cubic feet (1 ft³ = 1728 in³).
    pub total_volume_ft3: f64,

    /// Weight attributable to the remainder units, in kilograms.
    /// Zero when `remainder == 0`.
    pub partial_box_weight: f64,

    /// Total shipment weight in kilograms:
    /// `full_boxes × box_weight_kg + partial_box_weight`.
    pub total_weight: f64,

    /// True when the partial-box weight was prorated from the full-box
    /// weight because no exact per-unit weight is known. The UI labels the
    /// weight "estimated" exactly when this is set.
    pub estimated_weight: bool,
}

// =============================================================================
// Order Summary
// =============================================================================

/// Order-level totals: each numeric field summed independently across items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Number of line items folded into this summary.
    pub line_count: usize,

    /// Sum of all desired unit counts.
    pub total_units: i64,

    /// Sum of per-item `total_boxes`.
    pub total_boxes: i64,

    /// Sum of per-item `total_weight`, in kilograms.
    pub total_weight: f64,

    /// Sum of per-item `total_volume_ft3`, in cubic feet.
    pub total_volume_ft3: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
