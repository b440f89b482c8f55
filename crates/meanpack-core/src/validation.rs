//! # Input Validation
//!
//! Precondition checks for order mutations. These run before the order
//! store or the calculator is touched, so bad input surfaces as a
//! field-level error instead of a nonsense calculation.
//!
//! ## Rules
//!
//! - A product must be selected before an add/edit commit.
//! - Quantities are strictly positive.
//!
//! There is no upper quantity bound: bulk orders run to tens of thousands
//! of units and every downstream computation is total over `i64`.

use crate::error::ValidationError;
use crate::types::Product;

/// Convenience type alias for validation check results.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an ordered quantity.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a product selection about to be committed to the order.
///
/// Returns the selected product so callers can commit it without
/// re-checking. `None` means nothing is selected, which is an error for
/// add/edit commits.
pub fn validate_selection<'a>(
    product: Option<&'a Product>,
    quantity: i64,
) -> ValidationResult<&'a Product> {
    let product = product.ok_or_else(|| ValidationError::Required {
        field: "product".to_string(),
    })?;
    validate_quantity(quantity)?;
    Ok(product)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitWeight;

    fn test_product() -> Product {
        Product {
            model: "LRS-350-24".to_string(),
            series: Some("LRS".to_string()),
            units_per_box: 1,
            box_weight_kg: 1.9,
            box_length_in: 8.0,
            box_width_in: 4.0,
            box_height_in: 2.0,
            unit_weight: UnitWeight::Unknown,
        }
    }

    #[test]
    fn test_positive_quantity_accepted() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(120).is_ok());
        // bulk orders have no upper cap
        assert!(validate_quantity(1_000_000).is_ok());
    }

    #[test]
    fn test_zero_and_negative_quantity_rejected() {
        let err = validate_quantity(0).unwrap_err();
        assert_eq!(err.to_string(), "quantity must be positive");
        assert!(validate_quantity(-5).is_err());
    }

    #[test]
    fn test_selection_requires_product() {
        let err = validate_selection(None, 5).unwrap_err();
        assert_eq!(err.to_string(), "product is required");
    }

    #[test]
    fn test_selection_requires_positive_quantity() {
        let product = test_product();
        let err = validate_selection(Some(&product), 0).unwrap_err();
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_valid_selection_returns_product() {
        let product = test_product();
        let validated = validate_selection(Some(&product), 3).unwrap();
        assert_eq!(validated.model, "LRS-350-24");
    }
}
