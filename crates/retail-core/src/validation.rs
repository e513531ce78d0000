//! # Validation Module
//!
//! UI-layer guard rails for cart input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: UI controls                                               │
//! │  ├── Quantity steppers capped at the stock ceiling                  │
//! │  └── Disabled "Add to cart" on out-of-stock products                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (called by the UI before mutating)            │
//! │  ├── validate_quantity / validate_price_cents                       │
//! │  └── validate_stock (cart quantity + requested vs ceiling)          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Cart aggregate                                            │
//! │  └── Total functions - accepts whatever the caller passes           │
//! │                                                                     │
//! │  The aggregate itself enforces nothing: stock and positivity are    │
//! │  checked here, by callers that choose to.                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductSummary;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## Example
/// ```rust
/// use retail_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Stock Validators
// =============================================================================

/// Checks a requested total quantity against the product's stock ceiling.
///
/// `requested_total` is what the cart row would hold after the mutation,
/// i.e. current cart quantity plus the increment for an add, or the new
/// absolute value for an update. Products without a tracked stock quantity
/// always pass.
///
/// ## User Workflow
/// ```text
/// Product page: "Add to cart" (qty 5)
///      │
///      ▼
/// validate_stock(product, cart.item_quantity(id) + 5) ← THIS FUNCTION
///      │
///      ├── Err → toast "Only 3 left in stock", no cart mutation
///      │
///      └── Ok  → cart.add_item(product, 5, attributes)
/// ```
pub fn validate_stock(product: &ProductSummary, requested_total: i64) -> ValidationResult<()> {
    if product.can_supply(requested_total) {
        return Ok(());
    }

    Err(ValidationError::InsufficientStock {
        name: product.name.clone(),
        available: product.stock_quantity.unwrap_or(0),
        requested: requested_total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
