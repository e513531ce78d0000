//! # Domain Types
//!
//! Catalog-facing types consumed by the cart.
//!
//! ## Snapshot Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Catalog service (REST) ──► ProductSummary ──► frozen into LineItem │
//! │                                                                     │
//! │  The cart never re-fetches a product. The summary captured at       │
//! │  add-time is what renders and what prices the line, even if the     │
//! │  catalog changes afterwards.                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beyond `id` (matching) and `price_cents` (arithmetic), every field is
//! pass-through data for rendering and is not reinterpreted here.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::{discount_percentage, Money};

// =============================================================================
// Product Identifier
// =============================================================================

/// A stable product identifier from the catalog service.
///
/// The catalog emits numeric ids today; string ids (UUIDs, slugs) are
/// accepted for forward compatibility. Matching is by exact equality, so
/// `Number(1)` and `Text("1")` are distinct identifiers.
///
/// ## Example
/// ```rust
/// use retail_core::types::ProductId;
///
/// let id = ProductId::from(42);
/// assert_eq!(id, ProductId::Number(42));
/// assert_ne!(id, ProductId::from("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric identifier (the catalog default).
    Number(i64),
    /// String identifier.
    Text(String),
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Text(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => write!(f, "{s}"),
        }
    }
}

// =============================================================================
// Product Summary
// =============================================================================

/// A snapshot of product summary data, as served by the catalog.
///
/// ## Fields the cart actually reads
/// - `id`: line-item matching
/// - `price_cents`: line totals and subtotal
/// - `stock_quantity`: the stock ceiling, read only by the UI-layer
///   availability helpers, never enforced by the cart itself
///
/// Everything else passes through unmodified for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Unique identifier from the catalog.
    pub id: ProductId,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// URL slug for product links.
    pub slug: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Price pre-formatted by the catalog, if provided.
    pub price_formatted: Option<String>,

    /// Pre-discount price in cents, if the product is on sale.
    pub compare_at_price_cents: Option<i64>,

    /// Stock ceiling reported by the inventory service, if tracked.
    pub stock_quantity: Option<i64>,

    /// Primary image URL for rendering.
    pub primary_image_url: Option<String>,
}

impl ProductSummary {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the pre-discount price as Money, if present.
    #[inline]
    pub fn compare_at_price(&self) -> Option<Money> {
        self.compare_at_price_cents.map(Money::from_cents)
    }

    /// Returns the discount percentage versus the compare-at price.
    ///
    /// `None` when the product has no compare-at price or is not actually
    /// cheaper than it.
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::types::{ProductId, ProductSummary};
    ///
    /// let product = ProductSummary {
    ///     id: ProductId::from(1),
    ///     sku: "RUN-SOCK-42".to_string(),
    ///     name: "Trail Runner Socks".to_string(),
    ///     slug: "trail-runner-socks".to_string(),
    ///     price_cents: 7500,
    ///     price_formatted: None,
    ///     compare_at_price_cents: Some(10000),
    ///     stock_quantity: None,
    ///     primary_image_url: None,
    /// };
    /// assert_eq!(product.discount_percentage(), Some(25));
    /// ```
    pub fn discount_percentage(&self) -> Option<i64> {
        let compare_at = self.compare_at_price()?;
        if compare_at.cents() <= self.price_cents {
            return None;
        }
        Some(discount_percentage(compare_at, self.price()))
    }

    /// Checks whether the reported stock ceiling covers a requested quantity.
    ///
    /// Products without a tracked stock quantity always report available.
    /// This is a UI-layer query; cart mutations never call it.
    pub fn can_supply(&self, quantity: i64) -> bool {
        match self.stock_quantity {
            Some(stock) => stock >= quantity,
            None => true,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: i64, price_cents: i64) -> ProductSummary {
        ProductSummary {
            id: ProductId::from(id),
            sku: format!("SKU-{id}"),
            name: format!("Product {id}"),
            slug: format!("product-{id}"),
            price_cents,
            price_formatted: None,
            compare_at_price_cents: None,
            stock_quantity: None,
            primary_image_url: None,
        }
    }

    #[test]
    fn test_product_id_matching() {
        assert_eq!(ProductId::from(1), ProductId::Number(1));
        assert_eq!(ProductId::from("abc"), ProductId::Text("abc".to_string()));
        assert_ne!(ProductId::from(1), ProductId::from("1"));
    }

    #[test]
    fn test_product_id_serde_untagged() {
        let numeric: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(numeric, ProductId::Number(42));

        let textual: ProductId = serde_json::from_str("\"ab-12\"").unwrap();
        assert_eq!(textual, ProductId::Text("ab-12".to_string()));

        assert_eq!(serde_json::to_string(&ProductId::from(42)).unwrap(), "42");
    }

    #[test]
    fn test_price_accessor() {
        let product = test_product(1, 2999);
        assert_eq!(product.price(), Money::from_cents(2999));
    }

    #[test]
    fn test_discount_percentage() {
        let mut product = test_product(1, 7500);
        assert_eq!(product.discount_percentage(), None);

        product.compare_at_price_cents = Some(10000);
        assert_eq!(product.discount_percentage(), Some(25));

        // Compare-at below current price is not a discount
        product.compare_at_price_cents = Some(7000);
        assert_eq!(product.discount_percentage(), None);
    }

    #[test]
    fn test_can_supply() {
        let mut product = test_product(1, 2999);
        assert!(product.can_supply(1000)); // untracked stock

        product.stock_quantity = Some(5);
        assert!(product.can_supply(5));
        assert!(!product.can_supply(6));
    }

    #[test]
    fn test_summary_deserializes_without_optionals() {
        let raw = r#"{
            "id": 7,
            "sku": "RUN-TEE-07",
            "name": "Marathon Tee",
            "slug": "marathon-tee",
            "priceCents": 3499
        }"#;
        let product: ProductSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, ProductId::Number(7));
        assert_eq!(product.price_cents, 3499);
        assert_eq!(product.stock_quantity, None);
    }
}
