//! # Cart Aggregate
//!
//! The authoritative set of line items for a single shopping session, with
//! derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cart Operations                                 │
//! │                                                                     │
//! │  UI Action                Operation              Item List Change   │
//! │  ─────────                ─────────              ────────────────   │
//! │                                                                     │
//! │  Click "Add to cart" ───► add_item() ──────────► merge or append    │
//! │                                                                     │
//! │  Change quantity ───────► update_quantity() ───► absolute set       │
//! │                                                  (≤ 0 removes)      │
//! │                                                                     │
//! │  Click remove ──────────► remove_item() ───────► filter out id      │
//! │                                                                     │
//! │  Empty cart ────────────► clear() ─────────────► items = []         │
//! │                                                                     │
//! │  Badge / stock check ───► item_quantity() ─────► (read only)        │
//! │                                                                     │
//! │  Totals are recomputed from the item list after every operation.    │
//! │  They are never stored independently, so they cannot drift.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by product id (adding the same product merges rows)
//! - Item order is first-add order; re-adding does not move a row
//! - `update_quantity` never leaves a row with quantity ≤ 0
//! - No stock-ceiling enforcement here: availability is a UI concern built
//!   on [`Cart::item_quantity`] and [`crate::validation::validate_stock`]

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::CurrencyFormat;
use crate::money::Money;
use crate::types::{ProductId, ProductSummary};

// =============================================================================
// Line Item
// =============================================================================

/// One row in the cart: a product snapshot and the quantity requested.
///
/// ## Design Notes
/// - `product`: Frozen copy of catalog data at time of adding. The cart
///   displays consistent data even if the catalog changes afterwards.
/// - `selected_attributes`: Free-form choices (size, color) from the
///   product page. Not validated here; re-adding with a new selection
///   overwrites the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product snapshot at time of adding (frozen).
    pub product: ProductSummary,

    /// Quantity in cart.
    pub quantity: i64,

    /// Attribute selections (e.g. size, color), if any.
    pub selected_attributes: Option<BTreeMap<String, String>>,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item, freezing the product snapshot.
    pub fn new(
        product: ProductSummary,
        quantity: i64,
        selected_attributes: Option<BTreeMap<String, String>>,
    ) -> Self {
        LineItem {
            product,
            quantity,
            selected_attributes,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity), in cents.
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart aggregate.
///
/// The item list is the single source of truth; every total is a pure
/// projection of it. All operations are total functions: unknown ids are
/// no-ops, zero/negative quantity updates remove the row, and nothing here
/// returns an error (see the session layer for persistence behavior).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from a stored item list.
    ///
    /// Rows sharing a product id are merged with [`Cart::add_item`]
    /// semantics, so the uniqueness invariant holds even for snapshots
    /// written by older builds.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Cart::new();
        for line in items {
            cart.merge_line(line);
        }
        cart
    }

    /// Read-only view of the line items, in first-add order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Adds a product to the cart or merges into the existing row.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity is incremented; the attribute
    ///   selection is overwritten only when a new one is supplied. The row
    ///   keeps its position and its original `added_at`.
    /// - Product not in cart: appended at the end of the list.
    ///
    /// Quantity is the caller's contract: this operation does not reject
    /// non-positive values, and it does not check the product's stock
    /// ceiling. Both are UI-layer concerns.
    pub fn add_item(
        &mut self,
        product: ProductSummary,
        quantity: i64,
        attributes: Option<BTreeMap<String, String>>,
    ) {
        self.merge_line(LineItem::new(product, quantity, attributes));
    }

    /// Removes an item from the cart by product id.
    ///
    /// A no-op when no row matches; calling it twice is the same as once.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items.retain(|line| line.product.id != *product_id);
    }

    /// Sets the quantity of an item to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: the row is removed entirely; quantities are
    ///   strictly positive while a row exists.
    /// - Unknown product id: a no-op. This operation never creates rows;
    ///   only [`Cart::add_item`] does.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product.id == *product_id)
        {
            line.quantity = quantity;
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the quantity of the matching row, or 0 if absent.
    pub fn item_quantity(&self, product_id: &ProductId) -> i64 {
        self.items
            .iter()
            .find(|line| line.product.id == *product_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Returns the number of unique rows in the cart.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all rows.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Calculates the subtotal in cents. Integer arithmetic throughout.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(LineItem::line_total_cents).sum()
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge-or-append on product id. Shared by `add_item` and
    /// `from_items` so both uphold the uniqueness invariant the same way.
    fn merge_line(&mut self, line: LineItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product.id == line.product.id)
        {
            existing.quantity += line.quantity;
            if line.selected_attributes.is_some() {
                existing.selected_attributes = line.selected_attributes;
            }
        } else {
            self.items.push(line);
        }
    }
}

// =============================================================================
// Derived Read Models
// =============================================================================

/// Cart totals summary for UI surfaces (badge, cart page footer).
///
/// All three fields are derived from the item list in one pass; the
/// formatted string is presentation-only and never used in arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of all quantities.
    pub total_items: i64,

    /// Sum of line totals, in cents. The canonical value for arithmetic.
    pub subtotal_cents: i64,

    /// `subtotal_cents` rendered per the configured locale.
    pub subtotal_formatted: String,
}

impl CartTotals {
    /// Computes totals from a cart and a currency format.
    pub fn of(cart: &Cart, currency: &CurrencyFormat) -> Self {
        let subtotal_cents = cart.subtotal_cents();
        CartTotals {
            total_items: cart.total_items(),
            subtotal_cents,
            subtotal_formatted: currency.format_cents(subtotal_cents),
        }
    }
}

/// The persisted wire format: items plus the derived totals, exactly as the
/// storefront reads them back.
///
/// On restore the item list is authoritative: totals are recomputed from it
/// rather than trusted, so a hand-edited or stale snapshot cannot introduce
/// drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub total_items: i64,
    pub subtotal_cents: i64,
    pub subtotal_formatted: String,
}

impl CartSnapshot {
    /// Captures the full current state for persistence.
    pub fn capture(cart: &Cart, currency: &CurrencyFormat) -> Self {
        let totals = CartTotals::of(cart, currency);
        CartSnapshot {
            items: cart.items().to_vec(),
            total_items: totals.total_items,
            subtotal_cents: totals.subtotal_cents,
            subtotal_formatted: totals.subtotal_formatted,
        }
    }

    /// Rebuilds the cart from the stored item list, recomputing all
    /// derived fields.
    pub fn restore(self) -> Cart {
        Cart::from_items(self.items)
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

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_add_first_item() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 1, None);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.subtotal_cents(), 2999);
    }

    #[test]
    fn test_add_same_product_merges_row() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 1, None);
        cart.add_item(test_product(1, 2999), 2, None);

        assert_eq!(cart.item_count(), 1); // still one row
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal_cents(), 8997);
    }

    #[test]
    fn test_add_second_product_appends() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 3, None);
        cart.add_item(test_product(2, 3499), 1, None);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.subtotal_cents(), 12496);
    }

    #[test]
    fn test_readd_keeps_position_and_added_at() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 1, None);
        cart.add_item(test_product(2, 3499), 1, None);
        let first_added_at = cart.items()[0].added_at;

        cart.add_item(test_product(1, 2999), 1, None);

        assert_eq!(cart.items()[0].product.id, ProductId::from(1));
        assert_eq!(cart.items()[1].product.id, ProductId::from(2));
        assert_eq!(cart.items()[0].added_at, first_added_at);
    }

    #[test]
    fn test_readd_with_attributes_overwrites() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 1, Some(attrs(&[("size", "M")])));
        cart.add_item(test_product(1, 2999), 1, Some(attrs(&[("size", "L")])));

        // Overwrite, not merge
        assert_eq!(
            cart.items()[0].selected_attributes,
            Some(attrs(&[("size", "L")]))
        );
    }

    #[test]
    fn test_readd_without_attributes_keeps_existing() {
        let mut cart = Cart::new();
        cart.add_item(
            test_product(1, 2999),
            1,
            Some(attrs(&[("size", "M"), ("color", "red")])),
        );
        cart.add_item(test_product(1, 2999), 1, None);

        assert_eq!(
            cart.items()[0].selected_attributes,
            Some(attrs(&[("size", "M"), ("color", "red")]))
        );
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 1, None);
        cart.add_item(test_product(2, 3499), 1, None);

        cart.remove_item(&ProductId::from(1));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].product.id, ProductId::from(2));
        assert_eq!(cart.subtotal_cents(), 3499);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 2, None);
        let before = cart.clone();

        cart.remove_item(&ProductId::from(999));

        assert_eq!(cart, before);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.subtotal_cents(), 5998);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 1, None);
        cart.add_item(test_product(2, 3499), 1, None);

        cart.remove_item(&ProductId::from(1));
        let once = cart.clone();
        cart.remove_item(&ProductId::from(1));

        assert_eq!(cart, once);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 3, None);

        cart.update_quantity(&ProductId::from(1), 2);

        // Absolute set, not addition
        assert_eq!(cart.item_quantity(&ProductId::from(1)), 2);
        assert_eq!(cart.subtotal_cents(), 5998);
    }

    #[test]
    fn test_update_quantity_zero_removes_row() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 3, None);
        cart.add_item(test_product(2, 3499), 1, None);

        cart.update_quantity(&ProductId::from(1), 0);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].product.id, ProductId::from(2));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.subtotal_cents(), 3499);
    }

    #[test]
    fn test_update_quantity_negative_removes_row() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 3, None);

        cart.update_quantity(&ProductId::from(1), -2);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 1, None);

        cart.update_quantity(&ProductId::from(999), 5);

        // Never creates a row
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.item_quantity(&ProductId::from(999)), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 3, None);
        cart.add_item(test_product(2, 3499), 1, None);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal_cents(), 0);
    }

    #[test]
    fn test_item_quantity_unknown_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.item_quantity(&ProductId::from(999)), 0);
    }

    /// Documents the caller contract: non-positive quantities are not
    /// rejected by add_item. The UI layer validates before calling.
    #[test]
    fn test_add_item_nonpositive_quantity_is_not_rejected() {
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 0, None);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal_cents(), 0);
    }

    #[test]
    fn test_totals_scenario_chain() {
        let eur = CurrencyFormat::euro_italian();
        let mut cart = Cart::new();

        cart.add_item(test_product(1, 2999), 1, None);
        let totals = CartTotals::of(&cart, &eur);
        assert_eq!(totals.total_items, 1);
        assert_eq!(totals.subtotal_cents, 2999);
        assert_eq!(totals.subtotal_formatted, "€29,99");

        cart.add_item(test_product(1, 2999), 2, None);
        let totals = CartTotals::of(&cart, &eur);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.subtotal_cents, 8997);

        cart.add_item(test_product(2, 3499), 1, None);
        let totals = CartTotals::of(&cart, &eur);
        assert_eq!(totals.total_items, 4);
        assert_eq!(totals.subtotal_cents, 12496);
        assert_eq!(totals.subtotal_formatted, "€124,96");

        cart.update_quantity(&ProductId::from(1), 0);
        let totals = CartTotals::of(&cart, &eur);
        assert_eq!(totals.total_items, 1);
        assert_eq!(totals.subtotal_cents, 3499);

        cart.clear();
        let totals = CartTotals::of(&cart, &eur);
        assert_eq!(totals.total_items, 0);
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.subtotal_formatted, "€0,00");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let eur = CurrencyFormat::euro_italian();
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 3, Some(attrs(&[("size", "M")])));
        cart.add_item(test_product(2, 3499), 1, None);

        let snapshot = CartSnapshot::capture(&cart, &eur);
        let raw = serde_json::to_string(&snapshot).unwrap();
        let decoded: CartSnapshot = serde_json::from_str(&raw).unwrap();

        assert_eq!(decoded, snapshot);
        assert_eq!(decoded.restore(), cart);
    }

    #[test]
    fn test_snapshot_restore_recomputes_drifted_totals() {
        let eur = CurrencyFormat::euro_italian();
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 2, None);

        let mut snapshot = CartSnapshot::capture(&cart, &eur);
        snapshot.total_items = 99;
        snapshot.subtotal_cents = -1;

        let restored = snapshot.restore();
        assert_eq!(restored.total_items(), 2);
        assert_eq!(restored.subtotal_cents(), 5998);
    }

    #[test]
    fn test_snapshot_wire_format_is_camel_case() {
        let eur = CurrencyFormat::euro_italian();
        let mut cart = Cart::new();
        cart.add_item(test_product(1, 2999), 1, None);

        let raw = serde_json::to_string(&CartSnapshot::capture(&cart, &eur)).unwrap();
        assert!(raw.contains("\"totalItems\":1"));
        assert!(raw.contains("\"subtotalCents\":2999"));
        assert!(raw.contains("\"subtotalFormatted\":\"€29,99\""));
        assert!(raw.contains("\"priceCents\":2999"));
    }

    #[test]
    fn test_from_items_merges_duplicate_rows() {
        let a = LineItem::new(test_product(1, 2999), 2, None);
        let b = LineItem::new(test_product(1, 2999), 3, Some(attrs(&[("size", "L")])));
        let c = LineItem::new(test_product(2, 3499), 1, None);

        let cart = Cart::from_items(vec![a, b, c]);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.item_quantity(&ProductId::from(1)), 5);
        assert_eq!(
            cart.items()[0].selected_attributes,
            Some(attrs(&[("size", "L")]))
        );
    }

    #[test]
    fn test_line_total() {
        let line = LineItem::new(test_product(1, 2999), 3, None);
        assert_eq!(line.line_total_cents(), 8997);
        assert_eq!(line.line_total(), Money::from_cents(8997));
    }
}
