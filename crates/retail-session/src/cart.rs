//! # Cart Session State
//!
//! The process-wide cart: one live instance per running application,
//! read and written by any number of UI call sites.
//!
//! ## Thread Safety
//! The cart is wrapped in a `Mutex` because:
//! 1. Multiple UI call sites may access/modify the cart
//! 2. Only one caller should modify the cart at a time
//! 3. Each operation is its own atomic unit; no transaction spans two calls
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    CartSession Operations                           │
//! │                                                                     │
//! │  startup ─────► load snapshot ──► parse ──► Cart (or empty)         │
//! │                                                                     │
//! │  UI call ─────► lock ──► mutate Cart ──► persist ──► CartView       │
//! │                                   │                                 │
//! │                                   └── persist failure: warn, keep   │
//! │                                       going - the in-memory state   │
//! │                                       is authoritative              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durability Semantics
//! Writes are best-effort. A failed snapshot write degrades durability
//! (the cart will not survive a restart) but never rolls back or fails
//! the mutation: the session always reads its own writes.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use retail_core::cart::{Cart, CartSnapshot, CartTotals, LineItem};
use retail_core::currency::CurrencyFormat;
use retail_core::types::{ProductId, ProductSummary};
use retail_store::SnapshotStore;

use crate::config::AppConfig;

// =============================================================================
// Cart View
// =============================================================================

/// Cart contents plus totals, as handed to UI surfaces after every
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl CartView {
    fn of(cart: &Cart, currency: &CurrencyFormat) -> Self {
        CartView {
            items: cart.items().to_vec(),
            totals: CartTotals::of(cart, currency),
        }
    }
}

// =============================================================================
// Cart Session
// =============================================================================

/// The live cart for one shopping session.
///
/// Construct one instance at startup and share it (e.g. behind an `Arc`)
/// with every UI surface; tests construct isolated instances over a
/// [`retail_store::MemoryStore`] with no shared state between cases.
pub struct CartSession {
    cart: Mutex<Cart>,
    store: Arc<dyn SnapshotStore>,
    storage_key: String,
    currency: CurrencyFormat,
}

impl CartSession {
    /// Opens the session, rehydrating from the snapshot store.
    ///
    /// Missing, unreadable or malformed snapshots all fall back to the
    /// empty cart; startup never fails on persistence problems.
    pub fn new(store: Arc<dyn SnapshotStore>, config: &AppConfig) -> Self {
        let cart = match store.load(&config.cart_storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<CartSnapshot>(&raw) {
                Ok(snapshot) => snapshot.restore(),
                Err(err) => {
                    warn!(error = %err, "discarding unreadable cart snapshot");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(error = %err, "cart snapshot unavailable, starting empty");
                Cart::new()
            }
        };

        debug!(
            items = cart.item_count(),
            total_items = cart.total_items(),
            "cart session opened"
        );

        CartSession {
            cart: Mutex::new(cart),
            store,
            storage_key: config.cart_storage_key.clone(),
            currency: config.currency.clone(),
        }
    }

    /// Adds a product to the cart, merging with any existing row.
    ///
    /// `quantity` defaults to 1. A supplied attribute selection overwrites
    /// the previous one; `None` keeps it.
    pub fn add_item(
        &self,
        product: ProductSummary,
        quantity: Option<i64>,
        attributes: Option<BTreeMap<String, String>>,
    ) -> CartView {
        let quantity = quantity.unwrap_or(1);
        debug!(product_id = %product.id, quantity, "add_item");

        self.mutate(|cart| cart.add_item(product, quantity, attributes))
    }

    /// Removes an item by product id. A no-op when absent; the (unchanged)
    /// state is still persisted.
    pub fn remove_item(&self, product_id: &ProductId) -> CartView {
        debug!(product_id = %product_id, "remove_item");

        self.mutate(|cart| cart.remove_item(product_id))
    }

    /// Sets an item's quantity to an absolute value; `<= 0` removes the
    /// row, an unknown id is a no-op.
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i64) -> CartView {
        debug!(product_id = %product_id, quantity, "update_quantity");

        self.mutate(|cart| cart.update_quantity(product_id, quantity))
    }

    /// Clears all items from the cart and persists the empty state.
    pub fn clear(&self) -> CartView {
        debug!("clear_cart");

        self.mutate(Cart::clear)
    }

    /// Returns the quantity of the matching row, or 0 if absent.
    ///
    /// Pure query: no side effects, nothing persisted. UI surfaces use
    /// this (against the product's stock ceiling) to cap their controls.
    pub fn item_quantity(&self, product_id: &ProductId) -> i64 {
        self.with_cart(|cart| cart.item_quantity(product_id))
    }

    /// Returns the current cart contents and totals.
    pub fn view(&self) -> CartView {
        self.with_cart(|cart| CartView::of(cart, &self.currency))
    }

    /// Returns just the derived totals (navbar badge, mini-cart).
    pub fn totals(&self) -> CartTotals {
        self.with_cart(|cart| CartTotals::of(cart, &self.currency))
    }

    /// Runs a mutation under the lock, persists the result, and returns
    /// the updated view.
    fn mutate<F>(&self, f: F) -> CartView
    where
        F: FnOnce(&mut Cart),
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart);
        self.persist(&cart);
        CartView::of(&cart, &self.currency)
    }

    /// Executes a function with read access to the cart.
    fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Writes the current state to the snapshot store.
    ///
    /// Failures degrade durability only: they are logged and swallowed,
    /// and the in-memory mutation stands.
    fn persist(&self, cart: &Cart) {
        let snapshot = CartSnapshot::capture(cart, &self.currency);
        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "cart snapshot failed to serialize, skipping persist");
                return;
            }
        };

        if let Err(err) = self.store.save(&self.storage_key, &raw) {
            warn!(error = %err, "cart persistence failed, continuing with in-memory state");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
