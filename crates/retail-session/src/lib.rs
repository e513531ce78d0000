//! # retail-session: Process-Wide Cart State
//!
//! Wires the pure cart aggregate to a snapshot store and exposes the
//! operation set UI surfaces call.
//!
//! ## Module Organization
//! ```text
//! retail_session/
//! ├── lib.rs       ◄─── You are here (exports)
//! ├── config.rs    ◄─── AppConfig: storage key, currency, data dir
//! └── cart.rs      ◄─── CartSession: Mutex<Cart> + persistence glue
//! ```
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  init:  AppConfig::from_env()                                       │
//! │         FileStore::new(config.data_dir)                             │
//! │         CartSession::new(store, &config)   ← rehydrates or empty    │
//! │                                                                     │
//! │  live:  session.add_item / update_quantity / remove_item / clear    │
//! │         (each call mutates in memory, then persists)                │
//! │                                                                     │
//! │  exit:  nothing to tear down - the last persisted snapshot is       │
//! │         what the next session rehydrates from                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//!
//! use retail_core::types::{ProductId, ProductSummary};
//! use retail_session::{AppConfig, CartSession};
//! use retail_store::MemoryStore;
//!
//! let session = CartSession::new(Arc::new(MemoryStore::new()), &AppConfig::default());
//!
//! let product = ProductSummary {
//!     id: ProductId::from(1),
//!     sku: "RUN-SOCK-42".to_string(),
//!     name: "Trail Runner Socks".to_string(),
//!     slug: "trail-runner-socks".to_string(),
//!     price_cents: 2999,
//!     price_formatted: None,
//!     compare_at_price_cents: None,
//!     stock_quantity: Some(10),
//!     primary_image_url: None,
//! };
//!
//! let view = session.add_item(product, Some(2), None);
//! assert_eq!(view.totals.subtotal_formatted, "€59,98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartSession, CartView};
pub use config::{AppConfig, CART_STORAGE_KEY};
