//! # retail-core: Pure Business Logic for the RetailSports Cart
//!
//! This crate is the **heart** of the cart. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   RetailSports Cart Architecture                    │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  Storefront UI Surfaces                       │  │
//! │  │   Product Cards ──► Cart Page ──► Navbar Badge                │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                retail-session (CartSession)                   │  │
//! │  │   add_item, remove_item, update_quantity, clear, queries      │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ retail-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌─────────────────┐  │  │
//! │  │  │  types   │ │  money   │ │   cart   │ │    currency     │  │  │
//! │  │  │ Product  │ │  Money   │ │   Cart   │ │ CurrencyFormat  │  │  │
//! │  │  │ Summary  │ │ (cents)  │ │ LineItem │ │ "€29,99"        │  │  │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └─────────────────┘  │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │            retail-store (snapshot persistence)                │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (ProductId, ProductSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`currency`] - Locale-aware currency formatting
//! - [`cart`] - The cart aggregate: line items and derived totals
//! - [`error`] - Validation error types
//! - [`validation`] - UI-layer guard rails
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: Cart mutations never fail - unknown ids are no-ops
//!
//! ## Example Usage
//!
//! ```rust
//! use retail_core::cart::{Cart, CartTotals};
//! use retail_core::currency::CurrencyFormat;
//! use retail_core::types::{ProductId, ProductSummary};
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
//! let mut cart = Cart::new();
//! cart.add_item(product, 2, None);
//!
//! let totals = CartTotals::of(&cart, &CurrencyFormat::euro_italian());
//! assert_eq!(totals.subtotal_cents, 5998);
//! assert_eq!(totals.subtotal_formatted, "€59,98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod currency;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use retail_core::Cart` instead of
// `use retail_core::cart::Cart`

pub use cart::{Cart, CartSnapshot, CartTotals, LineItem};
pub use currency::{CurrencyFormat, SymbolPosition};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::{ProductId, ProductSummary};
