//! End-to-end persistence: a session over the file-backed store, closed
//! and reopened, must come back with the same cart.

use std::sync::Arc;

use retail_core::types::{ProductId, ProductSummary};
use retail_session::{AppConfig, CartSession};
use retail_store::FileStore;

fn test_product(id: i64, price_cents: i64) -> ProductSummary {
    ProductSummary {
        id: ProductId::from(id),
        sku: format!("SKU-{id}"),
        name: format!("Product {id}"),
        slug: format!("product-{id}"),
        price_cents,
        price_formatted: None,
        compare_at_price_cents: None,
        stock_quantity: Some(10),
        primary_image_url: None,
    }
}

#[test]
fn cart_survives_restart_on_disk() {
    let scratch = tempfile::TempDir::new().expect("temp dir");
    let mut config = AppConfig::default();
    config.data_dir = scratch.path().to_path_buf();

    let first_view = {
        let store = Arc::new(FileStore::new(&config.data_dir).expect("store opens"));
        let session = CartSession::new(store, &config);

        session.add_item(test_product(1, 2999), Some(3), None);
        session.add_item(test_product(2, 3499), None, None);
        session.update_quantity(&ProductId::from(1), 2);
        session.view()
    };

    // "Restart": a fresh store and session over the same directory
    let store = Arc::new(FileStore::new(&config.data_dir).expect("store reopens"));
    let session = CartSession::new(store, &config);

    assert_eq!(session.view(), first_view);
    assert_eq!(session.item_quantity(&ProductId::from(1)), 2);
    assert_eq!(session.totals().subtotal_cents, 2 * 2999 + 3499);
    assert_eq!(session.totals().subtotal_formatted, "€94,97");
}

#[test]
fn clearing_then_restarting_yields_empty_cart() {
    let scratch = tempfile::TempDir::new().expect("temp dir");
    let mut config = AppConfig::default();
    config.data_dir = scratch.path().to_path_buf();

    {
        let store = Arc::new(FileStore::new(&config.data_dir).expect("store opens"));
        let session = CartSession::new(store, &config);
        session.add_item(test_product(1, 2999), Some(3), None);
        session.clear();
    }

    let store = Arc::new(FileStore::new(&config.data_dir).expect("store reopens"));
    let session = CartSession::new(store, &config);

    assert!(session.view().items.is_empty());
    assert_eq!(session.totals().total_items, 0);
    assert_eq!(session.totals().subtotal_formatted, "€0,00");
}
