//! # Application Configuration
//!
//! Settings the session layer needs: where snapshots live, which key the
//! cart persists under, and how money is rendered.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RETAILSPORTS_*`)
//! 2. Defaults (this file)

use std::path::PathBuf;

use directories::ProjectDirs;
use retail_core::currency::CurrencyFormat;

/// Storage key the cart snapshot persists under.
///
/// Shared with the storefront's web-storage namespace, so a reader can
/// find the cart next to the other `retailsports_*` keys.
pub const CART_STORAGE_KEY: &str = "retailsports_cart";

/// Application configuration.
///
/// ## Fields
/// All fields have defaults suitable for development; deployments override
/// through the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Key the cart snapshot is stored under.
    pub cart_storage_key: String,

    /// Currency rendering rules. Default: Italian-locale Euro.
    pub currency: CurrencyFormat,

    /// Base directory for durable snapshots.
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            cart_storage_key: CART_STORAGE_KEY.to_string(),
            currency: CurrencyFormat::default(),
            data_dir: default_data_dir(),
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RETAILSPORTS_CART_KEY`: Override the snapshot storage key
    /// - `RETAILSPORTS_LOCALE` + `RETAILSPORTS_CURRENCY`: Select a shipped
    ///   locale/currency format (e.g. `en-US` + `USD`); unknown pairs keep
    ///   the default
    /// - `RETAILSPORTS_DATA_DIR`: Override the snapshot directory
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(key) = std::env::var("RETAILSPORTS_CART_KEY") {
            config.cart_storage_key = key;
        }

        let locale = std::env::var("RETAILSPORTS_LOCALE").unwrap_or_else(|_| "it-IT".to_string());
        let code = std::env::var("RETAILSPORTS_CURRENCY").unwrap_or_else(|_| "EUR".to_string());
        if let Some(currency) = CurrencyFormat::for_locale(&locale, &code) {
            config.currency = currency;
        }

        if let Ok(dir) = std::env::var("RETAILSPORTS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config
    }
}

/// Platform data directory for the application, falling back to a local
/// `./data` when the platform offers none (e.g. bare containers).
///
/// - macOS: `~/Library/Application Support/com.retailsports.shop/`
/// - Windows: `%APPDATA%/retailsports/shop/data/`
/// - Linux: `~/.local/share/retailsports-shop/`
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "retailsports", "retailsports-shop")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("data"))
}

// =============================================================================
// Unit Tests
// =============================================================================
