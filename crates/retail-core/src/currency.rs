//! # Currency Formatting
//!
//! Locale-configured rendering of [`Money`] values for display.
//!
//! ## Formatting Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Canonical value:  subtotal_cents = 2999   (i64, all arithmetic)    │
//! │                           │                                         │
//! │                           ▼                                         │
//! │  CurrencyFormat::euro_italian().format_cents(2999)                  │
//! │                           │                                         │
//! │                           ▼                                         │
//! │  Display string:   "€29,99"   (presentation only, never parsed)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The formatted string is a pure function of the cent amount and the
//! configured locale. It is never fed back into any calculation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Symbol Position
// =============================================================================

/// Where the currency symbol is placed relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// Symbol before the amount: `€29,99`
    Before,
    /// Symbol after the amount, separated by a space: `29,99 €`
    After,
}

// =============================================================================
// Currency Format
// =============================================================================

/// Locale-specific currency rendering rules.
///
/// ## Presets
/// - [`CurrencyFormat::euro_italian`] — `it-IT` / EUR, the default:
///   `2999` → `"€29,99"`, grouping with `.`
/// - [`CurrencyFormat::dollar_us`] — `en-US` / USD:
///   `2999` → `"$29.99"`, grouping with `,`
///
/// Unknown locale/currency combinations fall back to the default at the
/// configuration layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// ISO 4217 currency code (e.g. "EUR")
    pub code: String,

    /// Currency symbol for display (e.g. "€")
    pub symbol: String,

    /// Number of decimal places for the minor unit
    pub decimals: u8,

    /// Separator between whole units and the decimal part
    pub decimal_separator: char,

    /// Separator between groups of three whole-unit digits, if any
    pub grouping_separator: Option<char>,

    /// Placement of the currency symbol
    pub symbol_position: SymbolPosition,
}

impl CurrencyFormat {
    /// Italian-locale Euro format (`it-IT` / EUR). The application default.
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::currency::CurrencyFormat;
    ///
    /// let eur = CurrencyFormat::euro_italian();
    /// assert_eq!(eur.format_cents(2999), "€29,99");
    /// assert_eq!(eur.format_cents(0), "€0,00");
    /// ```
    pub fn euro_italian() -> Self {
        CurrencyFormat {
            code: "EUR".to_string(),
            symbol: "€".to_string(),
            decimals: 2,
            decimal_separator: ',',
            grouping_separator: Some('.'),
            symbol_position: SymbolPosition::Before,
        }
    }

    /// US-locale Dollar format (`en-US` / USD).
    pub fn dollar_us() -> Self {
        CurrencyFormat {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            decimals: 2,
            decimal_separator: '.',
            grouping_separator: Some(','),
            symbol_position: SymbolPosition::Before,
        }
    }

    /// Resolves a known locale/currency pair to its format.
    ///
    /// Returns `None` for combinations this build does not ship rules for;
    /// the configuration layer decides the fallback.
    pub fn for_locale(locale: &str, code: &str) -> Option<Self> {
        match (locale, code) {
            ("it-IT", "EUR") => Some(Self::euro_italian()),
            ("en-US", "USD") => Some(Self::dollar_us()),
            _ => None,
        }
    }

    /// Formats a [`Money`] amount as a localized currency string.
    pub fn format(&self, amount: Money) -> String {
        self.format_cents(amount.cents())
    }

    /// Formats a cent amount as a localized currency string.
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::currency::CurrencyFormat;
    ///
    /// let eur = CurrencyFormat::euro_italian();
    /// assert_eq!(eur.format_cents(123456789), "€1.234.567,89");
    /// assert_eq!(eur.format_cents(-550), "-€5,50");
    /// ```
    pub fn format_cents(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.decimals as u32);
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();

        let grouped = self.group_digits(whole);
        let sign = if cents < 0 { "-" } else { "" };

        let number = if self.decimals > 0 {
            format!(
                "{}{}{:0width$}",
                grouped,
                self.decimal_separator,
                frac,
                width = self.decimals as usize
            )
        } else {
            grouped
        };

        match self.symbol_position {
            SymbolPosition::Before => format!("{}{}{}", sign, self.symbol, number),
            SymbolPosition::After => format!("{}{} {}", sign, number, self.symbol),
        }
    }

    /// Formats a plain number with the locale's grouping separator.
    ///
    /// Used for non-monetary counters (e.g. view counts) that still follow
    /// the configured locale.
    pub fn format_number(&self, value: i64) -> String {
        let sign = if value < 0 { "-" } else { "" };
        format!("{}{}", sign, self.group_digits(value.abs()))
    }

    fn group_digits(&self, value: i64) -> String {
        let digits = value.to_string();
        let Some(sep) = self.grouping_separator else {
            return digits;
        };

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(sep);
            }
            grouped.push(ch);
        }
        grouped
    }
}

/// Default format is the Italian-locale Euro.
impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::euro_italian()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
