//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Every price, line total and subtotal is an i64 count of the      │
//! │    smallest currency unit. Formatting to "€29,99" happens only at   │
//! │    the presentation edge, never inside the arithmetic.              │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use retail_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(2999); // €29.99
//!
//! // Arithmetic operations
//! let line_total = price.multiply_quantity(3);      // €89.97
//! let total = price + Money::from_cents(3499);      // €64.98
//!
//! // NEVER do this:
//! // let bad = Money::from_float(29.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for EUR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::money::Money;
    ///
    /// let price = Money::from_cents(2999); // Represents €29.99
    /// assert_eq!(price.cents(), 2999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (euros and cents).
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::money::Money;
    ///
    /// let price = Money::from_major_minor(29, 99); // €29.99
    /// assert_eq!(price.cents(), 2999);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -€5.50 (refund)
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -€5.50, not -€4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (whole euros) portion.
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2999).whole_units(), 29);
    /// assert_eq!(Money::from_cents(-550).whole_units(), -5);
    /// ```
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2999).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2999); // €29.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 8997); // €89.97
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Trail Runner Socks €29.99
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: €89.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Calculates the discount percentage between an original and a discounted
/// price, rounded to the nearest whole percent.
///
/// Returns 0 when the original price is zero or negative.
///
/// ## Example
/// ```rust
/// use retail_core::money::{discount_percentage, Money};
///
/// let original = Money::from_cents(10000);   // €100.00
/// let discounted = Money::from_cents(7500);  // €75.00
/// assert_eq!(discount_percentage(original, discounted), 25);
/// ```
pub fn discount_percentage(original: Money, discounted: Money) -> i64 {
    if original.cents() <= 0 {
        return 0;
    }

    // Round-to-nearest in integer math, i128 to avoid overflow on large amounts
    let saved = (original.cents() as i128 - discounted.cents() as i128) * 100;
    let half = original.cents() as i128 / 2;
    ((saved + half) / original.cents() as i128) as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a plain `units.cents` format.
///
/// ## Note
/// This is for debugging. Locale-aware display goes through
/// [`crate::currency::CurrencyFormat`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.whole_units().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of line totals into a subtotal.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2999);
        assert_eq!(money.cents(), 2999);
        assert_eq!(money.whole_units(), 29);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(29, 99);
        assert_eq!(money.cents(), 2999);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(2999)), "29.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(2999);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 8997);
    }

    #[test]
    fn test_sum() {
        let subtotal: Money = [2999, 3499, 500]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(subtotal.cents(), 6998);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_discount_percentage() {
        let original = Money::from_cents(10000);
        assert_eq!(discount_percentage(original, Money::from_cents(7500)), 25);
        assert_eq!(discount_percentage(original, Money::from_cents(10000)), 0);
        // 2999 → 1999 saves 33.34%, rounds to 33
        assert_eq!(
            discount_percentage(Money::from_cents(2999), Money::from_cents(1999)),
            33
        );
    }

    #[test]
    fn test_discount_percentage_zero_original() {
        // Guard: a free or malformed original price never divides by zero
        assert_eq!(discount_percentage(Money::zero(), Money::from_cents(500)), 0);
        assert_eq!(
            discount_percentage(Money::from_cents(-100), Money::from_cents(50)),
            0
        );
    }
}
