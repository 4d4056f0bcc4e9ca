//! # Money Module
//!
//! Provides the `Money` type for product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are fixed-point decimals with 2 fractional digits              │
//! │                                                                         │
//! │  Form input "15,90"  ──parse──►  Money(1590)  ──►  price column 1590   │
//! │                                                                         │
//! │  Floating point never touches a stored price. The only float in this   │
//! │  module is the derived profit margin percentage.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use loja_core::money::Money;
//!
//! let price: Money = "15,90".parse().unwrap();
//! assert_eq!(price.cents(), 1590);
//! assert_eq!(price.to_string(), "R$ 15,90");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest unit of the real).
///
/// - **i64 (signed)**: differences between prices can be negative
/// - **Single field tuple struct**: serializes as the bare cent count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole reais portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
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
}

// =============================================================================
// Profit Margin
// =============================================================================

/// Profit margin of `sale_price` over `cost_price`, in percent.
///
/// ```text
/// margin = (sale - cost) / cost × 100      when cost > 0
/// margin = 0                               otherwise
/// ```
///
/// A zero or negative cost never divides.
///
/// ## Example
/// ```rust
/// use loja_core::money::{profit_margin, Money};
///
/// let margin = profit_margin(Money::from_cents(1000), Money::from_cents(1500));
/// assert_eq!(margin, 50.0);
///
/// assert_eq!(profit_margin(Money::zero(), Money::from_cents(1500)), 0.0);
/// ```
pub fn profit_margin(cost_price: Money, sale_price: Money) -> f64 {
    if !cost_price.is_positive() {
        return 0.0;
    }

    let gain = sale_price - cost_price;
    gain.cents() as f64 / cost_price.cents() as f64 * 100.0
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal price as typed into a form.
///
/// ## Accepted Input
/// ```text
/// "15"      → 1500
/// "15.5"    → 1550
/// "15,50"   → 1550     (comma is the Brazilian decimal separator)
/// "-3.25"   → -325
/// " 7.00 "  → 700      (surrounding whitespace ignored)
/// ```
///
/// Anything else, including a third fractional digit, is rejected with
/// `ValidationError::InvalidFormat` on the `price` field.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::required("price"));
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, fraction) = match unsigned.split_once(['.', ',']) {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "price",
                "must be a decimal number",
            ));
        }

        let fraction_cents = match fraction {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 2 || !f.chars().all(|c| c.is_ascii_digit()) => {
                return Err(ValidationError::invalid_format(
                    "price",
                    "must have one or two decimal places",
                ));
            }
            Some(f) if f.len() == 1 => f.parse::<i64>().unwrap_or(0) * 10,
            Some(f) => f.parse::<i64>().unwrap_or(0),
        };

        let cents = whole
            .parse::<i64>()
            .ok()
            .and_then(|w| w.checked_mul(100))
            .and_then(|w| w.checked_add(fraction_cents))
            .ok_or_else(|| ValidationError::invalid_format("price", "value is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the value the way the store shows prices: `R$ 15,90`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            self.reais().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.reais(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "R$ 10,99");
        assert_eq!(Money::from_cents(500).to_string(), "R$ 5,00");
        assert_eq!(Money::from_cents(-550).to_string(), "-R$ 5,50");
        assert_eq!(Money::zero().to_string(), "R$ 0,00");
    }

    #[test]
    fn test_parse_accepts_both_separators() {
        assert_eq!("15".parse::<Money>().unwrap().cents(), 1500);
        assert_eq!("15.5".parse::<Money>().unwrap().cents(), 1550);
        assert_eq!("15,50".parse::<Money>().unwrap().cents(), 1550);
        assert_eq!("0.07".parse::<Money>().unwrap().cents(), 7);
        assert_eq!("-3.25".parse::<Money>().unwrap().cents(), -325);
        assert_eq!(" 7.00 ".parse::<Money>().unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["abc", "1.234", "15.", ".50", "1.2.3", "1,2,3", "R$ 10", "--1"] {
            assert!(
                matches!(bad.parse::<Money>(), Err(ValidationError::InvalidFormat { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_profit_margin() {
        let cost = Money::from_cents(1000);
        let sale = Money::from_cents(1500);
        assert_eq!(profit_margin(cost, sale), 50.0);

        // Selling below cost gives a negative margin
        let below = profit_margin(sale, cost);
        assert!((below + 33.333).abs() < 0.001);
    }

    #[test]
    fn test_profit_margin_zero_cost_does_not_divide() {
        assert_eq!(profit_margin(Money::zero(), Money::from_cents(1500)), 0.0);
        assert_eq!(profit_margin(Money::from_cents(-100), Money::from_cents(1500)), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((b - a).cents(), -500);
        assert!((b - a).is_negative());
    }
}
