//! # Money Module
//!
//! Provides the `Money` type and the USD display formatter.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The studio API sends prices as decimals (750.00, 1200, 950.5).         │
//! │  Summing them as floats drifts:                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Decimals are parsed textually into cents on the way in,              │
//! │    the cart total is an exact integer sum, and only the                 │
//! │    formatter turns cents back into "$1,200.00".                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use heshima_core::money::{format_usd, Money};
//!
//! let web_design = Money::from_major_minor(1200, 0);
//! assert_eq!(format_usd(web_design), "$1,200.00");
//!
//! let parsed = Money::parse_decimal("950.5").unwrap();
//! assert_eq!(parsed.cents(), 95050);
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// Product.base_price ──► CartEntry.base_price ──► Cart::total()
///        │                                            │
///        └──► "$750.00" on the service card           └──► "Estimated total: $1,950.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use heshima_core::money::Money;
    ///
    /// let price = Money::from_cents(75000); // $750.00
    /// assert_eq!(price.dollars(), 750);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` = -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Converts an arbitrary float amount, treating NaN and infinities as zero.
    ///
    /// This is the lenient path for amounts that did not come through the
    /// decimal parser (e.g. values typed into a UI field).
    pub fn from_number_lossy(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        Money::parse_decimal(&amount.to_string()).unwrap_or_default()
    }

    /// Parses a decimal string (`"750"`, `"1200.00"`, `"-5.5"`) into cents.
    ///
    /// Digits past the second decimal place round half-up (away from zero).
    /// Returns `None` for anything that is not a plain decimal number or that
    /// overflows.
    ///
    /// ```rust
    /// use heshima_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("1199.995").unwrap().cents(), 120000);
    /// assert!(Money::parse_decimal("twelve").is_none());
    /// ```
    pub fn parse_decimal(input: &str) -> Option<Self> {
        let input = input.trim();
        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        let (major, fraction) = match unsigned.split_once('.') {
            Some((major, fraction)) => (major, fraction),
            None => (unsigned, ""),
        };

        if major.is_empty() && fraction.is_empty() {
            return None;
        }
        if !major.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let major_value: i64 = if major.is_empty() { 0 } else { major.parse().ok()? };

        let digits: Vec<i64> = fraction.bytes().map(|b| i64::from(b - b'0')).collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        let mut cents = major_value
            .checked_mul(100)?
            .checked_add(tenths * 10 + hundredths)?;
        if round_up {
            cents = cents.checked_add(1)?;
        }

        Some(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Renders the amount as a plain decimal string ("1200.00").
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// Formats an amount as US dollars with thousands separators.
///
/// ## Examples
/// ```rust
/// use heshima_core::money::{format_usd, Money};
///
/// assert_eq!(format_usd(Money::from_cents(75000)), "$750.00");
/// assert_eq!(format_usd(Money::from_cents(120000)), "$1,200.00");
/// assert_eq!(format_usd(Money::from_cents(-550)), "-$5.50");
/// ```
pub fn format_usd(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let whole = amount.dollars().unsigned_abs().to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", sign, grouped, amount.cents_part())
}

// =============================================================================
// Trait Implementations
// =============================================================================
// Arithmetic saturates at the i64 bounds: a total built from absurd API
// prices pins at the limit instead of panicking or wrapping negative.

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_usd(*self))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Serde
// =============================================================================
// On the wire money is a decimal in major units (`"basePrice": 750.00`).
// Numbers and numeric strings are both accepted; output is a decimal string
// so nothing round-trips through a float.

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a number or string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() {
            return Err(E::custom("amount must be finite"));
        }
        Money::parse_decimal(&v.to_string()).ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse_decimal(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
