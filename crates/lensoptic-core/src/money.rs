//! # Money Module
//!
//! Provides the `Money` type and the receipt pricing arithmetic.
//!
//! ## Precision Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DECIMAL MONEY                                                          │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Receipts are recomputed on every edit, so rounding inside the         │
//! │  arithmetic would compound across edits. All internal computation      │
//! │  keeps full decimal precision; rounding to two fraction digits         │
//! │  happens at display time only (Display impl, document assembly).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount Ordering
//! The percentage discount applies first, the flat discount second, and the
//! result is floored at zero:
//!
//! `total = max(subtotal × (1 − percent/100) − flat, 0)`
//!
//! The balance is NOT floored: `balance = total − advance` may go negative
//! when the client has overpaid (a credit).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::CoreResult;
use crate::types::LineItem;
use crate::validation::{validate_price, validate_quantity};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value with full decimal precision.
///
/// ## Design Decisions
/// - **Newtype over `Decimal`**: every monetary value in the system flows
///   through this type, so unit mix-ups (percent vs currency) fail to compile
/// - **Serde transparent**: persists as a plain JSON number, the shape the
///   backing files have always used
/// - **Signed**: balances may be negative (overpayment credit)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a raw decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use lensoptic_core::money::Money;
    ///
    /// let price = Money::from_major(50); // $50.00
    /// assert_eq!(price.to_string(), "$50.00");
    /// ```
    #[inline]
    pub fn from_major(major: i64) -> Self {
        Money(Decimal::from(major))
    }

    /// Returns the underlying decimal amount (full precision).
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded to two fraction digits, for presentation.
    #[inline]
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(2)
    }

    /// Zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `percent` - Discount as entered on the form (10 = 10% off)
    ///
    /// ## Example
    /// ```rust
    /// use lensoptic_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let subtotal = Money::from_major(100);
    /// let discounted = subtotal.apply_percent_discount(Decimal::from(10));
    /// assert_eq!(discounted, Money::from_major(90));
    /// ```
    pub fn apply_percent_discount(&self, percent: Decimal) -> Money {
        let factor = Decimal::ONE - percent / Decimal::ONE_HUNDRED;
        Money(self.0 * factor)
    }
}

// =============================================================================
// Pricing Functions
// =============================================================================

/// Computes a line total: `unit_price × quantity`.
///
/// Fails when `quantity < 1` or the unit price is negative. These are the
/// only two inputs a line can be malformed by; everything downstream
/// (subtotal, total, balance) is a pure fold over valid lines.
///
/// ## Example
/// ```rust
/// use lensoptic_core::money::{line_total, Money};
///
/// let total = line_total(Money::from_major(30), 2).unwrap();
/// assert_eq!(total, Money::from_major(60));
/// assert!(line_total(Money::from_major(30), 0).is_err());
/// ```
pub fn line_total(unit_price: Money, quantity: u32) -> CoreResult<Money> {
    validate_quantity(quantity)?;
    validate_price(unit_price)?;
    Ok(unit_price * quantity)
}

/// Computes the subtotal: the sum of every line's `total`.
///
/// Zero for an empty sequence.
pub fn subtotal(items: &[LineItem]) -> Money {
    items
        .iter()
        .fold(Money::zero(), |acc, item| acc + item.total)
}

/// Computes the receipt total from the subtotal and both discounts.
///
/// The percentage discount applies first, then the flat discount, and the
/// result is floored at zero so discounts can never produce a negative
/// total.
///
/// ## Example
/// ```rust
/// use lensoptic_core::money::{discounted_total, Money};
/// use rust_decimal::Decimal;
///
/// // $100, 10% off, then $5 off
/// let total = discounted_total(
///     Money::from_major(100),
///     Decimal::from(10),
///     Money::from_major(5),
/// );
/// assert_eq!(total, Money::from_major(85));
/// ```
pub fn discounted_total(
    subtotal: Money,
    discount_percent: Decimal,
    flat_discount: Money,
) -> Money {
    let after_percent = subtotal.apply_percent_discount(discount_percent);
    let total = after_percent - flat_discount;
    if total.is_negative() {
        Money::zero()
    } else {
        total
    }
}

/// Computes the balance due: `total − advance`.
///
/// Unclamped: a negative balance means the advance exceeded the total and
/// the client holds a credit.
pub fn balance_due(total: Money, advance: Money) -> Money {
    total - advance
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money rounded to two fraction digits: `$10.99`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        if rounded.is_sign_negative() {
            write!(f, "-${:.2}", -rounded)
        } else {
            write!(f, "${:.2}", rounded)
        }
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

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
