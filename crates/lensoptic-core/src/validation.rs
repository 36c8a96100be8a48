//! # Validation Module
//!
//! Boundary validation for form input.
//!
//! The UI hands the engine raw strings; everything numeric is parsed and
//! checked here before any stored collection is touched. Two parsing modes
//! coexist, and the split is deliberate:
//!
//! - **Strict** (`parse_quantity`, `validate_*`): malformed input is an
//!   error. Used for fields where silently guessing would corrupt a line.
//! - **Lenient** (`parse_decimal_or_zero`, `parse_money_or_zero`): blank or
//!   malformed input counts as zero. Used for the three payment fields
//!   (percent discount, flat discount, advance), which are free-text entries
//!   that are usually left empty. A mistyped discount therefore silently
//!   becomes "no discount" - keep that behavior confined to these two
//!   helpers so it stays a single reviewable decision point.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use lensoptic_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Frame A").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    Ok(())
}

/// Validates a unit price or payment amount.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative { field: "price" });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(())
}

// =============================================================================
// Strict Parsing
// =============================================================================

/// Parses a quantity field strictly.
///
/// ## Example
/// ```rust
/// use lensoptic_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("3").unwrap(), 3);
/// assert!(parse_quantity("0").is_err());
/// assert!(parse_quantity("three").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    let quantity: u32 =
        input
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidFormat {
                field: "quantity",
                reason: "must be a whole number".to_string(),
            })?;
    validate_quantity(quantity)?;
    Ok(quantity)
}

// =============================================================================
// Lenient Parsing (parse-or-zero)
// =============================================================================

/// Parses a free-text numeric field, treating blank or malformed input as
/// zero.
///
/// ## Example
/// ```rust
/// use lensoptic_core::validation::parse_decimal_or_zero;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal_or_zero("12.5"), "12.5".parse().unwrap());
/// assert_eq!(parse_decimal_or_zero(""), Decimal::ZERO);
/// assert_eq!(parse_decimal_or_zero("abc"), Decimal::ZERO);
/// ```
pub fn parse_decimal_or_zero(input: &str) -> Decimal {
    input.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Parses a free-text currency field, treating blank or malformed input as
/// zero.
pub fn parse_money_or_zero(input: &str) -> Money {
    Money::new(parse_decimal_or_zero(input))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Frame A").is_ok());
        assert!(validate_product_name("Verres progressifs 1.67").is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_major(10)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_major(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(99).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_parse_quantity_strict() {
        assert_eq!(parse_quantity(" 2 ").unwrap(), 2);
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_parse_decimal_or_zero_lenient() {
        assert_eq!(parse_decimal_or_zero("10"), Decimal::from(10));
        assert_eq!(parse_decimal_or_zero(" 12.5 "), "12.5".parse().unwrap());

        // blank and malformed input both count as zero, not an error
        assert_eq!(parse_decimal_or_zero(""), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("  "), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("ten"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_money_or_zero_lenient() {
        assert_eq!(parse_money_or_zero("25.50"), Money::new("25.5".parse().unwrap()));
        assert_eq!(parse_money_or_zero(""), Money::zero());
        assert_eq!(parse_money_or_zero("n/a"), Money::zero());
    }
}
