//! Money calculation utilities using rust_decimal for precision
//!
//! Totals are exact decimal sums; rounding only happens for display.

use rust_decimal::Decimal;

use crate::error::{DomainError, DomainResult};

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: u32 = 9999;

/// Validate a requested line quantity
///
/// Non-positive quantities are rejected, never clamped.
pub fn validate_quantity(quantity: i64) -> DomainResult<u32> {
    if quantity <= 0 {
        return Err(DomainError::validation(
            "cantidad",
            format!("quantity must be positive, got {quantity}"),
        ));
    }
    if quantity > i64::from(MAX_QUANTITY) {
        return Err(DomainError::validation(
            "cantidad",
            format!("quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"),
        ));
    }
    Ok(quantity as u32)
}

/// Line total: unit_price * quantity
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price * Decimal::from(quantity)
}

/// Order total over (unit_price, quantity) pairs
pub fn order_total<I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = (Decimal, u32)>,
{
    lines
        .into_iter()
        .map(|(price, quantity)| line_total(price, quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn quantity_rules() {
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(10_000).is_err());
        assert_eq!(validate_quantity(3).unwrap(), 3);
    }

    #[test]
    fn decimal_sum_is_exact() {
        // 0.1 * 3 + 0.2 would drift with f64
        let total = order_total([(d("0.1"), 3), (d("0.2"), 1)]);
        assert_eq!(total, d("0.5"));
        assert_eq!(order_total(std::iter::empty()), Decimal::ZERO);
    }
}
