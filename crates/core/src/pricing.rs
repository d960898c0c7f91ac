//! Money and quantity rules shared by the catalog, cart and checkout.

use rust_decimal::Decimal;

use crate::error::CoreError;
use crate::types::Money;

/// Fractional digits stored for every money column.
pub const MONEY_SCALE: u32 = 2;

/// Largest value a NUMERIC(6,2) price column holds (9999.99).
pub const MAX_PRICE: Decimal = Decimal::from_parts(999_999, 0, 0, false, MONEY_SCALE);

/// Largest value the NUMERIC(10,2) order total column holds.
pub const MAX_ORDER_TOTAL: Decimal =
    Decimal::from_parts(1_410_065_407, 2, 0, false, MONEY_SCALE);

/// Validate a catalog or unit price and normalize it to two fractional digits.
pub fn normalize_price(price: Money) -> Result<Money, CoreError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(CoreError::Validation(format!(
            "Price must not be negative, got {price}"
        )));
    }
    if price.normalize().scale() > MONEY_SCALE {
        return Err(CoreError::Validation(format!(
            "Price must have at most {MONEY_SCALE} decimal places, got {price}"
        )));
    }
    if price > MAX_PRICE {
        return Err(CoreError::Validation(format!(
            "Price must not exceed {MAX_PRICE}, got {price}"
        )));
    }

    let mut normalized = price.abs();
    normalized.rescale(MONEY_SCALE);
    Ok(normalized)
}

/// Validate a cart quantity.
pub fn validate_quantity(quantity: i16) -> Result<(), CoreError> {
    if quantity < 1 {
        return Err(CoreError::Validation(format!(
            "Quantity must be at least 1, got {quantity}"
        )));
    }
    Ok(())
}

/// Derive the price of a cart line from its quantity and unit price.
///
/// The result must still fit the line price column.
pub fn line_price(quantity: i16, unit_price: Money) -> Result<Money, CoreError> {
    validate_quantity(quantity)?;
    let price = Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or_else(|| CoreError::Validation("Line price overflow".into()))?;

    if price > MAX_PRICE {
        return Err(CoreError::Validation(format!(
            "Line price {price} exceeds the maximum of {MAX_PRICE}; reduce the quantity"
        )));
    }

    let mut price = price;
    price.rescale(MONEY_SCALE);
    Ok(price)
}
