//! Request validation from the column definitions of the curtains table.

use crate::error::AppError;
use crate::model::{
    Curtain, COLOR_MAX_LEN, MATERIAL_MAX_LEN, NAME_MAX_LEN, PRICE_INTEGER_DIGITS, PRICE_SCALE,
};
use rust_decimal::Decimal;

pub struct RecordValidator;

impl RecordValidator {
    /// Validate a full record. Price must fit the column; its sign is never checked.
    pub fn validate(curtain: &Curtain) -> Result<(), AppError> {
        validate_max_length("name", Some(&curtain.name), NAME_MAX_LEN)?;
        validate_max_length("material", curtain.material.as_deref(), MATERIAL_MAX_LEN)?;
        validate_max_length("color", curtain.color.as_deref(), COLOR_MAX_LEN)?;
        validate_price(curtain.price)?;
        Ok(())
    }

    /// Validate, then pin the price to the column scale so every store returns `950.00` for `950`.
    pub fn normalize(mut curtain: Curtain) -> Result<Curtain, AppError> {
        Self::validate(&curtain)?;
        curtain.price.rescale(PRICE_SCALE);
        Ok(curtain)
    }
}

fn validate_max_length(col: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    if let Some(s) = value {
        if s.chars().count() > max {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                col, max
            )));
        }
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price.normalize().scale() > PRICE_SCALE {
        return Err(AppError::Validation(format!(
            "price must have at most {} fractional digits",
            PRICE_SCALE
        )));
    }
    let limit = Decimal::from(10i64.pow(PRICE_INTEGER_DIGITS));
    if price.abs() >= limit {
        return Err(AppError::Validation(format!(
            "price must be less than {} in absolute value",
            limit
        )));
    }
    Ok(())
}
