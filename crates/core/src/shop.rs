//! Shop-item rules.
//!
//! Validation for admin-created shop items plus the defaults applied to
//! fields the admin leaves unset.

use crate::error::CoreError;

/// Default pricing model for new items.
pub const COST_TYPE_FIXED: &str = "fixed";

/// Default USD cost for new items.
pub const DEFAULT_USD_COST: f64 = 0.0;

/// New items use randomized pricing unless the admin opts out.
pub const DEFAULT_USE_RANDOMIZED_PRICING: bool = true;

/// Validate the admin-supplied fields of a new shop item. `name`,
/// `description` and `price` are required (present and non-blank) and the
/// price must be strictly positive.
pub fn validate_new_shop_item(
    name: Option<&str>,
    description: Option<&str>,
    price: Option<f64>,
) -> Result<(), CoreError> {
    let name_ok = name.is_some_and(|n| !n.trim().is_empty());
    let description_ok = description.is_some_and(|d| !d.trim().is_empty());
    let (price_present, price_positive) = match price {
        Some(p) => (true, p > 0.0),
        None => (false, false),
    };

    if !name_ok || !description_ok || !price_present {
        return Err(CoreError::Validation(
            "Name, description, and price are required".to_string(),
        ));
    }
    if !price_positive {
        return Err(CoreError::Validation(
            "Price must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
