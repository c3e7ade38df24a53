// src/products/validators.rs

use super::models::{Category, ProductDraft, ProductForm};
use crate::common::ValidationResult;

pub const NAME_MIN_CHARS: usize = 2;
pub const DESCRIPTION_MIN_CHARS: usize = 5;

pub const NAME_REQUIRED: &str = "اسم المنتج مطلوب.";
pub const NAME_TOO_SHORT: &str = "اسم المنتج يجب أن يكون 2 أحرف على الأقل.";
pub const DESCRIPTION_REQUIRED: &str = "الوصف مطلوب.";
pub const DESCRIPTION_TOO_SHORT: &str = "الوصف قصير جداً.";
pub const PRICE_REQUIRED: &str = "السعر مطلوب.";
pub const PRICE_NOT_POSITIVE: &str = "السعر يجب أن يكون رقم موجب.";
pub const CATEGORY_REQUIRED: &str = "التصنيف مطلوب.";
pub const CATEGORY_INVALID: &str = "التصنيف غير صالح.";

// ============================================================================
// Field rules
// ============================================================================

/// Required text with a minimum length counted in characters, not bytes
fn check_text(
    result: &mut ValidationResult,
    field: &str,
    value: &str,
    min_chars: usize,
    required: &str,
    too_short: &str,
) {
    if value.is_empty() {
        result.add_error(field, required);
    } else if value.chars().count() < min_chars {
        result.add_error(field, too_short);
    }
}

/// Parses a non-negative, finite decimal price. `raw` must already be trimmed.
pub fn parse_price(raw: &str) -> Option<f64> {
    // f64::from_str also takes "inf" and "NaN"; only digits, sign, dot and
    // exponent are accepted here.
    let plain = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !plain || !raw.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    raw.parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        // "-0" parses to negative zero
        .map(|price| price + 0.0)
}

/// Records the price error, if any, and returns the parsed price
fn check_price(result: &mut ValidationResult, raw: &str) -> Option<f64> {
    if raw.is_empty() {
        result.add_error("price", PRICE_REQUIRED);
        return None;
    }
    let price = parse_price(raw);
    if price.is_none() {
        result.add_error("price", PRICE_NOT_POSITIVE);
    }
    price
}

fn check_category(result: &mut ValidationResult, raw: &str) -> Option<Category> {
    if raw.is_empty() {
        result.add_error("category", CATEGORY_REQUIRED);
        return None;
    }
    let category = raw.parse::<Category>().ok();
    if category.is_none() {
        result.add_error("category", CATEGORY_INVALID);
    }
    category
}

// ============================================================================
// Product form validator
// ============================================================================

/// Checks every field independently and, when all of them pass, builds the
/// trimmed draft. Errors are collected, never short-circuited.
pub fn validate_submission(form: &ProductForm) -> Result<ProductDraft, ValidationResult> {
    let mut result = ValidationResult::new();

    let name = form.name().trim();
    check_text(
        &mut result,
        "name",
        name,
        NAME_MIN_CHARS,
        NAME_REQUIRED,
        NAME_TOO_SHORT,
    );

    let description = form.description().trim();
    check_text(
        &mut result,
        "description",
        description,
        DESCRIPTION_MIN_CHARS,
        DESCRIPTION_REQUIRED,
        DESCRIPTION_TOO_SHORT,
    );

    let price = check_price(&mut result, form.price().trim());
    let category = check_category(&mut result, form.category().trim());

    match (price, category) {
        (Some(price), Some(category)) if result.is_valid() => Ok(ProductDraft {
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
        }),
        _ => Err(result),
    }
}
