//! VAT-inclusive pricing and GBP formatting.

use thiserror::Error;

use super::entities::Skip;

const CURRENCY_SYMBOL: &str = "£";

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Price including VAT, rounded to the nearest whole pound.
pub fn price_with_vat(skip: &Skip) -> Result<u64, PricingError> {
    gross_price(skip.price_before_vat, skip.vat)
}

pub fn gross_price(price_before_vat: f64, vat_percent: f64) -> Result<u64, PricingError> {
    if !price_before_vat.is_finite() || price_before_vat < 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "price before VAT must be a non-negative number, got {price_before_vat}"
        )));
    }
    if !vat_percent.is_finite() || vat_percent < 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "VAT rate must be a non-negative number, got {vat_percent}"
        )));
    }

    let gross = price_before_vat * (1.0 + vat_percent / 100.0);
    Ok(gross.round() as u64)
}

/// Formats an amount as whole pounds with grouped thousands, e.g. `£1,000`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{CURRENCY_SYMBOL}NaN");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}{CURRENCY_SYMBOL}∞");
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}{CURRENCY_SYMBOL}{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
