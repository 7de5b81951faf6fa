//! Price resolution from the explicit price field and the two summa fields

use serde::{Deserialize, Serialize};

use super::weight_calculator::parse_number;

/// Which form field the resolved price came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    Explicit,
    Summa40,
    Summa30,
    Zero,
}

/// Resolve the ticket price.
///
/// Order: explicit price if non-blank, then `summa_40` if it parses to a
/// non-zero number, then `summa_30` likewise, else zero. Only one source is
/// used; the values are never summed.
pub fn resolve_price(price: &str, summa_40: &str, summa_30: &str) -> (f64, PriceSource) {
    if !price.trim().is_empty() {
        return (parse_number(price).unwrap_or(0.0), PriceSource::Explicit);
    }

    let non_zero = |raw: &str| parse_number(raw).filter(|v| *v != 0.0);

    if let Some(v) = non_zero(summa_40) {
        return (v, PriceSource::Summa40);
    }
    if let Some(v) = non_zero(summa_30) {
        return (v, PriceSource::Summa30);
    }
    (0.0, PriceSource::Zero)
}
