//! Number formatting for table display
//!
//! Two-decimal output rounds exact halves away from zero (`2.125` gives
//! `2.13`); `{:.2}` alone would round them to even.

/// Round to cents, halves away from zero.
///
/// Only multiples of 1/8 can sit exactly on a half cent in binary, and for
/// those the scaling by 100 is exact. Everything else is already correctly
/// rounded by the formatter and is returned unchanged.
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    let on_eighth = (value * 8.0).fract() == 0.0;
    if on_eighth && scaled.fract().abs() == 0.5 {
        scaled.round() / 100.0
    } else {
        value
    }
}

/// Plain two-decimal form, e.g. `12345.60`
pub fn format_fixed(value: f64) -> String {
    format!("{:.2}", round_cents(value))
}

/// Format with two decimals and comma thousands grouping, e.g. `12,345.60`
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let fixed = format_fixed(value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" is shown as "0.00"
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}
