//! Net weight calculation and lenient numeric parsing for form input

/// Net weight from gross and tare, floored at zero
pub fn net_weight(gross: f64, tare: f64) -> f64 {
    (gross - tare).max(0.0)
}

/// Parse the leading number of a form value.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"12.5 kg"` yields `12.5`. Returns `None` when no numeric prefix exists.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let candidate: &str = {
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    };

    // Longest prefix that still parses, e.g. "1e" -> "1", "3-4" -> "3"
    (1..=candidate.len())
        .rev()
        .filter_map(|len| candidate.get(..len))
        .find_map(|prefix| prefix.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parse a weight field; blank or non-numeric input counts as zero
pub fn parse_weight(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_weight_basic() {
        assert!((net_weight(10000.0, 4000.0) - 6000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_net_weight_never_negative() {
        assert_eq!(net_weight(3000.0, 8000.0), 0.0);
        assert_eq!(net_weight(0.0, 0.0), 0.0);
        for gross in [0.0, 1.5, 250.0, 9999.99] {
            for tare in [0.0, 2.0, 250.0, 12000.0] {
                let net = net_weight(gross, tare);
                assert!(net >= 0.0);
                assert_eq!(net, (gross - tare).max(0.0));
            }
        }
    }

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number("10000"), Some(10000.0));
        assert_eq!(parse_number("  42.5"), Some(42.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_number_ignores_trailing_garbage() {
        assert_eq!(parse_number("12.5 kg"), Some(12.5));
        assert_eq!(parse_number("3-4"), Some(3.0));
        assert_eq!(parse_number("7e"), Some(7.0));
    }

    #[test]
    fn test_parse_number_rejects_non_numeric() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_weight_defaults_to_zero() {
        assert_eq!(parse_weight(""), 0.0);
        assert_eq!(parse_weight("n/a"), 0.0);
        assert_eq!(parse_weight("4000"), 4000.0);
    }
}
