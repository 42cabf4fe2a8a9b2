//! Number formatting for display

/// Maximum fraction digits kept when formatting
const MAX_FRACTION_DIGITS: usize = 3;

/// Format with en-US thousands separators and at most three decimals.
///
/// Trailing zeros in the fraction are dropped, so `212.5` stays `212.5` and
/// `4397073.0` becomes `4,397,073`. Non-finite input renders as `-`.
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    // Rounding can turn a tiny negative into zero; never print "-0"
    if value.is_sign_negative() && (int_part.bytes().any(|b| b != b'0') || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1000.0), "1,000");
        assert_eq!(thousands(4397073.0), "4,397,073");
        assert_eq!(thousands(47564296.0), "47,564,296");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(thousands(212.5), "212.5");
        assert_eq!(thousands(12245.9), "12,245.9");
        assert_eq!(thousands(0.1234), "0.123");
        assert_eq!(thousands(1.9999), "2");
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert_eq!(thousands(-1234.5), "-1,234.5");
        assert_eq!(thousands(-0.0001), "0");
        assert_eq!(thousands(f64::NAN), "-");
        assert_eq!(thousands(f64::INFINITY), "-");
    }
}
