//! Parsers for individual CSV cells.

use crate::utils::time_utils::is_valid_budget_year;

const MONTH_CODES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Parses a money cell such as `$1,234.50`.
///
/// `$` and `,` are ignored and the leading numeric part is read, so `12.5 USD`
/// parses as 12.5. Empty, non-numeric and negative values are rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    let value = leading_number(cleaned)?.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        // normalizes -0
        Some(value + 0.0)
    } else {
        None
    }
}

/// Longest prefix of `s` shaped like a decimal number with optional exponent.
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    Some(&s[..end])
}

/// Three-letter month code (`jan`..`dec`, any case) to 1..=12.
pub fn parse_month_code(raw: &str) -> Option<i32> {
    let code = raw.trim().to_ascii_lowercase();
    MONTH_CODES
        .iter()
        .position(|m| *m == code)
        .map(|i| i as i32 + 1)
}

/// Four-digit year inside the supported budget range.
pub fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i32>().ok().filter(|y| is_valid_budget_year(*y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50"), Some(12.5));
        assert_eq!(parse_amount(" $1,234.56 "), Some(1234.56));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("-0"), Some(0.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("5."), Some(5.0));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("12.5 USD"), Some(12.5));
    }

    #[test]
    fn test_parse_amount_rejects_invalid() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_parse_month_code() {
        assert_eq!(parse_month_code("jan"), Some(1));
        assert_eq!(parse_month_code(" DEC "), Some(12));
        assert_eq!(parse_month_code("Sep"), Some(9));
        assert_eq!(parse_month_code("sept"), None);
        assert_eq!(parse_month_code("1"), None);
        assert_eq!(parse_month_code(""), None);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2025"), Some(2025));
        assert_eq!(parse_year(" 2000 "), Some(2000));
        assert_eq!(parse_year("2100"), Some(2100));
        assert_eq!(parse_year("1999"), None);
        assert_eq!(parse_year("2101"), None);
        assert_eq!(parse_year("25"), None);
        assert_eq!(parse_year("20255"), None);
        assert_eq!(parse_year("+202"), None);
    }
}
