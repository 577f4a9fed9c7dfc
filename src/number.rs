//! Plain number conversion between hexadecimal and decimal text.
//!
//! Both directions read the longest valid numeric prefix and ignore the
//! rest, so partially typed input converts as far as it goes.

/// Hex digits kept after the point when converting a fraction.
const FRACTION_DIGITS: usize = 13;

/// Read a hexadecimal integer: optional sign, optional `0x`, then as many
/// hex digits as there are. `None` when there are no digits at all or the
/// value does not fit.
pub fn hex_to_decimal(text: &str) -> Option<i128> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let rest = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .filter(|r| r.starts_with(|c: char| c.is_ascii_hexdigit()))
        .unwrap_or(rest);

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value = i128::from_str_radix(digits, 16).ok()?;
    Some(if negative { -value } else { value })
}

/// Read a decimal number (optional sign, digits, optional fraction) and
/// write it in lowercase hexadecimal, e.g. `255` → `ff`, `0.5` → `0.8`.
pub fn decimal_to_hex(text: &str) -> Option<String> {
    let value = leading_decimal(text.trim_start())?;
    if !value.is_finite() {
        return None;
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    let whole = magnitude.trunc();
    let mut fraction = magnitude - whole;

    let mut out = String::new();
    if negative && magnitude != 0.0 {
        out.push('-');
    }
    out.push_str(&whole_to_hex(whole));

    if fraction > 0.0 {
        let mut digits = String::new();
        for _ in 0..FRACTION_DIGITS {
            fraction *= 16.0;
            let digit = fraction.trunc();
            fraction -= digit;
            digits.push(char::from_digit(digit as u32, 16)?);
            if fraction == 0.0 {
                break;
            }
        }
        let digits = digits.trim_end_matches('0');
        if !digits.is_empty() {
            out.push('.');
            out.push_str(digits);
        }
    }
    Some(out)
}

fn whole_to_hex(whole: f64) -> String {
    if whole < u128::MAX as f64 {
        return format!("{:x}", whole as u128);
    }
    // past u128: peel digits off in floating point
    let mut digits = Vec::new();
    let mut rest = whole;
    while rest >= 1.0 {
        let digit = rest % 16.0;
        digits.push(char::from_digit(digit as u32, 16).unwrap_or('0'));
        rest = (rest / 16.0).trunc();
    }
    digits.iter().rev().collect()
}

/// Longest `[+-]digits[.digits]` prefix, parsed.
fn leading_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_decimal_basic() {
        assert_eq!(hex_to_decimal("ff"), Some(255));
        assert_eq!(hex_to_decimal("FF"), Some(255));
        assert_eq!(hex_to_decimal("0x1A"), Some(26));
        assert_eq!(hex_to_decimal("  10"), Some(16));
        assert_eq!(hex_to_decimal("-ff"), Some(-255));
    }

    #[test]
    fn hex_to_decimal_reads_prefix() {
        assert_eq!(hex_to_decimal("12zz"), Some(18));
        assert_eq!(hex_to_decimal("ff.8"), Some(255));
        assert_eq!(hex_to_decimal("0x"), Some(0));
    }

    #[test]
    fn hex_to_decimal_rejects() {
        assert_eq!(hex_to_decimal(""), None);
        assert_eq!(hex_to_decimal("zz"), None);
        assert_eq!(hex_to_decimal("-"), None);
        assert_eq!(hex_to_decimal(&"f".repeat(40)), None);
    }

    #[test]
    fn decimal_to_hex_integers() {
        assert_eq!(decimal_to_hex("255").as_deref(), Some("ff"));
        assert_eq!(decimal_to_hex("0").as_deref(), Some("0"));
        assert_eq!(decimal_to_hex("-16").as_deref(), Some("-10"));
        assert_eq!(decimal_to_hex("4096abc").as_deref(), Some("1000"));
    }

    #[test]
    fn decimal_to_hex_fractions() {
        assert_eq!(decimal_to_hex("0.5").as_deref(), Some("0.8"));
        assert_eq!(decimal_to_hex("255.75").as_deref(), Some("ff.c"));
        assert_eq!(decimal_to_hex(".25").as_deref(), Some("0.4"));
        assert_eq!(decimal_to_hex("3.").as_deref(), Some("3"));
        // 0.1 does not terminate in base 16
        assert_eq!(decimal_to_hex("0.1").as_deref(), Some("0.1999999999999"));
    }

    #[test]
    fn decimal_to_hex_rejects() {
        assert_eq!(decimal_to_hex(""), None);
        assert_eq!(decimal_to_hex("abc"), None);
        assert_eq!(decimal_to_hex("-"), None);
        assert_eq!(decimal_to_hex("."), None);
    }
}
