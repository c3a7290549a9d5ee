//! Input Normalisation
//!
//! Text field transforms shared by the forms.

/// Uppercase an item code as the user types it.
///
/// Idempotent: feeding the output back in returns it unchanged.
pub fn uppercase_code(value: &str) -> String {
    value.to_uppercase()
}

/// Read an integer the way the browser's `parseInt(value)` does.
///
/// Leading whitespace is skipped, an optional sign is accepted, a `0x`
/// prefix switches to hexadecimal, and parsing stops at the first
/// character that is not a digit. Returns `None` where `parseInt` yields
/// `NaN` (no digits at all).
///
/// Values beyond `i64` also return `None` and go out as `null`, not as
/// the rounded float `parseInt` would produce.
pub fn parse_js_int(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let (radix, rest) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_code() {
        assert_eq!(uppercase_code("ab12"), "AB12");
        assert_eq!(uppercase_code("AB12"), "AB12");
        assert_eq!(uppercase_code(""), "");
    }

    #[test]
    fn test_uppercase_code_is_idempotent() {
        let once = uppercase_code("straße-7x");
        assert_eq!(uppercase_code(&once), once);
    }

    #[test]
    fn test_parse_js_int_plain() {
        assert_eq!(parse_js_int("5"), Some(5));
        assert_eq!(parse_js_int("  42"), Some(42));
        assert_eq!(parse_js_int("-3"), Some(-3));
        assert_eq!(parse_js_int("+8"), Some(8));
    }

    #[test]
    fn test_parse_js_int_stops_at_garbage() {
        assert_eq!(parse_js_int("12abc"), Some(12));
        assert_eq!(parse_js_int("7.9"), Some(7));
        assert_eq!(parse_js_int("0x1f"), Some(31));
    }

    #[test]
    fn test_parse_js_int_nan() {
        assert_eq!(parse_js_int(""), None);
        assert_eq!(parse_js_int("abc"), None);
        assert_eq!(parse_js_int("-"), None);
        assert_eq!(parse_js_int("0x"), None);
    }

    #[test]
    fn test_parse_js_int_out_of_range_is_none() {
        assert_eq!(parse_js_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_js_int("99999999999999999999"), None);
        assert_eq!(parse_js_int("0xffffffffffffffffff"), None);
    }
}
