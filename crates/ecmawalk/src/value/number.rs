//! Numeric conversions between numbers, strings and 32-bit integers
//!
//! These follow the ECMAScript abstract operations of the same names
//! (Number::toString, StringToNumber, StringToBigInt, ToInt32, ToUint32).

/// Format a number the way `String(n)` does.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e6"
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => (scientific.as_str(), "0"),
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let e = point - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        if k == 1 {
            format!("{}e{}{}", digits, e_sign, e.abs())
        } else {
            let (first, rest) = digits.split_at(1);
            format!("{}.{}e{}{}", first, rest, e_sign, e.abs())
        }
    };

    format!("{}{}", sign, body)
}

/// WhiteSpace and LineTerminator code points. Narrower than
/// `char::is_whitespace`, which also accepts U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{b}'
            | '\u{c}'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn trim_js_whitespace(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// Split a `0x`/`0o`/`0b` prefix off, returning the radix and the digits.
fn split_radix_prefix(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// Check the StrDecimalLiteral grammar: sign? digits (. digits)? (e sign? digits)?
fn is_decimal_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let bytes = body.as_bytes();
    let mut i = 0;

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Convert a string to a number; malformed input yields NaN.
pub fn string_to_number(s: &str) -> f64 {
    let t = trim_js_whitespace(s);
    if t.is_empty() {
        return 0.0;
    }

    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some((radix, digits)) = split_radix_prefix(t) {
        if digits.is_empty() {
            return f64::NAN;
        }
        let mut acc = 0.0_f64;
        for c in digits.chars() {
            match c.to_digit(radix) {
                Some(d) => acc = acc * f64::from(radix) + f64::from(d),
                None => return f64::NAN,
            }
        }
        return acc;
    }

    if is_decimal_literal(t) {
        t.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Convert a string to a BigInt; `None` when the text is not an integer
/// literal or does not fit in 128 bits.
pub fn string_to_bigint(s: &str) -> Option<i128> {
    let t = trim_js_whitespace(s);
    if t.is_empty() {
        return Some(0);
    }

    if let Some((radix, digits)) = split_radix_prefix(t) {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return i128::from_str_radix(digits, radix).ok();
    }

    let unsigned = t.strip_prefix(['+', '-']).unwrap_or(t);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    t.parse::<i128>().ok()
}

/// ToInt32: wrap a number into the signed 32-bit range.
pub fn to_int32(n: f64) -> i32 {
    to_uint32(n) as i32
}

/// ToUint32: wrap a number into the unsigned 32-bit range.
pub fn to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(4_294_967_296.0) as u32
}

/// 2^127 as an exact double.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Compare a BigInt with a number exactly; `None` when the number is NaN.
pub fn compare_bigint_number(b: i128, n: f64) -> Option<std::cmp::Ordering> {
    use std::cmp::Ordering;

    if n.is_nan() {
        return None;
    }
    if n == f64::INFINITY {
        return Some(Ordering::Less);
    }
    if n == f64::NEG_INFINITY {
        return Some(Ordering::Greater);
    }

    let whole = n.trunc();
    // i128 is [-2^127, 2^127); inside that range the cast below is exact
    if whole >= I128_BOUND {
        return Some(Ordering::Less);
    }
    if whole < -I128_BOUND {
        return Some(Ordering::Greater);
    }

    match b.cmp(&(whole as i128)) {
        Ordering::Equal if n > whole => Some(Ordering::Less),
        Ordering::Equal if n < whole => Some(Ordering::Greater),
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_string_integers() {
        assert_eq!(number_to_string(5.0), "5");
        assert_eq!(number_to_string(-42.0), "-42");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
    }

    #[test]
    fn test_number_to_string_fractions() {
        assert_eq!(number_to_string(0.5), "0.5");
        assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_string(123.456), "123.456");
        assert_eq!(number_to_string(0.000001), "0.000001");
    }

    #[test]
    fn test_number_to_string_exponent_forms() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e300), "1.5e+300");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_number_to_string_special() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_string_to_number() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("   "), 0.0);
        assert_eq!(string_to_number(" 42 "), 42.0);
        assert_eq!(string_to_number("-1.5e3"), -1500.0);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("5."), 5.0);
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert_eq!(string_to_number("0o17"), 15.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_string_to_number_trims_only_js_whitespace() {
        assert_eq!(string_to_number("\u{a0}\t1\u{2028}"), 1.0);
        assert_eq!(string_to_number("\u{feff}\u{3000}2\r\n"), 2.0);
        // NEL is Unicode whitespace but not JS whitespace
        assert!(string_to_number("\u{85}1").is_nan());
        assert!(string_to_number("1\u{85}").is_nan());
        assert_eq!(string_to_bigint("\u{85}1"), None);
        assert_eq!(string_to_bigint("\u{2029}1\u{b}"), Some(1));
    }

    #[test]
    fn test_string_to_number_rejects_non_literals() {
        for text in ["abc", "1e", "inf", "NaN", "1_000", "0x", "-0x10", "1 2", "."] {
            assert!(string_to_number(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn test_string_to_bigint() {
        assert_eq!(string_to_bigint("123"), Some(123));
        assert_eq!(string_to_bigint("-7"), Some(-7));
        assert_eq!(string_to_bigint(""), Some(0));
        assert_eq!(string_to_bigint("0x10"), Some(16));
        assert_eq!(string_to_bigint("1.5"), None);
        assert_eq!(string_to_bigint("1e3"), None);
        assert_eq!(string_to_bigint("abc"), None);
    }

    #[test]
    fn test_to_int32_wraps() {
        assert_eq!(to_int32(1.9), 1);
        assert_eq!(to_int32(-1.9), -1);
        assert_eq!(to_int32(4_294_967_296.0), 0);
        assert_eq!(to_int32(2_147_483_648.0), -2_147_483_648);
        assert_eq!(to_int32(f64::NAN), 0);
        assert_eq!(to_uint32(-1.0), 4_294_967_295);
    }

    #[test]
    fn test_compare_bigint_number() {
        use std::cmp::Ordering;
        assert_eq!(compare_bigint_number(1, 1.5), Some(Ordering::Less));
        assert_eq!(compare_bigint_number(2, 1.5), Some(Ordering::Greater));
        assert_eq!(compare_bigint_number(2, 2.0), Some(Ordering::Equal));
        assert_eq!(compare_bigint_number(-2, -1.5), Some(Ordering::Less));
        assert_eq!(compare_bigint_number(0, f64::NAN), None);
        assert_eq!(compare_bigint_number(i128::MAX, f64::INFINITY), Some(Ordering::Less));
    }

    #[test]
    fn test_compare_bigint_number_near_i128_bounds() {
        use std::cmp::Ordering;
        assert_eq!(compare_bigint_number(i128::MAX, 1.7e38), Some(Ordering::Greater));
        // The exact integer value of the double 1.7e38
        let exact = 169_999_999_999_999_998_061_923_293_023_115_935_744_i128;
        assert_eq!(exact as f64, 1.7e38);
        assert_eq!(compare_bigint_number(exact, 1.7e38), Some(Ordering::Equal));
        assert_eq!(compare_bigint_number(exact - 1, 1.7e38), Some(Ordering::Less));
        assert_eq!(compare_bigint_number(-exact, -1.7e38), Some(Ordering::Equal));
        assert_eq!(compare_bigint_number(i128::MIN, -I128_BOUND), Some(Ordering::Equal));
        assert_eq!(compare_bigint_number(i128::MAX, I128_BOUND), Some(Ordering::Less));
        assert_eq!(compare_bigint_number(i128::MIN, -1e39), Some(Ordering::Greater));
    }
}
