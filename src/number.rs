// 🔢 Number Rendering
// Rounding and thousands-grouped rendering shared by money and currency helpers

/// Largest decimal count we render; anything above is clamped
pub const MAX_DECIMALS: usize = 15;

/// Significant digits used when a float is interpolated into text
pub const FLOAT_PRECISION: usize = 14;

/// Round half away from zero to `places` decimals
///
/// The scaled value is first snapped to 15 significant digits so binary
/// noise does not decide the tie: `round_half_up(10.005, 2) == 10.01` even
/// though `10.005 * 100.0` is `1000.4999999999999`.
pub fn round_half_up(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    let snapped = format!("{:.14e}", scaled)
        .parse::<f64>()
        .unwrap_or(scaled);

    let rounded = snapped.round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Truncate (floor) to two decimals: `10.999 → 10.99`, `-10.991 → -11.0`
pub fn floor_cents(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

/// Render `value` with `decimals` fixed decimals, `,` thousands and `.` point
///
/// The value is rounded half away from zero first. A result that renders
/// as zero is never signed.
pub fn number_format(value: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let rounded = round_half_up(value, decimals);

    if !rounded.is_finite() {
        return float_to_string(rounded);
    }

    let fixed = format!("{:.*}", decimals, rounded.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if rounded < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Float → text with 14 significant digits, the way template output shows it
///
/// `0.1 + 0.2 → "0.3"`, `2.5 → "2.5"`, `3.0 → "3"`, `1e20 → "1.0E+20"`,
/// `0.00001 → "1.0E-5"`. Non-finite values render as `NAN`, `INF`, `-INF`.
pub fn float_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // d.ddddddddddddde±x, rounded to FLOAT_PRECISION significant digits
    let sci = format!("{:.*e}", FLOAT_PRECISION - 1, value.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    let point = exponent + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }

    if point < -3 || point > FLOAT_PRECISION as i32 {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        out.push('.');
        out.push_str(if rest.is_empty() { "0" } else { rest });
        out.push('E');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.unsigned_abs().to_string());
    } else if point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(point.unsigned_abs() as usize));
        out.push_str(digits);
    } else {
        let point = point as usize;
        if digits.len() <= point {
            out.push_str(digits);
            out.push_str(&"0".repeat(point - digits.len()));
        } else {
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }

    out
}

/// Insert `,` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_boundaries() {
        assert_eq!(round_half_up(10.005, 2), 10.01);
        assert_eq!(round_half_up(10.004, 2), 10.0);
        assert_eq!(round_half_up(-10.005, 2), -10.01);
        assert_eq!(round_half_up(1.955, 2), 1.96);
        assert_eq!(round_half_up(2.5, 0), 3.0);
    }

    #[test]
    fn test_floor_cents_truncates() {
        assert_eq!(floor_cents(10.999), 10.99);
        assert_eq!(floor_cents(10.0), 10.0);
        assert_eq!(floor_cents(-10.991), -11.0);
    }

    #[test]
    fn test_number_format_grouping() {
        assert_eq!(number_format(0.0, 2), "0.00");
        assert_eq!(number_format(999.0, 0), "999");
        assert_eq!(number_format(1000.0, 0), "1,000");
        assert_eq!(number_format(1234567.891, 2), "1,234,567.89");
        assert_eq!(number_format(-1234.5, 2), "-1,234.50");
    }

    #[test]
    fn test_number_format_rounds_to_requested_decimals() {
        assert_eq!(number_format(10.99, 0), "11");
        assert_eq!(number_format(10.99, 4), "10.9900");
    }

    #[test]
    fn test_float_to_string_fixed_notation() {
        assert_eq!(float_to_string(3.0), "3");
        assert_eq!(float_to_string(2.5), "2.5");
        assert_eq!(float_to_string(-2.5), "-2.5");
        assert_eq!(float_to_string(0.1 + 0.2), "0.3");
        assert_eq!(float_to_string(0.0001), "0.0001");
        assert_eq!(float_to_string(1234567.891), "1234567.891");
        assert_eq!(float_to_string(1e13), "10000000000000");
        assert_eq!(float_to_string(0.0), "0");
    }

    #[test]
    fn test_float_to_string_exponent_notation() {
        assert_eq!(float_to_string(1e20), "1.0E+20");
        assert_eq!(float_to_string(1e14), "1.0E+14");
        assert_eq!(float_to_string(0.00001), "1.0E-5");
        assert_eq!(float_to_string(-1.5e-7), "-1.5E-7");
        assert_eq!(float_to_string(123456789012345678.0), "1.2345678901235E+17");
    }

    #[test]
    fn test_float_to_string_non_finite() {
        assert_eq!(float_to_string(f64::NAN), "NAN");
        assert_eq!(float_to_string(f64::INFINITY), "INF");
        assert_eq!(float_to_string(f64::NEG_INFINITY), "-INF");
    }

    #[test]
    fn test_number_format_no_negative_zero() {
        assert_eq!(number_format(-0.001, 2), "0.00");
        assert_eq!(number_format(-0.0, 0), "0");
    }
}
