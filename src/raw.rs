//! Raw user input as it arrives from a form field or a CSV cell. A value is
//! either a genuine number or free text, and the engine only ever looks at it
//! through two coercions: base-10 integer parsing and numeric conversion.

use std::str::FromStr;

/// Numbers at or above this magnitude print in exponential form.
const EXPONENTIAL_ABOVE: f64 = 1e21;
/// Non-zero numbers below this magnitude print in exponential form.
const EXPONENTIAL_BELOW: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Base-10 integer parse, truncating any fraction. Numbers are parsed
    /// from their shortest textual form, so `1e21` reads as `1`.
    pub fn integer(&self) -> Option<i128> {
        match self {
            Self::Text(text) => parse_int(text),
            Self::Number(number) => number_to_integer(*number),
        }
    }

    /// Numeric conversion. Unparseable text is NaN, blank text is zero.
    pub fn number(&self) -> f64 {
        match self {
            Self::Text(text) => to_number(text),
            Self::Number(number) => *number,
        }
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for RawValue {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<i32> for RawValue {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

fn number_to_integer(number: f64) -> Option<i128> {
    if !number.is_finite() {
        return None;
    }

    let magnitude = number.abs();
    if magnitude >= EXPONENTIAL_ABOVE
        || (magnitude != 0.0 && magnitude < EXPONENTIAL_BELOW)
    {
        // only the digits before the mantissa's dot survive, e.g. "5e-7" => 5
        return parse_int(&format!("{:e}", number));
    }

    // below the exponential range every f64 fits an i128 exactly
    Some(number.trunc() as i128)
}

/// Reads an optionally signed run of decimal digits after leading
/// whitespace. Anything after the digits is ignored.
///
/// ```rust
/// assert_eq!(parse_int("  -12.9kg"), Some(-12));
/// assert_eq!(parse_int("kg12"), None);
/// ```
pub fn parse_int(input: &str) -> Option<i128> {
    let input = input.trim_start();
    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let digits: Vec<i128> = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|digit| i128::from(digit - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.into_iter().fold(0_i128, |acc, digit| {
        acc.saturating_mul(10).saturating_add(digit)
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Converts the whole (trimmed) text into a number, or NaN if any part of it
/// is not numeric.
pub fn to_number(input: &str) -> f64 {
    let input = input.trim();
    if input.is_empty() {
        return 0.0;
    }

    match input {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => (),
    }

    let radix = match input.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&input[2..], radix);
    }

    // f64::from_str also knows "inf" and "nan" which are not numbers here
    let is_decimal_literal = input.chars().all(|c| {
        c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
    });
    if !is_decimal_literal {
        return f64::NAN;
    }

    f64::from_str(input).unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|digit| acc * f64::from(radix) + f64::from(digit))
        })
        .unwrap_or(f64::NAN)
}
