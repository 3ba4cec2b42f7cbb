//! Decimal text ⇄ numeric value conversion
//!
//! Operands live as text while they are typed and become `f64` only for the
//! duration of one calculation. Results are rounded to [`FRACTION_DIGITS`]
//! places before they are turned back into text, so `0.1 + 0.2` reads `0.3`.

/// Number of fractional digits kept in a result
pub const FRACTION_DIGITS: i32 = 8;

/// `10^FRACTION_DIGITS`
const SCALE: f64 = 1e8;

/// Parses operand text as a decimal number
///
/// Accepts an optional leading `-`, digits and at most one `.` with at least
/// one digit somewhere. Exponents, `inf` and `NaN` are rejected even though
/// `f64::from_str` would take them.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0usize;
    let mut points = 0usize;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }
    text.parse().ok()
}

/// Rounds a result to eight fractional digits, half away from zero
///
/// `f64::EPSILON` is added before scaling to pull values that sit just below
/// a half (binary representation error) onto the intended side. Only values
/// whose scaled form overflows are returned as they are.
#[must_use]
pub fn round_result(value: f64) -> f64 {
    let scaled = (value + f64::EPSILON) * SCALE;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / SCALE
}

/// Formats a value as canonical operand text
///
/// Uses the shortest text that round-trips, never an exponent. Negative zero
/// formats as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
