//! Float constant text
//!
//! `ryu` supplies the shortest round-trip digits. They are laid out with
//! positional notation for decimal exponents in `-4..16` and scientific
//! notation otherwise, with a signed exponent of at least two digits:
//! `3.0`, `0.0001`, `1e-05`, `1e+16`, `nan`, `-inf`.

/// Smallest decimal exponent printed positionally
const MIN_POSITIONAL_EXP: i32 = -4;

/// First decimal exponent printed in scientific notation
const MAX_POSITIONAL_EXP: i32 = 16;

/// Render `value` as float constant text
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}inf");
    }

    let mut buffer = ryu::Buffer::new();
    let (digits, exp) = decimal_digits(buffer.format_finite(value.abs()));
    if digits.is_empty() {
        return format!("{sign}0.0");
    }

    // Exponent of the leading digit in scientific notation
    let sci_exp = exp + digits.len() as i32 - 1;
    let body = if (MIN_POSITIONAL_EXP..MAX_POSITIONAL_EXP).contains(&sci_exp) {
        positional(&digits, sci_exp)
    } else {
        scientific(&digits, sci_exp)
    };
    format!("{sign}{body}")
}

/// Significant digits and the power of ten they are scaled by, so that
/// `text == digits * 10^exp`. Zero yields no digits.
fn decimal_digits(text: &str) -> (String, i32) {
    let (mantissa, mut exp) = match text.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (text, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    exp -= frac_part.len() as i32;

    let joined = format!("{int_part}{frac_part}");
    let trimmed = joined.trim_start_matches('0');
    let digits = trimmed.trim_end_matches('0');
    exp += (trimmed.len() - digits.len()) as i32;
    (digits.to_string(), exp)
}

fn positional(digits: &str, sci_exp: i32) -> String {
    if sci_exp < 0 {
        let zeros = "0".repeat((-sci_exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }
    let int_len = sci_exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn scientific(digits: &str, sci_exp: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let exp_sign = if sci_exp < 0 { '-' } else { '+' };
    let exp = sci_exp.unsigned_abs();
    if rest.is_empty() {
        format!("{lead}e{exp_sign}{exp:02}")
    } else {
        format!("{lead}.{rest}e{exp_sign}{exp:02}")
    }
}
