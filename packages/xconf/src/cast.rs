//! Casting `<arg>` text into typed argument values.

use std::str::FromStr;

use crate::error::{ConfigParserError, Result};
use crate::types::{ArgValue, TypeTag};

/// Recognize a `type` attribute value.
///
/// # Errors
/// Returns `UnsupportedType` for anything outside the nine permitted tags.
pub fn parse_type_tag(type_name: &str) -> Result<TypeTag> {
    type_name.parse()
}

/// Cast text to a typed value according to a `type` attribute.
///
/// # Arguments
/// * `text` - Raw text content of the `<arg>` element
/// * `type_name` - Value of the `type` attribute
///
/// # Errors
/// * `UnsupportedType` if `type_name` is not recognized
/// * `ValueFormat` if `text` does not parse as the requested numeric type
///
/// # Examples
/// ```
/// use xconf_parser::cast::cast_to;
/// use xconf_parser::types::ArgValue;
///
/// assert_eq!(cast_to("42", "int").unwrap(), ArgValue::Int(42));
/// assert_eq!(cast_to("TRUE", "boolean").unwrap(), ArgValue::Boolean(true));
/// assert!(cast_to("42", "Integer").is_err());
/// ```
pub fn cast_to(text: &str, type_name: &str) -> Result<ArgValue> {
    let tag = parse_type_tag(type_name)?;
    cast_to_tag(text, tag)
}

/// Cast text to a value of an already recognized tag.
///
/// # Errors
/// Returns `ValueFormat` if `text` does not parse as a numeric `tag`.
pub fn cast_to_tag(text: &str, tag: TypeTag) -> Result<ArgValue> {
    let value = match tag {
        TypeTag::String => ArgValue::String(text.to_string()),
        TypeTag::ByteArray => ArgValue::ByteArray(text.as_bytes().to_vec()),
        TypeTag::CharArray => ArgValue::CharArray(text.chars().collect()),
        TypeTag::Int => ArgValue::Int(parse_integer(text, tag)?),
        TypeTag::Short => ArgValue::Short(parse_integer(text, tag)?),
        TypeTag::Long => ArgValue::Long(parse_integer(text, tag)?),
        TypeTag::Float => ArgValue::Float(parse_float(text, tag)?),
        TypeTag::Double => ArgValue::Double(parse_float(text, tag)?),
        TypeTag::Boolean => ArgValue::Boolean(text.eq_ignore_ascii_case("true")),
    };
    Ok(value)
}

fn format_error(text: &str, tag: TypeTag, reason: impl ToString) -> ConfigParserError {
    ConfigParserError::ValueFormat {
        value: text.to_string(),
        type_tag: tag,
        reason: reason.to_string(),
    }
}

/// Integers take an optional sign and decimal digits, nothing else.
fn parse_integer<T>(text: &str, tag: TypeTag) -> Result<T>
where
    T: FromStr,
    T::Err: ToString,
{
    text.parse::<T>().map_err(|e| format_error(text, tag, e))
}

/// Floating point text may carry surrounding whitespace, a single
/// `f`/`F`/`d`/`D` suffix, or the words `NaN` and `Infinity`. Hexadecimal
/// literals such as `0x1.8p1` need the binary exponent.
fn parse_float<T>(text: &str, tag: TypeTag) -> Result<T>
where
    T: FromStr,
    T::Err: ToString,
{
    let trimmed = text.trim();
    let (sign, body) = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => (&trimmed[..1], rest),
        None => ("", trimmed),
    };

    let normalized = match body {
        "NaN" => "NaN".to_string(),
        "Infinity" => format!("{sign}inf"),
        _ => {
            let digits = body.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(body);
            if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
                let value = parse_hex_float(hex)
                    .ok_or_else(|| format_error(text, tag, "invalid hexadecimal float literal"))?;
                // `{:e}` prints the shortest text that reads back as the same f64.
                return format!("{sign}{value:e}")
                    .parse::<T>()
                    .map_err(|e| format_error(text, tag, e));
            }
            // Rust also accepts "inf" and "nan"; those are not valid here.
            let has_letters = digits
                .chars()
                .any(|c| c.is_alphabetic() && c != 'e' && c != 'E');
            if digits.is_empty() || has_letters {
                return Err(format_error(text, tag, "invalid float literal"));
            }
            format!("{sign}{digits}")
        }
    };

    normalized.parse::<T>().map_err(|e| format_error(text, tag, e))
}

/// Parse the part of a hexadecimal float after `0x`: hex digits with an
/// optional point, then `p` and a signed decimal power of two.
///
/// Up to 16 significant hex digits are kept; further digits only shift
/// the exponent.
fn parse_hex_float(hex: &str) -> Option<f64> {
    let (mantissa, exponent) = hex.split_once(['p', 'P'])?;
    let exponent: i32 = exponent.parse().ok()?;
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut bits: u64 = 0;
    let mut scale: i32 = 0;
    let digits = int_part
        .chars()
        .map(|c| (c, false))
        .chain(frac_part.chars().map(|c| (c, true)));
    for (c, fractional) in digits {
        let digit = c.to_digit(16)?;
        if bits >> 60 == 0 {
            bits = (bits << 4) | u64::from(digit);
            if fractional {
                scale -= 4;
            }
        } else if !fractional {
            scale += 4;
        }
    }

    if bits == 0 {
        return Some(0.0);
    }
    Some(bits as f64 * 2f64.powi(exponent.saturating_add(scale)))
}
