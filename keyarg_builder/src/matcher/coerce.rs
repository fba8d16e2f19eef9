use thiserror::Error;

use crate::model::{ParsedValue, ValueType};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CoerceError {
    #[error("a flag does not take a value")]
    UnexpectedValue,
    #[error("a value is required")]
    MissingValue,
    #[error("'{0}' cannot convert to an integer")]
    InvalidInteger(String),
}

/// Convert the (optional) value of a token into the declared type.
///
/// Value presence is checked before conversion.
/// An empty text value is accepted as the empty string.
pub(crate) fn coerce(
    value_type: ValueType,
    value: Option<&str>,
) -> Result<ParsedValue, CoerceError> {
    match (value_type, value) {
        (ValueType::Flag, Some(_)) => Err(CoerceError::UnexpectedValue),
        (ValueType::Flag, None) => Ok(ParsedValue::Flag(true)),
        (ValueType::Integer, None) | (ValueType::Text, None) => Err(CoerceError::MissingValue),
        (ValueType::Integer, Some(text)) => parse_integer(text)
            .map(ParsedValue::Integer)
            .ok_or_else(|| CoerceError::InvalidInteger(text.to_string())),
        (ValueType::Text, Some(text)) => Ok(ParsedValue::Text(text.to_string())),
    }
}

/// Parse a whole number with an optional sign and base prefix (`0x` hexadecimal, `0` octal).
///
/// Leading whitespace is skipped, but the rest of the text must be consumed entirely.
pub(crate) fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'));
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // `from_str_radix` tolerates its own sign, which must not appear after the base prefix.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).ok()
}
