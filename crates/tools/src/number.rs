//! String <-> number conversion for numeric form fields.
//!
//! Parsing is locale-aware: group separators are dropped and the locale's
//! decimal separator is read as the decimal point. Formatting follows the
//! `Number.prototype.toString()` rules a web page would display.

use std::fmt;

use crate::locale::NumberLocale;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseNumberError {
    /// Nothing but whitespace.
    Empty,
    /// Not a decimal literal once separators were normalized.
    Invalid(String),
    /// Overflowed to an infinity.
    NonFinite,
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseNumberError::Empty => write!(f, "empty numeric input"),
            ParseNumberError::Invalid(raw) => write!(f, "invalid numeric input {raw:?}"),
            ParseNumberError::NonFinite => write!(f, "numeric input is out of range"),
        }
    }
}

impl std::error::Error for ParseNumberError {}

/// Parse a user-typed number using the separators of `locale`.
///
/// Accepts an optional sign, digits with at most one decimal separator and
/// an optional exponent (`1,5e3` in a comma-decimal locale). `NaN` and
/// `Infinity` spellings are rejected.
pub fn parse_number(raw: &str, locale: &NumberLocale) -> Result<f64, ParseNumberError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let mut normalized = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        if ch == locale.decimal {
            normalized.push('.');
        } else if locale.is_group(ch) {
            continue;
        } else {
            normalized.push(ch);
        }
    }

    if !is_decimal_literal(&normalized) {
        return Err(ParseNumberError::Invalid(raw.to_string()));
    }

    let value: f64 = normalized
        .parse()
        .map_err(|_| ParseNumberError::Invalid(raw.to_string()))?;

    if !value.is_finite() {
        return Err(ParseNumberError::NonFinite);
    }
    Ok(value)
}

/// Format a number the way a browser stringifies it.
///
/// `42.0` -> `"42"`, `-0.0` -> `"0"`, `1e21` -> `"1e+21"`, `1.5e-7` -> `"1.5e-7"`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }

    format!("{value}")
}

/// [`format_number`] with the decimal point of `locale`, so the text parses
/// back to `value` with [`parse_number`] in the same locale. No grouping.
///
/// ```
/// use tools::{NumberLocale, format_number_in};
///
/// assert_eq!(format_number_in(1.5, &NumberLocale::DE_DE), "1,5");
/// assert_eq!(format_number_in(1234.5, &NumberLocale::EN_US), "1234.5");
/// ```
pub fn format_number_in(value: f64, locale: &NumberLocale) -> String {
    let formatted = format_number(value);
    if locale.decimal == '.' {
        return formatted;
    }
    formatted.replace('.', locale.decimal.encode_utf8(&mut [0; 4]))
}

fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

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

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn en(raw: &str) -> Result<f64, ParseNumberError> {
        parse_number(raw, &NumberLocale::EN_US)
    }

    #[test]
    fn parses_plain_integers_and_decimals() {
        assert_eq!(en("42"), Ok(42.0));
        assert_eq!(en("-3.5"), Ok(-3.5));
        assert_eq!(en("+7"), Ok(7.0));
        assert_eq!(en(".5"), Ok(0.5));
        assert_eq!(en("5."), Ok(5.0));
        assert_eq!(en("  12  "), Ok(12.0));
    }

    #[test]
    fn strips_group_separators() {
        assert_eq!(en("1,234,567.25"), Ok(1_234_567.25));
        assert_eq!(parse_number("1.234,5", &NumberLocale::DE_DE), Ok(1234.5));
        assert_eq!(parse_number("1 234,5", &NumberLocale::FR_FR), Ok(1234.5));
        assert_eq!(parse_number("1\u{202F}234,5", &NumberLocale::FR_FR), Ok(1234.5));
        assert_eq!(parse_number("1'234.5", &NumberLocale::DE_CH), Ok(1234.5));
    }

    #[test]
    fn accepts_exponents() {
        assert_eq!(en("1e3"), Ok(1000.0));
        assert_eq!(en("2.5E-2"), Ok(0.025));
        assert_eq!(parse_number("1,5e2", &NumberLocale::DE_DE), Ok(150.0));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(en(""), Err(ParseNumberError::Empty));
        assert_eq!(en("   "), Err(ParseNumberError::Empty));
        assert_eq!(en("abc"), Err(ParseNumberError::Invalid("abc".to_string())));
        assert!(matches!(en("1.2.3"), Err(ParseNumberError::Invalid(_))));
        assert!(matches!(en("-"), Err(ParseNumberError::Invalid(_))));
        assert!(matches!(en("1e"), Err(ParseNumberError::Invalid(_))));
        assert!(matches!(en("NaN"), Err(ParseNumberError::Invalid(_))));
        assert!(matches!(en("Infinity"), Err(ParseNumberError::Invalid(_))));
        assert!(matches!(en("inf"), Err(ParseNumberError::Invalid(_))));
    }

    #[test]
    fn overflow_is_non_finite() {
        assert_eq!(en("1e400"), Err(ParseNumberError::NonFinite));
    }

    #[test]
    fn formats_like_a_browser() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = en("12abc").unwrap_err();
        assert_eq!(err.to_string(), "invalid numeric input \"12abc\"");
    }

    #[test]
    fn locale_text_parses_back_to_the_same_number() {
        for locale in [
            NumberLocale::EN_US,
            NumberLocale::DE_DE,
            NumberLocale::FR_FR,
            NumberLocale::RU_RU,
            NumberLocale::DE_CH,
        ] {
            for value in [1.5, -0.25, 1234.5, 42.0, 1.5e-7, 2.5e22] {
                let text = format_number_in(value, &locale);
                assert_eq!(parse_number(&text, &locale), Ok(value), "{text:?} in {locale:?}");
            }
        }
        assert_eq!(format_number_in(1.5e-7, &NumberLocale::DE_DE), "1,5e-7");
    }
}
