//! Seams between the input rules and the code around them.
//!
//! - [`NumberConverter`] is the string-to-number utility consulted for
//!   numeric inputs. Swap it to change locale handling or to plug in a
//!   stricter parser.
//! - [`ValueHolder`] is the caller-owned state a controlled input reads its
//!   value from and writes emissions back to.

use std::sync::OnceLock;

use tools::{NumberLocale, format_number_in, parse_number};

use crate::value::InputValue;

/// Converts a non-empty raw string typed into a numeric input.
///
/// Returning `None` means the input was rejected; the control then reports
/// an absent value. Implementations must never return NaN or an infinity.
pub trait NumberConverter {
    fn convert(&self, raw: &str) -> Option<f64>;

    /// Text for `value` that [`NumberConverter::convert`] reads back as
    /// `value`. Used as the editable text of a numeric field.
    fn format(&self, value: f64) -> String {
        tools::format_number(value)
    }
}

impl<F> NumberConverter for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn convert(&self, raw: &str) -> Option<f64> {
        self(raw).filter(|n| n.is_finite())
    }
}

/// Default converter: locale-aware parsing via [`tools::parse_number`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocaleNumberConverter {
    locale: NumberLocale,
}

impl LocaleNumberConverter {
    pub const fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    /// Use the separators of the process locale (`LC_ALL`, `LC_NUMERIC`, `LANG`).
    ///
    /// The environment is read once per process.
    pub fn system() -> Self {
        static SYSTEM_LOCALE: OnceLock<NumberLocale> = OnceLock::new();
        Self::new(*SYSTEM_LOCALE.get_or_init(NumberLocale::from_env))
    }

    pub fn locale(&self) -> NumberLocale {
        self.locale
    }
}

impl NumberConverter for LocaleNumberConverter {
    fn convert(&self, raw: &str) -> Option<f64> {
        match parse_number(raw, &self.locale) {
            Ok(n) => Some(n),
            Err(err) => {
                log::debug!(target: "input.number", "{err}");
                None
            }
        }
    }

    fn format(&self, value: f64) -> String {
        format_number_in(value, &self.locale)
    }
}

/// Caller-owned holder of a single input's value.
pub trait ValueHolder {
    fn value(&self) -> Option<&InputValue>;

    fn set_value(&mut self, value: Option<InputValue>);
}

impl ValueHolder for Option<InputValue> {
    #[inline]
    fn value(&self) -> Option<&InputValue> {
        self.as_ref()
    }

    #[inline]
    fn set_value(&mut self, value: Option<InputValue>) {
        *self = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_converter_rejects_garbage() {
        let en = LocaleNumberConverter::new(NumberLocale::EN_US);
        assert_eq!(en.convert("1,000.5"), Some(1000.5));
        assert_eq!(en.convert("twelve"), None);

        let de = LocaleNumberConverter::new(NumberLocale::DE_DE);
        assert_eq!(de.convert("1.000,5"), Some(1000.5));
    }

    #[test]
    fn locale_converter_formats_what_it_parses() {
        let de = LocaleNumberConverter::new(NumberLocale::DE_DE);
        assert_eq!(de.format(1.5), "1,5");
        assert_eq!(de.convert(&de.format(1.5)), Some(1.5));

        let closure = |raw: &str| raw.parse::<f64>().ok();
        assert_eq!(closure.format(1.5), "1.5");
    }

    #[test]
    fn closures_are_converters_and_cannot_leak_nan() {
        let always_nan = |_: &str| Some(f64::NAN);
        assert_eq!(always_nan.convert("1"), None);

        let hex = |raw: &str| i64::from_str_radix(raw, 16).ok().map(|n| n as f64);
        assert_eq!(hex.convert("ff"), Some(255.0));
    }

    #[test]
    fn option_is_a_value_holder() {
        let mut holder: Option<InputValue> = None;
        holder.set_value(InputValue::text("x"));
        assert_eq!(holder.value(), Some(&InputValue::Text("x".into())));
        holder.set_value(None);
        assert!(holder.value().is_none());
    }
}
