//! Numeric separator conventions.
//!
//! Only the two characters that matter for parsing user-typed numbers are
//! modelled: the digit group separator and the decimal separator.

use std::env;

/// Separators used when reading a locale-formatted number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    pub group: char,
    pub decimal: char,
}

impl NumberLocale {
    /// `1,234.5`
    pub const EN_US: NumberLocale = NumberLocale {
        group: ',',
        decimal: '.',
    };
    /// `1.234,5`
    pub const DE_DE: NumberLocale = NumberLocale {
        group: '.',
        decimal: ',',
    };
    /// `1 234,5` with a narrow no-break space.
    pub const FR_FR: NumberLocale = NumberLocale {
        group: '\u{202F}',
        decimal: ',',
    };
    /// `1 234,5` with a no-break space.
    pub const RU_RU: NumberLocale = NumberLocale {
        group: '\u{00A0}',
        decimal: ',',
    };
    /// `1'234.5`
    pub const DE_CH: NumberLocale = NumberLocale {
        group: '\'',
        decimal: '.',
    };

    /// Resolve separators for a POSIX locale name or BCP 47 tag
    /// (`de_DE.UTF-8`, `fr-CA`, `pt_BR@euro`, `C`).
    ///
    /// Unknown languages fall back to [`NumberLocale::EN_US`].
    pub fn from_tag(tag: &str) -> NumberLocale {
        let tag = tag.split(['.', '@']).next().unwrap_or("").trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX") {
            return NumberLocale::EN_US;
        }

        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or("").to_ascii_lowercase();
        let region = parts.next().unwrap_or("").to_ascii_uppercase();

        match (language.as_str(), region.as_str()) {
            ("de" | "it" | "rm", "CH" | "LI") => NumberLocale::DE_CH,
            ("de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "ro" | "hr", _) => {
                NumberLocale::DE_DE
            }
            ("fr", _) => NumberLocale::FR_FR,
            (
                "ru" | "uk" | "pl" | "cs" | "sk" | "fi" | "sv" | "nb" | "nn" | "no" | "bg" | "hu"
                | "lt" | "lv" | "et",
                _,
            ) => NumberLocale::RU_RU,
            _ => NumberLocale::EN_US,
        }
    }

    /// Resolve separators from the process environment.
    ///
    /// Consults `LC_ALL`, then `LC_NUMERIC`, then `LANG`; the first non-empty
    /// variable wins.
    pub fn from_env() -> NumberLocale {
        let tag = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .into_iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty());

        match tag {
            Some(tag) => {
                let locale = NumberLocale::from_tag(&tag);
                log::debug!(target: "input.number", "number locale {tag:?} -> {locale:?}");
                locale
            }
            None => NumberLocale::EN_US,
        }
    }

    pub(crate) fn is_group(&self, ch: char) -> bool {
        if ch == self.group {
            return true;
        }
        if is_space_like(self.group) {
            return is_space_like(ch);
        }
        if is_apostrophe(self.group) {
            return is_apostrophe(ch);
        }
        false
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        NumberLocale::EN_US
    }
}

fn is_space_like(ch: char) -> bool {
    matches!(ch, ' ' | '\u{00A0}' | '\u{2009}' | '\u{202F}')
}

fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_names_map_to_presets() {
        assert_eq!(NumberLocale::from_tag("de_DE.UTF-8"), NumberLocale::DE_DE);
        assert_eq!(NumberLocale::from_tag("fr_FR.UTF-8"), NumberLocale::FR_FR);
        assert_eq!(NumberLocale::from_tag("en_GB.UTF-8"), NumberLocale::EN_US);
        assert_eq!(NumberLocale::from_tag("pt_BR@euro"), NumberLocale::DE_DE);
        assert_eq!(NumberLocale::from_tag("sv_SE"), NumberLocale::RU_RU);
    }

    #[test]
    fn bcp47_tags_and_regions() {
        assert_eq!(NumberLocale::from_tag("de-CH"), NumberLocale::DE_CH);
        assert_eq!(NumberLocale::from_tag("DE-at"), NumberLocale::DE_DE);
        assert_eq!(NumberLocale::from_tag("ja-JP"), NumberLocale::EN_US);
    }

    #[test]
    fn c_locale_and_garbage_fall_back_to_en_us() {
        assert_eq!(NumberLocale::from_tag("C"), NumberLocale::EN_US);
        assert_eq!(NumberLocale::from_tag("POSIX"), NumberLocale::EN_US);
        assert_eq!(NumberLocale::from_tag(""), NumberLocale::EN_US);
        assert_eq!(NumberLocale::from_tag("xx"), NumberLocale::EN_US);
    }

    #[test]
    fn space_groups_accept_any_space_variant() {
        let fr = NumberLocale::FR_FR;
        assert!(fr.is_group(' '));
        assert!(fr.is_group('\u{00A0}'));
        assert!(!fr.is_group(','));

        let ch = NumberLocale::DE_CH;
        assert!(ch.is_group('\u{2019}'));
        assert!(!ch.is_group(' '));
    }
}
