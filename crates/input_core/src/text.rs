//! String helpers for string-valued inputs.

/// Whitespace as web pages see it: the `\s` class of a regular expression,
/// which is also the set `String.prototype.trim` strips.
///
/// Unlike [`char::is_whitespace`] this includes U+FEFF and excludes U+0085.
pub fn is_web_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' ' | '\u{00A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Returns `true` if `s` only contains characters allowed in a telephone
/// number: ASCII digits, `-`, `+`, `(`, `)` and whitespace (see
/// [`is_web_whitespace`]).
///
/// The empty string is valid.
///
/// # Examples
///
/// ```
/// use input_core::is_tel_chars;
///
/// assert!(is_tel_chars("+1 (555) 123-4567"));
/// assert!(is_tel_chars(""));
/// assert!(!is_tel_chars("555-CALL"));
/// ```
pub fn is_tel_chars(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '(' | ')') || is_web_whitespace(c))
}

/// The raw string as a value: `None` when it is empty.
///
/// # Examples
///
/// ```
/// use input_core::non_empty;
///
/// assert_eq!(non_empty("abc"), Some("abc".to_string()));
/// assert_eq!(non_empty(""), None);
/// assert_eq!(non_empty(" "), Some(" ".to_string()));
/// ```
pub fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Trim surrounding [`is_web_whitespace`] characters; `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use input_core::trimmed;
///
/// assert_eq!(trimmed("  hello  "), Some("hello".to_string()));
/// assert_eq!(trimmed("   "), None);
/// ```
pub fn trimmed(s: &str) -> Option<String> {
    non_empty(s.trim_matches(is_web_whitespace))
}
