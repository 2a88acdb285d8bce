//! The `type` of an input control.

use std::fmt;
use std::str::FromStr;

/// Enumerated input type. Decides how raw strings are coerced and displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Tel,
    Url,
    Search,
    Number,
    Date,
    Month,
    Week,
    Time,
    DateTimeLocal,
    File,
    Color,
}

impl InputKind {
    pub const ALL: [InputKind; 14] = [
        InputKind::Text,
        InputKind::Password,
        InputKind::Email,
        InputKind::Tel,
        InputKind::Url,
        InputKind::Search,
        InputKind::Number,
        InputKind::Date,
        InputKind::Month,
        InputKind::Week,
        InputKind::Time,
        InputKind::DateTimeLocal,
        InputKind::File,
        InputKind::Color,
    ];

    /// Spelling used by the `type` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Url => "url",
            InputKind::Search => "search",
            InputKind::Number => "number",
            InputKind::Date => "date",
            InputKind::Month => "month",
            InputKind::Week => "week",
            InputKind::Time => "time",
            InputKind::DateTimeLocal => "datetime-local",
            InputKind::File => "file",
            InputKind::Color => "color",
        }
    }

    /// Kinds whose string value is trimmed on blur and Enter.
    pub const fn is_trimmable(self) -> bool {
        matches!(
            self,
            InputKind::Text | InputKind::Email | InputKind::Tel | InputKind::Url | InputKind::Search
        )
    }

    /// Kinds whose value is a plain string.
    pub const fn is_string_valued(self) -> bool {
        !matches!(self, InputKind::Number | InputKind::File)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownInputKind(pub String);

impl fmt::Display for UnknownInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported input type {:?}", self.0)
    }
}

impl std::error::Error for UnknownInputKind {}

impl FromStr for InputKind {
    type Err = UnknownInputKind;

    /// Parses a `type` attribute value, ignoring ASCII case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        InputKind::ALL
            .into_iter()
            .find(|kind| t.eq_ignore_ascii_case(kind.as_str()))
            .ok_or_else(|| UnknownInputKind(s.to_string()))
    }
}
