use std::sync::Arc;

/// Attributes owned by the typed input itself; callers cannot override them.
const RESERVED: [&str; 3] = ["type", "value", "multiple"];

/// Native attributes forwarded verbatim to the rendered element.
///
/// Order is insertion order. Names compare ASCII-case-insensitively; setting
/// an existing name replaces its value in place. `None` marks a boolean
/// attribute such as `disabled`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(Arc<str>, Option<String>)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_reserved(name: &str) -> bool {
        RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
    }

    /// Whether `name` can be written into a start tag as one attribute name:
    /// non-empty, with no whitespace, control characters, quotes, `<`, `>`,
    /// `/` or `=`.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && !name.chars().any(|c| {
                c.is_whitespace()
                    || c.is_control()
                    || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
            })
    }

    /// Set `name="value"`. Reserved and malformed names are dropped.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.insert(name, Some(value.into()));
    }

    /// Set a boolean attribute. Reserved and malformed names are dropped.
    pub fn set_flag(&mut self, name: &str) {
        self.insert(name, None);
    }

    fn insert(&mut self, name: &str, value: Option<String>) {
        let name = name.trim();
        if !Self::is_valid_name(name) {
            log::debug!(target: "form_controls.attrs", "ignoring malformed attribute name {name:?}");
            return;
        }
        if Self::is_reserved(name) {
            log::trace!(target: "form_controls.attrs", "ignoring reserved attribute {name:?}");
            return;
        }

        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            slot.1 = value;
            return;
        }
        self.entries.push((Arc::from(name), value));
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Value of a valued attribute. Boolean attributes and missing names give `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (&**k, v.as_deref()))
    }

    pub(crate) fn entries(&self) -> &[(Arc<str>, Option<String>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name.as_ref(), value);
        }
        attrs
    }
}
