use std::fmt::Write as _;
use std::sync::Arc;

use input_core::InputKind;

/// Framework-neutral description of a rendered `<input>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputElement {
    pub attributes: Vec<(Arc<str>, Option<String>)>,
}

impl InputElement {
    pub const TAG: &'static str = "input";

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// The `type` attribute; a missing or unknown type means `text`.
    pub fn kind(&self) -> InputKind {
        self.attr("type")
            .and_then(|t| t.parse().ok())
            .unwrap_or_default()
    }

    /// The displayed value. `None` when the element does not set one
    /// (file inputs).
    pub fn value(&self) -> Option<&str> {
        self.attr("value")
    }

    pub fn is_multiple(&self) -> bool {
        self.has_attr("multiple")
    }

    /// Serialize as an HTML start tag.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<input");
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                let _ = write!(out, "=\"{}\"", escape_attr(value));
            }
        }
        out.push('>');
        out
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
