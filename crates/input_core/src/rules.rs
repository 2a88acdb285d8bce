//! Coercion, display and trim rules for typed inputs.
//!
//! Every rule is a pure function of the control's configuration and the
//! caller-held value. Rules report what they want emitted; invoking the
//! caller's callback is left to the component.

use crate::kind::InputKind;
use crate::text::{is_tel_chars, non_empty, trimmed};
use crate::traits::NumberConverter;
use crate::value::{FileHandle, FileList, InputValue};

/// Result of running one rule against an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Report this value (`None` = absent) to the caller.
    Emitted(Option<InputValue>),
    /// The edit is refused; nothing is reported and the control keeps
    /// displaying the caller's previous value.
    Rejected,
    /// The rule does not apply to this event.
    Ignored,
}

/// What the native control reported on change: its string value and, for
/// file inputs, the current selection.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawChange<'a> {
    pub value: &'a str,
    pub files: &'a [FileHandle],
}

impl<'a> RawChange<'a> {
    pub fn text(value: &'a str) -> Self {
        Self { value, files: &[] }
    }

    pub fn files(files: &'a [FileHandle]) -> Self {
        Self { value: "", files }
    }
}

/// Map a raw change to the typed value to report.
///
/// | kind | rule |
/// |---|---|
/// | file, multiple | all selected files, or absent |
/// | file | first selected file, or absent |
/// | number | `""` is absent, otherwise the converter's result (absent if rejected) |
/// | tel | rejected unless every char is a digit, `-`, `+`, `(`, `)` or space |
/// | others | the raw string, or absent when empty |
pub fn coerce_change(
    kind: InputKind,
    multiple: bool,
    raw: RawChange<'_>,
    converter: &dyn NumberConverter,
) -> Outcome {
    let outcome = match kind {
        InputKind::File if multiple => {
            Outcome::Emitted(FileList::new(raw.files.to_vec()).map(InputValue::Files))
        }
        InputKind::File => Outcome::Emitted(raw.files.first().cloned().map(InputValue::File)),
        InputKind::Number => {
            if raw.value.is_empty() {
                Outcome::Emitted(None)
            } else {
                Outcome::Emitted(converter.convert(raw.value).and_then(InputValue::number))
            }
        }
        InputKind::Tel => {
            if is_tel_chars(raw.value) {
                Outcome::Emitted(non_empty(raw.value).map(InputValue::Text))
            } else {
                log::debug!(target: "input.tel", "rejected edit {:?}", raw.value);
                Outcome::Rejected
            }
        }
        _ => Outcome::Emitted(non_empty(raw.value).map(InputValue::Text)),
    };

    log::debug!(target: "input.coerce", "{kind} change -> {outcome:?}");
    outcome
}

/// The string a control shows for the caller's value.
///
/// Returns `None` for file inputs: their displayed value is owned by the
/// platform and is never set programmatically. Telephone values are
/// re-validated here as well; an invalid one displays as `""`.
pub fn display_value(kind: InputKind, value: Option<&InputValue>) -> Option<String> {
    if kind == InputKind::File {
        return None;
    }

    let shown = match (kind, value) {
        (_, None) => String::new(),
        (InputKind::Tel, Some(v)) => match scalar_string(v) {
            Some(s) if !s.is_empty() && is_tel_chars(&s) => s,
            _ => String::new(),
        },
        (_, Some(v)) => scalar_string(v).unwrap_or_default(),
    };
    Some(shown)
}

/// Trim the caller's current value on blur or Enter.
///
/// Applies only when `trim` is on, the kind is trimmable and the held value
/// is a string. Works on the caller's value, not on whatever the control is
/// currently showing.
pub fn trim_commit(kind: InputKind, trim: bool, value: Option<&InputValue>) -> Outcome {
    if !trim || !kind.is_trimmable() {
        return Outcome::Ignored;
    }
    let Some(InputValue::Text(s)) = value else {
        return Outcome::Ignored;
    };

    let out = trimmed(s);
    log::debug!(target: "input.trim", "{kind} trimmed {s:?} -> {out:?}");
    Outcome::Emitted(out.map(InputValue::Text))
}

fn scalar_string(value: &InputValue) -> Option<String> {
    match value {
        InputValue::Text(s) => Some(s.clone()),
        InputValue::Number(n) => Some(tools::format_number(*n)),
        InputValue::File(_) | InputValue::Files(_) => None,
    }
}
