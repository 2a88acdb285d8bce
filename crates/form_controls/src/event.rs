//! Native events a typed input reacts to.

use input_core::{FileHandle, RawChange};

/// The native control's value changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Raw string value of the control.
    pub value: String,
    /// Current selection of a file control, in selection order.
    pub files: Vec<FileHandle>,
}

impl ChangeEvent {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            files: Vec::new(),
        }
    }

    pub fn files(files: Vec<FileHandle>) -> Self {
        Self {
            value: String::new(),
            files,
        }
    }

    pub fn raw(&self) -> RawChange<'_> {
        RawChange {
            value: &self.value,
            files: &self.files,
        }
    }
}

/// The control lost focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusEvent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Tab,
    Backspace,
    /// A printable key, e.g. `"a"` or `"€"`.
    Character(String),
    /// Any other named key, by its DOM name (`"ArrowLeft"`, `"F5"`, ...).
    Other(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` string.
    pub fn from_dom_name(name: &str) -> Key {
        match name {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            s if s.chars().count() == 1 => Key::Character(s.to_string()),
            s => Key::Other(s.to_string()),
        }
    }

    pub fn dom_name(&self) -> &str {
        match self {
            Key::Enter => "Enter",
            Key::Escape => "Escape",
            Key::Tab => "Tab",
            Key::Backspace => "Backspace",
            Key::Character(s) | Key::Other(s) => s,
        }
    }
}

/// A key went down while the control had focus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyboardEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
            alt: false,
        }
    }

    pub fn enter() -> Self {
        Self::new(Key::Enter)
    }

    pub fn is_enter(&self) -> bool {
        self.key == Key::Enter
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Change(ChangeEvent),
    Blur(FocusEvent),
    KeyDown(KeyboardEvent),
}

impl InputEvent {
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::Change(_) => "change",
            InputEvent::Blur(_) => "blur",
            InputEvent::KeyDown(_) => "keydown",
        }
    }
}
