//! egui keyboard input as DOM-style [`KeyboardEvent`]s.

use egui::{Event, InputState, Modifiers};
use form_controls::{Key, KeyboardEvent};

/// The DOM `KeyboardEvent.key` for an egui key. Letters are lowercase unless
/// `shift` is held; other printable keys use their unshifted character.
pub fn key(key: egui::Key, shift: bool) -> Key {
    use egui::Key as K;

    let printable = match key {
        K::Enter => return Key::Enter,
        K::Escape => return Key::Escape,
        K::Tab => return Key::Tab,
        K::Backspace => return Key::Backspace,
        K::Space => " ",
        K::Minus => "-",
        K::Plus => "+",
        K::Equals => "=",
        K::Comma => ",",
        K::Period => ".",
        K::Colon => ":",
        K::Semicolon => ";",
        K::Slash => "/",
        K::Backslash => "\\",
        K::Pipe => "|",
        K::Questionmark => "?",
        K::OpenBracket => "[",
        K::CloseBracket => "]",
        K::Backtick => "`",
        K::Quote => "'",
        K::Num0 => "0",
        K::Num1 => "1",
        K::Num2 => "2",
        K::Num3 => "3",
        K::Num4 => "4",
        K::Num5 => "5",
        K::Num6 => "6",
        K::Num7 => "7",
        K::Num8 => "8",
        K::Num9 => "9",
        // arrows, F-keys, Home, PageUp, ... already carry their DOM names
        other => {
            let name = other.name();
            return match name.chars().next() {
                Some(c) if name.len() == 1 && c.is_ascii_alphabetic() => {
                    let c = if shift { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() };
                    Key::Character(c.to_string())
                }
                _ => Key::from_dom_name(name),
            };
        }
    };
    Key::Character(printable.to_string())
}

pub fn keyboard_event(pressed: egui::Key, modifiers: Modifiers) -> KeyboardEvent {
    KeyboardEvent {
        key: key(pressed, modifiers.shift),
        shift: modifiers.shift,
        ctrl: modifiers.ctrl || modifiers.command,
        alt: modifiers.alt,
    }
}

/// Key presses of this frame, in arrival order. Auto-repeat counts as a press.
pub fn key_downs(input: &InputState) -> Vec<KeyboardEvent> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => Some(keyboard_event(*key, *modifiers)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn named_keys_map_to_dom_keys() {
        assert_eq!(key(egui::Key::Enter, false), Key::Enter);
        assert_eq!(key(egui::Key::Escape, false), Key::Escape);
        assert_eq!(key(egui::Key::Tab, true), Key::Tab);
        assert_eq!(key(egui::Key::Backspace, false), Key::Backspace);
        assert_eq!(key(egui::Key::ArrowLeft, false), Key::Other("ArrowLeft".into()));
        assert_eq!(key(egui::Key::F5, false), Key::Other("F5".into()));
    }

    #[test]
    fn letters_follow_shift() {
        assert_eq!(key(egui::Key::A, false), char_key("a"));
        assert_eq!(key(egui::Key::A, true), char_key("A"));
    }

    #[test]
    fn punctuation_and_space_are_characters() {
        assert_eq!(key(egui::Key::Space, false), char_key(" "));
        assert_eq!(key(egui::Key::Minus, false), char_key("-"));
        assert_eq!(key(egui::Key::Comma, false), char_key(","));
        assert_eq!(key(egui::Key::Period, false), char_key("."));
        assert_eq!(key(egui::Key::Backslash, false), char_key("\\"));
        assert_eq!(key(egui::Key::Num7, false), char_key("7"));
    }

    #[test]
    fn modifiers_are_carried() {
        let ev = keyboard_event(
            egui::Key::Enter,
            Modifiers {
                shift: true,
                command: true,
                ..Modifiers::NONE
            },
        );
        assert!(ev.is_enter());
        assert!(ev.shift);
        assert!(ev.ctrl);
        assert!(!ev.alt);
    }
}
