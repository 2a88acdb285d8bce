//! # form_controls
//!
//! [`TypedInput`]: a controlled wrapper around the native `<input>` element
//! that reports typed values instead of raw change events.
//!
//! The control reads the caller's current value, renders an [`InputElement`]
//! from it, and turns native [`ChangeEvent`]s, blurs and key presses into a
//! single `on_value_change(Option<InputValue>)` notification using the rules
//! in [`input_core`]. Caller handlers for the native events still run, before
//! the control's own logic.

mod attrs;
mod element;
mod event;
mod typed_input;

pub use attrs::Attributes;
pub use element::InputElement;
pub use event::{ChangeEvent, FocusEvent, InputEvent, Key, KeyboardEvent};
pub use typed_input::TypedInput;

pub use input_core::{FileHandle, FileList, InputKind, InputValue, Outcome};
