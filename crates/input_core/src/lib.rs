//! # input_core
//!
//! UI-agnostic model and rules for typed form inputs.
//!
//! This crate provides the building blocks the `TypedInput` control is made of:
//! - [`InputKind`]: the `type` of the control (text, number, tel, file, ...)
//! - [`InputValue`]: the typed value a caller holds for a control
//! - [`coerce_change`], [`display_value`], [`trim_commit`]: the pure rules that
//!   turn native events into typed values and typed values into display strings
//! - [`NumberConverter`] / [`ValueHolder`]: seams for numeric parsing and for
//!   the caller-owned state
//! - [`ValueStore`]: a ready-made caller-side store for named fields
//!
//! ## Design Principles
//!
//! Nothing here depends on a UI toolkit. Rules take the control's configuration
//! plus the caller's current value and return an [`Outcome`]; they never keep
//! state between events.

mod kind;
mod rules;
mod state;
mod store;
mod text;
mod traits;
mod value;

pub use kind::{InputKind, UnknownInputKind};
pub use rules::{Outcome, RawChange, coerce_change, display_value, trim_commit};
pub use store::{FieldHolder, ValueStore};
pub use text::{is_tel_chars, is_web_whitespace, non_empty, trimmed};
pub use traits::{LocaleNumberConverter, NumberConverter, ValueHolder};
pub use value::{FileHandle, FileList, InputValue, ValueKindMismatch};

pub use tools::NumberLocale;
