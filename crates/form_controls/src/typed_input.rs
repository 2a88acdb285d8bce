use std::fmt;
use std::sync::Arc;

use input_core::{
    InputKind, InputValue, LocaleNumberConverter, NumberConverter, Outcome, ValueKindMismatch,
    coerce_change, display_value, trim_commit,
};

use crate::attrs::Attributes;
use crate::element::InputElement;
use crate::event::{ChangeEvent, FocusEvent, InputEvent, KeyboardEvent};

macro_rules! log_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug-events")]
        log::debug!(target: "form_controls.event", $($arg)*);
        #[cfg(not(feature = "debug-events"))]
        log::trace!(target: "form_controls.event", $($arg)*);
    };
}

type ValueChangeHandler<'a> = Box<dyn FnMut(Option<InputValue>) + 'a>;
type ChangeHandler<'a> = Box<dyn FnMut(&ChangeEvent) + 'a>;
type BlurHandler<'a> = Box<dyn FnMut(&FocusEvent) + 'a>;
type KeyDownHandler<'a> = Box<dyn FnMut(&KeyboardEvent) + 'a>;

/// A controlled `<input>` that speaks typed values.
///
/// The caller owns the value: build a `TypedInput` from it for every render,
/// feed it the native events, and store whatever `on_value_change` reports.
/// The control never keeps the value itself.
///
/// # Example
///
/// ```
/// use form_controls::{ChangeEvent, TypedInput};
/// use input_core::{InputKind, InputValue};
///
/// let mut held: Option<InputValue> = None;
/// let mut input = TypedInput::new(InputKind::Number)
///     .value(held.clone())
///     .on_value_change(|v| held = v);
///
/// input.handle_change(&ChangeEvent::text("42"));
/// drop(input);
///
/// assert_eq!(held, Some(InputValue::Number(42.0)));
/// ```
pub struct TypedInput<'a> {
    kind: InputKind,
    multiple: bool,
    value: Option<InputValue>,
    trim: bool,
    attributes: Attributes,
    converter: Box<dyn NumberConverter + 'a>,
    on_value_change: Option<ValueChangeHandler<'a>>,
    on_change: Option<ChangeHandler<'a>>,
    on_blur: Option<BlurHandler<'a>>,
    on_key_down: Option<KeyDownHandler<'a>>,
}

impl<'a> TypedInput<'a> {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            multiple: false,
            value: None,
            trim: true,
            attributes: Attributes::new(),
            converter: Box::new(LocaleNumberConverter::system()),
            on_value_change: None,
            on_change: None,
            on_blur: None,
            on_key_down: None,
        }
    }

    /// Allow selecting several files. Only meaningful for `file` inputs.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// The caller's current value.
    pub fn value(mut self, value: Option<InputValue>) -> Self {
        self.value = value;
        self
    }

    /// Like [`TypedInput::value`], but refuses a value that does not fit the
    /// kind. Call after [`TypedInput::multiple`].
    pub fn try_value(mut self, value: Option<InputValue>) -> Result<Self, ValueKindMismatch> {
        if let Some(v) = &value {
            v.check(self.kind, self.multiple)?;
        }
        self.value = value;
        Ok(self)
    }

    /// Trim string values on blur and Enter. On by default.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Forward `name="value"` to the element. `type`, `value` and `multiple`
    /// are owned by the control and ignored here.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Forward a boolean attribute such as `disabled`.
    pub fn flag(mut self, name: &str) -> Self {
        self.attributes.set_flag(name);
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Replace the string-to-number conversion used by `number` inputs.
    pub fn number_converter(mut self, converter: impl NumberConverter + 'a) -> Self {
        self.converter = Box::new(converter);
        self
    }

    pub fn on_value_change(mut self, f: impl FnMut(Option<InputValue>) + 'a) -> Self {
        self.on_value_change = Some(Box::new(f));
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&ChangeEvent) + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl FnMut(&FocusEvent) + 'a) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    pub fn on_key_down(mut self, f: impl FnMut(&KeyboardEvent) + 'a) -> Self {
        self.on_key_down = Some(Box::new(f));
        self
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn current(&self) -> Option<&InputValue> {
        self.value.as_ref()
    }

    pub fn trims(&self) -> bool {
        self.trim
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attributes
    }

    /// What the element shows. `None` for file inputs.
    pub fn display_value(&self) -> Option<String> {
        display_value(self.kind, self.value.as_ref())
    }

    /// Editable text for the held value: [`TypedInput::display_value`], except
    /// that numbers are written by the number converter so that the text
    /// converts back to the same number (`"1,5"` under a comma-decimal
    /// converter, where the display value stays `"1.5"`).
    pub fn edit_text(&self) -> Option<String> {
        match (self.kind, &self.value) {
            (InputKind::Number, Some(InputValue::Number(n))) => Some(self.converter.format(*n)),
            _ => self.display_value(),
        }
    }

    /// Whether an element already showing `raw` agrees with the held value.
    ///
    /// Hosts that keep the element's own text use this to decide when to
    /// overwrite it: a number field showing `"1."` reflects a held `1` and
    /// keeps the text, a rejected phone edit does not and is reverted.
    pub fn reflects(&self, raw: &str) -> bool {
        match self.kind {
            InputKind::File => true,
            InputKind::Number => {
                let change = ChangeEvent::text(raw);
                match coerce_change(self.kind, self.multiple, change.raw(), &*self.converter) {
                    Outcome::Emitted(v) => v == self.value,
                    _ => false,
                }
            }
            _ => self.display_value().as_deref() == Some(raw),
        }
    }

    pub fn render(&self) -> InputElement {
        let mut attributes: Vec<(Arc<str>, Option<String>)> =
            Vec::with_capacity(self.attributes.len() + 3);

        attributes.push((Arc::from("type"), Some(self.kind.as_str().to_string())));
        if self.kind == InputKind::File && self.multiple {
            attributes.push((Arc::from("multiple"), None));
        }
        if let Some(shown) = self.display_value() {
            attributes.push((Arc::from("value"), Some(shown)));
        }
        attributes.extend(self.attributes.entries().iter().cloned());

        InputElement { attributes }
    }

    pub fn dispatch(&mut self, event: &InputEvent) -> Outcome {
        match event {
            InputEvent::Change(ev) => self.handle_change(ev),
            InputEvent::Blur(ev) => self.handle_blur(ev),
            InputEvent::KeyDown(ev) => self.handle_key_down(ev),
        }
    }

    /// The native value changed: run the caller's `on_change`, then coerce
    /// and report.
    pub fn handle_change(&mut self, event: &ChangeEvent) -> Outcome {
        log_event!(
            "{} change value={:?} files={}",
            self.kind,
            event.value,
            event.files.len()
        );
        if let Some(f) = self.on_change.as_mut() {
            f(event);
        }

        let outcome = coerce_change(self.kind, self.multiple, event.raw(), &*self.converter);
        self.emit(&outcome);
        outcome
    }

    /// The control lost focus: run the caller's `on_blur`, then trim.
    pub fn handle_blur(&mut self, event: &FocusEvent) -> Outcome {
        log_event!("{} blur", self.kind);
        if let Some(f) = self.on_blur.as_mut() {
            f(event);
        }

        let outcome = trim_commit(self.kind, self.trim, self.value.as_ref());
        self.emit(&outcome);
        outcome
    }

    /// A key went down: run the caller's `on_key_down`, then trim on Enter.
    ///
    /// The key's default action is left alone; Enter still submits a form.
    pub fn handle_key_down(&mut self, event: &KeyboardEvent) -> Outcome {
        log_event!("{} keydown {:?}", self.kind, event.key);
        if let Some(f) = self.on_key_down.as_mut() {
            f(event);
        }

        if !event.is_enter() {
            return Outcome::Ignored;
        }
        let outcome = trim_commit(self.kind, self.trim, self.value.as_ref());
        self.emit(&outcome);
        outcome
    }

    fn emit(&mut self, outcome: &Outcome) {
        let Outcome::Emitted(value) = outcome else {
            return;
        };
        if let Some(f) = self.on_value_change.as_mut() {
            f(value.clone());
        }
    }
}

impl fmt::Debug for TypedInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedInput")
            .field("kind", &self.kind)
            .field("multiple", &self.multiple)
            .field("value", &self.value)
            .field("trim", &self.trim)
            .field("attributes", &self.attributes)
            .field("on_value_change", &self.on_value_change.is_some())
            .finish_non_exhaustive()
    }
}
