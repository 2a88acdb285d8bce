//! [`TypedInput`] as an egui widget.
//!
//! egui is immediate mode, so the caller rebuilds the `TypedInput` from its
//! own value every frame and the widget turns this frame's interaction into
//! change, key and blur events. The field's text lives in egui memory the
//! way a native element keeps its own value, and is overwritten only when it
//! no longer reflects what the caller holds.

use std::hash::Hash;

use egui::{Id, Response, TextEdit, Ui, Widget};
use form_controls::{ChangeEvent, FocusEvent, TypedInput};
use input_core::{FileHandle, InputKind};

use crate::{files, keys};

pub struct TypedInputWidget<'a> {
    input: TypedInput<'a>,
    id_salt: Option<Id>,
    desired_width: Option<f32>,
}

impl<'a> TypedInputWidget<'a> {
    pub fn new(input: TypedInput<'a>) -> Self {
        Self {
            input,
            id_salt: None,
            desired_width: None,
        }
    }

    /// Give the field a stable identity. Needed when several inputs share a
    /// parent whose layout changes between frames.
    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = Some(width);
        self
    }
}

impl Widget for TypedInputWidget<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let id = match self.id_salt {
            Some(salt) => ui.make_persistent_id(salt),
            None => ui.next_auto_id(),
        };
        let options = FieldOptions::from_input(&self.input, self.desired_width);

        let mut response = ui
            .add_enabled_ui(!options.disabled, |ui| match self.input.kind() {
                InputKind::File => file_field(ui, &mut self.input, id, &options),
                InputKind::Color => color_field(ui, &mut self.input),
                _ => text_field(ui, &mut self.input, id, &options),
            })
            .inner;

        if let Some(title) = options.title {
            response = response.on_hover_text(title);
        }
        response
    }
}

/// Show `input` in `ui`. Shorthand for `ui.add(TypedInputWidget::new(input))`.
pub fn show_typed_input(ui: &mut Ui, input: TypedInput<'_>) -> Response {
    ui.add(TypedInputWidget::new(input))
}

/// Forwarded attributes egui has a counterpart for.
#[derive(Debug, Default)]
struct FieldOptions {
    placeholder: Option<String>,
    title: Option<String>,
    accept: Option<String>,
    char_limit: Option<usize>,
    disabled: bool,
    readonly: bool,
    desired_width: Option<f32>,
}

impl FieldOptions {
    fn from_input(input: &TypedInput<'_>, desired_width: Option<f32>) -> Self {
        let attrs = input.attrs();
        let owned = |name: &str| attrs.get(name).map(str::to_string);
        Self {
            placeholder: owned("placeholder"),
            title: owned("title"),
            accept: owned("accept"),
            char_limit: attrs
                .get("maxlength")
                .and_then(|n| n.trim().parse().ok()),
            disabled: attrs.has("disabled"),
            readonly: attrs.has("readonly"),
            desired_width,
        }
    }
}

/// Format shown in an empty field when no placeholder was given.
pub fn default_hint(kind: InputKind) -> Option<&'static str> {
    match kind {
        InputKind::Number => Some("0"),
        InputKind::Date => Some("yyyy-mm-dd"),
        InputKind::DateTimeLocal => Some("yyyy-mm-ddThh:mm"),
        InputKind::Month => Some("yyyy-mm"),
        InputKind::Week => Some("yyyy-Www"),
        InputKind::Time => Some("hh:mm"),
        _ => None,
    }
}

/// The text a field should show this frame: what it showed last frame while
/// that still reflects the held value, the held value's edit text otherwise.
pub fn sync_buffer(input: &TypedInput<'_>, kept: Option<String>) -> String {
    match kept {
        Some(text) if input.reflects(&text) => text,
        _ => input.edit_text().unwrap_or_default(),
    }
}

fn text_field(ui: &mut Ui, input: &mut TypedInput<'_>, id: Id, options: &FieldOptions) -> Response {
    let buffer_id = id.with("buffer");
    let kept = ui.data(|d| d.get_temp::<String>(buffer_id));
    let mut buffer = sync_buffer(input, kept);
    let before = buffer.clone();

    let mut edit = TextEdit::singleline(&mut buffer)
        .id(id)
        .return_key(None)
        .password(input.kind() == InputKind::Password)
        .interactive(!options.readonly);
    if let Some(hint) = options
        .placeholder
        .as_deref()
        .or_else(|| default_hint(input.kind()))
    {
        edit = edit.hint_text(hint);
    }
    if let Some(limit) = options.char_limit {
        edit = edit.char_limit(limit);
    }
    if let Some(width) = options.desired_width {
        edit = edit.desired_width(width);
    }
    let response = ui.add(edit);

    let focused = response.has_focus() || response.lost_focus();
    if focused {
        for key_down in ui.input(keys::key_downs) {
            input.handle_key_down(&key_down);
        }
    }
    if buffer != before {
        log::trace!(target: "gfx.typed_input", "{} edited {:?} -> {:?}", input.kind(), before, buffer);
        input.handle_change(&ChangeEvent::text(buffer.clone()));
    }
    if response.lost_focus() {
        input.handle_blur(&FocusEvent);
    }

    ui.data_mut(|d| d.insert_temp(buffer_id, buffer));
    response
}

fn color_field(ui: &mut Ui, input: &mut TypedInput<'_>) -> Response {
    let shown = input.display_value().unwrap_or_default();
    let mut rgb = parse_hex_color(&shown).unwrap_or([0, 0, 0]);

    let response = ui
        .horizontal(|ui| {
            let swatch = egui::color_picker::color_edit_button_srgb(ui, &mut rgb);
            ui.monospace(format_hex_color(rgb));
            swatch
        })
        .inner;

    if response.changed() {
        input.handle_change(&ChangeEvent::text(format_hex_color(rgb)));
    }
    response
}

fn file_field(ui: &mut Ui, input: &mut TypedInput<'_>, id: Id, options: &FieldOptions) -> Response {
    let names_id = id.with("files");
    let names: Vec<String> = ui.data(|d| d.get_temp(names_id)).unwrap_or_default();
    let multiple = input.is_multiple();

    let row = ui.horizontal(|ui| {
        let label = if multiple { "Choose files…" } else { "Choose file…" };
        let choose = ui.button(label);
        ui.label(files::summary(&names));
        let clear = (!names.is_empty()).then(|| ui.small_button("✖").on_hover_text("Clear"));
        (choose, clear)
    });
    let (choose, clear) = row.inner;
    let response = row.response.union(choose.clone());

    let mut picked = None;
    if choose.clicked() {
        picked = files::pick(multiple, options.accept.as_deref());
        if picked.is_none() {
            log::debug!(target: "gfx.typed_input", "file dialog cancelled");
        }
    }
    if clear.is_some_and(|c| c.clicked()) {
        picked = Some(Vec::new());
    }

    let dropped = ui.input(|i| i.raw.dropped_files.clone());
    if picked.is_none() && !dropped.is_empty() && ui.rect_contains_pointer(response.rect) {
        let mut handles: Vec<_> = dropped.iter().filter_map(files::handle_from_dropped).collect();
        if !multiple {
            handles.truncate(1);
        }
        if !handles.is_empty() {
            picked = Some(handles);
        }
    }

    if let Some(handles) = picked {
        commit_selection(ui, input, names_id, handles);
    }
    response
}

/// Remember the selection's names for the row label and report it. An empty
/// selection clears the field.
fn commit_selection(ui: &Ui, input: &mut TypedInput<'_>, names_id: Id, handles: Vec<FileHandle>) {
    let names: Vec<String> = handles.iter().map(|h| h.name().to_string()).collect();
    ui.data_mut(|d| d.insert_temp(names_id, names));
    input.handle_change(&ChangeEvent::files(handles));
}

/// Parse the `#rrggbb` form a color input holds.
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

pub fn format_hex_color([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_core::{InputValue, LocaleNumberConverter, NumberLocale};

    const EN: LocaleNumberConverter = LocaleNumberConverter::new(NumberLocale::EN_US);

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#00ff7F"), Some([0, 255, 127]));
        assert_eq!(parse_hex_color("00ff7f"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(format_hex_color([0, 255, 127]), "#00ff7f");
    }

    #[test]
    fn hints_cover_formatted_kinds_only() {
        assert_eq!(default_hint(InputKind::Date), Some("yyyy-mm-dd"));
        assert_eq!(default_hint(InputKind::Number), Some("0"));
        assert_eq!(default_hint(InputKind::Text), None);
        assert_eq!(default_hint(InputKind::Tel), None);
    }

    #[test]
    fn buffer_keeps_unfinished_number_text() {
        let input = TypedInput::new(InputKind::Number)
            .value(InputValue::number(1.0))
            .number_converter(EN);
        assert_eq!(sync_buffer(&input, Some("1.".into())), "1.");
        assert_eq!(sync_buffer(&input, Some("7".into())), "1");
        assert_eq!(sync_buffer(&input, None), "1");
    }

    #[test]
    fn comma_decimal_buffer_stays_in_step_with_the_held_number() {
        let de = LocaleNumberConverter::new(NumberLocale::DE_DE);
        let input = TypedInput::new(InputKind::Number)
            .value(InputValue::number(1.5))
            .number_converter(de);
        assert_eq!(sync_buffer(&input, None), "1,5");
        assert_eq!(sync_buffer(&input, Some("1.55".into())), "1,5");

        let after_edit = TypedInput::new(InputKind::Number)
            .value(InputValue::number(1.55))
            .number_converter(de);
        assert_eq!(sync_buffer(&after_edit, Some("1,55".into())), "1,55");
    }

    #[test]
    fn buffer_reverts_a_rejected_phone_edit() {
        let input = TypedInput::new(InputKind::Tel).value(InputValue::text("555"));
        assert_eq!(sync_buffer(&input, Some("555x".into())), "555");
    }

    #[test]
    fn buffer_follows_a_value_set_by_the_caller() {
        let input = TypedInput::new(InputKind::Text).value(InputValue::text("reset"));
        assert_eq!(sync_buffer(&input, Some("typed".into())), "reset");
    }

    #[test]
    fn options_come_from_forwarded_attributes() {
        let input = TypedInput::new(InputKind::Text)
            .attr("placeholder", "Name")
            .attr("maxlength", " 8 ")
            .attr("title", "Full name")
            .flag("readonly");
        let options = FieldOptions::from_input(&input, Some(120.0));
        assert_eq!(options.placeholder.as_deref(), Some("Name"));
        assert_eq!(options.title.as_deref(), Some("Full name"));
        assert_eq!(options.char_limit, Some(8));
        assert!(options.readonly);
        assert!(!options.disabled);
        assert_eq!(options.desired_width, Some(120.0));
    }

    #[test]
    fn clearing_a_selection_reports_absent_and_forgets_the_names() {
        let ctx = egui::Context::default();
        let mut reported = Vec::new();
        let names_id = Id::new("photos").with("files");
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut input = TypedInput::new(InputKind::File)
                    .multiple(true)
                    .on_value_change(|v| reported.push(v));
                commit_selection(ui, &mut input, names_id, vec![FileHandle::new("a.png")]);
                commit_selection(ui, &mut input, names_id, Vec::new());
            });
        });

        assert_eq!(reported.len(), 2);
        assert!(matches!(&reported[0], Some(InputValue::Files(list)) if list.len() == 1));
        assert_eq!(reported[1], None);
        let names: Option<Vec<String>> = ctx.data(|d| d.get_temp(names_id));
        assert_eq!(names, Some(Vec::new()));
    }

    #[test]
    fn a_frame_without_interaction_reports_nothing() {
        let ctx = egui::Context::default();
        let mut reported = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                for kind in InputKind::ALL {
                    let input = TypedInput::new(kind)
                        .value(InputValue::text(" padded "))
                        .on_value_change(|v| reported.push(v));
                    ui.add(TypedInputWidget::new(input).id_salt(kind.as_str()));
                }
            });
        });
        assert!(reported.is_empty(), "{reported:?}");
    }
}
