//! One field per input kind, wired to a [`ValueStore`], with a live view of
//! what each field reported.

use std::cell::RefCell;
use std::collections::VecDeque;

use egui::{CentralPanel, Context, Grid, ScrollArea, SidePanel};
use form_controls::TypedInput;
use gfx::TypedInputWidget;
use input_core::{InputKind, InputValue, LocaleNumberConverter, NumberLocale, ValueHolder, ValueStore};

const EVENT_LOG_LEN: usize = 50;

struct Story {
    key: &'static str,
    label: &'static str,
    kind: InputKind,
    multiple: bool,
    trim: bool,
    locale: Option<NumberLocale>,
    attrs: &'static [(&'static str, &'static str)],
    initial: Option<InputValue>,
}

impl Story {
    fn new(key: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            key,
            label,
            kind,
            multiple: false,
            trim: true,
            locale: None,
            attrs: &[],
            initial: None,
        }
    }

    fn attrs(mut self, attrs: &'static [(&'static str, &'static str)]) -> Self {
        self.attrs = attrs;
        self
    }

    fn initial(mut self, value: impl Into<InputValue>) -> Self {
        self.initial = Some(value.into());
        self
    }

    fn input<'a>(&self, held: Option<InputValue>) -> TypedInput<'a> {
        let mut input = TypedInput::new(self.kind)
            .multiple(self.multiple)
            .trim(self.trim)
            .value(held);
        for (name, value) in self.attrs {
            input = if value.is_empty() {
                input.flag(name)
            } else {
                input.attr(name, *value)
            };
        }
        if let Some(locale) = self.locale {
            input = input.number_converter(LocaleNumberConverter::new(locale));
        }
        input
    }
}

fn stories() -> Vec<Story> {
    vec![
        Story::new("name", "Name", InputKind::Text)
            .attrs(&[("placeholder", "Ada Lovelace"), ("maxlength", "40")]),
        Story::new("email", "Email", InputKind::Email).attrs(&[("placeholder", "you@example.com")]),
        Story::new("website", "Website", InputKind::Url),
        Story::new("query", "Search", InputKind::Search).attrs(&[("title", "Trimmed on Enter")]),
        Story::new("secret", "Password", InputKind::Password),
        Story::new("quantity", "Quantity", InputKind::Number).initial(3.0),
        Story {
            locale: Some(NumberLocale::DE_DE),
            ..Story::new("preis", "Preis (de-DE)", InputKind::Number)
        }
        .initial(1234.5),
        Story::new("phone", "Phone", InputKind::Tel).attrs(&[("placeholder", "+1 (555) 010-0000")]),
        Story::new("birthday", "Date", InputKind::Date),
        Story::new("meeting", "Date and time", InputKind::DateTimeLocal),
        Story::new("billing", "Month", InputKind::Month),
        Story::new("sprint", "Week", InputKind::Week),
        Story::new("alarm", "Time", InputKind::Time),
        Story::new("accent", "Color", InputKind::Color).initial("#3366cc"),
        Story::new("resume", "File", InputKind::File).attrs(&[("accept", ".pdf,.txt")]),
        Story {
            multiple: true,
            ..Story::new("photos", "Files", InputKind::File)
        }
        .attrs(&[("accept", "image/*,.png,.jpg,.jpeg")]),
        Story {
            trim: false,
            ..Story::new("notes", "Text (no trim)", InputKind::Text)
        },
        Story::new("locked", "Read-only", InputKind::Text)
            .attrs(&[("readonly", "")])
            .initial("cannot edit"),
        Story::new("off", "Disabled", InputKind::Text)
            .attrs(&[("disabled", "")])
            .initial("greyed out"),
    ]
}

pub struct Gallery {
    stories: Vec<Story>,
    store: ValueStore,
    events: VecDeque<String>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    pub fn new() -> Self {
        let stories = stories();
        let mut store = ValueStore::new();
        for story in &stories {
            store.ensure_initial(story.key, story.initial.clone());
        }
        Self {
            stories,
            store,
            events: VecDeque::with_capacity(EVENT_LOG_LEN),
        }
    }

    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }

    pub fn ui(&mut self, ctx: &Context) {
        SidePanel::right("held_values")
            .min_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Held values");
                Grid::new("held_values_grid").striped(true).show(ui, |ui| {
                    for (name, value, rev) in self.store.iter() {
                        ui.monospace(name);
                        ui.monospace(describe(value));
                        ui.weak(format!("r{rev}"));
                        ui.end_row();
                    }
                });

                ui.separator();
                ui.heading("Events");
                ScrollArea::vertical().show(ui, |ui| {
                    for line in &self.events {
                        ui.monospace(line);
                    }
                });
            });

        let log = RefCell::new(Vec::new());
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Typed inputs");
            ScrollArea::vertical().show(ui, |ui| {
                Grid::new("stories").num_columns(2).spacing([16.0, 8.0]).show(ui, |ui| {
                    for story in &self.stories {
                        ui.label(story.label);
                        show_story(ui, story, &mut self.store, &log);
                        ui.end_row();
                    }
                });
            });
        });

        for line in log.into_inner() {
            self.record(line);
        }
    }

    fn record(&mut self, line: String) {
        log::debug!(target: "platform", "{line}");
        self.events.push_front(line);
        self.events.truncate(EVENT_LOG_LEN);
    }
}

fn show_story(ui: &mut egui::Ui, story: &Story, store: &mut ValueStore, log: &RefCell<Vec<String>>) {
    let key = story.key;
    let mut field = store.field(key);
    let held = field.value().cloned();
    let push = |line: String| log.borrow_mut().push(format!("{key}: {line}"));

    let input = story
        .input(held)
        .on_change(|ev| {
            if ev.files.is_empty() {
                push(format!("change {:?}", ev.value));
            } else {
                push(format!("change {} file(s)", ev.files.len()));
            }
        })
        .on_key_down(|ev| push(format!("keydown {}", ev.key.dom_name())))
        .on_blur(|_| push("blur".to_string()))
        .on_value_change(|v| {
            push(format!("value {}", describe(v.as_ref())));
            field.set_value(v);
        });

    ui.add(TypedInputWidget::new(input).id_salt(key).desired_width(240.0));
}

fn describe(value: Option<&InputValue>) -> String {
    match value {
        None => "(none)".to_string(),
        Some(v) => v.to_string(),
    }
}
