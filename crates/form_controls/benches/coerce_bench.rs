use criterion::{Criterion, black_box, criterion_group, criterion_main};
use form_controls::{ChangeEvent, FocusEvent, TypedInput};
use input_core::{InputKind, InputValue, LocaleNumberConverter, NumberLocale};

const KEYSTROKES: usize = 256;

/// Every prefix of a long value, as a user typing it would produce.
fn typing_prefixes(value: &str) -> Vec<ChangeEvent> {
    value
        .char_indices()
        .map(|(i, ch)| ChangeEvent::text(&value[..i + ch.len_utf8()]))
        .collect()
}

fn bench_number_typing(c: &mut Criterion) {
    let digits: String = "1234567,890.".repeat(KEYSTROKES / 12);
    let events = typing_prefixes(&digits);

    c.bench_function("bench_number_typing", |b| {
        b.iter(|| {
            let mut last = None;
            let mut input = TypedInput::new(InputKind::Number)
                .number_converter(LocaleNumberConverter::new(NumberLocale::EN_US))
                .on_value_change(|v| last = v);
            for ev in &events {
                black_box(input.handle_change(ev));
            }
            drop(input);
            black_box(last);
        });
    });
}

fn bench_tel_typing(c: &mut Criterion) {
    let phone = "+1 (555) 123-4567 ".repeat(KEYSTROKES / 18);
    let events = typing_prefixes(&phone);

    c.bench_function("bench_tel_typing", |b| {
        b.iter(|| {
            let mut input = TypedInput::new(InputKind::Tel);
            for ev in &events {
                black_box(input.handle_change(ev));
            }
        });
    });
}

fn bench_render_and_trim(c: &mut Criterion) {
    let padded = format!("  {}  ", "word ".repeat(KEYSTROKES / 5));

    c.bench_function("bench_render_and_trim", |b| {
        b.iter(|| {
            let mut input = TypedInput::new(InputKind::Text)
                .value(InputValue::text(padded.as_str()))
                .attr("placeholder", "Search");
            black_box(input.render());
            black_box(input.handle_blur(&FocusEvent));
        });
    });
}

criterion_group!(
    benches,
    bench_number_typing,
    bench_tel_typing,
    bench_render_and_trim
);
criterion_main!(benches);
