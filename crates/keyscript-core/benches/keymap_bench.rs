//! Criterion benchmarks for key resolution and report encoding.
//!
//! Every table lookup is a linear scan over a `const` slice.  These numbers
//! show what a character costs before it reaches the device.
//!
//! Run with:
//! ```bash
//! cargo bench --package keyscript-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyscript_core::engine::KeySequencer;
use keyscript_core::{HidKeyCode, HidReport, KeyTables, ModifierFlags};

// ── Representative inputs ─────────────────────────────────────────────────────

/// Key names from the start, middle and end of the keycode table.
const BENCH_KEY_NAMES: &[&str] = &[
    "a", "z", "1", "0", "enter", "esc", "space", "/", "f1", "f12", "home", "up", "app",
];

/// Script tokens that hit and miss the alias table.
const BENCH_SCRIPT_TOKENS: &[&str] = &[
    "GUI", "WINDOWS", "CTRL", "ENTER", "UPARROW", "F5", "MENU", "r", "zzzz",
];

const BENCH_TEXT: &str = "Hello, World! The quick brown fox jumps over the lazy dog 0123456789.";

// ── Benchmarks: single-token resolution ───────────────────────────────────────

fn bench_resolve_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_single");

    // Best case (first table entry) and worst case (last entry)
    for name in ["a", "app", "~"] {
        group.bench_with_input(BenchmarkId::new("token", name), &name, |b, &name| {
            b.iter(|| KeySequencer::resolve_single(black_box(name)))
        });
    }

    group.bench_function("batch_13", |b| {
        b.iter(|| {
            BENCH_KEY_NAMES
                .iter()
                .map(|&name| KeySequencer::resolve_single(black_box(name)).is_ok())
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("text_chars", |b| {
        b.iter(|| {
            black_box(BENCH_TEXT)
                .chars()
                .filter(|c| KeySequencer::resolve_single(&c.to_string()).is_ok())
                .count()
        })
    });

    group.finish();
}

// ── Benchmarks: script token normalisation ────────────────────────────────────

fn bench_script_alias(c: &mut Criterion) {
    let mut group = c.benchmark_group("script_alias");

    group.bench_function("normalize_batch_9", |b| {
        b.iter(|| {
            BENCH_SCRIPT_TOKENS
                .iter()
                .map(|&t| KeyTables::normalize_script_token(black_box(t)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("resolve_combo_gui_r", |b| {
        b.iter(|| KeySequencer::resolve_combo(black_box(&["gui", "r"])))
    });

    group.finish();
}

// ── Benchmarks: report encoding ───────────────────────────────────────────────

fn bench_report_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_codec");
    let report = HidReport::press(ModifierFlags::LEFT_CTRL | ModifierFlags::LEFT_SHIFT, HidKeyCode::Escape);
    let bytes = report.to_bytes();

    group.bench_function("to_bytes", |b| b.iter(|| black_box(report).to_bytes()));
    group.bench_function("from_bytes", |b| {
        b.iter(|| HidReport::from_bytes(black_box(&bytes)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_single,
    bench_script_alias,
    bench_report_codec,
);
criterion_main!(benches);
