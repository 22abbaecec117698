//! # Camera Page Toggle Benchmark
//!
//! Per-tick cost of the toggle: two field reads and a comparison on the
//! steady path, plus one overlay write when the book flips state.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_core::{shared, Binding, Book, OverlayObject};
use folio_ui::CameraPageToggle;

fn bench_steady_tick(c: &mut Criterion) {
    let book = shared(Book::opened_at(3));
    let page = shared(OverlayObject::new("camera_page", false));
    let mut toggle = CameraPageToggle::new(Some(Binding::new(&page))).with_book(Binding::new(&book));

    c.bench_function("toggle_tick_unchanged", |b| {
        b.iter(|| black_box(toggle.tick()));
    });
}

fn bench_flipping_tick(c: &mut Criterion) {
    let book = shared(Book::new());
    let page = shared(OverlayObject::new("camera_page", false));
    let mut toggle = CameraPageToggle::new(Some(Binding::new(&page))).with_book(Binding::new(&book));
    let mut dragging = false;

    c.bench_function("toggle_tick_flip", |b| {
        b.iter(|| {
            dragging = !dragging;
            if dragging {
                book.write().begin_drag();
            } else {
                book.write().end_drag();
            }
            black_box(toggle.tick())
        });
    });
}

fn bench_inert_tick(c: &mut Criterion) {
    let page = shared(OverlayObject::new("camera_page", true));
    let mut toggle: CameraPageToggle = CameraPageToggle::new(Some(Binding::new(&page)));

    c.bench_function("toggle_tick_inert", |b| {
        b.iter(|| black_box(toggle.tick()));
    });
}

criterion_group!(benches, bench_steady_tick, bench_flipping_tick, bench_inert_tick);
criterion_main!(benches);
