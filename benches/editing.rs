//! Benchmarks for buffer editing and layout negotiation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nyan::editor::{Direction, LineBuffer};
use nyan::ui::layout::Chrome;
use ratatui::layout::Rect;

fn large_buffer() -> LineBuffer {
    let lines: Vec<String> = (0..10_000)
        .map(|i| format!("line {i}: the quick brown fox jumps over the lazy cat"))
        .collect();
    LineBuffer::from_lines(&lines)
}

fn bench_typing(c: &mut Criterion) {
    c.bench_function("type_line_mid_document", |b| {
        b.iter_batched(
            || {
                let mut buf = large_buffer();
                buf.move_to(5_000, 10);
                buf
            },
            |mut buf| {
                for ch in black_box("meow meow meow").chars() {
                    buf.insert_char(ch);
                }
                buf.insert_newline();
                buf
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_backspace_join(c: &mut Criterion) {
    c.bench_function("backspace_join_lines", |b| {
        b.iter_batched(
            || {
                let mut buf = large_buffer();
                buf.move_to(5_000, 0);
                buf
            },
            |mut buf| {
                for _ in 0..100 {
                    buf.delete_backward();
                }
                buf
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_scroll_through(c: &mut Criterion) {
    let mut buf = large_buffer();
    c.bench_function("scroll_down_page", |b| {
        b.iter(|| {
            buf.move_to(0, 0);
            for _ in 0..50 {
                buf.move_cursor(Direction::Down);
                buf.reclamp_scroll(black_box(20));
            }
        })
    });
}

fn bench_negotiate(c: &mut Criterion) {
    let chrome = Chrome::default();
    c.bench_function("negotiate_layout", |b| {
        b.iter(|| chrome.negotiate(black_box(Rect::new(0, 0, 120, 40)), black_box(10_000)))
    });
}

criterion_group!(
    benches,
    bench_typing,
    bench_backspace_join,
    bench_scroll_through,
    bench_negotiate
);
criterion_main!(benches);
