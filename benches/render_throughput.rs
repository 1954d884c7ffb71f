//! Rendering throughput benchmarks
//!
//! Measures tree construction plus rendering with varying:
//! - Item counts (1, 10, 100, 1000)
//! - Output modes (single line, indented)
//!
//! Run benchmarks: `cargo bench --bench render_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use plume::prelude::*;
use std::hint::black_box;

/// A page with `count` list entries, each carrying a link and some text.
fn page_with_items(count: usize) -> Node {
    Node::group(vec![
        doctype(),
        html(vec![
            head(vec![title("Benchmark"), meta(vec![charset("utf-8")])]),
            body(vec![
                h1(vec![Node::text("Entries")]),
                ul(vec![Node::for_each(0..count, |index| {
                    li(vec![
                        span(vec![Node::text(format!("Entry {index}"))]),
                        Node::text(" & more <soon>"),
                    ])
                })]),
            ]),
        ]),
    ])
}

fn benchmark_render_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_throughput");

    for count in [1usize, 10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("single_line", count), &count, |b, &count| {
            b.iter(|| black_box(page_with_items(count).render()));
        });

        group.bench_with_input(BenchmarkId::new("indented", count), &count, |b, &count| {
            b.iter(|| {
                black_box(page_with_items(count).render_indented(Indentation::Spaces(4)))
            });
        });
    }

    group.finish();
}

fn benchmark_prebuilt_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("prebuilt_tree");

    let page = page_with_items(100);
    group.bench_function("render_only", |b| {
        b.iter(|| black_box(page.render()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_throughput,
    benchmark_prebuilt_tree
);
criterion_main!(benches);
