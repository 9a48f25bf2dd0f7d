// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_gradient` construction and backend realization.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use peniko::Color;

use understory_gradient::{GradientDirection, GradientRealizer, LinearGradientBrush, MatrixOrder};
use understory_gradient_backends::{AnyRealizer, BackendKind, RealizerConfig};
use understory_gradient_svg::SvgRealizer;
use understory_gradient_vello_cpu::VelloCpuRealizer;
use understory_gradient_web_canvas::WebCanvasRealizer;

/// Colors and offsets in reverse offset order, so construction has to sort.
fn reversed_stops(n: usize) -> (Vec<Color>, Vec<f32>) {
    let mut colors = Vec::with_capacity(n);
    let mut offsets = Vec::with_capacity(n);
    for i in (0..n).rev() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "stop counts in these benches stay far below 256"
        )]
        let v = (i * 255 / n.max(1)) as u8;
        colors.push(Color::from_rgba8(v, 255 - v, 128, 255));
        #[allow(
            clippy::cast_precision_loss,
            reason = "stop counts in these benches are small"
        )]
        offsets.push(i as f32 / n as f32);
    }
    (colors, offsets)
}

fn transformed_brush(stops: usize) -> LinearGradientBrush {
    let (colors, offsets) = reversed_stops(stops);
    let mut brush = LinearGradientBrush::from_rect_with_stops(
        Rect::new(0.0, 0.0, 256.0, 64.0),
        &colors,
        &offsets,
        GradientDirection::ForwardDiagonal,
    )
    .unwrap();
    brush.rotate(20.0);
    brush.scale_with_order(1.5, 0.75, MatrixOrder::Append);
    brush
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient/construct");
    for n in [2_usize, 4, 16, 64] {
        let (colors, offsets) = reversed_stops(n);
        group.bench_function(BenchmarkId::new("with_stops_reversed", n), |b| {
            b.iter(|| {
                LinearGradientBrush::with_stops(
                    black_box((0.0, 0.0)),
                    black_box((100.0, 0.0)),
                    black_box(&colors),
                    black_box(&offsets),
                )
                .unwrap()
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("gradient/transform");
    group.bench_function("rotate_translate_append", |b| {
        let mut brush = transformed_brush(2);
        b.iter(|| {
            brush.rotate(black_box(1.0));
            brush.translate_with_order(black_box(0.5), 0.0, MatrixOrder::Append);
        });
    });
    group.finish();
}

fn bench_realize(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient/realize");
    for n in [2_usize, 16] {
        let brush = transformed_brush(n);
        group.bench_function(BenchmarkId::new("vello_cpu", n), |b| {
            b.iter(|| VelloCpuRealizer.realize(black_box(&brush)).unwrap());
        });
        group.bench_function(BenchmarkId::new("svg", n), |b| {
            b.iter(|| SvgRealizer.realize(black_box(&brush)).unwrap());
        });
        group.bench_function(BenchmarkId::new("web_canvas", n), |b| {
            let realizer = WebCanvasRealizer::default();
            b.iter(|| realizer.realize(black_box(&brush)).unwrap());
        });
        for kind in BackendKind::ALL {
            let realizer = AnyRealizer::new(RealizerConfig::default().with_backend(kind));
            group.bench_function(BenchmarkId::new(format!("dispatch/{kind}"), n), |b| {
                b.iter(|| realizer.realize(black_box(&brush)).unwrap());
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_realize);
criterion_main!(benches);
