// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks for the escaping grammar and the two name representations.
//!
//! Component shapes simulate realistic name content:
//! - plain:   nothing to mask (the common case)
//! - dotted:  literal delimiters in every component
//! - escaped: dense with escape characters (worst case for the grammar)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nomen::{join_masked, mask, split_masked, unmask, ArrayName, Delimiter, Name, StringName};

// ============================================================================
// COMPONENT SHAPES
// ============================================================================

/// Component content profiles to benchmark
struct Shape {
    name: &'static str,
    component: &'static str,
}

const SHAPES: &[Shape] = &[
    Shape {
        name: "plain",
        component: "wwwproxy",
    },
    Shape {
        name: "dotted",
        component: "fau.cs.oss",
    },
    Shape {
        name: "escaped",
        component: "c\\s\\lab",
    },
];

/// Name widths from a short hostname to a deep hierarchy
const COMPONENT_COUNTS: &[usize] = &[4, 16, 64];

fn components(shape: &Shape, count: usize) -> Vec<String> {
    vec![shape.component.to_string(); count]
}

// ============================================================================
// GRAMMAR PRIMITIVES
// ============================================================================

fn bench_masking(c: &mut Criterion) {
    let mut group = c.benchmark_group("masking");

    for shape in SHAPES {
        group.throughput(Throughput::Bytes(shape.component.len() as u64));
        group.bench_with_input(BenchmarkId::new("mask", shape.name), shape, |b, shape| {
            b.iter(|| mask(black_box(shape.component), '.'));
        });

        let masked = mask(shape.component, '.');
        group.throughput(Throughput::Bytes(masked.len() as u64));
        group.bench_with_input(BenchmarkId::new("unmask", shape.name), &masked, |b, masked| {
            b.iter(|| unmask(black_box(masked), '.').unwrap());
        });
    }

    group.finish();
}

fn bench_splitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitting");

    for shape in SHAPES {
        for &count in COMPONENT_COUNTS {
            let text = join_masked(&components(shape, count), '.');
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(shape.name, count),
                &text,
                |b, text| {
                    b.iter(|| split_masked(black_box(text), '.').unwrap());
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// REPRESENTATIONS
// ============================================================================

fn bench_data_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_string");

    for shape in SHAPES {
        for &count in COMPONENT_COUNTS {
            let array = ArrayName::with_default_delimiter(components(shape, count));
            group.bench_with_input(
                BenchmarkId::new(format!("array/{}", shape.name), count),
                &array,
                |b, name| {
                    b.iter(|| name.as_data_string().unwrap());
                },
            );

            let string = StringName::from_components(&components(shape, count), Delimiter::default());
            group.bench_with_input(
                BenchmarkId::new(format!("string/{}", shape.name), count),
                &string,
                |b, name| {
                    b.iter(|| name.as_data_string().unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_component_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_access");

    for &count in COMPONENT_COUNTS {
        let parts = components(&SHAPES[1], count);
        let array = ArrayName::with_default_delimiter(parts.clone());
        let string = StringName::from_components(&parts, Delimiter::default());

        // The array form indexes directly; the string form re-parses. This
        // group quantifies the gap callers pay for the compact backing.
        group.bench_with_input(BenchmarkId::new("array", count), &array, |b, name| {
            b.iter(|| name.component(black_box(count / 2)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("string", count), &string, |b, name| {
            b.iter(|| name.component(black_box(count / 2)).unwrap());
        });
    }

    group.finish();
}

fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_code");

    for &count in COMPONENT_COUNTS {
        let array = ArrayName::with_default_delimiter(components(&SHAPES[0], count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &array, |b, name| {
            b.iter(|| name.hash_code().unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_masking,
    bench_splitting,
    bench_data_string,
    bench_component_access,
    bench_hashing
);
criterion_main!(benches);
