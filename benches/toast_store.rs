// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification store.
//!
//! Measures the performance of:
//! - Grouping active toasts into position buckets (runs on every redraw)
//! - Raising and removing toasts through the manager

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toasts::ui::notifications::{group_by_position, Manager, Position, ToastRequest};
use std::hint::black_box;

/// Builds a manager holding `count` toasts spread over every position.
fn populated_manager(count: usize) -> Manager {
    let mut manager = Manager::new();
    for (i, position) in Position::ALL.into_iter().cycle().take(count).enumerate() {
        manager.info(ToastRequest::new(format!("toast {i}")).position(position));
    }
    manager
}

/// Benchmark bucket grouping for growing lists.
fn bench_group_by_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_store");

    for count in [6, 60, 600] {
        let manager = populated_manager(count);
        group.bench_with_input(
            BenchmarkId::new("group_by_position", count),
            &manager,
            |b, manager| {
                b.iter(|| {
                    let buckets = group_by_position(black_box(manager.list()));
                    black_box(buckets.non_empty().count());
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a raise/remove cycle against a busy store.
fn bench_add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_store");
    let mut manager = populated_manager(60);

    group.bench_function("add_remove", |b| {
        b.iter(|| {
            let id = manager.success(ToastRequest::new("bench").position(Position::TopCenter));
            black_box(manager.remove(id));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_group_by_position, bench_add_remove);
criterion_main!(benches);
