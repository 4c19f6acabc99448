// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_event::path::{PathEntry, visible_path};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// A chain of `len` entries where every eighth pair brackets a closed region.
fn marked_chain(len: u32) -> Vec<PathEntry<u32>> {
    (0..len)
        .map(|i| match i % 8 {
            2 => PathEntry::closed_slot(i),
            5 => PathEntry::closed_root(i),
            _ => PathEntry::new(i),
        })
        .collect()
}

fn bench_visible_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_path/marked");

    for len in [16u32, 256, 4_096] {
        let chain = marked_chain(len);
        group.throughput(Throughput::Elements(u64::from(len)));

        // View from the far end: the locate scan is short and the lower scan
        // covers nearly the whole chain.
        group.bench_with_input(BenchmarkId::new("from_tail", len), &chain, |b, chain| {
            b.iter(|| black_box(visible_path(chain, len - 1)));
        });

        // View from the head: the locate scan walks the whole chain first.
        group.bench_with_input(BenchmarkId::new("from_head", len), &chain, |b, chain| {
            b.iter(|| black_box(visible_path(chain, 0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visible_path);
criterion_main!(benches);
