// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use canopy_dispatch::target::{EventTarget, Listener};
use canopy_event::event::{Event, EventInit};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn target_with_listeners(count: usize) -> (EventTarget<Event<u32>>, Rc<Cell<u64>>) {
    let target: EventTarget<Event<u32>> = EventTarget::new();
    let hits = Rc::new(Cell::new(0u64));
    for _ in 0..count {
        let hits = Rc::clone(&hits);
        let listener: Listener<Event<u32>> = Rc::new(move |_target, _event| {
            hits.set(hits.get() + 1);
        });
        target.add_event_listener("tick", listener);
    }
    (target, hits)
}

fn bench_dispatch_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/fanout");

    for listeners in [1usize, 8, 64, 512] {
        let (target, _hits) = target_with_listeners(listeners);
        group.throughput(Throughput::Elements(listeners as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(listeners),
            &target,
            |b, target| {
                b.iter(|| {
                    let mut event = Event::new("tick", EventInit::default());
                    black_box(target.dispatch_event(&mut event));
                });
            },
        );
    }

    group.finish();
}

fn bench_dispatch_miss(c: &mut Criterion) {
    // Dispatching a type with no sequence is the hot no-op path for hosts
    // that fire events unconditionally.
    let (target, _hits) = target_with_listeners(8);

    c.bench_function("dispatch/unregistered_type", |b| {
        b.iter(|| {
            let mut event = Event::new("idle", EventInit::default());
            black_box(target.dispatch_event(&mut event));
        });
    });
}

criterion_group!(benches, bench_dispatch_fanout, bench_dispatch_miss);
criterion_main!(benches);
