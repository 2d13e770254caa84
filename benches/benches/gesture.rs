// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_gesture::velocity::VelocityTracker;

fn bench_velocity(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_gesture");

    for &max_samples in &[8_usize, 20, 64] {
        group.bench_function(format!("velocity_add_and_estimate(max={max_samples})"), |b| {
            let mut tracker = VelocityTracker::new(100, max_samples);
            let mut t = 0_u64;
            b.iter(|| {
                t += 4;
                let x = (t % 500) as f64;
                tracker.add(t, Point::new(x, x * 0.5));
                black_box(tracker.velocity())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_velocity);
criterion_main!(benches);
