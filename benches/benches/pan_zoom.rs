// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_gesture::PointerId;
use understory_pan_zoom::{Observer, PanZoomEngine, TransformChange};

struct Sink(u64);

impl Observer for Sink {
    fn on_transform_changed(&mut self, change: &TransformChange) {
        self.0 = self.0.wrapping_add(change.transform.scale.to_bits());
    }
}

fn sized_engine(observers: usize) -> PanZoomEngine {
    let mut engine = PanZoomEngine::default();
    for _ in 0..observers {
        engine.add_observer(Box::new(Sink(0)));
    }
    engine.set_content_size(Size::new(4_000.0, 3_000.0), false);
    engine.set_container_size(Size::new(800.0, 600.0), false);
    engine.zoom_to(2.0, false);
    engine
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_pan_zoom");
    group.sample_size(50);

    for &observers in &[0_usize, 1, 8] {
        group.bench_function(format!("drag_256_moves(observers={observers})"), |b| {
            b.iter_batched(
                || sized_engine(observers),
                |mut engine| {
                    let finger = PointerId(1);
                    engine.on_touch_begin(finger, Point::new(400.0, 300.0), 0);
                    for i in 1..=256_u32 {
                        let x = 400.0 + f64::from(i % 64) * 3.0;
                        let y = 300.0 - f64::from(i % 32) * 2.0;
                        engine.on_touch_move(finger, Point::new(x, y), u64::from(i) * 8);
                    }
                    engine.on_touch_end(finger, Point::new(400.0, 300.0), 4_000);
                    black_box(engine.transform());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("pinch_256_moves(observers={observers})"), |b| {
            b.iter_batched(
                || sized_engine(observers),
                |mut engine| {
                    engine.on_touch_begin(PointerId(1), Point::new(300.0, 300.0), 0);
                    engine.on_touch_begin(PointerId(2), Point::new(500.0, 300.0), 0);
                    for i in 1..=256_u32 {
                        let spread = 100.0 + f64::from(i % 50) * 4.0;
                        engine.on_touch_move(
                            PointerId(2),
                            Point::new(300.0 + spread, 300.0),
                            u64::from(i) * 8,
                        );
                    }
                    engine.on_touch_end(PointerId(2), Point::new(500.0, 300.0), 4_000);
                    black_box(engine.transform());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("animated_zoom_to_completion", |b| {
        b.iter_batched(
            || sized_engine(1),
            |mut engine| {
                engine.zoom_to(3.0, true);
                let mut now = 0;
                while engine.advance(now) {
                    now += 4;
                }
                black_box(engine.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("fling_to_completion", |b| {
        b.iter_batched(
            || {
                let mut engine = sized_engine(1);
                let finger = PointerId(1);
                engine.on_touch_begin(finger, Point::new(700.0, 300.0), 0);
                for i in 1..=5_u32 {
                    let x = 700.0 - f64::from(i) * 30.0;
                    engine.on_touch_move(finger, Point::new(x, 300.0), u64::from(i) * 10);
                }
                engine.on_touch_end(finger, Point::new(520.0, 300.0), 60);
                engine
            },
            |mut engine| {
                let mut now = 60;
                while engine.advance(now) {
                    now += 4;
                }
                black_box(engine.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
