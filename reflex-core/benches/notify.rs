//! Notification fan-out benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::Map;

use reflex_core::dom::Node;
use reflex_core::reactive::{effect, reactive};
use reflex_core::{View, ViewConfig};

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify");

    for subscribers in [1usize, 16, 256] {
        let data = reactive(Map::new());
        data.set("x", 0);
        for _ in 0..subscribers {
            let d = data.clone();
            effect(move || {
                black_box(d.get("x"));
            });
        }

        group.bench_with_input(BenchmarkId::from_parameter(subscribers), &data, |b, data| {
            let mut n = 0u64;
            b.iter(|| {
                n += 1;
                data.set("x", n);
            });
        });
    }

    group.finish();
}

fn bench_mount(c: &mut Criterion) {
    c.bench_function("mount_100_interpolations", |b| {
        b.iter(|| {
            let root = (0..100).fold(Node::element("ul"), |list, _| {
                list.with_child(Node::element("li").with_text("{{ item }}"))
            });
            black_box(View::mount(ViewConfig::new("ul").with_property("item", "x"), root))
        });
    });
}

criterion_group!(benches, bench_fan_out, bench_mount);
criterion_main!(benches);
