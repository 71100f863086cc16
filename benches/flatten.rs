use criterion::{black_box, criterion_group, criterion_main, Criterion};

use flatten_pen::{FlattenConfig, FlattenPen, PathConsumer, PathStorage, PointD};

fn circle(storage: &mut PathStorage, r: f64) {
    let k = 0.5522847498 * r;
    let pt = PointD::new;
    storage.move_to(pt(r, 0.0)).unwrap();
    storage.curve_to(pt(r, k), pt(k, r), pt(0.0, r)).unwrap();
    storage.curve_to(pt(-k, r), pt(-r, k), pt(-r, 0.0)).unwrap();
    storage.curve_to(pt(-r, -k), pt(-k, -r), pt(0.0, -r)).unwrap();
    storage.curve_to(pt(k, -r), pt(r, -k), pt(r, 0.0)).unwrap();
    storage.close_path().unwrap();
}

fn bench_flatten(c: &mut Criterion) {
    let mut glyph = PathStorage::new();
    circle(&mut glyph, 500.0);
    circle(&mut glyph, 300.0);

    for len in [1.0, 5.0, 25.0] {
        c.bench_function(&format!("flatten_circles_{len}"), |b| {
            b.iter(|| {
                let mut out = PathStorage::new();
                let config = FlattenConfig::new(len).with_segment_lines(true);
                let mut pen = FlattenPen::new(&mut out, config).unwrap();
                glyph.replay(&mut pen).unwrap();
                black_box(out.len())
            })
        });
    }
}

criterion_group!(benches, bench_flatten);
criterion_main!(benches);
