use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scanfill::{
    draw_polygon, shapes, BlendMode, ColorF, ColorImage, Gradient, PointF, RasterizerScanline,
    Rgba8,
};

const W: u32 = 800;
const H: u32 = 600;

fn bench_solid_rect(c: &mut Criterion) {
    let rect = shapes::rect(50.0, 50.0, 700.0, 500.0);
    let color = ColorF::new(1.0, 0.0, 0.0, 0.75);
    let mut img = ColorImage::new_filled(W, H, Rgba8::WHITE);
    c.bench_function("fill_solid_rect_700x500", |b| {
        b.iter(|| draw_polygon(&mut img, black_box(&rect), color, None, BlendMode::Normal))
    });
}

fn bench_radial_circle(c: &mut Criterion) {
    let circle = shapes::circle(400.0, 300.0, 250.0, 128);
    let g = Gradient::radial(PointF::new(400.0, 300.0), 250.0)
        .with_stop(0.0, ColorF::new(0.0, 0.0, 1.0, 1.0))
        .with_stop(0.5, ColorF::new(0.0, 1.0, 0.0, 0.8))
        .with_stop(1.0, ColorF::new(0.0, 0.0, 0.0, 0.0));
    let mut img = ColorImage::new_filled(W, H, Rgba8::WHITE);
    c.bench_function("fill_radial_circle_r250", |b| {
        b.iter(|| {
            draw_polygon(
                &mut img,
                black_box(&circle),
                ColorF::BLACK,
                Some(&g),
                BlendMode::Overlay,
            )
        })
    });
}

fn bench_star_spans(c: &mut Criterion) {
    let star = shapes::star(400.0, 300.0, 290.0, 120.0, 24);
    c.bench_function("rasterize_star_24_spans", |b| {
        b.iter(|| {
            let mut ras = RasterizerScanline::new(W, H);
            ras.add_polygon(black_box(&star));
            let mut covered = 0i64;
            ras.for_each_span(|_, x1, x2| covered += (x2 - x1) as i64);
            black_box(covered)
        })
    });
}

fn bench_demo_scene(c: &mut Criterion) {
    c.bench_function("render_demo_scene_800x600", |b| {
        b.iter(|| black_box(scanfill::render_demo_scene(W, H)))
    });
}

criterion_group!(
    fill_benches,
    bench_solid_rect,
    bench_radial_circle,
    bench_star_spans,
    bench_demo_scene
);
criterion_main!(fill_benches);
