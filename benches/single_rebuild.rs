// this_file: benches/single_rebuild.rs

//! Single generator rebuild benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use halo::{Color32, MemoryHost, OutlineConfig, OutlineGenerator, Vec3, Vertex};

/// Two triangles per glyph quad, laid out on a line like a short label.
fn label_mesh(glyphs: usize) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(glyphs * 6);
    for glyph in 0..glyphs {
        let x = glyph as f32 * 12.0;
        let corners = [
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(x + 10.0, 0.0, 0.0),
            Vec3::new(x + 10.0, 16.0, 0.0),
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(x + 10.0, 16.0, 0.0),
            Vec3::new(x, 16.0, 0.0),
        ];
        vertices.extend(
            corners
                .iter()
                .map(|&position| Vertex::new(position, Color32::WHITE)),
        );
    }
    vertices
}

fn bench_default_outline(c: &mut Criterion) {
    let mut host = MemoryHost::new(label_mesh(32));
    let mut generator = OutlineGenerator::default();

    c.bench_function("default_outline_rebuild", |b| {
        b.iter(|| black_box(generator.modify_mesh(black_box(&mut host))));
    });
}

fn bench_outline_counts(c: &mut Criterion) {
    let mesh = label_mesh(32);

    for outline_count in [3u32, 8, 32, 100] {
        let config = OutlineConfig {
            outline_count,
            ..OutlineConfig::default()
        };
        let mut host = MemoryHost::new(mesh.clone());
        let mut generator = OutlineGenerator::new(config).unwrap();

        c.bench_with_input(
            BenchmarkId::new("outline_count_rebuild", outline_count),
            &outline_count,
            |b, _| {
                b.iter(|| black_box(generator.modify_mesh(black_box(&mut host))));
            },
        );
    }
}

fn bench_frame_poll(c: &mut Criterion) {
    let mut host = MemoryHost::new(label_mesh(8)).with_ancestors(
        (0..8)
            .map(|id| halo::AncestorOpacity::new(id, 0.9))
            .collect(),
    );
    let mut generator = OutlineGenerator::default();
    generator.on_enable(&mut host);

    c.bench_function("steady_frame_poll", |b| {
        b.iter(|| black_box(generator.update(black_box(&mut host))));
    });
}

criterion_group!(
    benches,
    bench_default_outline,
    bench_outline_counts,
    bench_frame_poll
);
criterion_main!(benches);
