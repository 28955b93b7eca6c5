//! Benchmarks for FDM solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fdm_solver::analysis::{assemble_plate, assemble_shield};
use fdm_solver::prelude::*;

fn create_slab(size: f64, density: f64) -> Element {
    Element::new(
        "Slab",
        ElementKind::Plate,
        Geometry::new(0.2, size, size),
        Material::concrete(),
        Supports::all(Support::Hinged),
        density,
    )
    .unwrap()
    .with_plate_load(PlateLoad::new(10_000.0))
}

fn create_wall(width: f64, height: f64, density: f64) -> Element {
    Element::new(
        "Wall",
        ElementKind::Shield,
        Geometry::new(0.15, width, height),
        Material::concrete(),
        Supports::all(Support::Free).with_edge(Edge::Bottom, Support::Fixed),
        density,
    )
    .unwrap()
    .with_shield_loads(
        ShieldLoads::on_edge(LoadDirection::Vertical, Edge::Top, -50_000.0)
            .with_load(LoadDirection::Horizontal, Edge::Top, 10_000.0),
    )
}

fn benchmark_plate_assembly(c: &mut Criterion) {
    let mesh = Mesh::new(41, 41, 0.1).unwrap();
    let supports = Supports::all(Support::Fixed).with_edge(Edge::Top, Support::Free);
    c.bench_function("plate_assembly_41x41", |b| {
        b.iter(|| black_box(assemble_plate(&mesh, &supports, 0.2, 1e-6).unwrap()))
    });
}

fn benchmark_shield_assembly(c: &mut Criterion) {
    let mesh = Mesh::new(31, 31, 0.1).unwrap();
    let supports = Supports::all(Support::Free).with_edge(Edge::Bottom, Support::Fixed);
    let loads = ShieldLoads::on_edge(LoadDirection::Vertical, Edge::Top, 1000.0);
    c.bench_function("shield_assembly_31x31", |b| {
        b.iter(|| {
            black_box(assemble_shield(&mesh, &Material::concrete(), &loads, &supports, 0.2).unwrap())
        })
    });
}

fn benchmark_small_slab(c: &mut Criterion) {
    c.bench_function("slab_11x11_compute", |b| {
        b.iter(|| {
            let mut slab = create_slab(5.0, 0.5);
            slab.compute(&AnalysisOptions::default()).unwrap();
            black_box(&slab);
        })
    });
}

fn benchmark_medium_slab(c: &mut Criterion) {
    c.bench_function("slab_21x21_compute", |b| {
        b.iter(|| {
            let mut slab = create_slab(5.0, 0.25);
            slab.compute(&AnalysisOptions::default()).unwrap();
            black_box(&slab);
        })
    });
}

fn benchmark_wall(c: &mut Criterion) {
    c.bench_function("wall_13x7_compute", |b| {
        b.iter(|| {
            let mut wall = create_wall(6.0, 3.0, 0.5);
            wall.compute(&AnalysisOptions::default()).unwrap();
            black_box(&wall);
        })
    });
}

criterion_group!(
    benches,
    benchmark_plate_assembly,
    benchmark_shield_assembly,
    benchmark_small_slab,
    benchmark_medium_slab,
    benchmark_wall,
);

criterion_main!(benches);
