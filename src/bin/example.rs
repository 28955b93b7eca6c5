//! FDM Solver Example - Slab, Wall and Shell Panel

use anyhow::{Context, Result};
use fdm_solver::mesh::classify;
use fdm_solver::prelude::*;

const WALL: &str = r#"{
    "name": "Wall W1",
    "object_type": "shield",
    "geometry": {"thickness": 15, "width": 6.0, "height": 3.0},
    "material": {"E": 30, "v": 0.2},
    "loads_plate": null,
    "loads_shield": {
        "x_direction": {"left": 0.0, "right": 0.0, "top": 20.0, "bottom": 0.0},
        "y_direction": {"left": 0.0, "right": 0.0, "top": -50.0, "bottom": 0.0}
    },
    "density": 0.25,
    "supports": {"left": 0, "right": 0, "top": 0, "bottom": 2}
}"#;

fn print_legend(mesh: &Mesh) {
    for y in 0..mesh.ny() {
        let row: String = (0..mesh.nx())
            .map(|x| classify(mesh, x, y).letter())
            .collect();
        println!("  {}", row);
    }
}

fn print_extremes(label: &str, field: &Field, scale: f64, unit: &str) {
    let e = FieldExtremes::of(field);
    println!(
        "  {:<4} min {:>10.3}{}, max {:>10.3}{}, |max| at {:?}",
        label,
        e.min * scale,
        unit,
        e.max * scale,
        unit,
        e.max_abs_at
    );
}

fn main() -> Result<()> {
    env_logger::init();
    println!("=== FDM Solver Example ===\n");

    let options = AnalysisOptions::default().with_logging();

    // Slab hinged on three edges, clamped on the fourth
    //
    //        Fixed
    //     +---------+
    //     |         |  Hinged
    //     |  10 kPa |
    //     |         |
    //     +---------+
    //       Hinged
    let supports = Supports::all(Support::Hinged).with_edge(Edge::Top, Support::Fixed);
    let mut slab = Element::new(
        "Slab S1",
        ElementKind::Plate,
        Geometry::new(0.2, 4.0, 3.0),
        Material::concrete(),
        supports,
        0.5,
    )?
    .with_plate_load(PlateLoad::new(10_000.0));

    println!("{} node categories:", slab.name);
    print_legend(slab.mesh());

    slab.compute(&options).context("slab analysis failed")?;
    let plate = slab.results()?.plate().context("slab has no bending results")?;
    println!("\nPlate results:");
    print_extremes("w", &plate.w, 1000.0, "mm");
    print_extremes("Mxx", &plate.mxx, 1e-3, "kNm/m");
    print_extremes("Myy", &plate.myy, 1e-3, "kNm/m");
    print_extremes("σx", &plate.sigma_x, 1e-6, "MPa");

    // Wall from a saved definition
    let mut wall = Element::from_json(WALL).context("invalid wall definition")?;
    wall.compute(&options).context("wall analysis failed")?;
    let shield = wall.results()?.shield().context("wall has no membrane results")?;
    println!("\n{} ({}x{} nodes):", wall.name, wall.mesh().nx(), wall.mesh().ny());
    print_extremes("u", &shield.u, 1000.0, "mm");
    print_extremes("v", &shield.v, 1000.0, "mm");
    print_extremes("Nxx", &shield.nxx, 1e-3, "kN/m");
    print_extremes("Nyy", &shield.nyy, 1e-3, "kN/m");
    print_extremes("Nxy", &shield.nxy, 1e-3, "kN/m");

    // Shell panel: the same wall with wind pressure
    let mut panel = Element::new(
        "Panel P1",
        ElementKind::Shell,
        *wall.geometry(),
        wall.material,
        Supports::all(Support::Fixed).with_edge(Edge::Top, Support::Free),
        wall.density(),
    )?
    .with_plate_load(PlateLoad::new(800.0))
    .with_shield_loads(wall.shield_loads);

    panel.compute(&options).context("panel analysis failed")?;
    let results = panel.results()?;
    println!("\n{} surface stresses:", panel.name);
    print_extremes("σx", results.sigma_x(), 1e-6, "MPa");
    print_extremes("σy", results.sigma_y(), 1e-6, "MPa");
    print_extremes("σvm", &results.von_mises(), 1e-6, "MPa");

    // Unstable supports are refused
    let mut loose = panel.clone();
    loose.supports = Supports::all(Support::Free).with_edge(Edge::Left, Support::Hinged);
    if let Err(e) = loose.compute(&options) {
        println!("\n{}: {}", loose.name, e);
    }

    println!("\n=== Analysis Complete ===");
    Ok(())
}
