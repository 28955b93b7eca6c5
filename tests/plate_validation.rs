use approx::assert_relative_eq;
use fdm_solver::prelude::*;

/// Unit square plate with `n` nodes per side, Dp = 1, q = 1
fn unit_plate(n: usize, supports: Supports, nu: f64) -> PlateResults {
    let mesh = Mesh::new(n, n, 1.0 / (n - 1) as f64).unwrap();
    compute_plate(&mesh, 1.0, 1.0, &supports, nu, 0.1, &AnalysisOptions::default()).unwrap()
}

#[test]
fn simply_supported_square_plate_matches_kirchhoff() {
    // w_max = 0.00406·q·a⁴/D
    let results = unit_plate(11, Supports::all(Support::Hinged), 0.3);
    assert_relative_eq!(results.w[(5, 5)], 0.00406, max_relative = 0.01);
    assert!(results.w[(0, 5)].abs() < 1e-12);
    assert!(results.w[(5, 10)].abs() < 1e-12);
}

#[test]
fn clamped_square_plate_matches_kirchhoff() {
    // w_max = 0.00126·q·a⁴/D
    let results = unit_plate(17, Supports::all(Support::Fixed), 0.3);
    assert_relative_eq!(results.w[(8, 8)], 0.00126, max_relative = 0.05);

    // clamped edges hog
    assert!(results.mxx[(0, 8)] < 0.0);
    assert!(results.mxx[(8, 8)] > 0.0);
}

#[test]
fn square_plate_is_fourfold_symmetric() {
    for supports in [
        Supports::all(Support::Hinged),
        Supports::all(Support::Fixed),
        Supports::new(Support::Hinged, Support::Hinged, Support::Fixed, Support::Fixed),
    ] {
        let n = 11;
        let results = unit_plate(n, supports, 0.2);
        let w = &results.w;
        let scale = w.amax();
        for y in 0..n {
            for x in 0..n {
                if supports.left == supports.top {
                    assert_relative_eq!(w[(x, y)], w[(y, x)], epsilon = 1e-9 * scale);
                }
                assert_relative_eq!(w[(x, y)], w[(n - 1 - x, y)], epsilon = 1e-9 * scale);
                assert_relative_eq!(w[(x, y)], w[(x, n - 1 - y)], epsilon = 1e-9 * scale);
            }
        }
    }
}

#[test]
fn free_plate_is_never_solved() {
    let mesh = Mesh::new(7, 7, 0.5).unwrap();
    let free = Supports::all(Support::Free);
    assert_eq!(free.bdof(), 0);

    let result = compute_plate(&mesh, 1e6, 1000.0, &free, 0.3, 0.2, &AnalysisOptions::default());
    assert!(matches!(result, Err(FDMError::Unstable(_))));

    // rigid body motion leaves the system singular
    let options = AnalysisOptions::default().without_stability_check();
    let result = compute_plate(&mesh, 1e6, 1000.0, &free, 0.3, 0.2, &options);
    assert!(matches!(result, Err(FDMError::SingularMatrix)));
}

#[test]
fn cantilever_plate_has_plausible_deflection() {
    let mesh = Mesh::new(9, 9, 0.5).unwrap();
    let supports = Supports::all(Support::Free).with_edge(Edge::Right, Support::Fixed);
    let (dp, q) = (0.2, 2000.0);
    let results = compute_plate(&mesh, dp, q, &supports, 0.3, 0.2, &AnalysisOptions::default()).unwrap();
    let w = &results.w;

    let centre = w[(4, 4)];
    assert!(centre.is_finite());

    // cantilever beam: q·L⁴/(8·Dp) at the free end
    let beam = q * 4.0_f64.powi(4) / (8.0 * dp);
    assert_relative_eq!(w[(0, 4)], beam, max_relative = 0.1);
    for y in 0..9 {
        assert!(w[(8, y)].abs() < 1e-9 * beam);
        for x in 0..8 {
            assert!(w[(x, y)] > w[(x + 1, y)]);
        }
    }
}

#[test]
fn zero_load_on_fixed_plate_gives_zero_fields() {
    let mesh = Mesh::new(8, 6, 0.25).unwrap();
    let results = compute_plate(
        &mesh,
        1e6,
        0.0,
        &Supports::all(Support::Fixed),
        0.2,
        0.2,
        &AnalysisOptions::default(),
    )
    .unwrap();
    for field in [&results.w, &results.mxx, &results.myy, &results.mxy, &results.sigma_x] {
        assert!(field.iter().all(|v| *v == 0.0));
    }
}

#[test]
fn result_fields_follow_mesh_shape() {
    let sizes = [5, 6, 10, 25];
    for &nx in &sizes {
        for &ny in &sizes {
            let mesh = Mesh::new(nx, ny, 0.2).unwrap();
            let results = compute_plate(
                &mesh,
                1e6,
                1000.0,
                &Supports::all(Support::Hinged),
                0.2,
                0.2,
                &AnalysisOptions::default(),
            )
            .unwrap();
            for field in [
                &results.w,
                &results.sigma_x,
                &results.sigma_y,
                &results.tau_xy,
                &results.mxx,
                &results.myy,
                &results.mxy,
            ] {
                assert_eq!(field.shape(), (nx, ny));
            }
        }
    }
}

#[test]
fn coarse_mesh_is_rejected() {
    assert!(matches!(
        Mesh::new(4, 9, 0.5),
        Err(FDMError::MeshTooCoarse { nx: 4, ny: 9 })
    ));
}
