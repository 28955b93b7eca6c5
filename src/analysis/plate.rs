//! Plate bending analysis

use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;

use super::differences::{self, Axis};
use super::{reshape, AnalysisOptions};
use crate::elements::{validate_poisson_ratio, Supports};
use crate::error::{FDMError, FDMResult};
use crate::math::{self, Mat, SparseMatrixBuilder, Vec as FDVec};
use crate::mesh::{classify, inward, Mesh};
use crate::results::{Field, FieldExtremes, PlateResults};
use crate::stencil::{plate_stencil, Stencil};

/// Assemble the plate system for a scaled load `load = q·h⁴/Dp`.
///
/// One row per mesh node at its row-major index.
pub fn assemble_plate(
    mesh: &Mesh,
    supports: &Supports,
    nu: f64,
    load: f64,
) -> FDMResult<(Mat, FDVec)> {
    let n = mesh.node_count();

    // Rows are independent of each other
    let stencils: Vec<Stencil> = (0..n)
        .into_par_iter()
        .map(|i| {
            let (x, y) = mesh.position(i);
            plate_stencil(classify(mesh, x, y), inward(mesh, x, y), supports, nu, load)
        })
        .collect();

    let mut builder = SparseMatrixBuilder::new(n);
    let mut p = FDVec::zeros(n);

    for (row, stencil) in stencils.iter().enumerate() {
        let (x, y) = mesh.position(row);
        builder.add_stencil(row, stencil, |dx, dy, _| {
            mesh.offset(x, y, dx, dy).map(|(tx, ty)| mesh.index(tx, ty))
        })?;
        p[row] = stencil.rhs;
    }

    let empty = builder.empty_rows();
    if !empty.is_empty() {
        return Err(FDMError::AnalysisFailed(format!(
            "plate system has {} empty rows, first at node {:?}",
            empty.len(),
            mesh.position(empty[0])
        )));
    }

    debug!(
        "Plate system: {} unknowns, {} coefficients, sparsity {:.4}",
        n,
        builder.nnz(),
        builder.sparsity()
    );

    Ok((builder.to_dense(), p))
}

/// Bending analysis of a plate under uniform transverse load.
///
/// * `flexural_stiffness` - Dp = E·t³/(12(1 - v²)) in N·m
/// * `pressure` - q in N/m²
pub fn compute_plate(
    mesh: &Mesh,
    flexural_stiffness: f64,
    pressure: f64,
    supports: &Supports,
    nu: f64,
    thickness: f64,
    options: &AnalysisOptions,
) -> FDMResult<PlateResults> {
    if !(flexural_stiffness.is_finite() && flexural_stiffness > 0.0) {
        return Err(FDMError::InvalidInput(format!(
            "flexural stiffness must be positive, got {}",
            flexural_stiffness
        )));
    }
    if !(thickness.is_finite() && thickness > 0.0) {
        return Err(FDMError::InvalidGeometry(format!(
            "thickness must be positive, got {}",
            thickness
        )));
    }
    validate_poisson_ratio(nu)?;
    if !pressure.is_finite() {
        return Err(FDMError::InvalidInput(format!("plate load is not finite: {}", pressure)));
    }
    if options.check_stability {
        if let Err(e) = supports.check_stability() {
            warn!("Plate analysis refused: {}", e);
            return Err(e);
        }
    }

    info!(
        "Plate analysis: {}x{} nodes, h = {} m, q = {} N/m²",
        mesh.nx(),
        mesh.ny(),
        mesh.density(),
        pressure
    );
    let start = Instant::now();

    // Build and solve the system
    let h = mesh.density();
    let load = pressure * h.powi(4) / flexural_stiffness;
    let (a, p) = assemble_plate(mesh, supports, nu, load)?;
    debug!("Plate assembly took {:?}", start.elapsed());

    let solution = math::solve_dense(&a, &p, options.singular_tolerance)?;
    debug!("Plate solve finished after {:?}", start.elapsed());

    // moments are differenced from the rounded deflection
    let mut w = reshape(mesh, &solution, |x, y| mesh.index(x, y));
    options.round(&mut w);
    let results = reconstruct(mesh, w, flexural_stiffness, nu, thickness);

    info!(
        "Plate analysis finished in {:?}, max |w| = {:.6e} m",
        start.elapsed(),
        results.max_deflection()
    );
    if options.log {
        let m = FieldExtremes::of(&results.mxx);
        info!("  Mxx: min {:.4e}, max {:.4e} N·m/m", m.min, m.max);
        let m = FieldExtremes::of(&results.myy);
        info!("  Myy: min {:.4e}, max {:.4e} N·m/m", m.min, m.max);
    }

    Ok(results)
}

/// Moments and surface stresses from the deflection field
fn reconstruct(mesh: &Mesh, w: Field, dp: f64, nu: f64, thickness: f64) -> PlateResults {
    let h2 = mesh.density().powi(2);
    let section = thickness * thickness / 6.0;

    let mut mxx = mesh.zeros();
    let mut myy = mesh.zeros();
    let mut mxy = mesh.zeros();

    for y in 0..mesh.ny() {
        for x in 0..mesh.nx() {
            let wxx = differences::second(&w, x, y, Axis::X);
            let wyy = differences::second(&w, x, y, Axis::Y);
            let wxy = differences::mixed(&w, x, y);

            mxx[(x, y)] = -dp / h2 * (wxx + nu * wyy);
            myy[(x, y)] = -dp / h2 * (wyy + nu * wxx);
            mxy[(x, y)] = dp * (1.0 - nu) * wxy / h2;
        }
    }

    PlateResults {
        sigma_x: &mxx / section,
        sigma_y: &myy / section,
        tau_xy: &mxy / section,
        w,
        mxx,
        myy,
        mxy,
    }
}
