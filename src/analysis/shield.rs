//! Shield (membrane) analysis
//!
//! The displacement field lives on the extended grid: the real mesh plus a
//! ring of fictitious nodes that carries the traction conditions of free
//! edges. Unknown `(x, y, component)` sits at
//! `2 * mesh.extended_index(x, y) + component`.

use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;

use super::differences::{self, Axis};
use super::{reshape, AnalysisOptions};
use crate::elements::{Edge, Material, Supports};
use crate::error::{FDMError, FDMResult};
use crate::loads::{LoadDirection, ShieldLoads};
use crate::math::{DenseSolver, Mat, SparseMatrixBuilder, Vec as FDVec};
use crate::mesh::{classify_extended, classifier::boundary_edges, inward, ExtendedNode, Mesh};
use crate::results::{Field, ShieldResults};
use crate::stencil::shield::{equilibrium_rows, pin_rows, tie_rows, traction_rows};
use crate::stencil::{ShieldCoefficients, ShieldRows};

/// Equations of one extended node together with the node their offsets
/// are measured from
struct NodeRows {
    origin: (isize, isize),
    rows: ShieldRows,
}

fn is_restrained(supports: &Supports, vertical: Option<Edge>, horizontal: Option<Edge>) -> bool {
    [vertical, horizontal]
        .into_iter()
        .flatten()
        .any(|e| supports.on(e).is_restrained())
}

/// Corner nodes get one-sided differences pointing into the mesh
fn corner_steps(
    mesh: &Mesh,
    (x, y): (usize, usize),
    vertical: Option<Edge>,
    horizontal: Option<Edge>,
) -> Option<(isize, isize)> {
    match (vertical, horizontal) {
        (Some(_), Some(_)) => Some(inward(mesh, x, y)),
        _ => None,
    }
}

fn node_rows(
    mesh: &Mesh,
    c: &ShieldCoefficients,
    supports: &Supports,
    loads: &ShieldLoads,
    thickness: f64,
    x: isize,
    y: isize,
) -> NodeRows {
    match classify_extended(mesh, x, y) {
        ExtendedNode::OuterCorner => NodeRows {
            origin: (x, y),
            rows: pin_rows(),
        },
        ExtendedNode::Interior => NodeRows {
            origin: (x, y),
            rows: equilibrium_rows(c, None),
        },
        ExtendedNode::Boundary {
            vertical,
            horizontal,
        } => {
            let rows = if is_restrained(supports, vertical, horizontal) {
                pin_rows()
            } else {
                let corner = corner_steps(mesh, (x as usize, y as usize), vertical, horizontal);
                equilibrium_rows(c, corner)
            };
            NodeRows {
                origin: (x, y),
                rows,
            }
        }
        ExtendedNode::Ring { edge, anchor } => {
            let (vertical, horizontal) = boundary_edges(mesh, anchor.0, anchor.1);
            let rows = if is_restrained(supports, vertical, horizontal) {
                tie_rows(edge)
            } else {
                let corner = corner_steps(mesh, anchor, vertical, horizontal);
                traction_rows(c, edge, corner, loads.traction(edge), thickness, mesh.density())
            };
            NodeRows {
                origin: (anchor.0 as isize, anchor.1 as isize),
                rows,
            }
        }
    }
}

/// Rows of every extended node in index order
fn system_rows(
    mesh: &Mesh,
    material: &Material,
    loads: &ShieldLoads,
    supports: &Supports,
    thickness: f64,
) -> Vec<NodeRows> {
    let c = ShieldCoefficients::new(material);
    (0..mesh.extended_node_count())
        .into_par_iter()
        .map(|i| {
            let (x, y) = mesh.extended_position(i);
            node_rows(mesh, &c, supports, loads, thickness, x, y)
        })
        .collect()
}

fn load_vector(nodes: &[NodeRows]) -> FDVec {
    FDVec::from_iterator(
        2 * nodes.len(),
        nodes.iter().flat_map(|node| node.rows.iter().map(|row| row.rhs)),
    )
}

/// Assemble the shield system `(A, p)`, two rows per extended node
pub fn assemble_shield(
    mesh: &Mesh,
    material: &Material,
    loads: &ShieldLoads,
    supports: &Supports,
    thickness: f64,
) -> FDMResult<(Mat, FDVec)> {
    let nodes = system_rows(mesh, material, loads, supports, thickness);
    let n = 2 * nodes.len();
    let mut builder = SparseMatrixBuilder::new(n);

    for (i, node) in nodes.iter().enumerate() {
        let (ox, oy) = node.origin;
        for (component, row) in node.rows.iter().enumerate() {
            builder.add_stencil(2 * i + component, row, |dx, dy, target| {
                mesh.extended_offset(ox, oy, dx, dy).map(|k| 2 * k + target)
            })?;
        }
    }

    let empty = builder.empty_rows();
    if !empty.is_empty() {
        return Err(FDMError::AnalysisFailed(format!(
            "shield system has {} empty rows, first at extended node {:?}",
            empty.len(),
            mesh.extended_position(empty[0] / 2)
        )));
    }

    debug!(
        "Shield system: {} unknowns, {} coefficients, sparsity {:.4}",
        n,
        builder.nnz(),
        builder.sparsity()
    );

    Ok((builder.to_dense(), load_vector(&nodes)))
}

/// In-plane analysis of a shield under edge loads.
///
/// The horizontal and vertical load cases share one factorization and their
/// results are superposed.
pub fn compute_shield(
    mesh: &Mesh,
    elastic_modulus: f64,
    loads: &ShieldLoads,
    supports: &Supports,
    nu: f64,
    thickness: f64,
    options: &AnalysisOptions,
) -> FDMResult<ShieldResults> {
    let material = Material::new(elastic_modulus, nu);
    material.validate()?;
    if !(thickness.is_finite() && thickness > 0.0) {
        return Err(FDMError::InvalidGeometry(format!(
            "thickness must be positive, got {}",
            thickness
        )));
    }
    if options.check_stability {
        if let Err(e) = supports.check_stability() {
            warn!("Shield analysis refused: {}", e);
            return Err(e);
        }
    }

    info!(
        "Shield analysis: {}x{} nodes, h = {} m, t = {} m",
        mesh.nx(),
        mesh.ny(),
        mesh.density(),
        thickness
    );
    let start = Instant::now();

    let horizontal = loads.only(LoadDirection::Horizontal);
    let (a, p_horizontal) = assemble_shield(mesh, &material, &horizontal, supports, thickness)?;
    let vertical = loads.only(LoadDirection::Vertical);
    let p_vertical = load_vector(&system_rows(mesh, &material, &vertical, supports, thickness));
    debug!("Shield assembly took {:?}", start.elapsed());

    let solver = DenseSolver::factorize(&a, options.singular_tolerance)?;
    let (u, v) = displacements(mesh, &solver.solve(&p_horizontal)?, options);
    let horizontal_case = reconstruct(mesh, u, v, &material, thickness);
    let (u, v) = displacements(mesh, &solver.solve(&p_vertical)?, options);
    let results = horizontal_case + reconstruct(mesh, u, v, &material, thickness);
    debug!("Shield solve finished after {:?}", start.elapsed());

    info!(
        "Shield analysis finished in {:?}, max displacement = {:.6e} m",
        start.elapsed(),
        results.max_displacement()
    );
    if options.log {
        info!(
            "  Nxx: [{:.4e}, {:.4e}] N/m, Nyy: [{:.4e}, {:.4e}] N/m",
            results.nxx.min(),
            results.nxx.max(),
            results.nyy.min(),
            results.nyy.max()
        );
    }

    Ok(results)
}

/// Rounded (u, v) at the real nodes of one solution
fn displacements(mesh: &Mesh, solution: &FDVec, options: &AnalysisOptions) -> (Field, Field) {
    let mut u = reshape(mesh, solution, |x, y| 2 * mesh.extended_index(x as isize, y as isize));
    let mut v = reshape(mesh, solution, |x, y| {
        2 * mesh.extended_index(x as isize, y as isize) + 1
    });
    options.round(&mut u);
    options.round(&mut v);
    (u, v)
}

/// Stresses and membrane forces of one displacement field
fn reconstruct(mesh: &Mesh, u: Field, v: Field, material: &Material, thickness: f64) -> ShieldResults {
    let h = mesh.density();
    let nu = material.nu;
    let ds = material.membrane_stiffness();
    let g = material.shear_modulus();

    let mut sigma_x = mesh.zeros();
    let mut sigma_y = mesh.zeros();
    let mut tau_xy = mesh.zeros();

    for y in 0..mesh.ny() {
        for x in 0..mesh.nx() {
            // rows grow downwards, y grows upwards
            let ux = differences::first(&u, x, y, Axis::X) / h;
            let uy = -differences::first(&u, x, y, Axis::Y) / h;
            let vx = differences::first(&v, x, y, Axis::X) / h;
            let vy = -differences::first(&v, x, y, Axis::Y) / h;

            sigma_x[(x, y)] = ds * (ux + nu * vy);
            sigma_y[(x, y)] = ds * (vy + nu * ux);
            tau_xy[(x, y)] = g * (uy + vx);
        }
    }

    ShieldResults {
        nxx: &sigma_x * thickness,
        nyy: &sigma_y * thickness,
        nxy: &tau_xy * thickness,
        u,
        v,
        sigma_x,
        sigma_y,
        tau_xy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Support;
    use crate::math;
    use approx::assert_relative_eq;

    fn tension_case() -> (Mesh, Material, ShieldLoads, Supports) {
        let mesh = Mesh::new(9, 9, 0.5).unwrap();
        let material = Material::new(30e9, 0.2);
        let loads = ShieldLoads::on_edge(LoadDirection::Vertical, Edge::Top, 1000.0);
        let supports = Supports::all(Support::Free).with_edge(Edge::Bottom, Support::Fixed);
        (mesh, material, loads, supports)
    }

    #[test]
    fn test_system_size_and_rows() {
        let (mesh, material, loads, supports) = tension_case();
        let (a, p) = assemble_shield(&mesh, &material, &loads, &supports, 0.2).unwrap();
        assert_eq!(a.shape(), (242, 242));
        assert_eq!(p.len(), 242);

        // outer corner pinned
        assert_eq!(a[(0, 0)], 1.0);
        // fixed bottom node pinned, its ring node tied
        let node = 2 * mesh.extended_index(4, 8);
        assert_eq!(a.row(node).iter().filter(|v| **v != 0.0).count(), 1);
        let ring = 2 * mesh.extended_index(4, 9);
        assert_eq!(a[(ring, ring)], 1.0);
        assert_eq!(a[(ring, node)], -1.0);
        // the top ring carries the load
        let top_ring = 2 * mesh.extended_index(4, -1);
        assert!(p[top_ring] > 0.0);
    }

    #[test]
    fn test_stresses_follow_rounded_displacements() {
        let (mesh, material, loads, supports) = tension_case();
        let options = AnalysisOptions::default().with_rounding(Some(9));
        let results =
            compute_shield(&mesh, material.e, &loads, &supports, material.nu, 0.2, &options).unwrap();

        // top displacement is of order 1e-7 m, so nine decimals keep two digits
        assert!(results.v[(4, 0)] > 1e-8);
        for field in [&results.u, &results.v] {
            assert!(field.iter().all(|d| math::round_to(*d, 9) == *d));
        }

        // the unloaded horizontal case contributes exact zeros
        let expected = reconstruct(&mesh, results.u.clone(), results.v.clone(), &material, 0.2);
        assert_eq!(results, expected);
    }

    #[test]
    fn test_every_support_combination_assembles() {
        let mesh = Mesh::new(7, 6, 0.5).unwrap();
        let material = Material::new(30e9, 0.2);
        let loads = ShieldLoads::on_edge(LoadDirection::Vertical, Edge::Top, 1000.0)
            .with_load(LoadDirection::Horizontal, Edge::Left, -500.0);
        let kinds = [Support::Free, Support::Hinged, Support::Fixed];

        let mut stable = 0;
        for left in kinds {
            for right in kinds {
                for top in kinds {
                    for bottom in kinds {
                        let supports = Supports::new(left, right, top, bottom);
                        let assembled = assemble_shield(&mesh, &material, &loads, &supports, 0.2);
                        assert!(assembled.is_ok(), "{:?}", supports);

                        if supports.is_stable() {
                            stable += 1;
                            let result = compute_shield(
                                &mesh,
                                material.e,
                                &loads,
                                &supports,
                                material.nu,
                                0.2,
                                &AnalysisOptions::default(),
                            );
                            assert!(result.is_ok(), "{:?}: {:?}", supports, result.err());
                        }
                    }
                }
            }
        }
        assert!(stable > 0);
    }

    #[test]
    fn test_uniform_tension() {
        let (mesh, material, loads, supports) = tension_case();
        let results =
            compute_shield(&mesh, material.e, &loads, &supports, material.nu, 0.2, &AnalysisOptions::default())
                .unwrap();

        // away from the clamped edge the state is uniaxial
        for x in 0..mesh.nx() {
            assert_relative_eq!(results.nyy[(x, 0)], 1000.0, max_relative = 0.02);
            assert_relative_eq!(results.sigma_y[(x, 1)], 5000.0, max_relative = 0.05);
        }
        // top edge moves up
        assert!(results.v[(4, 0)] > 0.0);
        assert!(results.v[(4, 8)].abs() < 1e-6 * results.v[(4, 0)]);
    }
}
