//! Shield (membrane) stencils
//!
//! Plane stress in displacement form. Each node of the extended grid carries
//! two unknowns, component 0 = u (along x) and component 1 = v (along y,
//! positive towards the top edge). Grid rows grow downwards, so every odd
//! derivative in y flips sign against the row offset.
//!
//! Equilibrium rows are scaled by h²/Ds and traction rows by h/Ds (normal)
//! or h/G (shear), which keeps all coefficients of order one.

use super::Stencil;
use crate::elements::{Edge, Material};

/// Pair of equations written for one node, components (u, v)
pub type ShieldRows = [Stencil; 2];

const U: usize = 0;
const V: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// First derivative scheme along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scheme {
    Central,
    /// Second-order one-sided difference stepping in the given direction
    OneSided(isize),
}

/// Material constants of the membrane operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShieldCoefficients {
    pub nu: f64,
    /// (1 - v) / 2
    pub shear: f64,
    /// (1 + v) / 2
    pub coupling: f64,
    /// Ds = E / (1 - v²)
    pub membrane_stiffness: f64,
    /// G = E / (2(1 + v))
    pub shear_modulus: f64,
}

impl ShieldCoefficients {
    pub fn new(material: &Material) -> Self {
        Self {
            nu: material.nu,
            shear: (1.0 - material.nu) / 2.0,
            coupling: (1.0 + material.nu) / 2.0,
            membrane_stiffness: material.membrane_stiffness(),
            shear_modulus: material.shear_modulus(),
        }
    }
}

fn step(axis: Axis, k: isize) -> (isize, isize) {
    match axis {
        Axis::X => (k, 0),
        Axis::Y => (0, k),
    }
}

/// Sign of an odd derivative along `axis` relative to grid offsets
fn orientation(axis: Axis) -> f64 {
    match axis {
        Axis::X => 1.0,
        Axis::Y => -1.0,
    }
}

fn first(axis: Axis, component: usize, scheme: Scheme) -> Stencil {
    let mut s = Stencil::new();
    let sign = orientation(axis);
    match scheme {
        Scheme::Central => {
            for (k, w) in [(-1, -0.5), (1, 0.5)] {
                let (dx, dy) = step(axis, k);
                s.add(dx, dy, component, sign * w);
            }
        }
        Scheme::OneSided(dir) => {
            for (k, w) in [(0, -1.5), (1, 2.0), (2, -0.5)] {
                let (dx, dy) = step(axis, k * dir);
                s.add(dx, dy, component, sign * w * dir as f64);
            }
        }
    }
    s
}

fn second(axis: Axis, component: usize) -> Stencil {
    let mut s = Stencil::new();
    for (k, w) in [(-1, 1.0), (0, -2.0), (1, 1.0)] {
        let (dx, dy) = step(axis, k);
        s.add(dx, dy, component, w);
    }
    s
}

/// Mixed derivative ∂²/∂x∂y. Central unless `corner` gives the inward steps
/// of a corner node, where a first-order one-sided cell is used instead.
fn mixed(component: usize, corner: Option<(isize, isize)>) -> Stencil {
    let mut s = Stencil::new();
    let sign = orientation(Axis::Y);
    match corner {
        None => {
            for (dx, dy, w) in [(1, 1, 0.25), (1, -1, -0.25), (-1, 1, -0.25), (-1, -1, 0.25)] {
                s.add(dx, dy, component, sign * w);
            }
        }
        Some((sx, sy)) => {
            let w = sign * (sx * sy) as f64;
            s.add(0, 0, component, w);
            s.add(sx, 0, component, -w);
            s.add(0, sy, component, -w);
            s.add(sx, sy, component, w);
        }
    }
    s
}

/// Equilibrium of an in-plane element, rows (x, y):
///
/// u_xx + (1-v)/2·u_yy + (1+v)/2·v_xy = 0
/// v_yy + (1-v)/2·v_xx + (1+v)/2·u_xy = 0
pub fn equilibrium_rows(c: &ShieldCoefficients, corner: Option<(isize, isize)>) -> ShieldRows {
    let mut x_row = second(Axis::X, U);
    x_row.add_scaled(&second(Axis::Y, U), c.shear);
    x_row.add_scaled(&mixed(V, corner), c.coupling);

    let mut y_row = second(Axis::Y, V);
    y_row.add_scaled(&second(Axis::X, V), c.shear);
    y_row.add_scaled(&mixed(U, corner), c.coupling);

    [x_row, y_row]
}

/// Traction conditions on a free `edge` at the anchor node, rows
/// (normal stress, shear stress).
///
/// `load` holds the edge load components (px, py) in N/m. Normal derivatives
/// reach into the fictitious ring; tangential derivatives are one-sided at
/// corners so both edges of a free corner contribute independent rows.
pub fn traction_rows(
    c: &ShieldCoefficients,
    edge: Edge,
    corner: Option<(isize, isize)>,
    load: (f64, f64),
    thickness: f64,
    density: f64,
) -> ShieldRows {
    let (px, py) = load;
    let sign = match edge {
        Edge::Right | Edge::Top => 1.0,
        Edge::Left | Edge::Bottom => -1.0,
    };
    let normal_scale = density / (c.membrane_stiffness * thickness);
    let shear_scale = density / (c.shear_modulus * thickness);

    if edge.is_horizontal() {
        let tangential = corner.map_or(Scheme::Central, |(sx, _)| Scheme::OneSided(sx));
        // σy = Ds(v_y + v·u_x)
        let mut normal = first(Axis::Y, V, Scheme::Central);
        normal.add_scaled(&first(Axis::X, U, tangential), c.nu);
        normal.rhs = sign * py * normal_scale;
        // τxy = G(u_y + v_x)
        let mut shear = first(Axis::Y, U, Scheme::Central);
        shear.add_scaled(&first(Axis::X, V, tangential), 1.0);
        shear.rhs = sign * px * shear_scale;
        [normal, shear]
    } else {
        let tangential = corner.map_or(Scheme::Central, |(_, sy)| Scheme::OneSided(sy));
        // σx = Ds(u_x + v·v_y)
        let mut normal = first(Axis::X, U, Scheme::Central);
        normal.add_scaled(&first(Axis::Y, V, tangential), c.nu);
        normal.rhs = sign * px * normal_scale;
        let mut shear = first(Axis::X, V, Scheme::Central);
        shear.add_scaled(&first(Axis::Y, U, tangential), 1.0);
        shear.rhs = sign * py * shear_scale;
        [normal, shear]
    }
}

/// Ties the fictitious node outside `edge` to the anchor node
pub fn tie_rows(edge: Edge) -> ShieldRows {
    let (ox, oy) = edge.outward();
    let tie = |component| {
        let mut s = Stencil::new();
        s.add(ox, oy, component, 1.0);
        s.add(0, 0, component, -1.0);
        s
    };
    [tie(U), tie(V)]
}

/// Both displacement components of the anchor node pinned to zero
pub fn pin_rows() -> ShieldRows {
    [Stencil::pin(U), Stencil::pin(V)]
}
