//! Plate bending stencils
//!
//! Discretization of the Kirchhoff plate equation ∇⁴w = q/Dp on a square
//! grid. Away from the edges this is the 13-point biharmonic stencil. Near
//! free edges the fictitious points outside the plate are eliminated with
//! the vanishing moment and effective shear conditions, which introduces the
//! Poisson ratio into the coefficients. Restrained edges pin the deflection
//! to zero and clamped edges reflect the first fictitious row.
//!
//! Coefficients are scaled by h⁴/Dp, so the right-hand side of a full
//! interior equation is `q·h⁴/Dp`.

use super::Stencil;
use crate::elements::{Edge, Support, Supports};
use crate::mesh::NodeClass;

/// Local frame: `t` runs along an edge, `n` points into the plate
#[derive(Debug, Clone, Copy)]
struct Frame {
    t: (isize, isize),
    n: (isize, isize),
}

impl Frame {
    /// Frame with `t` along +x inward and `n` along +y inward
    fn corner(sx: isize, sy: isize) -> Self {
        Self {
            t: (sx, 0),
            n: (0, sy),
        }
    }

    /// Frame attached to `edge`; `t` points away from the nearest corner
    fn edge(edge: Edge, sx: isize, sy: isize) -> Self {
        if edge.is_horizontal() {
            Self {
                t: (sx, 0),
                n: (0, sy),
            }
        } else {
            Self {
                t: (0, sy),
                n: (sx, 0),
            }
        }
    }

    fn put(&self, stencil: &mut Stencil, t: isize, n: isize, coefficient: f64) {
        stencil.add(
            t * self.t.0 + n * self.n.0,
            t * self.t.1 + n * self.n.1,
            0,
            coefficient,
        );
    }
}

/// Stencil of a plate node.
///
/// * `class` - category of the node
/// * `inward` - unit steps away from the nearest vertical and horizontal edge
/// * `load` - q·h⁴/Dp
pub fn plate_stencil(
    class: NodeClass,
    inward: (isize, isize),
    supports: &Supports,
    nu: f64,
    load: f64,
) -> Stencil {
    let (sx, sy) = inward;
    let v = nu;
    let mut s = Stencil::new();

    match class {
        NodeClass::Corner {
            vertical,
            horizontal,
        } => {
            if supports.on(vertical).is_restrained() || supports.on(horizontal).is_restrained() {
                return Stencil::pin(0);
            }
            let f = Frame::corner(sx, sy);
            let c = (3.0 + v) * (1.0 - v);
            f.put(&mut s, 0, 0, c);
            f.put(&mut s, 1, 0, -c);
            f.put(&mut s, 0, 1, -c);
            f.put(&mut s, 2, 0, (1.0 - v * v) / 2.0);
            f.put(&mut s, 0, 2, (1.0 - v * v) / 2.0);
            f.put(&mut s, 1, 1, 2.0 - 2.0 * v);
            s.rhs = load / 4.0;
        }

        NodeClass::CornerEdge { main, secondary } => {
            if supports.on(main).is_restrained() {
                return Stencil::pin(0);
            }
            let f = Frame::edge(main, sx, sy);
            match supports.on(secondary) {
                Support::Free => {
                    f.put(&mut s, 0, 0, (15.0 - 8.0 * v - 5.0 * v * v) / 2.0);
                    f.put(&mut s, -1, 0, -(3.0 + v) * (1.0 - v));
                    f.put(&mut s, -1, 1, 2.0 - v);
                }
                Support::Hinged => f.put(&mut s, 0, 0, (15.0 - 8.0 * v - 5.0 * v * v) / 2.0),
                Support::Fixed => f.put(&mut s, 0, 0, (17.0 - 8.0 * v - 7.0 * v * v) / 2.0),
            }
            f.put(&mut s, 1, 0, -2.0 * (2.0 + v) * (1.0 - v));
            f.put(&mut s, 2, 0, (1.0 - v * v) / 2.0);
            f.put(&mut s, 0, 1, -2.0 * (3.0 - v));
            f.put(&mut s, 1, 1, 2.0 - v);
            f.put(&mut s, 0, 2, 1.0);
            s.rhs = load / 2.0;
        }

        NodeClass::Edge { edge } => {
            if supports.on(edge).is_restrained() {
                return Stencil::pin(0);
            }
            let f = Frame::edge(edge, sx, sy);
            let along = [
                (-2, (1.0 - v * v) / 2.0),
                (-1, -2.0 * (2.0 + v) * (1.0 - v)),
                (0, 8.0 - 4.0 * v - 3.0 * v * v),
                (1, -2.0 * (2.0 + v) * (1.0 - v)),
                (2, (1.0 - v * v) / 2.0),
            ];
            for (t, c) in along {
                f.put(&mut s, t, 0, c);
            }
            f.put(&mut s, -1, 1, 2.0 - v);
            f.put(&mut s, 0, 1, -2.0 * (3.0 - v));
            f.put(&mut s, 1, 1, 2.0 - v);
            f.put(&mut s, 0, 2, 1.0);
            s.rhs = load / 2.0;
        }

        NodeClass::CornerMid {
            vertical,
            horizontal,
        } => {
            let vertical = supports.on(vertical);
            let horizontal = supports.on(horizontal);
            let reflect = |support: Support| if support.is_fixed() { 1.0 } else { -1.0 };
            let f = Frame::corner(sx, sy);

            f.put(&mut s, 0, 0, 20.0 + reflect(horizontal) + reflect(vertical));
            f.put(&mut s, 1, 0, -8.0);
            f.put(&mut s, 2, 0, 1.0);
            f.put(&mut s, 0, 1, -8.0);
            f.put(&mut s, 0, 2, 1.0);
            f.put(&mut s, 1, 1, 2.0);
            if horizontal.is_free() {
                f.put(&mut s, 0, -1, -2.0 * (3.0 - v));
                f.put(&mut s, 1, -1, 2.0 - v);
            }
            if vertical.is_free() {
                f.put(&mut s, -1, 0, -2.0 * (3.0 - v));
                f.put(&mut s, -1, 1, 2.0 - v);
            }
            if horizontal.is_free() && vertical.is_free() {
                f.put(&mut s, -1, -1, 2.0 * (1.0 - v));
            }
            s.rhs = load;
        }

        NodeClass::EdgeMid { edge } => {
            let support = supports.on(edge);
            let f = Frame::edge(edge, sx, sy);

            f.put(&mut s, 0, 0, if support.is_fixed() { 21.0 } else { 19.0 });
            if support.is_free() {
                f.put(&mut s, -1, -1, 2.0 - v);
                f.put(&mut s, 0, -1, -2.0 * (3.0 - v));
                f.put(&mut s, 1, -1, 2.0 - v);
            }
            f.put(&mut s, -2, 0, 1.0);
            f.put(&mut s, -1, 0, -8.0);
            f.put(&mut s, 1, 0, -8.0);
            f.put(&mut s, 2, 0, 1.0);
            f.put(&mut s, -1, 1, 2.0);
            f.put(&mut s, 0, 1, -8.0);
            f.put(&mut s, 1, 1, 2.0);
            f.put(&mut s, 0, 2, 1.0);
            s.rhs = load;
        }

        NodeClass::Interior => {
            let f = Frame::corner(1, 1);
            f.put(&mut s, 0, 0, 20.0);
            for (a, b) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                f.put(&mut s, a, b, -8.0);
                f.put(&mut s, 2 * a, 2 * b, 1.0);
            }
            for (a, b) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                f.put(&mut s, a, b, 2.0);
            }
            s.rhs = load;
        }
    }

    s
}
