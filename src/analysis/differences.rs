//! Finite differences of solved fields
//!
//! All operators work in grid index space on a unit spacing: `x` along the
//! first field index, `y` along the second (rows, growing downwards).
//! Callers divide by the mesh spacing and flip odd `y` derivatives when they
//! need physical orientation.
//!
//! Where a centred scheme would leave the mesh the operators switch to a
//! one-sided difference pointing into the mesh.

use crate::results::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

fn len(field: &Field, axis: Axis) -> usize {
    match axis {
        Axis::X => field.nrows(),
        Axis::Y => field.ncols(),
    }
}

fn pos(x: usize, y: usize, axis: Axis) -> usize {
    match axis {
        Axis::X => x,
        Axis::Y => y,
    }
}

/// Value `k` steps along `axis` from `(x, y)`; callers keep it on the mesh
fn at(field: &Field, x: usize, y: usize, axis: Axis, k: isize) -> f64 {
    match axis {
        Axis::X => field[((x as isize + k) as usize, y)],
        Axis::Y => field[(x, (y as isize + k) as usize)],
    }
}

/// `None` for interior positions, otherwise the inward step direction
fn boundary_step(field: &Field, x: usize, y: usize, axis: Axis) -> Option<isize> {
    let i = pos(x, y, axis);
    if i == 0 {
        Some(1)
    } else if i + 1 == len(field, axis) {
        Some(-1)
    } else {
        None
    }
}

/// Weights of a first difference along one axis
fn first_weights(field: &Field, x: usize, y: usize, axis: Axis, second_order: bool) -> Vec<(isize, f64)> {
    match boundary_step(field, x, y, axis) {
        None => vec![(-1, -0.5), (1, 0.5)],
        Some(s) if second_order => {
            let d = s as f64;
            vec![(0, -1.5 * d), (s, 2.0 * d), (2 * s, -0.5 * d)]
        }
        Some(s) => {
            let d = s as f64;
            vec![(0, -d), (s, d)]
        }
    }
}

/// Second difference along `axis`: centred, or the inward three-point
/// difference `f0 - 2·f1 + f2` on the boundary
pub fn second(field: &Field, x: usize, y: usize, axis: Axis) -> f64 {
    match boundary_step(field, x, y, axis) {
        None => at(field, x, y, axis, -1) - 2.0 * at(field, x, y, axis, 0) + at(field, x, y, axis, 1),
        Some(s) => at(field, x, y, axis, 0) - 2.0 * at(field, x, y, axis, s) + at(field, x, y, axis, 2 * s),
    }
}

/// First difference along `axis`, second-order accurate everywhere
pub fn first(field: &Field, x: usize, y: usize, axis: Axis) -> f64 {
    first_weights(field, x, y, axis, true)
        .into_iter()
        .map(|(k, w)| w * at(field, x, y, axis, k))
        .sum()
}

/// Mixed difference ∂²/∂x∂y as the product of the first differences along
/// both axes. Boundary factors are first-order one-sided, which gives the
/// four-point cell `sx·sy·(f00 - f10 - f01 + f11)` at corners.
pub fn mixed(field: &Field, x: usize, y: usize) -> f64 {
    let wx = first_weights(field, x, y, Axis::X, false);
    let wy = first_weights(field, x, y, Axis::Y, false);
    let mut sum = 0.0;
    for &(kx, ax) in &wx {
        for &(ky, ay) in &wy {
            let tx = (x as isize + kx) as usize;
            let ty = (y as isize + ky) as usize;
            sum += ax * ay * field[(tx, ty)];
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(f: impl Fn(f64, f64) -> f64) -> Field {
        Field::from_fn(6, 5, |x, y| f(x as f64, y as f64))
    }

    #[test]
    fn test_second_exact_on_quadratics() {
        let field = sample(|x, y| 3.0 * x * x - y * y + x * y);
        for y in 0..5 {
            for x in 0..6 {
                assert_relative_eq!(second(&field, x, y, Axis::X), 6.0, epsilon = 1e-10);
                assert_relative_eq!(second(&field, x, y, Axis::Y), -2.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_first_exact_on_quadratics() {
        let field = sample(|x, y| x * x + 2.0 * y);
        for y in 0..5 {
            for x in 0..6 {
                assert_relative_eq!(first(&field, x, y, Axis::X), 2.0 * x as f64, epsilon = 1e-10);
                assert_relative_eq!(first(&field, x, y, Axis::Y), 2.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_mixed() {
        let field = sample(|x, y| x * y + x * x);
        for y in 0..5 {
            for x in 0..6 {
                assert_relative_eq!(mixed(&field, x, y), 1.0, epsilon = 1e-10);
            }
        }
        // corner cell at the bottom right
        let field = sample(|x, y| x * x * y);
        let (x, y) = (5, 4);
        let expected = field[(5, 4)] - field[(4, 4)] - field[(5, 3)] + field[(4, 3)];
        assert_relative_eq!(mixed(&field, x, y), expected, epsilon = 1e-10);
    }
}
