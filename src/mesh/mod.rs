//! Regular rectangular finite difference mesh
//!
//! Nodes are addressed by `(x, y)` where `x` counts columns from the left
//! edge and `y` counts rows from the top edge. The flat index used by the
//! system matrix is row-major: `y * nx + x`.
//!
//! The shield problem works on an extended grid with one ring of fictitious
//! nodes around the real mesh. Extended coordinates run from `-1` to `nx`
//! (and `-1` to `ny`), so real nodes keep their usual coordinates.

pub mod classifier;

pub use classifier::{classify, classify_extended, inward, ExtendedNode, NodeClass};

use serde::{Deserialize, Serialize};

use crate::elements::Geometry;
use crate::error::{FDMError, FDMResult};
use crate::results::Field;

/// Smallest node count accepted along each axis
pub const MIN_NODES: usize = 5;

/// Node counts and spacing of a rectangular mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    nx: usize,
    ny: usize,
    density: f64,
}

impl Mesh {
    /// Create a mesh with `nx` by `ny` nodes at spacing `density` (m)
    pub fn new(nx: usize, ny: usize, density: f64) -> FDMResult<Self> {
        if nx < MIN_NODES || ny < MIN_NODES {
            return Err(FDMError::MeshTooCoarse { nx, ny });
        }
        if !(density.is_finite() && density > 0.0) {
            return Err(FDMError::InvalidGeometry(format!(
                "mesh density must be a positive number, got {}",
                density
            )));
        }
        Ok(Self { nx, ny, density })
    }

    /// Mesh covering `geometry` once its dimensions are fitted to `density`
    pub fn from_geometry(geometry: &Geometry, density: f64) -> FDMResult<Self> {
        geometry.validate()?;
        if !(density.is_finite() && density > 0.0) {
            return Err(FDMError::InvalidGeometry(format!(
                "mesh density must be a positive number, got {}",
                density
            )));
        }
        let fitted = geometry.fitted(density);
        let nx = (fitted.width / density).round() as usize + 1;
        let ny = (fitted.height / density).round() as usize + 1;
        Self::new(nx, ny, density)
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Node spacing in m
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Shape of every result field
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn node_count(&self) -> usize {
        self.nx * self.ny
    }

    pub fn width(&self) -> f64 {
        (self.nx - 1) as f64 * self.density
    }

    pub fn height(&self) -> f64 {
        (self.ny - 1) as f64 * self.density
    }

    /// Row-major flat index of node `(x, y)`
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.nx + x
    }

    /// Inverse of [`Mesh::index`]
    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.nx, index / self.nx)
    }

    /// Real node at `(x, y)` shifted by `(dx, dy)`, if it stays inside the mesh
    pub fn offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let tx = x as isize + dx;
        let ty = y as isize + dy;
        if tx < 0 || ty < 0 || tx >= self.nx as isize || ty >= self.ny as isize {
            None
        } else {
            Some((tx as usize, ty as usize))
        }
    }

    /// Width of the extended grid including the fictitious ring
    pub fn extended_nx(&self) -> usize {
        self.nx + 2
    }

    pub fn extended_ny(&self) -> usize {
        self.ny + 2
    }

    pub fn extended_node_count(&self) -> usize {
        self.extended_nx() * self.extended_ny()
    }

    /// Row-major index of extended node `(x, y)`, with `x` in `-1..=nx`
    #[inline]
    pub fn extended_index(&self, x: isize, y: isize) -> usize {
        debug_assert!(x >= -1 && x <= self.nx as isize);
        debug_assert!(y >= -1 && y <= self.ny as isize);
        (y + 1) as usize * self.extended_nx() + (x + 1) as usize
    }

    /// Extended index of `(x, y)` shifted by `(dx, dy)`, if it stays on the
    /// extended grid
    pub fn extended_offset(&self, x: isize, y: isize, dx: isize, dy: isize) -> Option<usize> {
        let tx = x + dx;
        let ty = y + dy;
        if tx < -1 || ty < -1 || tx > self.nx as isize || ty > self.ny as isize {
            None
        } else {
            Some(self.extended_index(tx, ty))
        }
    }

    /// Inverse of [`Mesh::extended_index`]
    pub fn extended_position(&self, index: usize) -> (isize, isize) {
        let w = self.extended_nx();
        ((index % w) as isize - 1, (index / w) as isize - 1)
    }

    /// Zero-filled field with the mesh shape
    pub fn zeros(&self) -> Field {
        Field::zeros(self.nx, self.ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_rare_mesh() {
        assert!(matches!(
            Mesh::new(4, 10, 0.5),
            Err(FDMError::MeshTooCoarse { nx: 4, ny: 10 })
        ));
        assert!(Mesh::new(10, 3, 0.5).is_err());
        assert!(Mesh::new(5, 5, 0.0).is_err());
        assert!(Mesh::new(5, 5, 0.5).is_ok());
    }

    #[test]
    fn test_index_round_trip() {
        let mesh = Mesh::new(7, 6, 0.25).unwrap();
        for i in 0..mesh.node_count() {
            let (x, y) = mesh.position(i);
            assert_eq!(mesh.index(x, y), i);
        }
        assert_eq!(mesh.index(3, 2), 17);
    }

    #[test]
    fn test_extended_index_round_trip() {
        let mesh = Mesh::new(5, 6, 1.0).unwrap();
        assert_eq!(mesh.extended_index(-1, -1), 0);
        assert_eq!(mesh.extended_index(5, 6), mesh.extended_node_count() - 1);
        for i in 0..mesh.extended_node_count() {
            let (x, y) = mesh.extended_position(i);
            assert_eq!(mesh.extended_index(x, y), i);
        }
        assert_eq!(mesh.extended_offset(0, 0, -1, -1), Some(0));
        assert_eq!(mesh.extended_offset(0, 0, -2, 0), None);
        assert_eq!(mesh.extended_offset(4, 5, 1, 1), Some(mesh.extended_node_count() - 1));
    }

    #[test]
    fn test_from_geometry_fits_dimensions() {
        let geometry = Geometry::new(0.2, 4.1, 3.0);
        let mesh = Mesh::from_geometry(&geometry, 0.5).unwrap();
        assert_eq!(mesh.shape(), (9, 7));
        assert!((mesh.width() - 4.0).abs() < 1e-12);

        let too_small = Geometry::new(0.2, 1.0, 1.0);
        assert!(matches!(
            Mesh::from_geometry(&too_small, 0.5),
            Err(FDMError::MeshTooCoarse { .. })
        ));
    }
}
