//! Result types for FDM analysis
//!
//! Every field has the shape of the mesh, `(nx, ny)`, and is indexed
//! `(x, y)` with `y = 0` on the top edge.

use std::ops::Add;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Nodal field over the mesh
pub type Field = DMatrix<f64>;

/// Extreme values of a field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldExtremes {
    pub min: f64,
    pub max: f64,
    /// Node `(x, y)` holding the largest absolute value
    pub max_abs_at: (usize, usize),
    pub max_abs: f64,
}

impl FieldExtremes {
    pub fn of(field: &Field) -> Self {
        let mut extremes = Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            max_abs_at: (0, 0),
            max_abs: 0.0,
        };
        for y in 0..field.ncols() {
            for x in 0..field.nrows() {
                let value = field[(x, y)];
                extremes.min = extremes.min.min(value);
                extremes.max = extremes.max.max(value);
                if value.abs() > extremes.max_abs {
                    extremes.max_abs = value.abs();
                    extremes.max_abs_at = (x, y);
                }
            }
        }
        extremes
    }
}

/// Plate bending results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateResults {
    /// Deflection (m), positive along the load
    pub w: Field,
    /// Surface bending stress σx = 6·Mxx/t² (Pa)
    pub sigma_x: Field,
    pub sigma_y: Field,
    pub tau_xy: Field,
    /// Bending moments per unit width (N·m/m)
    pub mxx: Field,
    pub myy: Field,
    pub mxy: Field,
}

impl PlateResults {
    pub fn shape(&self) -> (usize, usize) {
        self.w.shape()
    }

    /// Largest absolute deflection
    pub fn max_deflection(&self) -> f64 {
        self.w.amax()
    }
}

/// Shield (membrane) results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldResults {
    /// Displacement along x (m)
    pub u: Field,
    /// Displacement along y (m), positive towards the top edge
    pub v: Field,
    pub sigma_x: Field,
    pub sigma_y: Field,
    pub tau_xy: Field,
    /// Membrane forces N = σ·t (N/m)
    pub nxx: Field,
    pub nyy: Field,
    pub nxy: Field,
}

impl ShieldResults {
    pub fn shape(&self) -> (usize, usize) {
        self.u.shape()
    }

    /// Largest absolute displacement component
    pub fn max_displacement(&self) -> f64 {
        self.u.amax().max(self.v.amax())
    }
}

/// Superposition of two load cases on the same mesh
impl Add for ShieldResults {
    type Output = ShieldResults;

    fn add(self, other: ShieldResults) -> ShieldResults {
        ShieldResults {
            u: self.u + other.u,
            v: self.v + other.v,
            sigma_x: self.sigma_x + other.sigma_x,
            sigma_y: self.sigma_y + other.sigma_y,
            tau_xy: self.tau_xy + other.tau_xy,
            nxx: self.nxx + other.nxx,
            nyy: self.nyy + other.nyy,
            nxy: self.nxy + other.nxy,
        }
    }
}

/// Shell results: both pipelines plus the summed surface stresses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellResults {
    pub plate: PlateResults,
    pub shield: ShieldResults,
    pub sigma_x: Field,
    pub sigma_y: Field,
    pub tau_xy: Field,
}

impl ShellResults {
    pub fn new(plate: PlateResults, shield: ShieldResults) -> Self {
        let sigma_x = &plate.sigma_x + &shield.sigma_x;
        let sigma_y = &plate.sigma_y + &shield.sigma_y;
        let tau_xy = &plate.tau_xy + &shield.tau_xy;
        Self {
            plate,
            shield,
            sigma_x,
            sigma_y,
            tau_xy,
        }
    }
}

/// Output of [`crate::model::Element::compute`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementResults {
    Plate(PlateResults),
    Shield(ShieldResults),
    Shell(ShellResults),
}

impl ElementResults {
    pub fn plate(&self) -> Option<&PlateResults> {
        match self {
            ElementResults::Plate(p) => Some(p),
            ElementResults::Shell(s) => Some(&s.plate),
            ElementResults::Shield(_) => None,
        }
    }

    pub fn shield(&self) -> Option<&ShieldResults> {
        match self {
            ElementResults::Shield(s) => Some(s),
            ElementResults::Shell(s) => Some(&s.shield),
            ElementResults::Plate(_) => None,
        }
    }

    /// Total normal stress along x
    pub fn sigma_x(&self) -> &Field {
        match self {
            ElementResults::Plate(p) => &p.sigma_x,
            ElementResults::Shield(s) => &s.sigma_x,
            ElementResults::Shell(s) => &s.sigma_x,
        }
    }

    pub fn sigma_y(&self) -> &Field {
        match self {
            ElementResults::Plate(p) => &p.sigma_y,
            ElementResults::Shield(s) => &s.sigma_y,
            ElementResults::Shell(s) => &s.sigma_y,
        }
    }

    pub fn tau_xy(&self) -> &Field {
        match self {
            ElementResults::Plate(p) => &p.tau_xy,
            ElementResults::Shield(s) => &s.tau_xy,
            ElementResults::Shell(s) => &s.tau_xy,
        }
    }

    /// Plane stress von Mises equivalent at every node
    pub fn von_mises(&self) -> Field {
        let (sx, sy, txy) = (self.sigma_x(), self.sigma_y(), self.tau_xy());
        Field::from_fn(sx.nrows(), sx.ncols(), |i, j| {
            let (a, b, t) = (sx[(i, j)], sy[(i, j)], txy[(i, j)]);
            (a * a - a * b + b * b + 3.0 * t * t).sqrt()
        })
    }
}
