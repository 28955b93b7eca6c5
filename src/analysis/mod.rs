//! Analysis pipelines and options

pub mod differences;
pub mod plate;
pub mod shield;

pub use plate::{assemble_plate, compute_plate};
pub use shield::{assemble_shield, compute_shield};

use serde::{Deserialize, Serialize};

use crate::math::{self, Vec as FDVec};
use crate::mesh::Mesh;
use crate::results::Field;

/// Options for finite difference analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Refuse supports with too few restrained boundary degrees of freedom
    pub check_stability: bool,
    /// Decimals kept in the solved field before it is differenced
    /// (None = no rounding)
    pub round_decimals: Option<i32>,
    /// Relative pivot tolerance of the LU factorization
    pub singular_tolerance: f64,
    /// Enable logging/progress output
    pub log: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            check_stability: true,
            round_decimals: Some(14),
            singular_tolerance: 1e-12,
            log: false,
        }
    }
}

impl AnalysisOptions {
    /// Enable logging
    pub fn with_logging(mut self) -> Self {
        self.log = true;
        self
    }

    /// Skip the stability check
    pub fn without_stability_check(mut self) -> Self {
        self.check_stability = false;
        self
    }

    /// Set the rounding of result fields
    pub fn with_rounding(mut self, decimals: Option<i32>) -> Self {
        self.round_decimals = decimals;
        self
    }

    /// Set the singularity tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.singular_tolerance = tol;
        self
    }

    /// Round `field` in place as configured
    pub(crate) fn round(&self, field: &mut Field) {
        if let Some(decimals) = self.round_decimals {
            field.apply(|v| *v = math::round_to(*v, decimals));
        }
    }
}

/// Reshape a solution vector into a mesh field; `index` maps a real node
/// to its entry in `solution`
pub(crate) fn reshape<F>(mesh: &Mesh, solution: &FDVec, index: F) -> Field
where
    F: Fn(usize, usize) -> usize,
{
    Field::from_fn(mesh.nx(), mesh.ny(), |x, y| solution[index(x, y)])
}
