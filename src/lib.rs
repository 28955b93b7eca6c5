//! FDM Solver - A native Rust finite difference library for planar elements
//!
//! This library analyses thin rectangular elements on a regular mesh:
//! - Plates loaded perpendicular to their plane (Kirchhoff bending)
//! - Shields loaded in their plane (plane stress membranes)
//! - Shells combining both, with superposed surface stresses
//!
//! Each analysis classifies the mesh nodes, assembles finite difference
//! stencils into a linear system, solves it directly and differentiates the
//! solved field into moments, stresses and membrane forces.
//!
//! ## Example
//! ```rust
//! use fdm_solver::prelude::*;
//!
//! // 4 m x 4 m concrete slab, 20 cm thick, hinged on every edge
//! let mut slab = Element::new(
//!     "Slab",
//!     ElementKind::Plate,
//!     Geometry::new(0.2, 4.0, 4.0),
//!     Material::concrete(),
//!     Supports::all(Support::Hinged),
//!     0.5,
//! )
//! .unwrap()
//! .with_plate_load(PlateLoad::new(10_000.0));
//!
//! let results = slab.compute(&AnalysisOptions::default()).unwrap();
//! let w_max = results.plate().unwrap().max_deflection();
//! assert!(w_max > 0.0);
//! ```

pub mod analysis;
pub mod definition;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod mesh;
pub mod model;
pub mod results;
pub mod stencil;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{compute_plate, compute_shield, AnalysisOptions};
    pub use crate::definition::ElementDefinition;
    pub use crate::elements::{Edge, Geometry, Material, Support, Supports};
    pub use crate::error::{FDMError, FDMResult};
    pub use crate::loads::{EdgeValues, LoadDirection, PlateLoad, ShieldLoads};
    pub use crate::mesh::Mesh;
    pub use crate::model::{Element, ElementKind};
    pub use crate::results::{
        ElementResults, Field, FieldExtremes, PlateResults, ShellResults, ShieldResults,
    };
}
