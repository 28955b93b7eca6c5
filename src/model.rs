//! Element - the structural object handed to the FDM engine

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::{compute_plate, compute_shield, AnalysisOptions};
use crate::elements::{Geometry, Material, Supports};
use crate::error::{FDMError, FDMResult};
use crate::loads::{PlateLoad, ShieldLoads};
use crate::mesh::Mesh;
use crate::results::{ElementResults, PlateResults, ShellResults, ShieldResults};

/// Which load-bearing behaviour an element is analysed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Loads perpendicular to the element plane
    Plate,
    /// Loads in the element plane
    Shield,
    /// Both, analysed independently and superposed
    Shell,
}

impl ElementKind {
    pub fn has_bending(self) -> bool {
        matches!(self, ElementKind::Plate | ElementKind::Shell)
    }

    pub fn has_membrane(self) -> bool {
        matches!(self, ElementKind::Shield | ElementKind::Shell)
    }
}

/// A rectangular element with its mesh, loads and supports
#[derive(Debug, Clone, Serialize)]
pub struct Element {
    pub name: String,
    pub kind: ElementKind,
    /// Dimensions fitted to the mesh spacing
    geometry: Geometry,
    pub material: Material,
    pub supports: Supports,
    pub plate_load: PlateLoad,
    pub shield_loads: ShieldLoads,
    /// Mesh spacing in m
    density: f64,
    mesh: Mesh,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<ElementResults>,
}

impl Element {
    /// Create an unloaded element.
    ///
    /// The geometry is fitted to whole multiples of `density`; the fitted
    /// mesh must have at least five nodes along each axis.
    pub fn new(
        name: &str,
        kind: ElementKind,
        geometry: Geometry,
        material: Material,
        supports: Supports,
        density: f64,
    ) -> FDMResult<Self> {
        if name.trim().is_empty() {
            return Err(FDMError::InvalidInput("element name is empty".to_string()));
        }
        material.validate()?;
        let mesh = Mesh::from_geometry(&geometry, density)?;

        Ok(Self {
            name: name.to_string(),
            kind,
            geometry: geometry.fitted(density),
            material,
            supports,
            plate_load: PlateLoad::default(),
            shield_loads: ShieldLoads::default(),
            density,
            mesh,
            results: None,
        })
    }

    /// Set the transverse load
    pub fn with_plate_load(mut self, load: PlateLoad) -> Self {
        self.plate_load = load;
        self.results = None;
        self
    }

    /// Set the in-plane edge loads
    pub fn with_shield_loads(mut self, loads: ShieldLoads) -> Self {
        self.shield_loads = loads;
        self.results = None;
        self
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Refit the element to a new geometry and mesh spacing.
    ///
    /// The mesh is rebuilt and stored results are dropped. On error the
    /// element is left unchanged.
    pub fn remesh(&mut self, geometry: Geometry, density: f64) -> FDMResult<()> {
        let mesh = Mesh::from_geometry(&geometry, density)?;
        self.geometry = geometry.fitted(density);
        self.density = density;
        self.mesh = mesh;
        self.results = None;
        Ok(())
    }

    /// Dp of the element
    pub fn flexural_stiffness(&self) -> f64 {
        self.material.flexural_stiffness(self.geometry.thickness)
    }

    // ========================
    // Analysis
    // ========================

    /// Run the analysis selected by the element kind.
    ///
    /// Results are stored only when every pipeline succeeds; a failed run
    /// leaves earlier results untouched.
    pub fn compute(&mut self, options: &AnalysisOptions) -> FDMResult<&ElementResults> {
        info!(
            "Computing {:?} '{}' on a {}x{} mesh",
            self.kind,
            self.name,
            self.mesh.nx(),
            self.mesh.ny()
        );

        let results = match self.kind {
            ElementKind::Plate => ElementResults::Plate(self.compute_plate(options)?),
            ElementKind::Shield => ElementResults::Shield(self.compute_shield(options)?),
            ElementKind::Shell => {
                let plate = self.compute_plate(options)?;
                let shield = self.compute_shield(options)?;
                ElementResults::Shell(ShellResults::new(plate, shield))
            }
        };

        Ok(&*self.results.insert(results))
    }

    fn compute_plate(&self, options: &AnalysisOptions) -> FDMResult<PlateResults> {
        compute_plate(
            &self.mesh,
            self.flexural_stiffness(),
            self.plate_load.pressure,
            &self.supports,
            self.material.nu,
            self.geometry.thickness,
            options,
        )
    }

    fn compute_shield(&self, options: &AnalysisOptions) -> FDMResult<ShieldResults> {
        compute_shield(
            &self.mesh,
            self.material.e,
            &self.shield_loads,
            &self.supports,
            self.material.nu,
            self.geometry.thickness,
            options,
        )
    }

    // ========================
    // Results
    // ========================

    pub fn is_computed(&self) -> bool {
        self.results.is_some()
    }

    /// Results of the last successful [`Element::compute`]
    pub fn results(&self) -> FDMResult<&ElementResults> {
        self.results
            .as_ref()
            .ok_or_else(|| FDMError::NotComputed(self.name.clone()))
    }

    /// Drop stored results
    pub fn clear_results(&mut self) {
        self.results = None;
    }
}
