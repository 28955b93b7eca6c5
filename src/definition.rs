//! JSON element definitions
//!
//! The definition keeps the units users enter: thickness in cm, modulus of
//! elasticity in GPa and loads in kN (kN/m² on plates, kN/m on shield
//! edges). Converting into an [`Element`] switches to SI units.
//!
//! ```json
//! {
//!     "name": "slab",
//!     "object_type": "plate",
//!     "geometry": {"thickness": 20, "width": 4.0, "height": 3.0},
//!     "material": {"E": 30, "v": 0.2},
//!     "loads_plate": 10.0,
//!     "loads_shield": null,
//!     "density": 0.25,
//!     "supports": {"left": 1, "right": 1, "top": 2, "bottom": 0}
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::elements::{Geometry, Material, Supports};
use crate::error::{FDMError, FDMResult};
use crate::loads::{PlateLoad, ShieldLoads};
use crate::model::{Element, ElementKind};

/// cm → m
const THICKNESS_TO_SI: f64 = 0.01;
/// GPa → Pa
const MODULUS_TO_SI: f64 = 1e9;
/// kN → N
const LOAD_TO_SI: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryDefinition {
    /// cm
    pub thickness: f64,
    /// m
    pub width: f64,
    /// m
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDefinition {
    /// GPa
    #[serde(rename = "E")]
    pub e: f64,
    pub v: f64,
}

/// Element attributes as saved by the input front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDefinition {
    pub name: String,
    pub object_type: ElementKind,
    pub geometry: GeometryDefinition,
    pub material: MaterialDefinition,
    /// kN/m²
    #[serde(default)]
    pub loads_plate: Option<f64>,
    /// kN/m
    #[serde(default)]
    pub loads_shield: Option<ShieldLoads>,
    /// Mesh spacing in m
    pub density: f64,
    pub supports: Supports,
}

impl ElementDefinition {
    pub fn from_json(json: &str) -> FDMResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> FDMResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the loads required by `object_type` are present
    fn required_loads(&self) -> FDMResult<(PlateLoad, ShieldLoads)> {
        let kind = self.object_type;

        let plate = match self.loads_plate {
            Some(q) if !q.is_finite() => {
                return Err(FDMError::InvalidInput(format!("loads_plate is not finite: {}", q)))
            }
            Some(q) => PlateLoad::new(q).scaled(LOAD_TO_SI),
            None if kind.has_bending() => {
                return Err(FDMError::InvalidInput(format!(
                    "{:?} element '{}' needs loads_plate",
                    kind, self.name
                )))
            }
            None => PlateLoad::default(),
        };

        let shield = match self.loads_shield {
            Some(loads) => {
                let values = [loads.x_direction, loads.y_direction];
                if values
                    .iter()
                    .any(|e| ![e.left, e.right, e.top, e.bottom].iter().all(|v| v.is_finite()))
                {
                    return Err(FDMError::InvalidInput(
                        "loads_shield contains a value that is not finite".to_string(),
                    ));
                }
                loads.scaled(LOAD_TO_SI)
            }
            None if kind.has_membrane() => {
                return Err(FDMError::InvalidInput(format!(
                    "{:?} element '{}' needs loads_shield",
                    kind, self.name
                )))
            }
            None => ShieldLoads::default(),
        };

        Ok((plate, shield))
    }
}

impl TryFrom<ElementDefinition> for Element {
    type Error = FDMError;

    fn try_from(definition: ElementDefinition) -> FDMResult<Self> {
        let (plate_load, shield_loads) = definition.required_loads()?;
        let geometry = Geometry::new(
            definition.geometry.thickness * THICKNESS_TO_SI,
            definition.geometry.width,
            definition.geometry.height,
        );
        let material = Material::new(definition.material.e * MODULUS_TO_SI, definition.material.v);

        Ok(Element::new(
            &definition.name,
            definition.object_type,
            geometry,
            material,
            definition.supports,
            definition.density,
        )?
        .with_plate_load(plate_load)
        .with_shield_loads(shield_loads))
    }
}

impl Element {
    /// Parse a JSON definition and build the element
    pub fn from_json(json: &str) -> FDMResult<Self> {
        Element::try_from(ElementDefinition::from_json(json)?)
    }
}
