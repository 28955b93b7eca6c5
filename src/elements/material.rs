//! Material properties

use serde::{Deserialize, Serialize};

use crate::error::{FDMError, FDMResult};

/// Linear elastic isotropic material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(e: f64, nu: f64) -> Self {
        Self { e, nu }
    }

    /// Create a standard concrete material (C30/37)
    pub fn concrete() -> Self {
        Self { e: 32e9, nu: 0.2 }
    }

    /// Create a standard steel material
    pub fn steel() -> Self {
        Self { e: 210e9, nu: 0.3 }
    }

    /// Shear modulus G = E / (2(1 + v))
    pub fn shear_modulus(&self) -> f64 {
        self.e / (2.0 * (1.0 + self.nu))
    }

    /// Membrane stiffness Ds = E / (1 - v²)
    pub fn membrane_stiffness(&self) -> f64 {
        self.e / (1.0 - self.nu * self.nu)
    }

    /// Flexural stiffness Dp = E·h³ / (12(1 - v²)) for a plate of thickness `h`
    pub fn flexural_stiffness(&self, thickness: f64) -> f64 {
        self.e * thickness.powi(3) / (12.0 * (1.0 - self.nu * self.nu))
    }

    /// Check that the properties describe a physically admissible material
    pub fn validate(&self) -> FDMResult<()> {
        if !(self.e.is_finite() && self.e > 0.0) {
            return Err(FDMError::InvalidInput(format!(
                "modulus of elasticity must be positive, got {}",
                self.e
            )));
        }
        validate_poisson_ratio(self.nu)
    }
}

/// Poisson's ratio of an isotropic plane element lies in (-1, 0.5)
pub fn validate_poisson_ratio(nu: f64) -> FDMResult<()> {
    if !(nu > -1.0 && nu < 0.5) {
        return Err(FDMError::InvalidInput(format!(
            "Poisson's ratio must lie in (-1, 0.5), got {}",
            nu
        )));
    }
    Ok(())
}

impl Default for Material {
    fn default() -> Self {
        Self::concrete()
    }
}
