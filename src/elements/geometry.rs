//! Geometry of a rectangular element

use serde::{Deserialize, Serialize};

use crate::error::{FDMError, FDMResult};

/// Rectangular element dimensions in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Thickness in m
    pub thickness: f64,
    /// Extent along x in m
    pub width: f64,
    /// Extent along y in m
    pub height: f64,
}

impl Geometry {
    pub fn new(thickness: f64, width: f64, height: f64) -> Self {
        Self {
            thickness,
            width,
            height,
        }
    }

    /// Fit width and height to whole multiples of the mesh spacing
    pub fn fitted(&self, density: f64) -> Self {
        Self {
            thickness: self.thickness,
            width: density * (self.width / density).round(),
            height: density * (self.height / density).round(),
        }
    }

    pub fn validate(&self) -> FDMResult<()> {
        for (label, value) in [
            ("thickness", self.thickness),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(FDMError::InvalidGeometry(format!(
                    "{} must be a positive number, got {}",
                    label, value
                )));
            }
        }
        Ok(())
    }
}
