//! Transverse loads on plates

use serde::{Deserialize, Serialize};

/// A uniform pressure acting perpendicular to the element plane
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlateLoad {
    /// Pressure magnitude in N/m² (positive in the direction of positive deflection)
    pub pressure: f64,
}

impl PlateLoad {
    /// Create a new pressure load
    pub fn new(pressure: f64) -> Self {
        Self { pressure }
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            pressure: self.pressure * factor,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.pressure == 0.0
    }
}
