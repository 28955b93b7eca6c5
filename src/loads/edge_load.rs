//! In-plane loads distributed along the edges of a shield

use serde::{Deserialize, Serialize};

use crate::elements::Edge;

/// Direction of an in-plane load. Each direction is solved as its own
/// load case and the results are superposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadDirection {
    /// Loads along global x
    Horizontal,
    /// Loads along global y (positive towards the top edge)
    Vertical,
}

/// Uniform load on each of the four edges, in N/m
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeValues {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl EdgeValues {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn on(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    pub fn with_edge(mut self, edge: Edge, value: f64) -> Self {
        match edge {
            Edge::Left => self.left = value,
            Edge::Right => self.right = value,
            Edge::Top => self.top = value,
            Edge::Bottom => self.bottom = value,
        }
        self
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.left * factor,
            self.right * factor,
            self.top * factor,
            self.bottom * factor,
        )
    }

    pub fn is_zero(&self) -> bool {
        Edge::ALL.iter().all(|&e| self.on(e) == 0.0)
    }
}

/// Edge loads of a shield, split by direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShieldLoads {
    pub x_direction: EdgeValues,
    pub y_direction: EdgeValues,
}

impl ShieldLoads {
    pub fn new(x_direction: EdgeValues, y_direction: EdgeValues) -> Self {
        Self {
            x_direction,
            y_direction,
        }
    }

    /// Uniform load of `value` along `direction` on a single edge
    pub fn on_edge(direction: LoadDirection, edge: Edge, value: f64) -> Self {
        Self::default().with_load(direction, edge, value)
    }

    pub fn with_load(mut self, direction: LoadDirection, edge: Edge, value: f64) -> Self {
        match direction {
            LoadDirection::Horizontal => self.x_direction = self.x_direction.with_edge(edge, value),
            LoadDirection::Vertical => self.y_direction = self.y_direction.with_edge(edge, value),
        }
        self
    }

    /// Copy holding only the loads of one direction
    pub fn only(&self, direction: LoadDirection) -> Self {
        match direction {
            LoadDirection::Horizontal => Self::new(self.x_direction, EdgeValues::default()),
            LoadDirection::Vertical => Self::new(EdgeValues::default(), self.y_direction),
        }
    }

    /// Load components (x, y) acting on an edge
    pub fn traction(&self, edge: Edge) -> (f64, f64) {
        (self.x_direction.on(edge), self.y_direction.on(edge))
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x_direction.scaled(factor), self.y_direction.scaled(factor))
    }

    pub fn is_zero(&self) -> bool {
        self.x_direction.is_zero() && self.y_direction.is_zero()
    }
}
