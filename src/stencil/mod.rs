//! Finite difference stencils
//!
//! A [`Stencil`] is one equation of the global system: a list of
//! coefficients at grid offsets relative to an anchor node, plus the
//! right-hand side. Plate stencils act on the single deflection unknown,
//! shield stencils on the two in-plane displacement components.

pub mod plate;
pub mod shield;

pub use plate::plate_stencil;
pub use shield::{ShieldCoefficients, ShieldRows};

use serde::{Deserialize, Serialize};

/// One coefficient of a stencil
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Column offset from the anchor node
    pub dx: isize,
    /// Row offset from the anchor node (positive towards the bottom edge)
    pub dy: isize,
    /// Unknown component at the target node (always 0 for plates)
    pub component: usize,
    pub coefficient: f64,
}

/// Sparse equation row around an anchor node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stencil {
    pub terms: Vec<Term>,
    pub rhs: f64,
}

impl Stencil {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row pinning component `component` of the anchor node to zero
    pub fn pin(component: usize) -> Self {
        let mut stencil = Self::new();
        stencil.add(0, 0, component, 1.0);
        stencil
    }

    /// Add a coefficient, merging with an existing term at the same target
    pub fn add(&mut self, dx: isize, dy: isize, component: usize, coefficient: f64) {
        if coefficient == 0.0 {
            return;
        }
        match self
            .terms
            .iter_mut()
            .find(|t| t.dx == dx && t.dy == dy && t.component == component)
        {
            Some(term) => term.coefficient += coefficient,
            None => self.terms.push(Term {
                dx,
                dy,
                component,
                coefficient,
            }),
        }
    }

    /// Add every term of `other` scaled by `factor`
    pub fn add_scaled(&mut self, other: &Stencil, factor: f64) {
        for t in &other.terms {
            self.add(t.dx, t.dy, t.component, factor * t.coefficient);
        }
        self.rhs += factor * other.rhs;
    }

    pub fn with_rhs(mut self, rhs: f64) -> Self {
        self.rhs = rhs;
        self
    }

    /// Coefficient at a target, zero when absent
    pub fn coefficient(&self, dx: isize, dy: isize, component: usize) -> f64 {
        self.terms
            .iter()
            .filter(|t| t.dx == dx && t.dy == dy && t.component == component)
            .map(|t| t.coefficient)
            .sum()
    }

    /// Number of nonzero coefficients
    pub fn nnz(&self) -> usize {
        self.terms.iter().filter(|t| t.coefficient != 0.0).count()
    }

    /// Sum of all coefficients
    pub fn coefficient_sum(&self) -> f64 {
        self.terms.iter().map(|t| t.coefficient).sum()
    }
}
