//! Edge support conditions

use serde::{Deserialize, Serialize};

use crate::error::{FDMError, FDMResult};

/// Boundary condition along one edge of an element
///
/// Serialized as the integer codes used by element definitions:
/// 0 = free, 1 = hinged, 2 = fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Support {
    /// No restraint
    #[default]
    Free,
    /// Translation restrained, rotation free
    Hinged,
    /// Translation and rotation restrained
    Fixed,
}

impl Support {
    /// Hinged or fixed
    pub fn is_restrained(self) -> bool {
        !matches!(self, Support::Free)
    }

    pub fn is_fixed(self) -> bool {
        matches!(self, Support::Fixed)
    }

    pub fn is_free(self) -> bool {
        matches!(self, Support::Free)
    }

    /// Blocked degrees of freedom contributed by this edge
    pub fn bdof(self) -> usize {
        match self {
            Support::Free => 0,
            Support::Hinged => 1,
            Support::Fixed => 2,
        }
    }

    /// Integer code of the support
    pub fn code(self) -> u8 {
        match self {
            Support::Free => 0,
            Support::Hinged => 1,
            Support::Fixed => 2,
        }
    }
}

impl TryFrom<u8> for Support {
    type Error = FDMError;

    fn try_from(code: u8) -> FDMResult<Self> {
        match code {
            0 => Ok(Support::Free),
            1 => Ok(Support::Hinged),
            2 => Ok(Support::Fixed),
            other => Err(FDMError::InvalidInput(format!(
                "support code must be 0 (free), 1 (hinged) or 2 (fixed), got {}",
                other
            ))),
        }
    }
}

impl From<Support> for u8 {
    fn from(support: Support) -> u8 {
        support.code()
    }
}

/// One of the four edges of a rectangular element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Edges running along the x axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }

    /// Step in grid indices (x, row) pointing out of the element
    pub fn outward(self) -> (isize, isize) {
        match self {
            Edge::Left => (-1, 0),
            Edge::Right => (1, 0),
            Edge::Top => (0, -1),
            Edge::Bottom => (0, 1),
        }
    }
}

/// Support conditions on all four edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Supports {
    pub left: Support,
    pub right: Support,
    pub top: Support,
    pub bottom: Support,
}

impl Supports {
    pub fn new(left: Support, right: Support, top: Support, bottom: Support) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same support on every edge
    pub fn all(support: Support) -> Self {
        Self::new(support, support, support, support)
    }

    /// Support on the given edge
    pub fn on(&self, edge: Edge) -> Support {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    /// Set the support on one edge
    pub fn with_edge(mut self, edge: Edge, support: Support) -> Self {
        match edge {
            Edge::Left => self.left = support,
            Edge::Right => self.right = support,
            Edge::Top => self.top = support,
            Edge::Bottom => self.bottom = support,
        }
        self
    }

    /// Total blocked degrees of freedom over the four edges
    pub fn bdof(&self) -> usize {
        Edge::ALL.iter().map(|&e| self.on(e).bdof()).sum()
    }

    /// Minimal stability check: at least two blocked degrees of freedom.
    ///
    /// A single hinged edge lets the element rotate about it, and a fully
    /// free element has no restraint at all.
    pub fn check_stability(&self) -> FDMResult<()> {
        let bdof = self.bdof();
        if bdof <= 1 {
            return Err(FDMError::Unstable(format!(
                "supports block {} degree(s) of freedom, at least 2 are required",
                bdof
            )));
        }
        Ok(())
    }

    pub fn is_stable(&self) -> bool {
        self.check_stability().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_codes() {
        assert_eq!(Support::try_from(0).unwrap(), Support::Free);
        assert_eq!(Support::try_from(1).unwrap(), Support::Hinged);
        assert_eq!(Support::try_from(2).unwrap(), Support::Fixed);
        assert!(Support::try_from(3).is_err());
        assert_eq!(u8::from(Support::Fixed), 2);
    }

    #[test]
    fn test_bdof_counts() {
        let supports = Supports::new(Support::Hinged, Support::Fixed, Support::Free, Support::Free);
        assert_eq!(supports.bdof(), 3);
        assert!(supports.is_stable());
    }

    #[test]
    fn test_single_hinge_is_unstable() {
        let supports = Supports::all(Support::Free).with_edge(Edge::Bottom, Support::Hinged);
        assert!(matches!(
            supports.check_stability(),
            Err(FDMError::Unstable(_))
        ));
        assert!(!Supports::all(Support::Free).is_stable());
    }

    #[test]
    fn test_single_fixed_edge_is_stable() {
        let supports = Supports::all(Support::Free).with_edge(Edge::Right, Support::Fixed);
        assert!(supports.is_stable());
    }

    #[test]
    fn test_supports_deserialize_from_codes() {
        let supports: Supports =
            serde_json::from_str(r#"{"left": 0, "right": 2, "top": 1, "bottom": 0}"#).unwrap();
        assert_eq!(supports.right, Support::Fixed);
        assert_eq!(supports.top, Support::Hinged);

        let bad: Result<Supports, _> =
            serde_json::from_str(r#"{"left": 5, "right": 2, "top": 1, "bottom": 0}"#);
        assert!(bad.is_err());
    }
}
