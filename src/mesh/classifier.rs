//! Node classification for stencil selection
//!
//! Plate nodes fall into six categories by their distance to the nearest
//! vertical and horizontal edge:
//!
//! ```text
//!   A B C C C B A
//!   B D E E E D B
//!   C E F F F E C
//!   C E F F F E C
//!   B D E E E D B
//!   A B C C C B A
//! ```
//!
//! Shield nodes are classified on the extended grid, which adds the ring of
//! fictitious nodes and its four outer corners.

use serde::{Deserialize, Serialize};

use super::Mesh;
use crate::elements::Edge;

/// Stencil category of a real mesh node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeClass {
    /// (A) intersection of two edges
    Corner { vertical: Edge, horizontal: Edge },
    /// (B) on an edge, one step from the corner
    CornerEdge { main: Edge, secondary: Edge },
    /// (C) on an edge, at least two steps from every corner
    Edge { edge: Edge },
    /// (D) one step in from both edges of a corner
    CornerMid { vertical: Edge, horizontal: Edge },
    /// (E) one step in from an edge, at least two from the other
    EdgeMid { edge: Edge },
    /// (F) at least two steps from every edge
    Interior,
}

impl NodeClass {
    /// Letter used for the category in the node legend
    pub fn letter(&self) -> char {
        match self {
            NodeClass::Corner { .. } => 'A',
            NodeClass::CornerEdge { .. } => 'B',
            NodeClass::Edge { .. } => 'C',
            NodeClass::CornerMid { .. } => 'D',
            NodeClass::EdgeMid { .. } => 'E',
            NodeClass::Interior => 'F',
        }
    }
}

/// Nearest vertical edge of column `x`
fn vertical_edge(mesh: &Mesh, x: usize) -> Edge {
    if 2 * x < mesh.nx() {
        Edge::Left
    } else {
        Edge::Right
    }
}

/// Nearest horizontal edge of row `y`
fn horizontal_edge(mesh: &Mesh, y: usize) -> Edge {
    if 2 * y < mesh.ny() {
        Edge::Top
    } else {
        Edge::Bottom
    }
}

/// Unit steps `(sx, sy)` pointing away from the nearest vertical and
/// horizontal edge, in grid index space
pub fn inward(mesh: &Mesh, x: usize, y: usize) -> (isize, isize) {
    let sx = if 2 * x < mesh.nx() { 1 } else { -1 };
    let sy = if 2 * y < mesh.ny() { 1 } else { -1 };
    (sx, sy)
}

/// Classify real node `(x, y)`.
///
/// Mesh dimensions are validated by [`Mesh::new`], so every node of a mesh
/// falls into exactly one category.
pub fn classify(mesh: &Mesh, x: usize, y: usize) -> NodeClass {
    let dx = x.min(mesh.nx() - 1 - x);
    let dy = y.min(mesh.ny() - 1 - y);
    let vertical = vertical_edge(mesh, x);
    let horizontal = horizontal_edge(mesh, y);

    match (dx, dy) {
        (0, 0) => NodeClass::Corner {
            vertical,
            horizontal,
        },
        (0, 1) => NodeClass::CornerEdge {
            main: vertical,
            secondary: horizontal,
        },
        (1, 0) => NodeClass::CornerEdge {
            main: horizontal,
            secondary: vertical,
        },
        (0, _) => NodeClass::Edge { edge: vertical },
        (_, 0) => NodeClass::Edge { edge: horizontal },
        (1, 1) => NodeClass::CornerMid {
            vertical,
            horizontal,
        },
        (1, _) => NodeClass::EdgeMid { edge: vertical },
        (_, 1) => NodeClass::EdgeMid { edge: horizontal },
        _ => NodeClass::Interior,
    }
}

/// Role of a node on the extended (shield) grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtendedNode {
    /// One of the four fictitious corners outside the mesh, pinned to zero
    OuterCorner,
    /// Fictitious node outside `edge`, attached to the real boundary node
    /// `anchor` one step inward
    Ring { edge: Edge, anchor: (usize, usize) },
    /// Real node on one or two edges
    Boundary {
        vertical: Option<Edge>,
        horizontal: Option<Edge>,
    },
    /// Real node away from every edge
    Interior,
}

/// Classify extended node `(x, y)` with `x` in `-1..=nx` and `y` in `-1..=ny`
pub fn classify_extended(mesh: &Mesh, x: isize, y: isize) -> ExtendedNode {
    let nx = mesh.nx() as isize;
    let ny = mesh.ny() as isize;
    let outside_x = x < 0 || x >= nx;
    let outside_y = y < 0 || y >= ny;

    match (outside_x, outside_y) {
        (true, true) => ExtendedNode::OuterCorner,
        (true, false) => ExtendedNode::Ring {
            edge: if x < 0 { Edge::Left } else { Edge::Right },
            anchor: (x.clamp(0, nx - 1) as usize, y as usize),
        },
        (false, true) => ExtendedNode::Ring {
            edge: if y < 0 { Edge::Top } else { Edge::Bottom },
            anchor: (x as usize, y.clamp(0, ny - 1) as usize),
        },
        (false, false) => {
            let vertical = if x == 0 {
                Some(Edge::Left)
            } else if x == nx - 1 {
                Some(Edge::Right)
            } else {
                None
            };
            let horizontal = if y == 0 {
                Some(Edge::Top)
            } else if y == ny - 1 {
                Some(Edge::Bottom)
            } else {
                None
            };
            if vertical.is_none() && horizontal.is_none() {
                ExtendedNode::Interior
            } else {
                ExtendedNode::Boundary {
                    vertical,
                    horizontal,
                }
            }
        }
    }
}

/// Edges a real node lies on
pub fn boundary_edges(mesh: &Mesh, x: usize, y: usize) -> (Option<Edge>, Option<Edge>) {
    match classify_extended(mesh, x as isize, y as isize) {
        ExtendedNode::Boundary {
            vertical,
            horizontal,
        } => (vertical, horizontal),
        _ => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn legend(mesh: &Mesh) -> Vec<String> {
        (0..mesh.ny())
            .map(|y| {
                (0..mesh.nx())
                    .map(|x| classify(mesh, x, y).letter())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_legend_7x6() {
        let mesh = Mesh::new(7, 6, 1.0).unwrap();
        assert_eq!(
            legend(&mesh),
            vec!["ABCCCBA", "BDEEEDB", "CEFFFEC", "CEFFFEC", "BDEEEDB", "ABCCCBA"]
        );
    }

    #[test]
    fn test_category_counts() {
        for (nx, ny) in [(5, 5), (6, 9), (10, 10), (25, 7)] {
            let mesh = Mesh::new(nx, ny, 1.0).unwrap();
            let mut counts: HashMap<char, usize> = HashMap::new();
            for y in 0..ny {
                for x in 0..nx {
                    *counts.entry(classify(&mesh, x, y).letter()).or_default() += 1;
                }
            }
            assert_eq!(counts[&'A'], 4);
            assert_eq!(counts[&'B'], 8);
            assert_eq!(counts[&'D'], 4);
            assert_eq!(counts[&'C'], 2 * (nx - 4) + 2 * (ny - 4));
            assert_eq!(counts[&'E'], 2 * (nx - 4) + 2 * (ny - 4));
            assert_eq!(counts[&'F'], (nx - 4) * (ny - 4));
        }
    }

    #[test]
    fn test_corner_edge_orientation() {
        let mesh = Mesh::new(9, 9, 1.0).unwrap();
        assert_eq!(
            classify(&mesh, 1, 0),
            NodeClass::CornerEdge {
                main: Edge::Top,
                secondary: Edge::Left
            }
        );
        assert_eq!(
            classify(&mesh, 8, 7),
            NodeClass::CornerEdge {
                main: Edge::Right,
                secondary: Edge::Bottom
            }
        );
        assert_eq!(inward(&mesh, 8, 7), (-1, -1));
        assert_eq!(inward(&mesh, 4, 4), (1, 1));
    }

    #[test]
    fn test_extended_classification() {
        let mesh = Mesh::new(5, 6, 1.0).unwrap();
        assert_eq!(classify_extended(&mesh, -1, -1), ExtendedNode::OuterCorner);
        assert_eq!(classify_extended(&mesh, 5, 6), ExtendedNode::OuterCorner);
        assert_eq!(
            classify_extended(&mesh, -1, 3),
            ExtendedNode::Ring {
                edge: Edge::Left,
                anchor: (0, 3)
            }
        );
        assert_eq!(
            classify_extended(&mesh, 2, 6),
            ExtendedNode::Ring {
                edge: Edge::Bottom,
                anchor: (2, 5)
            }
        );
        assert_eq!(
            classify_extended(&mesh, 4, 0),
            ExtendedNode::Boundary {
                vertical: Some(Edge::Right),
                horizontal: Some(Edge::Top)
            }
        );
        assert_eq!(classify_extended(&mesh, 2, 2), ExtendedNode::Interior);
        assert_eq!(boundary_edges(&mesh, 0, 2), (Some(Edge::Left), None));
    }
}
