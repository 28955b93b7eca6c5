//! Physical description of an element: geometry, material and supports

mod geometry;
mod material;
mod support;

pub use geometry::Geometry;
pub use material::{validate_poisson_ratio, Material};
pub use support::{Edge, Support, Supports};
