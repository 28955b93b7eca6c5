//! Load types for plates and shields

mod edge_load;
mod plate_load;

pub use edge_load::{EdgeValues, LoadDirection, ShieldLoads};
pub use plate_load::PlateLoad;
