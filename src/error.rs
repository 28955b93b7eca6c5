//! Error types for FDM Solver

use thiserror::Error;

/// Main error type for FDM operations
#[derive(Error, Debug)]
pub enum FDMError {
    #[error("Mesh is too coarse: {nx}x{ny} nodes, both directions need more than 4")]
    MeshTooCoarse { nx: usize, ny: usize },

    #[error("Structure is unstable: {0}")]
    Unstable(String),

    #[error("Singular system matrix - structure may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Element '{0}' has not been computed - run compute() first")]
    NotComputed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for FDM operations
pub type FDMResult<T> = Result<T, FDMError>;
