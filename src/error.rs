//! Error types for cloth construction and stepping.
//!
//! Only caller bugs are reported here. Numerical blow-up from a mistuned
//! `(dt, stiffness, iterations)` combination is not detected; see
//! [`Simulation::is_finite`](crate::simulation::Simulation::is_finite).

use thiserror::Error;

/// Precondition violations rejected at construction or update boundaries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Timestep must be finite and non-negative.
    #[error("timestep must be finite and non-negative, got {0}")]
    InvalidTimestep(f64),
    /// Mass is NaN.
    #[error("mass must not be NaN")]
    InvalidMass,
    /// Node position has a NaN or infinite component.
    #[error("node position must be finite")]
    NonFinitePosition,
    /// Stiffness must be finite and non-negative.
    #[error("stiffness must be finite and non-negative")]
    InvalidStiffness,
    /// Both constraint endpoints are the same node.
    #[error("constraint endpoints must be distinct nodes (both are {node})")]
    SelfConstraint { node: usize },
    /// Endpoints are coincident, so the rest length would be zero.
    #[error("nodes {a} and {b} are coincident; rest length would be zero")]
    DegenerateConstraint { a: usize, b: usize },
    /// Node handle does not belong to this simulation.
    #[error("node index {index} out of bounds (count: {count})")]
    NodeOutOfBounds { index: usize, count: usize },
    /// Grid dimensions must be at least 2x2.
    #[error("grid must be at least 2x2, got {cols}x{rows}")]
    InvalidGridDimensions { cols: usize, rows: usize },
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Convenience alias for `Result<T, SimulationError>`.
pub type Result<T> = core::result::Result<T, SimulationError>;
