//! Configuration types for the cloth simulation.

use crate::error::{Result, SimulationError};
use crate::float::Float;
use crate::vec::Vec;

/// Tunables for [`Simulation`](crate::simulation::Simulation).
///
/// Stability depends on the `(dt, stiffness, iterations)` combination and
/// is the caller's responsibility; nothing here is checked per step.
///
/// # Builder Pattern
/// ```
/// use weft::config::SimulationConfig;
/// use weft::vec::Vec3;
///
/// let config: SimulationConfig<Vec3<f32>> = SimulationConfig::new()
///     .with_iterations(10)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_initial_timestep(1.0 / 60.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig<V: Vec> {
    /// Constraint relaxation passes per step. More passes stretch less on
    /// long constraint chains but cost linearly. Default: 10.
    pub iterations: usize,
    /// Uniform gravitational acceleration (not force). Default: zero.
    pub gravity: V,
    /// `last_timestep` given to new nodes, so a node starting at rest
    /// integrates `a * dt^2` on its first step. Default: 1/60.
    pub initial_timestep: V::Scalar,
    /// Pick radius given to new nodes. Default: 1.
    pub node_radius: V::Scalar,
}

impl<V: Vec> SimulationConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            iterations: 10,
            gravity: V::zero(),
            initial_timestep: V::Scalar::one() / V::Scalar::from_f32(60.0),
            node_radius: V::Scalar::one(),
        }
    }

    /// Set the number of constraint iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the step length new nodes assume they were last integrated with.
    pub fn with_initial_timestep(mut self, dt: V::Scalar) -> Self {
        self.initial_timestep = dt;
        self
    }

    /// Set the pick radius of new nodes.
    pub fn with_node_radius(mut self, radius: V::Scalar) -> Self {
        self.node_radius = radius;
        self
    }

    /// Reject values that would poison the simulation outright.
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(SimulationError::InvalidConfig("gravity must be finite"));
        }
        if !self.initial_timestep.is_finite() || self.initial_timestep <= V::Scalar::zero() {
            return Err(SimulationError::InvalidConfig("initial timestep must be positive"));
        }
        if !self.node_radius.is_finite() || self.node_radius < V::Scalar::zero() {
            return Err(SimulationError::InvalidConfig("node radius must be non-negative"));
        }
        Ok(())
    }
}

impl<V: Vec> Default for SimulationConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
