//! The cloth simulation: owns every node and constraint and drives steps.

use crate::config::SimulationConfig;
use crate::constraint::DistanceConstraint;
use crate::error::{Result, SimulationError};
use crate::float::Float;
use crate::handle::{ConstraintHandle, NodeHandle};
use crate::node::Node;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec::{Vec, Vec3};
use alloc::vec::Vec as AllocVec;

/// Arena of nodes and constraints advanced one fixed-size step at a time.
///
/// Both sequences are append-only and iterated in insertion order, so the
/// same construction and `dt` sequence always reproduces the same
/// trajectory.
///
/// Each step integrates every node, then runs `iterations` relaxation
/// passes over the constraints in stored order. Constraint forces land in
/// the node accumulators and are integrated together with gravity on the
/// next step.
pub struct Simulation<V: Vec> {
    nodes: AllocVec<Node<V>>,
    constraints: AllocVec<DistanceConstraint<V>>,
    config: SimulationConfig<V>,
}

impl<V: Vec> Simulation<V> {
    pub fn new(config: SimulationConfig<V>) -> Self {
        Simulation {
            nodes: AllocVec::new(),
            constraints: AllocVec::new(),
            config,
        }
    }

    /// Like [`Simulation::new`], but rejects an invalid configuration.
    pub fn try_new(config: SimulationConfig<V>) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Append a node. `mass <= 0` creates a static (pinned) node.
    pub fn create_node(&mut self, position: V, mass: V::Scalar) -> Result<NodeHandle> {
        if mass.is_nan() {
            tracing::warn!(index = self.nodes.len(), "rejected node with NaN mass");
            return Err(SimulationError::InvalidMass);
        }
        if !position.is_finite() {
            tracing::warn!(index = self.nodes.len(), "rejected node with non-finite position");
            return Err(SimulationError::NonFinitePosition);
        }

        let handle = NodeHandle::from_index(self.nodes.len());
        self.nodes.push(
            Node::new(position, mass)
                .with_last_timestep(self.config.initial_timestep)
                .with_radius(self.config.node_radius),
        );
        Ok(handle)
    }

    /// Append a constraint holding `a` and `b` at their current distance.
    pub fn create_constraint(
        &mut self,
        a: NodeHandle,
        b: NodeHandle,
        stiffness: V::Scalar,
    ) -> Result<ConstraintHandle> {
        let constraint = DistanceConstraint::new(a, b, &self.nodes, stiffness).map_err(|err| {
            tracing::warn!(a = a.index(), b = b.index(), error = %err, "rejected constraint");
            err
        })?;

        let handle = ConstraintHandle::from_index(self.constraints.len());
        self.constraints.push(constraint);
        Ok(handle)
    }

    /// Make a node static at its current position.
    pub fn pin(&mut self, handle: NodeHandle) -> Result<()> {
        self.node_mut(handle)?.pin();
        Ok(())
    }

    /// Inject an external force, consumed by the next step.
    ///
    /// Call strictly between steps; the force counts toward the next
    /// [`Simulation::update`] only.
    pub fn add_force(&mut self, handle: NodeHandle, force: V) -> Result<()> {
        self.node_mut(handle)?.add_force(force);
        Ok(())
    }

    /// Advance one step of length `dt` seconds.
    pub fn update(&mut self, dt: V::Scalar) -> Result<()> {
        self.step(dt, &mut NoOpStepObserver)
    }

    /// Advance one step, reporting progress to `observer`.
    ///
    /// A negative or non-finite `dt` is rejected before any state changes.
    pub fn step<O: StepObserver>(&mut self, dt: V::Scalar, observer: &mut O) -> Result<()> {
        if !dt.is_finite() || dt < V::Scalar::zero() {
            tracing::warn!(dt = dt.to_f64(), "rejected timestep");
            return Err(SimulationError::InvalidTimestep(dt.to_f64()));
        }

        let gravity = self.config.gravity;
        for node in self.nodes.iter_mut() {
            node.apply_gravity(gravity);
            node.update(dt);
        }
        observer.on_integrate();

        for i in 0..self.config.iterations {
            for constraint in self.constraints.iter() {
                constraint.solve(&mut self.nodes);
            }
            observer.on_constraint_iteration(i);
        }

        observer.on_step_complete(dt.to_f64());
        Ok(())
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&Node<V>> {
        self.nodes.get(handle.index())
    }

    pub(crate) fn node_mut(&mut self, handle: NodeHandle) -> Result<&mut Node<V>> {
        let count = self.nodes.len();
        self.nodes
            .get_mut(handle.index())
            .ok_or(SimulationError::NodeOutOfBounds { index: handle.index(), count })
    }

    pub fn constraint(&self, handle: ConstraintHandle) -> Option<&DistanceConstraint<V>> {
        self.constraints.get(handle.index())
    }

    pub fn nodes(&self) -> &[Node<V>] { &self.nodes }
    pub fn constraints(&self) -> &[DistanceConstraint<V>] { &self.constraints }
    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn config(&self) -> &SimulationConfig<V> { &self.config }

    pub fn set_gravity(&mut self, gravity: V) {
        self.config.gravity = gravity;
    }

    pub fn set_iterations(&mut self, iterations: usize) {
        self.config.iterations = iterations;
    }

    /// Snapshot of every node position, in node order.
    pub fn positions(&self) -> AllocVec<V> {
        self.nodes.iter().map(|n| n.position()).collect()
    }

    /// Overwrite `out` with the node positions, reusing its allocation.
    pub fn write_positions(&self, out: &mut AllocVec<V>) {
        out.clear();
        out.extend(self.nodes.iter().map(|n| n.position()));
    }

    /// True when no node position has gone NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.nodes.iter().all(|n| n.position().is_finite())
    }

    /// Largest absolute strain over all constraints (zero when empty).
    pub fn max_strain(&self) -> V::Scalar {
        self.constraints
            .iter()
            .map(|c| c.strain(&self.nodes).abs())
            .fold(V::Scalar::zero(), |acc, s| acc.max(s))
    }
}

impl<F: Float> Simulation<Vec3<F>> {
    /// Overwrite `out` with flattened `[x, y, z, x, y, z, ...]` positions,
    /// the layout a vertex buffer upload expects.
    pub fn write_position_buffer(&self, out: &mut AllocVec<F>) {
        out.clear();
        out.reserve(self.nodes.len() * 3);
        for node in self.nodes.iter() {
            let p = node.position();
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
    }
}

impl<V: Vec> Default for Simulation<V> {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
