//! Distance constraints that pull node pairs toward their rest length.

use crate::error::{Result, SimulationError};
use crate::float::Float;
use crate::handle::NodeHandle;
use crate::node::Node;
use crate::vec::Vec;

/// Keeps two nodes near the distance they had when the constraint was made.
///
/// The correction is a force, not a displacement: each [`solve`] adds an
/// equal and opposite pair to the endpoints' accumulators, which the next
/// integration consumes. Constraints hold no state besides their rest
/// length, so any number of them compose by plain force summation.
///
/// [`solve`]: DistanceConstraint::solve
#[derive(Clone, Debug)]
pub struct DistanceConstraint<V: Vec> {
    a: NodeHandle,
    b: NodeHandle,
    rest_length: V::Scalar,
    stiffness: V::Scalar,
}

impl<V: Vec> DistanceConstraint<V> {
    /// Pair `a` and `b` at their current separation.
    pub fn new(
        a: NodeHandle,
        b: NodeHandle,
        nodes: &[Node<V>],
        stiffness: V::Scalar,
    ) -> Result<Self> {
        if a == b {
            return Err(SimulationError::SelfConstraint { node: a.index() });
        }
        let count = nodes.len();
        let pos_a = nodes
            .get(a.index())
            .ok_or(SimulationError::NodeOutOfBounds { index: a.index(), count })?
            .position();
        let pos_b = nodes
            .get(b.index())
            .ok_or(SimulationError::NodeOutOfBounds { index: b.index(), count })?
            .position();

        if !stiffness.is_finite() || stiffness < V::Scalar::zero() {
            return Err(SimulationError::InvalidStiffness);
        }

        let rest_length = pos_a.distance(pos_b);
        if rest_length.is_near_zero(V::Scalar::from_f32(1e-10)) {
            return Err(SimulationError::DegenerateConstraint { a: a.index(), b: b.index() });
        }

        Ok(DistanceConstraint { a, b, rest_length, stiffness })
    }

    /// Add this constraint's corrective forces to its endpoints.
    ///
    /// Coincident endpoints have no defined direction; the correction is
    /// skipped for that call instead of producing non-finite forces.
    pub fn solve(&self, nodes: &mut [Node<V>]) {
        let (a, b) = (self.a.index(), self.b.index());
        let a_static = nodes[a].is_static();
        let b_static = nodes[b].is_static();
        if a_static && b_static {
            return;
        }

        let direction = nodes[b].position() - nodes[a].position();
        let current_length = direction.length();
        if current_length.is_near_zero(V::Scalar::from_f32(1e-10)) {
            return;
        }

        // Positive when the pair is compressed, negative when stretched.
        let difference = self.rest_length - current_length;
        let correction_fraction = (difference / current_length) / V::Scalar::two();
        let offset = direction.normalize().scale(correction_fraction * self.stiffness);

        if !a_static {
            nodes[a].add_force(-offset);
        }
        if !b_static {
            nodes[b].add_force(offset);
        }
    }

    pub fn a(&self) -> NodeHandle { self.a }
    pub fn b(&self) -> NodeHandle { self.b }
    pub fn rest_length(&self) -> V::Scalar { self.rest_length }
    pub fn stiffness(&self) -> V::Scalar { self.stiffness }

    /// Current endpoint separation.
    pub fn current_length(&self, nodes: &[Node<V>]) -> V::Scalar {
        nodes[self.a.index()].position().distance(nodes[self.b.index()].position())
    }

    /// Relative stretch `(L - L0) / L0`; negative when compressed.
    pub fn strain(&self, nodes: &[Node<V>]) -> V::Scalar {
        (self.current_length(nodes) - self.rest_length) / self.rest_length
    }
}
