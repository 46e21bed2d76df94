//! Stable handles into the simulation's node and constraint arenas.
//!
//! The arenas are append-only, so a handle issued by a [`Simulation`]
//! stays valid for that simulation's whole lifetime.
//!
//! [`Simulation`]: crate::simulation::Simulation

/// Index of a node in its simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Handle for the node at `index`. Validity is checked where the handle
    /// is used.
    pub fn from_index(index: usize) -> Self {
        NodeHandle(index)
    }

    /// Position of the node in [`Simulation::nodes`].
    ///
    /// [`Simulation::nodes`]: crate::simulation::Simulation::nodes
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a constraint in its simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintHandle(usize);

impl ConstraintHandle {
    pub fn from_index(index: usize) -> Self {
        ConstraintHandle(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}
