//! Rectangular cloth sheets: node layout, pin policy and constraint wiring.

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::float::Float;
use crate::handle::NodeHandle;
use crate::observer::StepObserver;
use crate::simulation::Simulation;
use crate::vec::Planar;
use alloc::vec::Vec as AllocVec;

/// Which grid nodes are created static.
#[derive(Clone, Debug, PartialEq)]
pub enum PinPattern {
    /// Nothing pinned; the sheet falls freely.
    None,
    /// Every node of row 0.
    TopRow,
    /// The two ends of row 0.
    TopCorners,
    /// Every n-th column of row 0, plus its last column.
    TopEvery(usize),
    /// Explicit `(col, row)` cells.
    Custom(AllocVec<(usize, usize)>),
}

impl PinPattern {
    pub fn is_pinned(&self, col: usize, row: usize, cols: usize) -> bool {
        let last_col = cols.saturating_sub(1);
        match self {
            PinPattern::None => false,
            PinPattern::TopRow => row == 0,
            PinPattern::TopCorners => row == 0 && (col == 0 || col == last_col),
            PinPattern::TopEvery(n) => row == 0 && ((*n > 0 && col % n == 0) || col == last_col),
            PinPattern::Custom(cells) => cells.contains(&(col, row)),
        }
    }
}

/// Configuration for a cloth grid.
///
/// The sheet is centred on the origin of the layout plane. Row 0 is the
/// top edge at `+height / 2`; rows descend from there.
#[derive(Clone, Debug)]
pub struct GridConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub width: F,
    pub height: F,
    pub node_mass: F,
    /// Stiffness of horizontal and vertical neighbour constraints.
    pub stiffness: F,
    /// Diagonal constraints; zero creates none.
    pub shear_stiffness: F,
    /// Skip-one constraints; zero creates none.
    pub bend_stiffness: F,
    pub pins: PinPattern,
}

impl<F: Float> Default for GridConfig<F> {
    /// A 10x10 unit sheet hanging from every fourth top node.
    fn default() -> Self {
        GridConfig {
            cols: 10,
            rows: 10,
            width: F::one(),
            height: F::one(),
            node_mass: F::from_f32(0.01),
            stiffness: F::from_f32(0.4),
            shear_stiffness: F::zero(),
            bend_stiffness: F::zero(),
            pins: PinPattern::TopEvery(4),
        }
    }
}

/// A cloth sheet built on a [`Simulation`].
///
/// Node at (col, row) has index `row * cols + col`.
pub struct ClothGrid<V: Planar> {
    simulation: Simulation<V>,
    cols: usize,
    rows: usize,
}

impl<V: Planar> ClothGrid<V> {
    /// Lay out the nodes and wire up the constraints.
    ///
    /// Constraint order: for each node in row-major order, its right then
    /// lower neighbour (structural); then both diagonals of every cell
    /// (shear); then skip-one horizontal and vertical pairs (bend).
    pub fn build(config: &GridConfig<V::Scalar>, sim_config: SimulationConfig<V>) -> Result<Self> {
        let (cols, rows) = (config.cols, config.rows);
        if cols < 2 || rows < 2 {
            return Err(SimulationError::InvalidGridDimensions { cols, rows });
        }
        let zero = V::Scalar::zero();
        if !(config.width > zero && config.width.is_finite())
            || !(config.height > zero && config.height.is_finite())
        {
            return Err(SimulationError::InvalidConfig("grid extent must be positive"));
        }

        let mut simulation = Simulation::try_new(sim_config)?;

        let two = V::Scalar::two();
        let stride_x = config.width / V::Scalar::from_f32((cols - 1) as f32);
        let stride_y = config.height / V::Scalar::from_f32((rows - 1) as f32);
        let left = -config.width / two;
        let top = config.height / two;

        for row in 0..rows {
            for col in 0..cols {
                let x = left + V::Scalar::from_f32(col as f32) * stride_x;
                let y = top - V::Scalar::from_f32(row as f32) * stride_y;
                let mass = if config.pins.is_pinned(col, row, cols) { zero } else { config.node_mass };
                simulation.create_node(V::from_plane(x, y), mass)?;
            }
        }

        let at = |col: usize, row: usize| NodeHandle::from_index(row * cols + col);

        // Structural
        for row in 0..rows {
            for col in 0..cols {
                if col < cols - 1 {
                    simulation.create_constraint(at(col, row), at(col + 1, row), config.stiffness)?;
                }
                if row < rows - 1 {
                    simulation.create_constraint(at(col, row), at(col, row + 1), config.stiffness)?;
                }
            }
        }

        // Shear: diagonals
        if config.shear_stiffness > zero {
            for row in 0..(rows - 1) {
                for col in 0..(cols - 1) {
                    simulation.create_constraint(at(col, row), at(col + 1, row + 1), config.shear_stiffness)?;
                    simulation.create_constraint(at(col + 1, row), at(col, row + 1), config.shear_stiffness)?;
                }
            }
        }

        // Bend: skip-one horizontal, then vertical
        if config.bend_stiffness > zero {
            for row in 0..rows {
                for col in 0..(cols - 2) {
                    simulation.create_constraint(at(col, row), at(col + 2, row), config.bend_stiffness)?;
                }
            }
            for row in 0..rows.saturating_sub(2) {
                for col in 0..cols {
                    simulation.create_constraint(at(col, row), at(col, row + 2), config.bend_stiffness)?;
                }
            }
        }

        tracing::debug!(
            cols,
            rows,
            nodes = simulation.node_count(),
            constraints = simulation.constraint_count(),
            "built cloth grid"
        );

        Ok(ClothGrid { simulation, cols, rows })
    }

    /// Handle of the node at (col, row).
    pub fn handle(&self, col: usize, row: usize) -> NodeHandle {
        NodeHandle::from_index(row * self.cols + col)
    }

    pub fn position_at(&self, col: usize, row: usize) -> V {
        self.simulation.nodes()[row * self.cols + col].position()
    }

    pub fn update(&mut self, dt: V::Scalar) -> Result<()> {
        self.simulation.update(dt)
    }

    pub fn step<O: StepObserver>(&mut self, dt: V::Scalar, observer: &mut O) -> Result<()> {
        self.simulation.step(dt, observer)
    }

    pub fn simulation(&self) -> &Simulation<V> { &self.simulation }
    pub fn simulation_mut(&mut self) -> &mut Simulation<V> { &mut self.simulation }
    pub fn into_simulation(self) -> Simulation<V> { self.simulation }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
}
