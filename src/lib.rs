//! Real-time cloth simulation with Verlet integration.
//!
//! `weft` models cloth as a grid of point masses joined by distance
//! constraints. Each step integrates the nodes with variable-timestep
//! Verlet, then relaxes every constraint a fixed number of times. Corrections
//! are forces, so they are integrated together with gravity on the next step.
//!
//! # Features
//!
//! - **Verlet nodes**: implicit velocity, rescaled when the step length changes
//! - **Force-based constraints**: rest-length springs composed by summation
//! - **Arena handles**: constraints address nodes by stable index
//! - **Cloth grids**: structural, shear and bend wiring with pin patterns
//! - **Fixed-timestep driver**: decouples physics from frame rate
//! - **Picking**: ray/sphere hit tests and pointer-drag impulses
//! - **Observable**: monitor steps via the `StepObserver` trait or `tracing`
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use weft::{ClothGrid, GridConfig, PinPattern, SimulationConfig, Vec3};
//!
//! let grid_config = GridConfig { pins: PinPattern::TopRow, ..GridConfig::default() };
//! let sim_config = SimulationConfig::new().with_gravity(Vec3::new(0.0, -9.81, 0.0));
//! let mut cloth = ClothGrid::build(&grid_config, sim_config).unwrap();
//!
//! let top = cloth.position_at(5, 9);
//! for _ in 0..60 {
//!     cloth.update(1.0 / 60.0).unwrap();
//! }
//! assert!(cloth.position_at(5, 9).y < top.y);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod handle;
pub mod node;
pub mod constraint;
pub mod simulation;
pub mod grid;
pub mod stepper;
pub mod pick;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Planar, Vec2, Vec3};
pub use handle::{NodeHandle, ConstraintHandle};
pub use node::Node;
pub use constraint::DistanceConstraint;
pub use simulation::Simulation;
pub use grid::{ClothGrid, GridConfig, PinPattern};
pub use stepper::{FixedStepper, Advance};
pub use pick::{Ray, intersects_sphere};
pub use config::SimulationConfig;
pub use observer::{StepObserver, NoOpStepObserver, TracingStepObserver, StepStats};
pub use error::{SimulationError, Result};
