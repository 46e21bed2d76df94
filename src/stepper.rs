//! Fixed-timestep driver decoupling physics time from frame time.

use crate::error::{Result, SimulationError};
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::simulation::Simulation;
use crate::vec::Vec;

/// Outcome of one [`FixedStepper::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advance<F: Float> {
    /// Physics steps taken this frame.
    pub steps: usize,
    /// Accumulated time discarded because `max_steps` was reached.
    pub dropped: F,
}

/// Accumulates variable frame deltas and spends them in constant steps.
///
/// Each frame's delta is added to an accumulator, and the simulation is
/// stepped with the fixed `step` until less than one step remains. At most
/// `max_steps` steps run per frame; whole steps beyond that are dropped so a
/// long stall cannot snowball into ever longer frames.
#[derive(Clone, Debug)]
pub struct FixedStepper<F: Float> {
    step: F,
    accumulator: F,
    max_steps: usize,
}

impl<F: Float> FixedStepper<F> {
    pub const DEFAULT_MAX_STEPS: usize = 8;

    pub fn new(step: F) -> Result<Self> {
        if !step.is_finite() || step <= F::zero() {
            return Err(SimulationError::InvalidTimestep(step.to_f64()));
        }
        Ok(FixedStepper { step, accumulator: F::zero(), max_steps: Self::DEFAULT_MAX_STEPS })
    }

    /// Cap the number of steps per frame (at least 1).
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn advance<V>(&mut self, simulation: &mut Simulation<V>, frame_dt: F) -> Result<Advance<F>>
    where
        V: Vec<Scalar = F>,
    {
        self.advance_observed(simulation, frame_dt, &mut NoOpStepObserver)
    }

    /// Spend `frame_dt` seconds of accumulated time on fixed steps.
    pub fn advance_observed<V, O>(
        &mut self,
        simulation: &mut Simulation<V>,
        frame_dt: F,
        observer: &mut O,
    ) -> Result<Advance<F>>
    where
        V: Vec<Scalar = F>,
        O: StepObserver,
    {
        if !frame_dt.is_finite() || frame_dt < F::zero() {
            return Err(SimulationError::InvalidTimestep(frame_dt.to_f64()));
        }

        self.accumulator = self.accumulator + frame_dt;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            simulation.step(self.step, observer)?;
            self.accumulator = self.accumulator - self.step;
            steps += 1;
        }

        let mut dropped = F::zero();
        if self.accumulator >= self.step {
            let whole = (self.accumulator / self.step).floor();
            dropped = whole * self.step;
            self.accumulator = self.accumulator - dropped;
            tracing::debug!(steps, dropped = dropped.to_f64(), "fixed stepper fell behind");
        }

        Ok(Advance { steps, dropped })
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> F {
        self.accumulator / self.step
    }

    pub fn step(&self) -> F { self.step }
    pub fn accumulator(&self) -> F { self.accumulator }

    pub fn reset(&mut self) {
        self.accumulator = F::zero();
    }
}
