//! Step observer trait for monitoring simulation progress.

/// Hooks called by [`Simulation::step`](crate::simulation::Simulation::step).
///
/// Every method defaults to a no-op, so implementors override only the
/// phases they care about.
pub trait StepObserver {
    /// Called after every node has been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each constraint relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a step of length `dt` is fully complete.
    fn on_step_complete(&mut self, _dt: f64) {}
}

/// Observer used by [`Simulation::update`](crate::simulation::Simulation::update).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Emits `tracing` events: `trace` per relaxation pass, `debug` per step.
#[derive(Debug, Default)]
pub struct TracingStepObserver {
    step: u64,
}

impl TracingStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps completed so far.
    pub fn steps(&self) -> u64 {
        self.step
    }
}

impl StepObserver for TracingStepObserver {
    fn on_constraint_iteration(&mut self, iteration: usize) {
        tracing::trace!(step = self.step, iteration, "constraint relaxation pass");
    }

    fn on_step_complete(&mut self, dt: f64) {
        tracing::debug!(step = self.step, dt, "cloth step complete");
        self.step += 1;
    }
}

/// Counts steps, relaxation passes and simulated time.
///
/// Frame telemetry (delta time, step rate) is read from here by the caller
/// rather than written anywhere by the physics step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    pub steps: u64,
    pub iterations: u64,
    pub elapsed: f64,
    pub last_dt: f64,
}

impl StepObserver for StepStats {
    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.iterations += 1;
    }

    fn on_step_complete(&mut self, dt: f64) {
        self.steps += 1;
        self.elapsed += dt;
        self.last_dt = dt;
    }
}
