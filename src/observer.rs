//! Step observer trait for monitoring frame progress.

/// Trait for observing web simulation frames.
///
/// Implement this to watch solver progress (debug overlays, profiling,
/// counting cuts). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after each full relaxation pass over every point.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called after every point has been integrated.
    fn on_integrate(&mut self) {}

    /// Called when constraints owned by `point` were cut by the pointer or torn.
    fn on_constraints_removed(&mut self, _point: usize, _count: usize) {}

    /// Called when a frame's update is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
