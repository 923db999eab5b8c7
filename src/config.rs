//! Configuration for web construction and the per-frame solver.

use crate::error::WebError;
use crate::float::Float;

/// Constants for building and simulating a web.
///
/// All values are read at construction or on every frame; none of them are
/// changed by the simulation itself.
///
/// # Builder Pattern
/// ```
/// use silk::config::WebConfig;
///
/// let config: WebConfig<f32> = WebConfig::new()
///     .with_iterations(4)
///     .with_gravity(900.0)
///     .with_rings(5)
///     .with_spokes(8)
///     .with_tear_distance(60.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WebConfig<F: Float> {
    /// Relaxation passes over every point before integrating. Default: 3.
    pub iterations: usize,
    /// Primary-button capture radius around the pointer. Default: 20.
    pub pointer_radius: F,
    /// Secondary-button cut radius around the pointer. Default: 5.
    pub cut_radius: F,
    /// Downward (+y) gravitational acceleration in units/s². Default: 1200.
    pub gravity: F,
    /// Number of arms after the first one; arm 0 carries the hub. Default: 7.
    pub ring_count: usize,
    /// Radial points per arm, the outermost one pinned. Default: 6.
    pub spoke_count: usize,
    /// Radial distance between consecutive points of an arm. Default: 25.
    pub spacing: F,
    /// Distance step for curved-edge control points. Default: 20.
    pub control_offset: F,
    /// Velocity retention per integration step. Default: 0.99.
    pub damping: F,
    /// Fixed integration step in seconds. Default: 0.016.
    pub time_step: F,
    /// Accumulated forces are rounded to multiples of `1 / force_resolution`. Default: 400.
    pub force_resolution: F,
    /// Constraints stretched beyond this length are removed. Default: `None` (never tear).
    pub tear_distance: Option<F>,
    /// Fill a dot at every point after stroking the web. Default: false.
    pub draw_points: bool,
    /// Radius of the dots drawn when `draw_points` is set. Default: 2.
    pub point_radius: F,
    /// Stroke style handed to the canvas before the first frame. Default: `"#888"`.
    pub stroke_style: &'static str,
}

impl<F: Float> WebConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WebConfig {
            iterations: 3,
            pointer_radius: F::from_f64(20.0),
            cut_radius: F::from_f64(5.0),
            gravity: F::from_f64(1200.0),
            ring_count: 7,
            spoke_count: 6,
            spacing: F::from_f64(25.0),
            control_offset: F::from_f64(20.0),
            damping: F::from_f64(0.99),
            time_step: F::from_f64(0.016),
            force_resolution: F::from_f64(400.0),
            tear_distance: None,
            draw_points: false,
            point_radius: F::from_f64(2.0),
            stroke_style: "#888",
        }
    }

    /// Set the number of relaxation passes per frame.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravitational acceleration.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the pointer capture radius.
    pub fn with_pointer_radius(mut self, radius: F) -> Self {
        self.pointer_radius = radius;
        self
    }

    /// Set the pointer cut radius.
    pub fn with_cut_radius(mut self, radius: F) -> Self {
        self.cut_radius = radius;
        self
    }

    /// Set the number of arms after the first.
    pub fn with_rings(mut self, ring_count: usize) -> Self {
        self.ring_count = ring_count;
        self
    }

    /// Set the number of radial points per arm.
    pub fn with_spokes(mut self, spoke_count: usize) -> Self {
        self.spoke_count = spoke_count;
        self
    }

    /// Set the radial spacing.
    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the fixed integration step.
    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    /// Enable tearing of constraints stretched beyond `distance`.
    pub fn with_tear_distance(mut self, distance: F) -> Self {
        self.tear_distance = Some(distance);
        self
    }

    /// Draw a dot at every point.
    pub fn with_point_dots(mut self, radius: F) -> Self {
        self.draw_points = true;
        self.point_radius = radius;
        self
    }

    /// Set the stroke style applied before the first frame.
    pub fn with_stroke_style(mut self, style: &'static str) -> Self {
        self.stroke_style = style;
        self
    }

    /// Angular step between consecutive arms (π/4).
    pub fn angle_step(&self) -> F {
        F::pi() / F::from_f64(4.0)
    }

    /// Points in a web built from this config: the hub plus every arm's radial points.
    ///
    /// Only meaningful for a config that passed [`WebConfig::validate`].
    pub fn point_count(&self) -> usize {
        1 + (self.ring_count + 1) * self.spoke_count
    }

    /// Check every value the web relies on.
    pub fn validate(&self) -> Result<(), WebError> {
        if self.ring_count == 0 {
            return Err(WebError::InvalidRingCount);
        }
        if self.spoke_count == 0 {
            return Err(WebError::InvalidSpokeCount);
        }
        let arms = self.ring_count.checked_add(1).ok_or(WebError::InvalidRingCount)?;
        arms.checked_mul(self.spoke_count)
            .and_then(|radial| radial.checked_add(1))
            .ok_or(WebError::InvalidSpokeCount)?;
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return Err(WebError::InvalidSpacing);
        }
        if self.iterations == 0 {
            return Err(WebError::InvalidIterations);
        }
        if !self.time_step.is_finite() || self.time_step <= F::zero() {
            return Err(WebError::InvalidTimeStep);
        }
        if !self.damping.is_finite() || self.damping < F::zero() || self.damping > F::one() {
            return Err(WebError::InvalidDamping);
        }
        if !self.force_resolution.is_finite() || self.force_resolution <= F::zero() {
            return Err(WebError::InvalidForceResolution);
        }
        Ok(())
    }
}

impl<F: Float> Default for WebConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
