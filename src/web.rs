//! Radial spiderweb built from Verlet points and distance constraints.

use crate::canvas::Canvas;
use crate::config::WebConfig;
use crate::constraint::Segment;
use crate::error::WebError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::point::Point;
use crate::pointer::Pointer;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use log::{debug, trace, warn};

/// A spiderweb: a hub, `ring_count + 1` arms of `spoke_count` radial points,
/// and the constraints that tie them together.
///
/// Points live in one arena in creation order. The hub is index 0 and the
/// point `radial` steps out on arm `arm` is `radial + arm * spoke_count`.
/// Every constraint is stored on exactly one endpoint, its owner.
pub struct Web<F: Float> {
    points: AllocVec<Point<F>>,
    config: WebConfig<F>,
    center: Vec2<F>,
    /// Set once divergence has been reported, cleared by `init`.
    diverged: bool,
}

impl<F: Float> Web<F> {
    /// Build a web around `center`.
    ///
    /// Arm `y` points along `y * π/4`. Walking each arm outward:
    /// - radial point 1 attaches to the hub, later ones to their predecessor;
    /// - the outermost radial point is pinned where it starts;
    /// - inner points of arms 1.. attach to the same radial point of the
    ///   previous arm, curving through a control point half an arm step back;
    /// - inner points of the last arm also attach to arm 0, closing the web,
    ///   curving half an arm step forward.
    pub fn new(config: WebConfig<F>, center: Vec2<F>) -> Result<Self, WebError> {
        config.validate()?;
        let mut web = Web {
            points: AllocVec::with_capacity(config.point_count()),
            config,
            center,
            diverged: false,
        };
        web.init()?;
        Ok(web)
    }

    fn init(&mut self) -> Result<(), WebError> {
        self.points.clear();
        self.diverged = false;

        let rings = self.config.ring_count;
        let spokes = self.config.spoke_count;
        let spacing = self.config.spacing;
        let offset = self.config.control_offset;
        let angle = self.config.angle_step();
        let half_angle = angle * F::half();
        let hub = self.center;

        for arm in 0..=rings {
            let arm_angle = F::from_usize(arm) * angle;
            let direction = Vec2::from_angle(arm_angle);
            let first = if arm == 0 { 0 } else { 1 };

            for radial in first..=spokes {
                let pos = self.center + direction.scale(F::from_usize(radial) * spacing);
                let index = self.points.len();
                self.points.push(Point::new(pos));

                if radial > 0 {
                    let inner = if radial == 1 { 0 } else { index - 1 };
                    Point::attach(&mut self.points, index, inner, None)?;
                }

                if radial == spokes {
                    self.points[index].pin(pos);
                    continue;
                }

                let reach = offset * F::from_usize(radial);
                if arm > 0 {
                    let control = hub + Vec2::from_angle(arm_angle - half_angle).scale(reach);
                    let neighbour = radial + (arm - 1) * spokes;
                    Point::attach(&mut self.points, index, neighbour, Some(control))?;
                }
                if arm == rings {
                    let control = hub + Vec2::from_angle(arm_angle + half_angle).scale(reach);
                    Point::attach(&mut self.points, index, radial, Some(control))?;
                }
            }
        }

        debug!(
            "built web: {} points, {} constraints, {} pinned",
            self.points.len(),
            self.constraint_count(),
            self.pinned_count()
        );
        Ok(())
    }

    /// Rebuild the topology from scratch, discarding all motion, cuts and tears.
    pub fn reset(&mut self) -> Result<(), WebError> {
        self.init()?;
        debug!("web reset");
        Ok(())
    }

    /// Advance one frame: relax all constraints, then integrate every point.
    ///
    /// Runs `iterations` passes of [`Point::resolve_constraints`] over the
    /// points in reverse storage order, then [`Point::update`] with the fixed
    /// `time_step` on every point, again in reverse order. Integration only
    /// ever sees the relaxed configuration.
    pub fn update<O: StepObserver>(&mut self, pointer: &Pointer<F>, observer: &mut O) {
        for pass in 0..self.config.iterations {
            for index in (0..self.points.len()).rev() {
                let torn = Point::resolve_constraints(&mut self.points, index, &self.config);
                if torn > 0 {
                    debug!("tore {} constraint(s) at point {}", torn, index);
                    observer.on_constraints_removed(index, torn);
                }
            }
            observer.on_relaxation_pass(pass);
        }

        let dt = self.config.time_step;
        for index in (0..self.points.len()).rev() {
            let cut = self.points[index].update(dt, &self.config, pointer);
            if cut > 0 {
                debug!("cut {} constraint(s) at point {}", cut, index);
                observer.on_constraints_removed(index, cut);
            }
        }
        observer.on_integrate();

        if !self.diverged && self.has_diverged() {
            self.diverged = true;
            warn!("web has non-finite point positions; reset to recover");
        }
        trace!("web step complete");
        observer.on_step_complete();
    }

    /// Every constraint as a drawable segment, in draw order.
    ///
    /// Points are visited newest first and each point's constraints newest
    /// first, so the sequence is deterministic.
    pub fn segments(&self) -> impl Iterator<Item = Segment<F>> + '_ {
        let points = &self.points;
        points
            .iter()
            .rev()
            .flat_map(move |p| p.constraints().iter().rev().map(move |c| c.segment(points)))
    }

    /// Stroke the whole web as a single path.
    pub fn draw<C: Canvas<F>>(&self, canvas: &mut C) {
        canvas.begin_path();
        for segment in self.segments() {
            segment.draw(canvas);
        }
        canvas.stroke();

        if self.config.draw_points {
            for p in self.points.iter().rev() {
                canvas.fill_circle(p.pos, self.config.point_radius);
            }
        }
    }

    /// Cut every constraint owned by points within `radius` of `pos`.
    /// Returns the number of constraints removed.
    pub fn cut_at(&mut self, pos: Vec2<F>, radius: F) -> usize {
        let mut removed = 0;
        for (index, p) in self.points.iter_mut().enumerate() {
            if p.distance_to(pos) < radius {
                let cut = p.cut();
                if cut > 0 {
                    debug!("cut {} constraint(s) at point {}", cut, index);
                }
                removed += cut;
            }
        }
        removed
    }

    /// Arena index of the point `radial` steps out on `arm`. Radial 0 is the hub.
    pub fn index_of(&self, arm: usize, radial: usize) -> Option<usize> {
        if arm > self.config.ring_count || radial > self.config.spoke_count {
            return None;
        }
        if radial == 0 {
            return Some(0);
        }
        Some(radial + arm * self.config.spoke_count)
    }

    /// Index of the point closest to `pos`.
    pub fn nearest_point(&self, pos: Vec2<F>) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for (index, p) in self.points.iter().enumerate() {
            let d = p.pos.distance_sq(pos);
            let closer = match best {
                Some((_, best_d)) => d < best_d,
                None => true,
            };
            if closer {
                best = Some((index, d));
            }
        }
        best.map(|(index, _)| index)
    }

    /// `true` if any point has a NaN or infinite position.
    pub fn has_diverged(&self) -> bool {
        self.points.iter().any(|p| !p.pos.is_finite())
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn points_mut(&mut self) -> &mut [Point<F>] { &mut self.points }
    pub fn point(&self, index: usize) -> &Point<F> { &self.points[index] }
    pub fn point_mut(&mut self, index: usize) -> &mut Point<F> { &mut self.points[index] }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn center(&self) -> Vec2<F> { self.center }
    pub fn config(&self) -> &WebConfig<F> { &self.config }

    pub fn constraint_count(&self) -> usize {
        self.points.iter().map(|p| p.constraints().len()).sum()
    }

    pub fn pinned_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_pinned()).count()
    }
}
