//! Web points: Verlet particles that own their outgoing constraints.

use crate::config::WebConfig;
use crate::constraint::Constraint;
use crate::error::WebError;
use crate::float::Float;
use crate::pointer::{Pointer, PointerButton};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A Verlet point with implicit velocity (`pos - prev_pos`).
///
/// Forces accumulate in `force` until the next [`Point::update`], which
/// consumes and clears them. A pinned point is treated as infinitely heavy:
/// it is snapped to its pin, ignores integration and is never displaced by
/// constraint resolution.
#[derive(Clone, Debug)]
pub struct Point<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub force: Vec2<F>,
    pin: Option<Vec2<F>>,
    constraints: AllocVec<Constraint<F>>,
}

impl<F: Float> Point<F> {
    /// A resting, unpinned point with no constraints.
    pub fn new(pos: Vec2<F>) -> Self {
        Point {
            pos,
            prev_pos: pos,
            force: Vec2::zero(),
            pin: None,
            constraints: AllocVec::new(),
        }
    }

    /// Accumulate a force, rounding the sum to multiples of `1 / resolution`.
    ///
    /// The rounding keeps long runs from drifting on float noise.
    pub fn add_force(&mut self, force: Vec2<F>, resolution: F) {
        let sum = self.force + force;
        self.force = Vec2::new(sum.x.round_to(resolution), sum.y.round_to(resolution));
    }

    /// Attach `owner` to `other` with a constraint stored on `owner`.
    ///
    /// The rest length is the distance between the two points right now.
    pub fn attach(
        points: &mut [Point<F>],
        owner: usize,
        other: usize,
        control: Option<Vec2<F>>,
    ) -> Result<(), WebError> {
        let count = points.len();
        for index in [owner, other] {
            if index >= count {
                return Err(WebError::PointOutOfBounds { index, count });
            }
        }
        let constraint = Constraint::between(points, owner, other, control);
        points[owner].constraints.push(constraint);
        Ok(())
    }

    pub fn pin(&mut self, pos: Vec2<F>) {
        self.pin = Some(pos);
    }

    pub fn unpin(&mut self) {
        self.pin = None;
    }

    pub fn is_pinned(&self) -> bool {
        self.pin.is_some()
    }

    pub fn pin_position(&self) -> Option<Vec2<F>> {
        self.pin
    }

    /// Constraints owned by this point, in attach order.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Drop every owned constraint. Returns how many were removed.
    pub fn cut(&mut self) -> usize {
        let count = self.constraints.len();
        self.constraints.clear();
        count
    }

    /// Displacement since the previous step.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn distance_to(&self, pos: Vec2<F>) -> F {
        self.pos.distance(pos)
    }

    /// One relaxation pass for the point at `index`.
    ///
    /// Snaps a pinned point onto its pin, then resolves the owned constraints
    /// newest first. With tearing enabled, a constraint longer than
    /// `tear_distance` is removed instead of resolved. Returns the number of
    /// torn constraints.
    pub fn resolve_constraints(points: &mut [Point<F>], index: usize, config: &WebConfig<F>) -> usize {
        if let Some(pin) = points[index].pin {
            points[index].pos = pin;
        }

        let mut torn = 0;
        for i in (0..points[index].constraints.len()).rev() {
            let constraint = points[index].constraints[i];
            if let Some(limit) = config.tear_distance {
                if constraint.length(points) > limit {
                    points[index].constraints.remove(i);
                    torn += 1;
                    continue;
                }
            }
            constraint.resolve(points);
        }
        torn
    }

    /// Pointer interaction, gravity and one Verlet step of `dt` seconds.
    ///
    /// Returns the number of constraints cut by the secondary button.
    pub fn update(&mut self, dt: F, config: &WebConfig<F>, pointer: &Pointer<F>) -> usize {
        let dist = self.distance_to(pointer.pos);
        let mut cut = 0;
        match pointer.button {
            PointerButton::Primary if dist < config.pointer_radius && !self.is_pinned() => {
                self.pos = pointer.pos;
            }
            PointerButton::Secondary if dist < config.cut_radius => {
                cut = self.cut();
            }
            _ => {}
        }

        if self.is_pinned() {
            self.force = Vec2::zero();
            self.prev_pos = self.pos;
            return cut;
        }

        self.add_force(Vec2::new(F::zero(), config.gravity), config.force_resolution);

        let dt_sq = dt * dt;
        let next = self.pos
            + (self.pos - self.prev_pos).scale(config.damping)
            + self.force.scale(F::half() * dt_sq);

        self.prev_pos = self.pos;
        self.pos = next;
        self.force = Vec2::zero();
        cut
    }
}
