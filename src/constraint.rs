//! Distance constraints between web points.

use crate::canvas::Canvas;
use crate::float::Float;
use crate::point::Point;
use crate::vec::Vec2;

/// Below this separation a constraint has no usable direction and is skipped.
const DEGENERATE_DISTANCE: f64 = 1e-10;

/// Keeps two points at the distance they had when the constraint was attached.
///
/// The constraint lives in the constraint list of its owner `p1` only. `p2`
/// is a plain index into the same point arena. `control` bends the rendered
/// edge into a quadratic curve and has no physical effect.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraint<F: Float> {
    pub p1: usize,
    pub p2: usize,
    pub control: Option<Vec2<F>>,
    rest_length: F,
}

/// One drawable edge: a line, or a quadratic curve when `control` is set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment<F: Float> {
    pub from: Vec2<F>,
    pub control: Option<Vec2<F>>,
    pub to: Vec2<F>,
}

impl<F: Float> Constraint<F> {
    pub fn new(p1: usize, p2: usize, rest_length: F, control: Option<Vec2<F>>) -> Self {
        Constraint { p1, p2, control, rest_length }
    }

    /// Constraint whose rest length is the current distance between `p1` and `p2`.
    pub fn between(points: &[Point<F>], p1: usize, p2: usize, control: Option<Vec2<F>>) -> Self {
        let rest_length = points[p1].pos.distance(points[p2].pos);
        Constraint { p1, p2, control, rest_length }
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Current distance between the endpoints.
    pub fn length(&self, points: &[Point<F>]) -> F {
        points[self.p1].pos.distance(points[self.p2].pos)
    }

    /// Current length minus rest length; positive when stretched.
    pub fn stretch(&self, points: &[Point<F>]) -> F {
        self.length(points) - self.rest_length
    }

    /// One relaxation step toward the rest length along the p1→p2 axis.
    ///
    /// Each free endpoint moves by half the correction. A pinned endpoint
    /// stays put and its half is dropped. Returns `false` when nothing could
    /// be moved: coincident endpoints or both endpoints pinned.
    pub fn resolve(&self, points: &mut [Point<F>]) -> bool {
        let delta = points[self.p1].pos - points[self.p2].pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f64(DEGENERATE_DISTANCE)) {
            return false;
        }

        let diff = (self.rest_length - dist) / dist;
        let half = delta.scale(diff * F::half());

        let (pinned1, pinned2) = (points[self.p1].is_pinned(), points[self.p2].is_pinned());
        if pinned1 && pinned2 {
            return false;
        }
        if !pinned1 {
            points[self.p1].pos = points[self.p1].pos + half;
        }
        if !pinned2 {
            points[self.p2].pos = points[self.p2].pos - half;
        }
        true
    }

    pub fn segment(&self, points: &[Point<F>]) -> Segment<F> {
        Segment {
            from: points[self.p1].pos,
            control: self.control,
            to: points[self.p2].pos,
        }
    }

    /// Append this edge to the canvas's current path.
    pub fn draw<C: Canvas<F>>(&self, points: &[Point<F>], canvas: &mut C) {
        self.segment(points).draw(canvas);
    }
}

impl<F: Float> Segment<F> {
    pub fn draw<C: Canvas<F>>(&self, canvas: &mut C) {
        canvas.move_to(self.from);
        match self.control {
            Some(control) => canvas.quadratic_curve_to(control, self.to),
            None => canvas.line_to(self.to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CommandBuffer, DrawCommand};
    use alloc::vec;

    #[test]
    fn rest_length_is_attach_distance() {
        let points = vec![Point::new(Vec2::new(1.0f64, 2.0)), Point::new(Vec2::new(4.0, 6.0))];
        let c = Constraint::between(&points, 0, 1, None);
        assert!((c.rest_length() - 5.0).abs() < 1e-12);
        assert!(c.stretch(&points).abs() < 1e-12);
    }

    #[test]
    fn pinned_endpoint_takes_no_correction() {
        let mut points = vec![Point::new(Vec2::new(0.0f64, 0.0)), Point::new(Vec2::new(10.0, 0.0))];
        points[0].pin(Vec2::new(0.0, 0.0));
        let c = Constraint::new(0, 1, 4.0, None);
        assert!(c.resolve(&mut points));
        assert_eq!(points[0].pos, Vec2::new(0.0, 0.0));
        // The free end only takes its own half of the 6 unit correction.
        assert!((points[1].pos.x - 7.0).abs() < 1e-12);

        points[1].pos = Vec2::new(7.0, 0.0);
        points[1].pin(Vec2::new(7.0, 0.0));
        points[0].unpin();
        assert!(c.resolve(&mut points));
        assert!((points[0].pos.x - 1.5).abs() < 1e-12);
        assert_eq!(points[1].pos, Vec2::new(7.0, 0.0));
    }

    #[test]
    fn both_pinned_is_noop() {
        let mut points = vec![Point::new(Vec2::new(0.0f32, 0.0)), Point::new(Vec2::new(10.0, 0.0))];
        points[0].pin(Vec2::new(0.0, 0.0));
        points[1].pin(Vec2::new(10.0, 0.0));
        let c = Constraint::new(0, 1, 4.0, None);
        assert!(!c.resolve(&mut points));
        assert_eq!(points[1].pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn coincident_endpoints_are_skipped() {
        let mut points = vec![Point::new(Vec2::new(3.0f32, 3.0)), Point::new(Vec2::new(3.0, 3.0))];
        let c = Constraint::new(0, 1, 5.0, None);
        assert!(!c.resolve(&mut points));
        assert!(points[0].pos.is_finite() && points[1].pos.is_finite());
        assert_eq!(points[0].pos, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn draw_uses_curve_only_with_control_point() {
        let points = vec![Point::new(Vec2::new(0.0f32, 0.0)), Point::new(Vec2::new(2.0, 0.0))];
        let mut canvas = CommandBuffer::new();
        Constraint::between(&points, 0, 1, None).draw(&points, &mut canvas);
        Constraint::between(&points, 0, 1, Some(Vec2::new(1.0, 1.0))).draw(&points, &mut canvas);
        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::MoveTo(Vec2::new(0.0, 0.0)),
                DrawCommand::LineTo(Vec2::new(2.0, 0.0)),
                DrawCommand::MoveTo(Vec2::new(0.0, 0.0)),
                DrawCommand::QuadraticCurveTo {
                    control: Vec2::new(1.0, 1.0),
                    to: Vec2::new(2.0, 0.0),
                },
            ]
        );
    }
}
