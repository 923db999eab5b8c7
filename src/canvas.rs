//! Rendering backend abstraction.
//!
//! The web only ever needs a handful of path primitives, so any 2D surface
//! (an HTML canvas, a software rasterizer, a test recorder) can sit behind
//! [`Canvas`].

use crate::float::Float;
use crate::vec::Vec2;
use alloc::string::String;
use alloc::vec::Vec as AllocVec;

/// 2D drawing surface the web renders into.
pub trait Canvas<F: Float> {
    /// Clear the axis-aligned rectangle at `origin` with `size`.
    fn clear(&mut self, origin: Vec2<F>, size: Vec2<F>);
    fn begin_path(&mut self);
    fn move_to(&mut self, to: Vec2<F>);
    fn line_to(&mut self, to: Vec2<F>);
    fn quadratic_curve_to(&mut self, control: Vec2<F>, to: Vec2<F>);
    /// Stroke the current path.
    fn stroke(&mut self);
    fn set_stroke_style(&mut self, style: &str);
    /// Fill a solid circle. Only used when point dots are enabled.
    fn fill_circle(&mut self, center: Vec2<F>, radius: F);
}

/// A single recorded canvas call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<F: Float> {
    Clear { origin: Vec2<F>, size: Vec2<F> },
    BeginPath,
    MoveTo(Vec2<F>),
    LineTo(Vec2<F>),
    QuadraticCurveTo { control: Vec2<F>, to: Vec2<F> },
    Stroke,
    SetStrokeStyle(String),
    FillCircle { center: Vec2<F>, radius: F },
}

/// Canvas that records every call, for tests and replay on another surface.
#[derive(Clone, Debug, Default)]
pub struct CommandBuffer<F: Float> {
    commands: AllocVec<DrawCommand<F>>,
}

impl<F: Float> CommandBuffer<F> {
    pub fn new() -> Self {
        CommandBuffer { commands: AllocVec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand<F>] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Hand the recorded calls, in order, to another canvas.
    pub fn replay<C: Canvas<F>>(&self, target: &mut C) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { origin, size } => target.clear(*origin, *size),
                DrawCommand::BeginPath => target.begin_path(),
                DrawCommand::MoveTo(p) => target.move_to(*p),
                DrawCommand::LineTo(p) => target.line_to(*p),
                DrawCommand::QuadraticCurveTo { control, to } => {
                    target.quadratic_curve_to(*control, *to)
                }
                DrawCommand::Stroke => target.stroke(),
                DrawCommand::SetStrokeStyle(style) => target.set_stroke_style(style),
                DrawCommand::FillCircle { center, radius } => target.fill_circle(*center, *radius),
            }
        }
    }

    /// Count of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCommand<F>) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl<F: Float> Canvas<F> for CommandBuffer<F> {
    fn clear(&mut self, origin: Vec2<F>, size: Vec2<F>) {
        self.commands.push(DrawCommand::Clear { origin, size });
    }
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }
    fn move_to(&mut self, to: Vec2<F>) {
        self.commands.push(DrawCommand::MoveTo(to));
    }
    fn line_to(&mut self, to: Vec2<F>) {
        self.commands.push(DrawCommand::LineTo(to));
    }
    fn quadratic_curve_to(&mut self, control: Vec2<F>, to: Vec2<F>) {
        self.commands.push(DrawCommand::QuadraticCurveTo { control, to });
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
    fn set_stroke_style(&mut self, style: &str) {
        self.commands.push(DrawCommand::SetStrokeStyle(String::from(style)));
    }
    fn fill_circle(&mut self, center: Vec2<F>, radius: F) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_reproduces_calls() {
        let mut source: CommandBuffer<f32> = CommandBuffer::new();
        source.begin_path();
        source.move_to(Vec2::new(0.0, 0.0));
        source.quadratic_curve_to(Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        source.stroke();

        let mut target = CommandBuffer::new();
        source.replay(&mut target);
        assert_eq!(source.commands(), target.commands());
        assert_eq!(target.count(|c| matches!(c, DrawCommand::Stroke)), 1);
    }
}
