//! Frame driver glue: one call advances and redraws the web once.

use crate::canvas::Canvas;
use crate::config::WebConfig;
use crate::error::WebError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::pointer::Pointer;
use crate::vec::Vec2;
use crate::web::Web;
use log::{debug, trace};

/// A web on a drawing surface of fixed size, plus the pointer feeding it.
///
/// The host's scheduler (for example `requestAnimationFrame`) calls
/// [`Simulation::frame`] once per display refresh and writes pointer events
/// through [`Simulation::pointer_mut`] in between.
pub struct Simulation<F: Float> {
    web: Web<F>,
    pointer: Pointer<F>,
    size: Vec2<F>,
    frames: u64,
}

impl<F: Float> Simulation<F> {
    /// Build a web centred on a `width` x `height` surface.
    pub fn new(config: WebConfig<F>, width: F, height: F) -> Result<Self, WebError> {
        let valid = |v: F| v.is_finite() && v > F::zero();
        if !valid(width) || !valid(height) {
            return Err(WebError::InvalidSurface);
        }
        let size = Vec2::new(width, height);
        let web = Web::new(config, size.scale(F::half()))?;
        debug!("simulation ready: {:?} surface, {} points", size, web.point_count());
        Ok(Simulation {
            web,
            pointer: Pointer::default(),
            size,
            frames: 0,
        })
    }

    /// Apply the stroke style and draw the initial, unsimulated web.
    pub fn start<C: Canvas<F>>(&mut self, canvas: &mut C) {
        canvas.set_stroke_style(self.web.config().stroke_style);
        self.web.draw(canvas);
    }

    /// Clear the surface, advance the web one step and draw it.
    pub fn frame<C: Canvas<F>, O: StepObserver>(&mut self, canvas: &mut C, observer: &mut O) {
        canvas.clear(Vec2::zero(), self.size);
        self.web.update(&self.pointer, observer);
        self.web.draw(canvas);
        self.frames += 1;
        trace!("frame {}", self.frames);
    }

    pub fn web(&self) -> &Web<F> { &self.web }
    pub fn web_mut(&mut self) -> &mut Web<F> { &mut self.web }
    pub fn pointer(&self) -> &Pointer<F> { &self.pointer }
    pub fn pointer_mut(&mut self) -> &mut Pointer<F> { &mut self.pointer }
    pub fn size(&self) -> Vec2<F> { self.size }
    pub fn frame_count(&self) -> u64 { self.frames }
}
