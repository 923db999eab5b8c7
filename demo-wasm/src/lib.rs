//! Browser demo: drives a `silk` web on an HTML canvas.
//!
//! JavaScript owns the frame loop. It forwards mouse events, then calls
//! `frame(ctx)` from its `requestAnimationFrame` callback:
//!
//! ```js
//! const demo = new WebDemo(canvas.width, canvas.height);
//! demo.start(ctx);
//! canvas.onmousemove = e => demo.pointer_move(e.offsetX, e.offsetY);
//! canvas.onmousedown = e => demo.pointer_down(e.button);
//! canvas.onmouseup = () => demo.pointer_up();
//! const tick = () => { demo.frame(ctx); requestAnimationFrame(tick); };
//! tick();
//! ```

use silk::{Canvas, NoOpStepObserver, PointerButton, Simulation, Vec2, WebConfig};
use std::f64::consts::PI;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// `Canvas` over a borrowed 2D rendering context.
struct Context2d<'a>(&'a CanvasRenderingContext2d);

impl Canvas<f64> for Context2d<'_> {
    fn clear(&mut self, origin: Vec2<f64>, size: Vec2<f64>) {
        self.0.clear_rect(origin.x, origin.y, size.x, size.y);
    }
    fn begin_path(&mut self) {
        self.0.begin_path();
    }
    fn move_to(&mut self, to: Vec2<f64>) {
        self.0.move_to(to.x, to.y);
    }
    fn line_to(&mut self, to: Vec2<f64>) {
        self.0.line_to(to.x, to.y);
    }
    fn quadratic_curve_to(&mut self, control: Vec2<f64>, to: Vec2<f64>) {
        self.0.quadratic_curve_to(control.x, control.y, to.x, to.y);
    }
    fn stroke(&mut self) {
        self.0.stroke();
    }
    fn set_stroke_style(&mut self, style: &str) {
        self.0.set_stroke_style_str(style);
    }
    fn fill_circle(&mut self, center: Vec2<f64>, radius: f64) {
        self.0.begin_path();
        // arc only fails for a negative radius
        if self.0.arc(center.x, center.y, radius, 0.0, 2.0 * PI).is_ok() {
            self.0.close_path();
            self.0.fill();
        }
    }
}

// ---- Web Demo ----

#[wasm_bindgen]
pub struct WebDemo {
    sim: Simulation<f64>,
}

#[wasm_bindgen]
impl WebDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<WebDemo, JsValue> {
        console_error_panic_hook::set_once();
        let sim = Simulation::new(WebConfig::new(), width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebDemo { sim })
    }

    /// Same web with tearing and point dots enabled.
    pub fn tearable(width: f64, height: f64, tear_distance: f64) -> Result<WebDemo, JsValue> {
        console_error_panic_hook::set_once();
        let config = WebConfig::new()
            .with_tear_distance(tear_distance)
            .with_point_dots(2.0);
        let sim = Simulation::new(config, width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebDemo { sim })
    }

    pub fn start(&mut self, ctx: &CanvasRenderingContext2d) {
        self.sim.start(&mut Context2d(ctx));
    }

    pub fn frame(&mut self, ctx: &CanvasRenderingContext2d) {
        self.sim.frame(&mut Context2d(ctx), &mut NoOpStepObserver);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.sim.pointer_mut().move_to(Vec2::new(x, y));
    }

    /// `button` is the DOM `MouseEvent.button` code.
    pub fn pointer_down(&mut self, button: i16) {
        self.sim.pointer_mut().press(PointerButton::from_dom(button));
    }

    pub fn pointer_up(&mut self) {
        self.sim.pointer_mut().release();
    }

    pub fn cut_at(&mut self, x: f64, y: f64, radius: f64) -> usize {
        self.sim.web_mut().cut_at(Vec2::new(x, y), radius)
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.sim
            .web_mut()
            .reset()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns flat [x0, y0, x1, y1, ...] in storage order
    pub fn positions(&self) -> Vec<f64> {
        let pos = self.sim.web().positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    pub fn point_count(&self) -> usize {
        self.sim.web().point_count()
    }

    pub fn constraint_count(&self) -> usize {
        self.sim.web().constraint_count()
    }

    pub fn frame_count(&self) -> f64 {
        self.sim.frame_count() as f64
    }
}
