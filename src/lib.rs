//! Position-based Verlet simulation of an interactive spiderweb.
//!
//! `silk` builds a radial web of points joined by distance constraints,
//! sags it under gravity and lets a pointer drag or cut it. Every frame runs
//! a fixed number of constraint relaxation passes and then one Verlet
//! integration step, and renders the web through a small [`Canvas`] trait.
//!
//! # Features
//!
//! - **Verlet points**: implicit velocity, quantized force accumulation, pins
//! - **Distance constraints**: one owner per edge, optional curved rendering
//! - **Web topology**: hub, arms and cross-arm curves, pinned outer rim
//! - **Pointer interaction**: drag with the primary button, cut with the secondary
//! - **Observable**: monitor frames via the `StepObserver` trait, logs via `log`
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use silk::{CommandBuffer, NoOpStepObserver, PointerButton, Simulation, Vec2, WebConfig};
//!
//! let mut sim: Simulation<f32> = Simulation::new(WebConfig::new(), 560.0, 350.0).unwrap();
//! let mut canvas = CommandBuffer::new();
//! sim.start(&mut canvas);
//!
//! sim.pointer_mut().move_to(Vec2::new(300.0, 180.0));
//! sim.pointer_mut().press(PointerButton::Primary);
//! for _ in 0..10 {
//!     sim.frame(&mut canvas, &mut NoOpStepObserver);
//! }
//! assert_eq!(sim.frame_count(), 10);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod constraint;
pub mod web;
pub mod pointer;
pub mod canvas;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::Point;
pub use constraint::{Constraint, Segment};
pub use web::Web;
pub use pointer::{Pointer, PointerButton};
pub use canvas::{Canvas, CommandBuffer, DrawCommand};
pub use simulation::Simulation;
pub use config::WebConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::WebError;
