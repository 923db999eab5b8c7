//! Pointer snapshot read by every point during integration.

use crate::float::Float;
use crate::vec::Vec2;

/// Which pointer button is currently held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    #[default]
    Released,
    /// Drags points within `pointer_radius` onto the cursor.
    Primary,
    /// Cuts the constraints of points within `cut_radius`.
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => PointerButton::Primary,
            2 => PointerButton::Secondary,
            _ => PointerButton::Released,
        }
    }
}

/// Latest pointer state in surface coordinates.
///
/// The host writes it between frames; points read whatever value is current
/// when their `update` runs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pointer<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub button: PointerButton,
}

impl<F: Float> Pointer<F> {
    pub fn new(pos: Vec2<F>) -> Self {
        Pointer { pos, prev_pos: pos, button: PointerButton::Released }
    }

    /// Record a move, keeping the old position as `prev_pos`.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        self.prev_pos = self.pos;
        self.pos = pos;
    }

    pub fn press(&mut self, button: PointerButton) {
        self.button = button;
    }

    pub fn release(&mut self) {
        self.button = PointerButton::Released;
    }

    pub fn is_pressed(&self, button: PointerButton) -> bool {
        button != PointerButton::Released && self.button == button
    }

    /// Movement since the previous `move_to`.
    pub fn delta(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}
