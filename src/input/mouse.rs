//! Mouse input
//!
//! A `MouseController` refreshes its snapshot once per frame via `poll()`;
//! every query (position, buttons, hover, click) is a pure read of that
//! snapshot, so hover/click logic is consistent within a frame and
//! testable from a hand-built snapshot.

use crate::entity::{point_in_rect, Character};
use macroquad::prelude::{is_mouse_button_down, mouse_position, MouseButton, Vec2};

/// Pointer position and button state captured once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseSnapshot {
    pub position: Vec2,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl MouseSnapshot {
    /// Capture the current pointer state.
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            position: Vec2::new(x, y),
            left: is_mouse_button_down(MouseButton::Left),
            middle: is_mouse_button_down(MouseButton::Middle),
            right: is_mouse_button_down(MouseButton::Right),
        }
    }
}

/// Per-frame mouse queries over a stored snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseController {
    snapshot: MouseSnapshot,
}

impl MouseController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a controller from a fixed snapshot (used in tests and
    /// anywhere input is simulated).
    pub fn from_snapshot(snapshot: MouseSnapshot) -> Self {
        Self { snapshot }
    }

    /// Refresh the snapshot. Call once per frame before any queries.
    pub fn poll(&mut self) {
        self.snapshot = MouseSnapshot::poll();
    }

    /// Pointer position at the last poll
    pub fn position(&self) -> Vec2 {
        self.snapshot.position
    }

    /// Is the given button held?
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.snapshot.left,
            MouseButton::Middle => self.snapshot.middle,
            MouseButton::Right => self.snapshot.right,
            MouseButton::Unknown => false,
        }
    }

    pub fn is_left_pressed(&self) -> bool {
        self.snapshot.left
    }

    pub fn is_right_pressed(&self) -> bool {
        self.snapshot.right
    }

    /// Is the pointer over the character's bounding box?
    pub fn is_over(&self, character: &Character) -> bool {
        point_in_rect(self.snapshot.position, &character.bounds())
    }

    /// Hovering and holding the left button, in the same polled frame.
    pub fn is_clicking(&self, character: &Character) -> bool {
        self.is_over(character) && self.is_left_pressed()
    }
}
