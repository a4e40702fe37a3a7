//! Keyboard input and fixed-step movement
//!
//! WASD movement, one fixed step per held direction key per frame, clamped
//! to the canvas bounds. The held-key set is captured into `MoveKeys` so
//! the movement rule itself is a pure function.

use crate::canvas::Canvas;
use crate::entity::Character;
use macroquad::prelude::{is_key_down, KeyCode};

/// Held state of the four movement keys, captured once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    /// Capture the current W/A/S/D state.
    pub fn poll() -> Self {
        Self {
            up: is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::D),
        }
    }

    /// Is any movement key held?
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Moves a character body by a fixed step per held direction key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardController {
    /// Pixels moved per held direction key per frame
    pub movement_speed: f32,
}

impl KeyboardController {
    pub fn new(movement_speed: f32) -> Self {
        Self { movement_speed }
    }

    /// Is the given key currently held?
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        is_key_down(key)
    }

    /// Poll the keyboard and apply one movement step.
    pub fn handle_keys(&self, body: &mut Character, canvas: &Canvas) {
        self.apply(body, MoveKeys::poll(), canvas);
    }

    /// The movement rule: one step per held direction, then each axis
    /// clamped to [0, canvas - size]. Opposite keys cancel out. Holds for
    /// any key combination, including bodies larger than the canvas
    /// (clamped to zero).
    pub fn apply(&self, body: &mut Character, keys: MoveKeys, canvas: &Canvas) {
        let step = self.movement_speed;

        if keys.down {
            body.position.y += step;
        }
        if keys.up {
            body.position.y -= step;
        }
        if keys.right {
            body.position.x += step;
        }
        if keys.left {
            body.position.x -= step;
        }

        let max_x = (canvas.width() - body.size.x).max(0.0);
        let max_y = (canvas.height() - body.size.y).max(0.0);
        body.position.x = body.position.x.clamp(0.0, max_x);
        body.position.y = body.position.y.clamp(0.0, max_y);
    }
}

impl Default for KeyboardController {
    fn default() -> Self {
        Self::new(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{Vec2, WHITE};

    fn canvas() -> Canvas {
        Canvas::new((800.0, 600.0), WHITE).unwrap()
    }

    #[test]
    fn test_single_key_moves_one_step() {
        let canvas = canvas();
        let controller = KeyboardController::new(10.0);
        let mut body = Character::new((100.0, 100.0), 20.0);

        let right = MoveKeys {
            right: true,
            ..Default::default()
        };
        controller.apply(&mut body, right, &canvas);
        assert_eq!(body.position, Vec2::new(110.0, 100.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let canvas = canvas();
        let controller = KeyboardController::new(10.0);
        let mut body = Character::new((100.0, 100.0), 20.0);

        let all = MoveKeys {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        controller.apply(&mut body, all, &canvas);
        assert_eq!(body.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_clamped_to_canvas() {
        let canvas = canvas();
        let controller = KeyboardController::new(50.0);
        let mut body = Character::new((790.0, 590.0), 20.0);

        let down_right = MoveKeys {
            down: true,
            right: true,
            ..Default::default()
        };
        controller.apply(&mut body, down_right, &canvas);
        assert_eq!(body.position, Vec2::new(780.0, 580.0));

        let mut body = Character::new((5.0, 5.0), 20.0);
        let up_left = MoveKeys {
            up: true,
            left: true,
            ..Default::default()
        };
        controller.apply(&mut body, up_left, &canvas);
        assert_eq!(body.position, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_never_escapes_bounds_under_any_combination() {
        let canvas = canvas();
        let controller = KeyboardController::new(37.0);
        let mut body = Character::new((400.0, 300.0), 20.0);

        // Exercise all 16 key combinations repeatedly
        for i in 0..200u32 {
            let keys = MoveKeys {
                up: i & 1 != 0,
                down: i & 2 != 0,
                left: i & 4 != 0,
                right: i & 8 != 0,
            };
            controller.apply(&mut body, keys, &canvas);
            assert!(body.position.x >= 0.0 && body.position.x <= 800.0 - 20.0);
            assert!(body.position.y >= 0.0 && body.position.y <= 600.0 - 20.0);
        }
    }

    #[test]
    fn test_n_steps_right_then_clamp() {
        // Scenario from the property list: a player at (400, 550) stepped
        // right once per invocation lands at 400 + n*step, clamped at
        // width - size.
        let canvas = canvas();
        let controller = KeyboardController::new(10.0);
        let mut body = Character::new((400.0, 550.0), 40.0);
        let right = MoveKeys {
            right: true,
            ..Default::default()
        };

        for n in 1..=40u32 {
            controller.apply(&mut body, right, &canvas);
            let expected = (400.0 + n as f32 * 10.0).min(800.0 - 40.0);
            assert_eq!(body.position.x, expected);
            assert_eq!(body.position.y, 550.0);
        }
        assert_eq!(body.position.x, 760.0);
    }

    #[test]
    fn test_body_larger_than_canvas_pins_to_origin() {
        let canvas = Canvas::new((100.0, 100.0), WHITE).unwrap();
        let controller = KeyboardController::new(10.0);
        let mut body = Character::new((0.0, 0.0), 200.0);

        let down_right = MoveKeys {
            down: true,
            right: true,
            ..Default::default()
        };
        controller.apply(&mut body, down_right, &canvas);
        assert_eq!(body.position, Vec2::new(0.0, 0.0));
    }
}
