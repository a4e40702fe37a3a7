//! Input helpers
//!
//! Keyboard and mouse state is polled once per frame into explicit
//! snapshot types; all queries and movement rules are pure functions over
//! the snapshot, so game logic stays testable without a live display.

mod keyboard;
mod mouse;

pub use keyboard::{KeyboardController, MoveKeys};
pub use mouse::{MouseController, MouseSnapshot};
