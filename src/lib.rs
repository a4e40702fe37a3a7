//! easyquad: a thin convenience layer over macroquad
//!
//! Small building blocks for simple 2D games:
//! - [`Canvas`]: window size and background color
//! - [`Engine`]: a fixed-rate frame loop driving one callback per frame
//! - [`Character`] / [`Player`]: positioned, drawable, collidable rectangles
//! - [`KeyboardController`] / [`MouseController`]: per-frame input snapshots
//!
//! Everything nontrivial (rendering, input polling, window management)
//! delegates to macroquad; this crate adds argument validation and a
//! consistent surface on top. See the demos under `demos/` for complete
//! games built from these pieces.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod canvas;
mod config;
mod engine;
mod entity;
pub mod input;

pub use canvas::{Canvas, CanvasError};
pub use config::{ConfigError, GameConfig};
pub use engine::{Engine, EngineError, EngineState};
pub use entity::{point_in_rect, rects_overlap, Character, Player, SpriteError};
pub use input::{KeyboardController, MouseController, MouseSnapshot, MoveKeys};
