//! Characters and players
//!
//! A `Character` is a positioned, sized rectangle drawn as either a solid
//! fill or a sprite scaled to its size. Collision is a strict axis-aligned
//! bounding-box test: rectangles that merely share an edge do not collide.
//! `Player` attaches a `KeyboardController` to a character body
//! (composition, no inheritance chain).

use crate::canvas::Canvas;
use crate::input::KeyboardController;
use macroquad::prelude::{
    draw_rectangle, draw_texture_ex, load_texture, Color, DrawTextureParams, FilterMode, Rect,
    Texture2D, Vec2, WHITE,
};

/// Fill color for characters without a sprite
const DEFAULT_FILL: Color = Color::new(0.5, 0.27, 0.5, 1.0);

/// Default per-frame movement step for players
const PLAYER_SPEED: f32 = 10.0;

/// Error type for sprite loading
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteError {
    /// The sprite file could not be loaded or decoded
    Load { path: String, message: String },
}

impl std::fmt::Display for SpriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpriteError::Load { path, message } => {
                write!(f, "failed to load sprite '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for SpriteError {}

/// Strict AABB overlap test. Shared edges do not count as overlap;
/// a one-pixel intrusion does.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Point-in-rect test over the half-open ranges [x, x+w) and [y, y+h).
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.w
        && point.y >= rect.y
        && point.y < rect.y + rect.h
}

/// A positioned, sized, drawable, collidable game object.
///
/// Position is the top-left corner in screen coordinates and is clamped
/// non-negative at construction. The collision rectangle is always derived
/// from the current position and size, never cached.
pub struct Character {
    /// Top-left corner in screen coordinates
    pub position: Vec2,
    /// Width and height in pixels
    pub size: Vec2,
    /// Fill color when no sprite is attached
    pub color: Color,
    sprite: Option<Texture2D>,
}

impl Character {
    /// Create a square character with a solid fill.
    pub fn new(spawn: (f32, f32), size: f32) -> Self {
        Self::with_size(spawn, size, size)
    }

    /// Create a character with independent width and height.
    ///
    /// Position and size are screen coordinates and clamped non-negative
    /// (a NaN dimension also clamps to zero).
    pub fn with_size(spawn: (f32, f32), width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(spawn.0.max(0.0), spawn.1.max(0.0)),
            size: Vec2::new(width.max(0.0), height.max(0.0)),
            color: DEFAULT_FILL,
            sprite: None,
        }
    }

    /// Create a square character backed by a sprite image, scaled to size.
    ///
    /// Fails if the file is missing or cannot be decoded.
    pub async fn with_sprite(
        spawn: (f32, f32),
        size: f32,
        path: &str,
    ) -> Result<Self, SpriteError> {
        let texture = load_texture(path).await.map_err(|e| SpriteError::Load {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        texture.set_filter(FilterMode::Nearest);

        let mut character = Self::new(spawn, size);
        character.sprite = Some(texture);
        Ok(character)
    }

    /// Collision rectangle at the current position.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    /// Paint the character: sprite scaled to size, or a filled rectangle.
    pub fn draw(&self) {
        match &self.sprite {
            Some(texture) => draw_texture_ex(
                texture,
                self.position.x,
                self.position.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(self.size),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(
                self.position.x,
                self.position.y,
                self.size.x,
                self.size.y,
                self.color,
            ),
        }
    }

    /// Does this character overlap a single other character?
    pub fn overlaps(&self, other: &Character) -> bool {
        rects_overlap(&self.bounds(), &other.bounds())
    }

    /// Scan a collection for the first overlap. Returns true on the first
    /// hit, explicit false if none overlap. Linear in candidate count.
    pub fn check_collision(&self, others: &[Character]) -> bool {
        let me = self.bounds();
        for other in others {
            if rects_overlap(&me, &other.bounds()) {
                return true;
            }
        }
        false
    }
}

/// A character driven by keyboard input.
pub struct Player {
    /// The positioned, drawable body
    pub body: Character,
    /// Movement binding applied by `handle_keys`
    pub controller: KeyboardController,
}

impl Player {
    /// Create a player with the default movement step.
    pub fn new(spawn: (f32, f32), size: f32) -> Self {
        Self {
            body: Character::new(spawn, size),
            controller: KeyboardController::new(PLAYER_SPEED),
        }
    }

    /// Poll the keyboard and move the body one step per held direction
    /// key, clamped to the canvas bounds.
    pub fn handle_keys(&mut self, canvas: &Canvas) {
        self.controller.handle_keys(&mut self.body, canvas);
    }

    /// Paint the body.
    pub fn draw(&self) {
        self.body.draw();
    }

    /// Collision rectangle of the body.
    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    /// First-hit collision scan, same semantics as `Character::check_collision`.
    pub fn check_collision(&self, others: &[Character]) -> bool {
        self.body.check_collision(others)
    }
}
