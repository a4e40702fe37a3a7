//! Canvas: window dimensions and background color
//!
//! The canvas holds the logical window size and the color the engine
//! repaints before each frame. Resizes are recorded here and applied to
//! the live window by `sync()` once per frame, so the type stays
//! constructible (and testable) without a display.

use macroquad::prelude::{clear_background, request_new_screen_size, Color, Vec2};

/// Error type for canvas construction and resizing
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// Width or height was zero, negative, or not finite
    InvalidSize { width: f32, height: f32 },
}

impl std::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanvasError::InvalidSize { width, height } => {
                write!(f, "invalid canvas size {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for CanvasError {}

/// The drawable window: logical size plus background color.
///
/// Reported dimensions always equal the most recently validated size;
/// movement clamping and bounds checks derive from these fields, never
/// from the raw window.
#[derive(Debug)]
pub struct Canvas {
    width: f32,
    height: f32,
    /// Color the engine clears to before each frame
    pub background: Color,
    resize_pending: bool,
}

impl Canvas {
    /// Create a canvas with the given size and background color.
    ///
    /// Fails on non-positive or non-finite dimensions. The window itself
    /// is resized on the first `sync()` inside the frame loop.
    pub fn new(size: (f32, f32), background: Color) -> Result<Self, CanvasError> {
        validate_size(size)?;
        Ok(Self {
            width: size.0,
            height: size.1,
            background,
            resize_pending: true,
        })
    }

    /// Reported width in pixels
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Reported height in pixels
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Remake the canvas with new dimensions.
    ///
    /// Updates the reported size immediately; the window follows on the
    /// next `sync()`. Same validation as `new`.
    pub fn reset(&mut self, size: (f32, f32)) -> Result<(), CanvasError> {
        validate_size(size)?;
        self.width = size.0;
        self.height = size.1;
        self.resize_pending = true;
        Ok(())
    }

    /// Apply a pending resize to the live window.
    ///
    /// Called by the engine once per frame so the window matches the
    /// reported dimensions. Must run inside a macroquad context.
    pub fn sync(&mut self) {
        if self.resize_pending {
            request_new_screen_size(self.width, self.height);
            self.resize_pending = false;
        }
    }

    /// Repaint the background. The engine calls this before the frame
    /// callback; callers can also invoke it directly.
    pub fn clear(&self) {
        clear_background(self.background);
    }
}

fn validate_size(size: (f32, f32)) -> Result<(), CanvasError> {
    let (width, height) = size;
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(CanvasError::InvalidSize { width, height });
    }
    Ok(())
}
