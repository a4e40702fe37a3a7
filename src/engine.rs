//! Engine: the fixed-rate frame loop
//!
//! Drives one user callback per frame at a target frame rate. Each
//! iteration: check for quit (window close request or Escape), sync and
//! clear the canvas, invoke the callback, present, then block out the
//! remainder of the frame interval. Fixed-rate pacing only: the callback
//! receives no delta time, so per-frame steps are tied to the frame rate.

use crate::canvas::Canvas;
use macroquad::prelude::{get_time, is_key_pressed, is_quit_requested, next_frame, KeyCode};

/// Error type for engine construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Target frame rate must be at least 1
    InvalidFps(u32),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidFps(fps) => write!(f, "invalid target frame rate: {}", fps),
        }
    }
}

impl std::error::Error for EngineError {}

/// Run state of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Stopped,
    Running,
}

/// The frame-loop driver. Owns the canvas and the frame-rate target.
///
/// Entities live in host scope; the engine only clears the canvas and
/// dispatches the callback. A panic inside the callback propagates and
/// terminates the loop.
#[derive(Debug)]
pub struct Engine {
    fps: u32,
    title: String,
    canvas: Canvas,
    state: EngineState,
}

impl Engine {
    /// Create an engine with a target frame rate, a canvas, and a title.
    ///
    /// The title is used for log output; the OS window title is set by the
    /// host's macroquad `Conf` (see the demos' `window_conf`).
    pub fn new(fps: u32, canvas: Canvas, title: impl Into<String>) -> Result<Self, EngineError> {
        if fps == 0 {
            return Err(EngineError::InvalidFps(fps));
        }
        Ok(Self {
            fps,
            title: title.into(),
            canvas,
            state: EngineState::Stopped,
        })
    }

    /// Target frame rate
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Target frame interval in seconds
    pub fn frame_interval(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Current run state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The owned canvas
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access to the owned canvas (e.g. for `reset` between runs)
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Run the frame loop until the window is closed or Escape is pressed.
    ///
    /// The callback is invoked exactly once per iteration, after the canvas
    /// has been cleared to its background color. Must be called from a
    /// macroquad async main.
    pub async fn run<F: FnMut(&Canvas)>(&mut self, mut frame: F) {
        self.state = EngineState::Running;
        println!("{}: engine running at {} fps", self.title, self.fps);

        loop {
            let frame_start = get_time();

            if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
                break;
            }

            self.canvas.sync();
            self.canvas.clear();
            frame(&self.canvas);

            next_frame().await;
            pace(frame_start, self.frame_interval());
        }

        self.state = EngineState::Stopped;
        println!("{}: engine stopped", self.title);
    }
}

/// Block until the frame interval has elapsed since `frame_start`.
fn pace(frame_start: f64, target_frame_time: f64) {
    let elapsed = get_time() - frame_start;
    let remaining = target_frame_time - elapsed;

    if remaining > 0.0 {
        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: just spin-wait (no thread::sleep available)
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - frame_start < target_frame_time {
                // Busy wait - browser will handle frame pacing
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::WHITE;

    #[test]
    fn test_zero_fps_rejected() {
        let canvas = Canvas::new((600.0, 600.0), WHITE).unwrap();
        assert_eq!(
            Engine::new(0, canvas, "test").unwrap_err(),
            EngineError::InvalidFps(0)
        );
    }

    #[test]
    fn test_starts_stopped() {
        let canvas = Canvas::new((600.0, 600.0), WHITE).unwrap();
        let engine = Engine::new(60, canvas, "test").unwrap();
        assert_eq!(engine.state(), EngineState::Stopped);
    }

    #[test]
    fn test_engine_and_error_are_debuggable() {
        // Keeps unwrap_err-style assertions on Result<Engine, _> compiling
        let canvas = Canvas::new((600.0, 600.0), WHITE).unwrap();
        let engine = Engine::new(60, canvas, "test").unwrap();
        assert!(format!("{:?}", engine).contains("Engine"));
    }

    #[test]
    fn test_frame_interval() {
        let canvas = Canvas::new((600.0, 600.0), WHITE).unwrap();
        let engine = Engine::new(60, canvas, "test").unwrap();
        assert!((engine.frame_interval() - 1.0 / 60.0).abs() < 1e-9);
    }
}
