//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for human-editable settings files.
//! A config validates on load and converts into a ready-to-run
//! canvas + engine pair.

use std::fs;
use std::path::Path;

use crate::canvas::Canvas;
use crate::engine::Engine;
use macroquad::prelude::Color;
use serde::{Deserialize, Serialize};

/// Error type for config loading and saving
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
    Validation(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Window and loop settings for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window title
    pub title: String,
    /// Window size in pixels
    pub window: (u32, u32),
    /// Target frame rate
    pub fps: u32,
    /// Background color as RGB
    pub background: [u8; 3],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "easyquad window".to_string(),
            window: (600, 600),
            fps: 60,
            background: [255, 255, 255],
        }
    }
}

impl GameConfig {
    /// Check the config for values the engine would reject.
    pub fn validate(&self) -> Result<(), String> {
        if self.window.0 == 0 || self.window.1 == 0 {
            return Err(format!(
                "window size must be positive, got {}x{}",
                self.window.0, self.window.1
            ));
        }
        if self.fps == 0 {
            return Err("target frame rate must be at least 1".to_string());
        }
        Ok(())
    }

    /// Load and validate a config from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = ron::from_str(&contents)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Save the config as pretty-printed RON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// The configured background as a macroquad color.
    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::from_rgba(r, g, b, 255)
    }

    /// Build the canvas + engine pair described by this config.
    pub fn build(&self) -> Result<Engine, ConfigError> {
        self.validate().map_err(ConfigError::Validation)?;
        let canvas = Canvas::new(
            (self.window.0 as f32, self.window.1 as f32),
            self.background_color(),
        )
        .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Engine::new(self.fps, canvas, self.title.clone())
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineState;

    #[test]
    fn test_default_matches_library_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.window, (600, 600));
        assert_eq!(config.fps, 60);
        assert_eq!(config.background, [255, 255, 255]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ron");

        let config = GameConfig {
            title: "Pong".to_string(),
            window: (800, 600),
            fps: 60,
            background: [0, 0, 0],
        };
        config.save(&path).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ron");
        fs::write(
            &path,
            "(title: \"x\", window: (0, 600), fps: 60, background: (0, 0, 0))",
        )
        .unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_ron() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.ron");
        fs::write(&path, "not ron at all {{{").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here.ron"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_build_produces_stopped_engine() {
        let engine = GameConfig::default().build().unwrap();
        assert_eq!(engine.state(), EngineState::Stopped);
        assert_eq!(engine.fps(), 60);
        assert_eq!(engine.canvas().width(), 600.0);
    }

    #[test]
    fn test_build_rejects_zero_fps() {
        let config = GameConfig {
            fps: 0,
            ..Default::default()
        };
        assert!(matches!(config.build(), Err(ConfigError::Validation(_))));
    }
}
