//! Game configuration resource.
//!
//! Match settings loaded from an INI configuration file. Provides defaults
//! matching the stock arena and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1024
//! height = 576
//! target_fps = 60
//! title = Sprite Duel
//!
//! [arena]
//! ground_margin = 96
//! rest_y = 330
//! gravity = 0.7
//! run_speed = 5
//! jump_velocity = 20
//!
//! [match]
//! duration = 60
//!
//! [assets]
//! roster = ./roster.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::error::FightError;
use crate::resources::arena::Arena;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1024;
const DEFAULT_WINDOW_HEIGHT: u32 = 576;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Sprite Duel";
const DEFAULT_GROUND_MARGIN: f32 = 96.0;
const DEFAULT_REST_Y: f32 = 330.0;
const DEFAULT_GRAVITY: f32 = 0.7;
const DEFAULT_RUN_SPEED: f32 = 5.0;
const DEFAULT_JUMP_VELOCITY: f32 = 20.0;
const DEFAULT_DURATION: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, arena physics and match length.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window (and arena) width in pixels.
    pub window_width: u32,
    /// Window (and arena) height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    pub title: String,
    /// Distance from the bottom edge to the ground line.
    pub ground_margin: f32,
    /// `y` a grounded fighter is snapped to.
    pub rest_y: f32,
    /// Added to vertical velocity every airborne tick.
    pub gravity: f32,
    pub run_speed: f32,
    pub jump_velocity: f32,
    /// Match length in seconds.
    pub duration: u32,
    /// Roster JSON; the built-in roster is used when unset.
    pub roster: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            ground_margin: DEFAULT_GROUND_MARGIN,
            rest_y: DEFAULT_REST_Y,
            gravity: DEFAULT_GRAVITY,
            run_speed: DEFAULT_RUN_SPEED,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            duration: DEFAULT_DURATION,
            roster: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), FightError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| FightError::Config(format!("Failed to load config file: {}", e)))?;

        let uint = |section: &str, key: &str| -> Option<u32> {
            let value = config.getuint(section, key).ok().flatten()?;
            match u32::try_from(value) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("Ignoring [{}] {} = {}: out of range", section, key, value);
                    None
                }
            }
        };

        // [window] section
        if let Some(width) = uint("window", "width") {
            self.window_width = width;
        }
        if let Some(height) = uint("window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = uint("window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [arena] section
        let float = |key: &str| config.getfloat("arena", key).ok().flatten().map(|v| v as f32);
        if let Some(v) = float("ground_margin") {
            self.ground_margin = v;
        }
        if let Some(v) = float("rest_y") {
            self.rest_y = v;
        }
        if let Some(v) = float("gravity") {
            self.gravity = v;
        }
        if let Some(v) = float("run_speed") {
            self.run_speed = v;
        }
        if let Some(v) = float("jump_velocity") {
            self.jump_velocity = v;
        }

        // [match] section
        if let Some(duration) = uint("match", "duration") {
            self.duration = duration;
        }

        // [assets] section
        if let Some(roster) = config.get("assets", "roster") {
            self.roster = Some(PathBuf::from(roster));
        }

        info!(
            "Loaded config: {}x{} window, fps={}, gravity={}, duration={}s",
            self.window_width, self.window_height, self.target_fps, self.gravity, self.duration
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), FightError> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        // [arena] section
        config.set("arena", "ground_margin", Some(self.ground_margin.to_string()));
        config.set("arena", "rest_y", Some(self.rest_y.to_string()));
        config.set("arena", "gravity", Some(self.gravity.to_string()));
        config.set("arena", "run_speed", Some(self.run_speed.to_string()));
        config.set("arena", "jump_velocity", Some(self.jump_velocity.to_string()));

        // [match] section
        config.set("match", "duration", Some(self.duration.to_string()));

        // [assets] section
        if let Some(roster) = &self.roster {
            config.set("assets", "roster", Some(roster.display().to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| FightError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Arena physics derived from these settings.
    ///
    /// Fails for a zero-area arena or a ground line above the top edge.
    pub fn arena(&self) -> Result<Arena, FightError> {
        Arena::new(
            self.window_width as f32,
            self.window_height as f32,
            self.ground_margin,
        )
        .map(|arena| Arena {
            rest_y: self.rest_y,
            gravity: self.gravity,
            run_speed: self.run_speed,
            jump_velocity: self.jump_velocity,
            ..arena
        })
    }
}
