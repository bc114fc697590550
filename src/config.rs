// Game configuration, read from an optional JSON file.
// Every field has a default, so a file only needs the values it changes.
use crate::components::PaletteColor;
use crate::error::ConfigError;
use crate::resources::{DEFAULT_ROUND_SECONDS, DEFAULT_TOTAL_TARGETS};
use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

// A collectible placed on the arena, in tile coordinates around the origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CollectibleSpawn {
    pub color: PaletteColor,
    pub x: i32,
    pub y: i32,
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    // Size of one arena tile in pixels.
    pub tile_size: f32,
    // Player speed in tiles per second.
    pub player_speed: f32,
    pub round_seconds: f32,
    pub total_targets: u32,
    pub player_start: (i32, i32),
    pub collectibles: Vec<CollectibleSpawn>,
    pub correct_sound: String,
    pub wrong_sound: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Color Collect".into(),
            window_width: 800.0,
            window_height: 600.0,
            tile_size: 40.0,
            player_speed: 5.0,
            round_seconds: DEFAULT_ROUND_SECONDS,
            total_targets: DEFAULT_TOTAL_TARGETS,
            player_start: (0, 0),
            collectibles: default_layout(),
            correct_sound: "sounds/correct.ogg".into(),
            wrong_sound: "sounds/wrong.ogg".into(),
        }
    }
}

// Four of each color spread over a ring around the start position
fn default_layout() -> Vec<CollectibleSpawn> {
    const SPOTS: [(i32, i32); 12] = [
        (-6, 4),
        (-2, 5),
        (2, 5),
        (6, 4),
        (-7, 0),
        (-4, -2),
        (4, -2),
        (7, 0),
        (-6, -5),
        (-2, -6),
        (2, -6),
        (6, -5),
    ];

    SPOTS
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| CollectibleSpawn {
            color: PaletteColor::ALL[i % PaletteColor::ALL.len()],
            x,
            y,
        })
        .collect()
}

impl GameConfig {
    // Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: GameConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.round_seconds.is_finite() || self.round_seconds <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "round_seconds must be a positive number, got {}",
                self.round_seconds
            )));
        }
        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be a positive number, got {}",
                self.tile_size
            )));
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "player_speed must be zero or positive, got {}",
                self.player_speed
            )));
        }
        if self.total_targets == 0 {
            return Err(ConfigError::Invalid(
                "total_targets must be at least 1".into(),
            ));
        }
        Ok(())
    }

    // Pixel position of the center of tile `(x, y)`.
    pub fn tile_to_world(&self, (x, y): (i32, i32)) -> Vec2 {
        Vec2::new(x as f32 * self.tile_size, y as f32 * self.tile_size)
    }
}
