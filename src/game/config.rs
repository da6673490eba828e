use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::draw::Rgb;
use super::grid::Grid;

/// Reasons a configuration cannot drive a game
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell_size must be non-zero")]
    ZeroCellSize,
    #[error("screen {axis} must be non-zero")]
    ZeroScreen { axis: &'static str },
    #[error("screen {axis} {value} is not a multiple of cell_size {cell_size}")]
    Misaligned {
        axis: &'static str,
        value: u32,
        cell_size: u32,
    },
    #[error("screen {axis} {value} exceeds the largest supported size {max}")]
    TooLarge {
        axis: &'static str,
        value: u32,
        max: u32,
    },
    #[error("speed must be at least one tick per second")]
    ZeroSpeed,
    #[error("speed {speed} exceeds {max} ticks per second")]
    TooFast { speed: u32, max: u32 },
}

/// Largest board side in pixels; positions are signed 32-bit
pub const MAX_SCREEN: u32 = i32::MAX as u32;

/// Fastest tick rate, in ticks per second
pub const MAX_SPEED: u32 = 1000;

/// Where food is allowed to appear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSpawn {
    /// Any cell, including ones under the snake
    #[default]
    Anywhere,
    /// Only cells not covered by the snake, when there is one
    AvoidSnake,
}

/// Colors used by the render target. They never affect game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            food: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
        }
    }
}

/// Configuration for the game, fixed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in pixels
    pub screen_width: u32,
    /// Board height in pixels
    pub screen_height: u32,
    /// Side of one square cell in pixels
    pub cell_size: u32,
    /// Ticks per second
    pub speed: u32,
    pub palette: Palette,
    pub food_spawn: FoodSpawn,
    /// Fixed RNG seed, for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            speed: 20,
            palette: Palette::default(),
            food_spawn: FoodSpawn::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board, in cells
    pub fn with_cells(columns: u32, rows: u32, cell_size: u32) -> Self {
        Self {
            screen_width: columns * cell_size,
            screen_height: rows * cell_size,
            cell_size,
            ..Default::default()
        }
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        for (axis, value) in [("width", self.screen_width), ("height", self.screen_height)] {
            if value == 0 {
                return Err(ConfigError::ZeroScreen { axis });
            }
            if value > MAX_SCREEN {
                return Err(ConfigError::TooLarge {
                    axis,
                    value,
                    max: MAX_SCREEN,
                });
            }
            if value % self.cell_size != 0 {
                return Err(ConfigError::Misaligned {
                    axis,
                    value,
                    cell_size: self.cell_size,
                });
            }
        }
        if self.speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        if self.speed > MAX_SPEED {
            return Err(ConfigError::TooFast {
                speed: self.speed,
                max: MAX_SPEED,
            });
        }
        Ok(())
    }

    /// Time between two ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.speed
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.screen_width, self.screen_height, self.cell_size)
    }
}
