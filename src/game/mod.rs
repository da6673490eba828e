//! Core game logic module for Snake
//!
//! Everything here is pure state and arithmetic: no terminal, no clock. The
//! binary drives it one tick at a time and renders the draw commands it emits.

pub mod action;
pub mod config;
pub mod draw;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use action::{Direction, InputEvent};
pub use config::{ConfigError, FoodSpawn, GameConfig, Palette};
pub use draw::{DrawCommand, Drawable, Rgb};
pub use engine::{GameEngine, StepInfo, TickOutcome};
pub use food::Food;
pub use grid::{Grid, Position};
pub use snake::Snake;
