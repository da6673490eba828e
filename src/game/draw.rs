use serde::{Deserialize, Serialize};

use super::config::Palette;
use super::grid::Position;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One instruction for the render target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Paint the whole board
    Fill(Rgb),
    /// Paint one cell, given by its pixel position
    Cell { position: Position, color: Rgb },
    /// The frame is complete
    Present,
}

/// Anything that knows how to turn its state into cell draws
pub trait Drawable {
    fn draw(&self, palette: &Palette) -> Vec<DrawCommand>;
}
