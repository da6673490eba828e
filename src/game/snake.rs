use super::action::Direction;
use super::config::Palette;
use super::draw::{DrawCommand, Drawable};
use super::grid::{Grid, Position};

/// The player's snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub positions: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Target body length; the tail is kept while the body is shorter
    pub length: usize,
    /// Turn requested since the last move
    pending_direction: Option<Direction>,
    /// Where the snake starts and restarts
    start: Position,
}

impl Snake {
    /// Create a one-segment snake at `start`, heading right
    pub fn new(start: Position) -> Self {
        Self {
            positions: vec![start],
            direction: Direction::Right,
            length: 1,
            pending_direction: None,
            start,
        }
    }

    /// Create a snake from explicit segments (head first)
    #[cfg(test)]
    pub(crate) fn with_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least a head");
        Self {
            start: segments[0],
            length: segments.len(),
            positions: segments,
            direction,
            pending_direction: None,
        }
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Queue a turn for the next move. A turn straight back into the neck is
    /// dropped without notice.
    pub fn update_direction(&mut self, new_direction: Direction) {
        if !self.direction.is_opposite(new_direction) {
            self.pending_direction = Some(new_direction);
        }
    }

    /// Move one cell, committing any queued turn first
    pub fn advance(&mut self, grid: &Grid) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = grid.step(self.head(), self.direction);
        self.positions.insert(0, new_head);

        if self.positions.len() > self.length {
            self.positions.pop();
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.positions[0]
    }

    /// Lengthen by one; shows up on the next move, when the tail is kept
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// True when the head sits on any segment from index 2 onwards. The neck
    /// (index 1) is never considered.
    pub fn check_self_collision(&self) -> bool {
        self.positions.len() > 2 && self.positions[2..].contains(&self.head())
    }

    /// Back to a single segment at the start cell, heading right
    pub fn reset(&mut self) {
        self.length = 1;
        self.positions = vec![self.start];
        self.direction = Direction::Right;
        self.pending_direction = None;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

impl Drawable for Snake {
    fn draw(&self, palette: &Palette) -> Vec<DrawCommand> {
        self.positions
            .iter()
            .map(|&position| DrawCommand::Cell {
                position,
                color: palette.snake,
            })
            .collect()
    }
}
