use rand::Rng;

use super::action::Direction;

/// A pixel position on the board. Every reachable position is a multiple of
/// the cell size and lies inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Board geometry: pixel dimensions split into square cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    /// Dimensions must fit in an `i32`; `GameConfig::validate` guarantees it.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        debug_assert!(width <= i32::MAX as u32 && height <= i32::MAX as u32);
        Self {
            width: width as i32,
            height: height as i32,
            cell_size: cell_size as i32,
        }
    }

    /// Number of cell columns
    pub fn grid_width(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows
    pub fn grid_height(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Pixel position of the cell at (column, row)
    pub fn cell(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.cell_size, row * self.cell_size)
    }

    /// (column, row) of a pixel position
    pub fn cell_index(&self, pos: Position) -> (i32, i32) {
        (pos.x / self.cell_size, pos.y / self.cell_size)
    }

    /// Start cell of the snake: the middle column and row, rounded down
    pub fn center(&self) -> Position {
        self.cell(self.grid_width() / 2, self.grid_height() / 2)
    }

    /// Uniformly random cell-aligned position
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        self.cell(
            rng.gen_range(0..self.grid_width()),
            rng.gen_range(0..self.grid_height()),
        )
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.grid_height()).flat_map(move |row| {
            (0..self.grid_width()).map(move |column| self.cell(column, row))
        })
    }

    /// Fold any position back onto the board, toroidally
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    /// Position one cell away in `direction`, wrapping across edges
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.wrap(Position::new(
            pos.x + dx * self.cell_size,
            pos.y + dy * self.cell_size,
        ))
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }
}
