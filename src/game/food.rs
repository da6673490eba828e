use rand::Rng;
use rand::seq::SliceRandom;

use super::config::{FoodSpawn, Palette};
use super::draw::{DrawCommand, Drawable};
use super::grid::{Grid, Position};
use super::snake::Snake;

const RANDOM_TRIES: usize = 64;

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Place food at a random cell
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self {
            position: grid.random_cell(rng),
        }
    }

    #[cfg(test)]
    pub(crate) fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Jump to a uniformly random cell. The snake is not consulted, so the
    /// food may land underneath it.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = grid.random_cell(rng);
    }

    /// Jump to a random cell the snake does not cover. Falls back to any cell
    /// once the snake fills the board.
    pub fn randomize_position_avoiding<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        snake: &Snake,
        rng: &mut R,
    ) {
        // Plain retries first, so big boards are never scanned cell by cell
        for _ in 0..RANDOM_TRIES {
            let cell = grid.random_cell(rng);
            if !snake.occupies(cell) {
                self.position = cell;
                return;
            }
        }

        let free: Vec<Position> = grid.cells().filter(|&cell| !snake.occupies(cell)).collect();
        match free.choose(rng) {
            Some(&cell) => self.position = cell,
            None => self.randomize_position(grid, rng),
        }
    }

    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        policy: FoodSpawn,
        grid: &Grid,
        snake: &Snake,
        rng: &mut R,
    ) {
        match policy {
            FoodSpawn::Anywhere => self.randomize_position(grid, rng),
            FoodSpawn::AvoidSnake => self.randomize_position_avoiding(grid, snake, rng),
        }
    }
}

impl Drawable for Food {
    fn draw(&self, palette: &Palette) -> Vec<DrawCommand> {
        vec![DrawCommand::Cell {
            position: self.position,
            color: palette.food,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_randomize_stays_on_board() {
        let grid = Grid::new(640, 480, 20);
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::new(&grid, &mut rng);

        for _ in 0..500 {
            food.randomize_position(&grid, &mut rng);
            assert!(grid.contains(food.position()));
            assert_eq!(food.position().x % 20, 0);
            assert_eq!(food.position().y % 20, 0);
        }
    }

    #[test]
    fn test_randomize_moves_off_current_cell() {
        let grid = Grid::new(40, 20, 20);
        let mut rng = StdRng::seed_from_u64(8);
        let mut food = Food::at(grid.cell(0, 0));

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            food.randomize_position(&grid, &mut rng);
            seen.insert(food.position());
        }
        assert!(seen.contains(&grid.cell(1, 0)));
    }

    #[test]
    fn test_anywhere_can_land_on_snake() {
        // One-cell board: the only cell is under the snake
        let grid = Grid::new(20, 20, 20);
        let snake = Snake::new(grid.center());
        let mut rng = StdRng::seed_from_u64(0);
        let mut food = Food::at(Position::new(0, 0));

        food.respawn(FoodSpawn::Anywhere, &grid, &snake, &mut rng);
        assert!(snake.occupies(food.position()));
    }

    #[test]
    fn test_avoid_snake_picks_the_free_cell() {
        let grid = Grid::new(40, 40, 20);
        let snake = Snake::with_segments(
            vec![grid.cell(0, 0), grid.cell(1, 0), grid.cell(1, 1)],
            Direction::Left,
        );
        let mut rng = StdRng::seed_from_u64(3);
        let mut food = Food::at(grid.cell(0, 0));

        for _ in 0..50 {
            food.respawn(FoodSpawn::AvoidSnake, &grid, &snake, &mut rng);
            assert_eq!(food.position(), grid.cell(0, 1));
        }
    }

    #[test]
    fn test_avoid_snake_on_full_board_falls_back() {
        let grid = Grid::new(20, 40, 20);
        let snake = Snake::with_segments(vec![grid.cell(0, 0), grid.cell(0, 1)], Direction::Up);
        let mut rng = StdRng::seed_from_u64(9);
        let mut food = Food::at(grid.cell(0, 0));

        food.randomize_position_avoiding(&grid, &snake, &mut rng);
        assert!(grid.contains(food.position()));
    }
}
