use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::{
    action::InputEvent,
    config::GameConfig,
    draw::{DrawCommand, Drawable},
    food::Food,
    grid::Grid,
    snake::Snake,
};

/// Information about a tick
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Snake length at the moment it ran into itself, if it did
    pub reset_from: Option<usize>,
}

/// Result of one tick of the game loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The world advanced; keep going
    Continue(StepInfo),
    /// A quit event arrived; the world was left untouched
    Quit,
}

/// Owns the snake and the food and advances them one tick at a time
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: StdRng,
    ticks: u64,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = config.grid();
        let snake = Snake::new(grid.center());
        let food = Food::new(&grid, &mut rng);

        info!(
            "New game on a {}x{} board, food spawn {:?}",
            grid.grid_width(),
            grid.grid_height(),
            config.food_spawn
        );

        Self {
            config,
            grid,
            snake,
            food,
            rng,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Advance one tick: apply input, move, eat, then check for self-collision
    pub fn tick<I>(&mut self, events: I) -> TickOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match event {
                InputEvent::Turn(direction) => self.snake.update_direction(direction),
                InputEvent::Quit => {
                    info!("Quit after {} ticks", self.ticks);
                    return TickOutcome::Quit;
                }
            }
        }

        self.snake.advance(&self.grid);
        self.ticks += 1;

        let mut info = StepInfo::default();

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.food
                .respawn(self.config.food_spawn, &self.grid, &self.snake, &mut self.rng);
            info.ate_food = true;
            debug!(
                "Ate food, length now {}, next food at {:?}",
                self.snake.length,
                self.food.position()
            );
        }

        if self.snake.check_self_collision() {
            info!("Self-collision at length {}, resetting", self.snake.length);
            info.reset_from = Some(self.snake.length);
            self.snake.reset();
        }

        TickOutcome::Continue(info)
    }

    /// Draw commands for the current state, background first
    pub fn frame(&self) -> Vec<DrawCommand> {
        let palette = &self.config.palette;
        let layers: [&dyn Drawable; 2] = [&self.snake, &self.food];

        let mut commands = vec![DrawCommand::Fill(palette.background)];
        for layer in layers {
            commands.extend(layer.draw(palette));
        }
        commands.push(DrawCommand::Present);
        commands
    }

    #[cfg(test)]
    fn place_food(&mut self, position: super::grid::Position) {
        self.food = Food::at(position);
    }

    #[cfg(test)]
    fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}
