use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use torus_snake::game::{FoodSpawn, GameConfig};
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wraparound board")]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Board height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Cell side in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Never spawn food under the snake
    #[arg(long)]
    avoid_snake: bool,

    /// Where to write the log (the terminal is taken by the game)
    #[arg(long, default_value = "torus_snake.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.avoid_snake {
            config.food_spawn = FoodSpawn::AvoidSnake;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!("Starting with {:?}", config);

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    info!("Bye");
    Ok(())
}
