use anyhow::{Context, Result, anyhow};
use clap::Parser;
use grid_snake::game::{ApplePlacement, GameConfig, SpeedMode};
use grid_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a wrapping grid")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square grid
    #[arg(long)]
    grid_size: Option<usize>,

    /// Tick interval at score 0, in milliseconds
    #[arg(long)]
    base_duration_ms: Option<f64>,

    /// Shortest allowed tick interval, in milliseconds
    #[arg(long)]
    min_interval_ms: Option<f64>,

    /// When the tick interval follows the score
    #[arg(long, value_enum)]
    speed_mode: Option<SpeedMode>,

    /// Where new apples may appear
    #[arg(long, value_enum)]
    apple_placement: Option<ApplePlacement>,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is busy with the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, default_value = "info")]
    log_level: Level,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(base_duration_ms) = self.base_duration_ms {
            config.base_duration_ms = base_duration_ms;
        }
        if let Some(min_interval_ms) = self.min_interval_ms {
            config.min_interval_ms = min_interval_ms;
        }
        if let Some(speed_mode) = self.speed_mode {
            config.speed_mode = speed_mode;
        }
        if let Some(apple_placement) = self.apple_placement {
            config.apple_placement = apple_placement;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(path: Option<&Path>, level: Level) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("Failed to install log subscriber: {err}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref(), cli.log_level)?;

    // Create game configuration from file and CLI arguments
    let config = cli.game_config()?;
    info!(?config, "starting");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
