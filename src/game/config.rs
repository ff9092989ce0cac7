use anyhow::{Context, Result, ensure};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted grid side; keeps coordinates in `i32` and the board on screen
pub const MAX_GRID_SIZE: usize = 1024;
/// Longest accepted tick interval, in milliseconds
pub const MAX_INTERVAL_MS: f64 = 60_000.0;

/// When the tick interval is recomputed from the score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedMode {
    /// Once per game, when it starts
    #[default]
    OnStart,
    /// After every tick, rescheduling the timer when it changes
    EveryTick,
}

/// How a new apple cell is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ApplePlacement {
    /// Uniform over the inner cells, snake or not
    #[default]
    Anywhere,
    /// Redraw a bounded number of times while the cell is on the snake
    AvoidSnake,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Starting head cell
    pub start_x: i32,
    pub start_y: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    // Timer
    /// Tick interval at score 0, in milliseconds
    pub base_duration_ms: f64,
    /// Lower bound for the tick interval, in milliseconds
    pub min_interval_ms: f64,
    pub speed_mode: SpeedMode,

    pub apple_placement: ApplePlacement,
    /// Fixed RNG seed for reproducible apple placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            start_x: 5,
            start_y: 5,
            initial_snake_length: 3,
            base_duration_ms: 200.0,
            min_interval_ms: 10.0,
            speed_mode: SpeedMode::OnStart,
            apple_placement: ApplePlacement::Anywhere,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(30)
    }

    /// Load a JSON config; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // leaves a non-empty apple range [1, N-1) and room to turn
        ensure!(
            self.grid_size >= 4,
            "grid size must be at least 4, got {}",
            self.grid_size
        );
        ensure!(
            self.grid_size <= MAX_GRID_SIZE,
            "grid size must be at most {MAX_GRID_SIZE}, got {}",
            self.grid_size
        );
        ensure!(
            (1..=self.grid_size).contains(&self.initial_snake_length),
            "initial snake length must be between 1 and the grid size, got {}",
            self.initial_snake_length
        );
        ensure!(
            self.base_duration_ms > 0.0 && self.base_duration_ms <= MAX_INTERVAL_MS,
            "base duration must be in (0, {MAX_INTERVAL_MS}] ms, got {}",
            self.base_duration_ms
        );
        ensure!(
            (1.0..=MAX_INTERVAL_MS).contains(&self.min_interval_ms),
            "minimum interval must be in [1, {MAX_INTERVAL_MS}] ms, got {}",
            self.min_interval_ms
        );

        let max = self.grid_size as i32 - 1;
        let tail_x = self.start_x - (self.initial_snake_length as i32 - 1);
        ensure!(
            (0..=max).contains(&self.start_y) && tail_x >= 0 && self.start_x <= max,
            "starting snake at ({}, {}) with length {} does not fit a {}x{} grid",
            self.start_x,
            self.start_y,
            self.initial_snake_length,
            self.grid_size,
            self.grid_size
        );
        Ok(())
    }
}
