use tracing::{debug, info, trace};

use super::{
    apple::AppleSpawner,
    config::GameConfig,
    direction::Direction,
    grid::Grid,
    state::{GameState, GameStatus, Position, Snake},
};
use crate::render::Display;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Score the game ended with, if this tick ended it
    pub final_score: Option<u32>,
}

impl TickResult {
    pub fn game_over(&self) -> bool {
        self.final_score.is_some()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    spawner: AppleSpawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let grid = Grid::new(config.grid_size);
        let spawner = AppleSpawner::new(config.apple_placement, config.seed);
        Self {
            config,
            grid,
            spawner,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game with the snake at its starting cells
    pub fn new_game(&self) -> GameState {
        let snake = Snake::new(
            Position::new(self.config.start_x, self.config.start_y),
            Direction::Right,
            self.config.initial_snake_length,
        );
        GameState::new(snake, self.grid)
    }

    /// Advance a running game by one tick.
    ///
    /// Apple and collision checks look at the snake as the previous tick
    /// left it; the snake only moves after the frame is drawn.
    pub fn tick<D: Display + ?Sized>(
        &mut self,
        state: &mut GameState,
        display: &mut D,
    ) -> TickResult {
        let mut result = TickResult::default();
        if !state.is_running() {
            return result;
        }

        if state.head_on_apple() {
            state.score += 1;
            display.show_score(state.score);
            state.snake.grow(&state.grid);
            state.apple = None;
            result.ate_apple = true;
            debug!(score = state.score, length = state.snake.len(), "apple eaten");
        }

        if state.snake.is_self_collision() {
            result.final_score = Some(state.score);
            state.status = GameStatus::Over;
            display.show_game_over_message();
            state.score = 0;
        }

        if state.apple.is_none() {
            let apple = self.spawner.place(&state.grid, &state.snake);
            debug!(x = apple.x, y = apple.y, "apple placed");
            state.apple = Some(apple);
        }

        render(state, display);

        let direction = state.take_velocity();
        state.snake.advance(direction, &state.grid);
        state.ticks += 1;
        trace!(tick = state.ticks, head = ?state.snake.head(), "tick");
        if let Some(final_score) = result.final_score {
            info!(final_score, ticks = state.ticks, "game over");
        }

        result
    }
}

/// Draw the board, the snake and the apple on top
pub fn render<D: Display + ?Sized>(state: &GameState, display: &mut D) {
    display.draw_grid();
    display.draw_snake(&state.snake.body);
    if let Some(apple) = state.apple {
        display.draw_apple(apple);
    }
}
