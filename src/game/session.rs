use std::time::Duration;

use tracing::info;

use super::{
    clock::SpeedCurve,
    config::{GameConfig, SpeedMode},
    direction::Direction,
    engine::{GameEngine, TickResult, render},
    state::{GameState, GameStatus},
};
use crate::render::Display;

/// Timer a host should be running for the current game.
///
/// `epoch` changes on every start, so a restart at an unchanged period
/// still tells the host to replace its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub period: Duration,
    pub epoch: u64,
}

/// Owns at most one game and the display it draws to
pub struct GameSession<D: Display> {
    engine: GameEngine,
    curve: SpeedCurve,
    display: D,
    game: Option<GameState>,
    schedule: Option<Schedule>,
    epoch: u64,
}

impl<D: Display> GameSession<D> {
    /// Build a session holding a drawn, not yet started game
    pub fn new(config: GameConfig, mut display: D) -> Self {
        let engine = GameEngine::new(config);
        let curve = SpeedCurve::from_config(engine.config());
        let game = engine.new_game();
        render(&game, &mut display);

        Self {
            engine,
            curve,
            display,
            game: Some(game),
            schedule: None,
            epoch: 0,
        }
    }

    /// Replace any current game with a fresh one and run its first tick
    pub fn start(&mut self) -> TickResult {
        self.teardown();

        let mut game = self.engine.new_game();
        game.status = GameStatus::Running;
        self.display.clear_game_over_message();
        self.display.show_score(game.score);
        self.epoch += 1;
        info!(epoch = self.epoch, "game started");

        let result = self.engine.tick(&mut game, &mut self.display);
        if !result.game_over() {
            self.schedule = Some(Schedule {
                period: self.curve.interval(game.score),
                epoch: self.epoch,
            });
        }
        self.game = Some(game);
        result
    }

    /// Drop the current game; nothing runs until the next start
    pub fn stop(&mut self) {
        if self.teardown() {
            info!(epoch = self.epoch, "game stopped");
        }
    }

    fn teardown(&mut self) -> bool {
        self.schedule = None;
        self.game.take().is_some()
    }

    /// Timer callback: advance the running game, if any
    pub fn tick(&mut self) -> TickResult {
        let Some(game) = self.game.as_mut() else {
            return TickResult::default();
        };

        let result = self.engine.tick(game, &mut self.display);
        if result.game_over() {
            self.schedule = None;
        } else if let (SpeedMode::EveryTick, Some(schedule)) =
            (self.curve.mode, self.schedule.as_mut())
        {
            schedule.period = self.curve.interval(game.score);
        }
        result
    }

    /// Forward a turn request to the current game.
    ///
    /// Returns false when there is no game or the turn would reverse it.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        self.game
            .as_mut()
            .is_some_and(|game| game.set_pending_direction(direction))
    }

    pub fn velocity(&self) -> Option<Direction> {
        self.game.as_ref().map(GameState::velocity)
    }

    pub fn schedule(&self) -> Option<Schedule> {
        self.schedule
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn is_running(&self) -> bool {
        self.game.as_ref().is_some_and(GameState::is_running)
    }
}
