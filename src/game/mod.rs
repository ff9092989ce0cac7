//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal I/O. Drawing
//! and score display go through the traits in [`crate::render`], so the same
//! core can be driven by the terminal front end or by tests.

pub mod apple;
pub mod clock;
pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use apple::AppleSpawner;
pub use clock::SpeedCurve;
pub use config::{ApplePlacement, GameConfig, SpeedMode};
pub use direction::Direction;
pub use engine::{GameEngine, TickResult};
pub use grid::{Grid, wrap};
pub use session::{GameSession, Schedule};
pub use state::{GameState, GameStatus, Position, Snake};
