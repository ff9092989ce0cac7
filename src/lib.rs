//! Grid Snake - Snake on a wrapping grid
//!
//! This library provides:
//! - Core game logic: grid wrapping, snake, apples, speed curve, session (game module)
//! - Display collaborators and the ratatui renderer (render module)
//! - Keyboard mapping (input module)
//! - Per-process play statistics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
