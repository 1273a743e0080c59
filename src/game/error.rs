//! Error types for the game core
//!
//! `GameError` covers the terminal conditions reached while playing. None of
//! them is retried: each one ends the game until the engine is reset.
//! `ConfigError` covers rejected setups (grid size, initial snake).

use thiserror::Error;

use super::state::Position;

/// Terminal condition reached during play
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Head moved off the grid (game over)
    #[error("snake head left the grid at ({}, {})", .0.x, .0.y)]
    OutOfBounds(Position),

    /// Head moved into the snake's own body (game over)
    #[error("snake ran into itself at ({}, {})", .0.x, .0.y)]
    SelfCollision(Position),

    /// No free cell is left for food (win)
    #[error("no free cell left for food")]
    GridFull,
}

impl GameError {
    /// True for the win condition, false for the two game-over conditions
    pub fn is_win(&self) -> bool {
        matches!(self, GameError::GridFull)
    }
}

/// Rejected game setup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 1, got {0}")]
    InvalidGridSize(usize),

    #[error("snake must have at least one cell")]
    EmptySnake,

    #[error("snake cell ({}, {}) is outside a {size}x{size} grid", .position.x, .position.y)]
    SnakeOutOfBounds { position: Position, size: usize },

    #[error("snake occupies ({}, {}) more than once", .0.x, .0.y)]
    SnakeOverlaps(Position),
}
