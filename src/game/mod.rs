//! Core game state for Snake
//!
//! Grid, snake, movement rules and food placement, with no I/O or rendering
//! dependencies. Front-ends feed it directions and read the published state.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod movement;
pub mod observable;
pub mod state;
pub mod sync;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, GameEvent, GameStatus, StepResult};
pub use error::{ConfigError, GameError};
pub use food::FoodPlacer;
pub use grid::{Grid, GridCell};
pub use movement::{MoveOutcome, advance};
pub use observable::Observable;
pub use state::{Position, Snake, SnakeCell};
pub use sync::synchronize;
