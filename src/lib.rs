//! Grid Snake - the state core of a grid-based snake game
//!
//! This library provides:
//! - Core game logic: grid, snake, movement and food placement (game module)
//! - Keyboard mapping to directions (input module)
//! - TUI rendering of the published grid (render module)
//! - An interactive terminal front-end (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
