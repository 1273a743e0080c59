use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::state::Position;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Initial body, head first
    pub initial_snake: Vec<Position>,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            initial_snake: vec![Position::new(1, 1), Position::new(1, 2)],
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

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_snake(mut self, positions: Vec<Position>) -> Self {
        self.initial_snake = positions;
        self
    }

    /// Read a configuration from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse game config")?;
        config
            .validate()
            .with_context(|| format!("Invalid game config in {:?}", path))?;
        Ok(config)
    }

    /// Check the grid size and that the initial snake fits on the grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        if self.initial_snake.is_empty() {
            return Err(ConfigError::EmptySnake);
        }

        let mut seen = HashSet::new();
        for &position in &self.initial_snake {
            if position.to_index(self.grid_size).is_none() {
                return Err(ConfigError::SnakeOutOfBounds {
                    position,
                    size: self.grid_size,
                });
            }
            if !seen.insert(position) {
                return Err(ConfigError::SnakeOverlaps(position));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("grid_snake_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 10);
        assert_eq!(
            config.initial_snake,
            vec![Position::new(1, 1), Position::new(1, 2)]
        );
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15).with_seed(3);
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            GameConfig::new(0).validate(),
            Err(ConfigError::InvalidGridSize(0))
        );
        assert_eq!(
            GameConfig::new(2).validate(),
            Err(ConfigError::SnakeOutOfBounds {
                position: Position::new(1, 2),
                size: 2
            })
        );
        assert_eq!(
            GameConfig::new(5).with_snake(vec![]).validate(),
            Err(ConfigError::EmptySnake)
        );
        assert_eq!(
            GameConfig::new(5)
                .with_snake(vec![Position::new(0, 0), Position::new(0, 0)])
                .validate(),
            Err(ConfigError::SnakeOverlaps(Position::new(0, 0)))
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "grid_size": 12, "seed": 5 }"#).unwrap();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.initial_snake, GameConfig::default().initial_snake);
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("config");
        let config = GameConfig::new(6).with_snake(vec![Position::new(3, 3)]);
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid() {
        let path = temp_path("bad");
        std::fs::write(&path, r#"{ "grid_size": 0 }"#).unwrap();

        let result = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
