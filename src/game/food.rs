//! Food placement on free cells

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::error::GameError;
use super::grid::Grid;
use super::state::{Position, Snake};

/// Places food uniformly at random on cells the snake does not cover
pub struct FoodPlacer<R: Rng = StdRng> {
    rng: R,
}

impl FoodPlacer<StdRng> {
    /// Deterministic placer, same seed gives the same food sequence
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FoodPlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Clear the old food and put new food on a cell outside the snake.
    ///
    /// Returns `GridFull` when the snake covers every cell; the old food flag
    /// is cleared in that case too.
    pub fn place_food(&mut self, grid: &mut Grid, snake: &Snake) -> Result<Position, GameError> {
        grid.set_food(None);

        let occupied = snake.occupancy();
        if occupied.len() >= grid.capacity() {
            info!(cells = occupied.len(), "grid is full, no room for food");
            return Err(GameError::GridFull);
        }

        let size = grid.size() as i32;
        let mut attempts = 0u32;
        let food = loop {
            attempts += 1;
            let pos = Position::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
            if !occupied.contains(&pos) {
                break pos;
            }
        };

        grid.set_food(Some(food));
        debug!(x = food.x, y = food.y, attempts, "food placed");
        Ok(food)
    }
}
