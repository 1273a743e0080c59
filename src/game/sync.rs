//! Keeps the grid's occupancy flags in step with the snake.

use tracing::trace;

use super::grid::Grid;
use super::state::Snake;

/// Rewrite every `is_snake` flag from the snake's current body.
///
/// Must complete before anything reads the grid's occupancy, food
/// placement included.
pub fn synchronize(grid: &mut Grid, snake: &Snake) {
    grid.set_snake_cells(snake.positions());
    trace!(cells = snake.len(), "grid occupancy resynchronized");
}
