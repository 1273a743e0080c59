//! One step of snake movement as a pure function

use super::action::Direction;
use super::error::GameError;
use super::state::{Position, Snake};

/// Result of a movement request that did not end the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The snake moved one cell; `ate_food` means it grew this step
    Advanced { snake: Snake, ate_food: bool },
    /// Direction pointed back into the neck, input ignored
    Reversed,
}

/// Advance `snake` one cell towards `direction` on a `grid_size` square grid.
///
/// The new body is the new head followed by every old cell but the last; the
/// last cell is kept only when the new head lands on `food`. The input is
/// left untouched on error.
pub fn advance(
    snake: &Snake,
    direction: Direction,
    grid_size: usize,
    food: Option<Position>,
) -> Result<MoveOutcome, GameError> {
    let new_head = snake.head().moved_in_direction(direction);

    if snake.neck() == Some(new_head) {
        return Ok(MoveOutcome::Reversed);
    }

    if new_head.to_index(grid_size).is_none() {
        return Err(GameError::OutOfBounds(new_head));
    }

    let ate_food = food == Some(new_head);

    // The tail cell is vacated this step unless the snake grows
    let kept = if ate_food { snake.len() } else { snake.len() - 1 };
    let body = &snake.cells()[..kept];

    if body.iter().any(|cell| cell.position == new_head) {
        return Err(GameError::SelfCollision(new_head));
    }

    let positions = std::iter::once(new_head)
        .chain(body.iter().map(|cell| cell.position))
        .collect();

    Ok(MoveOutcome::Advanced {
        snake: Snake::from_positions(positions),
        ate_food,
    })
}
