use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::error::ConfigError;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Grid indices for this position, if it lies inside a `size x size` grid
    pub fn to_index(&self, size: usize) -> Option<(usize, usize)> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        (x < size && y < size).then_some((x, y))
    }
}

/// One segment of the snake body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeCell {
    pub position: Position,
    pub is_head: bool,
    pub is_tail: bool,
}

/// The snake in the game
///
/// `cells` is the source of truth: ordered head to tail, coordinates
/// mutually distinct. A single-cell snake is both head and tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Informational length, grows by one per food eaten
    pub length: usize,
    cells: Vec<SnakeCell>,
}

impl Snake {
    /// Create a snake from positions ordered head to tail
    pub fn new(positions: Vec<Position>) -> Result<Self, ConfigError> {
        if positions.is_empty() {
            return Err(ConfigError::EmptySnake);
        }

        let mut seen = HashSet::with_capacity(positions.len());
        for pos in &positions {
            if !seen.insert(*pos) {
                return Err(ConfigError::SnakeOverlaps(*pos));
            }
        }

        Ok(Self::from_positions(positions))
    }

    /// Create a straight snake whose head faces `heading`, body trailing behind
    pub fn straight(
        head: Position,
        heading: Direction,
        length: usize,
    ) -> Result<Self, ConfigError> {
        let back = heading.opposite();
        let positions =
            std::iter::successors(Some(head), |pos| Some(pos.moved_in_direction(back)))
                .take(length)
                .collect();

        Self::new(positions)
    }

    /// Build from positions already known to be non-empty and distinct
    pub(crate) fn from_positions(positions: Vec<Position>) -> Self {
        let last = positions.len().saturating_sub(1);
        let cells: Vec<SnakeCell> = positions
            .into_iter()
            .enumerate()
            .map(|(i, position)| SnakeCell {
                position,
                is_head: i == 0,
                is_tail: i == last,
            })
            .collect();

        Self {
            length: cells.len(),
            cells,
        }
    }

    /// Body segments ordered head to tail
    pub fn cells(&self) -> &[SnakeCell] {
        &self.cells
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.cells[0].position
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.cells[self.cells.len() - 1].position
    }

    /// Position of the segment right behind the head, if any
    pub fn neck(&self) -> Option<Position> {
        self.cells.get(1).map(|cell| cell.position)
    }

    /// Positions ordered head to tail
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|cell| cell.position)
    }

    /// Set of coordinates covered by the body
    pub fn occupancy(&self) -> HashSet<Position> {
        self.positions().collect()
    }

    /// Check if a position is covered by any segment, head included
    pub fn contains(&self, pos: Position) -> bool {
        self.positions().any(|p| p == pos)
    }

    /// Get the number of segments
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a snake built through `new`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
